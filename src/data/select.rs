use super::model::TicPoint;

/// How many peaks of a spectrum get an m/z label.
pub const MAX_PEAK_LABELS: usize = 10;

// ---------------------------------------------------------------------------
// Nearest-scan lookup for TIC clicks
// ---------------------------------------------------------------------------

/// Index of the scan whose retention time is closest to `rt`.
///
/// `tic` must be sorted ascending by retention time (the loader guarantees
/// this), so the lookup is a binary search plus one neighbour comparison:
/// * `rt` before the first scan or after the last → clamped to that endpoint
/// * `rt` exactly on a stored time → that scan
/// * `rt` equidistant between two scans → the earlier one
pub fn nearest_rt_index(tic: &[TicPoint], rt: f64) -> Option<usize> {
    if tic.is_empty() {
        return None;
    }
    let right = tic.partition_point(|p| p.rt_minutes < rt);
    if right == 0 {
        return Some(0);
    }
    if right == tic.len() {
        return Some(tic.len() - 1);
    }
    let left = right - 1;
    if rt - tic[left].rt_minutes <= tic[right].rt_minutes - rt {
        Some(left)
    } else {
        Some(right)
    }
}

// ---------------------------------------------------------------------------
// Top-peak ranking for spectrum labels
// ---------------------------------------------------------------------------

/// Indices of the `limit` highest-intensity points, ranked descending.
///
/// `mz` and `intensity` must have the same length. Intensity ties are broken
/// by lower m/z so the ranking is deterministic. With fewer than `limit`
/// points, every index is returned.
pub fn top_peaks(mz: &[f64], intensity: &[f64], limit: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..mz.len()).collect();
    order.sort_by(|&a, &b| {
        intensity[b]
            .total_cmp(&intensity[a])
            .then(mz[a].total_cmp(&mz[b]))
    });
    order.truncate(limit);
    order
}
