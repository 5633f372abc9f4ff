// ---------------------------------------------------------------------------
// Spectrum – one MS1 scan from the source file
// ---------------------------------------------------------------------------

/// A single MS1 mass spectrum (one scan of the source mzML file).
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Retention time in minutes, as recorded in the scan metadata.
    pub rt_minutes: f64,
    /// m/z axis, ascending – same length as `intensity`.
    pub mz: Vec<f64>,
    /// Intensity axis – same length as `mz`.
    pub intensity: Vec<f64>,
    /// Whether the scan was acquired in profile mode (continuous signal)
    /// rather than centroid mode (discrete peaks).
    pub profile: bool,
}

impl Spectrum {
    /// Number of (m/z, intensity) points in the scan.
    pub fn peak_count(&self) -> usize {
        self.mz.len()
    }

    /// Sum of all intensities – this scan's contribution to the TIC.
    pub fn total_intensity(&self) -> f64 {
        self.intensity.iter().sum()
    }
}

// ---------------------------------------------------------------------------
// TicPoint – one point of the total ion chromatogram
// ---------------------------------------------------------------------------

/// One (retention time, summed intensity) point of the TIC series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TicPoint {
    pub rt_minutes: f64,
    pub total_intensity: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// The full parsed file: MS1 scans in retention-time order plus the TIC
/// series derived from them. `tic[i]` always refers to `spectra[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// File name shown in the UI (final path component).
    pub name: String,
    /// Full path the file was loaded from.
    pub path: String,
    /// All MS1 scans, ascending by retention time.
    pub spectra: Vec<Spectrum>,
    /// Total ion chromatogram, one point per scan, same order.
    pub tic: Vec<TicPoint>,
}

impl Dataset {
    /// Sort the scans into retention-time order and derive the TIC.
    pub fn from_spectra(name: String, path: String, mut spectra: Vec<Spectrum>) -> Self {
        spectra.sort_by(|a, b| a.rt_minutes.total_cmp(&b.rt_minutes));
        let tic = spectra
            .iter()
            .map(|sp| TicPoint {
                rt_minutes: sp.rt_minutes,
                total_intensity: sp.total_intensity(),
            })
            .collect();
        Dataset {
            name,
            path,
            spectra,
            tic,
        }
    }

    /// Number of scans.
    pub fn len(&self) -> usize {
        self.spectra.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.spectra.is_empty()
    }

    /// First and last retention time, in minutes.
    pub fn rt_range(&self) -> Option<(f64, f64)> {
        match (self.tic.first(), self.tic.last()) {
            (Some(first), Some(last)) => Some((first.rt_minutes, last.rt_minutes)),
            _ => None,
        }
    }
}
