use crate::data::model::{Dataset, Spectrum};
use crate::data::select::nearest_rt_index;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<Dataset>,

    /// Index of the selected scan in `dataset.spectra`.
    pub selected: Option<usize>,

    /// Status / error message shown in the UI; cleared when the
    /// selection changes so the selection summary shows instead.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    /// Re-fit the TIC plot to its data on the next frame.
    pub reset_tic_view: bool,

    /// Re-fit the spectrum plot to its data on the next frame.
    pub reset_spectrum_view: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selected: None,
            status_message: None,
            loading: false,
            reset_tic_view: false,
            reset_spectrum_view: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: select the middle scan so the
    /// spectrum panel is never empty, and re-fit both plots.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selected = if dataset.is_empty() {
            None
        } else {
            Some(dataset.len() / 2)
        };
        self.status_message = Some(format!(
            "Loaded {} - {} MS1 spectra",
            dataset.name,
            dataset.len()
        ));
        self.dataset = Some(dataset);
        self.loading = false;
        self.reset_tic_view = true;
        self.reset_spectrum_view = true;
    }

    /// Select the scan whose retention time is nearest to a clicked
    /// x-coordinate. Clicks outside the loaded time range clamp to the
    /// first or last scan.
    pub fn select_nearest_rt(&mut self, rt: f64) {
        let Some(ds) = &self.dataset else { return };
        if let Some(index) = nearest_rt_index(&ds.tic, rt) {
            self.select(index);
        }
    }

    /// Select a scan by index. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        let Some(ds) = &self.dataset else { return };
        if index >= ds.len() {
            return;
        }
        if self.selected != Some(index) {
            self.selected = Some(index);
            self.status_message = None;
            self.reset_spectrum_view = true;
        }
    }

    /// Step the selection by `delta` scans, saturating at either end.
    pub fn step_selection(&mut self, delta: isize) {
        let Some(ds) = &self.dataset else { return };
        let Some(current) = self.selected else { return };
        let last = ds.len().saturating_sub(1);
        let next = current.saturating_add_signed(delta).min(last);
        self.select(next);
    }

    /// The currently selected scan, if any.
    pub fn selected_spectrum(&self) -> Option<&Spectrum> {
        let ds = self.dataset.as_ref()?;
        ds.spectra.get(self.selected?)
    }
}
