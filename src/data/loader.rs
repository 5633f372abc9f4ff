use std::io;
use std::path::Path;

use mzdata::prelude::*;
use mzdata::spectrum::bindata::ArrayRetrievalError;
use mzdata::spectrum::SignalContinuity;
use thiserror::Error;

use super::model::{Dataset, Spectrum};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why an mzML file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or is not recognizable mzML.
    #[error("could not open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    /// A scan's binary data section could not be decoded.
    #[error("scan '{id}' has unreadable peak arrays: {source}")]
    PeakArrays {
        id: String,
        #[source]
        source: ArrayRetrievalError,
    },
    /// A scan's m/z and intensity arrays disagree in length.
    #[error("scan '{id}': m/z has {mzs} values but intensity has {intensities}")]
    MismatchedArrays {
        id: String,
        mzs: usize,
        intensities: usize,
    },
    /// The file parsed but holds nothing this viewer can show.
    #[error("no MS1 spectra found in '{path}'")]
    NoMs1Spectra { path: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load all MS1 scans of an mzML file into a [`Dataset`].
///
/// * MS2 and higher-level scans are skipped entirely.
/// * Scans are sorted into retention-time order and the TIC series is
///   derived from them, so the dataset invariants hold for any file order.
/// * Retention times are kept in minutes as the scan metadata reports them.
pub fn load_mzml(path: &Path) -> Result<Dataset, LoadError> {
    let reader = mzdata::MZReader::open_path(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut spectra = Vec::new();
    for scan in reader {
        if scan.ms_level() != 1 {
            continue;
        }

        let rt_minutes = scan.start_time();
        let profile = scan.signal_continuity() == SignalContinuity::Profile;

        let (mz, intensity) = match scan.arrays.as_ref() {
            Some(arrays) => {
                let mzs = arrays.mzs().map_err(|source| LoadError::PeakArrays {
                    id: scan.id().to_string(),
                    source,
                })?;
                let ints = arrays
                    .intensities()
                    .map_err(|source| LoadError::PeakArrays {
                        id: scan.id().to_string(),
                        source,
                    })?;
                if mzs.len() != ints.len() {
                    return Err(LoadError::MismatchedArrays {
                        id: scan.id().to_string(),
                        mzs: mzs.len(),
                        intensities: ints.len(),
                    });
                }
                (mzs.to_vec(), ints.iter().map(|&v| v as f64).collect())
            }
            None => (Vec::new(), Vec::new()),
        };

        spectra.push(Spectrum {
            rt_minutes,
            mz,
            intensity,
            profile,
        });
    }

    if spectra.is_empty() {
        return Err(LoadError::NoMs1Spectra {
            path: path.display().to_string(),
        });
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unnamed>")
        .to_string();
    Ok(Dataset::from_spectra(
        name,
        path.display().to_string(),
        spectra,
    ))
}
