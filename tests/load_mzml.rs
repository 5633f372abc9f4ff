//! Round-trip tests: write a small mzML file with `mzdata`, then load it
//! through the browser's loader and drive the selection helpers on the result.

use std::fs::File;
use std::path::{Path, PathBuf};

use mzdata::io::mzml::MzMLWriterType;
use mzdata::prelude::*;
use mzdata::spectrum::{
    ArrayType, BinaryArrayMap, BinaryDataArrayType, DataArray, MultiLayerSpectrum, ScanEvent,
    ScanPolarity, SignalContinuity, SpectrumDescription,
};
use mzpeaks::{CentroidPeak, DeconvolutedPeak};

use mzml_browser::data::loader::{load_mzml, LoadError};
use mzml_browser::data::select::{nearest_rt_index, top_peaks, MAX_PEAK_LABELS};

fn synthetic_spectrum(
    index: usize,
    rt_minutes: f64,
    ms_level: u8,
    continuity: SignalContinuity,
    mzs: &[f64],
    intensities: &[f32],
) -> MultiLayerSpectrum {
    let mut descr = SpectrumDescription::default();
    descr.index = index;
    descr.id = format!("scan={}", index + 1);
    descr.ms_level = ms_level;
    descr.polarity = ScanPolarity::Positive;
    descr.signal_continuity = continuity;

    let mut event = ScanEvent::default();
    event.start_time = rt_minutes;
    descr.acquisition.scans.push(event);

    let mut arrays = BinaryArrayMap::new();
    arrays.add(DataArray::wrap(
        &ArrayType::MZArray,
        BinaryDataArrayType::Float64,
        mzs.iter().flat_map(|v| v.to_le_bytes()).collect(),
    ));
    arrays.add(DataArray::wrap(
        &ArrayType::IntensityArray,
        BinaryDataArrayType::Float32,
        intensities.iter().flat_map(|v| v.to_le_bytes()).collect(),
    ));

    MultiLayerSpectrum::from_arrays_and_description(arrays, descr)
}

fn write_mzml(path: &Path, spectra: &[MultiLayerSpectrum]) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut writer = MzMLWriterType::<File, CentroidPeak, DeconvolutedPeak>::new(file);
    for spectrum in spectra {
        writer.write_spectrum(spectrum)?;
    }
    writer.close()?;
    Ok(())
}

/// Three MS1 scans written out of retention-time order, with two MS2 scans
/// interleaved. Totals per MS1 scan: RT 1.0 -> 10, RT 2.0 -> 50, RT 3.0 -> 5.
fn scenario_file(dir: &Path) -> PathBuf {
    let path = dir.join("scenario.mzML");
    let spectra = vec![
        synthetic_spectrum(
            0,
            2.0,
            1,
            SignalContinuity::Centroid,
            &[200.0, 210.0],
            &[20.0, 30.0],
        ),
        synthetic_spectrum(1, 2.1, 2, SignalContinuity::Centroid, &[55.0], &[5.0]),
        synthetic_spectrum(
            2,
            1.0,
            1,
            SignalContinuity::Profile,
            &[100.0, 110.0],
            &[4.0, 6.0],
        ),
        synthetic_spectrum(3, 1.1, 2, SignalContinuity::Centroid, &[66.0], &[6.0]),
        synthetic_spectrum(
            4,
            3.0,
            1,
            SignalContinuity::Centroid,
            &[300.0, 310.0],
            &[2.0, 3.0],
        ),
    ];
    write_mzml(&path, &spectra).unwrap();
    path
}

#[test]
fn loads_only_ms1_scans_in_rt_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = scenario_file(dir.path());

    let dataset = load_mzml(&path).unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.tic.len(), dataset.spectra.len());
    assert_eq!(dataset.name, "scenario.mzML");

    let rts: Vec<f64> = dataset.tic.iter().map(|p| p.rt_minutes).collect();
    for (got, want) in rts.iter().zip([1.0, 2.0, 3.0]) {
        assert!((got - want).abs() < 1e-9, "rt {got} != {want}");
    }

    // Sorting must keep each scan's peak data paired with its retention time.
    assert_eq!(dataset.spectra[0].mz, vec![100.0, 110.0]);
    assert_eq!(dataset.spectra[1].mz, vec![200.0, 210.0]);
    let totals: Vec<f64> = dataset.tic.iter().map(|p| p.total_intensity).collect();
    assert_eq!(totals, vec![10.0, 50.0, 5.0]);

    let profiles: Vec<bool> = dataset.spectra.iter().map(|s| s.profile).collect();
    assert_eq!(profiles, vec![true, false, false]);
}

#[test]
fn click_selection_maps_times_to_scan_indices() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = load_mzml(&scenario_file(dir.path())).unwrap();

    // Exact hits land on their own scan.
    assert_eq!(nearest_rt_index(&dataset.tic, 2.0), Some(1));
    // 1.9 is closer to 2.0 than to 1.0.
    assert_eq!(nearest_rt_index(&dataset.tic, 1.9), Some(1));
    // Clicks outside the acquired range clamp to the nearest end.
    assert_eq!(nearest_rt_index(&dataset.tic, 0.2), Some(0));
    assert_eq!(nearest_rt_index(&dataset.tic, 99.0), Some(2));
}

#[test]
fn top_peaks_ranks_loaded_centroids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("centroids.mzML");
    let mzs: Vec<f64> = (0..12).map(|i| 100.0 + i as f64 * 10.0).collect();
    let intensities: Vec<f32> = vec![
        5.0, 300.0, 40.0, 300.0, 25.0, 90.0, 12.0, 61.0, 33.0, 8.0, 2.0, 70.0,
    ];
    let spectra = vec![synthetic_spectrum(
        0,
        4.0,
        1,
        SignalContinuity::Centroid,
        &mzs,
        &intensities,
    )];
    write_mzml(&path, &spectra).unwrap();

    let dataset = load_mzml(&path).unwrap();
    let scan = &dataset.spectra[0];
    let top = top_peaks(&scan.mz, &scan.intensity, MAX_PEAK_LABELS);

    assert_eq!(top.len(), MAX_PEAK_LABELS);
    // Intensity descending, with the 300-count tie broken toward lower m/z.
    assert_eq!(top, vec![1, 3, 5, 11, 7, 2, 8, 4, 6, 9]);
}

#[test]
fn loading_the_same_file_twice_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = scenario_file(dir.path());

    let first = load_mzml(&path).unwrap();
    let second = load_mzml(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_scan_loads_with_zero_peaks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty_scan.mzML");
    let spectra = vec![synthetic_spectrum(
        0,
        1.5,
        1,
        SignalContinuity::Centroid,
        &[],
        &[],
    )];
    write_mzml(&path, &spectra).unwrap();

    let dataset = load_mzml(&path).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.spectra[0].peak_count(), 0);
    assert_eq!(dataset.tic[0].total_intensity, 0.0);
}

#[test]
fn file_without_ms1_scans_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ms2_only.mzML");
    let spectra = vec![
        synthetic_spectrum(0, 1.0, 2, SignalContinuity::Centroid, &[55.0], &[5.0]),
        synthetic_spectrum(1, 2.0, 2, SignalContinuity::Centroid, &[66.0], &[6.0]),
    ];
    write_mzml(&path, &spectra).unwrap();

    let err = load_mzml(&path).unwrap_err();
    assert!(matches!(err, LoadError::NoMs1Spectra { .. }));
    assert!(err.to_string().contains("ms2_only.mzML"));
}

#[test]
fn missing_file_is_reported_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.mzML");

    let err = load_mzml(&path).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert!(err.to_string().contains("does_not_exist.mzML"));
}
