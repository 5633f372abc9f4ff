use std::fs::File;

use mzdata::io::mzml::MzMLWriterType;
use mzdata::prelude::*;
use mzdata::spectrum::{
    ArrayType, BinaryArrayMap, BinaryDataArrayType, DataArray, MultiLayerSpectrum, ScanEvent,
    ScanPolarity, SignalContinuity, SpectrumDescription,
};
use mzpeaks::{CentroidPeak, DeconvolutedPeak};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One eluting compound: a Gaussian elution profile around `rt_minutes`
/// and a Gaussian mass peak around `mz`.
struct Compound {
    mz: f64,
    rt_minutes: f64,
    rt_sigma: f64,
    abundance: f64,
}

const MZ_SIGMA: f64 = 0.08;
const NOISE_LEVEL: f64 = 150.0;

/// Intensity of every compound at retention time `rt`, sampled over the
/// profile m/z grid, with additive detector noise.
fn profile_scan(grid: &[f64], compounds: &[Compound], rt: f64, rng: &mut SimpleRng) -> Vec<f32> {
    grid.iter()
        .map(|&mz| {
            let signal: f64 = compounds
                .iter()
                .map(|c| {
                    let elution = gaussian(rt, c.rt_minutes, c.rt_sigma, c.abundance);
                    gaussian(mz, c.mz, MZ_SIGMA, elution)
                })
                .sum();
            (signal + rng.gauss(0.0, NOISE_LEVEL)).max(0.0) as f32
        })
        .collect()
}

fn build_spectrum(
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

fn main() {
    let mut rng = SimpleRng::new(42);

    // m/z grid: 150 → 800, step 0.25
    let grid: Vec<f64> = (0..2601).map(|i| 150.0 + i as f64 * 0.25).collect();

    let compounds = [
        Compound {
            mz: 212.10,
            rt_minutes: 2.4,
            rt_sigma: 0.35,
            abundance: 8.0e5,
        },
        Compound {
            mz: 371.15,
            rt_minutes: 5.1,
            rt_sigma: 0.50,
            abundance: 2.2e6,
        },
        Compound {
            mz: 524.30,
            rt_minutes: 7.8,
            rt_sigma: 0.60,
            abundance: 1.4e6,
        },
        Compound {
            mz: 680.45,
            rt_minutes: 9.6,
            rt_sigma: 0.40,
            abundance: 5.0e5,
        },
    ];

    let n_ms1 = 60;
    let rt_step = 0.2;

    let mut spectra = Vec::new();
    let mut index = 0;
    for i in 0..n_ms1 {
        let rt = 0.2 + i as f64 * rt_step;
        let intensities = profile_scan(&grid, &compounds, rt, &mut rng);
        spectra.push(build_spectrum(
            index,
            rt,
            1,
            SignalContinuity::Profile,
            &grid,
            &intensities,
        ));
        index += 1;

        // One centroided MS2 after each survey scan; the browser must skip
        // these when building the TIC.
        let precursor = compounds
            .iter()
            .max_by(|a, b| {
                gaussian(rt, a.rt_minutes, a.rt_sigma, a.abundance)
                    .total_cmp(&gaussian(rt, b.rt_minutes, b.rt_sigma, b.abundance))
            })
            .unwrap();
        let elution = gaussian(rt, precursor.rt_minutes, precursor.rt_sigma, precursor.abundance);
        let fragment_mzs: Vec<f64> = [0.30, 0.45, 0.62, 0.81]
            .iter()
            .map(|f| precursor.mz * f)
            .collect();
        let fragment_ints: Vec<f32> = [0.2, 0.6, 1.0, 0.35]
            .iter()
            .map(|&f| (f * (elution * 0.1 + 50.0)) as f32)
            .collect();
        spectra.push(build_spectrum(
            index,
            rt + rt_step * 0.5,
            2,
            SignalContinuity::Centroid,
            &fragment_mzs,
            &fragment_ints,
        ));
        index += 1;
    }

    let output_path = "sample_data.mzML";
    let file = File::create(output_path).expect("Failed to create output file");
    let mut writer = MzMLWriterType::<File, CentroidPeak, DeconvolutedPeak>::new(file);
    for spectrum in &spectra {
        writer.write_spectrum(spectrum).expect("Failed to write spectrum");
    }
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} scans ({n_ms1} MS1, {} m/z points each) to {output_path}",
        spectra.len(),
        grid.len()
    );
}
