/// Shared builders for well-formed model inputs.
use hbc::CouplingInputs;
use ndarray::{Array1, Array2};

#[allow(unused)]
/// A structurally valid bundle: `c` channels, `t` samples at `fs` Hz,
/// `m` beats, `wind`-second window.
pub fn valid_inputs(c: usize, t: usize, m: usize, fs: f64, wind: f64) -> CouplingInputs {
    CouplingInputs {
        eeg_power: Array2::from_shape_fn((c, t), |(ch, i)| {
            1.0 + 0.5 * (ch as f64 * 3.7 + i as f64 * 0.1).sin().abs()
        }),
        ibi: Array1::from_shape_fn(m, |k| 0.8 + 0.05 * (k as f64 * 0.3).sin()),
        t_ibi: Array1::from_shape_fn(m, |k| 0.9 * k as f64),
        csi: Array1::from_shape_fn(t, |i| 2.0 + (i as f64 * 0.01).cos()),
        cvi: Array1::from_shape_fn(t, |i| 5.0 + (i as f64 * 0.02).sin()),
        fs,
        time: Array1::from_shape_fn(t, |i| i as f64 / fs),
        wind,
    }
}

#[allow(unused)]
/// The default test recording: 8 channels, 5 minutes at 4 Hz, 300 beats,
/// 15 s window (Ws = 60 samples).
pub fn default_inputs() -> CouplingInputs {
    valid_inputs(8, 1200, 300, 4.0, 15.0)
}
