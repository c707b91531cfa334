//! Model input container.
//!
//! [`CouplingInputs`] bundles every argument of the windowed heart-brain
//! coupling routine in one place, so the validation gate and the axis
//! derivation always see the same, fully-specified set of arrays.

use ndarray::{Array1, Array2};

/// Inputs to the windowed heart-brain coupling model.
///
/// All fields are `pub` so a bundle can be assembled directly from arrays
/// already in memory:
///
/// ```
/// use hbc::CouplingInputs;
/// use ndarray::{Array1, Array2};
///
/// let t = 1200;
/// let fs = 4.0;
/// let inputs = CouplingInputs {
///     eeg_power: Array2::from_elem((8, t), 1.0),
///     ibi: Array1::from_elem(300, 0.85),
///     t_ibi: Array1::from_iter((0..300).map(|k| 0.85 * k as f64)),
///     csi: Array1::from_elem(t, 2.0),
///     cvi: Array1::from_elem(t, 5.0),
///     fs,
///     time: Array1::from_iter((0..t).map(|i| i as f64 / fs)),
///     wind: 15.0,
/// };
/// assert_eq!(inputs.window_samples(), 60);
/// ```
///
/// Bundles recorded on the Python side are loaded from safetensors files
/// with [`crate::io::load_inputs`].
#[derive(Debug, Clone)]
pub struct CouplingInputs {
    /// Time-varying band power per EEG channel, shape `[C, T]`.
    ///
    /// Columns align to [`CouplingInputs::time`]. Finite values expected.
    pub eeg_power: Array2<f64>,

    /// Raw (non-interpolated) inter-beat intervals in seconds, shape `[M]`.
    ///
    /// `ibi[k]` is the interval between R-peaks `k` and `k + 1`; every value
    /// must be positive.
    pub ibi: Array1<f64>,

    /// Timestamp in seconds of each inter-beat interval, shape `[M]`.
    ///
    /// Commonly the time of the first R-peak of the interval. Must be
    /// strictly increasing.
    pub t_ibi: Array1<f64>,

    /// Cardiac Sympathetic Index sampled at [`CouplingInputs::fs`], shape
    /// `[T]`, aligned to [`CouplingInputs::time`].
    pub csi: Array1<f64>,

    /// Cardiac Vagal Index sampled at [`CouplingInputs::fs`], shape `[T]`,
    /// aligned to [`CouplingInputs::time`].
    pub cvi: Array1<f64>,

    /// Sampling rate in Hz shared by `eeg_power` columns, `csi`, `cvi`, and
    /// `time`.
    pub fs: f64,

    /// Time vector in seconds, shape `[T]`, strictly increasing.
    pub time: Array1<f64>,

    /// Analysis window length in seconds (e.g. `15.0`).
    pub wind: f64,
}

impl CouplingInputs {
    /// Number of EEG channels (`C`, rows of `eeg_power`).
    pub fn n_channels(&self) -> usize {
        self.eeg_power.nrows()
    }

    /// Number of time samples (`T`, columns of `eeg_power`).
    pub fn n_times(&self) -> usize {
        self.eeg_power.ncols()
    }

    /// Window length in samples: `round(wind * fs)`.
    ///
    /// Returned signed so callers can observe a degenerate zero or negative
    /// window before validation rejects it. At `wind = 15 s`, `fs = 4 Hz`
    /// this is **60**.
    pub fn window_samples(&self) -> i64 {
        (self.wind * self.fs).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2};

    fn with_window(fs: f64, wind: f64) -> CouplingInputs {
        CouplingInputs {
            eeg_power: Array2::zeros((1, 4)),
            ibi: Array1::zeros(1),
            t_ibi: Array1::zeros(1),
            csi: Array1::zeros(4),
            cvi: Array1::zeros(4),
            fs,
            time: Array1::zeros(4),
            wind,
        }
    }

    #[test]
    fn window_samples_rounds_to_nearest() {
        assert_eq!(with_window(4.0, 15.0).window_samples(), 60);
        // 4 Hz * 0.9 s = 3.6 samples -> 4
        assert_eq!(with_window(4.0, 0.9).window_samples(), 4);
        // half-sample case rounds away from zero, as MATLAB round does
        assert_eq!(with_window(4.0, 0.875).window_samples(), 4);
    }

    #[test]
    fn window_samples_can_degenerate_to_zero() {
        assert_eq!(with_window(4.0, 0.05).window_samples(), 0);
    }
}
