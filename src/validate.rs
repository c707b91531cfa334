//! Input validation gate.
//!
//! Every invariant the windowed coupling model relies on is checked up
//! front, in a fixed order, so a broken bundle fails loudly and
//! deterministically before any analysis work starts.

use ndarray::ArrayView1;
use thiserror::Error;

use crate::inputs::CouplingInputs;

/// A violated input invariant.
///
/// One variant per failure class; the `name` fields carry the offending
/// input so messages can be surfaced to a user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// An input array has no elements.
    #[error("{name} must be non-empty")]
    Empty { name: &'static str },

    /// An input array contains NaN or infinity.
    #[error("{name} contains NaN or Inf")]
    NonFinite { name: &'static str },

    /// `fs` or `wind` is not a positive finite number.
    #[error("{name} must be a positive finite scalar")]
    NonPositiveScalar { name: &'static str },

    /// A per-sample array does not match the time dimension of `eeg_power`.
    #[error("{name} must have length {expected} (time dimension of eeg_power), got {got}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    /// `ibi` and `t_ibi` disagree in length.
    #[error("ibi and t_ibi must have the same length (ibi: {ibi}, t_ibi: {t_ibi})")]
    IbiLengthMismatch { ibi: usize, t_ibi: usize },

    /// A time axis is not strictly increasing.
    #[error("{name} must be strictly increasing")]
    NotIncreasing { name: &'static str },

    /// An inter-beat interval is zero or negative.
    #[error("ibi[{index}] = {value} s; inter-beat intervals must be positive")]
    NonPositiveIbi { index: usize, value: f64 },

    /// `round(wind * fs)` comes out below one sample.
    #[error("wind * fs must span at least one sample (got {ws})")]
    WindowTooShort { ws: i64 },

    /// The recording cannot fit the directional windows: `T <= 2 * Ws`.
    #[error("recording too short: a {ws}-sample window needs more than {min} samples, got {t}")]
    RecordingTooShort { t: usize, ws: usize, min: usize },
}

/// Check that `inputs` satisfies every invariant of the coupling model.
///
/// Checks run in a fixed order: emptiness and finiteness per array (in the
/// order `eeg_power`, `ibi`, `t_ibi`, `csi`, `cvi`, `time`), then the `fs`
/// and `wind` scalars, per-sample lengths against `T`, the `ibi`/`t_ibi`
/// pairing, monotonicity, IBI positivity, and finally the window
/// arithmetic `Ws = round(wind * fs) >= 1`, `T > 2 * Ws`.
pub fn validate(inputs: &CouplingInputs) -> Result<(), InputError> {
    check_values("eeg_power", inputs.eeg_power.iter())?;
    check_values("ibi", inputs.ibi.iter())?;
    check_values("t_ibi", inputs.t_ibi.iter())?;
    check_values("csi", inputs.csi.iter())?;
    check_values("cvi", inputs.cvi.iter())?;
    check_values("time", inputs.time.iter())?;

    for (name, v) in [("fs", inputs.fs), ("wind", inputs.wind)] {
        if !v.is_finite() || v <= 0.0 {
            return Err(InputError::NonPositiveScalar { name });
        }
    }

    let t = inputs.n_times();
    for (name, got) in [
        ("csi", inputs.csi.len()),
        ("cvi", inputs.cvi.len()),
        ("time", inputs.time.len()),
    ] {
        if got != t {
            return Err(InputError::LengthMismatch {
                name,
                expected: t,
                got,
            });
        }
    }
    if inputs.ibi.len() != inputs.t_ibi.len() {
        return Err(InputError::IbiLengthMismatch {
            ibi: inputs.ibi.len(),
            t_ibi: inputs.t_ibi.len(),
        });
    }

    for (name, axis) in [("time", &inputs.time), ("t_ibi", &inputs.t_ibi)] {
        if !strictly_increasing(axis.view()) {
            return Err(InputError::NotIncreasing { name });
        }
    }
    if let Some((index, &value)) = inputs.ibi.iter().enumerate().find(|(_, &v)| v <= 0.0) {
        return Err(InputError::NonPositiveIbi { index, value });
    }

    let ws = inputs.window_samples();
    if ws < 1 {
        return Err(InputError::WindowTooShort { ws });
    }
    let ws = ws as usize;
    if t <= 2 * ws {
        return Err(InputError::RecordingTooShort {
            t,
            ws,
            min: 2 * ws,
        });
    }

    Ok(())
}

/// Reject an array that is empty or holds a non-finite value.
fn check_values<'a, I>(name: &'static str, values: I) -> Result<(), InputError>
where
    I: IntoIterator<Item = &'a f64>,
{
    let mut seen = false;
    for v in values {
        seen = true;
        if !v.is_finite() {
            return Err(InputError::NonFinite { name });
        }
    }
    if !seen {
        return Err(InputError::Empty { name });
    }
    Ok(())
}

/// `x[i+1] > x[i]` for every adjacent pair. Singletons pass vacuously.
pub(crate) fn strictly_increasing(x: ArrayView1<f64>) -> bool {
    x.windows(2).into_iter().all(|w| w[1] > w[0])
}
