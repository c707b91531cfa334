//! Output time axes of the windowed coupling model.
//!
//! The model slides a `Ws`-sample window over the recording in both
//! directions. A heart-to-brain estimate exists for every window start, a
//! brain-to-heart estimate only for interior samples, so the two output
//! axes are slices of the input time vector:
//!
//! ```text
//! t_h2b = time[.. T - Ws]        length T - Ws
//! t_b2h = time[Ws .. T - Ws]     length T - 2*Ws
//! ```

use ndarray::{s, Array1};

use crate::inputs::CouplingInputs;
use crate::validate::{validate, InputError};

/// The two directional output time axes, in seconds.
#[derive(Debug, Clone)]
pub struct TimeAxes {
    /// Heart-to-brain axis: window start times, `time[.. T - Ws]`.
    pub h2b: Array1<f64>,
    /// Brain-to-heart axis: interior samples, `time[Ws .. T - Ws]`.
    pub b2h: Array1<f64>,
}

/// Derive the output time axes for a validated input bundle.
///
/// Runs [`validate`] first; the slice arithmetic below is only sound once
/// `Ws >= 1` and `T > 2 * Ws` are established.
pub fn output_time_axes(inputs: &CouplingInputs) -> Result<TimeAxes, InputError> {
    validate(inputs)?;
    let t = inputs.n_times();
    let ws = inputs.window_samples() as usize;
    Ok(TimeAxes {
        h2b: inputs.time.slice(s![..t - ws]).to_owned(),
        b2h: inputs.time.slice(s![ws..t - ws]).to_owned(),
    })
}
