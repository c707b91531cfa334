//! # hbc: pre-flight tooling for a heart-brain coupling pipeline
//!
//! `hbc` sits in front of a port of the MATLAB heart-brain coupling model.
//! It does two unglamorous but load-bearing jobs: it decides which subjects
//! of the multimodal physiology dataset are usable at all, and it verifies
//! that a prepared input bundle satisfies every shape, monotonicity, and
//! window invariant the model assumes, deriving the two directional output
//! time axes along the way.
//!
//! ## Overview
//!
//! ```text
//! inputs.safetensors                    DataLad dataset
//!   │                                     │
//!   ├─ io::load_inputs()                  ├─ subjects::Roster    complete-subject labels
//!   ├─ validate::validate()               └─ fetch::fetch_subjects()   one `datalad get -r`
//!   │    shape / finiteness / monotonicity / window gate
//!   └─ axes::output_time_axes()
//!        │
//!        └─→ t_H2B  [T - Ws]    t_B2H  [T - 2·Ws]
//! ```
//!
//! The coupling computation itself is not implemented here; everything in
//! this crate runs before it.
//!
//! ## Quick start
//!
//! ```
//! use hbc::{preflight, CouplingInputs};
//! use ndarray::{Array1, Array2};
//!
//! // A 5-minute recording: 8 band-power channels at 4 Hz, ~350 beats.
//! let t = 1200;
//! let fs = 4.0;
//! let inputs = CouplingInputs {
//!     eeg_power: Array2::from_shape_fn((8, t), |(c, i)| {
//!         1.0 + 0.1 * ((c as f64) + (i as f64) * 0.01).sin()
//!     }),
//!     ibi: Array1::from_elem(350, 0.85),
//!     t_ibi: Array1::from_iter((0..350).map(|k| 0.85 * k as f64)),
//!     csi: Array1::from_elem(t, 2.0),
//!     cvi: Array1::from_elem(t, 5.0),
//!     fs,
//!     time: Array1::from_iter((0..t).map(|i| i as f64 / fs)),
//!     wind: 15.0,
//! };
//!
//! let axes = preflight(&inputs).unwrap();
//! assert_eq!(axes.h2b.len(), t - 60);      // Ws = round(15 s * 4 Hz) = 60
//! assert_eq!(axes.b2h.len(), t - 120);
//! ```
//!
//! ## Binaries
//!
//! * `check_inputs` validates a safetensors bundle and optionally writes
//!   the derived axes.
//! * `fetch_subjects` prints the complete-subject roster and hands it to
//!   `datalad get`.

pub mod axes;
pub mod fetch;
pub mod inputs;
pub mod io;
pub mod subjects;
pub mod validate;

// ── Crate-root re-exports ─────────────────────────────────────────────────
//
// Everything a downstream user is likely to need is available directly as
// `hbc::Foo` without having to know the internal module layout.

pub use axes::{output_time_axes, TimeAxes};
pub use fetch::{datalad_version, fetch_subjects};
pub use inputs::CouplingInputs;
pub use io::{load_inputs, write_axes, StWriter};
pub use subjects::{format_subject, Roster};
pub use validate::{validate, InputError};

/// Run the full pre-flight: validate `inputs` and derive the output axes.
///
/// This is the main entry point for the library. It is equivalent to
/// calling [`validate`] followed by the slice arithmetic in
/// [`output_time_axes`]; the first violated invariant is returned as a
/// typed [`InputError`].
pub fn preflight(inputs: &CouplingInputs) -> Result<TimeAxes, InputError> {
    output_time_axes(inputs)
}
