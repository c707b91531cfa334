mod common;
use common::default_inputs;
use hbc::{load_inputs, output_time_axes, validate, write_axes, StWriter};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hbc_{name}_{}.safetensors", std::process::id()))
}

/// Write a bundle with the on-disk key layout the loader expects.
fn write_bundle(path: &PathBuf) {
    let mi = default_inputs();
    let mut w = StWriter::new();
    let eeg: Vec<f64> = mi.eeg_power.iter().copied().collect();
    w.add_f64("eeg_power", &eeg, &[mi.n_channels(), mi.n_times()]);
    w.add_f64("ibi", &mi.ibi.to_vec(), &[mi.ibi.len()]);
    w.add_f64("t_ibi", &mi.t_ibi.to_vec(), &[mi.t_ibi.len()]);
    w.add_f64("csi", &mi.csi.to_vec(), &[mi.csi.len()]);
    w.add_f64("cvi", &mi.cvi.to_vec(), &[mi.cvi.len()]);
    w.add_f64("time", &mi.time.to_vec(), &[mi.time.len()]);
    w.add_f64("fs", &[mi.fs], &[1]);
    w.add_f64("wind", &[mi.wind], &[1]);
    w.write(path).expect("writing test bundle");
}

#[test]
fn written_bundle_loads_and_validates() {
    let path = temp_path("bundle");
    write_bundle(&path);

    let loaded = load_inputs(&path).unwrap();
    assert_eq!(loaded.n_channels(), 8);
    assert_eq!(loaded.n_times(), 1200);
    assert_eq!(loaded.ibi.len(), 300);
    approx::assert_abs_diff_eq!(loaded.fs, 4.0, epsilon = 1e-12);

    let orig = default_inputs();
    approx::assert_abs_diff_eq!(
        loaded.eeg_power[[3, 500]],
        orig.eeg_power[[3, 500]],
        epsilon = 1e-12
    );

    validate(&loaded).expect("round-tripped bundle should still validate");
    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_key_is_reported_by_name() {
    let path = temp_path("missing_csi");
    let mi = default_inputs();
    let mut w = StWriter::new();
    // Everything except csi.
    let eeg: Vec<f64> = mi.eeg_power.iter().copied().collect();
    w.add_f64("eeg_power", &eeg, &[mi.n_channels(), mi.n_times()]);
    w.add_f64("ibi", &mi.ibi.to_vec(), &[mi.ibi.len()]);
    w.add_f64("t_ibi", &mi.t_ibi.to_vec(), &[mi.t_ibi.len()]);
    w.add_f64("cvi", &mi.cvi.to_vec(), &[mi.cvi.len()]);
    w.add_f64("time", &mi.time.to_vec(), &[mi.time.len()]);
    w.add_f64("fs", &[mi.fs], &[1]);
    w.add_f64("wind", &[mi.wind], &[1]);
    w.write(&path).unwrap();

    let err = load_inputs(&path).unwrap_err();
    assert!(err.to_string().contains("csi"), "unexpected error: {err}");
    std::fs::remove_file(&path).ok();
}

#[test]
fn wrong_rank_is_rejected_at_load() {
    let path = temp_path("bad_rank");
    let mi = default_inputs();
    let mut w = StWriter::new();
    let eeg: Vec<f64> = mi.eeg_power.iter().copied().collect();
    w.add_f64("eeg_power", &eeg, &[mi.n_channels(), mi.n_times()]);
    w.add_f64("ibi", &mi.ibi.to_vec(), &[mi.ibi.len()]);
    w.add_f64("t_ibi", &mi.t_ibi.to_vec(), &[mi.t_ibi.len()]);
    w.add_f64("csi", &mi.csi.to_vec(), &[mi.csi.len()]);
    w.add_f64("cvi", &mi.cvi.to_vec(), &[mi.cvi.len()]);
    // time stored as [2, 600] instead of [1200]
    w.add_f64("time", &mi.time.to_vec(), &[2, 600]);
    w.add_f64("fs", &[mi.fs], &[1]);
    w.add_f64("wind", &[mi.wind], &[1]);
    w.write(&path).unwrap();

    let err = load_inputs(&path).unwrap_err();
    assert!(err.to_string().contains("time"), "unexpected error: {err}");
    std::fs::remove_file(&path).ok();
}

#[test]
fn axes_file_round_trips_through_the_writer() {
    let mi = default_inputs();
    let axes = output_time_axes(&mi).unwrap();
    let path = temp_path("axes");
    write_axes(&axes, 60, &path).unwrap();

    // The axes file is plain safetensors; check the header is sane by
    // reading the declared sizes back.
    let bytes = std::fs::read(&path).unwrap();
    let n = u64::from_le_bytes(bytes[..8].try_into().unwrap()) as usize;
    let header: serde_json::Value = serde_json::from_slice(&bytes[8..8 + n]).unwrap();
    assert_eq!(header["t_h2b"]["shape"][0].as_u64(), Some(1140));
    assert_eq!(header["t_b2h"]["shape"][0].as_u64(), Some(1080));
    assert_eq!(header["ws"]["dtype"].as_str(), Some("I32"));
    std::fs::remove_file(&path).ok();
}
