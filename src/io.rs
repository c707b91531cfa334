//! Safetensors I/O for the pre-flight tooling.
//!
//! Reader: parses the input bundle exported by the Python-side recording
//! scripts. Writer: minimal builder used to dump the derived output axes
//! for comparison against the MATLAB reference.

use anyhow::{bail, Context, Result};
use ndarray::{Array1, Array2};
use std::collections::HashMap;
use std::path::Path;

use crate::axes::TimeAxes;
use crate::inputs::CouplingInputs;

// ── Low-level safetensors parser (raw bytes → ndarray; the `safetensors`
//    crate's tensor types are not needed). ─────────────────────────────────

fn parse_header(bytes: &[u8]) -> Result<(HashMap<String, serde_json::Value>, usize)> {
    if bytes.len() < 8 {
        bail!("safetensors file too small");
    }
    let n = u64::from_le_bytes(bytes[..8].try_into()?) as usize;
    if bytes.len() < 8 + n {
        bail!("safetensors header truncated");
    }
    let header: HashMap<String, serde_json::Value> = serde_json::from_slice(&bytes[8..8 + n])
        .context("failed to parse safetensors header")?;
    Ok((header, 8 + n))
}

/// Read one tensor as f64 values plus its shape. F32 data is widened, the
/// bundles on disk carry either precision depending on the export script.
fn tensor_f64(
    bytes: &[u8],
    data_start: usize,
    name: &str,
    entry: &serde_json::Value,
) -> Result<(Vec<f64>, Vec<usize>)> {
    let dtype = entry["dtype"]
        .as_str()
        .with_context(|| format!("{name}: missing dtype"))?;
    let offsets = entry["data_offsets"]
        .as_array()
        .with_context(|| format!("{name}: missing data_offsets"))?;
    let s = offsets
        .first()
        .and_then(|v| v.as_u64())
        .with_context(|| format!("{name}: bad data_offsets"))? as usize;
    let e = offsets
        .get(1)
        .and_then(|v| v.as_u64())
        .with_context(|| format!("{name}: bad data_offsets"))? as usize;
    if s > e || data_start + e > bytes.len() {
        bail!("{name}: data offsets out of range");
    }
    let raw = &bytes[data_start + s..data_start + e];

    let vals: Vec<f64> = match dtype {
        "F64" => raw
            .chunks_exact(8)
            .map(|b| f64::from_le_bytes(b.try_into().unwrap()))
            .collect(),
        "F32" => raw
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes(b.try_into().unwrap()) as f64)
            .collect(),
        other => bail!("{name}: unsupported dtype {other} (expected F64 or F32)"),
    };

    let shape: Vec<usize> = entry["shape"]
        .as_array()
        .with_context(|| format!("{name}: missing shape"))?
        .iter()
        .map(|v| v.as_u64().map(|u| u as usize))
        .collect::<Option<Vec<_>>>()
        .with_context(|| format!("{name}: bad shape"))?;
    if shape.iter().product::<usize>() != vals.len() {
        bail!("{name}: shape {shape:?} does not match {} stored values", vals.len());
    }
    Ok((vals, shape))
}

fn matrix(
    header: &HashMap<String, serde_json::Value>,
    bytes: &[u8],
    data_start: usize,
    name: &str,
) -> Result<Array2<f64>> {
    let entry = header.get(name).with_context(|| format!("missing '{name}' key"))?;
    let (vals, shape) = tensor_f64(bytes, data_start, name, entry)?;
    match shape[..] {
        [rows, cols] => Ok(Array2::from_shape_vec((rows, cols), vals)?),
        _ => bail!("{name} must be 2-D, got shape {shape:?}"),
    }
}

fn vector(
    header: &HashMap<String, serde_json::Value>,
    bytes: &[u8],
    data_start: usize,
    name: &str,
) -> Result<Array1<f64>> {
    let entry = header.get(name).with_context(|| format!("missing '{name}' key"))?;
    let (vals, shape) = tensor_f64(bytes, data_start, name, entry)?;
    match shape[..] {
        [_] => Ok(Array1::from_vec(vals)),
        _ => bail!("{name} must be 1-D, got shape {shape:?}"),
    }
}

fn scalar(
    header: &HashMap<String, serde_json::Value>,
    bytes: &[u8],
    data_start: usize,
    name: &str,
) -> Result<f64> {
    let entry = header.get(name).with_context(|| format!("missing '{name}' key"))?;
    let (vals, _) = tensor_f64(bytes, data_start, name, entry)?;
    if vals.len() != 1 {
        bail!("{name} must hold exactly one value, got {}", vals.len());
    }
    Ok(vals[0])
}

// ── Input bundle loader ───────────────────────────────────────────────────

/// Load a [`CouplingInputs`] bundle from a safetensors file.
///
/// Expected keys: `eeg_power` `[C, T]`, `ibi` `[M]`, `t_ibi` `[M]`,
/// `csi` `[T]`, `cvi` `[T]`, `time` `[T]`, `fs` `[1]`, `wind` `[1]`.
/// Tensors may be F64 or F32; F32 is widened on load.
///
/// This only checks that the file decodes into arrays of the right rank;
/// run [`crate::validate::validate`] on the result before using it.
pub fn load_inputs(path: &Path) -> Result<CouplingInputs> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let (header, data_start) = parse_header(&bytes)?;

    Ok(CouplingInputs {
        eeg_power: matrix(&header, &bytes, data_start, "eeg_power")?,
        ibi: vector(&header, &bytes, data_start, "ibi")?,
        t_ibi: vector(&header, &bytes, data_start, "t_ibi")?,
        csi: vector(&header, &bytes, data_start, "csi")?,
        cvi: vector(&header, &bytes, data_start, "cvi")?,
        fs: scalar(&header, &bytes, data_start, "fs")?,
        time: vector(&header, &bytes, data_start, "time")?,
        wind: scalar(&header, &bytes, data_start, "wind")?,
    })
}

// ── Generic safetensors builder ───────────────────────────────────────────

/// Simple safetensors file writer that handles F64 and I32 tensors.
///
/// Usage:
/// ```no_run
/// use hbc::io::StWriter;
/// use std::path::Path;
/// let mut w = StWriter::new();
/// w.add_f64("signal", &[1.0f64, 2.0, 3.0], &[1, 3]);
/// w.write(Path::new("/tmp/out.safetensors")).unwrap();
/// ```
pub struct StWriter {
    entries: Vec<(String, Vec<u8>, &'static str, Vec<usize>)>,
}

impl StWriter {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn add_f64(&mut self, name: &str, data: &[f64], shape: &[usize]) {
        let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.entries.push((name.to_string(), bytes, "F64", shape.to_vec()));
    }

    pub fn add_i32(&mut self, name: &str, data: &[i32], shape: &[usize]) {
        let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.entries.push((name.to_string(), bytes, "I32", shape.to_vec()));
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        use std::io::Write;
        let mut header_map = serde_json::Map::new();
        let mut offset: usize = 0;
        for (name, data, dtype, shape) in &self.entries {
            header_map.insert(name.clone(), serde_json::json!({
                "dtype": dtype,
                "shape": shape,
                "data_offsets": [offset, offset + data.len()],
            }));
            offset += data.len();
        }
        let hdr_bytes = serde_json::to_vec(&header_map)?;
        let pad = (8 - hdr_bytes.len() % 8) % 8;
        let padded: Vec<u8> = hdr_bytes
            .into_iter()
            .chain(std::iter::repeat(b' ').take(pad))
            .collect();
        let mut f = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        f.write_all(&(padded.len() as u64).to_le_bytes())?;
        f.write_all(&padded)?;
        for (_, data, _, _) in &self.entries {
            f.write_all(data)?;
        }
        Ok(())
    }
}

impl Default for StWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the derived output time axes next to the inputs they came from.
///
/// Keys: `t_h2b` `[T - Ws]`, `t_b2h` `[T - 2*Ws]`, `ws` `[1]` (samples).
pub fn write_axes(axes: &TimeAxes, ws: usize, path: &Path) -> Result<()> {
    let mut w = StWriter::new();
    w.add_f64("t_h2b", &axes.h2b.to_vec(), &[axes.h2b.len()]);
    w.add_f64("t_b2h", &axes.b2h.to_vec(), &[axes.b2h.len()]);
    w.add_i32("ws", &[ws as i32], &[1]);
    w.write(path)
}
