//! Bulk retrieval through the `datalad` CLI.
//!
//! The dataset is a DataLad/git-annex repository: the directory tree is
//! checked out up front and file content is materialised on demand. One
//! recursive `datalad get` over the chosen subject directories fetches
//! everything; there is deliberately no retry or parallelism here, DataLad
//! already resumes partial downloads itself.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Fetch file content for `subjects` (relative paths such as `sub-032`)
/// inside the DataLad dataset rooted at `dataset`.
///
/// Runs `datalad get -d <dataset> -r <subjects...>` once and waits for it;
/// DataLad's own progress output goes straight to the inherited stdio.
///
/// # Errors
///
/// Fails if the subject list is empty, the `datalad` binary cannot be
/// spawned, or the command exits non-zero.
pub fn fetch_subjects(dataset: &Path, subjects: &[String]) -> Result<()> {
    if subjects.is_empty() {
        bail!("no subjects to fetch");
    }
    let status = Command::new("datalad")
        .arg("get")
        .arg("-d")
        .arg(dataset)
        .arg("-r")
        .args(subjects)
        .status()
        .context("running `datalad get` (is DataLad installed?)")?;
    if !status.success() {
        bail!("`datalad get` exited with {status}");
    }
    Ok(())
}

/// The installed DataLad version, e.g. `datalad 1.1.3`.
///
/// Used by the fetch CLI to fail with a clear message before a long
/// download is attempted against a missing installation.
pub fn datalad_version() -> Result<String> {
    let out = Command::new("datalad")
        .arg("--version")
        .output()
        .context("running `datalad --version` (is DataLad installed?)")?;
    if !out.status.success() {
        bail!("`datalad --version` exited with {}", out.status);
    }
    Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
}
