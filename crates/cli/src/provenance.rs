use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write `<artifact>.provenance.json` with the code revision, library
/// version, the parameters that produced the artifact, and its path.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    let doc = json!({
        "code_rev": current_git_rev(),
        "solidlab_version": solidlab::VERSION,
        "params": params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
