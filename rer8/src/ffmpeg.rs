//! ffmpeg subprocess fallback for inputs symphonia cannot probe
//!
//! Decodes to a temporary mono 32-bit float WAV at the source's native
//! rate and parses that back through the native reader. The temporary
//! directory is dropped on every exit path, success or failure.

use anyhow::{bail, Context, Result};
use libr8_audio::{read_wav, SourceAudio};
use std::path::Path;
use std::process::Command;

/// Is an ffmpeg executable reachable on PATH?
pub fn have_ffmpeg() -> bool {
    which::which("ffmpeg").is_ok()
}

/// Decode any input ffmpeg understands to mono float samples.
///
/// One blocking subprocess invocation; failure surfaces ffmpeg's stderr
/// as the diagnostic.
pub fn decode_via_ffmpeg(input: &Path) -> Result<SourceAudio> {
    let tmp = tempfile::tempdir().context("Failed to create temporary decode directory")?;
    let decoded = tmp.path().join("decoded.wav");

    let output = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(input)
        .args(["-ac", "1", "-c:a", "pcm_f32le"])
        .arg(&decoded)
        .output()
        .context("Failed to run ffmpeg")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "ffmpeg decode failed for {}: {}",
            input.display(),
            stderr.trim()
        );
    }

    let bytes = std::fs::read(&decoded).context("Failed to read decoded WAV")?;
    let source = read_wav(&bytes).context("Failed to parse ffmpeg output")?;
    Ok(source)
}
