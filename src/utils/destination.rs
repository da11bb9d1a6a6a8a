use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, Result};

/// Resolves the directory all downloads of this run are saved into.
///
/// An explicit `--output` value is used verbatim when it is non-blank after
/// trimming. Otherwise the default is `Music` under the home directory for a
/// pure audio-only run and `Videos` for everything else. The directory must
/// already exist; a missing or inaccessible directory aborts the run before
/// any URL is processed.
pub fn resolve_destination(output: Option<&str>, audio_only: bool) -> Result<PathBuf> {
    let dir = match output {
        Some(explicit) if !explicit.trim().is_empty() => PathBuf::from(explicit),
        _ => {
            let home = dirs::home_dir().ok_or(AppError::NoHomeDir)?;
            default_destination(&home, audio_only)
        }
    };

    let metadata = fs::metadata(&dir).map_err(|source| AppError::Destination {
        path: dir.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(AppError::Destination {
            path: dir,
            source: io::Error::other("not a directory"),
        });
    }

    Ok(dir)
}

/// Mode-dependent default under the home directory.
fn default_destination(home: &Path, audio_only: bool) -> PathBuf {
    home.join(if audio_only { "Music" } else { "Videos" })
}
