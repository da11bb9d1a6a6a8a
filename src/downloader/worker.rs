use std::path::{Path, PathBuf};

use crate::downloader::client::{StreamClient, StreamManifest};
use crate::downloader::selection::{SelectionMode, select_stream};
use crate::errors::Result;

/// Runs one download attempt: fetches the manifest for `url`, picks the best
/// stream for `mode`, and saves it under `dest_dir`.
///
/// The file name is `{base}.{container}`, where `base` falls back to the
/// mode's default ("video" or "audio") when no name was given. Returns the
/// path the client wrote to.
pub async fn download_worker<C: StreamClient>(
    client: &C,
    url: &str,
    mode: SelectionMode,
    dest_dir: &Path,
    base_name: Option<&str>,
) -> Result<PathBuf> {
    let manifest = client.fetch_manifest(url).await?;
    let stream = select_stream(manifest.streams(), mode)?;

    let base = base_name.unwrap_or(mode.default_base_name());
    let dest = dest_dir.join(format!("{}.{}", base, stream.container));

    client.download(&manifest, stream, &dest).await?;

    Ok(dest)
}
