use std::path::Path;

use crate::args::Args;
use crate::downloader::client::StreamClient;
use crate::errors::Result;

use super::worker::download_worker;

/// Processes every URL strictly in order, one download per active mode.
///
/// Both branches of an `--audio --video` run fetch their own manifest; there
/// is no reuse between them. The first error aborts the remaining queue.
pub async fn process_urls<C: StreamClient>(client: &C, args: &Args, dest_dir: &Path) -> Result<()> {
    for url in &args.urls {
        for mode in args.modes() {
            println!("Starting download: {}", url);
            let saved = download_worker(client, url, mode, dest_dir, args.name.as_deref()).await?;
            println!("Completed: {}", saved.display());
        }
    }

    Ok(())
}
