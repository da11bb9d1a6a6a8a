mod args;
mod downloader;
mod errors;
mod utils;

use anyhow::Result;
use clap::Parser;

use crate::args::Args;
use crate::downloader::client::YoutubeClient;
use crate::downloader::queue::process_urls;
use crate::utils::destination::resolve_destination;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Resolved up front so a bad output directory aborts before any fetch
    let destination = resolve_destination(args.output.as_deref(), args.audio_only())?;

    let client = YoutubeClient::new();
    process_urls(&client, &args, &destination).await?;

    Ok(())
}
