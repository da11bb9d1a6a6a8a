use std::path::Path;

use url::Url;

use crate::downloader::selection::{StreamDescriptor, StreamKind};
use crate::errors::{AppError, Result};

/// The set of streams a client reported for one URL.
///
/// Beyond its descriptor list the manifest is opaque; only the client that
/// produced it knows how to turn a descriptor back into bytes.
pub trait StreamManifest {
    fn streams(&self) -> &[StreamDescriptor];
}

/// The external client seam: manifest retrieval and byte transport.
///
/// Everything protocol-shaped lives behind this trait. The rest of the crate
/// only filters descriptors and picks file names.
pub trait StreamClient {
    type Manifest: StreamManifest;

    /// Retrieves the available streams for a video page URL.
    async fn fetch_manifest(&self, url: &str) -> Result<Self::Manifest>;

    /// Downloads the selected stream's bytes to `dest`. Transport behavior,
    /// including any retries or partial writes, is owned by the client.
    async fn download(
        &self,
        manifest: &Self::Manifest,
        stream: &StreamDescriptor,
        dest: &Path,
    ) -> Result<()>;
}

/// Production client backed by rustube.
#[derive(Default)]
pub struct YoutubeClient;

impl YoutubeClient {
    pub fn new() -> Self {
        YoutubeClient
    }
}

pub struct YoutubeManifest {
    video: rustube::Video,
    streams: Vec<StreamDescriptor>,
}

impl StreamManifest for YoutubeManifest {
    fn streams(&self) -> &[StreamDescriptor] {
        &self.streams
    }
}

impl StreamClient for YoutubeClient {
    type Manifest = YoutubeManifest;

    async fn fetch_manifest(&self, url: &str) -> Result<YoutubeManifest> {
        let parsed =
            Url::parse(url).map_err(|e| AppError::Manifest(format!("invalid URL `{url}`: {e}")))?;
        let video = rustube::Video::from_url(&parsed)
            .await
            .map_err(|e| AppError::Manifest(e.to_string()))?;

        let streams = video
            .streams()
            .iter()
            .enumerate()
            .filter_map(|(index, s)| describe(index, s))
            .collect();

        Ok(YoutubeManifest { video, streams })
    }

    async fn download(
        &self,
        manifest: &YoutubeManifest,
        stream: &StreamDescriptor,
        dest: &Path,
    ) -> Result<()> {
        let native = manifest.video.streams().get(stream.index).ok_or_else(|| {
            AppError::Download("selected stream is not part of this manifest".to_string())
        })?;

        native
            .download_to(dest)
            .await
            .map_err(|e| AppError::Download(e.to_string()))?;

        Ok(())
    }
}

/// Maps a rustube stream into the crate's descriptor model. Streams carrying
/// neither track are dropped.
fn describe(index: usize, stream: &rustube::Stream) -> Option<StreamDescriptor> {
    let kind = match (stream.includes_video_track, stream.includes_audio_track) {
        (true, true) => StreamKind::Muxed,
        (true, false) => StreamKind::VideoOnly,
        (false, true) => StreamKind::AudioOnly,
        (false, false) => return None,
    };

    Some(StreamDescriptor {
        index,
        kind,
        container: stream.mime.subtype().as_str().to_string(),
        video_quality: stream.width,
        audio_bitrate: stream.bitrate,
    })
}
