use crate::errors::{AppError, Result};

/// Which media tracks a stream carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Single file carrying both audio and video.
    Muxed,
    VideoOnly,
    AudioOnly,
}

/// One downloadable stream as reported by the client's manifest.
///
/// `index` is the stream's position in the client's native stream list, so a
/// selected descriptor can be handed back to the client for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDescriptor {
    pub index: usize,
    pub kind: StreamKind,
    /// Container format, e.g. "mp4" or "webm". Doubles as the file extension.
    pub container: String,
    /// Ranking key for video-bearing streams (frame width).
    pub video_quality: Option<u64>,
    /// Ranking key for audio-bearing streams (bits per second).
    pub audio_bitrate: Option<u64>,
}

/// The selection branch to run for a URL, derived from the mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Muxed,
    VideoOnly,
    AudioOnly,
}

impl SelectionMode {
    /// Base file name used when `--name` is not given.
    pub fn default_base_name(self) -> &'static str {
        match self {
            SelectionMode::Muxed | SelectionMode::VideoOnly => "video",
            SelectionMode::AudioOnly => "audio",
        }
    }

    /// What this mode was looking for, for the "no stream found" message.
    fn wanted(self) -> &'static str {
        match self {
            SelectionMode::Muxed => "muxed",
            SelectionMode::VideoOnly => "mp4 video-only",
            SelectionMode::AudioOnly => "audio-only",
        }
    }
}

/// Picks exactly one stream for the given mode, or reports which kind of
/// stream the manifest was missing.
///
/// The rules are fixed: muxed streams rank by video quality regardless of
/// container; video-only streams are restricted to mp4 before ranking by
/// video quality; audio-only streams rank by bitrate regardless of container.
/// Ties keep the client's own ordering, so selection is deterministic for a
/// fixed manifest.
pub fn select_stream(streams: &[StreamDescriptor], mode: SelectionMode) -> Result<&StreamDescriptor> {
    let selected = match mode {
        SelectionMode::Muxed => streams
            .iter()
            .filter(|s| s.kind == StreamKind::Muxed)
            .max_by_key(|s| s.video_quality),
        SelectionMode::VideoOnly => streams
            .iter()
            .filter(|s| s.kind == StreamKind::VideoOnly && s.container == "mp4")
            .max_by_key(|s| s.video_quality),
        SelectionMode::AudioOnly => streams
            .iter()
            .filter(|s| s.kind == StreamKind::AudioOnly)
            .max_by_key(|s| s.audio_bitrate),
    };

    selected.ok_or(AppError::NoStream(mode.wanted()))
}
