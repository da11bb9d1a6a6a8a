use clap::Parser;

use crate::downloader::selection::SelectionMode;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URLs of the YouTube videos to download
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Download only the audio of the given URLs
    #[arg(long)]
    pub audio: bool,

    /// Download only the video of the given URLs (mp4)
    #[arg(long)]
    pub video: bool,

    /// The path to the directory where the output should be sent
    #[arg(short, long)]
    pub output: Option<String>,

    /// The base name of the output file, without extension
    #[arg(short, long)]
    pub name: Option<String>,
}

impl Args {
    /// The selection branches this invocation runs, in execution order.
    ///
    /// Neither flag set means a single combined (muxed) download; both flags
    /// set run the audio branch first, then the video branch, independently.
    pub fn modes(&self) -> Vec<SelectionMode> {
        match (self.audio, self.video) {
            (false, false) => vec![SelectionMode::Muxed],
            (true, false) => vec![SelectionMode::AudioOnly],
            (false, true) => vec![SelectionMode::VideoOnly],
            (true, true) => vec![SelectionMode::AudioOnly, SelectionMode::VideoOnly],
        }
    }

    /// Whether this invocation is audio-only and nothing else.
    ///
    /// Only a pure audio-only run lands in the `Music` default directory;
    /// `--audio --video` together count as a video run.
    pub fn audio_only(&self) -> bool {
        self.audio && !self.video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_required() {
        assert!(Args::try_parse_from(["ytgrab"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["ytgrab", "https://youtu.be/dQw4w9WgXcQ"]);

        assert_eq!(args.urls, vec!["https://youtu.be/dQw4w9WgXcQ"]);
        assert!(!args.audio);
        assert!(!args.video);
        assert_eq!(args.output, None);
        assert_eq!(args.name, None);
    }

    #[test]
    fn test_multiple_urls_keep_order() {
        let args = Args::parse_from(["ytgrab", "https://a.example", "https://b.example"]);

        assert_eq!(args.urls, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_output_and_name_options() {
        let args = Args::parse_from(["ytgrab", "https://a.example", "-o", "/tmp/out", "-n", "clip"]);

        assert_eq!(args.output.as_deref(), Some("/tmp/out"));
        assert_eq!(args.name.as_deref(), Some("clip"));
    }

    #[test]
    fn test_mode_derivation() {
        let none = Args::parse_from(["ytgrab", "https://a.example"]);
        assert_eq!(none.modes(), vec![SelectionMode::Muxed]);

        let audio = Args::parse_from(["ytgrab", "--audio", "https://a.example"]);
        assert_eq!(audio.modes(), vec![SelectionMode::AudioOnly]);

        let video = Args::parse_from(["ytgrab", "--video", "https://a.example"]);
        assert_eq!(video.modes(), vec![SelectionMode::VideoOnly]);

        // Both flags run two independent branches, audio first
        let both = Args::parse_from(["ytgrab", "--audio", "--video", "https://a.example"]);
        assert_eq!(
            both.modes(),
            vec![SelectionMode::AudioOnly, SelectionMode::VideoOnly]
        );
    }

    #[test]
    fn test_audio_only_is_exclusive() {
        let audio = Args::parse_from(["ytgrab", "--audio", "https://a.example"]);
        assert!(audio.audio_only());

        let both = Args::parse_from(["ytgrab", "--audio", "--video", "https://a.example"]);
        assert!(!both.audio_only());

        let none = Args::parse_from(["ytgrab", "https://a.example"]);
        assert!(!none.audio_only());
    }
}
