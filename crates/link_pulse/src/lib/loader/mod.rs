pub mod web;
pub mod youtube;

use std::{fmt, future::Future};

use serde::Serialize;
use url::Url;

use crate::{error::RetrievalError, types::TextSegment};

/// Substrings that route a URL to the video transcript loader.
pub const VIDEO_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Retrieval strategy that turns a URL into extracted text.
pub trait Loader {
    const NAME: &'static str;

    fn load(
        &self,
        url: &Url,
    ) -> impl Future<Output = Result<Vec<TextSegment>, RetrievalError>> + Send;
}

/// Which loader a URL is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Video,
    Page,
}

impl ContentSource {
    pub fn detect(url: &Url) -> Self {
        let url = url.as_str().to_ascii_lowercase();
        if VIDEO_MARKERS.iter().any(|marker| url.contains(marker)) {
            ContentSource::Video
        } else {
            ContentSource::Page
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Video => f.write_str("YouTube video"),
            ContentSource::Page => f.write_str("web page"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_of(raw: &str) -> ContentSource {
        ContentSource::detect(&Url::parse(raw).unwrap())
    }

    #[test]
    fn test_youtube_urls_select_video_source() {
        assert_eq!(
            source_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            ContentSource::Video
        );
        assert_eq!(source_of("https://youtu.be/dQw4w9WgXcQ"), ContentSource::Video);
        assert_eq!(
            source_of("https://M.YOUTUBE.COM/watch?v=abc"),
            ContentSource::Video
        );
    }

    #[test]
    fn test_other_urls_select_page_source() {
        assert_eq!(source_of("https://example.com/article"), ContentSource::Page);
        assert_eq!(source_of("https://vimeo.com/12345"), ContentSource::Page);
    }
}
