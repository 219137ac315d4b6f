use std::time::Duration;

use url::Url;

use crate::{
    error::RetrievalError,
    loader::Loader,
    parser::{parse_json3_transcript, PlayerResponse, WatchPageDocument},
    types::{SegmentMetadata, TextSegment},
};

/// Loads the transcript of a YouTube video, together with its title,
/// author, view count and length.
#[derive(Debug, Clone)]
pub struct YoutubeLoader {
    client: reqwest::Client,
    base_url: String,
    language: String,
}

impl YoutubeLoader {
    const BASE_URL: &str = "https://www.youtube.com";

    pub fn new(timeout: Duration) -> Result<Self, RetrievalError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: Self::BASE_URL.into(),
            language: "en".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_watch_page(&self, video_id: &str) -> Result<WatchPageDocument, RetrievalError> {
        let watch_url = format!("{}/watch?v={video_id}", self.base_url);
        let resp = self
            .client
            .get(&watch_url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch watch page"))?;

        if !resp.status().is_success() {
            return Err(RetrievalError::Status {
                url: watch_url,
                status: resp.status().as_u16(),
            });
        }

        Ok(resp.text().await?.into())
    }

    #[tracing::instrument(skip(self, player))]
    async fn fetch_transcript(
        &self,
        video_id: &str,
        player: &PlayerResponse,
    ) -> Result<String, RetrievalError> {
        let no_transcript = || RetrievalError::NoTranscript {
            video_id: video_id.to_string(),
        };

        let track = player
            .select_caption_track(&self.language)
            .ok_or_else(no_transcript)?;
        tracing::debug!(
            language = %track.language_code,
            generated = track.is_generated(),
            "Selected caption track"
        );

        let track_url = json3_url(&track.base_url)?;
        let resp = self
            .client
            .get(track_url.clone())
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch caption track"))?;

        if !resp.status().is_success() {
            return Err(RetrievalError::Status {
                url: track_url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let transcript = parse_json3_transcript(&resp.text().await?)?;
        if transcript.is_empty() {
            return Err(no_transcript());
        }

        Ok(transcript)
    }
}

impl Loader for YoutubeLoader {
    const NAME: &'static str = "youtube";

    async fn load(&self, url: &Url) -> Result<Vec<TextSegment>, RetrievalError> {
        let video_id = extract_video_id(url)
            .ok_or_else(|| RetrievalError::UnsupportedVideoUrl(url.to_string()))?;

        let player = self.fetch_watch_page(&video_id).await?.player_response()?;

        if let Some(status) = player
            .playability_status
            .as_ref()
            .filter(|s| s.status != "OK")
        {
            tracing::warn!(
                video_id = %video_id,
                status = %status.status,
                reason = ?status.reason,
                "Video is not playable"
            );
        }

        let transcript = self.fetch_transcript(&video_id, &player).await?;
        let details = player.video_details.as_ref();

        let metadata = SegmentMetadata {
            source: video_id.clone(),
            title: details.and_then(|d| d.title.clone()),
            author: details.and_then(|d| d.author.clone()),
            view_count: details
                .and_then(|d| d.view_count.as_deref())
                .and_then(|v| v.parse().ok()),
            length_seconds: details
                .and_then(|d| d.length_seconds.as_deref())
                .and_then(|v| v.parse().ok()),
        };

        tracing::info!(video_id = %video_id, chars = transcript.len(), "Loaded video transcript");

        Ok(vec![TextSegment::new(transcript, metadata)])
    }
}

/// Extracts the video id from watch, short-link, shorts, embed and live URLs.
pub fn extract_video_id(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_ascii_lowercase();
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    let id = if host == "youtu.be" || host.ends_with(".youtu.be") {
        segments.next().map(str::to_string)
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned()),
            Some("shorts" | "embed" | "live" | "v") => segments.next().map(str::to_string),
            _ => None,
        }
    } else {
        None
    };

    id.filter(|id| {
        !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

fn json3_url(base_url: &str) -> Result<Url, RetrievalError> {
    let mut url = Url::parse(base_url)
        .map_err(|_| RetrievalError::ParseError("Caption track has an invalid baseUrl"))?;
    let pairs = url
        .query_pairs()
        .filter(|(k, _)| k != "fmt")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<_>>();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs)
        .append_pair("fmt", "json3");

    Ok(url)
}
