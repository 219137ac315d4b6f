//! # Watch Page Parser
//!
//! Pulls the `ytInitialPlayerResponse` object out of a YouTube watch page and
//! decodes the pieces needed for transcript retrieval: video details and
//! caption tracks. Also decodes `json3` timed-text transcripts.

use std::{ops::Deref, sync::LazyLock};

use itertools::Itertools;
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::RetrievalError;

static YT_PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});\s*(?:var\s|</script>)")
        .unwrap()
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub playability_status: Option<PlayabilityStatus>,
    pub video_details: Option<VideoDetails>,
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayabilityStatus {
    pub status: String,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub video_id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub view_count: Option<String>,
    pub length_seconds: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    pub tracklist: Option<CaptionTracklist>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTracklist {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    /// `"asr"` for auto-generated tracks.
    pub kind: Option<String>,
}

impl CaptionTrack {
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

impl PlayerResponse {
    pub fn caption_tracks(&self) -> &[CaptionTrack] {
        self.captions
            .as_ref()
            .and_then(|c| c.tracklist.as_ref())
            .map(|t| t.caption_tracks.as_slice())
            .unwrap_or_default()
    }

    /// Picks the English track, preferring manual captions over
    /// auto-generated ones, then falls back to the first listed track.
    pub fn select_caption_track(&self, language: &str) -> Option<&CaptionTrack> {
        let tracks = self.caption_tracks();
        let matches_language = |t: &&CaptionTrack| {
            t.language_code == language || t.language_code.starts_with(&format!("{language}-"))
        };

        tracks
            .iter()
            .filter(matches_language)
            .find(|t| !t.is_generated())
            .or_else(|| tracks.iter().find(matches_language))
            .or_else(|| tracks.first())
    }
}

pub struct WatchPageDocument(String);

impl Deref for WatchPageDocument {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl WatchPageDocument {
    pub fn new(doc: String) -> Self {
        WatchPageDocument(doc)
    }

    pub fn to_json<T>(&self) -> Result<T, RetrievalError>
    where
        T: DeserializeOwned,
    {
        YT_PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .and_then(|m| serde_json::from_str(m.as_str()).ok())
            .ok_or(RetrievalError::ParseError(
                "Failed to extract ytInitialPlayerResponse from the watch page",
            ))
    }

    pub fn player_response(&self) -> Result<PlayerResponse, RetrievalError> {
        self.to_json()
    }
}

impl From<String> for WatchPageDocument {
    fn from(value: String) -> Self {
        WatchPageDocument(value)
    }
}

#[derive(Debug, Deserialize)]
struct Json3Transcript {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(default)]
    segs: Vec<Json3Seg>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    utf8: Option<String>,
}

/// Flattens a `fmt=json3` timed-text body into plain transcript text.
pub fn parse_json3_transcript(body: &str) -> Result<String, RetrievalError> {
    let transcript = serde_json::from_str::<Json3Transcript>(body)
        .map_err(|_| RetrievalError::ParseError("Transcript is not valid json3"))?;

    Ok(transcript
        .events
        .iter()
        .map(|event| {
            event
                .segs
                .iter()
                .filter_map(|seg| seg.utf8.as_deref())
                .collect::<String>()
        })
        .map(|line| line.split_whitespace().join(" "))
        .filter(|line| !line.is_empty())
        .join(" "))
}
