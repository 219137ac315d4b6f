//! Decorative Lottie animations, fetched once at startup.

use serde_json::Value;

pub const LOADING_ANIMATION_URL: &str =
    "https://assets7.lottiefiles.com/packages/lf20_vuhz9b5b.json";
pub const SUCCESS_ANIMATION_URL: &str =
    "https://assets7.lottiefiles.com/packages/lf20_xldzoarx.json";

/// A Lottie payload, serialized so it can be embedded in a `<script>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LottieAnimation {
    script_json: String,
}

impl LottieAnimation {
    pub fn from_value(value: &Value) -> Self {
        Self {
            script_json: value.to_string().replace("</", "<\\/"),
        }
    }

    pub fn script_json(&self) -> &str {
        &self.script_json
    }
}

/// Read-only after startup. A missing animation degrades to a text
/// placeholder.
#[derive(Debug, Clone, Default)]
pub struct Animations {
    pub loading: Option<LottieAnimation>,
    pub success: Option<LottieAnimation>,
}

impl Animations {
    pub async fn load(client: &reqwest::Client, loading_url: &str, success_url: &str) -> Self {
        let loading = fetch_animation(client, loading_url).await;
        let success = fetch_animation(client, success_url).await;

        tracing::info!(
            loading = loading.is_some(),
            success = success.is_some(),
            "Loaded animations"
        );

        Self { loading, success }
    }
}

#[tracing::instrument(skip(client))]
pub async fn fetch_animation(client: &reqwest::Client, url: &str) -> Option<LottieAnimation> {
    let resp = client
        .get(url)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Failed to fetch animation"))
        .ok()?;

    if resp.status() != reqwest::StatusCode::OK {
        tracing::warn!(status = resp.status().as_u16(), "Animation not available");
        return None;
    }

    resp.json::<Value>()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "Animation is not valid JSON"))
        .ok()
        .map(|value| LottieAnimation::from_value(&value))
}
