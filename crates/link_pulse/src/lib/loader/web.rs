use std::time::Duration;

use itertools::Itertools;
use reqwest::header::CONTENT_TYPE;
use scraper::{node::Node, ElementRef, Html, Selector};
use url::Url;

use crate::{
    error::RetrievalError,
    loader::Loader,
    types::{SegmentMetadata, TextSegment},
};

/// Browser identification sent with every page request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_5_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";

const BLOCK_SELECTOR: &str =
    "h1, h2, h3, h4, h5, h6, p, li, blockquote, pre, td, th, dt, dd, figcaption";
const SKIPPED_TAGS: [&str; 5] = ["script", "style", "noscript", "template", "svg"];

#[derive(Debug, Clone)]
pub struct PageLoaderSettings {
    pub user_agent: String,
    /// Skips transport certificate verification. Enabled by default so that
    /// sites with broken certificate chains can still be summarized.
    pub accept_invalid_certs: bool,
    pub timeout: Duration,
}

impl Default for PageLoaderSettings {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            accept_invalid_certs: true,
            timeout: Duration::from_secs(30),
        }
    }
}

impl PageLoaderSettings {
    /// Turns certificate verification on or off.
    pub fn with_verify_tls(mut self, verify: bool) -> Self {
        self.accept_invalid_certs = !verify;
        self
    }
}

/// Fetches an arbitrary web page and extracts its readable text.
#[derive(Debug, Clone)]
pub struct WebPageLoader {
    client: reqwest::Client,
}

impl WebPageLoader {
    pub fn new(settings: PageLoaderSettings) -> Result<Self, RetrievalError> {
        if settings.accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled for web page retrieval");
        }

        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent)
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .timeout(settings.timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl Loader for WebPageLoader {
    const NAME: &'static str = "web_page";

    #[tracing::instrument(skip(self), fields(url = %url))]
    async fn load(&self, url: &Url) -> Result<Vec<TextSegment>, RetrievalError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch page"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let is_plain_text = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.trim_start().starts_with("text/plain"));
        let body = resp.text().await?;

        let segments = if is_plain_text {
            plain_text_segments(&body, url.as_str())
        } else {
            extract_segments(&body, url.as_str())
        };

        if segments.is_empty() {
            return Err(RetrievalError::Empty {
                url: url.to_string(),
            });
        }

        tracing::info!(segments = segments.len(), "Extracted page text");
        Ok(segments)
    }
}

fn plain_text_segments(body: &str, source: &str) -> Vec<TextSegment> {
    let metadata = SegmentMetadata {
        source: source.to_string(),
        ..Default::default()
    };

    body.split("\n\n")
        .map(normalize_whitespace)
        .filter(|block| !block.is_empty())
        .map(|block| TextSegment::new(block, metadata.clone()))
        .collect()
}

/// Extracts readable text blocks from an HTML document.
///
/// Looks for `<article>`, then `<main>`, then `<body>`. Inside that root each
/// outermost block element becomes one segment. When a page has no block
/// elements at all, the visible text of the root is returned as one segment.
pub fn extract_segments(html: &str, source: &str) -> Vec<TextSegment> {
    let doc = Html::parse_document(html);

    let title = Selector::parse("title")
        .ok()
        .and_then(|sel| {
            doc.select(&sel)
                .next()
                .map(|t| normalize_whitespace(&t.text().collect::<String>()))
        })
        .filter(|t| !t.is_empty());

    let root = ["article", "main", "body"]
        .iter()
        .filter_map(|tag| Selector::parse(tag).ok())
        .find_map(|sel| doc.select(&sel).next())
        .unwrap_or_else(|| doc.root_element());

    let metadata = SegmentMetadata {
        source: source.to_string(),
        title,
        ..Default::default()
    };

    let Ok(block_sel) = Selector::parse(BLOCK_SELECTOR) else {
        return Vec::new();
    };

    let mut segments = root
        .select(&block_sel)
        .filter(|el| !is_skipped(el) && !has_block_ancestor(el, &root, &block_sel))
        .map(|el| visible_text(&el))
        .filter(|text| !text.is_empty())
        .map(|text| TextSegment::new(text, metadata.clone()))
        .collect::<Vec<_>>();

    if segments.is_empty() {
        let text = visible_text(&root);
        if !text.is_empty() {
            segments.push(TextSegment::new(text, metadata));
        }
    }

    segments
}

fn has_block_ancestor(el: &ElementRef, root: &ElementRef, block_sel: &Selector) -> bool {
    let root_id = (**root).id();
    (**el)
        .ancestors()
        .take_while(|node| node.id() != root_id)
        .filter_map(ElementRef::wrap)
        .any(|ancestor| block_sel.matches(&ancestor))
}

fn is_skipped(el: &ElementRef) -> bool {
    (**el)
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| SKIPPED_TAGS.contains(&ancestor.value().name()))
}

/// Text of `el`, leaving out script-like subtrees.
fn visible_text(el: &ElementRef) -> String {
    let text = (**el)
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some((node, text)),
            _ => None,
        })
        .filter(|(node, _)| {
            !node.ancestors().filter_map(ElementRef::wrap).any(|ancestor| {
                SKIPPED_TAGS.contains(&ancestor.value().name())
            })
        })
        .map(|(_, text)| &**text)
        .join(" ");

    normalize_whitespace(&text)
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(segments: &[TextSegment]) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_default_settings_skip_certificate_checks() {
        let settings = PageLoaderSettings::default();
        assert!(settings.accept_invalid_certs);
        assert_eq!(settings.user_agent, USER_AGENT);
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_verify_tls_toggles_certificate_checks() {
        assert!(!PageLoaderSettings::default().with_verify_tls(true).accept_invalid_certs);
        assert!(PageLoaderSettings::default().with_verify_tls(false).accept_invalid_certs);
    }

    #[test]
    fn test_article_blocks_are_extracted() {
        let html = r#"
            <html>
                <head><title> Rust  Release </title><style>p { color: red; }</style></head>
                <body>
                    <nav><p>Navigation noise</p></nav>
                    <article>
                        <h1>Announcing Rust</h1>
                        <p>The Rust team is happy
                           to announce a new version.</p>
                        <script>var tracking = 1;</script>
                        <ul><li><p>Faster builds</p></li><li>Better errors</li></ul>
                    </article>
                </body>
            </html>
        "#;

        let segments = extract_segments(html, "https://example.com/post");
        assert_eq!(
            texts(&segments),
            vec![
                "Announcing Rust",
                "The Rust team is happy to announce a new version.",
                "Faster builds",
                "Better errors",
            ]
        );
        assert_eq!(segments[0].metadata.title.as_deref(), Some("Rust Release"));
        assert_eq!(segments[0].metadata.source, "https://example.com/post");
    }

    #[test]
    fn test_body_used_without_article() {
        let html = "<html><body><p>First</p><div><p>Second</p></div></body></html>";
        let segments = extract_segments(html, "src");
        assert_eq!(texts(&segments), vec!["First", "Second"]);
        assert_eq!(segments[0].metadata.title, None);
    }

    #[test]
    fn test_falls_back_to_visible_text() {
        let html = "<html><body><div>Just a div <span>with text</span></div><script>ignored()</script></body></html>";
        let segments = extract_segments(html, "src");
        assert_eq!(texts(&segments), vec!["Just a div with text"]);
    }

    #[test]
    fn test_empty_page_has_no_segments() {
        let html = "<html><head><title>Empty</title></head><body>  <script>x()</script> </body></html>";
        assert!(extract_segments(html, "src").is_empty());
    }

    #[test]
    fn test_plain_text_paragraphs() {
        let segments = plain_text_segments("one\ntwo\n\n\n\nthree", "src");
        assert_eq!(texts(&segments), vec!["one two", "three"]);
    }
}
