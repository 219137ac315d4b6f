//! Input checks that run before any network access.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use url::{Host, Url};

use crate::{
    error::{PipelineError, ValidationError},
    types::{ApiKey, SummaryRequest},
};

/// Validates the raw form input.
///
/// The credential is checked first: without a key the whole action is
/// unavailable, regardless of the URL.
pub fn validate(api_key: &str, url: &str) -> Result<SummaryRequest, PipelineError> {
    let api_key = ApiKey::new(api_key).ok_or(PipelineError::MissingCredential)?;
    let url = validate_url(url)?;

    Ok(SummaryRequest { api_key, url })
}

/// Checks that `raw` is a non-empty absolute http(s) URL with a usable host.
pub fn validate_url(raw: &str) -> Result<Url, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Empty);
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(ValidationError::Malformed);
    }

    let url = Url::parse(raw).map_err(|_| ValidationError::Malformed)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidationError::Malformed);
    }

    // `Url` rewrites numeric shorthand (`http://2130706433`) into dotted
    // addresses, so IP hosts are checked against the text as typed.
    let host_text = typed_host(raw).ok_or(ValidationError::Malformed)?;
    match url.host() {
        Some(Host::Domain(domain)) if is_valid_domain(domain) => Ok(url),
        Some(Host::Ipv4(_)) if host_text.parse::<Ipv4Addr>().is_ok() => Ok(url),
        Some(Host::Ipv6(_))
            if host_text
                .strip_prefix('[')
                .and_then(|h| h.strip_suffix(']'))
                .is_some_and(|h| h.parse::<Ipv6Addr>().is_ok()) =>
        {
            Ok(url)
        }
        _ => Err(ValidationError::Malformed),
    }
}

/// Host portion of `raw` without userinfo or port, as the user wrote it.
fn typed_host(raw: &str) -> Option<&str> {
    let (_, rest) = raw.split_once("://")?;
    let authority = rest
        .split(|c| matches!(c, '/' | '?' | '#' | '\\'))
        .next()?;
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);

    let host = if host_port.starts_with('[') {
        let end = host_port.find(']')?;
        &host_port[..=end]
    } else {
        host_port.split(':').next()?
    };

    (!host.is_empty()).then_some(host)
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.eq_ignore_ascii_case("localhost") || domain.parse::<IpAddr>().is_ok() {
        return true;
    }

    let labels = domain.trim_end_matches('.').split('.').collect::<Vec<_>>();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
        && labels
            .last()
            .is_some_and(|tld| tld.chars().all(char::is_alphabetic) || tld.starts_with("xn--"))
}
