//! Re-serialization of a [`UrlValue`] into a URL string.

use serde::{Deserialize, Serialize};

use super::encode::{build_query, encode_component};
use super::UrlValue;

/// Separator placed between query pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// `&amp;`, for embedding in HTML attributes.
    Markup,
    /// `&`, for `Location` headers and redirects.
    Header,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Markup => "&amp;",
            Separator::Header => "&",
        }
    }
}

pub(super) fn serialize(url: &UrlValue, separator: Separator) -> String {
    let query = if url.params.is_empty() {
        String::new()
    } else {
        format!("?{}", build_query(&url.params, separator.as_str()))
    };

    let fragment = if url.fragment.is_empty() {
        String::new()
    } else {
        format!("#{}", url.fragment)
    };

    let scheme = if url.protocol.is_empty() {
        String::new()
    } else {
        format!("{}://", url.protocol)
    };

    let authority = match (&url.domain, &url.port) {
        (domain, _) if domain.is_empty() => String::new(),
        (domain, Some(port)) => format!("{domain}:{port}"),
        (domain, None) => domain.clone(),
    };

    let mut filepath = url
        .path_segments
        .iter()
        .map(|segment| encode_component(segment))
        .collect::<Vec<_>>()
        .join("/");
    if !url.file.is_empty() {
        if !url.path_segments.is_empty() && !filepath.ends_with('/') {
            filepath.push('/');
        }
        filepath.push_str(&encode_component(&url.file));
    }
    if !filepath.is_empty() && !authority.is_empty() && !filepath.starts_with('/') {
        filepath.insert(0, '/');
    }

    format!("{scheme}{authority}{filepath}{query}{fragment}")
}
