//! Decomposition of a raw URL string into a [`UrlValue`].

use super::encode::{build_query, escapes_are_utf8, normalize_component, parse_query};
use super::error::{ValidationError, ValidationErrorKind};
use super::path::split_file;
use super::split::split_components;
use super::validate::is_valid;
use super::UrlValue;

/// Parses `raw` into a fresh [`UrlValue`].
///
/// HTML entities are decoded first, so strings lifted from markup
/// attributes (`&amp;`) parse the same as their plain form. Everything
/// before the fragment is normalized and must pass [`is_valid`]; the
/// fragment is kept verbatim. Escapes that do not decode to UTF-8 are
/// rejected, since they could not be reproduced on output.
pub(super) fn parse_url(raw: &str) -> Result<UrlValue, ValidationError> {
    let decoded = html_escape::decode_html_entities(raw);
    let decoded: &str = &decoded;

    let (before_fragment, fragment) = match decoded.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (decoded, None),
    };

    if before_fragment.starts_with(':') || !escapes_are_utf8(before_fragment) {
        return Err(ValidationError::malformed(before_fragment));
    }

    let normalized = normalize(before_fragment);
    if normalized.is_empty() {
        return Err(ValidationError::new(normalized, ValidationErrorKind::Empty));
    }
    if !is_valid(&normalized) {
        return Err(ValidationError::malformed(normalized));
    }

    let full = match fragment {
        Some(fragment) => format!("{normalized}#{fragment}"),
        None => normalized,
    };
    tracing::debug!(url = %full, "normalized url");

    let parts = split_components(&full).ok_or_else(|| ValidationError::malformed(full.as_str()))?;
    let (path_segments, file) = split_file(parts.path.as_deref().unwrap_or_default());
    let params = match parts.query.as_deref() {
        None | Some("") | Some("?") => Default::default(),
        Some(query) => parse_query(query),
    };

    Ok(UrlValue {
        protocol: parts.scheme.unwrap_or_default(),
        domain: parts.host.unwrap_or_default(),
        port: parts.port,
        path_segments,
        file,
        params,
        fragment: parts.fragment.unwrap_or_default(),
    })
}

/// Rebuilds the part before the fragment with a canonical query string and
/// encoded path pieces.
///
/// The first two pieces after an optional `scheme:` prefix are left as they
/// are when non-empty. For an absolute URL they hold the empty authority
/// marker and `host[:port]`; a relative URL gets the same treatment, so a
/// literal space there fails validation instead of being escaped.
fn normalize(input: &str) -> String {
    let (before_query, raw_query) = match input.split_once('?') {
        Some((before, query)) => (before, Some(query)),
        None => (input, None),
    };

    let query = raw_query
        .filter(|q| !q.is_empty())
        .map(parse_query)
        .filter(|params| !params.is_empty())
        .map(|params| format!("?{}", build_query(&params, "&")))
        .unwrap_or_default();

    let mut pieces: Vec<&str> = before_query.split('/').collect();
    let scheme = match pieces.first() {
        Some(first) if first.ends_with(':') => Some(pieces.remove(0)),
        _ => None,
    };

    let path = pieces
        .iter()
        .enumerate()
        .map(|(idx, piece)| {
            if idx < 2 && !piece.is_empty() {
                piece.to_string()
            } else {
                normalize_component(piece)
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    match scheme {
        Some(scheme) => format!("{scheme}/{path}{query}"),
        None => format!("{path}{query}"),
    }
}
