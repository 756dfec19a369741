//! Form-style encoding of path pieces and query strings.

use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use url::form_urlencoded;

/// Query parameters in the order they were first seen.
pub type ParamMap = IndexMap<String, String>;

/// Form-encodes a single component: alphanumerics and `*-._` pass through,
/// space becomes `+`, everything else is `%XX`.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Inverse of [`encode_component`]. Invalid UTF-8 is replaced lossily and
/// malformed escapes are kept as-is.
pub fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// True when every `%XX` escape in `value` decodes to valid UTF-8.
pub(crate) fn escapes_are_utf8(value: &str) -> bool {
    percent_decode_str(value).decode_utf8().is_ok()
}

/// Re-encodes an already (partially) encoded piece so existing escapes are
/// not encoded a second time.
pub(crate) fn normalize_component(value: &str) -> String {
    encode_component(&decode_component(value))
}

/// Form-decodes a raw query string. Pairs with an empty name are dropped and
/// a repeated name keeps its first position with the last value.
pub fn parse_query(raw: &str) -> ParamMap {
    let mut params = ParamMap::new();
    for (name, value) in form_urlencoded::parse(raw.as_bytes()) {
        if name.is_empty() {
            continue;
        }
        params.insert(name.into_owned(), value.into_owned());
    }
    params
}

/// Form-encodes `params` into `name=value` pairs joined by `separator`.
pub fn build_query(params: &ParamMap, separator: &str) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
        .collect::<Vec<_>>()
        .join(separator)
}
