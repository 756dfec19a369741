//! URL model: parse a URL into components, mutate them, serialize it back.
//!
//! Every mutation that can change the structure of the URL (path, domain,
//! port, protocol) is staged on a copy, validated as a whole, and only then
//! committed, so a failed setter leaves the value untouched.

mod encode;
mod error;
mod parse;
mod path;
mod serialize;
mod split;
mod validate;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use encode::{build_query, decode_component, encode_component, parse_query, ParamMap};
pub use error::{ValidationError, ValidationErrorKind};
pub use serialize::Separator;
pub use validate::{is_valid, validate};

/// Protocol assigned when a domain is set on a relative URL.
const DEFAULT_PROTOCOL: &str = "http";

/// A parsed URL.
///
/// Path segments and the file name are stored decoded and encoded on
/// output; the fragment is stored and emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlValue {
    protocol: String,
    domain: String,
    port: Option<String>,
    path_segments: Vec<String>,
    file: String,
    params: ParamMap,
    fragment: String,
}

impl UrlValue {
    /// An empty (relative, pathless) URL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `url` passes the validation rule used by [`parse`](Self::parse).
    pub fn is_valid(url: &str) -> bool {
        validate::is_valid(url)
    }

    /// Replaces the whole value with the result of parsing `url`.
    /// On error the value is left as it was.
    pub fn parse(&mut self, url: &str) -> Result<(), ValidationError> {
        *self = parse::parse_url(url)?;
        Ok(())
    }

    /// Serializes with the given query separator.
    pub fn serialize(&self, separator: Separator) -> String {
        serialize::serialize(self, separator)
    }

    /// Serialized form for `Location` headers and redirects (`&` separators).
    pub fn to_header_string(&self) -> String {
        self.serialize(Separator::Header)
    }

    /// True when there is neither a protocol nor a domain.
    pub fn is_relative(&self) -> bool {
        self.protocol.is_empty() && self.domain.is_empty()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    /// Sets a query parameter. An empty name is ignored, as parsing drops it.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            tracing::debug!("ignored query parameter with empty name");
            return;
        }
        self.params.insert(name, value.into());
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Removes a parameter, keeping the order of the others. Returns its value.
    pub fn remove_param(&mut self, name: &str) -> Option<String> {
        self.params.shift_remove(name)
    }

    /// Directory path: the segments joined with `/`, file excluded.
    pub fn path(&self) -> String {
        self.path_segments.join("/")
    }

    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    /// Replaces the directory path. The file name is kept.
    pub fn set_path(&mut self, path: &str) -> Result<(), ValidationError> {
        let mut candidate = self.clone();
        candidate.path_segments = path::split_segments(path);
        self.commit(candidate)
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Sets the host name. Setting one on a relative URL assigns the `http`
    /// protocol; clearing it clears the protocol too.
    pub fn set_domain(&mut self, domain: &str) -> Result<(), ValidationError> {
        let mut candidate = self.clone();
        if domain.is_empty() {
            candidate.protocol.clear();
        } else if candidate.protocol.is_empty() {
            candidate.protocol = DEFAULT_PROTOCOL.to_string();
        }
        candidate.domain = domain.to_string();

        if !is_domain_name(domain) {
            return Err(ValidationError::new(
                candidate.to_header_string(),
                ValidationErrorKind::Domain(domain.to_string()),
            ));
        }
        self.commit(candidate)
    }

    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Sets the port; an empty string removes it.
    pub fn set_port(&mut self, port: &str) -> Result<(), ValidationError> {
        let mut candidate = self.clone();
        candidate.port = (!port.is_empty()).then(|| port.to_string());

        if !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new(
                candidate.to_header_string(),
                ValidationErrorKind::Port(port.to_string()),
            ));
        }
        self.commit(candidate)
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Sets the protocol, stored as given (case preserved).
    pub fn set_protocol(&mut self, protocol: &str) -> Result<(), ValidationError> {
        let mut candidate = self.clone();
        candidate.protocol = protocol.to_string();

        if protocol.is_empty() || !protocol.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ValidationError::new(
                candidate.to_header_string(),
                ValidationErrorKind::Protocol(protocol.to_string()),
            ));
        }
        self.commit(candidate)
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Sets the file name; it is percent-encoded when serialized.
    pub fn set_file(&mut self, file: &str) {
        self.file = file.to_string();
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn set_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
    }

    fn commit(&mut self, candidate: UrlValue) -> Result<(), ValidationError> {
        validate(&candidate)?;
        tracing::debug!(url = %candidate.to_header_string(), "url updated");
        *self = candidate;
        Ok(())
    }
}

/// Letters, digits, `_`, `.` and `-` only; empty is allowed.
fn is_domain_name(domain: &str) -> bool {
    domain
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'))
}

/// Markup form (`&amp;` separators).
impl fmt::Display for UrlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(Separator::Markup))
    }
}

impl FromStr for UrlValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_url(s)
    }
}

impl TryFrom<&str> for UrlValue {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
