//! Generic component splitter: scheme, userinfo, host, port, path, query, fragment.

/// Raw components of a URL string. Absent components are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub host: Option<String>,
    /// Decimal port, normalized (leading zeros dropped).
    pub port: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Splits `input` into its components.
///
/// A scheme is only recognized when followed by `://`; everything else
/// (including `//host/...`) is treated as a plain path. Returns `None` when
/// the authority is unusable: empty host (except for `file`), or a port that
/// is not all digits or exceeds 65535.
pub fn split_components(input: &str) -> Option<UrlComponents> {
    let mut parts = UrlComponents::default();

    let rest = match input.split_once('#') {
        Some((rest, fragment)) => {
            parts.fragment = Some(fragment.to_string());
            rest
        }
        None => input,
    };

    let rest = match rest.split_once('?') {
        Some((rest, query)) => {
            parts.query = Some(query.to_string());
            rest
        }
        None => rest,
    };

    let path = match scheme_len(rest) {
        Some(len) => {
            let scheme = &rest[..len];
            let after = &rest[len + 3..];
            let (authority, path) = match after.find('/') {
                Some(idx) => after.split_at(idx),
                None => (after, ""),
            };
            split_authority(scheme, authority, &mut parts)?;
            parts.scheme = Some(scheme.to_string());
            path
        }
        None => rest,
    };

    if !path.is_empty() {
        parts.path = Some(path.to_string());
    }

    Some(parts)
}

/// Length of a leading `scheme` that is directly followed by `://`.
fn scheme_len(s: &str) -> Option<usize> {
    let idx = s.find("://")?;
    let mut chars = s[..idx].chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(idx)
}

fn split_authority(scheme: &str, authority: &str, parts: &mut UrlComponents) -> Option<()> {
    let host_port = match authority.rsplit_once('@') {
        Some((userinfo, host_port)) => {
            match userinfo.split_once(':') {
                Some((user, pass)) => {
                    parts.user = Some(user.to_string());
                    parts.pass = Some(pass.to_string());
                }
                None => parts.user = Some(userinfo.to_string()),
            }
            host_port
        }
        None => authority,
    };

    let (host, port) = match host_port.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    };

    if host.is_empty() {
        // file:///path has no authority at all
        let bare = authority.is_empty() && scheme.eq_ignore_ascii_case("file");
        return bare.then_some(());
    }
    parts.host = Some(host.to_string());

    if let Some(port) = port.filter(|p| !p.is_empty()) {
        if !port.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: u16 = port.parse().ok()?;
        parts.port = Some(number.to_string());
    }

    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_all_components() {
        let p = split_components("https://user:pw@example.com:8080/a/b.html?x=1#top").unwrap();
        assert_eq!(p.scheme.as_deref(), Some("https"));
        assert_eq!(p.user.as_deref(), Some("user"));
        assert_eq!(p.pass.as_deref(), Some("pw"));
        assert_eq!(p.host.as_deref(), Some("example.com"));
        assert_eq!(p.port.as_deref(), Some("8080"));
        assert_eq!(p.path.as_deref(), Some("/a/b.html"));
        assert_eq!(p.query.as_deref(), Some("x=1"));
        assert_eq!(p.fragment.as_deref(), Some("top"));
    }

    #[test]
    fn host_only() {
        let p = split_components("http://example.com").unwrap();
        assert_eq!(p.host.as_deref(), Some("example.com"));
        assert!(p.path.is_none());
        assert!(p.port.is_none());
    }

    #[test]
    fn relative_references_are_paths() {
        let p = split_components("/a/b?q=1").unwrap();
        assert!(p.scheme.is_none());
        assert!(p.host.is_none());
        assert_eq!(p.path.as_deref(), Some("/a/b"));

        let p = split_components("//cdn.example.com/x").unwrap();
        assert!(p.host.is_none());
        assert_eq!(p.path.as_deref(), Some("//cdn.example.com/x"));
    }

    #[test]
    fn fragment_may_contain_question_mark() {
        let p = split_components("/a#b?c").unwrap();
        assert_eq!(p.fragment.as_deref(), Some("b?c"));
        assert!(p.query.is_none());
    }

    #[test]
    fn bad_ports_fail() {
        assert!(split_components("http://example.com:99999/").is_none());
        assert!(split_components("http://example.com:80a/").is_none());
        let p = split_components("http://example.com:0080/").unwrap();
        assert_eq!(p.port.as_deref(), Some("80"));
        let p = split_components("http://example.com:/").unwrap();
        assert!(p.port.is_none());
    }

    #[test]
    fn empty_host() {
        assert!(split_components("http:///x").is_none());
        let p = split_components("file:///etc/hosts").unwrap();
        assert!(p.host.is_none());
        assert_eq!(p.path.as_deref(), Some("/etc/hosts"));
    }
}
