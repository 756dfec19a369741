//! Integration test: parse → serialize round-trips stay valid and stable.
//!
//! Every sample is parsed, serialized in header form, validated, parsed
//! again, and serialized a second time; both serializations must match.

use urlkit_core::{is_valid, Separator, UrlValue, ValidationErrorKind};

const SAMPLES: &[&str] = &[
    "http://example.com",
    "http://example.com/",
    "https://example.com:8443/a/b.html?x=1&y=2#frag",
    "HTTP://Example.COM/Index.HTML",
    "ftp://files.example.org/pub/debian-12.iso",
    "file:///etc/hosts.txt",
    "/a/b/c",
    "/a/b/c/",
    "a/b.html",
    "index.php?page=2&sort=desc",
    "?only=query",
    "/search?q=a+b&q2=c%20d&empty=",
    "/path/with%2Fslash/and%25percent",
    "/docs/my docs/read me.txt",
    "/c++/notes.md",
    "/r%C3%A9sum%C3%A9.pdf",
    "//cdn.example.com/lib.js",
    "/page#section 2?x",
    "http://example.com/a?x=1&amp;y=2",
    "/bad%zzescape/x",
    "/.htaccess",
    "/archive./x",
];

#[test]
fn header_string_of_parsed_sample_is_valid() {
    for raw in SAMPLES {
        let url: UrlValue = raw.parse().unwrap_or_else(|e| panic!("{raw}: {e}"));
        let out = url.to_header_string();
        let checked = out.split('#').next().unwrap();
        assert!(is_valid(checked), "{raw} serialized to invalid {out}");
    }
}

#[test]
fn reparse_is_idempotent() {
    for raw in SAMPLES {
        let first: UrlValue = raw.parse().unwrap();
        for separator in [Separator::Header, Separator::Markup] {
            let once = first.serialize(separator);
            let second: UrlValue = once.parse().unwrap_or_else(|e| panic!("{once}: {e}"));
            assert_eq!(second.serialize(separator), once, "sample {raw}");
            assert_eq!(second, first, "sample {raw}");
        }
    }
}

#[test]
fn valid_inputs_round_trip_to_valid_outputs() {
    let inputs = [
        "http://example.com/a/b",
        "https://sub.example.co.uk/x/y.tar.gz?v=1",
        "/relative/path",
        "relative/file.txt",
        "news://news.example.net/comp.lang.rust",
    ];
    for raw in inputs {
        assert!(is_valid(raw), "{raw} should be valid");
        let url: UrlValue = raw.parse().unwrap();
        assert!(is_valid(&url.to_header_string()), "{raw}");
    }
}

#[test]
fn rewrite_session() {
    let mut url: UrlValue = "http://example.com/a/b.html?x=1".parse().unwrap();

    url.set_protocol("https").unwrap();
    url.set_port("8443").unwrap();
    url.set_path("/docs/v2").unwrap();
    url.set_file("index.html");
    url.set_param("lang", "en");
    url.remove_param("x");
    url.set_fragment("intro");

    assert_eq!(
        url.to_header_string(),
        "https://example.com:8443/docs/v2/index.html?lang=en#intro"
    );

    let err = url.set_port("http").unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::Port("http".to_string()));
    assert_eq!(url.port(), Some("8443"));

    url.set_domain("").unwrap();
    assert_eq!(url.to_header_string(), "/docs/v2/index.html?lang=en#intro");

    url.set_domain("mirror.example.net").unwrap();
    assert_eq!(url.protocol(), "http");
    assert_eq!(
        url.to_header_string(),
        "http://mirror.example.net:8443/docs/v2/index.html?lang=en#intro"
    );
}

#[test]
fn rejected_inputs() {
    for raw in [
        "",
        "#fragment-only",
        ":8080/x",
        "http://",
        "http://exa mple.com/",
        "https://host:123456/",
        "/my docs/x",
        "a b/c",
        "/%FF/x",
        "/a?k=%FF",
    ] {
        let err = raw.parse::<UrlValue>().unwrap_err();
        assert!(
            matches!(err.kind, ValidationErrorKind::Empty | ValidationErrorKind::Malformed),
            "{raw}: {err}"
        );
    }
}
