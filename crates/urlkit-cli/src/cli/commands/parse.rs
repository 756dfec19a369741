//! `urlkit parse <url>` – show the components of a URL.

use anyhow::Result;
use urlkit_core::UrlValue;

pub fn run_parse(url: &str, json: bool) -> Result<()> {
    let url: UrlValue = url.parse()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&url)?);
    } else {
        print!("{}", describe(&url));
    }
    Ok(())
}

/// One `label: value` line per component; absent parts shown as `-`.
pub(crate) fn describe(url: &UrlValue) -> String {
    fn or_dash(s: &str) -> &str {
        if s.is_empty() {
            "-"
        } else {
            s
        }
    }

    let mut out = String::new();
    let mut line = |label: &str, value: &str| {
        out.push_str(&format!("{:<10}{}\n", format!("{label}:"), value));
    };

    line("protocol", or_dash(url.protocol()));
    line("domain", or_dash(url.domain()));
    line("port", url.port().unwrap_or("-"));
    line("path", or_dash(&url.path()));
    line("segments", &format!("{:?}", url.path_segments()));
    line("file", or_dash(url.file()));
    for (name, value) in url.params() {
        line("param", &format!("{name}={value}"));
    }
    line("fragment", or_dash(url.fragment()));
    out
}
