//! `urlkit rewrite <url> [edits]` – apply edits and print the new URL.

use anyhow::{Context, Result};
use urlkit_core::config::UrlkitConfig;
use urlkit_core::{Separator, UrlValue};

use crate::cli::RewriteArgs;

pub fn run_rewrite(url: &str, edits: &RewriteArgs, cfg: &UrlkitConfig) -> Result<()> {
    let mut value: UrlValue = url.parse()?;
    apply_edits(&mut value, edits)?;

    let separator = if edits.markup {
        Separator::Markup
    } else {
        cfg.output
    };
    println!("{}", value.serialize(separator));
    Ok(())
}

/// Applies edits in a fixed order: protocol, domain, port, path, file,
/// fragment, then parameters set and removed.
pub(crate) fn apply_edits(url: &mut UrlValue, edits: &RewriteArgs) -> Result<()> {
    if let Some(protocol) = &edits.protocol {
        url.set_protocol(protocol).context("set protocol")?;
    }
    if let Some(domain) = &edits.domain {
        url.set_domain(domain).context("set domain")?;
    }
    if let Some(port) = &edits.port {
        url.set_port(port).context("set port")?;
    }
    if let Some(path) = &edits.path {
        url.set_path(path).context("set path")?;
    }
    if let Some(file) = &edits.file {
        url.set_file(file);
    }
    if let Some(fragment) = &edits.fragment {
        url.set_fragment(fragment);
    }
    for (name, value) in &edits.set {
        url.set_param(name.as_str(), value.as_str());
    }
    for name in &edits.unset {
        if url.remove_param(name).is_none() {
            tracing::debug!(param = %name, "unset of missing parameter ignored");
        }
    }
    tracing::debug!(url = %url.to_header_string(), "rewrite applied");
    Ok(())
}
