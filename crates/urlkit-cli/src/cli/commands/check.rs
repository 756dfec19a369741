//! `urlkit check <url>...` – report which URLs are valid.

use anyhow::{bail, Result};
use urlkit_core::is_valid;

pub fn run_check(urls: &[String]) -> Result<()> {
    let mut invalid = 0usize;
    for url in urls {
        let valid = is_valid(url);
        if !valid {
            invalid += 1;
        }
        println!("{:<8} {}", if valid { "valid" } else { "invalid" }, url);
    }
    if invalid > 0 {
        bail!("{invalid} of {} URLs are invalid", urls.len());
    }
    Ok(())
}
