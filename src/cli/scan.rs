//! `reel scan`: print what `/video/recommended` would serve.

use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Context, Result};

use crate::log;
use crate::media::{self, MediaRecord};
use crate::utils::plural_count;

/// Scan `root` once and write the records to stdout as a JSON array.
pub fn run_scan(root: &Path, pretty: bool) -> Result<()> {
    let records = media::scan(root)?;
    log!("media"; "{} under {}", plural_count(records.len(), "video"), root.display());

    let json = render(&records, pretty)?;
    let mut out = stdout().lock();
    writeln!(out, "{json}").context("failed to write scan output")?;
    Ok(())
}

fn render(records: &[MediaRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };
    json.context("failed to encode media records")
}
