//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

use prosemeter_core::check_input_size;

pub mod analyze;
pub mod context;
pub mod info;
pub mod readability;
pub mod sentiment;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod suggest;

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a file (or stdin for `-`) and validate its size against the limit.
///
/// Files are checked via metadata before reading into memory. Stdin is read
/// up to one byte past the limit, then checked.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        return read_stdin(max_bytes);
    }

    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let limit = max_bytes.map_or(u64::MAX, |max| max as u64 + 1);
    let mut content = String::new();
    std::io::stdin()
        .lock()
        .take(limit)
        .read_to_string(&mut content)
        .context("failed to read stdin")?;
    check_input_size(&content, max_bytes)?;
    Ok(content)
}
