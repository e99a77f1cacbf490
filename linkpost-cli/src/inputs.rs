//! Reading post text from files, directories and stdin.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

/// Source label for text read from standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// File extensions picked up when a directory is given.
pub const POST_EXTENSIONS: &[&str] = &["txt", "md"];

/// Collect `(source, text)` pairs for every requested input.
///
/// An empty list or a `-` entry reads stdin. Directories are walked in
/// file-name order and only files with a [`POST_EXTENSIONS`] extension are
/// read.
///
/// # Errors
/// Returns an error if a path does not exist or a file cannot be read.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if paths.is_empty() {
        return Ok(vec![(STDIN_LABEL.to_owned(), read_stdin()?)]);
    }

    let mut inputs = Vec::new();
    for path in paths {
        if path.as_os_str() == "-" {
            inputs.push((STDIN_LABEL.to_owned(), read_stdin()?));
        } else if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
                if entry.file_type().is_file() && has_post_extension(entry.path()) {
                    inputs.push(read_post(entry.path())?);
                }
            }
        } else if path.exists() {
            inputs.push(read_post(path)?);
        } else {
            bail!("Path does not exist: {}", path.display());
        }
    }

    tracing::debug!(count = inputs.len(), "collected post inputs");
    Ok(inputs)
}

fn has_post_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| POST_EXTENSIONS.contains(&ext))
}

fn read_post(path: &Path) -> Result<(String, String)> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let label = path.display().to_string();
    let text = decode(bytes, &label);
    Ok((label, text))
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    Ok(decode(bytes, STDIN_LABEL))
}

/// Decode `bytes` as UTF-8, replacing invalid sequences with U+FFFD, and
/// drop one trailing line ending left by editors and `echo`.
#[must_use]
pub fn decode(bytes: Vec<u8>, source: &str) -> String {
    let mut text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(source, "input is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
