//! Document loading functionality.
//!
//! This module provides functions to load documents from files or stdin and
//! turn them into `serde_json::Value` trees that the query engine can walk.
//! JSON, JSONL/NDJSON and YAML are understood, optionally gzip-compressed.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// The text formats a document can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    /// One JSON value per line; the document is the array of lines.
    JsonLines,
    Yaml,
}

impl Format {
    /// Determines the format from a filename.
    ///
    /// A trailing `.gz` is ignored, so `data.jsonl.gz` is JSONL.
    /// Unknown extensions are treated as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

        if base.ends_with(".jsonl") || base.ends_with(".ndjson") {
            Format::JsonLines
        } else if base.ends_with(".yaml") || base.ends_with(".yml") {
            Format::Yaml
        } else {
            Format::Json
        }
    }
}

/// Loads and parses a document from the filesystem.
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read (missing, permissions, etc.)
/// - A `.gz` file is not valid gzip
/// - The contents are not valid for the detected format
///
/// # Examples
///
/// ```no_run
/// use slashpick::document::loader::load_document_file;
/// use slashpick::query::extract;
///
/// let doc = load_document_file("orders.json").unwrap();
/// let totals = extract(&doc, "orders/total");
/// ```
pub fn load_document_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    parse_document(&content, Format::from_path(path_ref))
}

/// Parses in-memory content in the given format.
pub fn parse_document(content: &str, format: Format) -> Result<Value> {
    match format {
        Format::Json => serde_json::from_str(content).context("Failed to parse JSON"),
        Format::JsonLines => parse_jsonl_content(content),
        Format::Yaml => serde_yaml::from_str(content).context("Failed to parse YAML"),
    }
}

/// Parses JSONL content (newline-delimited JSON) into an array of lines.
///
/// Each line must be a valid JSON value. Blank lines are skipped.
pub fn parse_jsonl_content(content: &str) -> Result<Value> {
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        lines.push(value);
    }

    if lines.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(Value::Array(lines))
}

/// Loads and parses a document from standard input.
///
/// Gzip input is detected by its magic bytes. The content is tried as JSON,
/// then JSONL, then YAML.
///
/// ```no_run
/// use slashpick::document::loader::load_document_from_stdin;
///
/// // Usage: echo '{"key": "value"}' | slashpick key
/// let doc = load_document_from_stdin().unwrap();
/// ```
pub fn load_document_from_stdin() -> Result<Value> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    parse_document_bytes(buffer)
}

/// Detects compression and format of raw bytes and parses them.
pub fn parse_document_bytes(buffer: Vec<u8>) -> Result<Value> {
    // gzip magic (0x1f 0x8b)
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    if let Ok(value) = parse_document(&content, Format::Json) {
        return Ok(value);
    }
    if let Ok(value) = parse_jsonl_content(&content) {
        return Ok(value);
    }

    parse_document(&content, Format::Yaml)
        .context("Input is neither valid JSON, JSONL nor YAML")
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
