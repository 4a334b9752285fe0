//! Parsers for the two settings sources
//!
//! Session files hold one `Key=value` pair per line. Xresources overlays
//! hold `class.Key: value` or `*Key: value` lines; entries for other
//! resource classes are skipped.

use crate::error::{Error, Result};

/// One key/value pair and the 1-based line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub line: usize,
    pub key: String,
    pub value: String,
}

pub fn parse_session(text: &str) -> Result<Vec<ParsedEntry>> {
    let mut entries = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        let (key, value) = trimmed
            .split_once('=')
            .ok_or_else(|| Error::parse(line, "expected Key=value"))?;
        let key = key.trim_end();
        if key.is_empty() {
            return Err(Error::parse(line, "empty key"));
        }

        entries.push(ParsedEntry {
            line,
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    Ok(entries)
}

pub fn parse_xresources(text: &str, class: &str) -> Result<Vec<ParsedEntry>> {
    let mut entries = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        // `#` lines are preprocessor directives.
        if trimmed.is_empty() || trimmed.starts_with('!') || trimmed.starts_with('#') {
            continue;
        }

        let (resource, value) = trimmed
            .split_once(':')
            .ok_or_else(|| Error::parse(line, "expected resource: value"))?;
        let resource = resource.trim();

        let key = if let Some(rest) = resource.strip_prefix('*') {
            rest
        } else {
            match resource.split_once('.') {
                Some((owner, rest)) if owner == class => rest,
                _ => continue,
            }
        };
        if key.is_empty() {
            return Err(Error::parse(line, "empty resource name"));
        }

        entries.push(ParsedEntry {
            line,
            key: key.to_string(),
            value: value.trim().to_string(),
        });
    }

    Ok(entries)
}
