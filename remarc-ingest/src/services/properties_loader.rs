//! Directory properties loading
//!
//! Each upload directory carries one `.properties` file supplying the
//! attributes (`theme`, `decade`) shared by every item in it. Any failure to
//! obtain those attributes aborts the directory.
//!
//! **Format:** Java-style properties:
//! - `#` or `!` starts a comment line
//! - `key=value`, `key:value` or `key value`
//! - trailing `\` continues the logical line
//! - escapes `\t \n \r \f \\` and `\uXXXX`
//! - bytes are ISO-8859-1; `\uXXXX` covers everything else

use crate::error::PropertiesError;
use crate::models::DirectoryAttributes;
use std::collections::BTreeMap;
use std::path::Path;

/// Parse failure at a 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub line: usize,
    pub reason: String,
}

/// Load directory attributes from an optional properties file
pub fn load_directory_attributes(
    properties_file: Option<&Path>,
) -> Result<DirectoryAttributes, PropertiesError> {
    let path = properties_file.ok_or(PropertiesError::Missing)?;

    let bytes = std::fs::read(path).map_err(|source| PropertiesError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let content = decode_latin1(&bytes);

    let properties = parse_properties(&content).map_err(|e| PropertiesError::Malformed {
        path: path.to_path_buf(),
        line: e.line,
        reason: e.reason,
    })?;

    tracing::debug!(
        path = %path.display(),
        keys = properties.len(),
        "Parsed properties file"
    );

    DirectoryAttributes::from_properties(properties).ok_or_else(|| {
        PropertiesError::Insufficient {
            path: path.to_path_buf(),
        }
    })
}

/// Parse properties text into a key/value map (later keys win)
pub fn parse_properties(content: &str) -> Result<BTreeMap<String, String>, ParseFailure> {
    let mut properties = BTreeMap::new();
    let mut lines = physical_lines(content).enumerate();

    while let Some((idx, raw)) = lines.next() {
        let trimmed = raw.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_key_value(&logical);
        let failure = |reason| ParseFailure {
            line: idx + 1,
            reason,
        };
        let key = unescape(key).map_err(failure)?;
        let value = unescape(value).map_err(failure)?;
        properties.insert(key, value);
    }

    Ok(properties)
}

/// ISO-8859-1: every byte maps to the char of the same value
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Lines terminated by `\r\n`, `\n` or a lone `\r`
fn physical_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(idx) => {
                let line = &rest[..idx];
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Odd number of trailing backslashes
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Split at the first unescaped `=`, `:` or whitespace
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..i], line[i + 1..].trim_start()),
            c if c.is_whitespace() => {
                let rest = line[i..].trim_start();
                let rest = rest
                    .strip_prefix(|c| c == '=' || c == ':')
                    .map(str::trim_start)
                    .unwrap_or(rest);
                return (&line[..i], rest);
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(s: &str) -> Result<String, String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let code = (hex.len() == 4)
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32)
                    .ok_or_else(|| format!("malformed \\u escape: \\u{}", hex))?;
                out.push(code);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}
