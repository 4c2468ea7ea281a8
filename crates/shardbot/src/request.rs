//! Slash-command request decoding.
//!
//! Chat platforms deliver slash commands as an `application/x-www-form-urlencoded` body.
//! Only two fields matter here: `command` (e.g. `/support`) and `text`, the free-form
//! remainder that gets split into positional arguments.

use crate::error::DecodeError;
use tracing::debug;

/// Decoded form body. Repeated keys keep every value in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    fields: Vec<(String, Vec<String>)>,
}

impl FormFields {
    /// Parse a raw form body.
    ///
    /// - Pairs are separated by `&`; empty segments are skipped.
    /// - A segment containing `;` is rejected.
    /// - `+` decodes to a space and `%XY` to the byte `0xXY`.
    pub fn parse(body: &str) -> Result<Self, DecodeError> {
        let mut form = FormFields::default();
        for segment in body.split('&') {
            if segment.contains(';') {
                return Err(DecodeError::Semicolon {
                    segment: segment.to_string(),
                });
            }
            if segment.is_empty() {
                continue;
            }
            let (raw_key, raw_value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = unescape(raw_key)?;
            let value = unescape(raw_value)?;
            form.push(key, value);
        }
        Ok(form)
    }

    fn push(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.fields.push((key, vec![value])),
        }
    }

    /// First value for `key`, or the empty string when absent.
    pub fn get(&self, key: &str) -> &str {
        self.get_all(key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }
}

fn unescape(raw: &str) -> Result<String, DecodeError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => {
                    let end = (i + 3).min(bytes.len());
                    return Err(DecodeError::InvalidEscape {
                        escape: String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                    });
                }
            }
        } else {
            i += 1;
        }
    }

    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8 {
            field: raw.to_string(),
        })
}

/// A decoded slash command: the case-folded command name and its argument tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct SlashCommand {
    pub command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn from_form(form: &FormFields) -> Self {
        let command = form.get("command").to_lowercase();
        let args = form
            .get("text")
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { command, args }
    }
}

/// Decode a raw request body into a [`SlashCommand`], logging every field received.
pub fn decode(body: &str) -> Result<SlashCommand, DecodeError> {
    let form = FormFields::parse(body)?;
    for (key, values) in form.iter() {
        debug!(" - {key}: {values:?}");
    }
    Ok(SlashCommand::from_form(&form))
}
