//! ECMA-262 `pattern` support on top of the `regex` crate.
//!
//! Schema patterns follow the JavaScript dialect. The source is accepted
//! either bare (`^a+$`) or in literal form with flags (`/^a+$/i`). The ASCII
//! meaning of `\d`, `\w` and their negations is restored before compiling,
//! since `regex` treats them as Unicode classes.
//!
//! Known gaps: lookaround and backreferences are not supported by the engine
//! and fail at load time; `.` excludes only `\n` (ECMA also excludes `\r`,
//! U+2028 and U+2029).

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::{SchemaError, SchemaResult};

const KNOWN_FLAGS: &str = "gimsuy";

#[derive(Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
}

impl CompiledPattern {
    pub fn compile(source: &str) -> SchemaResult<Self> {
        let (body, flags) = split_literal(source);

        let mut builder = RegexBuilder::new(&translate(body));
        let mut seen = String::new();
        for flag in flags.chars() {
            if seen.contains(flag) {
                return Err(invalid(source, format!("duplicated flag '{flag}'")));
            }
            seen.push(flag);
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                // no effect on a single `test`
                _ => {}
            }
        }

        let regex = builder
            .build()
            .map_err(|e| invalid(source, e.to_string()))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// ECMA `RegExp.prototype.test`: an unanchored search.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompiledPattern").field(&self.source).finish()
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn invalid(source: &str, reason: String) -> SchemaError {
    SchemaError::InvalidPattern {
        pattern: source.to_string(),
        reason,
    }
}

/// Splits `/body/flags`; anything else is a bare body without flags.
fn split_literal(source: &str) -> (&str, &str) {
    if let Some(rest) = source.strip_prefix('/') {
        if let Some(end) = rest.rfind('/') {
            let flags = &rest[end + 1..];
            if flags.chars().all(|c| KNOWN_FLAGS.contains(c)) {
                return (&rest[..end], flags);
            }
        }
    }
    (source, "")
}

fn translate(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('d') => out.push_str("[0-9]"),
            Some('D') => out.push_str("[^0-9]"),
            Some('w') => out.push_str("[0-9A-Za-z_]"),
            Some('W') => out.push_str("[^0-9A-Za-z_]"),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
