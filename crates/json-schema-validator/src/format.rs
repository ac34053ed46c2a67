//! String `format` keyword values and their predicates.
//!
//! Temporal formats follow ISO-8601 with a mandatory zone offset (`Z` or
//! `+HH:MM`): `2018-03-10+01:00`, `17:54:20Z`, `2018-03-10T17:54:20.5+01:00`.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::error::{SchemaError, SchemaResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    Date,
    Time,
    DateTime,
    Email,
    Hostname,
    Ipv4,
    Ipv6,
    Uri,
}

impl StringFormat {
    pub const ALL: [StringFormat; 8] = [
        StringFormat::Date,
        StringFormat::Time,
        StringFormat::DateTime,
        StringFormat::Email,
        StringFormat::Hostname,
        StringFormat::Ipv4,
        StringFormat::Ipv6,
        StringFormat::Uri,
    ];

    pub fn from_name(name: &str) -> SchemaResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| SchemaError::invalid(format!("unknown string format {name:?}")))
    }

    /// The keyword value, e.g. `"date-time"`.
    pub fn name(self) -> &'static str {
        match self {
            StringFormat::Date => "date",
            StringFormat::Time => "time",
            StringFormat::DateTime => "date-time",
            StringFormat::Email => "email",
            StringFormat::Hostname => "hostname",
            StringFormat::Ipv4 => "ipv4",
            StringFormat::Ipv6 => "ipv6",
            StringFormat::Uri => "uri",
        }
    }

    pub fn expectation(self) -> &'static str {
        match self {
            StringFormat::Date => "element should be a date",
            StringFormat::Time => "element should be a time",
            StringFormat::DateTime => "element should be a date-time",
            StringFormat::Email => "element should be an email address",
            StringFormat::Hostname => "element should be a host name",
            StringFormat::Ipv4 => "element should be an IPv4 address",
            StringFormat::Ipv6 => "element should be an IPv6 address",
            StringFormat::Uri => "element should be a URI",
        }
    }

    pub fn is_valid(self, s: &str) -> bool {
        match self {
            StringFormat::Date => is_date(s),
            StringFormat::Time => is_time(s),
            StringFormat::DateTime => is_date_time(s),
            StringFormat::Email => is_email(s),
            StringFormat::Hostname => is_hostname(s),
            StringFormat::Ipv4 => s.parse::<Ipv4Addr>().is_ok(),
            StringFormat::Ipv6 => s.parse::<Ipv6Addr>().is_ok(),
            StringFormat::Uri => url::Url::parse(s).is_ok(),
        }
    }
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -------------------------------------------------------------------------
// Temporal formats

/// Strips a trailing `Z` or `±HH:MM` offset, returning the local part.
fn strip_offset(s: &str) -> Option<&str> {
    if let Some(local) = s.strip_suffix('Z') {
        return Some(local);
    }
    let split = s.len().checked_sub(6)?;
    let (local, offset) = (s.get(..split)?, s.get(split..)?);
    let bytes = offset.as_bytes();
    if !matches!(bytes[0], b'+' | b'-') || bytes[3] != b':' {
        return None;
    }
    let hours = two_digits(&bytes[1..3])?;
    let minutes = two_digits(&bytes[4..6])?;
    (hours <= 18 && minutes <= 59).then_some(local)
}

fn two_digits(b: &[u8]) -> Option<u32> {
    match b {
        [h @ b'0'..=b'9', l @ b'0'..=b'9'] => Some(u32::from(h - b'0') * 10 + u32::from(l - b'0')),
        _ => None,
    }
}

fn is_local_date(s: &str) -> bool {
    // chrono's `%Y` also accepts signed and longer years
    s.len() == 10 && s.as_bytes()[0].is_ascii_digit() && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn is_local_time(s: &str) -> bool {
    if !s.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        return false;
    }
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f").is_ok() || NaiveTime::parse_from_str(s, "%H:%M").is_ok()
}

fn is_date(s: &str) -> bool {
    strip_offset(s).is_some_and(is_local_date)
}

fn is_time(s: &str) -> bool {
    strip_offset(s).is_some_and(is_local_time)
}

fn is_date_time(s: &str) -> bool {
    let Some(local) = strip_offset(s) else {
        return false;
    };
    match local.split_once(['T', 't']) {
        Some((date, time)) => is_local_date(date) && is_local_time(time),
        None => false,
    }
}

// -------------------------------------------------------------------------
// Internet formats

fn email_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$",
        )
        .ok()
    })
    .as_ref()
}

fn hostname_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*\.?$").ok()
    })
    .as_ref()
}

fn is_email(s: &str) -> bool {
    // dot-atom local part: no leading, trailing or doubled dots
    let Some((local, _)) = s.rsplit_once('@') else {
        return false;
    };
    if local.len() > 64 || local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    email_regex().is_some_and(|re| re.is_match(s))
}

fn is_hostname(s: &str) -> bool {
    s.trim_end_matches('.').len() <= 253 && hostname_regex().is_some_and(|re| re.is_match(s))
}
