use std::fmt;

use crate::error::{SchemaError, SchemaResult};

/// A non-negative integer count (`minLength`, `maxItems`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveInt(u64);

impl PositiveInt {
    pub const ZERO: PositiveInt = PositiveInt(0);

    pub fn new(value: i128) -> SchemaResult<Self> {
        if value < 0 {
            return Err(SchemaError::invalid(format!(
                "value must be greater or equal to 0, got {value}"
            )));
        }
        u64::try_from(value)
            .map(PositiveInt)
            .map_err(|_| SchemaError::invalid(format!("value {value} is too large")))
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Whether `count` is at least this value.
    pub fn le_count(self, count: usize) -> bool {
        self.0 <= count as u64
    }

    /// Whether `count` is at most this value.
    pub fn ge_count(self, count: usize) -> bool {
        self.0 >= count as u64
    }
}

impl From<u64> for PositiveInt {
    fn from(value: u64) -> Self {
        PositiveInt(value)
    }
}

impl fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
