use crate::error::{SchemaError, SchemaResult};

/// `minimum` / `exclusiveMinimum`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowerBound<T> {
    pub value: T,
    pub exclusive: bool,
}

/// `maximum` / `exclusiveMaximum`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpperBound<T> {
    pub value: T,
    pub exclusive: bool,
}

impl<T: PartialOrd + Copy> LowerBound<T> {
    pub fn inclusive(value: T) -> Self {
        Self {
            value,
            exclusive: false,
        }
    }

    pub fn exclusive(value: T) -> Self {
        Self {
            value,
            exclusive: true,
        }
    }

    pub fn accepts(&self, n: T) -> bool {
        if self.exclusive {
            n > self.value
        } else {
            n >= self.value
        }
    }

    /// The more restrictive of two lower bounds.
    pub fn tighter(self, other: Self) -> Self {
        if other.value > self.value || (other.value == self.value && other.exclusive) {
            other
        } else {
            self
        }
    }
}

impl<T: PartialOrd + Copy> UpperBound<T> {
    pub fn inclusive(value: T) -> Self {
        Self {
            value,
            exclusive: false,
        }
    }

    pub fn exclusive(value: T) -> Self {
        Self {
            value,
            exclusive: true,
        }
    }

    pub fn accepts(&self, n: T) -> bool {
        if self.exclusive {
            n < self.value
        } else {
            n <= self.value
        }
    }

    /// The more restrictive of two upper bounds.
    pub fn tighter(self, other: Self) -> Self {
        if other.value < self.value || (other.value == self.value && other.exclusive) {
            other
        } else {
            self
        }
    }
}

/// A numeric range; an absent side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    lower: Option<LowerBound<T>>,
    upper: Option<UpperBound<T>>,
}

impl<T> Default for Interval<T> {
    fn default() -> Self {
        Self {
            lower: None,
            upper: None,
        }
    }
}

impl<T: PartialOrd + Copy> Interval<T> {
    pub fn new(lower: Option<LowerBound<T>>, upper: Option<UpperBound<T>>) -> SchemaResult<Self> {
        if let (Some(lower), Some(upper)) = (lower, upper) {
            if upper.value < lower.value {
                return Err(SchemaError::invalid(
                    "maximum must be greater or equal to minimum",
                ));
            }
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> Option<LowerBound<T>> {
        self.lower
    }

    pub fn upper(&self) -> Option<UpperBound<T>> {
        self.upper
    }

    pub fn contains(&self, n: T) -> bool {
        self.lower.map_or(true, |b| b.accepts(n)) && self.upper.map_or(true, |b| b.accepts(n))
    }
}
