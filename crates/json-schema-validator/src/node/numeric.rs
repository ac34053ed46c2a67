use crate::model::{Interval, Multiplier};

/// Keywords that make an untyped fragment a numeric schema.
pub const NUMBER_FIELDS: &[&str] = &[
    "multipleOf",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
];

/// `{"type": "integer"}` / `{"type": "number"}` constraints.
///
/// `T` is the comparison domain: `i128` for integer schemas, `f64` for
/// number schemas.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericNode<T> {
    multiple_of: Option<Multiplier<T>>,
    range: Interval<T>,
}

pub type IntegerNode = NumericNode<i128>;
pub type NumberNode = NumericNode<f64>;

impl<T> Default for NumericNode<T> {
    fn default() -> Self {
        Self {
            multiple_of: None,
            range: Interval::default(),
        }
    }
}

impl<T: Copy> NumericNode<T> {
    pub fn new(multiple_of: Option<Multiplier<T>>, range: Interval<T>) -> Self {
        Self { multiple_of, range }
    }

    pub fn multiple_of(&self) -> Option<Multiplier<T>> {
        self.multiple_of
    }

    pub fn range(&self) -> &Interval<T> {
        &self.range
    }
}
