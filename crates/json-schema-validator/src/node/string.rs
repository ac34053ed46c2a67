use crate::error::{SchemaError, SchemaResult};
use crate::format::StringFormat;
use crate::model::{CompiledPattern, PositiveInt};

pub const STRING_FIELDS: &[&str] = &["minLength", "maxLength", "pattern", "format"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringNode {
    min_length: PositiveInt,
    max_length: Option<PositiveInt>,
    pattern: Option<CompiledPattern>,
    format: Option<StringFormat>,
}

impl StringNode {
    pub fn new(
        min_length: PositiveInt,
        max_length: Option<PositiveInt>,
        pattern: Option<CompiledPattern>,
        format: Option<StringFormat>,
    ) -> SchemaResult<Self> {
        if max_length.is_some_and(|max| max < min_length) {
            return Err(SchemaError::invalid(
                "maxLength must be greater or equal to minLength",
            ));
        }
        Ok(Self {
            min_length,
            max_length,
            pattern,
            format,
        })
    }

    pub fn min_length(&self) -> PositiveInt {
        self.min_length
    }

    pub fn max_length(&self) -> Option<PositiveInt> {
        self.max_length
    }

    pub fn pattern(&self) -> Option<&CompiledPattern> {
        self.pattern.as_ref()
    }

    pub fn format(&self) -> Option<StringFormat> {
        self.format
    }
}
