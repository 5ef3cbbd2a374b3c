use crate::{Error, Parse, Result, SqlType, Value};
use anyhow::Context;
use std::fmt::Debug;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, format_description};

/// Per-type conversion seam between text-encoded configuration values and
/// typed column values.
///
/// The default implementation is [`TagPersister`]; custom persisters plug
/// into field configuration for types the standard set does not cover.
pub trait FieldPersister: Send + Sync + Debug {
    /// Wire-level type used for positional binds, including typed nulls.
    fn sql_type(&self) -> SqlType;

    /// Parse a string-encoded value. `format` is a pattern for types that
    /// support one (the date family) and is ignored by the others.
    fn parse_text(&self, format: Option<&str>, text: &str) -> Result<Value>;
}

/// Default persister, directed by an empty [`Value`] tag.
#[derive(Debug, Clone)]
pub struct TagPersister {
    tag: Value,
    sql_type: SqlType,
}

impl TagPersister {
    /// Fails on `Value::Null`: an untyped tag cannot direct binding.
    pub fn new(tag: Value) -> Result<Self> {
        let Some(sql_type) = tag.sql_type() else {
            return Err(Error::msg("Cannot build a persister from an untyped tag"));
        };
        Ok(Self { tag, sql_type })
    }
}

impl FieldPersister for TagPersister {
    fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    fn parse_text(&self, format: Option<&str>, text: &str) -> Result<Value> {
        Ok(match &self.tag {
            Value::Null => {
                return Err(Error::msg("Cannot parse a value for an untyped tag"));
            }
            Value::Boolean(..) => Value::Boolean(Some(Parse::parse(text)?)),
            Value::Int8(..) => Value::Int8(Some(Parse::parse(text)?)),
            Value::Int16(..) => Value::Int16(Some(Parse::parse(text)?)),
            Value::Int32(..) => Value::Int32(Some(Parse::parse(text)?)),
            Value::Int64(..) => Value::Int64(Some(Parse::parse(text)?)),
            Value::UInt8(..) => Value::UInt8(Some(Parse::parse(text)?)),
            Value::UInt16(..) => Value::UInt16(Some(Parse::parse(text)?)),
            Value::UInt32(..) => Value::UInt32(Some(Parse::parse(text)?)),
            Value::UInt64(..) => Value::UInt64(Some(Parse::parse(text)?)),
            Value::Float32(..) => Value::Float32(Some(Parse::parse(text)?)),
            Value::Float64(..) => Value::Float64(Some(Parse::parse(text)?)),
            Value::Decimal(.., precision, scale) => {
                Value::Decimal(Some(Parse::parse(text)?), *precision, *scale)
            }
            Value::Varchar(..) => Value::Varchar(Some(Parse::parse(text)?)),
            Value::Blob(..) => Value::Blob(Some(Parse::parse(text)?)),
            Value::Date(..) => Value::Date(Some(match format {
                Some(format) => Date::parse(text, &pattern(format)?)
                    .with_context(|| format!("Cannot parse '{}' as time::Date", text))?,
                None => Parse::parse(text)?,
            })),
            Value::Time(..) => Value::Time(Some(match format {
                Some(format) => Time::parse(text, &pattern(format)?)
                    .with_context(|| format!("Cannot parse '{}' as time::Time", text))?,
                None => Parse::parse(text)?,
            })),
            Value::Timestamp(..) => Value::Timestamp(Some(match format {
                Some(format) => PrimitiveDateTime::parse(text, &pattern(format)?)
                    .with_context(|| {
                        format!("Cannot parse '{}' as time::PrimitiveDateTime", text)
                    })?,
                None => Parse::parse(text)?,
            })),
            Value::TimestampWithTimezone(..) => Value::TimestampWithTimezone(Some(match format {
                Some(format) => OffsetDateTime::parse(text, &pattern(format)?)
                    .with_context(|| format!("Cannot parse '{}' as time::OffsetDateTime", text))?,
                None => Parse::parse(text)?,
            })),
            Value::Uuid(..) => Value::Uuid(Some(Parse::parse(text)?)),
        })
    }
}

fn pattern(format: &str) -> Result<Vec<format_description::BorrowedFormatItem<'_>>> {
    format_description::parse(format)
        .with_context(|| format!("Invalid format pattern `{}`", format))
}
