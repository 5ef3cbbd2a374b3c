use crate::{Error, Result};
use anyhow::Context;
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, macros::format_description};
use uuid::Uuid;

/// Decoding of string-encoded configuration values (column defaults) into
/// typed payloads.
pub trait Parse {
    fn parse(value: impl AsRef<str>) -> Result<Self>
    where
        Self: Sized;
}

impl Parse for bool {
    fn parse(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        match value {
            "true" | "TRUE" | "1" => Ok(true),
            "false" | "FALSE" | "0" => Ok(false),
            _ => Err(Error::msg(format!("Cannot parse '{}' as bool", value))),
        }
    }
}

macro_rules! impl_parse_int {
    ($type:ty) => {
        impl Parse for $type {
            fn parse(value: impl AsRef<str>) -> Result<Self> {
                let value = value.as_ref();
                atoi::atoi(value.as_bytes()).ok_or_else(|| {
                    Error::msg(format!(
                        "Cannot parse '{}' as {}",
                        value,
                        stringify!($type)
                    ))
                })
            }
        }
    };
}

impl_parse_int!(i8);
impl_parse_int!(i16);
impl_parse_int!(i32);
impl_parse_int!(i64);
impl_parse_int!(u8);
impl_parse_int!(u16);
impl_parse_int!(u32);
impl_parse_int!(u64);

macro_rules! impl_parse_float {
    ($type:ty) => {
        impl Parse for $type {
            fn parse(value: impl AsRef<str>) -> Result<Self> {
                let value = value.as_ref();
                fast_float::parse(value).map_err(|_| {
                    Error::msg(format!(
                        "Cannot parse '{}' as {}",
                        value,
                        stringify!($type)
                    ))
                })
            }
        }
    };
}

impl_parse_float!(f32);
impl_parse_float!(f64);

impl Parse for Decimal {
    fn parse(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        value
            .parse::<Decimal>()
            .with_context(|| format!("Cannot parse '{}' as Decimal", value))
    }
}

impl Parse for String {
    fn parse(value: impl AsRef<str>) -> Result<Self> {
        Ok(value.as_ref().to_owned())
    }
}

impl Parse for Box<[u8]> {
    fn parse(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        hex::decode(value)
            .map(Vec::into_boxed_slice)
            .with_context(|| format!("Cannot decode '{}' as a hex encoded blob", value))
    }
}

impl Parse for Date {
    fn parse(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        Date::parse(value, format_description!("[year]-[month]-[day]"))
            .with_context(|| format!("Cannot parse '{}' as time::Date", value))
    }
}

impl Parse for Time {
    fn parse(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        Time::parse(
            value,
            format_description!("[hour]:[minute]:[second].[subsecond]"),
        )
        .or(Time::parse(
            value,
            format_description!("[hour]:[minute]:[second]"),
        ))
        .or(Time::parse(value, format_description!("[hour]:[minute]")))
        .with_context(|| format!("Cannot parse '{}' as time::Time", value))
    }
}

impl Parse for PrimitiveDateTime {
    fn parse(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        PrimitiveDateTime::parse(
            value,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
        )
        .or(PrimitiveDateTime::parse(
            value,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        ))
        .or(PrimitiveDateTime::parse(
            value,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
        ))
        .or(PrimitiveDateTime::parse(
            value,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        ))
        .with_context(|| format!("Cannot parse '{}' as time::PrimitiveDateTime", value))
    }
}

impl Parse for OffsetDateTime {
    fn parse(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        OffsetDateTime::parse(
            value,
            format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]:[offset_minute]"
            ),
        )
        .or(OffsetDateTime::parse(
            value,
            format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
            ),
        ))
        .or(OffsetDateTime::parse(
            value,
            format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]"
            ),
        ))
        .with_context(|| format!("Cannot parse '{}' as time::OffsetDateTime", value))
    }
}

impl Parse for Uuid {
    fn parse(value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        Uuid::parse_str(value).with_context(|| format!("Cannot parse '{}' as uuid::Uuid", value))
    }
}
