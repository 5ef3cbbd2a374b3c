use crate::SqlType;
use proc_macro2::TokenStream;
use quote::{ToTokens, TokenStreamExt, quote};
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Column value and column type in one.
///
/// An empty variant (`None` payload) describes a column's type without
/// carrying data, a populated variant is a concrete value. `Value::Null`
/// carries no type information at all and is the "unknown type" tag.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    UInt8(Option<u8>),
    UInt16(Option<u16>),
    UInt32(Option<u32>),
    UInt64(Option<u64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>, /* prec: */ u8, /* scale: */ u8),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Date(Option<Date>),
    Time(Option<Time>),
    Timestamp(Option<PrimitiveDateTime>),
    TimestampWithTimezone(Option<OffsetDateTime>),
    Uuid(Option<Uuid>),
}

impl Value {
    pub fn same_type(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Decimal(.., l_prec, l_scale), Self::Decimal(.., r_prec, r_scale)) => {
                l_prec == r_prec && l_scale == r_scale
            }
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }

    /// Wire-level binding type, `None` only for the untyped `Value::Null`.
    pub fn sql_type(&self) -> Option<SqlType> {
        Some(match self {
            Value::Null => return None,
            Value::Boolean(..) => SqlType::Boolean,
            Value::Int8(..) => SqlType::TinyInt,
            Value::Int16(..) => SqlType::SmallInt,
            Value::Int32(..) => SqlType::Integer,
            Value::Int64(..) => SqlType::BigInt,
            Value::UInt8(..) => SqlType::SmallInt,
            Value::UInt16(..) => SqlType::Integer,
            Value::UInt32(..) => SqlType::BigInt,
            Value::UInt64(..) => SqlType::BigInt,
            Value::Float32(..) => SqlType::Float,
            Value::Float64(..) => SqlType::Double,
            Value::Decimal(..) => SqlType::Decimal,
            Value::Varchar(..) => SqlType::Varchar,
            Value::Blob(..) => SqlType::Blob,
            Value::Date(..) => SqlType::Date,
            Value::Time(..) => SqlType::Time,
            Value::Timestamp(..) => SqlType::Timestamp,
            Value::TimestampWithTimezone(..) => SqlType::TimestampWithTimezone,
            Value::Uuid(..) => SqlType::Uuid,
        })
    }
}

impl ToTokens for Value {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.append_all(match self {
            Value::Null => quote! { ::silo::Value::Null },
            Value::Boolean(..) => quote! { ::silo::Value::Boolean(None) },
            Value::Int8(..) => quote! { ::silo::Value::Int8(None) },
            Value::Int16(..) => quote! { ::silo::Value::Int16(None) },
            Value::Int32(..) => quote! { ::silo::Value::Int32(None) },
            Value::Int64(..) => quote! { ::silo::Value::Int64(None) },
            Value::UInt8(..) => quote! { ::silo::Value::UInt8(None) },
            Value::UInt16(..) => quote! { ::silo::Value::UInt16(None) },
            Value::UInt32(..) => quote! { ::silo::Value::UInt32(None) },
            Value::UInt64(..) => quote! { ::silo::Value::UInt64(None) },
            Value::Float32(..) => quote! { ::silo::Value::Float32(None) },
            Value::Float64(..) => quote! { ::silo::Value::Float64(None) },
            Value::Decimal(.., precision, scale) => {
                quote! { ::silo::Value::Decimal(None, #precision, #scale) }
            }
            Value::Varchar(..) => quote! { ::silo::Value::Varchar(None) },
            Value::Blob(..) => quote! { ::silo::Value::Blob(None) },
            Value::Date(..) => quote! { ::silo::Value::Date(None) },
            Value::Time(..) => quote! { ::silo::Value::Time(None) },
            Value::Timestamp(..) => quote! { ::silo::Value::Timestamp(None) },
            Value::TimestampWithTimezone(..) => {
                quote! { ::silo::Value::TimestampWithTimezone(None) }
            }
            Value::Uuid(..) => quote! { ::silo::Value::Uuid(None) },
        });
    }
}
