use crate::{Value, matches_path};
use std::mem;
use syn::{GenericArgument, PathArguments, Type, TypePath, TypeSlice};

/// Declared type of a struct field decoded into a column type tag.
#[derive(Default, Debug, Clone)]
pub struct TypeDecoded {
    /// Empty tag, `Value::Null` when the declaration is not a recognized
    /// scalar (enums and foreign entities land here and are classified by
    /// their declarative records instead).
    pub value: Value,
    /// Whether the declaration was wrapped in `Option`.
    pub nullable: bool,
}

/// Infer the column type tag from a field declaration, unwrapping
/// `Option` / `Box` / `Arc` / `Rc`.
pub fn decode_type(ty: &Type) -> TypeDecoded {
    let mut nullable = false;
    let value = 'value: {
        if let Type::Path(TypePath { path, .. }) = ty {
            if let Some(ident) = path.get_ident() {
                if ident == "bool" {
                    break 'value Value::Boolean(None);
                } else if ident == "i8" {
                    break 'value Value::Int8(None);
                } else if ident == "i16" {
                    break 'value Value::Int16(None);
                } else if ident == "i32" {
                    break 'value Value::Int32(None);
                } else if ident == "i64" {
                    break 'value Value::Int64(None);
                } else if ident == "u8" {
                    break 'value Value::UInt8(None);
                } else if ident == "u16" {
                    break 'value Value::UInt16(None);
                } else if ident == "u32" {
                    break 'value Value::UInt32(None);
                } else if ident == "u64" {
                    break 'value Value::UInt64(None);
                } else if ident == "isize" {
                    break 'value if mem::size_of::<isize>() == mem::size_of::<i32>() {
                        Value::Int32(None)
                    } else {
                        Value::Int64(None)
                    };
                } else if ident == "usize" {
                    break 'value if mem::size_of::<usize>() == mem::size_of::<u32>() {
                        Value::UInt32(None)
                    } else {
                        Value::UInt64(None)
                    };
                } else if ident == "f32" {
                    break 'value Value::Float32(None);
                } else if ident == "f64" {
                    break 'value Value::Float64(None);
                }
            }
            if matches_path(path, &["std", "string", "String"]) {
                break 'value Value::Varchar(None);
            } else if matches_path(path, &["rust_decimal", "Decimal"]) {
                break 'value Value::Decimal(None, 0, 0);
            } else if matches_path(path, &["time", "Time"]) {
                break 'value Value::Time(None);
            } else if matches_path(path, &["time", "Date"]) {
                break 'value Value::Date(None);
            } else if matches_path(path, &["time", "PrimitiveDateTime"]) {
                break 'value Value::Timestamp(None);
            } else if matches_path(path, &["time", "OffsetDateTime"]) {
                break 'value Value::TimestampWithTimezone(None);
            } else if matches_path(path, &["uuid", "Uuid"]) {
                break 'value Value::Uuid(None);
            }
            let is_option = matches_path(path, &["std", "option", "Option"]);
            let is_wrapper = is_option
                || matches_path(path, &["std", "boxed", "Box"])
                || matches_path(path, &["std", "rc", "Rc"])
                || matches_path(path, &["std", "sync", "Arc"]);
            if is_wrapper
                && let Some(segment) = path.segments.last()
                && let PathArguments::AngleBracketed(bracketed) = &segment.arguments
                && let Some(GenericArgument::Type(inner)) = bracketed.args.first()
            {
                let inner = decode_type(inner);
                nullable = is_option || inner.nullable;
                break 'value inner.value;
            }
            break 'value Value::Null;
        } else if let Type::Slice(TypeSlice { elem, .. }) = ty {
            if matches!(decode_type(elem).value, Value::UInt8(..)) {
                break 'value Value::Blob(None);
            }
            break 'value Value::Null;
        }
        Value::Null
    };
    TypeDecoded { value, nullable }
}
