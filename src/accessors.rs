use crate::{ConfigError, Error, Result};
use quote::ToTokens;
use syn::{Field, FnArg, ImplItem, ImplItemFn, ItemImpl, ReturnType, Type};

/// How field values are read and written on the entity, chosen once during
/// resolution; downstream code branches on the stored strategy instead of
/// re-discovering it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStrategy {
    /// Direct field access.
    #[default]
    Direct,
    /// Through a getter/setter pair derived from the field name.
    AccessorPair,
}

/// Locate the getter for `field` inside `item_impl`: a method named after
/// the field taking only `&self` and returning the field type.
///
/// With `strict`, a missing method or a mismatched signature is a
/// configuration error; without, the lookup yields `None` so callers can
/// probe speculatively.
pub fn find_get_method<'a>(
    field: &Field,
    item_impl: &'a ItemImpl,
    strict: bool,
) -> Result<Option<&'a ImplItemFn>> {
    let field_name = named_field(field)?;
    let method_name = field_name.clone();
    let Some(method) = find_method(item_impl, &method_name) else {
        return not_found(strict, "get", method_name, field_name);
    };
    let inputs = &method.sig.inputs;
    let receiver_only = inputs.len() == 1 && matches!(inputs.first(), Some(FnArg::Receiver(..)));
    let returns_field_type = match &method.sig.output {
        ReturnType::Type(_, ty) => same_type(ty, &field.ty),
        ReturnType::Default => false,
    };
    if !receiver_only || !returns_field_type {
        return mismatch(strict, "get", method_name, field_name);
    }
    Ok(Some(method))
}

/// Locate the setter for `field` inside `item_impl`: `set_<field>` taking
/// `&mut self` plus one argument of the field type and returning nothing.
///
/// Strictness as in [`find_get_method`].
pub fn find_set_method<'a>(
    field: &Field,
    item_impl: &'a ItemImpl,
    strict: bool,
) -> Result<Option<&'a ImplItemFn>> {
    let field_name = named_field(field)?;
    let method_name = format!("set_{}", field_name);
    let Some(method) = find_method(item_impl, &method_name) else {
        return not_found(strict, "set", method_name, field_name);
    };
    let inputs = &method.sig.inputs;
    let takes_field_type = inputs.len() == 2
        && matches!(inputs.first(), Some(FnArg::Receiver(..)))
        && match inputs.last() {
            Some(FnArg::Typed(arg)) => same_type(&arg.ty, &field.ty),
            _ => false,
        };
    let returns_nothing = match &method.sig.output {
        ReturnType::Default => true,
        ReturnType::Type(_, ty) => matches!(&**ty, Type::Tuple(tuple) if tuple.elems.is_empty()),
    };
    if !takes_field_type || !returns_nothing {
        return mismatch(strict, "set", method_name, field_name);
    }
    Ok(Some(method))
}

fn named_field(field: &Field) -> Result<String> {
    field
        .ident
        .as_ref()
        .map(ToString::to_string)
        .ok_or_else(|| Error::msg("Cannot derive accessor names for an unnamed field"))
}

fn find_method<'a>(item_impl: &'a ItemImpl, name: &str) -> Option<&'a ImplItemFn> {
    item_impl.items.iter().find_map(|item| match item {
        ImplItem::Fn(method) if method.sig.ident == name => Some(method),
        _ => None,
    })
}

fn same_type(a: &Type, b: &Type) -> bool {
    a.to_token_stream().to_string() == b.to_token_stream().to_string()
}

fn not_found<T>(
    strict: bool,
    kind: &'static str,
    method: String,
    field: String,
) -> Result<Option<T>> {
    if !strict {
        return Ok(None);
    }
    let error = ConfigError::AccessorNotFound {
        kind,
        method,
        field,
    };
    log::error!("{}", error);
    Err(error.into())
}

fn mismatch<T>(
    strict: bool,
    kind: &'static str,
    method: String,
    field: String,
) -> Result<Option<T>> {
    if !strict {
        return Ok(None);
    }
    let error = ConfigError::AccessorMismatch {
        kind,
        method,
        field,
    };
    log::error!("{}", error);
    Err(error.into())
}
