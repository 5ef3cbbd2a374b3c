#[cfg(test)]
mod tests {
    use quote::quote;
    use silo::{ConfigError, find_get_method, find_set_method};
    use syn::{Field, ItemImpl, parse::Parser, parse_quote};

    fn field(tokens: proc_macro2::TokenStream) -> Field {
        Field::parse_named
            .parse2(tokens)
            .expect("expected a named field")
    }

    fn accessors_impl() -> ItemImpl {
        parse_quote! {
            impl Order {
                fn status(&self) -> String {
                    self.status.clone()
                }
                fn set_status(&mut self, status: String) {
                    self.status = status;
                }
                fn count(&self) -> u32 {
                    self.count
                }
                fn set_count(&mut self, count: i64) {
                    self.count = count as u32;
                }
            }
        }
    }

    #[test]
    fn finds_matching_getter_and_setter() {
        let item_impl = accessors_impl();
        let field = field(quote!(status: String));
        let getter = find_get_method(&field, &item_impl, true).unwrap().unwrap();
        assert_eq!(getter.sig.ident.to_string(), "status");
        let setter = find_set_method(&field, &item_impl, true).unwrap().unwrap();
        assert_eq!(setter.sig.ident.to_string(), "set_status");
    }

    #[test]
    fn missing_getter_is_strict_error() {
        let item_impl = accessors_impl();
        let field = field(quote!(comment: String));
        let error = find_get_method(&field, &item_impl, true).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ConfigError>(),
            Some(ConfigError::AccessorNotFound { kind: "get", .. })
        ));
    }

    #[test]
    fn missing_getter_is_lenient_none() {
        let item_impl = accessors_impl();
        let field = field(quote!(comment: String));
        let getter = find_get_method(&field, &item_impl, false).unwrap();
        assert!(getter.is_none());
    }

    #[test]
    fn getter_with_wrong_return_type_mismatches() {
        let item_impl = accessors_impl();
        // `count()` returns u32 while the field declares i64.
        let field = field(quote!(count: i64));
        let error = find_get_method(&field, &item_impl, true).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ConfigError>(),
            Some(ConfigError::AccessorMismatch { kind: "get", .. })
        ));
        assert!(
            find_get_method(&field, &item_impl, false)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn setter_with_wrong_argument_type_mismatches() {
        let item_impl = accessors_impl();
        // `set_count` takes i64 while the field declares u32.
        let field = field(quote!(count: u32));
        let error = find_set_method(&field, &item_impl, true).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ConfigError>(),
            Some(ConfigError::AccessorMismatch { kind: "set", .. })
        ));
    }

    #[test]
    fn setter_returning_a_value_mismatches() {
        let item_impl: ItemImpl = parse_quote! {
            impl Order {
                fn set_status(&mut self, status: String) -> bool {
                    self.status = status;
                    true
                }
            }
        };
        let field = field(quote!(status: String));
        let error = find_set_method(&field, &item_impl, true).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ConfigError>(),
            Some(ConfigError::AccessorMismatch { kind: "set", .. })
        ));
    }

    #[test]
    fn explicit_unit_return_is_accepted() {
        let item_impl: ItemImpl = parse_quote! {
            impl Order {
                fn set_status(&mut self, status: String) -> () {
                    self.status = status;
                }
            }
        };
        let field = field(quote!(status: String));
        assert!(
            find_set_method(&field, &item_impl, true)
                .unwrap()
                .is_some()
        );
    }
}
