//! Implementation of the `#[derive(Fields)]` macro.
//!
//! Generates a named field accessor method for each struct field.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, LitStr, parse_macro_input};

/// Main implementation of the Fields derive macro.
pub fn derive_fields_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_fields(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Fields can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Fields cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates field accessor methods for a struct's fields.
fn generate_struct_fields(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let accessor_methods: Vec<TokenStream2> = named_fields
                .named
                .iter()
                .map(|field| {
                    let field_name = field.ident.as_ref().expect("named field must have an ident");
                    let field_type = &field.ty;
                    let method_name = format_ident!("{}_field", field_name);
                    let name_literal = LitStr::new(&field_name.to_string(), field_name.span());

                    quote! {
                        /// Returns the named accessor for this field.
                        #[inline]
                        #[must_use]
                        pub fn #method_name() -> ::relens::optics::Field<Self, #field_type> {
                            ::relens::optics::Field::new(
                                #name_literal,
                                |source: &Self| &source.#field_name,
                            )
                        }
                    }
                })
                .collect();

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#accessor_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Fields can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Fields cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}
