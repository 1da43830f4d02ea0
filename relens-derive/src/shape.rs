//! Implementation of the `#[derive(Shape)]` macro.
//!
//! Generates the `Shape` trait implementation describing a struct's fields
//! and reconstruction operations to the relens shape machinery.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{
    Data, DeriveInput, Fields, Ident, LitStr, Token, Type, parenthesized, parse_macro_input,
};

/// One declared field: identifier, type, and whether it is `#[shape(derived)]`.
struct FieldEntry {
    ident: Ident,
    ty: Type,
    derived: bool,
}

/// A parsed `constructor = "name(param, ...)"` value.
struct ConstructorSpec {
    name: Ident,
    parameters: Vec<Ident>,
}

impl Parse for ConstructorSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let content;
        parenthesized!(content in input);
        let parameters = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
        Ok(Self {
            name,
            parameters: parameters.into_iter().collect(),
        })
    }
}

/// Main implementation of the Shape derive macro.
pub fn derive_shape_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => generate_shape(&input, named_fields),
            Fields::Unnamed(_) => syn::Error::new_spanned(
                &input.ident,
                "Shape can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error(),
            Fields::Unit => syn::Error::new_spanned(
                &input.ident,
                "Shape cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error(),
        },
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Shape can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Shape cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_shape(input: &DeriveInput, named_fields: &syn::FieldsNamed) -> TokenStream2 {
    let fields = match collect_fields(named_fields) {
        Ok(fields) => fields,
        Err(error) => return error.to_compile_error(),
    };
    let constructors = match collect_constructors(input, &fields) {
        Ok(constructors) => constructors,
        Err(error) => return error.to_compile_error(),
    };

    let has_derived = fields.iter().any(|field| field.derived);
    if has_derived && constructors.is_empty() {
        return syn::Error::new_spanned(
            &input.ident,
            "structs with #[shape(derived)] fields require an explicit \
             #[shape(constructor = \"...\")] attribute.",
        )
        .to_compile_error();
    }

    let name = &input.ident;
    let field_infos: Vec<TokenStream2> = fields
        .iter()
        .map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let name_literal = LitStr::new(&ident.to_string(), ident.span());
            quote! {
                ::relens::shape::FieldInfo {
                    name: #name_literal,
                    type_name: ::std::any::type_name::<#ty>(),
                    type_id: ::std::any::TypeId::of::<#ty>(),
                    read: |source: &Self| -> ::std::boxed::Box<dyn ::std::any::Any> {
                        ::std::boxed::Box::new(::std::clone::Clone::clone(&source.#ident))
                    },
                }
            }
        })
        .collect();

    let mut constructor_infos: Vec<TokenStream2> = Vec::new();
    if !has_derived {
        // The struct literal over all fields: the broadest reconstruction
        // operation, declared first so it wins ties.
        let idents: Vec<&Ident> = fields.iter().map(|field| &field.ident).collect();
        let types: Vec<&Type> = fields.iter().map(|field| &field.ty).collect();
        let name_literals: Vec<LitStr> = idents
            .iter()
            .map(|ident| LitStr::new(&ident.to_string(), ident.span()))
            .collect();
        let display_name = LitStr::new(&name.to_string(), name.span());
        constructor_infos.push(quote! {
            ::relens::shape::ConstructorInfo {
                name: #display_name,
                parameters: ::std::vec![#(#name_literals),*],
                construct: |mut arguments: ::relens::shape::ArgumentPack| -> Self {
                    Self {
                        #(#idents: arguments.take::<#types>(#name_literals)),*
                    }
                },
            }
        });
    }
    for spec in &constructors {
        let function = &spec.name;
        let display_name = LitStr::new(&format!("{name}::{function}"), function.span());
        let parameter_types: Vec<&Type> = spec
            .parameters
            .iter()
            .map(|parameter| {
                fields
                    .iter()
                    .find(|field| field.ident == *parameter)
                    .map(|field| &field.ty)
                    .expect("constructor parameters were validated against the field list")
            })
            .collect();
        let name_literals: Vec<LitStr> = spec
            .parameters
            .iter()
            .map(|parameter| LitStr::new(&parameter.to_string(), parameter.span()))
            .collect();
        constructor_infos.push(quote! {
            ::relens::shape::ConstructorInfo {
                name: #display_name,
                parameters: ::std::vec![#(#name_literals),*],
                construct: |mut arguments: ::relens::shape::ArgumentPack| -> Self {
                    Self::#function(
                        #(arguments.take::<#parameter_types>(#name_literals)),*
                    )
                },
            }
        });
    }

    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::relens::shape::Shape for #name #type_generics #where_clause {
            fn shape() -> ::relens::shape::ShapeInfo<Self> {
                ::relens::shape::ShapeInfo {
                    fields: ::std::vec![#(#field_infos),*],
                    constructors: ::std::vec![#(#constructor_infos),*],
                }
            }
        }
    }
}

fn collect_fields(named_fields: &syn::FieldsNamed) -> syn::Result<Vec<FieldEntry>> {
    named_fields
        .named
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(field, "named field must have an ident"))?;
            let mut derived = false;
            for attr in &field.attrs {
                if !attr.path().is_ident("shape") {
                    continue;
                }
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("derived") {
                        derived = true;
                        Ok(())
                    } else {
                        Err(meta.error("unsupported field attribute; expected #[shape(derived)]"))
                    }
                })?;
            }
            Ok(FieldEntry {
                ident,
                ty: field.ty.clone(),
                derived,
            })
        })
        .collect()
}

fn collect_constructors(
    input: &DeriveInput,
    fields: &[FieldEntry],
) -> syn::Result<Vec<ConstructorSpec>> {
    let mut constructors = Vec::new();
    for attr in &input.attrs {
        if !attr.path().is_ident("shape") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("constructor") {
                let literal: LitStr = meta.value()?.parse()?;
                let spec: ConstructorSpec = literal.parse()?;
                for parameter in &spec.parameters {
                    if !fields.iter().any(|field| field.ident == *parameter) {
                        return Err(syn::Error::new(
                            literal.span(),
                            format!(
                                "constructor parameter `{parameter}` does not name a declared field"
                            ),
                        ));
                    }
                }
                constructors.push(spec);
                Ok(())
            } else {
                Err(meta.error(
                    "unsupported shape attribute; expected #[shape(constructor = \"...\")]",
                ))
            }
        })?;
    }
    Ok(constructors)
}
