use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Member, spanned::Spanned};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

// -----------------------------------------------------------------------------
// StructField

/// A named field of the reflected struct.
pub(crate) struct StructField<'a> {
    /// The raw field.
    pub data: &'a Field,
    /// The reflection-based attributes on the field.
    pub attrs: FieldAttributes,
    /// The declaration index, also the descriptor index.
    pub index: usize,
}

impl StructField<'_> {
    /// The descriptor name, `rename` or the field ident.
    pub fn name(&self) -> String {
        match &self.attrs.rename {
            Some(lit) => lit.value(),
            None => self
                .data
                .ident
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }

    /// The accessor of this field on `self`.
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(self.index.into()),
        }
    }

    /// Generates a `NamedField` construction.
    pub fn to_info_tokens(&self, vc_mapping_path: &syn::Path) -> TokenStream {
        let named_field_ = crate::path::named_field_(vc_mapping_path);
        let ty = &self.data.ty;
        let name = self.name();
        quote! {
            #named_field_::new::<#ty>(#name)
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A struct with named fields, the only shape the derive accepts.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`Reflect` cannot be derived for tuple structs, use named fields",
                    ));
                }
                Fields::Unit => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`Reflect` cannot be derived for unit structs, use named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new(
                ast.generics.span(),
                "`Reflect` cannot be derived for generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields: Vec<StructField<'a>> = Vec::with_capacity(named.named.len());
        for (index, data) in named.named.iter().enumerate() {
            let field = StructField {
                data,
                attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                index,
            };

            let name = field.name();
            if fields.iter().any(|f| f.name() == name) {
                let span = match &field.attrs.rename {
                    Some(lit) => lit.span(),
                    None => data.span(),
                };
                return Err(syn::Error::new(
                    span,
                    format!("duplicate field name `{name}`"),
                ));
            }

            fields.push(field);
        }

        Ok(Self {
            meta: ReflectMeta::new(attrs, &ast.ident),
            fields,
        })
    }

    /// Access the metadata associated with this struct definition.
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// The fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Generates a `TypeInfo::Struct` construction.
    pub fn to_info_tokens(&self) -> TokenStream {
        let vc_mapping_path = self.meta.vc_mapping_path();
        let type_info_ = crate::path::type_info_(vc_mapping_path);
        let struct_info_ = crate::path::struct_info_(vc_mapping_path);

        let fields = self
            .fields
            .iter()
            .map(|field| field.to_info_tokens(vc_mapping_path));

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[
                    #(#fields),*
                ])
            )
        }
    }
}

// -----------------------------------------------------------------------------
// FieldAccessors

/// Per-field tokens used by the `Struct` implementation, in declaration order.
pub(crate) struct FieldAccessors {
    /// `&self.field`
    pub fields_ref: Vec<TokenStream>,
    /// `&mut self.field`
    pub fields_mut: Vec<TokenStream>,
    /// The descriptor names.
    pub field_names: Vec<String>,
    /// The descriptor indices.
    pub field_indices: Vec<usize>,
    /// The number of fields.
    pub field_count: usize,
}

impl FieldAccessors {
    pub fn new(info: &ReflectStruct) -> Self {
        let mut val = Self {
            fields_ref: Vec::with_capacity(info.fields.len()),
            fields_mut: Vec::with_capacity(info.fields.len()),
            field_names: Vec::with_capacity(info.fields.len()),
            field_indices: Vec::with_capacity(info.fields.len()),
            field_count: info.fields.len(),
        };

        for field in info.fields() {
            let member = field.member();
            val.fields_ref.push(quote!(&self.#member));
            val.fields_mut.push(quote!(&mut self.#member));
            val.field_names.push(field.name());
            val.field_indices.push(field.index);
        }

        val
    }
}
