use std::borrow::Cow;
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::{parse_quote, Data, DataStruct, DeriveInput, Fields, FieldsNamed, FieldsUnnamed, GenericParam};

pub fn derive_readable_impl(input: &DeriveInput) -> TokenStream {
	let (fields, tuple) = match &input.data {
		Data::Struct(DataStruct { fields: Fields::Named(FieldsNamed { named, .. }), .. }) => (named, false),
		Data::Struct(DataStruct { fields: Fields::Unnamed(FieldsUnnamed { unnamed, .. }), .. }) => (unnamed, true),
		_ => panic!("only tuple structs or structs with named fields supported"),
	};
	let mut body = quote! {};
	let mut initializer = quote! {};
	let mut tuple_field_num = 0usize..;
	for field in fields {
		let field_ident = match &field.ident {
			Some(field_ident) => Cow::Borrowed(field_ident),
			None => Cow::Owned(Ident::new(&format!("field{}", tuple_field_num.next().unwrap()), Span::call_site())),
		};
		body = quote! {
			#body
			let #field_ident = tr_readable::Readable::read(cursor)?;
		};
		initializer = quote! { #initializer #field_ident, };
	}
	initializer = if tuple { quote! { (#initializer) } } else { quote! { {#initializer} } };
	let mut generics = input.generics.clone();
	for param in &mut generics.params {
		if let GenericParam::Type(param) = param {
			param.bounds.push(parse_quote!(tr_readable::Readable));
		}
	}
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
	let type_name = &input.ident;
	quote! {
		impl #impl_generics tr_readable::Readable for #type_name #ty_generics #where_clause {
			fn read(cursor: &mut tr_readable::Cursor<'_>) -> std::io::Result<Self> {
				#body
				Ok(#type_name #initializer)
			}
		}
	}
}
