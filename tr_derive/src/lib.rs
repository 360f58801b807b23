mod readable;

#[proc_macro_derive(Readable)]
pub fn derive_readable(tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
	readable::derive_readable_impl(&syn::parse_macro_input!(tokens)).into()
}
