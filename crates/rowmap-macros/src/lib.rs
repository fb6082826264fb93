extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Record, attributes(column, key, skip))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
