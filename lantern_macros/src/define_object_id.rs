use super::*;

use convert_case::{Case, Casing};
use proc_macro2::Span;
use quote::quote;
use syn::{braced, parse_macro_input, punctuated::Punctuated, Ident, Result, Token};
use syn::parse::{Parse, ParseStream};

/// `Generator { Kind, Kind, ... }`
struct SequentialIds {
    generator: Ident,
    kinds: Punctuated<Ident, Token![,]>,
}

impl Parse for SequentialIds {
    fn parse(input: ParseStream) -> Result<Self> {
        let generator = input.parse()?;
        let content;
        braced!(content in input);
        let kinds = content.parse_terminated(Ident::parse)?;
        Ok(Self { generator, kinds })
    }
}

pub fn object_ids(input: TokenStream) -> TokenStream {
    let SequentialIds { generator, kinds } = parse_macro_input!(input as SequentialIds);

    let mut output = proc_macro2::TokenStream::new();
    let mut next_fns = Vec::new();

    for kind in kinds {
        let id_type = Ident::new(&format!("{}Id", kind), Span::call_site());
        let next_fn = Ident::new(&format!("next_{}", kind.to_string().to_case(Case::Snake)), Span::call_site());
        let doc = format!("Allocate a new [`{}`]", id_type);

        output.extend(quote!(
            #[derive(PartialEq,Eq,Hash,Debug,Clone,Copy,serde::Serialize,serde::Deserialize)]
            pub struct #id_type(LocalId);
        ));

        next_fns.push(quote!(
            #[doc = #doc]
            pub fn #next_fn(&self) -> #id_type
            {
                #id_type(self.next_local())
            }
        ));
    }

    output.extend(quote!(
        /// Hands out sequential ids, unique across every id type it generates.
        #[derive(Debug,Default)]
        pub struct #generator {
            last: std::sync::atomic::AtomicI64,
        }

        impl #generator {
            pub fn new() -> Self
            {
                Self::default()
            }

            fn next_local(&self) -> LocalId
            {
                self.last.fetch_add(1, std::sync::atomic::Ordering::Relaxed) + 1
            }

            #( #next_fns )*
        }
    ));

    output.into()
}
