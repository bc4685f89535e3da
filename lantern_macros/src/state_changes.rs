use super::*;

use quote::quote;
use syn::{
    parse_macro_input,
    braced,
    Result,
    Attribute,
    ItemStruct,
    Ident,
    Token,
    token,
};
use syn::parse::{Parse, ParseStream};

struct DefinitionList {
    attrs: Vec<Attribute>,
    enum_name: Ident,
    _arrow: Token![=>],
    _brace: token::Brace,
    items: ItemStructList,
}

struct ItemStructList {
    items: Vec<ItemStruct>
}

impl Parse for DefinitionList {
    fn parse(input: ParseStream) -> Result<Self> {
        let content;
        Ok(Self{
            attrs: input.call(Attribute::parse_outer)?,
            enum_name: input.parse()?,
            _arrow: input.parse()?,
            _brace: braced!(content in input),
            items: content.parse()?,
        })
    }
}

impl Parse for ItemStructList {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut items = Vec::new();

        while ! input.is_empty() {
            items.push(input.parse::<ItemStruct>()?);
        }

        Ok(ItemStructList { items })
    }
}

pub fn state_changes(input: TokenStream) -> TokenStream
{
    let input = parse_macro_input!(input as DefinitionList);
    let attrs = input.attrs;
    let enum_name = input.enum_name;

    let mut output = proc_macro2::TokenStream::new();
    let mut names = Vec::<Ident>::new();

    for item in &input.items.items
    {
        let name = &item.ident;
        names.push(name.clone());

        let attrs = &item.attrs;
        let fields = &item.fields;

        output.extend(quote!(
            #( #attrs )*
            #[derive(Debug,Clone,serde::Serialize,serde::Deserialize)]
            pub struct #name
            #fields
        ));
    }

    output.extend(quote!(
        #( #attrs )*
        #[derive(Debug,Clone,serde::Serialize,serde::Deserialize)]
        pub enum #enum_name {
            #( #names(#names) ),*
        }

        #(
            impl From<#names> for #enum_name
            {
                fn from(x: #names) -> Self { Self::#names(x) }
            }
        )*
    ));

    output.into()
}
