use super::*;

use proc_macro2::Span;
use quote::quote;
use syn::{
    parenthesized,
    parse_macro_input,
    Result,
    Block,
    Ident,
    LitInt,
    Token,
};
use syn::parse::{Parse, ParseStream};

mod kw {
    syn::custom_keyword!(casefolded);
}

/// `Name(capacity) { check }` or `Name(capacity, casefolded) { check }`.
/// The check block sees `value: &str` and returns a `StringValidationResult`.
struct NameDefn
{
    name: Ident,
    capacity: LitInt,
    casefolded: bool,
    check: Block,
}

impl Parse for NameDefn
{
    fn parse(input: ParseStream) -> Result<Self>
    {
        let name = input.parse()?;

        let content;
        parenthesized!(content in input);
        let capacity = content.parse()?;
        let casefolded = if content.parse::<Option<Token![,]>>()?.is_some() {
            content.parse::<kw::casefolded>()?;
            true
        } else {
            false
        };

        Ok(Self { name, capacity, casefolded, check: input.parse()? })
    }
}

struct NameDefnList(Vec<NameDefn>);

impl Parse for NameDefnList
{
    fn parse(input: ParseStream) -> Result<Self>
    {
        let mut defs = Vec::new();
        while !input.is_empty()
        {
            defs.push(input.parse()?);
        }
        Ok(Self(defs))
    }
}

/// Casefolded names compare and hash without regard to ASCII case
fn folded_comparisons(name: &Ident) -> proc_macro2::TokenStream
{
    quote!(
        impl #name
        {
            fn folded(&self) -> impl Iterator<Item=u8> + '_
            {
                self.0.bytes().map(|b| b.to_ascii_lowercase())
            }
        }

        impl PartialEq for #name
        {
            fn eq(&self, other: &Self) -> bool { self.folded().eq(other.folded()) }
        }
        impl Eq for #name { }

        impl std::hash::Hash for #name
        {
            fn hash<H: std::hash::Hasher>(&self, h: &mut H)
            {
                self.folded().for_each(|b| h.write_u8(b));
                h.write_u8(0xff);
            }
        }
    )
}

pub fn define_validated(input: TokenStream) -> TokenStream
{
    let NameDefnList(defs) = parse_macro_input!(input as NameDefnList);

    let mut out = proc_macro2::TokenStream::new();

    for def in &defs
    {
        let name = &def.name;
        let capacity = &def.capacity;
        let check = &def.check;

        let error = Ident::new(&format!("Invalid{}Error", name), Span::call_site());
        let error_str = format!("Invalid value for {}: {{0}}", name);
        let (derives, comparisons) = if def.casefolded {
            (quote!(), folded_comparisons(name))
        } else {
            (quote!(#[derive(PartialEq,Eq,Hash)]), quote!())
        };

        out.extend(quote!(
            #[derive(Debug,Clone,Error)]
            #[error(#error_str)]
            pub struct #error(pub String);

            impl From<StringValidationError> for #error
            {
                fn from(e: StringValidationError) -> Self { Self(e.0) }
            }

            #derives
            #[derive(Debug,Clone,Copy,serde::Serialize,serde::Deserialize)]
            pub struct #name(ArrayString<#capacity>);

            impl #name
            {
                fn check(value: &str) -> StringValidationResult
                #check

                fn validated(value: ArrayString<#capacity>) -> std::result::Result<Self, #error>
                {
                    Self::check(&value)?;
                    Ok(Self(value))
                }

                /// The name exactly as it was supplied
                pub fn as_str(&self) -> &str
                {
                    &self.0
                }
            }

            impl std::str::FromStr for #name
            {
                type Err = #error;

                fn from_str(arg: &str) -> std::result::Result<Self, Self::Err>
                {
                    let value = ArrayString::from(arg).map_err(|_| #error(arg.to_string()))?;
                    Self::validated(value)
                }
            }

            impl std::fmt::Display for #name
            {
                fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
                {
                    f.write_str(&self.0)
                }
            }

            impl AsRef<str> for #name
            {
                fn as_ref(&self) -> &str
                {
                    &self.0
                }
            }

            #comparisons
        ));
    }

    out.into()
}
