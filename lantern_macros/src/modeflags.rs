use super::*;
use proc_macro2::Span;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, parse_macro_input, punctuated::Punctuated, Ident, LitChar, Result, Token};

mod kw {
    syn::custom_keyword!(prefix);
}

/// `Name = 'c'` or `Name = 'c' prefix 'p'`
struct FlagDef {
    name: Ident,
    mode_char: LitChar,
    prefix: Option<LitChar>,
}

/// `Kind { FlagDef, ... }`, highest-ranked flag first
struct FlagKind {
    kind: Ident,
    flags: Punctuated<FlagDef, Token![,]>,
}

impl Parse for FlagDef {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        let mode_char = input.parse()?;
        let prefix = if input.parse::<Option<kw::prefix>>()?.is_some() {
            Some(input.parse()?)
        } else {
            None
        };
        Ok(Self { name, mode_char, prefix })
    }
}

impl Parse for FlagKind {
    fn parse(input: ParseStream) -> Result<Self> {
        let kind = input.parse()?;
        let content;
        braced!(content in input);
        Ok(Self { kind, flags: content.parse_terminated(FlagDef::parse)? })
    }
}

pub fn mode_flags(input: TokenStream) -> TokenStream {
    let FlagKind { kind, flags } = parse_macro_input!(input as FlagKind);

    if flags.len() > 8 {
        return syn::Error::new(kind.span(), "At most eight flags fit in a set").to_compile_error().into();
    }
    let with_prefixes = flags.iter().all(|f| f.prefix.is_some());
    if !with_prefixes && flags.iter().any(|f| f.prefix.is_some()) {
        return syn::Error::new(kind.span(), "Either every flag has a prefix or none does").to_compile_error().into();
    }

    let flag_type = Ident::new(&format!("{}Flag", kind), Span::call_site());
    let set_type = Ident::new(&format!("{}Set", kind), Span::call_site());

    let names: Vec<_> = flags.iter().map(|f| &f.name).collect();
    let chars: Vec<_> = flags.iter().map(|f| &f.mode_char).collect();
    let bits: Vec<u8> = (0..flags.len()).map(|i| 1 << i).collect();
    let count = flags.len();

    let mut output = quote!(
        #[derive(Debug,Clone,Copy,Eq,PartialEq,Hash,serde::Serialize,serde::Deserialize)]
        pub enum #flag_type
        {
            #( #names ),*
        }

        impl #flag_type
        {
            /// Every flag of this kind, highest-ranked first
            pub const ALL: [#flag_type; #count] = [ #( #flag_type::#names ),* ];

            fn bit(self) -> u8
            {
                match self {
                    #( Self::#names => #bits ),*
                }
            }

            pub fn to_char(self) -> char
            {
                match self {
                    #( Self::#names => #chars ),*
                }
            }

            pub fn from_char(modechar: char) -> Option<Self>
            {
                match modechar {
                    #( #chars => Some(Self::#names), )*
                    _ => None
                }
            }
        }

        #[derive(Debug,Clone,Copy,Default,Eq,PartialEq,serde::Serialize,serde::Deserialize)]
        pub struct #set_type(u8);

        impl #set_type
        {
            pub fn new() -> Self { Self(0) }

            pub fn is_set(&self, flag: #flag_type) -> bool
            {
                self.0 & flag.bit() != 0
            }

            pub fn is_empty(&self) -> bool
            {
                self.0 == 0
            }

            pub fn set(&mut self, flag: #flag_type)
            {
                self.0 |= flag.bit();
            }

            pub fn unset(&mut self, flag: #flag_type)
            {
                self.0 &= !flag.bit();
            }

            pub fn iter(&self) -> impl Iterator<Item=#flag_type> + '_
            {
                #flag_type::ALL.into_iter().filter(move |f| self.is_set(*f))
            }

            pub fn to_chars(&self) -> String
            {
                self.iter().map(#flag_type::to_char).collect()
            }
        }

        impl From<#flag_type> for #set_type
        {
            fn from(flag: #flag_type) -> Self { Self(flag.bit()) }
        }

        impl std::ops::BitOr for #flag_type
        {
            type Output = #set_type;
            fn bitor(self, rhs: Self) -> #set_type { #set_type(self.bit() | rhs.bit()) }
        }
    );

    if with_prefixes {
        let prefixes: Vec<_> = flags.iter().filter_map(|f| f.prefix.as_ref()).collect();
        output.extend(quote!(
            impl #flag_type
            {
                pub fn to_prefix(self) -> char
                {
                    match self {
                        #( Self::#names => #prefixes ),*
                    }
                }
            }
        ));
    }

    output.into()
}
