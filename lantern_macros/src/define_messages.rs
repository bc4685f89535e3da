use super::*;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse_macro_input,
    braced,
    parenthesized,
    Token,
    Type,
    Result,
    Ident,
    Expr,
    LitStr,
    LitInt,
    punctuated::Punctuated,
};
use syn::parse::{Parse, ParseStream};

mod kw
{
    syn::custom_keyword!(source);
    syn::custom_keyword!(target);
}

enum MessageArg
{
    Source,
    Target,
    // `name: Type` or `name: Type.accessor()`
    Param(Ident, Type, Option<Expr>),
    // `name = expression`, computed from the other parameters
    Derived(Ident, Expr),
}

struct MessageDefn
{
    numeric: Option<LitInt>,
    typename: Ident,
    args: Punctuated<MessageArg, Token![,]>,
    format: LitStr,
}

struct MessageDefnList
{
    messages: Punctuated<MessageDefn, Token![,]>
}

impl Parse for MessageArg
{
    fn parse(input: ParseStream) -> Result<Self>
    {
        if input.peek(kw::source) && !input.peek2(Token![:]) && !input.peek2(Token![=])
        {
            input.parse::<kw::source>()?;
            return Ok(Self::Source);
        }
        if input.peek(kw::target) && !input.peek2(Token![:]) && !input.peek2(Token![=])
        {
            input.parse::<kw::target>()?;
            return Ok(Self::Target);
        }

        let name = input.parse::<Ident>()?;
        if input.parse::<Option<Token![=]>>()?.is_some()
        {
            return Ok(Self::Derived(name, input.parse()?));
        }

        input.parse::<Token![:]>()?;
        let typename = input.parse::<Type>()?;
        let accessor = if input.parse::<Option<Token![.]>>()?.is_some() {
            Some(input.parse::<Expr>()?)
        } else {
            None
        };

        Ok(Self::Param(name, typename, accessor))
    }
}

impl Parse for MessageDefn
{
    fn parse(input: ParseStream) -> Result<Self>
    {
        let content1;
        let content2;

        let (numeric, typename) = if input.peek(LitInt)
        {
            let number = input.parse::<LitInt>()?;
            let name_content;
            parenthesized!(name_content in input);
            (Some(number), name_content.parse::<Ident>()?)
        }
        else
        {
            (None, input.parse::<Ident>()?)
        };

        input.parse::<Token![=>]>()?;
        braced!(content1 in input);
        parenthesized!(content2 in content1);
        let args = content2.parse_terminated(MessageArg::parse)?;
        content1.parse::<Token![=>]>()?;
        let format = content1.parse()?;

        Ok(Self { numeric, typename, args, format })
    }
}

impl Parse for MessageDefnList
{
    fn parse(input: ParseStream) -> Result<Self>
    {
        Ok(Self {
            messages: input.parse_terminated(MessageDefn::parse)?
        })
    }
}

pub fn define_messages(input: TokenStream) -> TokenStream
{
    let input = parse_macro_input!(input as MessageDefnList);

    let mut out = proc_macro2::TokenStream::new();

    for message in input.messages
    {
        let typename = message.typename;
        let format_str = message.format;

        let mut params = Vec::new();
        let mut format_names = Vec::new();
        let mut format_values = Vec::new();

        for arg in message.args
        {
            match arg
            {
                MessageArg::Source => {
                    params.push(quote!(source: &(impl MessageSource + ?Sized)));
                    format_names.push(Ident::new("source", Span::call_site()));
                    format_values.push(quote!(source.format()));
                }
                MessageArg::Target => {
                    params.push(quote!(target: &(impl MessageTarget + ?Sized)));
                    format_names.push(Ident::new("target", Span::call_site()));
                    format_values.push(quote!(target.format()));
                }
                MessageArg::Param(name, typename, accessor) => {
                    params.push(quote!(#name: #typename));
                    format_values.push(match accessor {
                        Some(e) => quote!(#name.#e),
                        None => quote!(#name),
                    });
                    format_names.push(name);
                }
                MessageArg::Derived(name, expr) => {
                    format_names.push(name);
                    format_values.push(quote!(#expr));
                }
            }
        }

        let body = match &message.numeric
        {
            Some(number) => {
                let code = number.to_string();
                quote!(
                    pub fn new(#( #params ),*) -> UntargetedNumeric
                    {
                        UntargetedNumeric::new(#code, format!(#format_str, #( #format_names = #format_values ),*))
                    }
                )
            }
            None => {
                quote!(
                    pub fn new(#( #params ),*) -> OutboundClientMessage
                    {
                        OutboundClientMessage::new(format!(#format_str, #( #format_names = #format_values ),*))
                    }
                )
            }
        };

        out.extend(quote!(
            pub struct #typename;

            impl #typename
            {
                #[allow(clippy::new_ret_no_self)]
                #body
            }
        ));
    }

    out.into()
}
