use super::*;

use quote::{quote, quote_spanned};
use syn::{parse_macro_input, Ident, ItemFn, LitStr};

pub fn command_handler(attr: TokenStream, item: TokenStream) -> TokenStream {
    let command_name = parse_macro_input!(attr as LitStr);
    let item = parse_macro_input!(item as ItemFn);

    let name = &item.sig.ident;

    if item.sig.asyncness.is_some() {
        return quote_spanned!(item.sig.ident.span()=> compile_error!("Command handlers run synchronously on the server loop")).into();
    }

    for c in command_name.value().chars() {
        if !c.is_ascii_uppercase() {
            return quote_spanned!(command_name.span()=> compile_error!("Command names should be uppercase")).into();
        }
    }

    let reg_mod_name = Ident::new(
        &format!(
            "register_{}_for_{}",
            name,
            command_name.value().to_ascii_lowercase()
        ),
        name.span(),
    );

    quote!(
        #item

        mod #reg_mod_name
        {
            fn call_proxy(cmd: &crate::command::ClientCommand<'_>)
            {
                if let Err(e) = super::#name(cmd)
                {
                    cmd.notify_error(e);
                }
            }

            inventory::submit!(crate::command::CommandRegistration {
                command: #command_name,
                handler: call_proxy
            });
        }
    ).into()
}
