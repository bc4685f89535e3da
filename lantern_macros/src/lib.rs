extern crate proc_macro;

use proc_macro::TokenStream;

mod state_changes;

/// Define a set of state-change structs, and an enum which can hold any one of them.
#[proc_macro]
pub fn state_changes(input: TokenStream) -> TokenStream
{
    state_changes::state_changes(input)
}

mod command_handler;

/// Register a function as the handler for a client command.
#[proc_macro_attribute]
pub fn command_handler(attr: TokenStream, item: TokenStream) -> TokenStream
{
    command_handler::command_handler(attr, item)
}

mod define_object_id;

#[proc_macro]
pub fn object_ids(input: TokenStream) -> TokenStream
{
    define_object_id::object_ids(input)
}

mod define_messages;

#[proc_macro]
pub fn define_messages(input: TokenStream) -> TokenStream
{
    define_messages::define_messages(input)
}

mod define_validated;

#[proc_macro]
pub fn define_validated(input: TokenStream) -> TokenStream
{
    define_validated::define_validated(input)
}

mod modeflags;

#[proc_macro]
pub fn mode_flags(input: TokenStream) -> TokenStream
{
    modeflags::mode_flags(input)
}
