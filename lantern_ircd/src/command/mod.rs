//! Command handlers.

use super::*;
use lantern_network::prelude::*;
use messages::*;
use crate::{make_numeric, numeric_error};

use std::str::FromStr;

mod client_command;
pub use client_command::*;

mod argument_list;
pub use argument_list::*;

mod error;
pub use error::*;

mod dispatcher;
pub use dispatcher::*;

/// A convenience definition for the result type returned from command handlers
pub type CommandResult = Result<(), CommandError>;

mod handlers
{
    // These are here so the handler modules can import everything easily
    use super::*;
    use lantern_macros::command_handler;
    use crate::utils::*;

    mod nick;
    mod user;
    mod join;
    mod part;
    mod notice;
    mod privmsg;
    mod quit;
    mod mode;
    mod ping;
    mod names;
    mod list;
    mod who;
    mod whois;
    mod topic;
    mod away;
    mod oper;
    mod lusers;
    mod motd;
}

#[cfg(test)]
mod tests;
