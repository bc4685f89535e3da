#![allow(rustdoc::private_intra_doc_links)]

//! IRC client server logic.
//!
//! This crate primarily exists to support the [`ClientServer`] type, which
//! owns the [`Network`](lantern_network::network::Network) state and executes
//! client commands against it.
//!
//! # Command Handling
//!
//! Basic parsing of client commands is in the [`client_message`] module.
//!
//! Command handler registration is at compile time, via the `inventory` crate, mediated
//! by the `#[command_handler]` attribute. To add a new command, create a module under
//! `command::handlers` and apply that attribute to a function; see one of the existing
//! handlers for examples.
//!
//! Handlers which only report on the network (`who`, `names` and the like) take a read
//! lock and send their replies directly. Handlers which change the network do so through
//! [`ClientServer::apply_change`], which runs the change under the write lock and then
//! hands every resulting [`NetworkStateChange`](lantern_network::network::NetworkStateChange)
//! to the relay engine.
//!
//! # Update handling
//!
//! The relay engine decides, for each state change, which connected users can observe it,
//! and sends each of them exactly one protocol message describing it. A command handler
//! never echoes a change back to its own user; if the user is meant to see it, the relay
//! engine will include them.

mod utils;
mod messages;
mod command;

mod client;
use client::*;

pub mod client_message;
pub use client_message::*;

pub mod connection;
mod connection_task;
pub mod listener;

mod connection_collection;
use connection_collection::ConnectionCollection;

pub mod server;
pub use server::ClientServer;
pub use server::ServerConfig;
