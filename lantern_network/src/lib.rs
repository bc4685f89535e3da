//! The shared state model for the lantern IRC server.
//!
//! A [`Network`](network::Network) holds every connected user, channel and
//! channel membership. It is mutated only through its own methods, each of
//! which validates its preconditions before changing anything, and reports
//! what changed through a [`NetworkUpdateReceiver`](network::NetworkUpdateReceiver).

pub mod prelude;

pub mod id;
pub mod validated;
pub mod modes;

pub mod network;

pub mod policy;
