#![allow(clippy::module_inception)]

/// Defines the raw state objects making up a network
pub mod state {
    mod user;
    mod channel;
    mod message;

    pub use user::*;
    pub use channel::*;
    pub use message::*;
}

/// Defines wrapper objects which provide accessor methods and basic
/// application logic for objects in [`state`]
pub mod wrapper {
    mod wrapper;
    mod user;
    mod channel;
    mod membership;

    pub use wrapper::ObjectWrapper;
    pub use wrapper::WrappedObjectIterator;
    pub use wrapper::WrapResult;
    pub use wrapper::WrapIterator;

    pub use user::User;
    pub use channel::Channel;
    pub use membership::Membership;
}

pub mod errors;
pub use errors::*;

mod network;
pub use network::*;

pub mod update;
pub use update::NetworkStateChange;
pub use update::NetworkUpdateReceiver;

mod update_receiver;
pub use update_receiver::SavedUpdateReceiver;
