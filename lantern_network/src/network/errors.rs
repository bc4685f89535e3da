//! Defines errors returned by the other modules

use crate::prelude::*;
use thiserror::Error;

/// Types of error that can occur while looking up network objects
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No such user id {0:?}")]
    NoSuchUser(UserId),
    #[error("No such channel id {0:?}")]
    NoSuchChannel(ChannelId),
    #[error("No such membership id {0:?}")]
    NoSuchMembership(MembershipId),
    #[error("No such nickname {0}")]
    NoSuchNick(Nickname),
    #[error("No such channel name {0}")]
    NoSuchChannelName(ChannelName),
}

/// Convenience definition of a Result type used to look up network objects.
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Reasons the [`Network`] can refuse a change. The network is left untouched
/// whenever one of these is returned.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Nickname {0} is already in use")]
    NicknameInUse(Nickname),
    #[error("Already a member of {0}")]
    AlreadyOnChannel(ChannelName),
    #[error("No such channel {0}")]
    NoSuchChannel(ChannelName),
    #[error("Not a member of {0}")]
    NotOnChannel(ChannelName),
    #[error("{0} is not a member of {1}")]
    UserNotInChannel(Nickname, ChannelName),
    #[error("Cannot send to channel {0}")]
    CannotSendToChannel(ChannelName),
    #[error("No such nick/channel {0}")]
    NoSuchTarget(String),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Result type for operations that change the network state.
pub type NetworkResult<T> = std::result::Result<T, NetworkError>;
