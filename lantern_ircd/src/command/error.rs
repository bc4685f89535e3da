use super::*;
use lantern_network::policy::PermissionError;

use thiserror::Error;

/// An error that may occur during command processing
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command wasn't recognised
    #[error("Unknown command {0}")]
    CommandNotFound(String),
    /// Not enough arguments were provided
    #[error("Not enough parameters")]
    NotEnoughParameters,
    /// The command needs a registered user, and the source hasn't registered
    #[error("Not registered")]
    NotRegistered,
    /// A required object wasn't found in the network state
    #[error(transparent)]
    LookupError(LookupError),
    /// The network refused the requested change
    #[error(transparent)]
    NetworkError(NetworkError),
    /// A nickname parameter wasn't a valid nick
    #[error("Invalid nickname {0}")]
    InvalidNick(String),
    /// A channel name parameter wasn't a valid channel name
    #[error("Invalid channel name {0}")]
    InvalidChannelName(String),
    /// A permission error was encountered
    #[error("Permission denied: {0:?}")]
    Permission(PermissionError),
    /// The command couldn't be processed successfully; the provided
    /// numeric will be sent to the client to notify them
    #[error("{}", .0.debug_format())]
    Numeric(UntargetedNumeric),
}

impl From<LookupError> for CommandError {
    fn from(e: LookupError) -> Self {
        Self::LookupError(e)
    }
}

impl From<NetworkError> for CommandError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::Lookup(le) => Self::LookupError(le),
            _ => Self::NetworkError(e),
        }
    }
}

impl From<PermissionError> for CommandError {
    fn from(e: PermissionError) -> Self {
        match e {
            PermissionError::Lookup(le) => Self::LookupError(le),
            _ => Self::Permission(e),
        }
    }
}

impl From<InvalidNicknameError> for CommandError {
    fn from(e: InvalidNicknameError) -> Self {
        Self::InvalidNick(e.0)
    }
}

impl From<InvalidChannelNameError> for CommandError {
    fn from(e: InvalidChannelNameError) -> Self {
        Self::InvalidChannelName(e.0)
    }
}

impl From<UntargetedNumeric> for CommandError {
    fn from(n: UntargetedNumeric) -> Self {
        Self::Numeric(n)
    }
}
