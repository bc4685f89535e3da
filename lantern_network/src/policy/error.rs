use super::*;

/// A channel-related permission error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelPermissionError {
    /// The user isn't in a channel, and needs to be in order to be allowed the operation
    UserNotOnChannel,
    /// Channel operator privileges are required
    UserNotOp,
    /// User cannot send, because the channel is moderated or they aren't in it
    CannotSendToChannel,
}

#[derive(Debug)]
pub enum PermissionError {
    Channel(ChannelName, ChannelPermissionError),
    Lookup(LookupError),
}

impl From<LookupError> for PermissionError {
    fn from(e: LookupError) -> Self {
        Self::Lookup(e)
    }
}
