//! Contains types used by [`Network`] to notify callers of state changes

use crate::network::state;
use crate::prelude::*;
use lantern_macros::state_changes;

state_changes!(

/// Emitted by the `Network` to signal that a change has happened which needs to be
/// relayed to the users who can observe it. One operation on the network may emit
/// any number of these.
///
/// The parameters are copies of the state objects, because the originals may
/// already be gone from the network by the time the change is processed. Where
/// possible the consumer should call back to the `Network` for the current view.
NetworkStateChange => {
    /// A user has changed nickname
    struct UserNickChange {
        pub user: state::User,
        pub old_nick: Nickname,
        pub new_nick: Nickname,
    }

    /// A user has left the network
    struct UserQuit {
        pub user: state::User,
        pub message: String,
        pub memberships: Vec<state::Membership>,
    }

    /// A user has joined a channel
    struct ChannelJoin {
        pub channel: state::Channel,
        pub membership: state::Membership,
        pub user: state::User,
    }

    /// A user has left a channel
    struct ChannelPart {
        pub channel: state::Channel,
        pub membership: state::Membership,
        pub user: state::User,
        pub message: Option<String>,
    }

    /// A channel's topic has been set
    struct ChannelTopicChange {
        pub channel: state::Channel,
        pub setter: state::User,
        pub text: String,
    }

    /// A channel's mode has changed
    struct ChannelModeChange {
        pub channel: state::Channel,
        pub changed_by: state::User,
        pub added: ChannelModeSet,
        pub removed: ChannelModeSet,
    }

    /// A member's privileges in a channel have changed
    struct MembershipFlagChange {
        pub channel: state::Channel,
        pub changed_by: state::User,
        pub user: state::User,
        pub added: MembershipFlagSet,
        pub removed: MembershipFlagSet,
    }

    /// A user has sent a message
    struct NewMessage {
        pub source: state::User,
        pub target: state::MessageTarget,
        pub message_type: state::MessageType,
        pub text: String,
    }
});

/// Trait to be implemented by an object which wants to be notified of network state updates
pub trait NetworkUpdateReceiver {
    /// Notify the receiver of a network state change
    fn notify_update(&self, update: NetworkStateChange);
}

impl<'a> dyn NetworkUpdateReceiver + 'a {
    /// Convenience wrapper accepting any of the individual update types
    pub fn notify(&self, update: impl Into<NetworkStateChange>) {
        self.notify_update(update.into())
    }
}
