use super::Network;
use crate::prelude::*;
use crate::network::update::*;

use std::str::FromStr;

impl Network {
    /// Resolve a message target and emit the message for relay.
    ///
    /// `target` is either a channel name, which the sender must be a member
    /// of, or a nickname. The network is not changed.
    pub fn send_message(
        &self,
        source: UserId,
        target: &str,
        message_type: state::MessageType,
        text: String,
        updates: &dyn NetworkUpdateReceiver,
    ) -> NetworkResult<()> {
        let sender = self.users.get(&source).ok_or(LookupError::NoSuchUser(source))?.clone();

        let target = if ChannelName::is_channel_prefix(target) {
            let channel = ChannelName::from_str(target)
                .ok()
                .and_then(|name| self.raw_channel_by_name(&name).ok())
                .ok_or_else(|| NetworkError::NoSuchTarget(target.to_string()))?;

            if !self.memberships.contains_key(&MembershipId::new(source, channel.id)) {
                return Err(NetworkError::CannotSendToChannel(channel.name));
            }
            state::MessageTarget::Channel(channel.clone())
        } else {
            let user = Nickname::from_str(target)
                .ok()
                .and_then(|nick| self.nick_bindings.get(&nick))
                .and_then(|id| self.users.get(id))
                .ok_or_else(|| NetworkError::NoSuchTarget(target.to_string()))?;

            state::MessageTarget::User(user.clone())
        };

        updates.notify(update::NewMessage {
            source: sender,
            target,
            message_type,
            text,
        });

        Ok(())
    }
}
