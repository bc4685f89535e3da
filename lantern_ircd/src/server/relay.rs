use super::*;
use lantern_network::network::update::*;

use std::collections::HashSet;

/// Turns network state changes into protocol messages, and sends each one
/// to every connected user who can observe it.
///
/// Each audience is collected as a set before anything is sent, so nobody
/// receives the same event twice however many channels they share with
/// the user concerned.
pub(super) struct RelayEngine<'a> {
    server: &'a ClientServer,
    net: &'a Network,
}

impl<'a> RelayEngine<'a> {
    pub fn new(server: &'a ClientServer, net: &'a Network) -> Self {
        Self { server, net }
    }

    /// Current members of a channel. A channel which no longer exists has none.
    fn members_of(&self, channel: ChannelId) -> impl Iterator<Item = UserId> + 'a {
        self.net
            .channel(channel)
            .ok()
            .into_iter()
            .flat_map(|c| c.members())
            .map(|m| m.user_id())
    }

    fn send_to(&self, audience: HashSet<UserId>, msg: OutboundClientMessage) {
        tracing::trace!(recipients = audience.len(), "relaying {}", msg);

        let connections = self.server.connections();
        for user_id in audience {
            if let Some(conn) = connections.get_user(user_id) {
                conn.send(msg.clone());
            }
        }
    }

    fn nick_change(&self, detail: UserNickChange) {
        let source = format!("{}!{}@{}", detail.old_nick, detail.user.user, detail.user.visible_host);

        let mut audience = HashSet::new();
        audience.insert(detail.user.id);
        if let Ok(user) = self.net.user(detail.user.id) {
            for membership in user.channels() {
                audience.extend(self.members_of(membership.channel_id()));
            }
        }

        self.send_to(audience, message::Nick::new(&source, &detail.new_nick));
    }

    fn user_quit(&self, detail: UserQuit) {
        let mut audience = HashSet::new();
        for membership in &detail.memberships {
            audience.extend(self.members_of(membership.channel));
        }
        audience.remove(&detail.user.id);

        self.send_to(audience, message::Quit::new(&detail.user, &detail.message));
    }

    fn channel_join(&self, detail: ChannelJoin) {
        let audience = self.members_of(detail.channel.id).collect();
        self.send_to(audience, message::Join::new(&detail.user, &detail.channel.name));
    }

    fn channel_part(&self, detail: ChannelPart) {
        let mut audience: HashSet<_> = self.members_of(detail.channel.id).collect();
        audience.insert(detail.user.id);

        let msg = match &detail.message {
            Some(text) => message::PartMessage::new(&detail.user, &detail.channel.name, text),
            None => message::Part::new(&detail.user, &detail.channel.name),
        };
        self.send_to(audience, msg);
    }

    fn topic_change(&self, detail: ChannelTopicChange) {
        let audience = self.members_of(detail.channel.id).collect();
        self.send_to(audience, message::Topic::new(&detail.setter, &detail.channel.name, &detail.text));
    }

    fn channel_mode_change(&self, detail: ChannelModeChange) {
        let mut changes = String::new();
        if !detail.added.is_empty() {
            changes.push('+');
            changes.push_str(&detail.added.to_chars());
        }
        if !detail.removed.is_empty() {
            changes.push('-');
            changes.push_str(&detail.removed.to_chars());
        }

        let audience = self.members_of(detail.channel.id).collect();
        self.send_to(audience, message::Mode::new(&detail.changed_by, &detail.channel.name, &changes));
    }

    fn membership_flag_change(&self, detail: MembershipFlagChange) {
        let mut flags = String::new();
        let mut args = Vec::new();

        if !detail.added.is_empty() {
            flags.push('+');
            for flag in detail.added.iter() {
                flags.push(flag.to_char());
                args.push(detail.user.nick.to_string());
            }
        }
        if !detail.removed.is_empty() {
            flags.push('-');
            for flag in detail.removed.iter() {
                flags.push(flag.to_char());
                args.push(detail.user.nick.to_string());
            }
        }

        let changes = format!("{} {}", flags, args.join(" "));
        let audience = self.members_of(detail.channel.id).collect();
        self.send_to(audience, message::Mode::new(&detail.changed_by, &detail.channel.name, &changes));
    }

    fn new_message(&self, detail: NewMessage) {
        let audience = match &detail.target {
            state::MessageTarget::Channel(channel) => {
                let mut members: HashSet<_> = self.members_of(channel.id).collect();
                members.remove(&detail.source.id);
                members
            }
            state::MessageTarget::User(user) => HashSet::from([user.id]),
        };

        self.send_to(audience, message::Message::new(&detail.source, &detail.target, detail.message_type, &detail.text));
    }
}

impl NetworkUpdateReceiver for RelayEngine<'_> {
    fn notify_update(&self, update: NetworkStateChange) {
        tracing::trace!(?update, "Got network update");

        match update {
            NetworkStateChange::UserNickChange(detail) => self.nick_change(detail),
            NetworkStateChange::UserQuit(detail) => self.user_quit(detail),
            NetworkStateChange::ChannelJoin(detail) => self.channel_join(detail),
            NetworkStateChange::ChannelPart(detail) => self.channel_part(detail),
            NetworkStateChange::ChannelTopicChange(detail) => self.topic_change(detail),
            NetworkStateChange::ChannelModeChange(detail) => self.channel_mode_change(detail),
            NetworkStateChange::MembershipFlagChange(detail) => self.membership_flag_change(detail),
            NetworkStateChange::NewMessage(detail) => self.new_message(detail),
        }
    }
}
