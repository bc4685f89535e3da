use super::Network;
use crate::prelude::*;
use crate::network::update::*;

use tracing::debug;

impl Network {
    /// Add a user to a channel, creating the channel with the supplied ID if
    /// nothing by that name exists yet. Returns the ID of the channel joined.
    ///
    /// New members, including whoever created the channel, hold no
    /// privileges.
    pub fn join_channel(
        &mut self,
        user_id: UserId,
        name: ChannelName,
        new_channel_id: ChannelId,
        updates: &dyn NetworkUpdateReceiver,
    ) -> NetworkResult<ChannelId> {
        let user = self.users.get(&user_id).ok_or(LookupError::NoSuchUser(user_id))?.clone();

        let channel_id = match self.channel_names.get(&name) {
            Some(existing) => {
                if self.memberships.contains_key(&MembershipId::new(user_id, *existing)) {
                    return Err(NetworkError::AlreadyOnChannel(name));
                }
                *existing
            }
            None => {
                debug!(channel = ?new_channel_id, %name, "creating channel");
                self.channel_names.insert(name, new_channel_id);
                self.channels.insert(new_channel_id, state::Channel::new(new_channel_id, name));
                new_channel_id
            }
        };

        let membership = state::Membership::new(user_id, channel_id);
        self.memberships.insert(membership.id, membership.clone());

        let channel = self.channels.get(&channel_id).ok_or(LookupError::NoSuchChannel(channel_id))?;

        updates.notify(update::ChannelJoin {
            channel: channel.clone(),
            membership,
            user,
        });

        Ok(channel_id)
    }

    /// Remove a user from a channel, deleting the channel if they were the
    /// last member.
    pub fn part_channel(
        &mut self,
        user_id: UserId,
        name: &ChannelName,
        message: Option<String>,
        updates: &dyn NetworkUpdateReceiver,
    ) -> NetworkResult<()> {
        let channel = self.raw_channel_by_name(name).map_err(|_| NetworkError::NoSuchChannel(*name))?.clone();

        let membership = self.memberships
            .remove(&MembershipId::new(user_id, channel.id))
            .ok_or(NetworkError::NotOnChannel(*name))?;

        let user = match self.users.get(&user_id) {
            Some(user) => user.clone(),
            None => {
                // Put things back as they were
                self.memberships.insert(membership.id, membership);
                return Err(LookupError::NoSuchUser(user_id).into());
            }
        };

        self.remove_channel_if_empty(channel.id);

        updates.notify(update::ChannelPart {
            channel,
            membership,
            user,
            message,
        });

        Ok(())
    }

    /// Set a channel's topic. The setter must be a member.
    pub fn set_topic(
        &mut self,
        user_id: UserId,
        name: &ChannelName,
        text: String,
        updates: &dyn NetworkUpdateReceiver,
    ) -> NetworkResult<()> {
        let channel_id = self.member_channel_id(user_id, name)?;
        let setter = self.users.get(&user_id).ok_or(LookupError::NoSuchUser(user_id))?.clone();
        let channel = self.channels.get_mut(&channel_id).ok_or(LookupError::NoSuchChannel(channel_id))?;

        channel.topic = Some(text.clone());

        updates.notify(update::ChannelTopicChange {
            channel: channel.clone(),
            setter,
            text,
        });

        Ok(())
    }

    /// Change the mode flags of a channel. Only flags whose state actually
    /// changes are reported; if none do, nothing is emitted.
    pub fn set_channel_mode(
        &mut self,
        source: UserId,
        name: &ChannelName,
        added: ChannelModeSet,
        removed: ChannelModeSet,
        updates: &dyn NetworkUpdateReceiver,
    ) -> NetworkResult<()> {
        let changed_by = self.users.get(&source).ok_or(LookupError::NoSuchUser(source))?.clone();
        let channel_id = self.raw_channel_by_name(name).map_err(|_| NetworkError::NoSuchChannel(*name))?.id;
        let channel = self.channels.get_mut(&channel_id).ok_or(LookupError::NoSuchChannel(channel_id))?;

        let mut really_added = ChannelModeSet::new();
        let mut really_removed = ChannelModeSet::new();

        for flag in added.iter() {
            if !channel.mode.is_set(flag) {
                channel.mode.set(flag);
                really_added.set(flag);
            }
        }
        for flag in removed.iter() {
            if channel.mode.is_set(flag) {
                channel.mode.unset(flag);
                really_removed.set(flag);
            }
        }

        if really_added.is_empty() && really_removed.is_empty() {
            return Ok(());
        }

        updates.notify(update::ChannelModeChange {
            channel: channel.clone(),
            changed_by,
            added: really_added,
            removed: really_removed,
        });

        Ok(())
    }

    /// Grant or revoke a member's channel privileges. As with
    /// [`set_channel_mode`](Self::set_channel_mode), only effective changes
    /// are reported.
    pub fn set_membership_flags(
        &mut self,
        source: UserId,
        name: &ChannelName,
        target: UserId,
        added: MembershipFlagSet,
        removed: MembershipFlagSet,
        updates: &dyn NetworkUpdateReceiver,
    ) -> NetworkResult<()> {
        let changed_by = self.users.get(&source).ok_or(LookupError::NoSuchUser(source))?.clone();
        let target_user = self.users.get(&target).ok_or(LookupError::NoSuchUser(target))?.clone();
        let channel = self.raw_channel_by_name(name).map_err(|_| NetworkError::NoSuchChannel(*name))?.clone();

        let membership = self.memberships
            .get_mut(&MembershipId::new(target, channel.id))
            .ok_or(NetworkError::UserNotInChannel(target_user.nick, *name))?;

        let mut really_added = MembershipFlagSet::new();
        let mut really_removed = MembershipFlagSet::new();

        for flag in added.iter() {
            if !membership.permissions.is_set(flag) {
                membership.permissions.set(flag);
                really_added.set(flag);
            }
        }
        for flag in removed.iter() {
            if membership.permissions.is_set(flag) {
                membership.permissions.unset(flag);
                really_removed.set(flag);
            }
        }

        if really_added.is_empty() && really_removed.is_empty() {
            return Ok(());
        }

        updates.notify(update::MembershipFlagChange {
            channel,
            changed_by,
            user: target_user,
            added: really_added,
            removed: really_removed,
        });

        Ok(())
    }

    /// The ID of the named channel, provided `user_id` is a member of it
    fn member_channel_id(&self, user_id: UserId, name: &ChannelName) -> NetworkResult<ChannelId> {
        let channel = self.raw_channel_by_name(name).map_err(|_| NetworkError::NotOnChannel(*name))?;
        if !self.memberships.contains_key(&MembershipId::new(user_id, channel.id)) {
            return Err(NetworkError::NotOnChannel(*name));
        }
        Ok(channel.id)
    }

    pub(super) fn remove_channel_if_empty(&mut self, id: ChannelId) {
        if self.memberships.values().any(|m| m.channel == id) {
            return;
        }
        if let Some(channel) = self.channels.remove(&id) {
            debug!(channel = ?id, name = %channel.name, "removing empty channel");
            self.channel_names.remove(&channel.name);
        }
    }
}
