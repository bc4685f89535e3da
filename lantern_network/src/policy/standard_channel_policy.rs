use super::*;

use ChannelPermissionError::*;

/// Standard implementation of [`ChannelPolicyService`]
#[derive(Debug, Default)]
pub struct StandardChannelPolicy;

impl StandardChannelPolicy {
    pub fn new() -> Self {
        Self
    }
}

fn is_channel_operator(user: &User, channel: &Channel) -> PermissionResult {
    if let Some(membership) = user.is_in_channel(channel.id()) {
        if membership.permissions().is_set(MembershipFlagFlag::Op) {
            Ok(())
        } else {
            Err(PermissionError::Channel(*channel.name(), UserNotOp))
        }
    } else {
        Err(PermissionError::Channel(*channel.name(), UserNotOnChannel))
    }
}

/// IRC operators may manage any channel, whether or not they are in it
fn is_channel_operator_or_oper(user: &User, channel: &Channel) -> PermissionResult {
    if user.is_oper() {
        return Ok(());
    }
    is_channel_operator(user, channel)
}

impl ChannelPolicyService for StandardChannelPolicy {
    fn can_send(&self, user: &User, channel: &Channel, _msg: &str) -> PermissionResult {
        let Some(membership) = user.is_in_channel(channel.id()) else {
            return Err(PermissionError::Channel(*channel.name(), CannotSendToChannel));
        };

        if channel.mode().is_set(ChannelModeFlag::Moderated)
            && !membership.permissions().is_set(MembershipFlagFlag::Op)
            && !membership.permissions().is_set(MembershipFlagFlag::Voice)
        {
            return Err(PermissionError::Channel(*channel.name(), CannotSendToChannel));
        }

        Ok(())
    }

    fn can_set_topic(&self, user: &User, channel: &Channel, _topic: &str) -> PermissionResult {
        if user.is_in_channel(channel.id()).is_none() {
            return Err(PermissionError::Channel(*channel.name(), UserNotOnChannel));
        }

        if channel.mode().is_set(ChannelModeFlag::TopicLock) {
            is_channel_operator_or_oper(user, channel)
        } else {
            Ok(())
        }
    }

    fn can_change_mode(&self, user: &User, channel: &Channel, _mode: ChannelModeFlag) -> PermissionResult {
        is_channel_operator_or_oper(user, channel)
    }

    fn can_grant_permission(
        &self,
        user: &User,
        channel: &Channel,
        _target: &User,
        _flag: MembershipFlagFlag,
    ) -> PermissionResult {
        is_channel_operator_or_oper(user, channel)
    }

    fn can_remove_permission(
        &self,
        user: &User,
        channel: &Channel,
        _target: &User,
        _flag: MembershipFlagFlag,
    ) -> PermissionResult {
        is_channel_operator_or_oper(user, channel)
    }
}
