//! Access decisions that depend on channel modes and privileges.
//!
//! The [`Network`](crate::network::Network) enforces only the structural
//! rules of the state model (membership, uniqueness, existence). Whether a
//! particular user may perform an operation is decided here, before the
//! change is requested.

use crate::prelude::*;
use wrapper::*;

mod error;
pub use error::*;

mod standard_channel_policy;
pub use standard_channel_policy::*;

/// Convenience definition of the `Result` type for permission checks.
pub type PermissionResult = Result<(), PermissionError>;

/// A `ChannelPolicyService` makes access decisions regarding channel permissions
pub trait ChannelPolicyService {
    /// Determine whether the given user can send to the given channel
    fn can_send(&self, user: &User, channel: &Channel, msg: &str) -> PermissionResult;

    /// Determine whether the given user can set the given topic on the given channel
    fn can_set_topic(&self, user: &User, channel: &Channel, topic: &str) -> PermissionResult;

    /// Determine whether the given user can change a specified mode on the given channel
    fn can_change_mode(&self, user: &User, channel: &Channel, mode: ChannelModeFlag) -> PermissionResult;

    /// Determine whether the given user can grant a channel privilege flag to the given target user
    fn can_grant_permission(
        &self,
        user: &User,
        channel: &Channel,
        target: &User,
        flag: MembershipFlagFlag,
    ) -> PermissionResult;

    /// Determine whether the given user can remove a channel privilege flag from the given target user
    fn can_remove_permission(
        &self,
        user: &User,
        channel: &Channel,
        target: &User,
        flag: MembershipFlagFlag,
    ) -> PermissionResult;
}
