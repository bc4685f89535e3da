//! Defines the [Network] object.

use crate::prelude::*;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use std::collections::HashMap;

/// Stores the current network state.
///
/// ## General Principles
///
/// A `Network` is fully serializable and cloneable; all objects within it
/// refer to each other by unique ID and not by reference.
///
/// The `Network` stores only raw state objects, which themselves provide no
/// logic. Short-lived wrapper objects are returned by the public accessors,
/// which borrow the underlying state and provide convenience methods for
/// navigating to associated objects. These wrappers cannot outlive the
/// caller's borrow of the `Network`; code that needs to remember an object
/// should store its ID and look it up again.
///
/// ## Changes
///
/// Every mutating method validates all of its preconditions before touching
/// anything, so a method that returns `Err(_)` has left the state exactly as
/// it found it. On success, one or more [`NetworkStateChange`]s describing
/// what happened are passed to the supplied [`NetworkUpdateReceiver`].
///
/// Users and channels are indexed by their casefolded names, so no two users
/// share a nickname and no two channels share a name, under ASCII case
/// folding.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    // All of these maps are serialised as an array of tuples
    // because their keys don't serialise as strings, so can't be
    // used as a JSON object key.
    #[serde_as(as = "Vec<(_,_)>")]
    nick_bindings: HashMap<Nickname, UserId>,
    #[serde_as(as = "Vec<(_,_)>")]
    users: HashMap<UserId, state::User>,

    #[serde_as(as = "Vec<(_,_)>")]
    channel_names: HashMap<ChannelName, ChannelId>,
    #[serde_as(as = "Vec<(_,_)>")]
    channels: HashMap<ChannelId, state::Channel>,

    #[serde_as(as = "Vec<(_,_)>")]
    memberships: HashMap<MembershipId, state::Membership>,
}

impl Network {
    /// Create an empty network state.
    pub fn new() -> Network {
        Self::default()
    }
}

mod accessors;
mod user_state;
mod channel_state;
mod message_state;
