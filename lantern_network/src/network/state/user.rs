use crate::prelude::*;

use serde::{Deserialize, Serialize};

/// A user connected to the network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub nick: Nickname,
    pub user: Username,
    pub visible_host: Hostname,
    pub realname: Realname,
    pub away_reason: Option<AwayReason>,
    pub oper: bool,
}

impl User {
    pub fn new(id: UserId, nick: Nickname, user: Username, visible_host: Hostname, realname: Realname) -> Self {
        Self {
            id,
            nick,
            user,
            visible_host,
            realname,
            away_reason: None,
            oper: false,
        }
    }
}
