use super::Network;
use crate::prelude::*;
use crate::network::update::*;

use tracing::debug;

impl Network {
    /// Add a newly registered user, binding their nickname.
    ///
    /// Fails with [`NetworkError::NicknameInUse`] if any other user holds the
    /// nickname under case folding.
    pub fn register_user(&mut self, user: state::User, _updates: &dyn NetworkUpdateReceiver) -> NetworkResult<()> {
        if self.nick_bindings.contains_key(&user.nick) {
            return Err(NetworkError::NicknameInUse(user.nick));
        }

        debug!(user = ?user.id, nick = %user.nick, "registering user");

        self.nick_bindings.insert(user.nick, user.id);
        self.users.insert(user.id, user);
        Ok(())
    }

    /// Change a user's nickname.
    ///
    /// A change to the user's own nickname in a different case is permitted;
    /// a change to exactly the same nickname does nothing.
    pub fn rename_user(&mut self, id: UserId, new_nick: Nickname, updates: &dyn NetworkUpdateReceiver) -> NetworkResult<()> {
        let user = self.users.get(&id).ok_or(LookupError::NoSuchUser(id))?;
        let old_nick = user.nick;

        if let Some(holder) = self.nick_bindings.get(&new_nick) {
            if *holder != id {
                return Err(NetworkError::NicknameInUse(new_nick));
            }
            if old_nick.as_str() == new_nick.as_str() {
                return Ok(());
            }
        }

        debug!(user = ?id, old = %old_nick, new = %new_nick, "renaming user");

        self.nick_bindings.remove(&old_nick);
        self.nick_bindings.insert(new_nick, id);

        let Some(user) = self.users.get_mut(&id) else {
            return Err(LookupError::NoSuchUser(id).into());
        };
        user.nick = new_nick;

        updates.notify(update::UserNickChange {
            user: user.clone(),
            old_nick,
            new_nick,
        });

        Ok(())
    }

    /// Remove a user from the network, along with their nickname and every
    /// channel membership. Channels left empty are deleted.
    ///
    /// Removing a user who is not present does nothing.
    pub fn remove_user(&mut self, id: UserId, message: String, updates: &dyn NetworkUpdateReceiver) {
        let Some(user) = self.users.remove(&id) else {
            return;
        };

        debug!(user = ?id, nick = %user.nick, "removing user");

        self.nick_bindings.remove(&user.nick);

        // HashMap::extract_if isn't stable yet
        let mut removed_memberships = Vec::new();
        let mut retained_memberships = std::collections::HashMap::new();

        for (membership_id, membership) in self.memberships.drain() {
            if membership.user == id {
                removed_memberships.push(membership);
            } else {
                retained_memberships.insert(membership_id, membership);
            }
        }
        self.memberships = retained_memberships;

        for membership in &removed_memberships {
            self.remove_channel_if_empty(membership.channel);
        }

        updates.notify(update::UserQuit {
            user,
            message,
            memberships: removed_memberships,
        });
    }

    /// Set or clear a user's away message
    pub fn set_away(&mut self, id: UserId, reason: Option<AwayReason>) -> LookupResult<()> {
        let user = self.users.get_mut(&id).ok_or(LookupError::NoSuchUser(id))?;
        user.away_reason = reason;
        Ok(())
    }

    /// Grant IRC operator status to a user
    pub fn set_oper(&mut self, id: UserId) -> LookupResult<()> {
        let user = self.users.get_mut(&id).ok_or(LookupError::NoSuchUser(id))?;
        debug!(user = ?id, nick = %user.nick, "user is now an operator");
        user.oper = true;
        Ok(())
    }
}
