use super::*;
use crate::utils::{send_lusers, send_motd};

impl ClientServer {
    /// Complete registration for a connection, if it has supplied everything
    /// that's needed: create the user, bind it to the connection and send
    /// the welcome burst.
    ///
    /// If the chosen nickname was taken in the meantime, the connection stays
    /// unregistered and must pick another.
    pub(crate) fn try_register(&self, conn: &ClientConnection) {
        if !conn.with_pre_client(|pc| pc.can_register()).unwrap_or(false) {
            return;
        }

        let Some(pre_client) = conn.take_pre_client() else {
            return;
        };
        let (Some(nick), Some(user)) = (pre_client.nick, pre_client.user) else {
            conn.restore_pre_client(pre_client);
            return;
        };

        let host = match Hostname::from_str(&conn.hostname()) {
            Ok(host) => host,
            Err(e) => {
                tracing::error!(connection = ?conn.id(), "Couldn't build hostname: {}", e);
                conn.error("Invalid hostname");
                self.connections.write().remove(conn.id());
                return;
            }
        };
        let realname = pre_client.realname.unwrap_or_else(|| Realname::new_coerce(""));

        let user_id = self.ids.next_user();
        let new_user = state::User::new(user_id, nick, user, host, realname);

        if let Err(e) = self.apply_change(|net, updates| net.register_user(new_user, updates)) {
            tracing::debug!(connection = ?conn.id(), "Registration failed: {}", e);
            if let NetworkError::NicknameInUse(nick) = e {
                conn.send(make_numeric!(NicknameInUse, &nick).format_for(self, &UnknownTarget));
            }
            conn.restore_pre_client(PreClient {
                nick: None,
                user: Some(user),
                realname: Some(realname),
            });
            return;
        }

        conn.set_user(user_id);
        self.connections.write().add_user(user_id, conn.id());

        tracing::info!(connection = ?conn.id(), user = ?user_id, %nick, "Client registered");

        self.send_welcome(conn, user_id);
    }

    fn send_welcome(&self, conn: &ClientConnection, user_id: UserId) {
        let (nick, nuh) = {
            let net = self.network();
            match net.user(user_id) {
                Ok(user) => (user.nick(), user.nuh()),
                Err(e) => {
                    tracing::error!(?user_id, "Newly registered user is missing: {}", e);
                    return;
                }
            }
        };

        conn.send(make_numeric!(Welcome, &nuh).format_for(self, &nick));
        conn.send(make_numeric!(YourHostIs, &self.name, VERSION).format_for(self, &nick));
        conn.send(make_numeric!(Created, &self.created).format_for(self, &nick));
        conn.send(
            make_numeric!(MyInfo, &self.name, VERSION, &self.myinfo.user_modes, &self.myinfo.chan_modes)
                .format_for(self, &nick),
        );

        send_lusers(self, conn, &nick);
        send_motd(self, conn, &nick);
    }
}
