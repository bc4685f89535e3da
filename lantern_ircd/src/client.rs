use crate::connection::Connection;
use crate::messages::{MessageSink, OutboundClientMessage};
use lantern_network::prelude::*;

use std::net::IpAddr;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// A client protocol connection
#[derive(Debug)]
pub struct ClientConnection
{
    /// The underlying network connection
    pub connection: Connection,

    /// The user ID, once this connection has completed registration
    user_id: OnceLock<UserId>,

    /// The registration information received so far, if this connection has not
    /// yet completed registration
    pre_client: Mutex<Option<PreClient>>,
}

/// Information received from a client connection that has not yet completed registration
#[derive(Debug, Default)]
pub struct PreClient
{
    pub nick: Option<Nickname>,
    pub user: Option<Username>,
    pub realname: Option<Realname>,
}

impl ClientConnection
{
    /// Construct a `ClientConnection` from an underlying [`Connection`]
    pub fn new(conn: Connection) -> Self
    {
        Self {
            connection: conn,
            user_id: OnceLock::new(),
            pre_client: Mutex::new(Some(PreClient::default())),
        }
    }

    /// The connection ID
    pub fn id(&self) -> ConnectionId
    {
        self.connection.id
    }

    /// The remote IP address from which this client connected
    pub fn remote_addr(&self) -> IpAddr
    {
        self.connection.remote_addr
    }

    /// The hostname shown for this client: its address in text form. IPv6
    /// addresses beginning with `:` are prefixed with `0`, as a leading
    /// colon can't appear in a protocol parameter.
    pub fn hostname(&self) -> String
    {
        let addr = self.remote_addr().to_string();
        if addr.starts_with(':') {
            format!("0{}", addr)
        } else {
            addr
        }
    }

    /// The registered user, if any
    pub fn user(&self) -> Option<UserId>
    {
        self.user_id.get().copied()
    }

    /// Mark this connection as registered to the given user
    pub fn set_user(&self, id: UserId)
    {
        if self.user_id.set(id).is_err()
        {
            tracing::error!(connection = ?self.id(), "Tried to register an already registered connection");
        }
    }

    /// Run `f` against the registration state, if registration is still
    /// in progress
    pub fn with_pre_client<T>(&self, f: impl FnOnce(&mut PreClient) -> T) -> Option<T>
    {
        self.pre_client.lock().as_mut().map(f)
    }

    /// Remove and return the registration state, if registration is still
    /// in progress
    pub fn take_pre_client(&self) -> Option<PreClient>
    {
        self.pre_client.lock().take()
    }

    /// Put back registration state after a failed registration attempt
    pub fn restore_pre_client(&self, pre_client: PreClient)
    {
        *self.pre_client.lock() = Some(pre_client);
    }

    /// Close this connection with an error message
    pub fn error(&self, msg: &str)
    {
        self.send(crate::messages::message::Error::new(msg));
        self.connection.close();
    }
}

impl MessageSink for ClientConnection
{
    fn send(&self, msg: OutboundClientMessage)
    {
        tracing::trace!(connection = ?self.id(), "-> {}", msg);
        self.connection.send(msg.to_line())
    }
}

impl PreClient {
    /// Determine whether this connection is ready to complete registration
    pub fn can_register(&self) -> bool
    {
        let result = self.user.is_some() && self.nick.is_some();

        tracing::trace!(?self, result, "PreClient::can_register");
        result
    }
}
