//! The client server: owns the network state and every client connection,
//! and runs the single event loop in which all commands are executed.

use crate::*;
use crate::command::{ClientCommand, CommandDispatcher};
use crate::connection::*;
use crate::listener::Listener;
use crate::messages::*;
use crate::utils::make_numeric;
use lantern_network::policy::{ChannelPolicyService, StandardChannelPolicy};
use lantern_network::prelude::*;

use std::{
    net::SocketAddr,
    str::FromStr,
    sync::Arc,
};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::{
    mpsc::{channel, Receiver, Sender},
    Mutex,
};

mod config;
pub use config::*;

mod relay;
use relay::RelayEngine;

mod registration;

/// The version string reported to clients
pub const VERSION: &str = concat!("lantern-", env!("CARGO_PKG_VERSION"));

/// Maximum number of connection events waiting to be processed before
/// connection tasks stop reading
const EVENT_QUEUE_LEN: usize = 1024;

/// Last parameters of the RPL_MYINFO (004) numeric
struct MyInfo {
    user_modes: String,
    chan_modes: String,
}

/// A client server.
///
/// All network state lives in one [`Network`] behind a single lock. Every
/// connection event is processed to completion, in order, by [`run`](Self::run),
/// so each command's read-validate-mutate-relay sequence is never interleaved
/// with another's.
pub struct ClientServer {
    name: ServerName,
    created: chrono::DateTime<chrono::Utc>,
    motd: Option<Vec<String>>,
    oper_password: String,
    myinfo: MyInfo,

    network: RwLock<Network>,
    connections: RwLock<ConnectionCollection>,
    ids: Arc<ObjectIdGenerator>,
    policy: StandardChannelPolicy,
    command_dispatcher: CommandDispatcher,

    event_sender: Sender<ConnectionEvent>,
    // This must be a tokio Mutex so that the run loop can hold it across await points
    connection_events: Mutex<Receiver<ConnectionEvent>>,
}

impl ClientServer {
    /// Construct a server from its configuration. Fails if the server name
    /// is invalid or no operator password has been supplied.
    pub fn new(config: ServerConfig) -> Result<Self, ConfigError> {
        let name = config.server_name()?;
        let oper_password = config.oper_password.clone().ok_or(ConfigError::NoOperPassword)?;
        let motd = config.load_motd();
        let (event_sender, event_receiver) = channel(EVENT_QUEUE_LEN);

        Ok(Self {
            name,
            created: chrono::Utc::now(),
            motd,
            oper_password,
            myinfo: Self::build_myinfo(),
            network: RwLock::new(Network::new()),
            connections: RwLock::new(ConnectionCollection::new()),
            ids: Arc::new(ObjectIdGenerator::new()),
            policy: StandardChannelPolicy::new(),
            command_dispatcher: CommandDispatcher::new(),
            event_sender,
            connection_events: Mutex::new(event_receiver),
        })
    }

    fn build_myinfo() -> MyInfo {
        MyInfo {
            user_modes: "o".to_string(),
            chan_modes: ChannelModeFlag::ALL
                .iter()
                .map(|m| m.to_char())
                .chain(MembershipFlagFlag::ALL.iter().map(|m| m.to_char()))
                .collect(),
        }
    }

    /// This server's name
    pub fn name(&self) -> &ServerName {
        &self.name
    }

    /// Access the network state
    pub fn network(&self) -> RwLockReadGuard<'_, Network> {
        self.network.read()
    }

    /// The ID generator used to identify objects created by this server
    pub fn ids(&self) -> &ObjectIdGenerator {
        &self.ids
    }

    /// Access the channel permission rules
    pub(crate) fn policy(&self) -> &dyn ChannelPolicyService {
        &self.policy
    }

    pub(crate) fn connections(&self) -> RwLockReadGuard<'_, ConnectionCollection> {
        self.connections.read()
    }

    /// The message of the day, if one was configured and could be read
    pub fn motd(&self) -> Option<&[String]> {
        self.motd.as_deref()
    }

    /// Check a password supplied with OPER
    pub(crate) fn oper_password_matches(&self, password: &str) -> bool {
        self.oper_password == password
    }

    /// Find a client connection
    pub(crate) fn find_connection(&self, id: ConnectionId) -> Option<Arc<ClientConnection>> {
        let ret = self.connections.read().get(id);
        tracing::trace!(
            "Looking up connection id {:?}, {}",
            id,
            if ret.is_some() { "found" } else { "not found" }
        );
        ret
    }

    /// A sender for connection events. Everything sent here is processed by
    /// [`run`](Self::run).
    pub fn event_sender(&self) -> Sender<ConnectionEvent> {
        self.event_sender.clone()
    }

    /// Start accepting client connections on the given address
    pub async fn listen(&self, address: SocketAddr) -> Result<Listener, ListenerError> {
        Listener::bind(address, Arc::clone(&self.ids), self.event_sender()).await
    }

    /// Make a change to the network state, then relay every resulting update
    /// to the users who can observe it.
    ///
    /// `change` runs under the write lock; it must not call anything that
    /// takes the network lock itself. Relaying happens after the change is
    /// complete, under a read lock.
    pub fn apply_change<T>(&self, change: impl FnOnce(&mut Network, &dyn NetworkUpdateReceiver) -> T) -> T {
        let saved = SavedUpdateReceiver::new();

        let mut net = self.network.write();
        let result = change(&mut net, &saved);
        let net = RwLockWriteGuard::downgrade(net);

        saved.playback(&RelayEngine::new(self, &net));

        result
    }

    /// Process a single connection event to completion.
    #[tracing::instrument(skip_all, fields(source = ?event.source))]
    pub fn process_event(&self, event: ConnectionEvent) {
        match event.detail {
            ConnectionEventDetail::NewConnection(conn) => {
                tracing::debug!(remote = %conn.remote_addr, "Got new connection");

                let conn = Arc::new(ClientConnection::new(conn));
                self.connections.write().add(event.source, conn);
            }
            ConnectionEventDetail::Message(m) => {
                tracing::trace!(msg = ?m, "Got message");

                let Some(connection) = self.find_connection(event.source) else {
                    // Input which arrived after the client quit
                    return;
                };

                match ClientMessage::parse(event.source, &m) {
                    Some(parsed) => {
                        let command = ClientCommand::new(self, &connection, parsed);
                        self.command_dispatcher.dispatch_command(&command);
                    }
                    None => {
                        tracing::debug!(?m, "Ignoring empty message");
                    }
                }
            }
            ConnectionEventDetail::Error(e) => {
                if let Some(conn) = self.find_connection(event.source) {
                    tracing::debug!("Connection closed: {}", e);
                    self.disconnect(&conn, &e.to_string());
                }
            }
        }
    }

    /// Remove a client from the server: quit its user from the network if
    /// it has one, send a closing `ERROR` and close the connection.
    ///
    /// Nothing happens if the connection has already been removed.
    pub(crate) fn disconnect(&self, conn: &ClientConnection, message: &str) {
        if self.connections.read().get(conn.id()).is_none() {
            return;
        }

        if let Some(user_id) = conn.user() {
            self.apply_change(|net, updates| net.remove_user(user_id, message.to_string(), updates));
        }

        conn.error(&format!("Closing Link: {} ({})", conn.hostname(), message));
        self.connections.write().remove(conn.id());
    }

    /// Run the server, processing connection events in the order they
    /// arrive.
    #[tracing::instrument(skip_all)]
    pub async fn run(&self) {
        // Take ownership of the receiver here, so that we no longer need to
        // lock it once the run loop starts
        let mut connection_events = self.connection_events.lock().await;

        while let Some(event) = connection_events.recv().await {
            self.process_event(event);
        }

        tracing::info!("Event channel closed; server stopping");
    }
}
