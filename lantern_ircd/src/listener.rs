//! Accepts client connections and starts a task for each.

use crate::connection::*;
use crate::connection_task::ConnectionTask;
use lantern_network::id::ObjectIdGenerator;

use std::{
    net::SocketAddr,
    sync::Arc,
};

use tokio::{
    net::TcpListener,
    sync::mpsc::{
        Sender,
        Receiver,
        channel,
        unbounded_channel,
    },
    select
};

enum ListenerControl
{
    Close,
}

/// A listening socket. Accepting stops when this is dropped.
pub struct Listener
{
    local_addr: SocketAddr,
    control_channel: Sender<ListenerControl>,
}

impl Listener
{
    /// Bind to `address` and start accepting connections. Every event on an
    /// accepted connection is sent to `event_channel`.
    pub async fn bind(address: SocketAddr,
                      id_gen: Arc<ObjectIdGenerator>,
                      event_channel: Sender<ConnectionEvent>,
                    ) -> Result<Self, ListenerError>
    {
        let listener = TcpListener::bind(address).await?;
        let local_addr = listener.local_addr()?;
        let (control_send, control_receive) = channel(8);

        tracing::info!(%local_addr, "listening");

        tokio::spawn(Self::listen_loop(listener, id_gen, event_channel, control_receive));

        Ok(Self {
            local_addr,
            control_channel: control_send,
        })
    }

    /// The address actually bound, which differs from the one requested if
    /// that had port zero
    pub fn local_addr(&self) -> SocketAddr
    {
        self.local_addr
    }

    /// Stop accepting new connections. Existing connections are unaffected.
    pub fn close(&self)
    {
        if let Err(e) = self.control_channel.try_send(ListenerControl::Close)
        {
            tracing::error!("Error closing listener: {}", e);
        }
    }

    async fn listen_loop(
        listener: TcpListener,
        id_gen: Arc<ObjectIdGenerator>,
        event_channel: Sender<ConnectionEvent>,
        mut control_channel: Receiver<ListenerControl>,
    )
    {
        loop
        {
            select! {
                res = listener.accept() => {
                    match res {
                        Ok((stream, remote)) =>
                        {
                            let id = id_gen.next_connection();
                            let (control_send, control_receive) = unbounded_channel();
                            let conn = Connection::new(id, remote.ip(), control_send);

                            tracing::debug!(connection = ?id, %remote, "accepted connection");

                            // The server has to know about the connection before
                            // it can receive anything from it
                            if event_channel.send(ConnectionEvent::new_connection(conn)).await.is_err()
                            {
                                tracing::error!("Event channel closed; stopping listener");
                                break;
                            }

                            let task = ConnectionTask::new(id, stream, control_receive, event_channel.clone());
                            tokio::spawn(task.run());
                        },
                        Err(e) => {
                            tracing::warn!("Error accepting connection: {}", e);
                        }
                    }
                },
                control = control_channel.recv() => {
                    match control {
                        None => break,
                        Some(ListenerControl::Close) => break,
                    }
                }
            }
        }

        tracing::debug!("listener stopped");
    }
}
