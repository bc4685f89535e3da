//! Types shared between the network-facing tasks and the server event loop.

use lantern_network::id::ConnectionId;

use std::net::IpAddr;

use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

/// Instructions from the server to a connection task
#[derive(Debug)]
pub enum ConnectionControl
{
    /// Write the given text, which must already be line-terminated
    Send(String),
    /// Write nothing further, and close the socket
    Close,
}

/// A connection being managed by a connection task.
///
/// This is the server's handle to the socket; it can queue output and ask
/// for the connection to be closed, but never blocks.
#[derive(Debug)]
pub struct Connection
{
    pub id: ConnectionId,
    pub remote_addr: IpAddr,
    control_channel: UnboundedSender<ConnectionControl>,
}

impl Connection
{
    pub fn new(id: ConnectionId, remote_addr: IpAddr, control_channel: UnboundedSender<ConnectionControl>) -> Self
    {
        Self { id, remote_addr, control_channel }
    }

    fn send_control(&self, msg: ConnectionControl)
    {
        if let Err(e) = self.control_channel.send(msg)
        {
            // The task has already gone; its close event will clean up
            tracing::debug!(connection = ?self.id, "Error sending connection control message: {}", e);
        }
    }

    /// Close the connection.
    pub fn close(&self)
    {
        self.send_control(ConnectionControl::Close);
    }

    /// Send the provided text to the connection
    pub fn send(&self, msg: String)
    {
        self.send_control(ConnectionControl::Send(msg));
    }
}

/// An event on a client connection, for the server to process
#[derive(Debug)]
pub struct ConnectionEvent
{
    pub source: ConnectionId,
    pub detail: ConnectionEventDetail,
}

#[derive(Debug)]
pub enum ConnectionEventDetail
{
    /// A connection has been accepted. This is always delivered before any
    /// other event for the same connection.
    NewConnection(Connection),
    /// A line of text, with its terminator removed
    Message(String),
    /// The connection has failed or been closed, and will produce no more events
    Error(ConnectionError),
}

impl ConnectionEvent
{
    pub fn new_connection(conn: Connection) -> Self
    {
        Self { source: conn.id, detail: ConnectionEventDetail::NewConnection(conn) }
    }

    pub fn message(source: ConnectionId, line: String) -> Self
    {
        Self { source, detail: ConnectionEventDetail::Message(line) }
    }

    pub fn error(source: ConnectionId, error: ConnectionError) -> Self
    {
        Self { source, detail: ConnectionEventDetail::Error(error) }
    }
}

/// An error that might occur on a single connection.
#[derive(Error, Debug)]
pub enum ConnectionError
{
    #[error("Connection closed")]
    Closed,
    #[error("I/O Error: {0}")]
    IoError(String),
    #[error("Internal error")]
    InternalError,
}

impl From<std::io::Error> for ConnectionError
{
    fn from(e: std::io::Error) -> Self
    {
        Self::IoError(e.to_string())
    }
}

/// An error that might occur when setting up a listener.
#[derive(Error, Debug)]
pub enum ListenerError
{
    #[error("I/O Error: {0}")]
    IoError(#[from] std::io::Error),
}
