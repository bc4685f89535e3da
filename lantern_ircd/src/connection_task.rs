use crate::connection::*;
use lantern_network::id::ConnectionId;

use tokio::{
    io::{
        AsyncRead,
        AsyncWrite,
        BufReader,
        AsyncBufReadExt,
        AsyncWriteExt,
    },
    sync::mpsc::{
        Sender,
        UnboundedReceiver,
    },
    select,
};

/// Owns one client socket: forwards each received line to the server, and
/// writes whatever the server queues for it.
pub(crate) struct ConnectionTask<S> {
    id: ConnectionId,
    conn: S,
    control_channel: UnboundedReceiver<ConnectionControl>,
    event_channel: Sender<ConnectionEvent>,
}

impl<S> ConnectionTask<S>
    where S: AsyncRead + AsyncWrite
{
    pub fn new(id: ConnectionId,
        stream: S,
        control: UnboundedReceiver<ConnectionControl>,
        events: Sender<ConnectionEvent>) -> Self
    {
        Self {
            id,
            conn: stream,
            control_channel: control,
            event_channel: events
        }
    }

    #[tracing::instrument(skip(self), fields(connection = ?self.id))]
    pub async fn run(mut self)
    {
        let (reader, mut writer) = tokio::io::split(self.conn);
        let mut reader = BufReader::new(reader);
        let mut buffer = Vec::new();

        let mut error = ConnectionError::Closed;

        loop
        {
            select!
            {
                control = self.control_channel.recv() => match control
                {
                    None => { break; },
                    Some(ConnectionControl::Close) => { break; },
                    Some(ConnectionControl::Send(msg)) => {
                        if let Err(e) = writer.write_all(msg.as_bytes()).await {
                            error = e.into();
                            break;
                        }
                    }
                },
                // A partial line stays in the buffer if the other branch wins
                read = reader.read_until(b'\n', &mut buffer) => match read {
                    Ok(0) => { break; },
                    Ok(_) => {
                        let line = decode_line(&buffer);
                        buffer.clear();

                        let Some(line) = line else {
                            tracing::debug!("Dropping line that is not valid UTF-8");
                            continue;
                        };

                        tracing::trace!(%line, "received");
                        if self.event_channel.send(ConnectionEvent::message(self.id, line)).await.is_err() {
                            tracing::error!("Error notifying socket message on connection {:?}", self.id);
                            return;
                        }
                    }
                    Err(e) => {
                        error = e.into();
                        break;
                    }
                }
            }
        }

        if let Err(e) = writer.shutdown().await
        {
            tracing::trace!("Error shutting down socket: {}", e);
        }

        tracing::debug!("closing {:?}: {}", self.id, error);
        if self.event_channel.send(ConnectionEvent::error(self.id, error)).await.is_err() {
            tracing::error!("Error notifying connection closed on {:?}", self.id);
        }
    }
}

/// Strip the line terminator, accepting either CRLF or a bare LF. Lines
/// which aren't valid UTF-8 yield `None`.
fn decode_line(raw: &[u8]) -> Option<String>
{
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8(raw.to_vec()).ok()
}
