use lantern_network::id::ConnectionId;

/// A tokenised, but not yet processed, message from a client connection
#[derive(Debug)]
pub struct ClientMessage {
    /// The connection from which the message was received
    pub source: ConnectionId,
    /// The command, folded to upper case
    pub command: String,
    /// The list of arguments
    pub args: Vec<String>,
}

impl ClientMessage {
    /// Create a `ClientMessage` from a received line.
    ///
    /// Any tags and source prefix are skipped. Returns `None` for lines with
    /// nothing left to process.
    pub fn parse(source: ConnectionId, raw: &str) -> Option<Self> {
        let mut args = Vec::new();

        let mut raw = raw.trim_start();
        if raw.is_empty() {
            return None;
        }

        // Tags are accepted but not acted on
        if raw.starts_with('@') {
            let space_offset = raw.find(' ')?;
            raw = raw[space_offset..].trim_start();
        }

        // A source prefix from a client carries no information we use
        if raw.starts_with(':') {
            let space_offset = raw.find(' ')?;
            raw = raw[space_offset..].trim_start();
        }

        if raw.is_empty() {
            return None;
        }

        let offset = match raw.find(' ') {
            Some(offset) => offset,
            None => {
                return Some(Self {
                    source,
                    command: raw.to_ascii_uppercase(),
                    args: Vec::new(),
                });
            }
        };

        let command = &raw[0..offset];
        let mut rest = &raw[offset + 1..];

        loop {
            if let Some(arg) = rest.strip_prefix(':') {
                args.push(arg.to_string());
                break;
            }

            match rest.find(' ') {
                Some(offset) => {
                    let arg = &rest[0..offset];

                    if !arg.is_empty() {
                        args.push(arg.to_string());
                    }

                    rest = &rest[offset + 1..];
                }
                None => {
                    if !rest.is_empty() {
                        args.push(rest.to_string());
                    }
                    break;
                }
            }
        }

        Some(Self {
            source,
            command: command.to_ascii_uppercase(),
            args,
        })
    }
}
