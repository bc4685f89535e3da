use lantern_network::prelude::*;

mod source_target;
pub use source_target::*;

mod message_sink;
pub use message_sink::*;

pub mod numeric;
pub mod message;

/// A numeric reply which doesn't yet know who it's from or who it's for
#[derive(Debug)]
pub struct UntargetedNumeric {
    numeric_code: &'static str,
    args: String,
}

impl UntargetedNumeric {
    /// Create a new numeric
    pub fn new(numeric_code: &'static str, args: String) -> Self {
        Self { numeric_code, args }
    }

    /// Provide the source and target information required to convert this to an [`OutboundClientMessage`]
    pub fn format_for(self, source: &(impl MessageSource + ?Sized), target: &(impl MessageTarget + ?Sized)) -> OutboundClientMessage {
        OutboundClientMessage {
            content: format!(":{} {} {} {}", source.format(), self.numeric_code, target.format(), self.args)
        }
    }

    /// Provide the raw content in a situation where it can't be properly formatted
    pub fn debug_format(&self) -> String {
        format!("* {} * {}", self.numeric_code, self.args)
    }
}

/// A server-to-client protocol message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundClientMessage {
    content: String,
}

impl OutboundClientMessage {
    /// Create a new message
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// The message as it is written to the wire
    pub fn to_line(&self) -> String {
        format!("{}\r\n", self.content)
    }
}

impl std::fmt::Display for OutboundClientMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.content.fmt(f)
    }
}
