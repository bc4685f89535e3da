use super::*;

/// Trait describing an object that can be the source of a client protocol message
pub trait MessageSource
{
    fn format(&self) -> String;
}

/// Trait describing an object that can be the target of a client protocol message
pub trait MessageTarget
{
    fn format(&self) -> String;
}

/// Placeholder type to denote that a message is being sent to a target whose name we
/// don't know, such as a client which hasn't yet chosen a nickname
pub struct UnknownTarget;

impl MessageSource for ServerName
{
    fn format(&self) -> String { self.to_string() }
}

impl MessageSource for String
{
    fn format(&self) -> String { self.clone() }
}

impl MessageSource for wrapper::User<'_>
{
    fn format(&self) -> String { self.nuh() }
}

impl MessageSource for state::User
{
    fn format(&self) -> String { format!("{}!{}@{}", self.nick, self.user, self.visible_host) }
}

impl MessageTarget for wrapper::User<'_>
{
    fn format(&self) -> String { self.nick().to_string() }
}

impl MessageTarget for wrapper::Channel<'_>
{
    fn format(&self) -> String { self.name().to_string() }
}

impl MessageTarget for state::User
{
    fn format(&self) -> String { self.nick.to_string() }
}

impl MessageTarget for state::Channel
{
    fn format(&self) -> String { self.name.to_string() }
}

impl MessageTarget for state::MessageTarget
{
    fn format(&self) -> String
    {
        match self
        {
            Self::Channel(c) => MessageTarget::format(c),
            Self::User(u) => MessageTarget::format(u),
        }
    }
}

impl MessageTarget for UnknownTarget
{
    fn format(&self) -> String { "*".to_string() }
}

impl MessageTarget for Nickname
{
    fn format(&self) -> String { self.to_string() }
}

impl MessageTarget for ChannelName
{
    fn format(&self) -> String { self.to_string() }
}

impl MessageTarget for String
{
    fn format(&self) -> String { self.clone() }
}

// Used when command parsing/processing fails
impl MessageTarget for crate::command::CommandSource
{
    fn format(&self) -> String
    {
        match self
        {
            Self::User(_, nick) => nick.to_string(),
            Self::PreClient => "*".to_string()
        }
    }
}

impl MessageSource for crate::ClientServer
{
    fn format(&self) -> String { self.name().to_string() }
}
