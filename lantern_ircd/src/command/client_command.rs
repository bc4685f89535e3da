use super::*;
use lantern_network::policy::{ChannelPermissionError, PermissionError};

/// Describes the possible types of connection that can invoke a command handler
#[derive(Debug, Clone)]
pub enum CommandSource
{
    /// A client connection which has not yet completed registration
    PreClient,
    /// A client connection which is associated with a network user, and the
    /// nickname that user had when the command was received
    User(UserId, Nickname),
}

/// A client command to be handled
pub struct ClientCommand<'a>
{
    /// The [`ClientServer`] instance
    pub server: &'a ClientServer,
    /// The connection from which the command originated
    pub connection: &'a ClientConnection,
    /// Details of the user associated with the connection
    source: CommandSource,
    /// The command being executed
    pub command: String,
    /// Arguments supplied
    pub args: ArgumentList,
}

impl<'a> ClientCommand<'a>
{
    /// Construct a `ClientCommand`
    pub fn new(server: &'a ClientServer,
           connection: &'a ClientConnection,
           message: ClientMessage,
        ) -> Self
    {
        let source = Self::translate_message_source(server, connection);

        Self {
            server,
            connection,
            source,
            command: message.command,
            args: ArgumentList::new(message.args),
        }
    }

    fn translate_message_source(server: &ClientServer, source: &ClientConnection) -> CommandSource
    {
        match source.user()
        {
            Some(user_id) => match server.network().user(user_id) {
                Ok(user) => CommandSource::User(user_id, user.nick()),
                Err(e) => {
                    tracing::error!(?user_id, "Registered connection has no user: {}", e);
                    CommandSource::PreClient
                }
            },
            None => CommandSource::PreClient,
        }
    }

    pub fn source(&self) -> &CommandSource
    {
        &self.source
    }

    /// The user who sent this command, or `NotRegistered` if the connection
    /// hasn't completed registration
    pub fn user_id(&self) -> Result<UserId, CommandError>
    {
        match self.source
        {
            CommandSource::User(id, _) => Ok(id),
            CommandSource::PreClient => Err(CommandError::NotRegistered),
        }
    }

    pub fn args(&self) -> ArgumentListIter<'_>
    {
        self.args.iter()
    }

    /// Send a message to the originating connection
    pub fn response(&self, msg: OutboundClientMessage)
    {
        self.connection.send(msg);
    }

    /// Send a numeric to the originating connection, addressed to its
    /// current nickname
    pub fn numeric(&self, numeric: UntargetedNumeric)
    {
        self.response(numeric.format_for(self.server, &self.source));
    }

    /// Report a failed command to the originating connection
    pub fn notify_error(&self, err: CommandError)
    {
        if let Some(n) = self.translate_command_error(err)
        {
            self.numeric(n);
        }
    }

    fn translate_command_error(&self, err: CommandError) -> Option<UntargetedNumeric>
    {
        match err
        {
            CommandError::CommandNotFound(cmd) => {
                Some(make_numeric!(UnknownCommand, &cmd))
            }
            CommandError::NotEnoughParameters => {
                Some(make_numeric!(NotEnoughParameters, &self.command))
            }
            CommandError::NotRegistered => {
                Some(make_numeric!(NotRegistered))
            }
            CommandError::LookupError(le) => {
                match le
                {
                    LookupError::NoSuchNick(nick) => Some(make_numeric!(NoSuchTarget, nick.as_ref())),
                    LookupError::NoSuchChannelName(name) => Some(make_numeric!(NoSuchChannel, name.as_ref())),
                    _ => {
                        tracing::error!(command = %self.command, "Lookup failed: {}", le);
                        None
                    }
                }
            }
            CommandError::NetworkError(ne) => {
                match ne
                {
                    NetworkError::NicknameInUse(nick) => Some(make_numeric!(NicknameInUse, &nick)),
                    // Joining a channel twice is silently ignored
                    NetworkError::AlreadyOnChannel(_) => None,
                    NetworkError::NoSuchChannel(name) => Some(make_numeric!(NoSuchChannel, name.as_ref())),
                    NetworkError::NotOnChannel(name) => Some(make_numeric!(NotOnChannel, &name)),
                    NetworkError::UserNotInChannel(nick, name) => Some(make_numeric!(UserNotInChannel, &nick, &name)),
                    NetworkError::CannotSendToChannel(name) => Some(make_numeric!(CannotSendToChannel, &name)),
                    NetworkError::NoSuchTarget(target) => Some(make_numeric!(NoSuchTarget, &target)),
                    NetworkError::Lookup(le) => self.translate_command_error(le.into()),
                }
            }
            CommandError::InvalidNick(name) => {
                Some(make_numeric!(ErroneousNickname, &name))
            }
            CommandError::InvalidChannelName(name) => {
                Some(make_numeric!(NoSuchChannel, &name))
            }
            CommandError::Permission(pe) => {
                match pe
                {
                    PermissionError::Channel(channel_name, channel_err) => {
                        use ChannelPermissionError::*;
                        match channel_err
                        {
                            UserNotOnChannel => Some(make_numeric!(NotOnChannel, &channel_name)),
                            UserNotOp => Some(make_numeric!(ChanOpPrivsNeeded, &channel_name)),
                            CannotSendToChannel => Some(make_numeric!(CannotSendToChannel, &channel_name)),
                        }
                    }
                    PermissionError::Lookup(le) => self.translate_command_error(le.into()),
                }
            }
            CommandError::Numeric(n) => {
                Some(n)
            }
        }
    }
}
