use super::*;

use std::collections::HashMap;

/// A command handler wrapper function. This is the type emitted by the `command_handler`
/// attribute macro
pub type CommandHandlerWrapper = fn(&ClientCommand<'_>);

/// A command handler registration. Constructed by the `command_handler` attribute macro.
pub struct CommandRegistration
{
    pub(crate) command: &'static str,
    pub(crate) handler: CommandHandlerWrapper,
}

/// A command dispatcher. Collects registered command handlers and allows lookup by
/// command name.
pub struct CommandDispatcher
{
    handlers: HashMap<String, CommandHandlerWrapper>
}

inventory::collect!(CommandRegistration);

impl CommandDispatcher {
    /// Construct a `CommandDispatcher`.
    ///
    /// Handlers are populated via compile-time registration.
    pub fn new() -> Self
    {
        let mut map = HashMap::new();

        for reg in inventory::iter::<CommandRegistration> {
            map.insert(reg.command.to_ascii_uppercase(), reg.handler);
        }

        Self {
            handlers: map
        }
    }

    /// Look up and execute the handler function for a given command.
    pub fn dispatch_command(&self, cmd: &ClientCommand)
    {
        let _span = tracing::debug_span!("command", command = %cmd.command, source = ?cmd.source()).entered();

        match self.handlers.get(&cmd.command.to_ascii_uppercase())
        {
            Some(handler) =>
            {
                tracing::trace!(args = ?cmd.args, "dispatching");
                handler(cmd)
            }
            None =>
            {
                let error = match cmd.source() {
                    CommandSource::PreClient => CommandError::NotRegistered,
                    CommandSource::User(..) => CommandError::CommandNotFound(cmd.command.clone()),
                };
                cmd.notify_error(error);
            }
        }
    }
}

impl Default for CommandDispatcher
{
    fn default() -> Self
    {
        Self::new()
    }
}
