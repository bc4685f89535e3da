use super::*;

#[command_handler("NOTICE")]
fn handle_notice(cmd: &ClientCommand) -> CommandResult {
    cmd.user_id()?;

    // Failed notices are never answered
    if let Err(e) = super::privmsg::deliver(cmd, state::MessageType::Notice) {
        tracing::debug!("Dropping NOTICE: {}", e);
    }

    Ok(())
}
