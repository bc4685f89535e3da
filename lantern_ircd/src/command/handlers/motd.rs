use super::*;

#[command_handler("MOTD")]
fn handle_motd(cmd: &ClientCommand) -> CommandResult {
    cmd.user_id()?;
    send_motd(cmd.server, cmd.connection, cmd.source());
    Ok(())
}
