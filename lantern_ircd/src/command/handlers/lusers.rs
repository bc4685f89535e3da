use super::*;

#[command_handler("LUSERS")]
fn handle_lusers(cmd: &ClientCommand) -> CommandResult {
    cmd.user_id()?;
    send_lusers(cmd.server, cmd.connection, cmd.source());
    Ok(())
}
