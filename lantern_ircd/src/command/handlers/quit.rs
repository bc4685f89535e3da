use super::*;

#[command_handler("QUIT")]
fn handle_quit(cmd: &ClientCommand) -> CommandResult {
    let message = cmd.args().next_optional().unwrap_or("Client Quit");
    cmd.server.disconnect(cmd.connection, message);
    Ok(())
}
