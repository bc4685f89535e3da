use super::*;

#[command_handler("PING")]
fn handle_ping(cmd: &ClientCommand) -> CommandResult {
    let Some(cookie) = cmd.args().next_optional() else {
        return numeric_error!(NoOrigin);
    };

    cmd.response(message::Pong::new(cmd.server, cookie));
    Ok(())
}

#[command_handler("PONG")]
fn handle_pong(_cmd: &ClientCommand) -> CommandResult {
    Ok(())
}
