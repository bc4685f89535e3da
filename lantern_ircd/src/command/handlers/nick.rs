use super::*;

#[command_handler("NICK")]
fn handle_nick(cmd: &ClientCommand) -> CommandResult {
    let Some(requested) = cmd.args().next_optional().filter(|n| !n.is_empty()) else {
        return numeric_error!(NoNicknameGiven);
    };
    let nick = Nickname::from_str(requested)?;

    match cmd.source() {
        CommandSource::PreClient => handle_preclient(cmd, nick),
        CommandSource::User(user_id, _) => handle_user(cmd, *user_id, nick),
    }
}

fn handle_preclient(cmd: &ClientCommand, nick: Nickname) -> CommandResult {
    if cmd.server.network().nick_in_use(&nick) {
        return numeric_error!(NicknameInUse, &nick);
    }

    cmd.connection.with_pre_client(|pc| pc.nick = Some(nick));
    cmd.server.try_register(cmd.connection);

    Ok(())
}

fn handle_user(cmd: &ClientCommand, user_id: UserId, nick: Nickname) -> CommandResult {
    cmd.server.apply_change(|net, updates| net.rename_user(user_id, nick, updates))?;
    Ok(())
}
