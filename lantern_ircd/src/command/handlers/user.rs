use super::*;

#[command_handler("USER")]
fn handle_user(cmd: &ClientCommand) -> CommandResult {
    let mut args = cmd.args();
    let username = args.next_arg()?;
    let _mode = args.next_arg()?;
    let _unused = args.next_arg()?;
    let realname = args.next_arg()?;

    if cmd.user_id().is_ok() {
        return numeric_error!(AlreadyRegistered);
    }

    // Nothing usable left once the forbidden characters are gone
    let username = Username::new_coerce(username).map_err(|_| CommandError::NotEnoughParameters)?;
    let realname = Realname::new_coerce(realname);

    let already_sent = cmd.connection.with_pre_client(|pc| {
        if pc.user.is_some() {
            return true;
        }
        pc.user = Some(username);
        pc.realname = Some(realname);
        false
    });

    if already_sent.unwrap_or(true) {
        return numeric_error!(AlreadyRegistered);
    }

    cmd.server.try_register(cmd.connection);
    Ok(())
}
