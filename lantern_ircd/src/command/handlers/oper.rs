use super::*;

#[command_handler("OPER")]
fn handle_oper(cmd: &ClientCommand) -> CommandResult {
    let user_id = cmd.user_id()?;
    let mut args = cmd.args();
    let name = args.next_arg()?;
    let password = args.next_arg()?;

    if !cmd.server.oper_password_matches(password) {
        tracing::info!(?user_id, %name, "Failed OPER attempt");
        return numeric_error!(PasswordMismatch);
    }

    cmd.server.apply_change(|net, _| net.set_oper(user_id))?;
    cmd.numeric(make_numeric!(YoureOper));

    Ok(())
}
