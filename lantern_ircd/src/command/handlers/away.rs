use super::*;

#[command_handler("AWAY")]
fn handle_away(cmd: &ClientCommand) -> CommandResult {
    let user_id = cmd.user_id()?;

    match cmd.args().next_optional().filter(|r| !r.is_empty()) {
        Some(reason) => {
            let reason = AwayReason::new_coerce(reason);
            cmd.server.apply_change(|net, _| net.set_away(user_id, Some(reason)))?;
            cmd.numeric(make_numeric!(NowAway));
        }
        None => {
            cmd.server.apply_change(|net, _| net.set_away(user_id, None))?;
            cmd.numeric(make_numeric!(Unaway));
        }
    }

    Ok(())
}
