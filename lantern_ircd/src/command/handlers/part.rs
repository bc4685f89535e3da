use super::*;

#[command_handler("PART")]
fn handle_part(cmd: &ClientCommand) -> CommandResult {
    let user_id = cmd.user_id()?;
    let mut args = cmd.args();
    let channel_names = args.next_arg()?;
    let message = args.next_optional();

    for name in channel_names.split(',').filter(|n| !n.is_empty()) {
        let result = ChannelName::from_str(name)
            .map_err(CommandError::from)
            .and_then(|chname| part_one(cmd, user_id, &chname, message.map(str::to_owned)));

        if let Err(e) = result {
            cmd.notify_error(e);
        }
    }

    Ok(())
}

pub(super) fn part_one(
    cmd: &ClientCommand,
    user_id: UserId,
    chname: &ChannelName,
    message: Option<String>,
) -> CommandResult {
    cmd.server
        .apply_change(|net, updates| net.part_channel(user_id, chname, message, updates))?;
    Ok(())
}
