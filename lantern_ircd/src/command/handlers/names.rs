use super::*;

#[command_handler("NAMES")]
fn handle_names(cmd: &ClientCommand) -> CommandResult {
    cmd.user_id()?;
    let net = cmd.server.network();

    if let Some(names) = cmd.args().next_optional() {
        for name in names.split(',') {
            match ChannelName::from_str(name).ok().and_then(|n| net.channel_by_name(&n).ok()) {
                Some(channel) => send_channel_names(cmd.server, cmd.connection, cmd.source(), &channel)?,
                None => cmd.numeric(make_numeric!(EndOfNames, name)),
            }
        }
        return Ok(());
    }

    for channel in net.channels() {
        let content = format_channel_members(&channel)?;
        cmd.numeric(make_numeric!(NamesReply, &channel.name().to_string(), &content));
    }

    // Users in no channel at all are listed under a pseudo-channel
    let unjoined: Vec<String> = net
        .users()
        .filter(|u| u.channels().next().is_none())
        .map(|u| u.nick().to_string())
        .collect();

    if !unjoined.is_empty() {
        cmd.numeric(make_numeric!(NamesReply, "*", &unjoined.join(" ")));
    }
    cmd.numeric(make_numeric!(EndOfNames, "*"));

    Ok(())
}
