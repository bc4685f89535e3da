use super::*;

#[command_handler("LIST")]
fn handle_list(cmd: &ClientCommand) -> CommandResult {
    cmd.user_id()?;

    let wanted: Option<Vec<ChannelName>> = cmd.args().next_optional().map(|names| {
        names
            .split(',')
            .filter_map(|n| ChannelName::from_str(n).ok())
            .collect()
    });

    let net = cmd.server.network();

    for channel in net.channels() {
        if let Some(wanted) = &wanted {
            if !wanted.contains(channel.name()) {
                continue;
            }
        }

        cmd.numeric(make_numeric!(List, &channel, channel.members().count(), channel.topic().unwrap_or("")));
    }

    cmd.numeric(make_numeric!(ListEnd));
    Ok(())
}
