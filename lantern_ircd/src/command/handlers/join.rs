use super::*;

#[command_handler("JOIN")]
fn handle_join(cmd: &ClientCommand) -> CommandResult {
    let user_id = cmd.user_id()?;
    let channel_names = cmd.args().next_arg()?;

    if channel_names == "0" {
        return part_all(cmd, user_id);
    }

    for name in channel_names.split(',').filter(|n| !n.is_empty()) {
        if let Err(e) = join_one(cmd, user_id, name) {
            cmd.notify_error(e);
        }
    }

    Ok(())
}

fn join_one(cmd: &ClientCommand, user_id: UserId, name: &str) -> CommandResult {
    let chname = ChannelName::from_str(name)?;
    let new_channel_id = cmd.server.ids().next_channel();

    // The JOIN itself reaches the joiner through the relay, before the
    // topic and names
    let channel_id = cmd
        .server
        .apply_change(|net, updates| net.join_channel(user_id, chname, new_channel_id, updates))?;

    let net = cmd.server.network();
    let channel = net.channel(channel_id)?;

    match channel.topic() {
        Some(topic) => cmd.numeric(make_numeric!(TopicIs, &channel, topic)),
        None => cmd.numeric(make_numeric!(NoTopic, &channel)),
    }
    send_channel_names(cmd.server, cmd.connection, cmd.source(), &channel)?;

    Ok(())
}

/// `JOIN 0`: leave every channel
fn part_all(cmd: &ClientCommand, user_id: UserId) -> CommandResult {
    let channels: Vec<ChannelName> = {
        let net = cmd.server.network();
        net.user(user_id)?
            .channels()
            .map(|m| m.channel().map(|c| *c.name()))
            .collect::<LookupResult<_>>()?
    };

    for chname in channels {
        if let Err(e) = super::part::part_one(cmd, user_id, &chname, None) {
            cmd.notify_error(e);
        }
    }

    Ok(())
}
