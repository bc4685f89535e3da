use super::*;

#[command_handler("PRIVMSG")]
fn handle_privmsg(cmd: &ClientCommand) -> CommandResult {
    deliver(cmd, state::MessageType::Privmsg)
}

/// Send a PRIVMSG or NOTICE to a channel or a nickname
pub(super) fn deliver(cmd: &ClientCommand, message_type: state::MessageType) -> CommandResult {
    let user_id = cmd.user_id()?;
    let mut args = cmd.args();

    let Some(target) = args.next_optional().filter(|t| !t.is_empty()) else {
        return numeric_error!(NoRecipient, &cmd.command);
    };
    let Some(text) = args.next_optional().filter(|t| !t.is_empty()) else {
        return numeric_error!(NoTextToSend);
    };

    let to_channel = ChannelName::is_channel_prefix(target);

    if to_channel {
        let net = cmd.server.network();
        if let Some(channel) = ChannelName::from_str(target).ok().and_then(|n| net.channel_by_name(&n).ok()) {
            let source = net.user(user_id)?;
            cmd.server.policy().can_send(&source, &channel, text)?;
        }
    }

    cmd.server.apply_change(|net, updates| {
        net.send_message(user_id, target, message_type, text.to_owned(), updates)
    })?;

    if !to_channel && message_type == state::MessageType::Privmsg {
        let net = cmd.server.network();
        if let Some(recipient) = Nickname::from_str(target).ok().and_then(|n| net.user_by_nick(&n).ok()) {
            if let Some(reason) = recipient.away_reason() {
                cmd.numeric(make_numeric!(Away, &recipient, reason));
            }
        }
    }

    Ok(())
}
