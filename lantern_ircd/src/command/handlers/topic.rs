use super::*;

#[command_handler("TOPIC")]
fn handle_topic(cmd: &ClientCommand) -> CommandResult {
    let user_id = cmd.user_id()?;
    let mut args = cmd.args();
    let chname = ChannelName::from_str(args.next_arg()?)?;

    match args.next_optional() {
        Some(text) => {
            {
                let net = cmd.server.network();
                // A channel that doesn't exist is one the user isn't on
                let channel = net.channel_by_name(&chname).map_err(|_| NetworkError::NotOnChannel(chname))?;
                let source = net.user(user_id)?;
                cmd.server.policy().can_set_topic(&source, &channel, text)?;
            }

            cmd.server
                .apply_change(|net, updates| net.set_topic(user_id, &chname, text.to_owned(), updates))?;
        }
        None => {
            let net = cmd.server.network();
            let channel = net.channel_by_name(&chname).map_err(|_| NetworkError::NotOnChannel(chname))?;

            if channel.has_member(user_id).is_none() {
                return numeric_error!(NotOnChannel, &chname);
            }

            match channel.topic() {
                Some(topic) => cmd.numeric(make_numeric!(TopicIs, &channel, topic)),
                None => cmd.numeric(make_numeric!(NoTopic, &channel)),
            }
        }
    }

    Ok(())
}
