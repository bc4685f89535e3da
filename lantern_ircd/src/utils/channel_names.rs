use crate::messages::numeric;
use crate::messages::*;
use crate::*;
use lantern_network::prelude::*;

use itertools::Itertools;

/// The member list of a channel as shown in NAMES, each nick carrying the
/// prefix of its highest channel privilege
pub fn format_channel_members(channel: &wrapper::Channel) -> LookupResult<String> {
    let mut names = Vec::new();

    for member in channel.members() {
        let nick = member.user()?.nick();
        match member.permissions().highest_prefix() {
            Some(prefix) => names.push(format!("{}{}", prefix, nick)),
            None => names.push(nick.to_string()),
        }
    }

    Ok(names.iter().join(" "))
}

pub fn send_channel_names(
    server: &ClientServer,
    to: &(impl MessageSink + ?Sized),
    to_user: &(impl MessageTarget + ?Sized),
    channel: &wrapper::Channel,
) -> LookupResult<()> {
    let content = format_channel_members(channel)?;
    let chname = channel.name().to_string();

    to.send(numeric::NamesReply::new(&chname, &content).format_for(server, to_user));
    to.send(numeric::EndOfNames::new(&chname).format_for(server, to_user));
    Ok(())
}
