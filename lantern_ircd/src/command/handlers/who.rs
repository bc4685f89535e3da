use super::*;

use std::collections::HashSet;

#[command_handler("WHO")]
fn handle_who(cmd: &ClientCommand) -> CommandResult {
    let user_id = cmd.user_id()?;
    let mask = cmd.args().next_optional().unwrap_or("*");
    let net = cmd.server.network();

    if ChannelName::is_channel_prefix(mask) {
        if let Some(channel) = ChannelName::from_str(mask).ok().and_then(|n| net.channel_by_name(&n).ok()) {
            let chname = channel.name().to_string();
            for member in channel.members() {
                let user = member.user()?;
                let status = who_status(&user, Some(member.permissions()));
                cmd.numeric(make_numeric!(WhoReply, &chname, &user, cmd.server.name(), &status));
            }
        }
    } else if mask == "*" || mask == "0" {
        for user in visible_users(&net, user_id) {
            let status = who_status(&user, None);
            cmd.numeric(make_numeric!(WhoReply, "*", &user, cmd.server.name(), &status));
        }
    } else if let Some(user) = Nickname::from_str(mask).ok().and_then(|n| net.user_by_nick(&n).ok()) {
        let status = who_status(&user, None);
        cmd.numeric(make_numeric!(WhoReply, "*", &user, cmd.server.name(), &status));
    }

    cmd.numeric(make_numeric!(EndOfWho, mask));
    Ok(())
}

/// Users listed by an unrestricted WHO: everyone in a channel the requester
/// isn't in, and everyone in no channel at all
fn visible_users(net: &Network, requester: UserId) -> impl Iterator<Item = wrapper::User<'_>> {
    let mut visible = HashSet::new();

    for channel in net.channels() {
        if channel.has_member(requester).is_none() {
            visible.extend(channel.members().map(|m| m.user_id()));
        }
    }

    net.users()
        .filter(move |u| visible.contains(&u.id()) || u.channels().next().is_none())
}

/// The status field of a WHO reply: here or gone, operator, then the
/// member's highest channel privilege
fn who_status(user: &wrapper::User, permissions: Option<MembershipFlagSet>) -> String {
    let mut status = String::from(if user.away_reason().is_some() { "G" } else { "H" });

    if user.is_oper() {
        status.push('*');
    }
    if let Some(prefix) = permissions.and_then(|p| p.highest_prefix()) {
        status.push(prefix);
    }

    status
}
