use super::*;

use itertools::Itertools;

#[command_handler("WHOIS")]
fn handle_whois(cmd: &ClientCommand) -> CommandResult {
    cmd.user_id()?;

    let mut args = cmd.args();
    let Some(first) = args.next_optional() else {
        return numeric_error!(NoNicknameGiven);
    };
    // `WHOIS <server> <nick>` names a server first; there's only one
    let target = args.next_optional().unwrap_or(first);

    let net = cmd.server.network();

    let Some(user) = Nickname::from_str(target).ok().and_then(|n| net.user_by_nick(&n).ok()) else {
        cmd.numeric(make_numeric!(NoSuchTarget, target));
        cmd.numeric(make_numeric!(EndOfWhois, target));
        return Ok(());
    };

    cmd.numeric(make_numeric!(WhoisUser, &user));

    let mut channels = Vec::new();
    for membership in user.channels() {
        let channel = membership.channel()?;
        match membership.permissions().highest_prefix() {
            Some(prefix) => channels.push(format!("{}{}", prefix, channel.name())),
            None => channels.push(channel.name().to_string()),
        }
    }
    if !channels.is_empty() {
        cmd.numeric(make_numeric!(WhoisChannels, &user, &channels.iter().join(" ")));
    }

    cmd.numeric(make_numeric!(WhoisServer, &user, cmd.server.name(), crate::server::VERSION));

    if let Some(reason) = user.away_reason() {
        cmd.numeric(make_numeric!(Away, &user, reason));
    }
    if user.is_oper() {
        cmd.numeric(make_numeric!(WhoisOperator, &user));
    }

    cmd.numeric(make_numeric!(EndOfWhois, &user.nick().to_string()));
    Ok(())
}
