use super::*;

#[command_handler("MODE")]
fn handle_mode(cmd: &ClientCommand) -> CommandResult {
    let user_id = cmd.user_id()?;
    let mut args = cmd.args();
    let target = args.next_arg()?;

    if !ChannelName::is_channel_prefix(target) {
        // No user modes are settable, so there's nothing to report or change
        tracing::trace!(%target, "Ignoring user mode request");
        return Ok(());
    }

    let chname = ChannelName::from_str(target)?;

    let Some(mode_str) = args.next_optional() else {
        let net = cmd.server.network();
        let channel = net.channel_by_name(&chname)?;
        cmd.numeric(make_numeric!(ChannelModeIs, &channel, &channel.mode().to_chars()));
        return Ok(());
    };

    let changes = parse_channel_mode(cmd, user_id, &chname, mode_str, args)?;

    if !changes.added.is_empty() || !changes.removed.is_empty() {
        cmd.server.apply_change(|net, updates| {
            net.set_channel_mode(user_id, &chname, changes.added, changes.removed, updates)
        })?;
    }

    for change in changes.membership {
        cmd.server.apply_change(|net, updates| {
            net.set_membership_flags(user_id, &chname, change.target, change.added, change.removed, updates)
        })?;
    }

    Ok(())
}

#[derive(Clone, Copy)]
enum Direction {
    Add,
    Remove,
}

struct MembershipChange {
    target: UserId,
    added: MembershipFlagSet,
    removed: MembershipFlagSet,
}

struct ChannelModeChanges {
    added: ChannelModeSet,
    removed: ChannelModeSet,
    membership: Vec<MembershipChange>,
}

/// Check every change requested in `mode_str` against the current state.
/// Nothing is changed unless all of them are permitted.
fn parse_channel_mode(
    cmd: &ClientCommand,
    user_id: UserId,
    chname: &ChannelName,
    mode_str: &str,
    mut args: ArgumentListIter,
) -> Result<ChannelModeChanges, CommandError> {
    let net = cmd.server.network();
    let channel = net.channel_by_name(chname)?;
    let source = net.user(user_id)?;
    let policy = cmd.server.policy();

    let mut changes = ChannelModeChanges {
        added: ChannelModeSet::new(),
        removed: ChannelModeSet::new(),
        membership: Vec::new(),
    };
    let mut dir = Direction::Add;

    for c in mode_str.chars() {
        match c {
            '+' => dir = Direction::Add,
            '-' => dir = Direction::Remove,
            _ => {
                if let Some(flag) = ChannelModeFlag::from_char(c) {
                    policy.can_change_mode(&source, &channel, flag)?;
                    match dir {
                        Direction::Add => {
                            changes.added.set(flag);
                            changes.removed.unset(flag);
                        }
                        Direction::Remove => {
                            changes.removed.set(flag);
                            changes.added.unset(flag);
                        }
                    }
                } else if let Some(flag) = MembershipFlagFlag::from_char(c) {
                    let target_nick = args.next_arg()?;
                    let target = Nickname::from_str(target_nick)
                        .ok()
                        .and_then(|n| net.user_by_nick(&n).ok())
                        .ok_or_else(|| make_numeric!(NoSuchTarget, target_nick))?;

                    let mut change = MembershipChange {
                        target: target.id(),
                        added: MembershipFlagSet::new(),
                        removed: MembershipFlagSet::new(),
                    };
                    match dir {
                        Direction::Add => {
                            policy.can_grant_permission(&source, &channel, &target, flag)?;
                            change.added.set(flag);
                        }
                        Direction::Remove => {
                            policy.can_remove_permission(&source, &channel, &target, flag)?;
                            change.removed.set(flag);
                        }
                    }

                    if target.is_in_channel(channel.id()).is_none() {
                        return numeric_error!(UserNotInChannel, &target.nick(), chname);
                    }

                    changes.membership.push(change);
                } else {
                    return numeric_error!(UnknownMode, c, chname);
                }
            }
        }
    }

    Ok(changes)
}
