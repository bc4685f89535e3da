use crate::prelude::*;
use super::fixtures::*;
use pretty_assertions::assert_eq;

#[test]
fn add_and_remove_user() {
    let mut builder = NetworkBuilder::new();
    let empty_net = builder.json_for_compare();

    let user_id = builder.add_user("aaa");
    assert_eq!(builder.net.user_by_nick(&nick("aaa")).unwrap().id(), user_id);

    builder.remove_user(user_id);
    assert_eq!(empty_net, builder.json_for_compare());
}

#[test]
fn nicknames_are_unique_without_case() {
    let mut builder = NetworkBuilder::new();
    builder.add_user("alice");

    let id = builder.next_user_id();
    let result = builder.net.register_user(make_user(id, "ALICE"), &NopUpdateReceiver);
    assert!(matches!(result, Err(NetworkError::NicknameInUse(_))));
    assert_eq!(builder.net.user_count(), 1);
}

#[test]
fn rename_rebinds_nickname() {
    let mut builder = NetworkBuilder::new();
    let alice = builder.add_user("alice");

    let updates = SavedUpdateReceiver::new();
    builder.net.rename_user(alice, nick("carol"), &updates).unwrap();

    assert!(builder.net.user_by_nick(&nick("alice")).is_err());
    assert_eq!(builder.net.user_by_nick(&nick("carol")).unwrap().id(), alice);
    assert!(!builder.net.nick_in_use(&nick("alice")));

    let saved = updates.take();
    assert_eq!(saved.len(), 1);
    match &saved[0] {
        NetworkStateChange::UserNickChange(change) => {
            assert_eq!(change.old_nick.to_string(), "alice");
            assert_eq!(change.new_nick.to_string(), "carol");
        }
        other => panic!("unexpected update {:?}", other),
    }
}

#[test]
fn rename_to_taken_nick_fails_cleanly() {
    let mut builder = NetworkBuilder::new();
    let alice = builder.add_user("alice");
    builder.add_user("bob");

    let updates = SavedUpdateReceiver::new();
    let result = builder.net.rename_user(alice, nick("Bob"), &updates);

    assert!(matches!(result, Err(NetworkError::NicknameInUse(_))));
    assert!(updates.take().is_empty());
    assert_eq!(builder.net.user(alice).unwrap().nick().to_string(), "alice");
    assert_eq!(builder.net.user_by_nick(&nick("alice")).unwrap().id(), alice);
}

#[test]
fn rename_to_own_nick_in_other_case() {
    let mut builder = NetworkBuilder::new();
    let alice = builder.add_user("alice");

    let updates = SavedUpdateReceiver::new();
    builder.net.rename_user(alice, nick("Alice"), &updates).unwrap();
    assert_eq!(builder.net.user(alice).unwrap().nick().to_string(), "Alice");
    assert_eq!(updates.take().len(), 1);

    // Exactly the same nick changes nothing
    builder.net.rename_user(alice, nick("Alice"), &updates).unwrap();
    assert!(updates.take().is_empty());
}

#[test]
fn remove_user_clears_memberships_and_empty_channels() {
    let mut builder = NetworkBuilder::new();
    let alice = builder.add_user("alice");
    let bob = builder.add_user("bob");
    let shared = builder.join(alice, "#shared");
    builder.join(bob, "#shared");
    builder.join(alice, "#lonely");

    let updates = SavedUpdateReceiver::new();
    builder.net.remove_user(alice, "bye".to_string(), &updates);

    assert!(builder.net.user(alice).is_err());
    assert!(builder.net.channel_by_name(&chan("#lonely")).is_err());

    let remaining: Vec<UserId> = builder.net.channel(shared).unwrap().members().map(|m| m.user_id()).collect();
    assert_eq!(remaining, vec![bob]);

    let saved = updates.take();
    assert_eq!(saved.len(), 1);
    match &saved[0] {
        NetworkStateChange::UserQuit(quit) => {
            assert_eq!(quit.message, "bye");
            assert_eq!(quit.memberships.len(), 2);
        }
        other => panic!("unexpected update {:?}", other),
    }

    // A second removal is a no-op
    builder.net.remove_user(alice, "bye".to_string(), &updates);
    assert!(updates.take().is_empty());
}

#[test]
fn away_and_oper_flags() {
    let mut builder = NetworkBuilder::new();
    let alice = builder.add_user("alice");

    builder.net.set_away(alice, Some(AwayReason::new_coerce("lunch"))).unwrap();
    assert_eq!(builder.net.user(alice).unwrap().away_reason().map(|r| r.to_string()), Some("lunch".to_string()));
    builder.net.set_away(alice, None).unwrap();
    assert!(builder.net.user(alice).unwrap().away_reason().is_none());

    assert_eq!(builder.net.oper_count(), 0);
    builder.make_oper(alice);
    assert!(builder.net.user(alice).unwrap().is_oper());
    assert_eq!(builder.net.oper_count(), 1);
}
