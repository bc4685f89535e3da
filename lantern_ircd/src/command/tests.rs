//! Command-level tests: lines are fed into a real [`ClientServer`] over
//! in-memory connections, and the queued output is inspected.

use super::*;
use crate::connection::{Connection, ConnectionControl, ConnectionError, ConnectionEvent};
use pretty_assertions::assert_eq;

use std::net::{IpAddr, Ipv4Addr};

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

const OPER_PASSWORD: &str = "hunter2";

struct TestClient {
    id: ConnectionId,
    control: UnboundedReceiver<ConnectionControl>,
    closed: bool,
}

impl TestClient {
    /// Everything sent to this client since the last call, without line
    /// terminators
    fn lines(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        while let Ok(control) = self.control.try_recv() {
            match control {
                ConnectionControl::Send(text) => lines.push(text.trim_end_matches("\r\n").to_string()),
                ConnectionControl::Close => self.closed = true,
            }
        }
        lines
    }

    fn numerics(&mut self, code: &str) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|l| l.split(' ').nth(1) == Some(code))
            .collect()
    }
}

struct Harness {
    server: ClientServer,
}

impl Harness {
    fn new() -> Self {
        let config = ServerConfig {
            oper_password: Some(OPER_PASSWORD.to_string()),
            ..Default::default()
        };
        Self {
            server: ClientServer::new(config).unwrap(),
        }
    }

    fn connect(&self) -> TestClient {
        let id = self.server.ids().next_connection();
        let (sender, control) = unbounded_channel();
        let conn = Connection::new(id, IpAddr::V4(Ipv4Addr::LOCALHOST), sender);
        self.server.process_event(ConnectionEvent::new_connection(conn));

        TestClient { id, control, closed: false }
    }

    fn send(&self, client: &TestClient, line: &str) {
        self.server.process_event(ConnectionEvent::message(client.id, line.to_string()));
    }

    /// Connect and register a client, discarding the welcome burst
    fn register(&self, nick: &str) -> TestClient {
        let mut client = self.connect();
        self.send(&client, &format!("NICK {}", nick));
        self.send(&client, &format!("USER {} 0 * :{} test", nick, nick));
        let welcome = client.lines();
        assert!(welcome[0].contains(" 001 "), "{} failed to register: {:?}", nick, welcome);
        client
    }

    fn join(&self, client: &mut TestClient, channel: &str) {
        self.send(client, &format!("JOIN {}", channel));
    }
}

fn nuh(nick: &str) -> String {
    format!("{}!{}@127.0.0.1", nick, nick)
}

/// The sorted trailing parameter of a 353 line
fn names_in(line: &str) -> Vec<String> {
    let (_, names) = line.split_once(" :").unwrap();
    let mut names: Vec<String> = names.split(' ').map(str::to_string).collect();
    names.sort();
    names
}

#[test]
fn registration_sends_welcome_burst() {
    let harness = Harness::new();
    let mut client = harness.connect();

    harness.send(&client, "USER alice 0 * :Alice Example");
    assert!(client.lines().is_empty());

    harness.send(&client, "NICK alice");
    let lines = client.lines();

    assert_eq!(lines[0], ":lantern.local 001 alice :Welcome to the Internet Relay Network alice!alice@127.0.0.1");
    assert!(lines[1].starts_with(":lantern.local 002 alice :Your host is lantern.local, running version lantern-"));
    assert!(lines[2].starts_with(":lantern.local 003 alice :This server was created "));
    assert!(lines[3].starts_with(":lantern.local 004 alice lantern.local lantern-"));
    assert!(lines[3].ends_with(" o mtov"));
    assert_eq!(
        &lines[4..],
        &[
            ":lantern.local 251 alice :There are 1 users and 0 services on 1 servers",
            ":lantern.local 252 alice 0 :operator(s) online",
            ":lantern.local 253 alice 0 :unknown connection(s)",
            ":lantern.local 254 alice 0 :channels formed",
            ":lantern.local 255 alice :I have 1 clients and 1 servers",
            ":lantern.local 422 alice :MOTD File is missing",
        ]
    );
}

#[test]
fn registration_errors() {
    let harness = Harness::new();
    let _alice = harness.register("alice");
    let mut client = harness.connect();

    harness.send(&client, "NICK");
    harness.send(&client, "NICK 1abc");
    harness.send(&client, "NICK ALICE");
    harness.send(&client, "USER bob");
    assert_eq!(
        client.lines(),
        &[
            ":lantern.local 431 * :No nickname given",
            ":lantern.local 432 * 1abc :Erroneous nickname",
            ":lantern.local 433 * ALICE :Nickname is already in use",
            ":lantern.local 461 * USER :Not enough parameters",
        ]
    );

    harness.send(&client, "USER bob 0 * :Bob");
    harness.send(&client, "USER bob 0 * :Bob");
    assert_eq!(client.lines(), &[":lantern.local 462 * :Unauthorized command (already registered)"]);

    harness.send(&client, "NICK bob");
    assert!(client.lines()[0].contains(" 001 bob "));

    harness.send(&client, "USER bob 0 * :Bob");
    assert_eq!(client.lines(), &[":lantern.local 462 bob :Unauthorized command (already registered)"]);
}

#[test]
fn unregistered_and_unknown_commands() {
    let harness = Harness::new();
    let mut client = harness.connect();

    harness.send(&client, "JOIN #test");
    harness.send(&client, "FROB");
    assert_eq!(
        client.lines(),
        &[":lantern.local 451 * :You have not registered", ":lantern.local 451 * :You have not registered"]
    );

    let mut alice = harness.register("alice");
    harness.send(&alice, "frob a b");
    assert_eq!(alice.lines(), &[":lantern.local 421 alice FROB :Unknown command"]);

    // Lines with nothing to process are ignored
    harness.send(&alice, "");
    harness.send(&alice, ":alice!alice@127.0.0.1");
    assert!(alice.lines().is_empty());
}

#[test]
fn nick_change_relayed_once_per_observer() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");
    let mut carol = harness.register("carol");

    harness.join(&mut alice, "#a,#b");
    harness.join(&mut bob, "#a,#b");
    alice.lines();
    bob.lines();

    harness.send(&alice, "NICK alice2");
    let expected = format!(":{} NICK :alice2", nuh("alice"));
    assert_eq!(alice.lines(), &[expected.clone()]);
    assert_eq!(bob.lines(), &[expected]);
    assert!(carol.lines().is_empty());

    harness.send(&carol, "NICK BOB");
    assert_eq!(carol.lines(), &[":lantern.local 433 carol BOB :Nickname is already in use"]);

    // A change of case alone is still a change
    harness.send(&bob, "NICK Bob");
    assert_eq!(bob.lines(), &[format!(":{} NICK :Bob", nuh("bob"))]);
    harness.send(&bob, "NICK Bob");
    assert!(bob.lines().is_empty());
}

#[test]
fn join_sequence_and_duplicate_join() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");

    harness.join(&mut alice, "#test");
    assert_eq!(
        alice.lines(),
        &[
            format!(":{} JOIN #test", nuh("alice")),
            ":lantern.local 331 alice #test :No topic is set".to_string(),
            ":lantern.local 353 alice = #test :alice".to_string(),
            ":lantern.local 366 alice #test :End of NAMES list".to_string(),
        ]
    );

    harness.join(&mut alice, "#test");
    assert!(alice.lines().is_empty());

    harness.join(&mut bob, "#test");
    let lines = bob.lines();
    assert_eq!(lines[0], format!(":{} JOIN #test", nuh("bob")));
    assert_eq!(names_in(&lines[2]), &["alice", "bob"]);
    assert_eq!(alice.lines(), &[format!(":{} JOIN #test", nuh("bob"))]);

    harness.join(&mut bob, "foo");
    assert_eq!(bob.lines(), &[":lantern.local 403 bob foo :No such channel"]);
}

#[test]
fn join_zero_parts_everything() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");

    harness.join(&mut alice, "#a,#b");
    alice.lines();

    harness.join(&mut alice, "0");
    let mut lines = alice.lines();
    lines.sort();
    assert_eq!(lines, &[format!(":{} PART #a", nuh("alice")), format!(":{} PART #b", nuh("alice"))]);
    assert_eq!(harness.server.network().channel_count(), 0);
}

#[test]
fn part_stops_delivery() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");

    harness.join(&mut alice, "#test");
    harness.join(&mut bob, "#test");
    alice.lines();
    bob.lines();

    harness.send(&bob, "PART #test :bye now");
    let expected = format!(":{} PART #test :bye now", nuh("bob"));
    assert_eq!(bob.lines(), &[expected.clone()]);
    assert_eq!(alice.lines(), &[expected]);

    harness.send(&alice, "PRIVMSG #test :anyone there?");
    assert!(bob.lines().is_empty());
    assert!(alice.lines().is_empty());

    harness.send(&bob, "PART #test");
    assert_eq!(bob.lines(), &[":lantern.local 442 bob #test :You're not on that channel"]);

    harness.send(&alice, "PART #test");
    alice.lines();
    harness.send(&alice, "PART #test");
    assert_eq!(alice.lines(), &[":lantern.local 403 alice #test :No such channel"]);
}

#[test]
fn topic_flow() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");

    harness.send(&alice, "TOPIC #test");
    assert_eq!(alice.lines(), &[":lantern.local 442 alice #test :You're not on that channel"]);

    harness.join(&mut alice, "#test");
    alice.lines();

    harness.send(&alice, "TOPIC #test");
    assert_eq!(alice.lines(), &[":lantern.local 331 alice #test :No topic is set"]);

    harness.send(&bob, "TOPIC #test :drive-by");
    assert_eq!(bob.lines(), &[":lantern.local 442 bob #test :You're not on that channel"]);

    harness.send(&alice, "TOPIC #test :Welcome to the test channel");
    assert_eq!(alice.lines(), &[format!(":{} TOPIC #test :Welcome to the test channel", nuh("alice"))]);

    harness.send(&alice, "TOPIC #test");
    assert_eq!(alice.lines(), &[":lantern.local 332 alice #test :Welcome to the test channel"]);

    harness.join(&mut bob, "#test");
    assert_eq!(bob.lines()[1], ":lantern.local 332 bob #test :Welcome to the test channel");
}

#[test]
fn names_and_list_cover_each_channel_once() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");
    let mut carol = harness.register("carol");

    harness.join(&mut alice, "#a,#b,#c");
    harness.join(&mut bob, "#b");
    alice.lines();
    bob.lines();

    harness.send(&carol, "NAMES");
    let mut lines = carol.lines();
    assert_eq!(lines.pop().unwrap(), ":lantern.local 366 carol * :End of NAMES list");
    lines.sort();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], ":lantern.local 353 carol = #a :alice");
    assert_eq!(names_in(&lines[1]), &["alice", "bob"]);
    assert_eq!(lines[2], ":lantern.local 353 carol = #c :alice");
    assert_eq!(lines[3], ":lantern.local 353 carol = * :carol");

    harness.send(&carol, "NAMES #nothing");
    assert_eq!(carol.lines(), &[":lantern.local 366 carol #nothing :End of NAMES list"]);

    harness.send(&carol, "LIST");
    let mut lines = carol.lines();
    assert_eq!(lines.pop().unwrap(), ":lantern.local 323 carol :End of LIST");
    lines.sort();
    assert_eq!(
        lines,
        &[
            ":lantern.local 322 carol #a 1 :",
            ":lantern.local 322 carol #b 2 :",
            ":lantern.local 322 carol #c 1 :",
        ]
    );

    harness.send(&carol, "LIST #b,#nothing");
    assert_eq!(
        carol.lines(),
        &[":lantern.local 322 carol #b 2 :", ":lantern.local 323 carol :End of LIST"]
    );
}

#[test]
fn who_star_lists_users_outside_requesters_channels() {
    let harness = Harness::new();
    let mut user1 = harness.register("user1");
    let mut user2 = harness.register("user2");
    let mut user3 = harness.register("user3");
    let _user4 = harness.register("user4");
    let mut user5 = harness.register("user5");

    harness.join(&mut user1, "#test1");
    harness.join(&mut user2, "#test1,#test2");
    harness.join(&mut user3, "#test3");
    harness.join(&mut user5, "#test1");
    user1.lines();

    harness.send(&user1, "WHO *");
    let mut lines = user1.lines();
    assert_eq!(lines.pop().unwrap(), ":lantern.local 315 user1 * :End of WHO list");

    let mut nicks: Vec<&str> = lines.iter().map(|l| l.split(' ').nth(7).unwrap()).collect();
    nicks.sort();
    assert_eq!(nicks, &["user2", "user3", "user4"]);

    let user3_line = lines.iter().find(|l| l.contains(" user3 H ")).unwrap();
    assert_eq!(user3_line, ":lantern.local 352 user1 * user3 127.0.0.1 lantern.local user3 H :0 user3 test");
}

#[test]
fn who_channel_shows_status() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");

    harness.join(&mut alice, "#test");
    harness.join(&mut bob, "#test");
    harness.send(&alice, &format!("OPER alice {}", OPER_PASSWORD));
    harness.send(&alice, "MODE #test +o alice");
    harness.send(&bob, "AWAY :lunch");
    alice.lines();

    harness.send(&alice, "WHO #test");
    let mut lines = alice.lines();
    assert_eq!(lines.pop().unwrap(), ":lantern.local 315 alice #test :End of WHO list");
    lines.sort();
    assert_eq!(
        lines,
        &[
            ":lantern.local 352 alice #test alice 127.0.0.1 lantern.local alice H*@ :0 alice test",
            ":lantern.local 352 alice #test bob 127.0.0.1 lantern.local bob G :0 bob test",
        ]
    );
}

#[test]
fn quit_reaches_each_member_once() {
    let harness = Harness::new();
    let mut clients: Vec<TestClient> = (1..=5).map(|n| harness.register(&format!("user{}", n))).collect();

    for client in clients.iter_mut() {
        harness.join(client, "#test,#other");
    }
    for client in clients.iter_mut() {
        client.lines();
    }

    harness.send(&clients[0], "QUIT :bye");
    assert_eq!(clients[0].lines(), &["ERROR :Closing Link: 127.0.0.1 (bye)"]);
    assert!(clients[0].closed);

    for client in clients[1..].iter_mut() {
        assert_eq!(client.lines(), &[format!(":{} QUIT :bye", nuh("user1"))]);
    }

    harness.send(&clients[1], "NAMES #test");
    let lines = clients[1].lines();
    assert_eq!(names_in(&lines[0]), &["user2", "user3", "user4", "user5"]);

    // The connection task reports the close afterwards; that's already handled
    harness.server.process_event(ConnectionEvent::error(clients[0].id, ConnectionError::Closed));
    assert!(clients[1].lines().is_empty());
}

#[test]
fn dropped_connection_quits_user() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");

    harness.join(&mut alice, "#test");
    harness.join(&mut bob, "#test");
    alice.lines();

    harness.server.process_event(ConnectionEvent::error(bob.id, ConnectionError::Closed));
    assert_eq!(alice.lines(), &[format!(":{} QUIT :Connection closed", nuh("bob"))]);
    assert!(!harness.server.network().nick_in_use(&"bob".parse().unwrap()));

    harness.server.process_event(ConnectionEvent::error(bob.id, ConnectionError::Closed));
    assert!(alice.lines().is_empty());
}

#[test]
fn messages_to_channels_and_users() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");
    let mut carol = harness.register("carol");

    harness.join(&mut alice, "#test");
    harness.join(&mut bob, "#test");
    alice.lines();
    bob.lines();

    harness.send(&alice, "PRIVMSG #test :hello, channel");
    assert!(alice.lines().is_empty());
    assert_eq!(bob.lines(), &[format!(":{} PRIVMSG #test :hello, channel", nuh("alice"))]);
    assert!(carol.lines().is_empty());

    harness.send(&carol, "NOTICE alice :psst");
    assert_eq!(alice.lines(), &[format!(":{} NOTICE alice :psst", nuh("carol"))]);

    harness.send(&carol, "PRIVMSG #test :let me in");
    harness.send(&carol, "PRIVMSG #nowhere :hello?");
    harness.send(&carol, "PRIVMSG nobody :hello?");
    harness.send(&carol, "PRIVMSG");
    harness.send(&carol, "PRIVMSG alice");
    assert_eq!(
        carol.lines(),
        &[
            ":lantern.local 404 carol #test :Cannot send to channel",
            ":lantern.local 401 carol #nowhere :No such nick/channel",
            ":lantern.local 401 carol nobody :No such nick/channel",
            ":lantern.local 411 carol :No recipient given (PRIVMSG)",
            ":lantern.local 412 carol :No text to send",
        ]
    );

    harness.send(&carol, "NOTICE #test :let me in");
    harness.send(&carol, "NOTICE nobody :hello?");
    harness.send(&carol, "NOTICE");
    assert!(carol.lines().is_empty());
}

#[test]
fn away_status() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");

    harness.send(&bob, "AWAY :gone fishing");
    assert_eq!(bob.lines(), &[":lantern.local 306 bob :You have been marked as being away"]);

    harness.send(&alice, "PRIVMSG bob :are you there?");
    assert_eq!(alice.lines(), &[":lantern.local 301 alice bob :gone fishing"]);
    assert_eq!(bob.lines(), &[format!(":{} PRIVMSG bob :are you there?", nuh("alice"))]);

    harness.send(&alice, "NOTICE bob :no reply expected");
    assert!(alice.lines().is_empty());

    harness.send(&bob, "AWAY");
    assert_eq!(bob.lines(), &[":lantern.local 305 bob :You are no longer marked as being away"]);

    harness.send(&alice, "PRIVMSG bob :back yet?");
    assert!(alice.lines().is_empty());
}

#[test]
fn long_user_fields_truncated() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.connect();

    let realname = "r".repeat(100);
    harness.send(&bob, "NICK bob");
    harness.send(&bob, &format!("USER a_very_long_username 0 * :{}", realname));
    assert!(bob.lines()[0].contains(" 001 bob :Welcome to the Internet Relay Network bob!a_very_lon@127.0.0.1"));

    harness.send(&bob, &format!("AWAY :{}", "a".repeat(400)));
    bob.lines();

    harness.send(&alice, "WHOIS bob");
    let lines = alice.lines();
    assert_eq!(lines[0], format!(":lantern.local 311 alice bob a_very_lon 127.0.0.1 * :{}", "r".repeat(64)));
    assert_eq!(lines[2], format!(":lantern.local 301 alice bob :{}", "a".repeat(300)));
}

#[test]
fn oper_authentication() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");

    harness.send(&alice, "OPER alice");
    harness.send(&alice, "OPER alice wrong");
    assert_eq!(
        alice.lines(),
        &[
            ":lantern.local 461 alice OPER :Not enough parameters",
            ":lantern.local 464 alice :Password incorrect",
        ]
    );

    harness.send(&alice, &format!("OPER alice {}", OPER_PASSWORD));
    assert_eq!(alice.lines(), &[":lantern.local 381 alice :You are now an IRC operator"]);
    assert_eq!(harness.server.network().oper_count(), 1);
}

#[test]
fn moderated_channel() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");

    harness.join(&mut alice, "#test");
    harness.join(&mut bob, "#test");
    harness.send(&alice, &format!("OPER alice {}", OPER_PASSWORD));
    alice.lines();
    bob.lines();

    harness.send(&bob, "MODE #test +m");
    assert_eq!(bob.lines(), &[":lantern.local 482 bob #test :You're not channel operator"]);

    harness.send(&alice, "MODE #test +m");
    let expected = format!(":{} MODE #test +m", nuh("alice"));
    assert_eq!(alice.lines(), &[expected.clone()]);
    assert_eq!(bob.lines(), &[expected]);

    harness.send(&bob, "PRIVMSG #test :hello?");
    assert_eq!(bob.lines(), &[":lantern.local 404 bob #test :Cannot send to channel"]);
    assert!(alice.lines().is_empty());

    harness.send(&alice, "MODE #test +v bob");
    let expected = format!(":{} MODE #test +v bob", nuh("alice"));
    assert_eq!(alice.lines(), &[expected.clone()]);
    assert_eq!(bob.lines(), &[expected]);

    harness.send(&bob, "PRIVMSG #test :hello!");
    assert_eq!(alice.lines(), &[format!(":{} PRIVMSG #test :hello!", nuh("bob"))]);

    // Setting a flag that's already set changes nothing, so nothing is relayed
    harness.send(&alice, "MODE #test +m");
    assert!(alice.lines().is_empty());

    harness.send(&bob, "MODE #test");
    assert_eq!(bob.lines(), &[":lantern.local 324 bob #test +m"]);
}

#[test]
fn topic_lock() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");

    harness.join(&mut alice, "#test");
    harness.join(&mut bob, "#test");
    harness.send(&alice, &format!("OPER alice {}", OPER_PASSWORD));
    harness.send(&alice, "MODE #test +o alice");
    harness.send(&alice, "MODE #test +t");
    alice.lines();
    bob.lines();

    harness.send(&bob, "TOPIC #test :mine now");
    assert_eq!(bob.lines(), &[":lantern.local 482 bob #test :You're not channel operator"]);

    harness.send(&alice, "TOPIC #test :still mine");
    assert_eq!(bob.lines(), &[format!(":{} TOPIC #test :still mine", nuh("alice"))]);

    harness.send(&alice, "MODE #test -t");
    alice.lines();
    bob.lines();
    harness.send(&bob, "TOPIC #test :mine now");
    assert_eq!(alice.lines(), &[format!(":{} TOPIC #test :mine now", nuh("bob"))]);
}

#[test]
fn channel_mode_errors() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");
    let _carol = harness.register("carol");

    harness.join(&mut alice, "#test");
    harness.send(&alice, &format!("OPER alice {}", OPER_PASSWORD));
    alice.lines();

    harness.send(&alice, "MODE #test +x");
    harness.send(&alice, "MODE #test +o carol");
    harness.send(&alice, "MODE #test +o nobody");
    harness.send(&alice, "MODE #test +o");
    harness.send(&alice, "MODE #nowhere +m");
    assert_eq!(
        alice.lines(),
        &[
            ":lantern.local 472 alice x :is unknown mode char to me for #test",
            ":lantern.local 441 alice carol #test :They aren't on that channel",
            ":lantern.local 401 alice nobody :No such nick/channel",
            ":lantern.local 461 alice MODE :Not enough parameters",
            ":lantern.local 403 alice #nowhere :No such channel",
        ]
    );

    harness.send(&bob, "MODE #test +m");
    assert_eq!(bob.lines(), &[":lantern.local 442 bob #test :You're not on that channel"]);

    // User modes are accepted and ignored
    harness.send(&bob, "MODE bob +i");
    harness.send(&bob, "MODE bob");
    assert!(bob.lines().is_empty());
}

#[test]
fn opers_manage_channels_they_are_not_in() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");

    harness.join(&mut bob, "#test");
    harness.send(&alice, &format!("OPER alice {}", OPER_PASSWORD));
    alice.lines();
    bob.lines();

    harness.send(&alice, "MODE #test +o bob");
    assert!(alice.lines().is_empty());
    assert_eq!(bob.lines(), &[format!(":{} MODE #test +o bob", nuh("alice"))]);

    harness.send(&bob, "MODE #test -o bob");
    assert_eq!(bob.lines(), &[format!(":{} MODE #test -o bob", nuh("bob"))]);
}

#[test]
fn whois_reply() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let mut bob = harness.register("bob");

    harness.join(&mut bob, "#test");
    harness.send(&bob, "AWAY :busy");
    harness.send(&bob, &format!("OPER bob {}", OPER_PASSWORD));
    harness.send(&bob, "MODE #test +v bob");
    alice.lines();

    harness.send(&alice, "WHOIS bob");
    let lines = alice.lines();
    assert_eq!(lines[0], ":lantern.local 311 alice bob bob 127.0.0.1 * :bob test");
    assert_eq!(lines[1], ":lantern.local 319 alice bob :+#test");
    assert!(lines[2].starts_with(":lantern.local 312 alice bob lantern.local :"));
    assert_eq!(
        &lines[3..],
        &[
            ":lantern.local 301 alice bob :busy",
            ":lantern.local 313 alice bob :is an IRC operator",
            ":lantern.local 318 alice bob :End of WHOIS list",
        ]
    );

    harness.send(&alice, "WHOIS nobody");
    assert_eq!(
        alice.lines(),
        &[
            ":lantern.local 401 alice nobody :No such nick/channel",
            ":lantern.local 318 alice nobody :End of WHOIS list",
        ]
    );
}

#[test]
fn ping_pong() {
    let harness = Harness::new();
    let mut client = harness.connect();

    harness.send(&client, "PING :abc123");
    harness.send(&client, "PING");
    harness.send(&client, "PONG :abc123");
    assert_eq!(
        client.lines(),
        &[":lantern.local PONG lantern.local :abc123", ":lantern.local 409 * :No origin specified"]
    );
}

#[test]
fn lusers_counts() {
    let harness = Harness::new();
    let mut alice = harness.register("alice");
    let _bob = harness.register("bob");
    let _unregistered = harness.connect();

    harness.join(&mut alice, "#test");
    harness.send(&alice, &format!("OPER alice {}", OPER_PASSWORD));
    alice.lines();

    harness.send(&alice, "LUSERS");
    assert_eq!(
        alice.lines(),
        &[
            ":lantern.local 251 alice :There are 2 users and 0 services on 1 servers",
            ":lantern.local 252 alice 1 :operator(s) online",
            ":lantern.local 253 alice 1 :unknown connection(s)",
            ":lantern.local 254 alice 1 :channels formed",
            ":lantern.local 255 alice :I have 3 clients and 1 servers",
        ]
    );

    harness.send(&alice, "MOTD");
    assert_eq!(alice.numerics("422"), &[":lantern.local 422 alice :MOTD File is missing"]);
}

#[test]
fn motd_lines() {
    let path = std::env::temp_dir().join(format!("lantern-motd-{}.txt", std::process::id()));
    std::fs::write(&path, "line one\nline two\n").unwrap();

    let config = ServerConfig {
        oper_password: Some(OPER_PASSWORD.to_string()),
        motd: Some(path.clone()),
        ..Default::default()
    };
    let harness = Harness {
        server: ClientServer::new(config).unwrap(),
    };
    std::fs::remove_file(&path).unwrap();

    let mut alice = harness.register("alice");
    harness.send(&alice, "MOTD");
    assert_eq!(
        alice.lines(),
        &[
            ":lantern.local 375 alice :- lantern.local Message of the day - ",
            ":lantern.local 372 alice :- line one",
            ":lantern.local 372 alice :- line two",
            ":lantern.local 376 alice :End of MOTD command",
        ]
    );
}
