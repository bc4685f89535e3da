use super::*;
use lantern_macros::define_messages;
use lantern_network::network::wrapper::{Channel, User};

define_messages! {
    001(Welcome)    => { (nuh: &str)                            => ":Welcome to the Internet Relay Network {nuh}" },
    002(YourHostIs) => { (server_name: &ServerName, version: &str)      => ":Your host is {server_name}, running version {version}" },
    003(Created)    => { (when: &chrono::DateTime<chrono::offset::Utc>) => ":This server was created {when}" },
    004(MyInfo)     => { (server_name: &ServerName, version: &str, user_modes: &str, chan_modes: &str)
                                                => "{server_name} {version} {user_modes} {chan_modes}" },

    251(LuserClient)            => { (users: usize)             => ":There are {users} users and 0 services on 1 servers" },
    252(LuserOp)                => { (opers: usize)             => "{opers} :operator(s) online" },
    253(LuserUnknown)           => { (unknown: usize)           => "{unknown} :unknown connection(s)" },
    254(LuserChannels)          => { (channels: usize)          => "{channels} :channels formed" },
    255(LuserMe)                => { (clients: usize)           => ":I have {clients} clients and 1 servers" },

    301(Away)                   => { (nick: &User.nick(), reason: &AwayReason)  => "{nick} :{reason}" },
    305(Unaway)                 => { ()                         => ":You are no longer marked as being away" },
    306(NowAway)                => { ()                         => ":You have been marked as being away" },
    311(WhoisUser)              => { (nick: &User.nick(), user=nick.user(), host=nick.visible_host(), realname=nick.realname())
                                                                => "{nick} {user} {host} * :{realname}" },
    312(WhoisServer)            => { (nick: &User.nick(), server: &ServerName, info: &str)
                                                                => "{nick} {server} :{info}"},
    313(WhoisOperator)          => { (nick: &User.nick())       => "{nick} :is an IRC operator" },
    315(EndOfWho)               => { (mask: &str)               => "{mask} :End of WHO list" },
    318(EndOfWhois)             => { (nick: &str)               => "{nick} :End of WHOIS list" },
    319(WhoisChannels)          => { (nick: &User.nick(), chanlist: &str)
                                                                => "{nick} :{chanlist}" },

    322(List)                   => { (chan: &Channel.name(), count: usize, topic: &str)
                                                                => "{chan} {count} :{topic}" },
    323(ListEnd)                => { ()                         => ":End of LIST" },
    324(ChannelModeIs)          => { (chan: &Channel.name(), modes: &str)
                                                                => "{chan} +{modes}" },

    331(NoTopic)                => { (chan: &Channel.name())    => "{chan} :No topic is set"},
    332(TopicIs)                => { (chan: &Channel.name(), text: &str)
                                                                => "{chan} :{text}" },

    352(WhoReply)               => { (chname: &str, nick: &User.nick(), user=nick.user(), host=nick.visible_host(),
                                      server: &ServerName, status: &str, realname=nick.realname())
                                                                => "{chname} {user} {host} {server} {nick} {status} :0 {realname}" },
    353(NamesReply)             => { (chan: &str, content: &str)
                                                                => "= {chan} :{content}" },
    366(EndOfNames)             => { (chan: &str)               => "{chan} :End of NAMES list" },

    372(Motd)                   => { (line: &str)               => ":- {line}" },
    375(MotdStart)              => { (server: &ServerName)      => ":- {server} Message of the day - " },
    376(EndOfMotd)              => { ()                         => ":End of MOTD command" },
    381(YoureOper)              => { ()                         => ":You are now an IRC operator" },

    401(NoSuchTarget)           => { (unknown: &str)            => "{unknown} :No such nick/channel" },
    403(NoSuchChannel)          => { (chan: &str)               => "{chan} :No such channel" },
    404(CannotSendToChannel)    => { (chan: &ChannelName)       => "{chan} :Cannot send to channel" },
    409(NoOrigin)               => { ()                         => ":No origin specified" },
    411(NoRecipient)            => { (command: &str)            => ":No recipient given ({command})" },
    412(NoTextToSend)           => { ()                         => ":No text to send" },
    421(UnknownCommand)         => { (command: &str)            => "{command} :Unknown command" },
    422(NoMotd)                 => { ()                         => ":MOTD File is missing" },
    431(NoNicknameGiven)        => { ()                         => ":No nickname given" },
    432(ErroneousNickname)      => { (nick: &str)               => "{nick} :Erroneous nickname" },
    433(NicknameInUse)          => { (nick: &Nickname)          => "{nick} :Nickname is already in use" },
    441(UserNotInChannel)       => { (nick: &Nickname, chan: &ChannelName)
                                                                => "{nick} {chan} :They aren't on that channel" },
    442(NotOnChannel)           => { (chan: &ChannelName)       => "{chan} :You're not on that channel" },
    451(NotRegistered)          => { ()                         => ":You have not registered" },
    461(NotEnoughParameters)    => { (command: &str)            => "{command} :Not enough parameters" },
    462(AlreadyRegistered)      => { ()                         => ":Unauthorized command (already registered)" },
    464(PasswordMismatch)       => { ()                         => ":Password incorrect" },
    472(UnknownMode)            => { (c: char, chan: &ChannelName)
                                                                => "{c} :is unknown mode char to me for {chan}" },
    482(ChanOpPrivsNeeded)      => { (chan: &ChannelName)       => "{chan} :You're not channel operator" },
}
