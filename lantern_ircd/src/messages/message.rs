use lantern_network::prelude::*;

use super::*;
use lantern_macros::define_messages;

define_messages! {
    Nick        => { (source, newnick: &Nickname)               => ":{source} NICK :{newnick}" },
    Join        => { (source, chan: &ChannelName)               => ":{source} JOIN {chan}" },
    Part        => { (source, chan: &ChannelName)               => ":{source} PART {chan}" },
    PartMessage => { (source, chan: &ChannelName, msg: &str)    => ":{source} PART {chan} :{msg}" },
    Quit        => { (source, message: &str)                    => ":{source} QUIT :{message}" },
    Topic       => { (source, chan: &ChannelName, text: &str)   => ":{source} TOPIC {chan} :{text}" },

    Mode        => { (source, target, changes: &str)            => ":{source} MODE {target} {changes}" },

    Message     => { (source, target, message_type: state::MessageType, message: &str)
                                                                => ":{source} {message_type} {target} :{message}" },

    Pong        => { (source, cookie: &str)                     => ":{source} PONG {source} :{cookie}" },

    Error       => { (text: &str)   => "ERROR :{text}" },
}
