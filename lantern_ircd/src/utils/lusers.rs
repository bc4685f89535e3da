use crate::messages::numeric;
use crate::messages::*;
use crate::*;

/// Send the 251-255 block describing the size of the network
pub fn send_lusers(
    server: &ClientServer,
    to: &(impl MessageSink + ?Sized),
    to_user: &(impl MessageTarget + ?Sized),
) {
    let (users, opers, channels) = {
        let net = server.network();
        (net.user_count(), net.oper_count(), net.channel_count())
    };
    let (unknown, clients) = {
        let connections = server.connections();
        (connections.unregistered_count(), connections.len())
    };

    to.send(numeric::LuserClient::new(users).format_for(server, to_user));
    to.send(numeric::LuserOp::new(opers).format_for(server, to_user));
    to.send(numeric::LuserUnknown::new(unknown).format_for(server, to_user));
    to.send(numeric::LuserChannels::new(channels).format_for(server, to_user));
    to.send(numeric::LuserMe::new(clients).format_for(server, to_user));
}
