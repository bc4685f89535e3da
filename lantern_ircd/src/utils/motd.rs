use crate::messages::numeric;
use crate::messages::*;
use crate::*;

pub fn send_motd(
    server: &ClientServer,
    to: &(impl MessageSink + ?Sized),
    to_user: &(impl MessageTarget + ?Sized),
) {
    match server.motd() {
        None => to.send(numeric::NoMotd::new().format_for(server, to_user)),
        Some(motd) => {
            to.send(numeric::MotdStart::new(server.name()).format_for(server, to_user));
            for line in motd {
                to.send(numeric::Motd::new(line).format_for(server, to_user))
            }

            to.send(numeric::EndOfMotd::new().format_for(server, to_user));
        }
    }
}
