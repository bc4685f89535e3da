use super::*;

use lantern_network::prelude::*;
use std::{
    collections::HashMap,
    sync::Arc,
};

/// Stores the client connections handled by a [`ClientServer`], and allows lookup by
/// either connection ID or user ID
#[derive(Default)]
pub(crate) struct ConnectionCollection
{
    client_connections: HashMap<ConnectionId, Arc<ClientConnection>>,
    user_to_connid: HashMap<UserId, ConnectionId>,
}

impl ConnectionCollection
{
    /// Contruct a [`ConnectionCollection`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new connection, with no associated user ID
    pub fn add(&mut self, id: ConnectionId, conn: Arc<ClientConnection>)
    {
        self.client_connections.insert(id, conn);
    }

    /// Associate a user ID with an existing connection ID
    pub fn add_user(&mut self, user: UserId, to: ConnectionId)
    {
        self.user_to_connid.insert(user, to);
    }

    /// Remove a connection, by connection ID, returning it if it was present
    pub fn remove(&mut self, id: ConnectionId) -> Option<Arc<ClientConnection>>
    {
        let conn = self.client_connections.remove(&id)?;
        tracing::trace!("Removing connection {:?}", id);
        if let Some(userid) = conn.user() {
            self.user_to_connid.remove(&userid);
        }
        Some(conn)
    }

    /// Look up a connection by ID
    pub fn get(&self, id: ConnectionId) -> Option<Arc<ClientConnection>>
    {
        self.client_connections.get(&id).cloned()
    }

    /// Look up a connection by user ID
    pub fn get_user(&self, id: UserId) -> Option<&ClientConnection>
    {
        let connid = self.user_to_connid.get(&id)?;
        self.client_connections.get(connid).map(AsRef::as_ref)
    }

    /// Get the number of managed connections
    pub fn len(&self) -> usize
    {
        self.client_connections.len()
    }

    /// The number of connections which have not completed registration
    pub fn unregistered_count(&self) -> usize
    {
        self.client_connections.len() - self.user_to_connid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Connection;
    use tokio::sync::mpsc::unbounded_channel;

    fn make_conn(ids: &ObjectIdGenerator) -> Arc<ClientConnection> {
        let (send, _recv) = unbounded_channel();
        let conn = Connection::new(ids.next_connection(), "127.0.0.1".parse().unwrap(), send);
        Arc::new(ClientConnection::new(conn))
    }

    #[test]
    fn lookup_by_user() {
        let ids = ObjectIdGenerator::new();
        let mut collection = ConnectionCollection::new();

        let first = make_conn(&ids);
        let second = make_conn(&ids);
        collection.add(first.id(), Arc::clone(&first));
        collection.add(second.id(), Arc::clone(&second));
        assert_eq!(collection.unregistered_count(), 2);

        let user = ids.next_user();
        first.set_user(user);
        collection.add_user(user, first.id());

        assert_eq!(collection.get_user(user).map(|c| c.id()), Some(first.id()));
        assert_eq!(collection.unregistered_count(), 1);
        assert_eq!(collection.len(), 2);

        assert!(collection.remove(first.id()).is_some());
        assert!(collection.get_user(user).is_none());
        assert!(collection.remove(first.id()).is_none());
        assert_eq!(collection.len(), 1);
    }
}
