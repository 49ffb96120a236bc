use crate::error::StoreError;
use crate::session::Session;

pub const MAX_SESSIONS: usize = 5;

/// Insertion-ordered session list with a hard capacity. Full stores refuse
/// new sessions rather than evicting old ones.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Vec<Session>,
    capacity: usize,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SESSIONS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn add(&mut self, session: Session) -> Result<(), StoreError> {
        if self.is_full() {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.sessions.push(session);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.sessions.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.sessions.iter()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a SessionStore {
    type Item = &'a Session;
    type IntoIter = std::slice::Iter<'a, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
