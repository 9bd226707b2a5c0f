use std::sync::{Mutex, PoisonError};

use async_graphql::ID;

/// Hands out identifiers shared by every entity kind, rendered as decimal strings.
#[derive(Debug)]
pub struct IdGenerator {
    next: Mutex<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            next: Mutex::new(1),
        }
    }

    /// Returns the current counter value and advances it. Never reuses a value.
    pub fn next(&self) -> ID {
        let id = {
            // the guarded value is a plain integer, a poisoned lock still holds a valid counter
            let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
            let id = *next;
            *next += 1;
            id
        };

        ID(id.to_string())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
