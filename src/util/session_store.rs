//! Durable session persistence over browser `localStorage`.
//!
//! DESIGN
//! ======
//! The token and user are stored as ONE serialized record under a single
//! key, so a reload can never observe a token without its user (or vice
//! versa). `localStorage` is shared across tabs of the same origin with no
//! locking; login/logout overwrites are idempotent, so last-write-wins is
//! acceptable.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Storage key for the serialized session record.
pub const SESSION_KEY: &str = "atrium_session";

/// The single durable-storage record: a token and its user, together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque credential issued by the auth API.
    pub token: String,
    /// The account the token belongs to.
    pub user: User,
}

/// Serialize a record for storage. `None` only on serializer failure.
pub fn encode_record(record: &SessionRecord) -> Option<String> {
    serde_json::to_string(record).ok()
}

/// Parse a stored record. `None` for missing or unparsable input, which
/// callers treat as an unauthenticated session.
pub fn decode_record(raw: &str) -> Option<SessionRecord> {
    serde_json::from_str(raw).ok()
}

/// Load the persisted session record, if any.
pub fn load() -> Option<SessionRecord> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
        decode_record(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session record, replacing any previous one.
pub fn save(record: &SessionRecord) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Some(raw) = encode_record(record) else {
            return;
        };
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
    }
}

/// Remove the persisted session record. Succeeds when already empty.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
