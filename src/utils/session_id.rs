//! Random identifiers for feed sessions.

use rand::RngCore;

const SESSION_ID_BYTES: usize = 16;

/// Generates a random 128-bit session id as 32 lowercase hex characters.
pub fn generate_session_id() -> String {
    let mut buffer = [0u8; SESSION_ID_BYTES];
    rand::rng().fill_bytes(&mut buffer);
    hex::encode(buffer)
}

/// Returns true if `id` has the shape produced by [`generate_session_id`].
pub fn is_session_id(id: &str) -> bool {
    id.len() == SESSION_ID_BYTES * 2 && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
