//! Random auth token generation.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use rand::RngCore;

/// Generates a random URL-safe token of exactly `length` characters.
///
/// `length` random bytes are base64-encoded with the URL alphabet and the
/// encoding is cut to `length` characters.
#[must_use]
pub fn generate(length: usize) -> String {
    let mut bytes = vec![0_u8; length];
    rand::rng().fill_bytes(&mut bytes);
    let mut token = URL_SAFE.encode(&bytes);
    token.truncate(length);
    token
}
