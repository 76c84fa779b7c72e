//! API token generation and hashing.
//!
//! Shared by [`crate::application::services::AuthService`] and the admin CLI
//! so issuance and verification can never disagree on the hash scheme.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_LENGTH: usize = 48;

/// Generates a cryptographically random API token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
/// - Entropy: ~286 bits
pub fn generate_token() -> String {
    use rand::Rng;

    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_CHARSET.len());
            TOKEN_CHARSET[idx] as char
        })
        .collect()
}

/// Hashes a raw token with HMAC-SHA256 under the server signing secret.
///
/// Returns a 64-character lowercase hex-encoded MAC. Only this value is
/// stored; an attacker with read access to the database cannot verify or
/// forge tokens without the secret.
pub fn hash_token(token: &str, signing_secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
