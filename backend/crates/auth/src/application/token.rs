//! Session Token Signing
//!
//! The wire token is `"{session_id}.{signature}"` where the signature is
//! the URL-safe base64 HMAC-SHA256 of the session id string. The token is
//! opaque to clients; only holders of the server secret can mint or
//! verify one, so guessing a session id is not enough to hijack it.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Mint a signed session token for a session id
pub fn mint(secret: &[u8; 32], session_id: Uuid) -> String {
    let session_id = session_id.to_string();

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Parse and verify a session token, returning the session id
///
/// Every failure mode maps to the same `SessionInvalid`; the caller
/// cannot tell a malformed token from a bad signature.
pub fn parse(secret: &[u8; 32], token: &str) -> AuthResult<Uuid> {
    let (session_id_str, signature_b64) = token
        .split_once('.')
        .filter(|(_, sig)| !sig.contains('.'))
        .ok_or(AuthError::SessionInvalid)?;

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::SessionInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::SessionInvalid)?;

    session_id_str.parse().map_err(|_| AuthError::SessionInvalid)
}
