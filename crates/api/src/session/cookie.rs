//! Signed session cookie: `folio_session=<id>.<hex hmac-sha256(id)>`.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use sha2::Sha256;

pub const SESSION_COOKIE: &str = "folio_session";

type HmacSha256 = Hmac<Sha256>;

fn mac_for(id: &str, secret: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(id.as_bytes());
    mac
}

/// Produce the cookie value for a session id.
pub fn sign(id: &str, secret: &str) -> String {
    let tag = mac_for(id, secret).finalize().into_bytes();
    format!("{id}.{}", hex::encode(tag))
}

/// Return the session id if `value` carries a valid signature for it.
///
/// The tag comparison is constant-time.
pub fn verify(value: &str, secret: &str) -> Option<String> {
    let (id, tag) = value.rsplit_once('.')?;
    let tag = hex::decode(tag).ok()?;
    mac_for(id, secret).verify_slice(&tag).ok()?;
    Some(id.to_string())
}

/// Find the raw session cookie value among the request's `Cookie` headers.
pub fn read_session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
}

/// `Set-Cookie` value that stores a signed session id.
pub fn set_cookie(signed: &str) -> String {
    format!("{SESSION_COOKIE}={signed}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
