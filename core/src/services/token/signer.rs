//! HMAC-SHA-512 signing and verification

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Signature over `encoded_header + "." + encoded_payload` keyed with `secret`
pub fn sign(encoded_header: &str, encoded_payload: &str, secret: &str) -> String {
    let mut mac =
        HmacSha512::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(encoded_header.as_bytes());
    mac.update(b".");
    mac.update(encoded_payload.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

/// Recompute the signature of `token` with `secret` and compare it to the third part
///
/// A token without exactly three parts never verifies.
pub fn verify(token: &str, secret: &str) -> bool {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None) => {
            constant_time_compare(&sign(header, payload, secret), signature)
        }
        _ => false,
    }
}

/// Compare two strings without an early exit on the first differing byte
///
/// Lengths are not secret; a length mismatch rejects immediately.
pub fn constant_time_compare(expected: &str, presented: &str) -> bool {
    if expected.len() != presented.len() {
        return false;
    }
    constant_time_eq::constant_time_eq(expected.as_bytes(), presented.as_bytes())
}
