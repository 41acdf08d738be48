//! Wire codec for signed tokens
//!
//! A token is `base64url(header).base64url(payload).base64url(signature)`,
//! unpadded. This module only moves between that text form and the typed
//! records; it never checks signatures.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::token::{Header, Payload};
use crate::errors::{DomainError, MalformedReason, TokenPart};

/// A token split into its typed parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    pub header: Header,
    pub payload: Payload,
    /// Third part, still base64-encoded
    pub signature: String,
}

/// Encode header and payload into their base64 wire parts
pub fn encode(header: &Header, payload: &Payload) -> (String, String) {
    (encode_part(header), encode_part(payload))
}

/// Split a token and parse its header and payload
///
/// # Errors
///
/// `DomainError::MalformedToken` when the token does not have three parts,
/// a part is not base64, a part is not the expected JSON record, or the
/// header names anything other than HS512/JWT.
pub fn decode(token: &str) -> Result<DecodedToken, DomainError> {
    let parts: Vec<&str> = token.split('.').collect();
    let [header_part, payload_part, signature_part] = parts.as_slice() else {
        return Err(DomainError::malformed(MalformedReason::PartCount(parts.len())));
    };

    let header: Header = decode_part(header_part, TokenPart::Header)?;
    if !header.is_supported() {
        return Err(DomainError::malformed(MalformedReason::UnsupportedHeader {
            alg: header.alg,
            typ: header.typ,
        }));
    }

    let payload: Payload = decode_part(payload_part, TokenPart::Payload)?;

    Ok(DecodedToken {
        header,
        payload,
        signature: (*signature_part).to_string(),
    })
}

fn encode_part<T: Serialize>(value: &T) -> String {
    // Header and Payload hold only strings, integers and UUIDs
    let json = serde_json::to_vec(value).expect("token records always serialize to JSON");
    URL_SAFE_NO_PAD.encode(json)
}

fn decode_part<T: DeserializeOwned>(part: &str, which: TokenPart) -> Result<T, DomainError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(part)
        .map_err(|_| DomainError::malformed(MalformedReason::Encoding(which)))?;
    serde_json::from_slice(&bytes)
        .map_err(|_| DomainError::malformed(MalformedReason::Structure(which)))
}
