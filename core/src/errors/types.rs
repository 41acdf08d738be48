//! Structured context carried by domain errors

use std::fmt;

/// One of the three dot-separated parts of a signed token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPart {
    Header,
    Payload,
    Signature,
}

impl fmt::Display for TokenPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPart::Header => write!(f, "header"),
            TokenPart::Payload => write!(f, "payload"),
            TokenPart::Signature => write!(f, "signature"),
        }
    }
}

/// Why a token string could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The token did not split into exactly three parts
    PartCount(usize),
    /// A part was not valid unpadded URL-safe base64
    Encoding(TokenPart),
    /// A part decoded but was not the expected JSON record
    Structure(TokenPart),
    /// The header named an algorithm or type this service does not issue
    UnsupportedHeader { alg: String, typ: String },
    /// The claims describe an empty or negative validity window
    InvalidWindow { iat: i64, exp: i64 },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::PartCount(count) => {
                write!(f, "expected 3 parts, found {}", count)
            }
            MalformedReason::Encoding(part) => write!(f, "{} is not valid base64", part),
            MalformedReason::Structure(part) => write!(f, "{} has an unexpected structure", part),
            MalformedReason::UnsupportedHeader { alg, typ } => {
                write!(f, "unsupported header alg={} typ={}", alg, typ)
            }
            MalformedReason::InvalidWindow { iat, exp } => {
                write!(f, "validity window iat={} exp={} is empty", iat, exp)
            }
        }
    }
}

/// Status class of a domain error as seen by the Transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller sent unusable input
    ClientInput,
    /// The presented credentials were rejected
    Authentication,
    /// An infrastructure collaborator failed
    Internal,
}
