//! Cryptographic primitives for the Attesta registry.
//!
//! Wraps Blake3 hashing and Ed25519 key handling with strong types. The
//! registry core never signs or verifies anything during an operation:
//! identities enter every call as opaque 32-byte values and are only ever
//! compared or hashed.

use ed25519_dalek::SigningKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque 32-byte caller identity.
///
/// In production this is the byte form of an Ed25519 verifying key, but the
/// core treats it as an uninterpreted byte string. The all-zero identity is
/// reserved as "no identity" and rejected wherever an identity is required.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(pub [u8; 32]);

impl Identity {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The reserved "no identity" value.
    pub const ZERO: Self = Self([0u8; 32]);

    /// True if this is the reserved zero identity.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Identity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Identity {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A 32-byte digest identifying a record's subject.
///
/// Derived from the subject's [`Identity`] by the active
/// [`RegistryLogic`](crate::logic::RegistryLogic). The registry stores and
/// compares these digests but never recovers the identity behind one;
/// ownership of a record is proven by presenting an identity that hashes to
/// the stored value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectHash(pub [u8; 32]);

/// A 32-byte digest of the off-chain transcript file.
///
/// The file itself never enters the registry; verification is an exact
/// comparison of digests.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(pub [u8; 32]);

macro_rules! digest_impls {
    ($name:ident, $label:expr) => {
        impl $name {
            /// Compute the Blake3 digest of the given data.
            pub fn hash(data: &[u8]) -> Self {
                Self(*blake3::hash(data).as_bytes())
            }

            /// Create from raw bytes.
            pub const fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Get the raw bytes.
            pub const fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }

            /// Convert to hex string.
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }

            /// The zero digest (sentinel, rejected as input).
            pub const ZERO: Self = Self([0u8; 32]);

            /// True if this is the zero sentinel.
            pub fn is_zero(&self) -> bool {
                *self == Self::ZERO
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $label, &self.to_hex()[..16])
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }
        }
    };
}

digest_impls!(SubjectHash, "SubjectHash");
digest_impls!(ContentHash, "ContentHash");

/// A keypair used to provision identities.
///
/// This wraps ed25519-dalek's SigningKey. The registry only consumes the
/// public half as an [`Identity`]; the keypair exists so callers and tests
/// can mint identities the same way the surrounding wallet tooling does.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let signing_key = SigningKey::generate(&mut rng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// The identity corresponding to this keypair.
    pub fn identity(&self) -> Identity {
        Identity(self.signing_key.verifying_key().to_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({:?})", self.identity())
    }
}
