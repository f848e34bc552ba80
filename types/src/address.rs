//! Owner addresses with the `chtl_` prefix.
//!
//! An address embeds the owner's Ed25519 public key, so the key that must
//! sign a spend of an output is recoverable from the output address alone.
//!
//! Text format: `chtl_` + base32(public_key, 52 chars) + base32(checksum, 8 chars)
//!
//! Checksum: first 5 bytes of Blake2b-256(public_key).
//! Base32 alphabet: `13456789abcdefghijkmnopqrstuwxyz` (avoids ambiguous chars).
//! Total length: 5 (prefix) + 52 + 8 = 65 characters.
//!
//! The text form is what configuration files and serde carry. Logs and error
//! messages render the embedded key as lowercase hex via [`Address::to_hex`].

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::keys::PublicKey;

type Blake2b256 = Blake2b<U32>;

/// Base32 alphabet (32 chars, avoids visually ambiguous 0/O, 2/Z, l/I, v).
const BASE32_ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const BASE32_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let alpha = BASE32_ALPHABET;
    let mut i = 0;
    while i < 32 {
        table[alpha[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encoded length after the prefix: 52 key chars + 8 checksum chars.
const ENCODED_LEN: usize = 60;
/// Number of base32 characters for the public key (256 bits → 52).
const PUBKEY_CHARS: usize = 52;

/// An owner address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 32]);

impl Address {
    pub const PREFIX: &'static str = "chtl_";
    pub const LEN: usize = 32;

    /// Build an address from raw embedded key bytes.
    ///
    /// No curve-point validation happens here; a malformed key surfaces when
    /// a signature is checked against it.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The address that names the holder of `public_key`.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self(public_key.0)
    }

    /// The public key this address is bound to.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex of the embedded key, for logs and error messages.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    fn checksum(&self) -> [u8; 5] {
        let digest = Blake2b256::digest(self.0);
        let mut out = [0u8; 5];
        out.copy_from_slice(&digest[..5]);
        out
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            Self::PREFIX,
            encode_base32(&self.0),
            encode_base32(&self.checksum())
        )
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidAddress(s.to_string());

        let encoded = s.strip_prefix(Self::PREFIX).ok_or_else(invalid)?;
        if encoded.len() != ENCODED_LEN || !encoded.is_ascii() {
            return Err(invalid());
        }

        let key: [u8; 32] = decode_base32_fixed(&encoded[..PUBKEY_CHARS]).ok_or_else(invalid)?;
        let checksum: [u8; 5] = decode_base32_fixed(&encoded[PUBKEY_CHARS..]).ok_or_else(invalid)?;

        let address = Self(key);
        if address.checksum() != checksum {
            return Err(invalid());
        }
        Ok(address)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Encode a byte slice as base32 using the address alphabet.
fn encode_base32(bytes: &[u8]) -> String {
    let total_bits = bytes.len() * 8;
    let mut result = String::with_capacity(total_bits.div_ceil(5));

    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u64;
        bits_in_buffer += 8;
        while bits_in_buffer >= 5 {
            bits_in_buffer -= 5;
            let idx = ((buffer >> bits_in_buffer) & 0x1F) as usize;
            result.push(BASE32_ALPHABET[idx] as char);
        }
    }
    // Remaining bits, zero-padded on the right.
    if bits_in_buffer > 0 {
        let idx = ((buffer << (5 - bits_in_buffer)) & 0x1F) as usize;
        result.push(BASE32_ALPHABET[idx] as char);
    }

    result
}

/// Decode base32 into a fixed-size array. `None` on invalid characters or
/// too few characters.
fn decode_base32_fixed<const N: usize>(s: &str) -> Option<[u8; N]> {
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;
    let mut result = [0u8; N];
    let mut pos = 0;

    for c in s.bytes() {
        if c >= 128 {
            return None;
        }
        let val = BASE32_DECODE[c as usize];
        if val == 0xFF {
            return None;
        }
        buffer = (buffer << 5) | val as u64;
        bits_in_buffer += 5;
        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            if pos < N {
                result[pos] = (buffer >> bits_in_buffer) as u8;
                pos += 1;
            }
        }
    }

    if pos < N {
        return None;
    }
    Some(result)
}
