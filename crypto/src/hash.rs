//! Blake2b hashing for records.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use chattel_types::Id;

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash byte slices in sequence, as if they were concatenated.
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash the encoded fields of a record, in order, into its `Id`.
pub fn hash_to_id(fields: &[&[u8]]) -> Id {
    Id::new(blake2b_256_multi(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake2b_deterministic() {
        let h1 = blake2b_256(b"hello chattel");
        let h2 = blake2b_256(b"hello chattel");
        assert_eq!(h1, h2);
    }

    #[test]
    fn blake2b_different_inputs() {
        assert_ne!(blake2b_256(b"hello"), blake2b_256(b"world"));
    }

    #[test]
    fn blake2b_empty() {
        assert_ne!(blake2b_256(b""), [0u8; 32]);
    }

    #[test]
    fn blake2b_multi_equivalent() {
        let single = blake2b_256(b"helloworld");
        let multi = blake2b_256_multi(&[b"hello", b"world"]);
        assert_eq!(single, multi);
    }

    #[test]
    fn hash_to_id_is_never_the_sentinel_for_real_input() {
        let zeros = [0u8; 136];
        let id = hash_to_id(&[&zeros[..8], &zeros[8..]]);
        assert!(!id.is_empty());
        assert_eq!(id.as_bytes(), &blake2b_256(&zeros));
    }
}
