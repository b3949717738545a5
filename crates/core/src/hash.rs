//! Content fingerprinting for function-valued fields
//!
//! Function fields cannot be compared by identity: two independently
//! constructed closures with identical behavior are never the same object.
//! Instead, a function field carries its source text and equality compares a
//! deterministic fingerprint of that text. This approximates behavioral
//! equality cheaply; two functions with different source text but identical
//! behavior compare unequal, which is an accepted trade-off rather than a
//! defect.
//!
//! The fingerprint is not a security boundary. Collisions are tolerated
//! because the hash is only an equality heuristic.

use xxhash_rust::xxh3::xxh3_64;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Fingerprint a string deterministically.
///
/// Carriage returns are stripped before hashing so that the same source text
/// fingerprints identically regardless of line-ending convention. The 64-bit
/// xxh3 digest is rendered in base-36.
pub fn fingerprint(input: &str) -> String {
    let normalized: String = input.chars().filter(|c| *c != '\r').collect();
    to_base36(xxh3_64(normalized.as_bytes()))
}

/// Render a u64 in lowercase base-36.
fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::with_capacity(13);
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    // Digits come from a fixed ASCII table
    String::from_utf8(digits).unwrap()
}
