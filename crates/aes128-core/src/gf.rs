//! Multiplication in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.

use crate::tables::{ANTILOG, LOG};

/// Multiplies two field elements through the log/antilog tables.
///
/// Zero absorbs and one is the identity; both are answered before touching
/// the tables since `LOG[0]` has no meaning.
#[inline]
pub fn gmul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    if a == 1 {
        return b;
    }
    if b == 1 {
        return a;
    }

    let mut exponent = LOG[a as usize] as usize + LOG[b as usize] as usize;
    if exponent > 255 {
        exponent -= 255;
    }
    ANTILOG[exponent]
}
