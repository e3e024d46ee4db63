use crate::crypto::des_tables::{PC1, PC2};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::permute;

const SHIFT_BITS: [u32; 16] = [
    1, 1, 2, 2, 2, 2, 2, 2,
    1, 2, 2, 2, 2, 2, 2, 1,
];

const HALF_MASK: u64 = 0x0FFF_FFFF;

// Circular left rotation within a 28-bit half.
fn rotate_half_left(half: u64, shift: u32) -> u64 {
    ((half << shift) | (half >> (28 - shift))) & HALF_MASK
}

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    /// Derives the 16 round subkeys, round 1 first. PC-1 drops the parity
    /// bits, the 56-bit result is split into two 28-bit halves, and each
    /// round rotates both halves left by the scheduled amount before PC-2
    /// compresses them to 48 bits. The rotation state carries forward from
    /// round to round.
    fn generate_subkeys(&self, key: u64) -> Vec<u64> {
        let permuted = permute(key, 64, &PC1);

        let mut c = permuted >> 28;
        let mut d = permuted & HALF_MASK;

        let mut subkeys = Vec::with_capacity(SHIFT_BITS.len());
        for &shift in &SHIFT_BITS {
            c = rotate_half_left(c, shift);
            d = rotate_half_left(d, shift);
            subkeys.push(permute((c << 28) | d, 56, &PC2));
        }

        subkeys
    }
}
