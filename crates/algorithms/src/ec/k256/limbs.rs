//! 256-bit limb arithmetic shared by the field and scalar types
//!
//! Values are eight little-endian u32 limbs. Both secp256k1 moduli are
//! pseudo-Mersenne: `2^256 ≡ c (mod m)` for a short `c`, so a 512-bit
//! product is brought back under 2^256 by repeatedly folding the high half
//! onto the low half as `lo + hi·c`.

use subtle::{Choice, ConditionallySelectable};

pub(crate) const NLIMBS: usize = 8;

/// Working width for the folds: a 512-bit value plus one spare limb
const WIDE: usize = 2 * NLIMBS + 1;

/// a + b, returning the carry out of the top limb
#[inline(always)]
pub(crate) fn adc(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
    let mut r = [0u32; NLIMBS];
    let mut carry = 0u64;
    for i in 0..NLIMBS {
        let t = a[i] as u64 + b[i] as u64 + carry;
        r[i] = t as u32;
        carry = t >> 32;
    }
    (r, carry as u32)
}

/// a - b, returning 1 as the borrow when a < b
#[inline(always)]
pub(crate) fn sbb(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
    let mut r = [0u32; NLIMBS];
    let mut borrow = 0i64;
    for i in 0..NLIMBS {
        let t = a[i] as i64 - b[i] as i64 + borrow;
        r[i] = t as u32;
        borrow = t >> 32;
    }
    (r, (borrow & 1) as u32)
}

/// (a + b) mod m for a, b < m
#[inline]
pub(crate) fn add_mod(a: &[u32; NLIMBS], b: &[u32; NLIMBS], m: &[u32; NLIMBS]) -> [u32; NLIMBS] {
    let (sum, carry) = adc(a, b);
    let (reduced, borrow) = sbb(&sum, m);
    // subtract m if the addition overflowed or sum ≥ m
    let need_reduce = Choice::from(((carry | (borrow ^ 1)) & 1) as u8);
    select(&sum, &reduced, need_reduce)
}

/// (a - b) mod m for a, b < m
#[inline]
pub(crate) fn sub_mod(a: &[u32; NLIMBS], b: &[u32; NLIMBS], m: &[u32; NLIMBS]) -> [u32; NLIMBS] {
    let (diff, borrow) = sbb(a, b);
    let (wrapped, _) = adc(&diff, m);
    select(&diff, &wrapped, Choice::from(borrow as u8))
}

/// Schoolbook 256×256 → 512-bit product
#[inline]
pub(crate) fn mul_wide(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> [u32; 2 * NLIMBS] {
    let mut t = [0u32; 2 * NLIMBS];
    for i in 0..NLIMBS {
        let mut carry = 0u64;
        for j in 0..NLIMBS {
            let v = t[i + j] as u64 + (a[i] as u64) * (b[j] as u64) + carry;
            t[i + j] = v as u32;
            carry = v >> 32;
        }
        t[i + NLIMBS] = carry as u32;
    }
    t
}

/// One fold: `lo + hi·c`, where lo is the bottom eight limbs
fn fold(acc: &[u32; WIDE], c: &[u32]) -> [u32; WIDE] {
    let mut out = [0u32; WIDE];
    out[..NLIMBS].copy_from_slice(&acc[..NLIMBS]);
    for i in 0..(WIDE - NLIMBS) {
        let hi = acc[NLIMBS + i] as u64;
        let mut carry = 0u64;
        for (j, &cj) in c.iter().enumerate() {
            let v = out[i + j] as u64 + hi * cj as u64 + carry;
            out[i + j] = v as u32;
            carry = v >> 32;
        }
        for limb in out.iter_mut().skip(i + c.len()) {
            let v = *limb as u64 + carry;
            *limb = v as u32;
            carry = v >> 32;
        }
    }
    out
}

/// Reduce a 512-bit value modulo `m`, where `c = 2^256 mod m`
///
/// `c` must be at most 129 bits (five limbs). Four folds leave a value
/// below 2^256 < 2m, so the conditional subtractions land in [0, m).
pub(crate) fn reduce_wide(wide: &[u32; 2 * NLIMBS], c: &[u32], m: &[u32; NLIMBS]) -> [u32; NLIMBS] {
    debug_assert!(c.len() <= 5);
    let mut acc = [0u32; WIDE];
    acc[..2 * NLIMBS].copy_from_slice(wide);
    for _ in 0..4 {
        acc = fold(&acc, c);
    }
    debug_assert!(acc[NLIMBS..].iter().all(|&w| w == 0));

    let mut r = [0u32; NLIMBS];
    r.copy_from_slice(&acc[..NLIMBS]);
    for _ in 0..2 {
        let (reduced, borrow) = sbb(&r, m);
        r = select(&reduced, &r, Choice::from(borrow as u8));
    }
    r
}

/// Constant-time limb-wise select: `a` when `choice` is 0, `b` when 1
#[inline(always)]
pub(crate) fn select(a: &[u32; NLIMBS], b: &[u32; NLIMBS], choice: Choice) -> [u32; NLIMBS] {
    let mut r = [0u32; NLIMBS];
    for i in 0..NLIMBS {
        r[i] = u32::conditional_select(&a[i], &b[i], choice);
    }
    r
}

/// Constant-time check: a < m
#[inline(always)]
pub(crate) fn lt(a: &[u32; NLIMBS], m: &[u32; NLIMBS]) -> Choice {
    let (_, borrow) = sbb(a, m);
    Choice::from(borrow as u8)
}

/// Constant-time zero test
#[inline(always)]
pub(crate) fn is_zero(a: &[u32; NLIMBS]) -> Choice {
    let acc = a.iter().fold(0u32, |acc, &w| acc | w);
    Choice::from(((acc | acc.wrapping_neg()) >> 31) as u8 ^ 1)
}

/// Bit `i` of `a`, counting from the least significant bit
#[inline(always)]
pub(crate) fn bit(a: &[u32; NLIMBS], i: usize) -> Choice {
    Choice::from(((a[i / 32] >> (i % 32)) & 1) as u8)
}
