//! Digit-reduction kernel.
//!
//! Every numerology value in the engine is produced by repeatedly summing the
//! decimal digits of an integer until a single digit remains, except that a
//! master number halts the reduction wherever it appears, including as an
//! intermediate sum.

/// Master numbers recognized by the standard policy.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Master numbers recognized by the extended policy.
pub const EXTENDED_MASTER_NUMBERS: [u32; 4] = [11, 22, 33, 44];

/// Value returned for input that cannot be reduced (negative numbers).
///
/// Callers must check for it explicitly; see `NumerologyNumber::from_reduced`.
pub const REDUCTION_SENTINEL: u32 = 0;

/// Which values halt digit reduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MasterNumberPolicy {
    /// 11, 22 and 33.
    #[default]
    Standard,
    /// 11, 22, 33 and 44. Used by the card pattern analysis.
    Extended,
}

impl MasterNumberPolicy {
    /// Returns true when `n` is a master number under this policy.
    pub fn is_master(self, n: u64) -> bool {
        match self {
            MasterNumberPolicy::Standard => MASTER_NUMBERS.iter().any(|&m| u64::from(m) == n),
            MasterNumberPolicy::Extended => {
                EXTENDED_MASTER_NUMBERS.iter().any(|&m| u64::from(m) == n)
            }
        }
    }
}

/// Reduces `n` using the standard master numbers (11, 22, 33).
///
/// Negative input yields [`REDUCTION_SENTINEL`].
pub fn reduce(n: i64) -> u32 {
    reduce_with(n, MasterNumberPolicy::Standard)
}

/// Reduces `n` under the given master-number policy.
///
/// The master check runs before every summation step, so `reduce(29)` stops at
/// 11 instead of continuing to 2.
pub fn reduce_with(n: i64, policy: MasterNumberPolicy) -> u32 {
    if n < 0 {
        return REDUCTION_SENTINEL;
    }
    let mut value = n.unsigned_abs();
    loop {
        if policy.is_master(value) || value <= 9 {
            // Both branches are <= 44 here, so the cast is lossless.
            return value as u32;
        }
        value = digit_sum(value);
    }
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(n: u64) -> u64 {
    let mut rest = n;
    let mut sum = 0;
    while rest > 0 {
        sum += rest % 10;
        rest /= 10;
    }
    sum
}

/// Decimal digits of `n`, most significant first. `digits(0)` is `[0]`.
pub fn digits(n: u64) -> Vec<u8> {
    n.to_string().bytes().map(|b| b - b'0').collect()
}

/// Returns true when `n` is a valid reduced value: 1..=9 or a master number
/// under the given policy.
pub fn is_reduced(n: u32, policy: MasterNumberPolicy) -> bool {
    (1..=9).contains(&n) || policy.is_master(u64::from(n))
}
