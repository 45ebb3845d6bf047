//! Arbitrary-precision unsigned accumulator for mixed-radix packing.
//!
//! Limbs are little-endian `u32`s. Every operand the codec uses (field radices,
//! the obfuscation constants and the base-36 radix) fits in a `u32`, so only
//! multiply-add, divmod and subtract by a small value are implemented.

/// Unsigned big integer. Leading zero limbs are always trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedInt {
    limbs: Vec<u32>,
}

impl PackedInt {
    #[must_use]
    pub const fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    #[must_use]
    pub fn from_u32(value: u32) -> Self {
        let mut out = Self::zero();
        out.mul_add_small(1, value);
        out
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// `self = self * mul + add`.
    pub fn mul_add_small(&mut self, mul: u32, add: u32) {
        let mut carry = u64::from(add);
        for limb in &mut self.limbs {
            let wide = u64::from(*limb) * u64::from(mul) + carry;
            *limb = low_bits(wide);
            carry = wide >> 32;
        }
        if carry != 0 {
            self.limbs.push(low_bits(carry));
        }
        self.trim();
    }

    /// Divide in place by `divisor` and return the remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn divmod_small(&mut self, divisor: u32) -> u32 {
        assert!(divisor != 0, "division by zero");
        let divisor = u64::from(divisor);
        let mut rem = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let wide = (rem << 32) | u64::from(*limb);
            *limb = low_bits(wide / divisor);
            rem = wide % divisor;
        }
        self.trim();
        low_bits(rem)
    }

    /// Remainder of `self / divisor` without modifying `self`.
    #[must_use]
    pub fn rem_small(&self, divisor: u32) -> u32 {
        self.clone().divmod_small(divisor)
    }

    /// `self - value`, or `None` when the result would be negative.
    #[must_use]
    pub fn checked_sub_small(&self, value: u32) -> Option<Self> {
        let mut out = self.clone();
        let mut borrow = u64::from(value);
        for limb in &mut out.limbs {
            if borrow == 0 {
                break;
            }
            let current = u64::from(*limb);
            if current >= borrow {
                *limb = low_bits(current - borrow);
                borrow = 0;
            } else {
                *limb = low_bits((1u64 << 32) + current - borrow);
                borrow = 1;
            }
        }
        if borrow != 0 {
            return None;
        }
        out.trim();
        Some(out)
    }

    fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn low_bits(value: u64) -> u32 {
    value as u32
}
