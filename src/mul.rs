use super::FixedUint;

impl<const N: usize> FixedUint<N> {
    #[inline]
    pub fn overflowing_mul_word(&self, other: u64) -> (Self, bool) {
        let mut carry = 0;
        let n = self.0;

        let mut r = [0; N];
        for i in (0..N).rev() {
            let p = n[i] as u128 * other as u128 + carry;
            r[i] = p as u8;
            carry = p >> 8;
        }

        (Self(r), carry != 0)
    }

    /// Multiplication by repeated doubling.
    ///
    /// Each round doubles a copy of `self` alongside a power-of-two
    /// multiplier until the next doubling would pass what is left of
    /// `other`, adds that partial product and subtracts the multiplier.
    /// This is binary long multiplication expressed with additions only,
    /// so the result wraps modulo 256^N exactly as `+` does. The flag is
    /// set if any doubling or accumulation carried out of the top byte.
    pub fn overflowing_mul(&self, other: &Self) -> (Self, bool) {
        if self.is_zero() || other.is_zero() {
            return (Self::zero(), false);
        }

        let mut product = Self::zero();
        let mut overflow = false;
        let mut remaining = *other;

        while !remaining.is_zero() {
            let mut multiplier = Self::one();
            let mut partial = *self;

            loop {
                // A carry here means the multiplier would exceed MAX, which
                // `remaining` can never reach.
                let (next, carry) = multiplier.overflowing_add(&multiplier);
                if carry || next > remaining {
                    break;
                }

                multiplier = next;

                let (doubled, carry) = partial.overflowing_add(&partial);
                partial = doubled;
                overflow |= carry;
            }

            let (sum, carry) = product.overflowing_add(&partial);
            product = sum;
            overflow |= carry;

            remaining = remaining.wrapping_sub(&multiplier);
        }

        (product, overflow)
    }

    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.overflowing_mul(other) {
            (r, false) => Some(r),
            _ => None,
        }
    }

    #[inline]
    pub fn wrapping_mul(&self, other: &Self) -> Self {
        self.overflowing_mul(other).0
    }

    #[inline(never)]
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut base = *self;
        let mut result = Self::one();

        while exp != 0 {
            if exp & 1 != 0 {
                result *= base;
            }

            base *= base;
            exp >>= 1;
        }

        result
    }
}

impl<const N: usize> std::ops::Mul<u64> for FixedUint<N> {
    type Output = Self;

    /// `other` goes through [`FixedUint::value_of`] first and is truncated
    /// to `N` bytes when it does not fit.
    #[inline]
    fn mul(self, other: u64) -> Self::Output {
        self.wrapping_mul(&Self::value_of(other))
    }
}

impl<const N: usize> std::ops::Mul<u64> for &FixedUint<N> {
    type Output = FixedUint<N>;

    #[inline]
    fn mul(self, other: u64) -> Self::Output {
        self.wrapping_mul(&FixedUint::value_of(other))
    }
}

impl<const N: usize> std::ops::MulAssign<u64> for FixedUint<N> {
    #[inline]
    fn mul_assign(&mut self, other: u64) {
        *self = self.wrapping_mul(&Self::value_of(other));
    }
}

impl<const N: usize> std::ops::Mul<FixedUint<N>> for FixedUint<N> {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self::Output {
        self.wrapping_mul(&other)
    }
}

impl<const N: usize> std::ops::Mul<FixedUint<N>> for &FixedUint<N> {
    type Output = FixedUint<N>;

    #[inline]
    fn mul(self, other: FixedUint<N>) -> Self::Output {
        self.wrapping_mul(&other)
    }
}

impl<const N: usize> std::ops::MulAssign<FixedUint<N>> for FixedUint<N> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = self.wrapping_mul(&other);
    }
}
