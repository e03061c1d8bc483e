use super::{DivisionByZero, FixedUint};

impl<const N: usize> FixedUint<N> {
    /// Floor division by repeated doubling.
    ///
    /// Each round doubles the divisor, together with a power-of-two
    /// multiplier, for as long as it still fits under the remaining
    /// dividend. The multiplier is added to the quotient and the doubled
    /// divisor is subtracted, until what remains is smaller than the
    /// divisor. That remainder equals `self - quotient * divisor`.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), DivisionByZero> {
        if divisor.is_zero() {
            return Err(DivisionByZero);
        }

        let mut quotient = Self::zero();
        let mut remaining = *self;

        while remaining >= *divisor {
            let mut multiplier = Self::one();
            let mut total = *divisor;

            loop {
                let (next, carry) = total.overflowing_add(&total);
                if carry || next > remaining {
                    break;
                }

                total = next;
                multiplier = multiplier.wrapping_add(&multiplier);
            }

            quotient = quotient.wrapping_add(&multiplier);
            remaining = remaining.wrapping_sub(&total);
        }

        Ok((quotient, remaining))
    }

    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).ok().map(|(q, _)| q)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).ok().map(|(_, r)| r)
    }
}

#[inline]
fn div_rem_or_panic<const N: usize>(
    n: &FixedUint<N>,
    d: &FixedUint<N>,
) -> (FixedUint<N>, FixedUint<N>) {
    match n.div_rem(d) {
        Ok(r) => r,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

impl<const N: usize> std::ops::Div<FixedUint<N>> for FixedUint<N> {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self::Output {
        div_rem_or_panic(&self, &other).0
    }
}

impl<const N: usize> std::ops::Div<FixedUint<N>> for &FixedUint<N> {
    type Output = FixedUint<N>;

    #[inline]
    fn div(self, other: FixedUint<N>) -> Self::Output {
        div_rem_or_panic(self, &other).0
    }
}

impl<const N: usize> std::ops::DivAssign<FixedUint<N>> for FixedUint<N> {
    #[inline]
    fn div_assign(&mut self, other: Self) {
        *self = div_rem_or_panic(self, &other).0;
    }
}

impl<const N: usize> std::ops::Rem<FixedUint<N>> for FixedUint<N> {
    type Output = Self;

    #[inline]
    fn rem(self, other: Self) -> Self::Output {
        div_rem_or_panic(&self, &other).1
    }
}

impl<const N: usize> std::ops::Rem<FixedUint<N>> for &FixedUint<N> {
    type Output = FixedUint<N>;

    #[inline]
    fn rem(self, other: FixedUint<N>) -> Self::Output {
        div_rem_or_panic(self, &other).1
    }
}

impl<const N: usize> std::ops::RemAssign<FixedUint<N>> for FixedUint<N> {
    #[inline]
    fn rem_assign(&mut self, other: Self) {
        *self = div_rem_or_panic(self, &other).1;
    }
}

impl<const N: usize> std::ops::Div<u64> for FixedUint<N> {
    type Output = Self;

    #[inline]
    fn div(self, other: u64) -> Self::Output {
        div_rem_or_panic(&self, &Self::value_of(other)).0
    }
}

impl<const N: usize> std::ops::Div<u64> for &FixedUint<N> {
    type Output = FixedUint<N>;

    #[inline]
    fn div(self, other: u64) -> Self::Output {
        div_rem_or_panic(self, &FixedUint::value_of(other)).0
    }
}

// Only the least significant byte of the remainder is returned. This is
// exact while the remainder is below 256; use `%` with a same-width divisor
// to get the full remainder.
impl<const N: usize> std::ops::Rem<u64> for FixedUint<N> {
    type Output = u8;

    #[inline]
    fn rem(self, other: u64) -> u8 {
        div_rem_or_panic(&self, &Self::value_of(other)).1 .0[N - 1]
    }
}

impl<const N: usize> std::ops::Rem<u64> for &FixedUint<N> {
    type Output = u8;

    #[inline]
    fn rem(self, other: u64) -> u8 {
        div_rem_or_panic(self, &FixedUint::value_of(other)).1 .0[N - 1]
    }
}
