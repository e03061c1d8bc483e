use super::FixedUint;

impl<const N: usize> FixedUint<N> {
    /// Long addition in base 256, least significant byte first. The flag
    /// reports the carry left over after the most significant byte.
    #[inline]
    pub fn overflowing_add(&self, other: &Self) -> (Self, bool) {
        let lhs = self.0;
        let rhs = other.0;

        let mut carry = 0;

        let mut r = [0; N];
        for i in (0..N).rev() {
            let sum = lhs[i] as u16 + rhs[i] as u16 + carry as u16;

            r[i] = sum as u8;
            carry = (sum >> 8) as u8;
        }

        (Self(r), carry != 0)
    }

    #[inline]
    pub fn borrowing_sub(&self, other: &Self) -> (Self, bool) {
        let lhs = self.0;
        let rhs = other.0;

        let mut borrow = 0;

        let mut r = [0; N];
        for i in (0..N).rev() {
            let diff = (lhs[i] as u16)
                .wrapping_sub(rhs[i] as u16)
                .wrapping_sub(borrow as u16);

            r[i] = diff as u8;
            borrow = (diff >> 15) as u8;
        }

        (Self(r), borrow != 0)
    }

    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.overflowing_add(other) {
            (r, false) => Some(r),
            _ => None,
        }
    }

    /// `None` when `other > self`; compare first or use this to detect
    /// underflow, since `-` wraps.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.borrowing_sub(other) {
            (r, false) => Some(r),
            _ => None,
        }
    }

    #[inline]
    pub fn wrapping_add(&self, other: &Self) -> Self {
        self.overflowing_add(other).0
    }

    #[inline]
    pub fn wrapping_sub(&self, other: &Self) -> Self {
        self.borrowing_sub(other).0
    }
}

impl<const N: usize> std::ops::Add<FixedUint<N>> for FixedUint<N> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self::Output {
        self.wrapping_add(&other)
    }
}

impl<const N: usize> std::ops::Add<&FixedUint<N>> for &FixedUint<N> {
    type Output = FixedUint<N>;

    #[inline]
    fn add(self, other: &FixedUint<N>) -> Self::Output {
        self.wrapping_add(other)
    }
}

impl<const N: usize> std::ops::AddAssign<FixedUint<N>> for FixedUint<N> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.wrapping_add(&other);
    }
}

impl<const N: usize> std::ops::Sub<FixedUint<N>> for FixedUint<N> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self::Output {
        self.wrapping_sub(&other)
    }
}

impl<const N: usize> std::ops::Sub<&FixedUint<N>> for &FixedUint<N> {
    type Output = FixedUint<N>;

    #[inline]
    fn sub(self, other: &FixedUint<N>) -> Self::Output {
        self.wrapping_sub(other)
    }
}

impl<const N: usize> std::ops::SubAssign<FixedUint<N>> for FixedUint<N> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = self.wrapping_sub(&other);
    }
}
