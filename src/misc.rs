use std::cmp::Ordering;

use super::{FixedUint, LengthMismatch, TryFromIntError};

macro_rules! impl_bitscan {
    (@forward, $bitscan:ident, $size:tt, $empty:expr) => {
        pub fn $bitscan(&self) -> u32 {
            let n = self.0;

            for i in 0..$size {
                let n = n[i];
                if n != $empty {
                    return (i as u32) * u8::BITS + n.$bitscan();
                }
            }

            Self::BITS
        }
    };
    (@reverse, $bitscan:ident, $size:tt, $empty:expr) => {
        pub fn $bitscan(&self) -> u32 {
            let n = self.0;

            for i in 0..$size {
                let n = n[$size - i - 1];
                if n != $empty {
                    return (i as u32) * u8::BITS + n.$bitscan();
                }
            }

            Self::BITS
        }
    };
}

impl<const N: usize> FixedUint<N> {
    pub const BYTES: usize = N;
    pub const BITS: u32 = N as u32 * u8::BITS;
    pub const ZERO: Self = Self([0; N]);
    pub const ONE: Self = Self::one();
    pub const MAX: Self = Self([u8::MAX; N]);

    // Storage is big-endian, so leading bits live at index 0.
    impl_bitscan!(@forward, leading_zeros, N, 0);
    impl_bitscan!(@reverse, trailing_zeros, N, 0);

    pub const fn zero() -> Self {
        Self([0; N])
    }

    pub const fn one() -> Self {
        let mut r = [0; N];
        r[N - 1] = 1;
        Self(r)
    }

    /// All bytes set to `0xFF`, i.e. 256^N - 1.
    pub const fn max() -> Self {
        Self::MAX
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|b| b.count_ones()).sum()
    }

    pub const fn from_be_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn from_le_bytes(mut bytes: [u8; N]) -> Self {
        bytes.reverse();
        Self(bytes)
    }

    /// Copies a big-endian buffer that must be exactly `N` bytes long.
    pub fn try_from_be_slice(bytes: &[u8]) -> Result<Self, LengthMismatch> {
        let bytes: [u8; N] = bytes.try_into().map_err(|_| LengthMismatch {
            expected: N,
            actual: bytes.len(),
        })?;

        Ok(Self(bytes))
    }

    /// Big-endian view of the stored bytes.
    pub const fn as_be_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub const fn to_be_bytes(&self) -> [u8; N] {
        self.0
    }

    /// Reversed copy of the stored bytes. The value itself is unchanged.
    pub fn to_le_bytes(&self) -> [u8; N] {
        let mut r = self.0;
        r.reverse();
        r
    }

    /// Places the big-endian bytes of a native unsigned integer in the low
    /// order bytes of the result. Wider natives are truncated to `N` bytes
    /// and narrower ones are zero-extended.
    pub fn value_of<T: Into<Self>>(n: T) -> Self {
        n.into()
    }
}

macro_rules! impl_native_conv {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> From<$t> for FixedUint<N> {
                #[inline]
                fn from(n: $t) -> Self {
                    let bytes = n.to_be_bytes();
                    let len = bytes.len().min(N);

                    let mut r = [0; N];
                    r[N - len..].copy_from_slice(&bytes[bytes.len() - len..]);

                    Self(r)
                }
            }

            impl<const N: usize> TryFrom<FixedUint<N>> for $t {
                type Error = TryFromIntError;

                fn try_from(n: FixedUint<N>) -> Result<Self, Self::Error> {
                    const SIZE: usize = std::mem::size_of::<$t>();
                    let len = SIZE.min(N);

                    if n.0[..N - len].iter().any(|&b| b != 0) {
                        return Err(TryFromIntError);
                    }

                    let mut bytes = [0; SIZE];
                    bytes[SIZE - len..].copy_from_slice(&n.0[N - len..]);

                    Ok(<$t>::from_be_bytes(bytes))
                }
            }
        )+
    };
}

impl_native_conv!(u8, u16, u32, u64, u128, usize);

impl<const N: usize> From<[u8; N]> for FixedUint<N> {
    #[inline]
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> Default for FixedUint<N> {
    #[inline]
    fn default() -> Self {
        Self([0; N])
    }
}

/// Read-only byte access, index 0 is the most significant byte.
impl<const N: usize> std::ops::Index<usize> for FixedUint<N> {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

fn compare<const N: usize>(a: &FixedUint<N>, b: &FixedUint<N>) -> Ordering {
    let a = a.0;
    let b = b.0;

    for i in 0..N {
        if a[i] < b[i] {
            return Ordering::Less;
        } else if a[i] > b[i] {
            return Ordering::Greater;
        }
    }

    Ordering::Equal
}

impl<const N: usize> std::cmp::PartialOrd for FixedUint<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare(self, other))
    }
}

impl<const N: usize> std::cmp::Ord for FixedUint<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use quickcheck_macros::quickcheck;

    use crate::{FixedUint, LengthMismatch, TryFromIntError};

    type U32 = FixedUint<4>;
    type U64 = FixedUint<8>;

    const EIGHT_BYTE_NUMBER: u64 = 35954775201473703; // 0x007FBCAD73DCE4A7

    #[test]
    fn counts_leading_zeros() {
        let n = U32::from_be_bytes([0, 0, 0b0010_0000, 1]);
        assert_eq!(n.leading_zeros(), 16 + 2);

        assert_eq!(U32::ZERO.leading_zeros(), 32);
        assert_eq!(U32::MAX.leading_zeros(), 0);
    }

    #[test]
    fn counts_trailing_zeros() {
        let n = U32::from_be_bytes([1, 0b1000, 0, 0]);
        assert_eq!(n.trailing_zeros(), 16 + 3);

        assert_eq!(U32::ZERO.trailing_zeros(), 32);
    }

    #[test]
    fn counts_ones() {
        let n = U32::from_be_bytes([0xFF, 0x0F, 0, 1]);
        assert_eq!(n.count_ones(), 13);
    }

    #[test]
    fn distinguished_values() {
        assert_eq!(U32::default(), U32::ZERO);
        assert_eq!(U32::zero().as_be_bytes(), &[0, 0, 0, 0]);
        assert_eq!(U32::one().as_be_bytes(), &[0, 0, 0, 1]);
        assert_eq!(U32::max().as_be_bytes(), &[0xFF; 4]);
        assert!(U32::ZERO.is_zero());
        assert!(!U32::ONE.is_zero());
        assert_eq!(U32::BITS, 32);
        assert_eq!(U32::BYTES, 4);
    }

    #[test]
    fn value_of_truncates_into_low_bytes() {
        assert_eq!(
            FixedUint::<1>::value_of(EIGHT_BYTE_NUMBER).to_be_bytes(),
            [0xA7]
        );
        assert_eq!(
            FixedUint::<2>::value_of(EIGHT_BYTE_NUMBER).to_be_bytes(),
            [0xE4, 0xA7]
        );
        assert_eq!(
            FixedUint::<4>::value_of(EIGHT_BYTE_NUMBER).to_be_bytes(),
            [0x73, 0xDC, 0xE4, 0xA7]
        );
        assert_eq!(
            FixedUint::<8>::value_of(EIGHT_BYTE_NUMBER).to_be_bytes(),
            [0x00, 0x7F, 0xBC, 0xAD, 0x73, 0xDC, 0xE4, 0xA7]
        );
    }

    #[test]
    fn value_of_zero_extends() {
        let n = FixedUint::<12>::from(0x0102_u16);
        assert_eq!(n.to_be_bytes(), [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2]);

        let n = FixedUint::<4>::from(7_u8);
        assert_eq!(n, U32::from_be_bytes([0, 0, 0, 7]));
    }

    #[test]
    fn narrows_to_native() {
        let n = U64::from(0xDEAD_BEEF_u32);
        assert_eq!(u32::try_from(n), Ok(0xDEAD_BEEF));
        assert_eq!(u16::try_from(n), Err(TryFromIntError));
        assert_eq!(u128::try_from(n), Ok(0xDEAD_BEEF));

        let n = FixedUint::<2>::from_be_bytes([0x12, 0x34]);
        assert_eq!(u64::try_from(n), Ok(0x1234));
    }

    #[test]
    fn byte_views() {
        let n = U32::from_be_bytes([1, 2, 3, 4]);
        assert_eq!(n.to_le_bytes(), [4, 3, 2, 1]);
        // Unchanged after producing the little-endian copy.
        assert_eq!(n.as_be_bytes(), &[1, 2, 3, 4]);

        assert_eq!(U32::from_le_bytes([4, 3, 2, 1]), n);
        assert_eq!(n[0], 1);
        assert_eq!(n[3], 4);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let _ = U32::ZERO[4];
    }

    #[test]
    fn from_be_slice_checks_length() {
        assert_eq!(
            U32::try_from_be_slice(&[1, 2, 3, 4]),
            Ok(U32::from_be_bytes([1, 2, 3, 4]))
        );
        assert_eq!(
            U32::try_from_be_slice(&[1, 2, 3]),
            Err(LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(U32::try_from_be_slice(&[0; 5]).is_err());
    }

    #[test]
    fn compares() {
        let a = U32::from_be_bytes([0, 1, 2, 3]);
        let b = U32::from_be_bytes([0, 1, 2, 4]);
        let c = U32::from_be_bytes([1, 0, 0, 0]);

        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(c.cmp(&b), Ordering::Greater);
        assert_eq!(b.cmp(&b), Ordering::Equal);
        assert!(a <= b && b >= a && a != b);
    }

    #[quickcheck]
    fn qc_order_matches_u64(a: u64, b: u64) -> bool {
        U64::from(a).cmp(&U64::from(b)) == a.cmp(&b)
    }

    #[quickcheck]
    fn qc_native_roundtrip(n: u64) -> bool {
        u64::try_from(U64::from(n)) == Ok(n)
    }
}
