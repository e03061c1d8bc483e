use super::{FixedUint, FromStrErr};

impl<const N: usize> FixedUint<N> {
    /// Parses hex text into a left-aligned big-endian buffer.
    ///
    /// Spaces anywhere in the input are ignored and a leading `0x` or `0X`
    /// is optional. Every pair of digits becomes one byte, written from
    /// index 0 onwards; bytes past the end of the input remain zero, so
    /// `"0x01"` parsed as a 4-byte value is `0x01000000`.
    pub fn from_hex(src: &str) -> Result<Self, FromStrErr> {
        let digits: Vec<u8> = src.bytes().filter(|&c| c != b' ').collect();
        let digits = match digits.as_slice() {
            [b'0', b'x' | b'X', rest @ ..] => rest,
            all => all,
        };

        if digits.is_empty() {
            return Err(FromStrErr::Empty);
        } else if digits.len() % 2 != 0 {
            return Err(FromStrErr::OddLength);
        } else if digits.len() > 2 * N {
            return Err(FromStrErr::Overflow);
        }

        let mut r = [0_u8; N];
        let dst = hex_simd::OutBuf::new(&mut r[..digits.len() / 2]);
        hex_simd::decode(digits, dst)
            .map_err(|_| FromStrErr::InvalidCharacter)?;

        Ok(Self(r))
    }

    pub fn from_str_dec(src: &str) -> Result<Self, FromStrErr> {
        let src = src.as_bytes();
        if src.is_empty() {
            return Err(FromStrErr::Empty);
        }

        let mut r = Self::zero();

        for &c in src {
            if !c.is_ascii_digit() {
                return Err(FromStrErr::InvalidCharacter);
            }

            let (p, mul_overflow) = r.overflowing_mul_word(10);
            let (s, add_overflow) =
                p.overflowing_add(&Self::from(c - b'0'));

            if mul_overflow || add_overflow {
                return Err(FromStrErr::Overflow);
            }

            r = s;
        }

        Ok(r)
    }
}

impl<const N: usize> std::str::FromStr for FixedUint<N> {
    type Err = FromStrErr;

    /// Hex when prefixed with `0x`/`0X`, decimal otherwise.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let trimmed = src.trim_start_matches(' ');
        if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
            Self::from_hex(src)
        } else {
            Self::from_str_dec(src)
        }
    }
}
