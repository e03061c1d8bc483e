use std::fmt;

use super::FixedUint;

const CHUNK_DIGITS: usize = 19;
const CHUNK_DIVISOR: u64 = 10_u64.pow(CHUNK_DIGITS as u32);

fn div_rem_word<const N: usize>(w: &FixedUint<N>, d: u64) -> (FixedUint<N>, u64) {
    let n = w.0;
    let d = d as u128;

    let mut q = [0; N];
    let mut r = 0_u128;

    for i in 0..N {
        let num = (r << 8) | n[i] as u128;
        q[i] = (num / d) as u8;
        r = num % d;
    }

    (FixedUint(q), r as u64)
}

fn encode_hex(bytes: &[u8], case: hex_simd::AsciiCase) -> String {
    let mut buf = vec![0; bytes.len() * 2];
    hex_simd::encode(bytes, hex_simd::OutBuf::new(&mut buf), case)
        .expect("hex encode failed");

    buf.into_iter().map(char::from).collect()
}

impl<const N: usize> FixedUint<N> {
    /// Full-width lowercase hex, two digits per byte and no prefix.
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0, hex_simd::AsciiCase::Lower)
    }
}

impl<const N: usize> fmt::Display for FixedUint<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut chunks = Vec::with_capacity(N / 8 + 1);
        let (mut q, mut r) = div_rem_word(self, CHUNK_DIVISOR);
        chunks.push(r);

        while !q.is_zero() {
            (q, r) = div_rem_word(&q, CHUNK_DIVISOR);
            chunks.push(r);
        }

        let mut buf = String::with_capacity(chunks.len() * CHUNK_DIGITS);
        let mut chunks = chunks.into_iter().rev();

        if let Some(head) = chunks.next() {
            buf.push_str(&head.to_string());
        }
        for chunk in chunks {
            buf.push_str(&format!("{chunk:0width$}", width = CHUNK_DIGITS));
        }

        f.pad_integral(true, "", &buf)
    }
}

impl<const N: usize> fmt::Debug for FixedUint<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FixedUint<{N}>(0x{})", self.to_hex())
    }
}

impl<const N: usize> fmt::LowerHex for FixedUint<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self, f, hex_simd::AsciiCase::Lower)
    }
}

impl<const N: usize> fmt::UpperHex for FixedUint<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self, f, hex_simd::AsciiCase::Upper)
    }
}

fn format_hex<const N: usize>(
    src: &FixedUint<N>,
    f: &mut fmt::Formatter,
    case: hex_simd::AsciiCase,
) -> fmt::Result {
    // Keep at least one digit so zero prints as "0".
    let zero_digits = (src.leading_zeros() / 4) as usize;
    let zero_digits = zero_digits.min((N * 2).saturating_sub(1));

    let encoded = encode_hex(&src.0, case);

    f.pad_integral(true, "0x", &encoded[zero_digits..])
}

#[cfg(test)]
mod tests {
    use crate::FixedUint;
    use quickcheck_macros::quickcheck;

    type U32 = FixedUint<4>;
    type U128 = FixedUint<16>;

    #[test]
    fn formats_numbers() {
        let w = U128::from(12332717382182921391293219327638312835_u128);
        let expected = "12332717382182921391293219327638312835";
        let formatted = format!("{w}");
        assert_eq!(formatted, expected);
    }

    #[test]
    fn formats_chunk_boundaries() {
        let w = U128::from(10_000_000_000_000_000_000_u128);
        assert_eq!(w.to_string(), "10000000000000000000");

        assert_eq!(U128::ZERO.to_string(), "0");
        assert_eq!(U128::MAX.to_string(), u128::MAX.to_string());
        assert_eq!(format!("{:>6}", U32::from(42_u8)), "    42");
    }

    #[test]
    fn formats_full_width_hex() {
        let w = U32::from(0x0001_1801_u32);
        assert_eq!(w.to_hex(), "00011801");
        assert_eq!(U32::ZERO.to_hex(), "00000000");
    }

    #[test]
    fn formats_lower_hex() {
        let w = U128::from(0xaaaabbbbccccdddd0000012345678901_u128);
        let expected = "aaaabbbbccccdddd0000012345678901";
        let formatted = format!("{:x}", w);
        assert_eq!(formatted, expected);
    }

    #[test]
    fn formats_upper_hex() {
        let w = U128::from(0xABCDE0000000000012345_u128);
        let expected = "ABCDE0000000000012345";
        let formatted = format!("{:X}", w);
        assert_eq!(formatted, expected);
        assert_eq!(format!("{:#X}", w), "0xABCDE0000000000012345");
    }

    #[test]
    fn formats_hex_zero() {
        let w = U128::ZERO;
        let expected = "0";
        let formatted = format!("{:x}", w);
        assert_eq!(formatted, expected);
    }

    #[test]
    fn formats_debug() {
        let w = U32::from(0x01C8_EB09_u32);
        assert_eq!(format!("{w:?}"), "FixedUint<4>(0x01c8eb09)");
    }

    #[quickcheck]
    fn qc_matches_u128(n: u128) -> bool {
        let w = U128::from(n);
        n.to_string() == w.to_string() && format!("{n:x}") == format!("{w:x}")
    }
}
