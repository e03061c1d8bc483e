mod addsub;
mod div;
mod error;
mod format;
mod misc;
mod mul;
mod parse;

pub use error::{DivisionByZero, FromStrErr, LengthMismatch, TryFromIntError};

/// Unsigned integer occupying exactly `N` bytes.
///
/// Bytes are stored big-endian: index 0 holds the most significant byte.
/// All arithmetic is performed modulo 256^N, and operands must share the
/// same width, which the const parameter enforces at compile time.
#[derive(Eq, PartialEq, Hash, Copy, Clone)]
pub struct FixedUint<const N: usize>([u8; N]);

#[allow(non_camel_case_types)]
pub type u256 = FixedUint<32>;
pub fn u256(n: [u8; 32]) -> u256 {
    FixedUint(n)
}

#[allow(non_camel_case_types)]
pub type u512 = FixedUint<64>;
pub fn u512(n: [u8; 64]) -> u512 {
    FixedUint(n)
}

#[cfg(test)]
impl<const N: usize> Arbitrary for FixedUint<N> {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut r = [0_u8; N];
        for i in 0..N {
            r[i] = u8::arbitrary(g);
        }
        Self(r)
    }
}

#[cfg(test)]
use quickcheck::Arbitrary;

#[cfg(test)]
pub fn rng() -> rand_pcg::Pcg64 {
    let now = std::time::Instant::now();
    let seed = now.elapsed().as_nanos();

    rand_pcg::Pcg64::new(0xcafef00dd15ea5e5 ^ seed, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}
