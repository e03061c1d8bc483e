use std::error::Error;
use std::fmt;

#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum FromStrErr {
    Empty,
    InvalidCharacter,
    OddLength,
    Overflow,
}

impl fmt::Display for FromStrErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            FromStrErr::Empty => "empty input",
            FromStrErr::InvalidCharacter => "invalid character",
            FromStrErr::OddLength => "odd number of hex digits",
            FromStrErr::Overflow => "overflow",
        };

        f.write_str(text)
    }
}

impl Error for FromStrErr {}

/// A byte slice did not have the exact width of the target type.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct LengthMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "expected {} bytes, got {}",
            self.expected, self.actual
        )
    }
}

impl Error for LengthMismatch {}

#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("division by zero")
    }
}

impl Error for DivisionByZero {}

/// Value does not fit into the requested native integer.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct TryFromIntError;

impl fmt::Display for TryFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("out of range integral type conversion attempted")
    }
}

impl Error for TryFromIntError {}
