// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Reasons a decimal string couldn't be turned into a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("found a sign without any digits")]
    LoneSign,
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("attempt to divide by zero")]
pub struct DivisionByZero;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("number out of range for the target integer type")]
pub struct TryFromBigIntError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZero),
    #[error(transparent)]
    OutOfRange(#[from] TryFromBigIntError),
}
