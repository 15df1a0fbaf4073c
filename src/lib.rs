// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
pub mod big_int;
pub mod error;

pub use big_int::{
    signed::{BigInt as BigIInt, SigNum, Sign},
    unsigned::BigInt as BigUInt,
};
pub use error::{DivisionByZero, Error, ParseError, TryFromBigIntError};

mod util {
    pub mod boo;
    pub mod rng;
}
