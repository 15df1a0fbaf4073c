// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
//! Sign-magnitude numbers on top of a normalized [`limbs::Limbs`] storage.
pub mod digits;
pub mod limbs;
pub mod math_algos;
pub mod primitive;

pub mod signed;
pub mod unsigned;

#[cfg(test)]
mod tests;
