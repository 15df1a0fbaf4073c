// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use std::fmt::Debug;

use super::digits::Limb;

/// storage for the [`Limb`]s of a magnitude in LE order
///
/// numbers that fit into a single limb don't allocate. A `Limbs` is always normalized:
/// it's never empty and has no leading (most significant) zero limb, so zero is exactly `One(0)`.
/// `Other` always holds at least two limbs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Limbs {
    One(Limb),
    Other(Vec<Limb>),
}
impl Default for Limbs {
    fn default() -> Self {
        Self::new()
    }
}
impl Debug for Limbs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<Vec<Limb>> for Limbs {
    fn from(values: Vec<Limb>) -> Self {
        Self::from_vec(values)
    }
}
impl From<Limb> for Limbs {
    fn from(value: Limb) -> Self {
        Self::One(value)
    }
}
impl FromIterator<Limb> for Limbs {
    fn from_iter<T: IntoIterator<Item = Limb>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
impl From<Limbs> for Vec<Limb> {
    fn from(value: Limbs) -> Self {
        value.into_vec()
    }
}

impl Limbs {
    pub const fn new() -> Self {
        Self::One(0)
    }
    pub const fn from_single(value: Limb) -> Self {
        Self::One(value)
    }
    /// strips all leading zeros, an empty `values` is read as zero
    pub fn from_vec(mut values: Vec<Limb>) -> Self {
        truncate_leading_zeros(&mut values);
        match values.as_slice() {
            [] => Self::new(),
            &[single] => Self::One(single),
            _ => Self::Other(values),
        }
    }
    pub fn into_vec(self) -> Vec<Limb> {
        match self {
            Self::One(digit) => vec![digit],
            Self::Other(digits) => digits,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Other(digits) => {
                debug_assert!(
                    digits.len() > 1,
                    "vec remained with 1 >= {} elements",
                    digits.len()
                );
                digits.len()
            }
        }
    }
    pub const fn is_zero(&self) -> bool {
        matches!(self, Self::One(0))
    }
    pub fn get(&self, index: usize) -> Option<Limb> {
        self.as_slice().get(index).copied()
    }
    pub fn first(&self) -> Limb {
        match self {
            Self::One(digit) => *digit,
            Self::Other(digits) => digits[0],
        }
    }
    pub fn last(&self) -> Limb {
        match self {
            Self::One(digit) => *digit,
            Self::Other(digits) => digits[digits.len() - 1],
        }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Limb> + DoubleEndedIterator {
        self.as_slice().iter()
    }
    pub fn as_slice(&self) -> &[Limb] {
        match self {
            Self::One(digit) => std::slice::from_ref(digit),
            Self::Other(digits) => digits.as_slice(),
        }
    }
}

/// removes the most significant zero limbs, but leaves one limb standing
pub fn truncate_leading_zeros(digits: &mut Vec<Limb>) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
}
