// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use std::ops::Deref;

/// Borrowed or Owned, used to capture both operand variants when implementing traits for Self/&Self
///
/// Owned operands hand their limb buffer to the result instead of cloning it.
#[derive(Debug, derive_more::From)]
pub enum Boo<'b, T> {
    Owned(T),
    Borrowed(&'b T),
}

impl<T> Deref for Boo<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match self {
            Boo::Owned(t) => t,
            Boo::Borrowed(t) => t,
        }
    }
}
impl<T> AsRef<T> for Boo<'_, T> {
    fn as_ref(&self) -> &T {
        self
    }
}

impl<'b, T> Boo<'b, T> {
    /// gives an owned instance of `T` by using `deref` on the held reference
    pub fn into_owned(self, deref: impl FnOnce(&'b T) -> T) -> T {
        match self {
            Boo::Owned(t) => t,
            Boo::Borrowed(t) => deref(t),
        }
    }

    /// gives an owned instance of `T` by cloning the held reference
    pub fn cloned(self) -> T
    where
        T: Clone,
    {
        self.into_owned(T::clone)
    }

    /// maps both variants, keeping the ownership
    pub fn map<'u, U>(
        self,
        owned: impl FnOnce(T) -> U,
        borrowed: impl FnOnce(&'b T) -> &'u U,
    ) -> Boo<'u, U> {
        match self {
            Boo::Owned(t) => Boo::Owned(owned(t)),
            Boo::Borrowed(t) => Boo::Borrowed(borrowed(t)),
        }
    }

    pub const fn is_owned(&self) -> bool {
        matches!(self, Boo::Owned(_))
    }
}
