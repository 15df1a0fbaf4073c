// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
//! The native integers numbers can be built from and converted back into.
use itertools::Either;

pub trait Primitive: Copy + Eq + Ord + std::fmt::Display {
    const BYTES: usize;

    /// the unsigned twin, used for magnitudes
    type Pos: UNum<Neg = Self::Neg>;
    /// the signed twin
    type Neg: INum<Pos = Self::Pos>;

    fn to_le_bytes(self) -> impl ExactSizeIterator<Item = u8> + DoubleEndedIterator;

    /// sorts `self` into its unsigned or signed variant
    fn select_sign(self) -> Either<Self::Pos, Self::Neg>;
}
pub trait UNum: Primitive {
    fn try_from_u128(value: u128) -> Option<Self>;
}
pub trait INum: Primitive {
    fn is_negative(self) -> bool;
    /// the magnitude, which always fits into the unsigned twin
    fn abs(self) -> Self::Pos;
    fn try_from_i128(value: i128) -> Option<Self>;
}

macro_rules! implPrim {
    (common $type:ty, $pos:ty, $neg:ty, $side:ident) => {
        impl Primitive for $type {
            const BYTES: usize = std::mem::size_of::<$type>();

            type Pos = $pos;
            type Neg = $neg;

            fn to_le_bytes(self) -> impl ExactSizeIterator<Item = u8> + DoubleEndedIterator {
                <$type>::to_le_bytes(self).into_iter()
            }
            fn select_sign(self) -> Either<Self::Pos, Self::Neg> {
                Either::$side(self)
            }
        }
    };
    ($($pos:ty => $neg:ty),* $(,)?) => {$(
        implPrim!(common $pos, $pos, $neg, Left);
        implPrim!(common $neg, $pos, $neg, Right);

        impl UNum for $pos {
            fn try_from_u128(value: u128) -> Option<Self> {
                <$pos>::try_from(value).ok()
            }
        }
        impl INum for $neg {
            fn is_negative(self) -> bool {
                <$neg>::is_negative(self)
            }
            fn abs(self) -> $pos {
                self.unsigned_abs()
            }
            fn try_from_i128(value: i128) -> Option<Self> {
                <$neg>::try_from(value).ok()
            }
        }
    )*};
}

implPrim!(
    u8 => i8,
    u16 => i16,
    u32 => i32,
    u64 => i64,
    u128 => i128,
    usize => isize,
);
