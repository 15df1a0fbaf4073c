// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
//! The fixed width building blocks of the numbers.
//!
//! A number is stored as [`Limb`]s in little endian order, every intermediate result of two limbs is
//! computed in the double width [`Wide`] type, so no carry or borrow gets lost.

pub type Limb = u32;
pub type Wide = u64;

pub const BITS: usize = Limb::BITS as usize;
pub const BYTES: usize = BITS / 8;

/// helper math for a single [`Limb`]
///
/// the names avoid the unstable inherent methods of the primitive types
pub trait Digit: Copy {
    /// `self` + `rhs` + `carry` = (`res`, `out_carry`)
    fn add_with_carry(self, rhs: Self, carry: bool) -> (Self, bool);
    /// `self` - `rhs` - `borrow` = (`res`, `out_borrow`)
    fn sub_with_borrow(self, rhs: Self, borrow: bool) -> (Self, bool);
    /// `self` * `rhs` + `carry` fits into [`Wide`] without overflow
    fn mul_wide(self, rhs: Self, carry: Self) -> Wide;
    /// ((0, `self`) << `shift`) | (0, `carry`) = (`out_carry`, `res`)
    ///
    /// carry should only hold `shift` bits of data
    fn shl_wide(self, shift: usize, carry: Self) -> Wide;
    /// ((`self`, 0) >> `shift`) | (`carry`, 0) = (`res`, `out_carry`)
    ///
    /// carry should only hold the upper `shift` bits of data
    fn shr_wide(self, shift: usize, carry: Self) -> Wide;
}
/// splitting and assembling a [`Wide`] from two [`Limb`]s
pub trait Split {
    fn new(lower: Limb, upper: Limb) -> Self;
    fn widen(value: Limb) -> Self;
    /// (`lower`, `upper`)
    fn split_le(self) -> (Limb, Limb);
}

impl Digit for Limb {
    fn add_with_carry(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (res, carry_1) = self.overflowing_add(rhs);
        let (res, carry_2) = res.overflowing_add(Self::from(carry));
        (res, carry_1 | carry_2)
    }
    fn sub_with_borrow(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (res, borrow_1) = self.overflowing_sub(rhs);
        let (res, borrow_2) = res.overflowing_sub(Self::from(borrow));
        (res, borrow_1 | borrow_2)
    }
    fn mul_wide(self, rhs: Self, carry: Self) -> Wide {
        Wide::widen(self) * Wide::widen(rhs) + Wide::widen(carry)
    }
    fn shl_wide(self, shift: usize, carry: Self) -> Wide {
        debug_assert!(shift < BITS, "can only shift by less than one limb");
        debug_assert!(
            shift == 0 || carry >> shift == 0,
            "carry has more than {shift} bits info"
        );
        (Wide::widen(self) << shift) | Wide::widen(carry)
    }
    fn shr_wide(self, shift: usize, carry: Self) -> Wide {
        debug_assert!(shift < BITS, "can only shift by less than one limb");
        debug_assert!(
            carry & (Limb::MAX >> shift) == 0,
            "carry has more than {shift} bits info"
        );
        (Wide::new(0, self) >> shift) | Wide::new(0, carry)
    }
}

impl Split for Wide {
    fn new(lower: Limb, upper: Limb) -> Self {
        (Self::from(upper) << BITS) | Self::from(lower)
    }
    fn widen(value: Limb) -> Self {
        Self::from(value)
    }
    fn split_le(self) -> (Limb, Limb) {
        (self as Limb, (self >> BITS) as Limb)
    }
}

/// assembles [`Limb`]s out of little endian bytes, the last limb gets padded with zeros
pub fn from_le_bytes(bytes: impl IntoIterator<Item = u8>) -> Vec<Limb> {
    use itertools::Itertools;
    let chunks = bytes.into_iter().chunks(BYTES);
    chunks
        .into_iter()
        .map(|chunk| {
            let mut buf = [0; BYTES];
            for (place, byte) in buf.iter_mut().zip(chunk) {
                *place = byte;
            }
            Limb::from_le_bytes(buf)
        })
        .collect_vec()
}
