// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use crate::{
    big_int::{
        math_algos::{self, bit_math::BitOp},
        primitive::{INum, Primitive},
    },
    error::{DivisionByZero, ParseError, TryFromBigIntError},
    util::boo::Boo,
    BigUInt,
};

use itertools::Either;
use rand::RngCore;
use std::{
    cmp::Ordering,
    iter,
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
        DivAssign, Mul, MulAssign, Neg, Not, RangeInclusive, Rem, RemAssign, Shl, ShlAssign, Shr,
        ShrAssign, Sub, SubAssign,
    },
    str::FromStr,
};

/// the sign of a number, zero counts as positive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    #[default]
    Positive,
}
impl Sign {
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
    pub const fn from_negative(is_negative: bool) -> Self {
        if is_negative {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}
impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_negative(self != rhs)
    }
}
impl From<SigNum> for Sign {
    fn from(value: SigNum) -> Self {
        match value {
            SigNum::Negative => Self::Negative,
            SigNum::Zero | SigNum::Positive => Self::Positive,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SigNum {
    Negative,
    #[default]
    Zero,
    Positive,
}
impl SigNum {
    pub const fn into_i8(self) -> i8 {
        match self {
            Self::Negative => -1,
            Self::Zero => 0,
            Self::Positive => 1,
        }
    }
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero)
    }
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
}
impl From<SigNum> for i8 {
    fn from(value: SigNum) -> Self {
        value.into_i8()
    }
}
impl Neg for SigNum {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// an arbitrary sized signed number
///
/// stored as sign and magnitude, zero is always [`Sign::Positive`], so the derived
/// equality is the numeric one
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    unsigned: BigUInt,
}

impl std::fmt::Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Number {{ {} ",
            match self.signum() {
                SigNum::Negative => "-",
                SigNum::Zero => "",
                SigNum::Positive => "+",
            }
        )?;
        self.unsigned.inner_debug(f)?;
        write!(f, " }}")
    }
}
impl std::fmt::Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = String::new();
        self.unsigned.write_decimal(&mut buf)?;
        f.pad_integral(!self.is_negative(), "", &buf)
    }
}
impl std::fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = String::new();
        self.unsigned.write_hex(&mut buf, false)?;
        f.pad_integral(!self.is_negative(), "0x", &buf)
    }
}
impl std::fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = String::new();
        self.unsigned.write_hex(&mut buf, true)?;
        f.pad_integral(!self.is_negative(), "0x", &buf)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sign.cmp(&other.sign).then_with(|| {
            let ord = self.unsigned.cmp(&other.unsigned);
            if self.is_negative() {
                ord.reverse()
            } else {
                ord
            }
        })
    }
}
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<PRIMITIVE: Primitive> PartialEq<PRIMITIVE> for BigInt {
    fn eq(&self, other: &PRIMITIVE) -> bool {
        *self == Self::from(*other)
    }
}
impl<PRIMITIVE: Primitive> PartialOrd<PRIMITIVE> for BigInt {
    fn partial_cmp(&self, other: &PRIMITIVE) -> Option<Ordering> {
        Some(self.cmp(&Self::from(*other)))
    }
}

// From traits
impl From<BigUInt> for BigInt {
    fn from(value: BigUInt) -> Self {
        Self::new(Sign::Positive, value)
    }
}
impl<PRIMITIVE: Primitive> From<PRIMITIVE> for BigInt {
    fn from(value: PRIMITIVE) -> Self {
        match value.select_sign() {
            Either::Left(pos) => iter::once(pos).collect::<BigUInt>().into(),
            // `abs` widens to the unsigned type, so `MIN` can't overflow
            Either::Right(neg) => Self::new(
                Sign::from_negative(neg.is_negative()),
                iter::once(neg.abs()).collect(),
            ),
        }
    }
}
impl FromStr for BigInt {
    type Err = ParseError;

    /// parses an optional `-` followed by decimal digits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, digits, offset) = match s.strip_prefix('-') {
            Some("") => return Err(ParseError::LoneSign),
            Some(rest) => (Sign::Negative, rest, 1),
            None => (Sign::Positive, s, 0),
        };
        BigUInt::from_decimal(digits, offset)
            .map(|unsigned| Self::new(sign, unsigned))
            .inspect_err(|err| tracing::trace!(%err, input = s, "rejected number"))
    }
}

// Into traits
impl TryFrom<BigInt> for BigUInt {
    type Error = TryFromBigIntError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        if value.is_negative() {
            return Err(TryFromBigIntError);
        }
        Ok(value.unsigned)
    }
}
macro_rules! implTryIntoPrimitive {
    (unsigned $($target:ty),*) => {$(
        impl TryFrom<&BigInt> for $target {
            type Error = TryFromBigIntError;

            fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
                if value.is_negative() {
                    return Err(TryFromBigIntError);
                }
                Self::try_from(&value.unsigned)
            }
        }
        impl TryFrom<BigInt> for $target {
            type Error = TryFromBigIntError;

            fn try_from(value: BigInt) -> Result<Self, Self::Error> {
                Self::try_from(&value)
            }
        }
    )*};
    (signed $($target:ty),*) => {$(
        impl TryFrom<&BigInt> for $target {
            type Error = TryFromBigIntError;

            fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
                value
                    .to_i128()
                    .and_then(<$target as INum>::try_from_i128)
                    .ok_or(TryFromBigIntError)
            }
        }
        impl TryFrom<BigInt> for $target {
            type Error = TryFromBigIntError;

            fn try_from(value: BigInt) -> Result<Self, Self::Error> {
                Self::try_from(&value)
            }
        }
    )*};
}
implTryIntoPrimitive!(unsigned u8, u16, u32, u64, u128, usize);
implTryIntoPrimitive!(signed i8, i16, i32, i64, i128, isize);

impl BigInt {
    pub const ZERO: Self = Self::from_unsigned(BigUInt::ZERO);
    pub const ONE: Self = Self::from_unsigned(BigUInt::ONE);
    pub const NEG_ONE: Self = Self {
        sign: Sign::Negative,
        unsigned: BigUInt::ONE,
    };

    /// builds a number out of its parts, a zero magnitude always ends up positive
    pub fn new(sign: Sign, unsigned: BigUInt) -> Self {
        let sign = if unsigned.is_zero() {
            Sign::Positive
        } else {
            sign
        };
        Self { sign, unsigned }
    }
    const fn from_unsigned(unsigned: BigUInt) -> Self {
        Self {
            sign: Sign::Positive,
            unsigned,
        }
    }
    /// generate a new random number with a random sign and at least `bytes.start()` and at most `bytes.end()` bytes of information
    pub fn new_random(bytes: RangeInclusive<usize>, mut rng: impl RngCore) -> Self {
        let sign = Sign::from_negative(rng.next_u32() & 1 == 1);
        Self::new(sign, BigUInt::new_random(bytes, rng))
    }

    pub const fn sign(&self) -> Sign {
        self.sign
    }
    pub const fn signum(&self) -> SigNum {
        match (self.sign, self.unsigned.signum()) {
            (_, SigNum::Zero) => SigNum::Zero,
            (Sign::Negative, _) => SigNum::Negative,
            (Sign::Positive, _) => SigNum::Positive,
        }
    }
    /// the magnitude
    pub const fn abs(&self) -> &BigUInt {
        &self.unsigned
    }
    pub fn into_parts(self) -> (Sign, BigUInt) {
        (self.sign, self.unsigned)
    }
    pub const fn is_zero(&self) -> bool {
        self.unsigned.is_zero()
    }
    pub fn is_one(&self) -> bool {
        self.sign.is_positive() && self.unsigned.is_one()
    }
    pub const fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }
    /// strictly bigger than zero
    pub const fn is_positive(&self) -> bool {
        self.signum().is_positive()
    }
    pub fn is_even(&self) -> bool {
        self.unsigned.is_even()
    }
    /// the number of significant bits of the magnitude
    pub fn bits(&self) -> usize {
        self.unsigned.bits()
    }

    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
    }
    pub fn increment(&mut self) {
        *self = Self::add(Boo::Owned(std::mem::take(self)), Boo::Borrowed(&Self::ONE));
    }
    pub fn decrement(&mut self) {
        *self = Self::sub(Boo::Owned(std::mem::take(self)), Boo::Borrowed(&Self::ONE));
    }

    /// computes (`self` / `rhs`, `self` % `rhs`) with truncating division,
    /// so the remainder has the sign of `self`
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), DivisionByZero> {
        Self::div_mod(Boo::from(self), Boo::from(rhs))
    }
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, DivisionByZero> {
        self.div_rem(rhs).map(|(q, _)| q)
    }
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, DivisionByZero> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// the magnitude as base64, the sign needs to be stored separately
    #[cfg(feature = "base64")]
    pub fn as_base64(&self, engine: &impl base64::Engine) -> (Sign, String) {
        (self.sign, self.unsigned.as_base64(engine))
    }
    #[cfg(feature = "base64")]
    pub fn from_base64(
        sign: Sign,
        data: impl AsRef<[u8]>,
        engine: &impl base64::Engine,
    ) -> Result<Self, base64::DecodeError> {
        BigUInt::from_base64(data, engine).map(|unsigned| Self::new(sign, unsigned))
    }

    // inner utils
    fn to_i128(&self) -> Option<i128> {
        let magnitude = u128::try_from(&self.unsigned).ok()?;
        if self.is_negative() {
            0i128.checked_sub_unsigned(magnitude)
        } else {
            i128::try_from(magnitude).ok()
        }
    }
    fn split(value: Boo<'_, Self>) -> (Sign, Boo<'_, BigUInt>) {
        let sign = value.sign;
        (sign, value.map(|it| it.unsigned, |it| &it.unsigned))
    }

    // math engine
    fn add_parts(
        (lhs_sign, lhs): (Sign, Boo<'_, BigUInt>),
        (rhs_sign, rhs): (Sign, Boo<'_, BigUInt>),
    ) -> Self {
        if lhs_sign == rhs_sign {
            return Self::new(lhs_sign, BigUInt::add(lhs, rhs));
        }
        // different signs, the bigger magnitude wins
        if *lhs >= *rhs {
            Self::new(lhs_sign, BigUInt::sub(lhs, rhs))
        } else {
            Self::new(rhs_sign, BigUInt::sub(rhs, lhs))
        }
    }
    pub(crate) fn add(lhs: Boo<'_, Self>, rhs: Boo<'_, Self>) -> Self {
        Self::add_parts(Self::split(lhs), Self::split(rhs))
    }
    pub(crate) fn sub(lhs: Boo<'_, Self>, rhs: Boo<'_, Self>) -> Self {
        let (rhs_sign, rhs) = Self::split(rhs);
        Self::add_parts(Self::split(lhs), (-rhs_sign, rhs))
    }
    pub(crate) fn mul(lhs: Boo<'_, Self>, rhs: Boo<'_, Self>) -> Self {
        let (lhs_sign, lhs) = Self::split(lhs);
        let (rhs_sign, rhs) = Self::split(rhs);
        Self::new(lhs_sign * rhs_sign, BigUInt::mul(lhs, rhs))
    }

    /// truncating division, the quotient rounds towards zero
    pub(crate) fn div_mod(
        lhs: Boo<'_, Self>,
        rhs: Boo<'_, Self>,
    ) -> Result<(Self, Self), DivisionByZero> {
        #[cfg(debug_assertions)]
        let (n, d) = ((*lhs).clone(), (*rhs).clone());

        let (lhs_sign, lhs) = Self::split(lhs);
        let (rhs_sign, rhs) = Self::split(rhs);
        let (q, r) = BigUInt::div_mod(lhs, rhs)?;
        let (q, r) = (Self::new(lhs_sign * rhs_sign, q), Self::new(lhs_sign, r));

        #[cfg(debug_assertions)]
        {
            debug_assert!(r.abs() < d.abs(), "|{r}| >= |{d}|");
            debug_assert_eq!(&q * &d + &r, n, "q * d + r != n");
        }
        Ok((q, r))
    }
    pub(crate) fn div(lhs: Boo<'_, Self>, rhs: Boo<'_, Self>) -> Self {
        match Self::div_mod(lhs, rhs) {
            Ok((q, _)) => q,
            Err(err) => panic!("{err}"),
        }
    }
    pub(crate) fn rem(lhs: Boo<'_, Self>, rhs: Boo<'_, Self>) -> Self {
        match Self::div_mod(lhs, rhs) {
            Ok((_, r)) => r,
            Err(err) => panic!("{err}"),
        }
    }

    pub(crate) fn shl(lhs: Boo<'_, Self>, rhs: usize) -> Self {
        let (sign, lhs) = Self::split(lhs);
        Self::new(sign, BigUInt::shl(lhs, rhs))
    }
    /// arithmetic shift, negative numbers round towards negative infinity
    pub(crate) fn shr(lhs: Boo<'_, Self>, rhs: usize) -> Self {
        let (sign, lhs) = Self::split(lhs);
        let (mut unsigned, lost_bits) = BigUInt::shr_internal(lhs, rhs);
        if sign.is_negative() && lost_bits {
            unsigned = BigUInt::add_digit(Boo::Owned(unsigned), 1);
        }
        Self::new(sign, unsigned)
    }
    /// a negative `rhs` shifts to the right
    pub(crate) fn shl_signed(lhs: Boo<'_, Self>, rhs: i32) -> Self {
        if rhs < 0 {
            Self::shr(lhs, rhs.unsigned_abs() as usize)
        } else {
            Self::shl(lhs, rhs as usize)
        }
    }
    /// a negative `rhs` shifts to the left
    pub(crate) fn shr_signed(lhs: Boo<'_, Self>, rhs: i32) -> Self {
        if rhs < 0 {
            Self::shl(lhs, rhs.unsigned_abs() as usize)
        } else {
            Self::shr(lhs, rhs as usize)
        }
    }

    fn bit_op(lhs: &Self, rhs: &Self, op: BitOp) -> Self {
        let (negative, digits) = math_algos::bit_math::apply(
            op,
            (lhs.is_negative(), lhs.unsigned.limbs()),
            (rhs.is_negative(), rhs.unsigned.limbs()),
        );
        Self::new(Sign::from_negative(negative), BigUInt::from_vec(digits))
    }
    pub(crate) fn bitand(lhs: Boo<'_, Self>, rhs: Boo<'_, Self>) -> Self {
        Self::bit_op(&lhs, &rhs, BitOp::And)
    }
    pub(crate) fn bitor(lhs: Boo<'_, Self>, rhs: Boo<'_, Self>) -> Self {
        Self::bit_op(&lhs, &rhs, BitOp::Or)
    }
    pub(crate) fn bitxor(lhs: Boo<'_, Self>, rhs: Boo<'_, Self>) -> Self {
        Self::bit_op(&lhs, &rhs, BitOp::Xor)
    }
    /// `!x == -x - 1` in infinite two's complement
    pub(crate) fn not(value: Boo<'_, Self>) -> Self {
        let mut out = value.cloned();
        out.negate();
        out.decrement();
        out
    }
    pub(crate) fn neg(value: Boo<'_, Self>) -> Self {
        let mut out = value.cloned();
        out.negate();
        out
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::neg(Boo::from(self))
    }
}
impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        BigInt::neg(Boo::from(self))
    }
}
impl Not for BigInt {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::not(Boo::from(self))
    }
}
impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        BigInt::not(Boo::from(self))
    }
}

macro_rules! implBigMath {
    ($assign_trait:ident, $assign_func:ident, $trait:ident, $func:ident) => {
        impl $trait<BigInt> for BigInt {
            implBigMath!(body $func, BigInt);
        }
        impl $trait<&BigInt> for BigInt {
            implBigMath!(body $func, &BigInt);
        }
        impl $trait<BigInt> for &BigInt {
            implBigMath!(body $func, BigInt);
        }
        impl $trait<&BigInt> for &BigInt {
            implBigMath!(body $func, &BigInt);
        }
        impl $assign_trait<BigInt> for BigInt {
            fn $assign_func(&mut self, rhs: BigInt) {
                *self = BigInt::$func(Boo::Owned(std::mem::take(self)), Boo::from(rhs));
            }
        }
        impl $assign_trait<&BigInt> for BigInt {
            fn $assign_func(&mut self, rhs: &BigInt) {
                *self = BigInt::$func(Boo::Owned(std::mem::take(self)), Boo::from(rhs));
            }
        }
    };
    ($assign_trait:ident, $assign_func:ident, $trait:ident, $func:ident, $ref_func:ident, $rhs:ty) => {
        impl $trait<$rhs> for BigInt {
            type Output = BigInt;
            fn $func(self, rhs: $rhs) -> Self::Output {
                BigInt::$ref_func(Boo::from(self), rhs)
            }
        }
        impl $trait<$rhs> for &BigInt {
            type Output = BigInt;
            fn $func(self, rhs: $rhs) -> Self::Output {
                BigInt::$ref_func(Boo::from(self), rhs)
            }
        }
        impl $assign_trait<$rhs> for BigInt {
            fn $assign_func(&mut self, rhs: $rhs) {
                *self = BigInt::$ref_func(Boo::Owned(std::mem::take(self)), rhs);
            }
        }
    };
    (body $func:ident, $rhs:ty) => {
        type Output = BigInt;
        fn $func(self, rhs: $rhs) -> Self::Output {
            BigInt::$func(Boo::from(self), Boo::from(rhs))
        }
    };
}
implBigMath!(BitOrAssign, bitor_assign, BitOr, bitor);
implBigMath!(BitXorAssign, bitxor_assign, BitXor, bitxor);
implBigMath!(BitAndAssign, bitand_assign, BitAnd, bitand);
implBigMath!(ShlAssign, shl_assign, Shl, shl, shl, usize);
implBigMath!(ShrAssign, shr_assign, Shr, shr, shr, usize);
implBigMath!(ShlAssign, shl_assign, Shl, shl, shl_signed, i32);
implBigMath!(ShrAssign, shr_assign, Shr, shr, shr_signed, i32);
implBigMath!(SubAssign, sub_assign, Sub, sub);
implBigMath!(AddAssign, add_assign, Add, add);
implBigMath!(MulAssign, mul_assign, Mul, mul);
implBigMath!(DivAssign, div_assign, Div, div);
implBigMath!(RemAssign, rem_assign, Rem, rem);
