// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use crate::{
    big_int::{
        digits::{self, Limb},
        limbs::Limbs,
        math_algos::{self, bit_math::BitOp},
        primitive::{Primitive, UNum},
    },
    error::{DivisionByZero, ParseError, TryFromBigIntError},
    util::{boo::Boo, rng},
    BigIInt, SigNum, Sign,
};

use itertools::{Itertools, Position};
use rand::RngCore;
use std::{
    fmt::{Debug, Write},
    iter,
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
        DivAssign, Mul, MulAssign, RangeInclusive, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign,
        Sub, SubAssign,
    },
    str::FromStr,
};

/// the biggest power of ten that fits into a [`Limb`]
const DECIMAL_CHUNK: Limb = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

/// an arbitrary sized unsigned number
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// holds the digits in LE order
    pub(super) digits: Limbs,
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Number {{ ")?;
        self.inner_debug(f)?;
        write!(f, " }}")
    }
}
impl std::fmt::Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = String::new();
        self.write_decimal(&mut buf)?;
        f.pad_integral(true, "", &buf)
    }
}
impl std::fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = String::new();
        self.write_hex(&mut buf, false)?;
        f.pad_integral(true, "0x", &buf)
    }
}
impl std::fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = String::new();
        self.write_hex(&mut buf, true)?;
        f.pad_integral(true, "0x", &buf)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        math_algos::cmp::magnitude(self.digits.as_slice(), other.digits.as_slice())
    }
}
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// From traits
impl<POSITIVE: UNum> FromIterator<POSITIVE> for BigInt {
    /// the iter should contain the parts in little endian order
    fn from_iter<T: IntoIterator<Item = POSITIVE>>(iter: T) -> Self {
        Self::from_vec(digits::from_le_bytes(
            iter.into_iter().flat_map(Primitive::to_le_bytes),
        ))
    }
}
cfg_if::cfg_if! {
    if #[cfg(all(
        feature = "uintFromAbsIPrimitive",
        feature = "uintFromAssertIPrimitive"
    ))] {
        compile_error!("feature \"uintFromAbsIPrimitive\" and feature \"uintFromAssertIPrimitive\" cannot be enabled at the same time");
    } else if #[cfg(any(
        feature = "uintFromAbsIPrimitive",
        feature = "uintFromAssertIPrimitive"
    ))] {
        use crate::big_int::primitive::INum;
        use itertools::Either;
        impl<PRIMITIVE: Primitive> From<PRIMITIVE> for BigInt {
            fn from(value: PRIMITIVE) -> Self {
                match value.select_sign() {
                    Either::Left(pos) => iter::once(pos).collect(),
                    Either::Right(neg) => {
                        #[cfg(feature = "uintFromAssertIPrimitive")]
                        assert!(!neg.is_negative(), "tried to get BigUInt from {value} < 0");
                        iter::once(neg.abs()).collect()
                    }
                }
            }
        }
    } else {
        impl<POSITIVE: UNum> From<POSITIVE> for BigInt {
            fn from(pos: POSITIVE) -> Self {
                iter::once(pos).collect()
            }
        }
    }
}

impl FromStr for BigInt {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s, 0)
    }
}

// Into traits
macro_rules! implTryIntoPrimitive {
    ($($target:ty),*) => {$(
        impl TryFrom<&BigInt> for $target {
            type Error = TryFromBigIntError;

            fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
                value
                    .to_u128()
                    .and_then(<$target as UNum>::try_from_u128)
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
implTryIntoPrimitive!(u8, u16, u32, u64, u128, usize);

impl BigInt {
    pub const ZERO: Self = Self::from_digit(0);
    pub const ONE: Self = Self::from_digit(1);

    pub const fn from_digit(value: Limb) -> Self {
        Self {
            digits: Limbs::from_single(value),
        }
    }
    /// builds a number from LE limbs, leading zeros get removed
    pub fn from_digits(iter: impl IntoIterator<Item = Limb>) -> Self {
        Self {
            digits: iter.into_iter().collect(),
        }
    }
    pub(crate) fn from_vec(digits: Vec<Limb>) -> Self {
        Self {
            digits: Limbs::from_vec(digits),
        }
    }
    /// generate a new random number with at least `bytes.start()` and at most `bytes.end()` bytes of information
    pub fn new_random(bytes: RangeInclusive<usize>, mut rng: impl RngCore) -> Self {
        let bytes = bytes.start() + rng::next_bound(bytes.end() - bytes.start(), &mut rng, None);
        if bytes == 0 {
            return Self::ZERO;
        }
        let mut rnd_bytes = rng::random_bytes(rng);
        // the most significant byte needs to be set, so the number really has `bytes` bytes
        let last = rnd_bytes
            .by_ref()
            .take(5)
            .find(|&it| it > 0)
            .unwrap_or(1);
        rnd_bytes.take(bytes - 1).chain(iter::once(last)).collect()
    }

    /// the limbs in LE order
    pub fn limbs(&self) -> &[Limb] {
        self.digits.as_slice()
    }
    pub const fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }
    pub fn is_one(&self) -> bool {
        *self == Self::ONE
    }
    pub fn is_even(&self) -> bool {
        self.digits.first() & 1 == 0
    }
    /// the number of significant bits, zero has none
    pub fn bits(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        self.digits.len() * digits::BITS - self.digits.last().leading_zeros() as usize
    }
    pub const fn signum(&self) -> SigNum {
        if self.is_zero() {
            SigNum::Zero
        } else {
            SigNum::Positive
        }
    }
    pub fn with_sign(self, sign: Sign) -> BigIInt {
        BigIInt::new(sign, self)
    }

    /// computes (`self` / `rhs`, `self` % `rhs`) with one division
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), DivisionByZero> {
        Self::div_mod(Boo::from(self), Boo::from(rhs))
    }

    #[cfg(feature = "base64")]
    pub fn as_base64(&self, engine: &impl base64::Engine) -> String {
        engine.encode(self.digits.iter().flat_map(|it| it.to_le_bytes()).collect_vec())
    }
    #[cfg(feature = "base64")]
    pub fn from_base64(
        data: impl AsRef<[u8]>,
        engine: &impl base64::Engine,
    ) -> Result<Self, base64::DecodeError> {
        engine.decode(data).map(Self::from_iter)
    }

    // inner utils
    fn to_u128(&self) -> Option<u128> {
        if self.digits.len() * digits::BYTES > u128::BYTES {
            return None;
        }
        Some(
            self.digits
                .iter()
                .rev()
                .fold(0, |acc, &it| (acc << digits::BITS) | u128::from(it)),
        )
    }
    pub(crate) fn into_digits(value: Boo<'_, Self>) -> Vec<Limb> {
        value.cloned().digits.into_vec()
    }

    pub(super) fn inner_debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x[")?;
        for (pos, elem) in self.digits.iter().rev().with_position() {
            write!(f, "{elem:0size$x}", size = digits::BYTES * 2)?;
            if matches!(pos, Position::First | Position::Middle) {
                f.write_str(", ")?;
            }
        }
        write!(f, "]")
    }
    /// writes the decimal digits, by repeatedly splitting of chunks of 9 digits
    pub(super) fn write_decimal(&self, buf: &mut impl Write) -> std::fmt::Result {
        let mut rest = self.digits.as_slice().to_vec();
        let mut chunks = Vec::new();
        loop {
            chunks.push(math_algos::div::assign_digit(&mut rest, DECIMAL_CHUNK));
            if rest == [0] {
                break;
            }
        }
        for (pos, chunk) in chunks.into_iter().rev().with_position() {
            if matches!(pos, Position::First | Position::Only) {
                write!(buf, "{chunk}")?;
            } else {
                write!(buf, "{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS)?;
            }
        }
        Ok(())
    }
    pub(super) fn write_hex(&self, buf: &mut impl Write, upper: bool) -> std::fmt::Result {
        for (pos, digit) in self.digits.iter().rev().with_position() {
            let first = matches!(pos, Position::First | Position::Only);
            match (first, upper) {
                (true, false) => write!(buf, "{digit:x}"),
                (true, true) => write!(buf, "{digit:X}"),
                (false, false) => write!(buf, "{digit:08x}"),
                (false, true) => write!(buf, "{digit:08X}"),
            }?;
        }
        Ok(())
    }
    /// parses ascii decimal digits only, `offset` gets added to reported positions
    pub(super) fn from_decimal(s: &str, offset: usize) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some((position, digit)) = s.chars().enumerate().find(|(_, it)| !it.is_ascii_digit())
        {
            return Err(ParseError::InvalidDigit {
                digit,
                position: position + offset,
            });
        }

        let bytes = s.as_bytes();
        let head = bytes.len() % DECIMAL_CHUNK_DIGITS;
        let chunks = iter::once(&bytes[..head])
            .filter(|it| !it.is_empty())
            .chain(bytes[head..].chunks(DECIMAL_CHUNK_DIGITS));

        let mut digits = vec![0];
        for chunk in chunks {
            let value = chunk
                .iter()
                .fold(0, |acc, &it| acc * 10 + Limb::from(it - b'0'));
            math_algos::mul::assign_digit(&mut digits, Limb::pow(10, chunk.len() as u32));
            math_algos::add::assign_digit(&mut digits, value);
        }
        Ok(Self::from_vec(digits))
    }

    // math engine, owned operands hand over their buffers
    pub(crate) fn add(lhs: Boo<'_, Self>, rhs: Boo<'_, Self>) -> Self {
        let (lhs, rhs) = if !lhs.is_owned() && rhs.is_owned() {
            (rhs, lhs)
        } else {
            (lhs, rhs)
        };
        let mut digits = Self::into_digits(lhs);
        math_algos::add::assign(&mut digits, rhs.limbs());
        Self::from_vec(digits)
    }
    pub(crate) fn add_digit(lhs: Boo<'_, Self>, rhs: Limb) -> Self {
        let mut digits = Self::into_digits(lhs);
        math_algos::add::assign_digit(&mut digits, rhs);
        Self::from_vec(digits)
    }
    /// `lhs` - `rhs`, panics if the result would be negative
    pub(crate) fn sub(lhs: Boo<'_, Self>, rhs: Boo<'_, Self>) -> Self {
        assert!(*lhs >= *rhs, "attempt to subtract with overflow");
        let mut digits = Self::into_digits(lhs);
        math_algos::sub::assign_smaller(&mut digits, rhs.limbs());
        Self::from_vec(digits)
    }
    pub(crate) fn mul(lhs: Boo<'_, Self>, rhs: Boo<'_, Self>) -> Self {
        if lhs.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }
        if let Limbs::One(digit) = lhs.digits {
            return Self::mul_by_digit(rhs, digit);
        }
        if let Limbs::One(digit) = rhs.digits {
            return Self::mul_by_digit(lhs, digit);
        }
        Self::from_vec(math_algos::mul::naive(lhs.limbs(), rhs.limbs()))
    }
    pub(crate) fn mul_by_digit(lhs: Boo<'_, Self>, rhs: Limb) -> Self {
        let mut digits = Self::into_digits(lhs);
        math_algos::mul::assign_digit(&mut digits, rhs);
        Self::from_vec(digits)
    }

    /// computes (`lhs` / `rhs`, `lhs` % `rhs`)
    pub(crate) fn div_mod(
        lhs: Boo<'_, Self>,
        rhs: Boo<'_, Self>,
    ) -> Result<(Self, Self), DivisionByZero> {
        if rhs.is_zero() {
            return Err(DivisionByZero);
        }
        if *lhs < *rhs {
            return Ok((Self::ZERO, lhs.cloned()));
        }

        let (q, r) = match &rhs.digits {
            &Limbs::One(divisor) => {
                tracing::trace!(dividend = lhs.digits.len(), "dividing by a single limb");
                let mut digits = Self::into_digits(lhs);
                let remainder = math_algos::div::assign_digit(&mut digits, divisor);
                (Self::from_vec(digits), Self::from_digit(remainder))
            }
            Limbs::Other(divisor) => {
                tracing::trace!(
                    dividend = lhs.digits.len(),
                    divisor = divisor.len(),
                    "dividing with normalized long division"
                );
                let (q, r) =
                    math_algos::div::normalized_schoolbook(Self::into_digits(lhs), divisor);
                (Self::from_vec(q), Self::from_vec(r))
            }
        };
        debug_assert!(r < *rhs, "remainder {r} isn't smaller than {}", *rhs);
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
        Self::from_vec(math_algos::shift::shl(lhs.limbs(), rhs))
    }
    pub(crate) fn shr(lhs: Boo<'_, Self>, rhs: usize) -> Self {
        Self::shr_internal(lhs, rhs).0
    }
    /// shifts right and reports if any set bit got lost
    pub(crate) fn shr_internal(lhs: Boo<'_, Self>, rhs: usize) -> (Self, bool) {
        let (digits, lost_bits) = math_algos::shift::shr(lhs.limbs(), rhs);
        (Self::from_vec(digits), lost_bits)
    }

    fn bit_op(lhs: &Self, rhs: &Self, op: BitOp) -> Self {
        let (negative, digits) =
            math_algos::bit_math::apply(op, (false, lhs.limbs()), (false, rhs.limbs()));
        debug_assert!(!negative, "two positive numbers gave a negative one");
        Self::from_vec(digits)
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
    ($assign_trait:ident, $assign_func:ident, $trait:ident, $func:ident, $rhs:ty) => {
        impl $trait<$rhs> for BigInt {
            type Output = BigInt;
            fn $func(self, rhs: $rhs) -> Self::Output {
                BigInt::$func(Boo::from(self), rhs)
            }
        }
        impl $trait<$rhs> for &BigInt {
            type Output = BigInt;
            fn $func(self, rhs: $rhs) -> Self::Output {
                BigInt::$func(Boo::from(self), rhs)
            }
        }
        impl $assign_trait<$rhs> for BigInt {
            fn $assign_func(&mut self, rhs: $rhs) {
                *self = BigInt::$func(Boo::Owned(std::mem::take(self)), rhs);
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
implBigMath!(ShlAssign, shl_assign, Shl, shl, usize);
implBigMath!(ShrAssign, shr_assign, Shr, shr, usize);
implBigMath!(SubAssign, sub_assign, Sub, sub);
implBigMath!(AddAssign, add_assign, Add, add);
implBigMath!(MulAssign, mul_assign, Mul, mul);
implBigMath!(DivAssign, div_assign, Div, div);
implBigMath!(RemAssign, rem_assign, Rem, rem);
