// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
//! slice level algorithms on magnitudes, every number is a LE sequence of [`Limb`]s
#![allow(clippy::wildcard_imports)]
use super::{
    digits::{Digit, Limb, Split, Wide, BITS},
    limbs::truncate_leading_zeros,
};
use itertools::Itertools;
use std::cmp::Ordering;

const BASE: Wide = 1 << BITS;

pub mod cmp {
    use super::*;

    /// compares two normalized magnitudes, first by length then from the most significant limb down
    pub fn magnitude(lhs: &[Limb], rhs: &[Limb]) -> Ordering {
        lhs.len()
            .cmp(&rhs.len())
            .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
    }
}

pub mod add {
    use super::*;

    /// calculates `lhs` += `rhs`
    pub fn assign(lhs: &mut Vec<Limb>, rhs: &[Limb]) {
        if lhs.len() < rhs.len() {
            lhs.resize(rhs.len(), 0);
        }

        let mut carry = false;
        for elem in lhs.iter_mut().zip_longest(rhs.iter()) {
            use itertools::EitherOrBoth as E;
            let (lhs_digit, rhs_digit) = match elem {
                E::Right(_rhs) => unreachable!("lhs was extended"),
                E::Left(_digit) if !carry => {
                    break;
                }
                E::Left(digit) => (digit, 0),
                E::Both(digit, &rhs) => (digit, rhs),
            };
            (*lhs_digit, carry) = lhs_digit.add_with_carry(rhs_digit, carry);
        }
        if carry {
            lhs.push(1);
        }
    }
    pub fn assign_digit(lhs: &mut Vec<Limb>, rhs: Limb) {
        assign(lhs, &[rhs]);
    }
}

pub mod sub {
    use super::*;

    /// calculates `lhs` -= `rhs`, `lhs` needs to be the bigger number
    pub fn assign_smaller(lhs: &mut Vec<Limb>, rhs: &[Limb]) {
        debug_assert!(
            cmp::magnitude(lhs, rhs).is_ge(),
            "lhs {lhs:?} is smaller than rhs {rhs:?}"
        );

        let mut borrow = false;
        for elem in lhs.iter_mut().zip_longest(rhs.iter()) {
            use itertools::EitherOrBoth as E;
            let (lhs_digit, rhs_digit) = match elem {
                E::Right(_rhs) => unreachable!("lhs is always bigger"),
                E::Left(_digit) if !borrow => {
                    break;
                }
                E::Left(digit) => (digit, 0),
                E::Both(digit, &rhs) => (digit, rhs),
            };
            (*lhs_digit, borrow) = lhs_digit.sub_with_borrow(rhs_digit, borrow);
        }
        debug_assert!(!borrow, "subtraction underflowed");
        truncate_leading_zeros(lhs);
    }
}

pub mod mul {
    use super::*;

    /// schoolbook multiplication, accumulates every partial product at its combined offset
    pub fn naive(lhs: &[Limb], rhs: &[Limb]) -> Vec<Limb> {
        // try to minimize outer loops
        if lhs.len() < rhs.len() {
            return naive(rhs, lhs);
        }
        let mut out = vec![0; lhs.len() + rhs.len()];
        for (i, &rhs_digit) in rhs.iter().enumerate() {
            if rhs_digit == 0 {
                continue;
            }
            let mut carry = 0;
            for (j, &lhs_digit) in lhs.iter().enumerate() {
                // (2^n-1)^2 + 2 * (2^n-1) = 2^2n - 1, so this can't overflow
                let wide = lhs_digit.mul_wide(rhs_digit, carry) + Wide::widen(out[i + j]);
                (out[i + j], carry) = wide.split_le();
            }
            out[i + lhs.len()] = carry;
        }
        truncate_leading_zeros(&mut out);
        out
    }

    pub fn assign_digit(lhs: &mut Vec<Limb>, rhs: Limb) {
        let mut carry = 0;
        for digit in lhs.iter_mut() {
            (*digit, carry) = digit.mul_wide(rhs, carry).split_le();
        }
        lhs.push(carry);
        truncate_leading_zeros(lhs);
    }
}

pub mod div {
    use super::*;

    /// divides `lhs` in place, sweeping from the most significant limb down.
    /// Returns the remainder
    pub fn assign_digit(lhs: &mut Vec<Limb>, rhs: Limb) -> Limb {
        assert_ne!(rhs, 0, "can't divide by zero");
        let divisor = Wide::widen(rhs);
        let mut remainder = 0;
        for digit in lhs.iter_mut().rev() {
            let current = Wide::new(*digit, remainder);
            *digit = (current / divisor) as Limb;
            remainder = (current % divisor) as Limb;
        }
        truncate_leading_zeros(lhs);
        remainder
    }

    /// the factor that lifts the most significant limb of `divisor` to at least `2^(BITS-1)`
    /// without growing its length
    pub fn normalization_factor(divisor: &[Limb]) -> Limb {
        let top = divisor.last().copied().unwrap_or_default();
        (BASE / (Wide::widen(top) + 1)) as Limb
    }

    /// computes (`lhs` / `rhs`, `lhs` % `rhs`) for a divisor with at least two limbs
    ///
    /// both need to be normalized and `lhs` >= `rhs`
    pub fn normalized_schoolbook(mut lhs: Vec<Limb>, rhs: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
        assert!(rhs.len() >= 2, "single limb divisors need to use `assign_digit`");
        let factor = normalization_factor(rhs);
        let mut rhs_scaled = rhs.to_vec();
        mul::assign_digit(&mut lhs, factor);
        mul::assign_digit(&mut rhs_scaled, factor);
        debug_assert_eq!(rhs_scaled.len(), rhs.len(), "scaling grew the divisor");

        let (q, mut r) = schoolbook(lhs, &rhs_scaled);
        // the quotient is unchanged, but the remainder is still scaled
        let rest = assign_digit(&mut r, factor);
        debug_assert_eq!(rest, 0, "scaled remainder wasn't a multiple of {factor}");
        (q, r)
    }

    /// Knuth's Algorithm D on a divisor with its most significant bit set
    #[allow(clippy::many_single_char_names)]
    pub(super) fn schoolbook(mut u: Vec<Limb>, v: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
        let n = v.len();
        assert!(n >= 2, "divisor needs at least two limbs");
        assert!(
            v[n - 1] >> (BITS - 1) == 1,
            "base^{n}/2 <= {v:?} < base^{n} failed"
        );
        if u.len() < n {
            return (vec![0], u);
        }

        let m = u.len() - n;
        // the estimation always looks at one more limb than the divisor has
        u.push(0);
        let mut q = vec![0; m + 1];
        let (v_1, v_2) = (Wide::widen(v[n - 1]), Wide::widen(v[n - 2]));

        for j in (0..=m).rev() {
            let top = Wide::new(u[j + n - 1], u[j + n]);
            let mut q_hat = top / v_1;
            let mut r_hat = top % v_1;
            // at most two corrections, as the divisor is normalized
            while q_hat >= BASE || q_hat * v_2 > Wide::new(u[j + n - 2], r_hat as Limb) {
                q_hat -= 1;
                r_hat += v_1;
                if r_hat >= BASE {
                    break;
                }
            }

            let mut carry = 0;
            let mut borrow = false;
            for (i, &v_i) in v.iter().enumerate() {
                let (product, next_carry) = v_i.mul_wide(q_hat as Limb, carry).split_le();
                carry = next_carry;
                (u[i + j], borrow) = u[i + j].sub_with_borrow(product, borrow);
            }
            (u[j + n], borrow) = u[j + n].sub_with_borrow(carry, borrow);

            if borrow {
                // q_hat was still one too big, add one divisor back
                q_hat -= 1;
                let mut carry = false;
                for (i, &v_i) in v.iter().enumerate() {
                    (u[i + j], carry) = u[i + j].add_with_carry(v_i, carry);
                }
                u[j + n] = u[j + n].wrapping_add(Limb::from(carry));
            }
            q[j] = q_hat as Limb;
        }

        truncate_leading_zeros(&mut q);
        u.truncate(n);
        truncate_leading_zeros(&mut u);
        (q, u)
    }
}

pub mod shift {
    use super::*;

    /// calculates `digits` * 2^`shift`
    pub fn shl(digits: &[Limb], shift: usize) -> Vec<Limb> {
        let (full, partial) = (shift / BITS, shift % BITS);

        let mut out = Vec::with_capacity(full + digits.len() + 1);
        out.resize(full, 0);
        let mut carry = 0;
        for &digit in digits {
            let (res, next_carry) = digit.shl_wide(partial, carry).split_le();
            out.push(res);
            carry = next_carry;
        }
        out.push(carry);
        truncate_leading_zeros(&mut out);
        out
    }

    /// calculates `digits` / 2^`shift` and reports if any set bit got shifted out
    pub fn shr(digits: &[Limb], shift: usize) -> (Vec<Limb>, bool) {
        let (full, partial) = (shift / BITS, shift % BITS);
        if full >= digits.len() {
            return (vec![0], digits.iter().any(|&it| it != 0));
        }

        let (lost, kept) = digits.split_at(full);
        let mut out = kept.to_vec();
        let mut carry = 0;
        for digit in out.iter_mut().rev() {
            let (next_carry, res) = digit.shr_wide(partial, carry).split_le();
            *digit = res;
            carry = next_carry;
        }
        truncate_leading_zeros(&mut out);
        (out, carry != 0 || lost.iter().any(|&it| it != 0))
    }
}

pub mod bit_math {
    use super::*;

    /// the limb wise operations, all share one combining routine
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BitOp {
        And,
        Or,
        Xor,
    }
    impl BitOp {
        pub const fn apply(self, lhs: Limb, rhs: Limb) -> Limb {
            match self {
                Self::And => lhs & rhs,
                Self::Or => lhs | rhs,
                Self::Xor => lhs ^ rhs,
            }
        }
    }

    /// invert and add one
    fn negate_in_place(digits: &mut [Limb]) {
        let mut carry = true;
        for digit in digits.iter_mut() {
            (*digit, carry) = (!*digit).add_with_carry(0, carry);
        }
    }

    /// writes the magnitude as the lowest `len` limbs of an infinite two's complement number
    ///
    /// `len` needs to be bigger than `magnitude`, so the top limb only holds sign bits
    pub fn to_twos_complement(negative: bool, magnitude: &[Limb], len: usize) -> Vec<Limb> {
        debug_assert!(len > magnitude.len(), "no room for the sign limb");
        let mut out = magnitude.to_vec();
        out.resize(len, 0);
        if negative {
            negate_in_place(&mut out);
        }
        out
    }
    /// reads a two's complement number back as (is negative, magnitude)
    pub fn from_twos_complement(mut digits: Vec<Limb>) -> (bool, Vec<Limb>) {
        let negative = digits.last().is_some_and(|&it| it >> (BITS - 1) == 1);
        if negative {
            negate_in_place(&mut digits);
        }
        truncate_leading_zeros(&mut digits);
        (negative, digits)
    }

    /// applies `op` as if both numbers were stored in infinite two's complement,
    /// the missing limbs of the shorter number are its sign bits
    pub fn apply(
        op: BitOp,
        (lhs_negative, lhs): (bool, &[Limb]),
        (rhs_negative, rhs): (bool, &[Limb]),
    ) -> (bool, Vec<Limb>) {
        let len = lhs.len().max(rhs.len()) + 1;
        let mut out = to_twos_complement(lhs_negative, lhs, len);
        let rhs = to_twos_complement(rhs_negative, rhs, len);
        for (digit, rhs) in out.iter_mut().zip(rhs) {
            *digit = op.apply(*digit, rhs);
        }
        from_twos_complement(out)
    }
}
