// SPDX-FileCopyrightText: 2024 Nils Jochem
// SPDX-License-Identifier: MPL-2.0
use crate::{
    util::{boo::Boo, rng::seeded_rng},
    BigIInt, BigUInt, DivisionByZero, Error, ParseError, SigNum, Sign, TryFromBigIntError,
};

fn num(s: &str) -> BigIInt {
    s.parse().unwrap_or_else(|err| panic!("{s:?} didn't parse: {err}"))
}

mod create {
    use super::*;

    #[test]
    fn from_u32s() {
        assert_eq!(
            BigUInt::from_iter([0x3322_1100u32, 0x7766_5544, 0x9988]).limbs(),
            [0x3322_1100, 0x7766_5544, 0x9988]
        );
    }
    #[test]
    fn from_i128() {
        let number = BigIInt::from(-0x9988_7766_5544_3322_1100i128);
        assert_eq!(number.sign(), Sign::Negative);
        assert_eq!(number.abs().limbs(), [0x3322_1100, 0x7766_5544, 0x9988]);
    }
    #[test]
    fn native_minimum() {
        assert_eq!(
            BigIInt::from(i64::MIN).to_string(),
            "-9223372036854775808"
        );
        assert_eq!(
            BigIInt::from(i128::MIN).to_string(),
            "-170141183460469231731687303715884105728"
        );
        assert_eq!(BigIInt::from(i8::MIN), -128);
    }
    #[test]
    fn zero_is_positive() {
        assert_eq!(BigIInt::from(0).sign(), Sign::Positive);
        assert_eq!(BigIInt::new(Sign::Negative, BigUInt::ZERO), BigIInt::ZERO);
        assert_eq!(BigIInt::new(Sign::Negative, BigUInt::ZERO).signum(), SigNum::Zero);
        assert_eq!(BigUInt::from_digits([0, 0, 0]), BigUInt::ZERO);
    }
    #[test]
    #[cfg(feature = "uintFromAssertIPrimitive")]
    #[should_panic(expected = "tried to get BigUInt from -5 < 0")]
    fn uint_from_negative() {
        let _ = BigUInt::from(-5i32);
    }

    #[test]
    fn into_natives() {
        assert_eq!(i64::try_from(&BigIInt::from(i64::MIN)), Ok(i64::MIN));
        assert_eq!(i128::try_from(BigIInt::from(i128::MIN)), Ok(i128::MIN));
        assert_eq!(i128::try_from(BigIInt::from(i128::MAX)), Ok(i128::MAX));
        assert_eq!(u128::try_from(BigIInt::from(u128::MAX)), Ok(u128::MAX));
        assert_eq!(i8::try_from(BigIInt::from(-128)), Ok(-128));
        assert_eq!(u32::try_from(&BigUInt::from(7u8)), Ok(7));

        assert_eq!(i8::try_from(BigIInt::from(128)), Err(TryFromBigIntError));
        assert_eq!(u8::try_from(BigIInt::from(256)), Err(TryFromBigIntError));
        assert_eq!(u32::try_from(BigIInt::from(-1)), Err(TryFromBigIntError));
        assert_eq!(
            u128::try_from(BigIInt::from(u128::MAX) + BigIInt::ONE),
            Err(TryFromBigIntError)
        );
        assert_eq!(
            i128::try_from(BigIInt::from(i128::MIN) - BigIInt::ONE),
            Err(TryFromBigIntError)
        );
        assert_eq!(BigUInt::try_from(BigIInt::from(-3)), Err(TryFromBigIntError));
        assert_eq!(BigUInt::try_from(BigIInt::from(3)), Ok(BigUInt::from(3u8)));
    }
    #[test]
    fn properties() {
        let number = BigIInt::from(-0x1_0000_0000i64);
        assert!(number.is_negative());
        assert!(!number.is_positive());
        assert!(number.is_even());
        assert_eq!(number.bits(), 33);
        assert_eq!(BigIInt::ZERO.bits(), 0);
        assert!(BigIInt::ONE.is_one());
        assert!(!BigIInt::NEG_ONE.is_one());
        assert_eq!(i8::from(BigIInt::NEG_ONE.signum()), -1);
    }

    #[test]
    #[cfg(feature = "base64")]
    fn base64() {
        use base64::engine::general_purpose::STANDARD;
        let number = num("-123456789012345678901234567890");
        let (sign, encoded) = number.as_base64(&STANDARD);
        assert_eq!(sign, Sign::Negative);
        assert_eq!(BigIInt::from_base64(sign, encoded, &STANDARD), Ok(number));
    }

    #[test]
    fn random_has_bytes() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..100 {
            let number = BigUInt::new_random(3..=5, &mut rng);
            assert!(
                (17..=40).contains(&number.bits()),
                "{number:?} has {} bits with seed {seed:?}",
                number.bits()
            );
        }
        assert_eq!(BigUInt::new_random(0..=0, &mut rng), BigUInt::ZERO);
    }
}

mod parse {
    use super::*;

    #[test]
    fn canonical_round_trip() {
        for s in [
            "0",
            "1",
            "-1",
            "999999999",
            "1000000000",
            "4294967296",
            "-18446744073709551616",
            "12345678901234567890",
            "-1000000000000000000000000000001",
        ] {
            assert_eq!(num(s).to_string(), s);
        }
    }
    #[test]
    fn non_canonical() {
        assert_eq!(num("-0").to_string(), "0");
        assert_eq!(num("-000").to_string(), "0");
        assert_eq!(num("000123").to_string(), "123");
        assert_eq!(num("-0001000000000").to_string(), "-1000000000");
    }
    #[test]
    fn errors() {
        assert_eq!("".parse::<BigIInt>(), Err(ParseError::Empty));
        assert_eq!("-".parse::<BigIInt>(), Err(ParseError::LoneSign));
        assert_eq!(
            "xyz".parse::<BigIInt>(),
            Err(ParseError::InvalidDigit {
                digit: 'x',
                position: 0
            })
        );
        assert_eq!(
            "-12a".parse::<BigIInt>(),
            Err(ParseError::InvalidDigit {
                digit: 'a',
                position: 3
            })
        );
        assert_eq!(
            "+5".parse::<BigIInt>(),
            Err(ParseError::InvalidDigit {
                digit: '+',
                position: 0
            })
        );
        assert_eq!(
            "--5".parse::<BigIInt>(),
            Err(ParseError::InvalidDigit {
                digit: '-',
                position: 1
            })
        );
        assert_eq!(
            "-5".parse::<BigUInt>(),
            Err(ParseError::InvalidDigit {
                digit: '-',
                position: 0
            })
        );
    }
    #[test]
    fn error_messages() {
        assert_eq!(
            ParseError::InvalidDigit {
                digit: 'x',
                position: 0
            }
            .to_string(),
            "invalid digit 'x' at position 0"
        );
        assert_eq!(DivisionByZero.to_string(), "attempt to divide by zero");
    }
    #[test]
    fn umbrella_error() {
        fn quotient(lhs: &str, rhs: &str) -> Result<BigIInt, Error> {
            Ok(lhs.parse::<BigIInt>()?.checked_div(&rhs.parse::<BigIInt>()?)?)
        }
        assert_eq!(quotient("-100", "7"), Ok(BigIInt::from(-14)));
        assert_eq!(quotient("1", "0"), Err(Error::DivisionByZero(DivisionByZero)));
        assert_eq!(quotient("1", ""), Err(Error::Parse(ParseError::Empty)));
    }
}

mod output {
    use super::*;

    #[test]
    fn decimal_padding() {
        assert_eq!(format!("{:>6}", BigIInt::from(-42)), "   -42");
        assert_eq!(format!("{:+}", BigIInt::from(42)), "+42");
        assert_eq!(format!("{:06}", BigIInt::from(-42)), "-00042");
        assert_eq!(format!("{}", BigIInt::from(10u64.pow(18))), "1000000000000000000");
        assert_eq!(format!("{}", BigUInt::from(4_000_000_007u32)), "4000000007");
    }
    #[test]
    fn hex() {
        assert_eq!(
            format!("{:x}", BigIInt::from(0x9988_7766_5544_3322_1100u128)),
            "99887766554433221100"
        );
        assert_eq!(
            format!("{:#x}", BigIInt::from(-0x9988_7766_5544_3322_1100i128)),
            "-0x99887766554433221100"
        );
        assert_eq!(
            format!("{:#X}", BigIInt::from(-0xabcd_0000_0001i64)),
            "-0xABCD00000001"
        );
        assert_eq!(
            format!("{:0>32x}", BigUInt::from(0x9988_7766_5544_3322_1100u128)),
            "00000000000099887766554433221100"
        );
        assert_eq!(format!("{:x}", BigIInt::ZERO), "0");
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", BigIInt::from(-0x1_0000_0002i64)),
            "Number { - 0x[00000001, 00000002] }"
        );
        assert_eq!(
            format!("{:?}", BigUInt::from(0x1fu8)),
            "Number { 0x[0000001f] }"
        );
    }
}

mod order {
    use super::*;

    #[test]
    fn sorted() {
        let sorted = [
            num("-18446744073709551616"),
            num("-4294967296"),
            num("-5"),
            num("-3"),
            num("0"),
            num("3"),
            num("4294967295"),
            num("4294967296"),
            num("18446744073709551616"),
        ];
        let mut shuffled = sorted.clone();
        shuffled.reverse();
        shuffled.swap(1, 5);
        shuffled.sort();
        assert_eq!(shuffled, sorted);
    }
    #[test]
    fn with_natives() {
        assert!(BigIInt::from(5) > 3);
        assert!(BigIInt::from(-5) < -3);
        assert!(BigIInt::from(-5) == -5);
        assert!(num("18446744073709551616") > u64::MAX);
        assert!(num("-18446744073709551616") < i64::MIN);
    }
    #[test]
    fn equality_is_structural() {
        assert_eq!(num("-0"), BigIInt::ZERO);
        assert_eq!(BigIInt::ZERO - BigIInt::ZERO, BigIInt::ZERO);
        assert_ne!(num("-1"), num("1"));
    }
}

mod big_math {
    use super::*;

    fn test_op(
        lhs: impl Into<BigIInt>,
        rhs: impl Into<BigIInt>,
        op: impl for<'b> Fn(Boo<'b, BigIInt>, Boo<'b, BigIInt>) -> BigIInt,
        result: impl Into<BigIInt>,
        op_dbg: &str,
    ) {
        let lhs = lhs.into();
        let rhs = rhs.into();
        let result = result.into();
        let msg = |t1: &str, t2: &str| format!("{t1}{lhs} {op_dbg} {t2}{rhs}");

        assert_eq!(op(Boo::from(&lhs), Boo::from(&rhs)), result, "{}", msg("&", "&"));
        assert_eq!(
            op(Boo::from(lhs.clone()), Boo::from(&rhs)),
            result,
            "{}",
            msg("", "&")
        );
        assert_eq!(
            op(Boo::from(&lhs), Boo::from(rhs.clone())),
            result,
            "{}",
            msg("&", "")
        );
        assert_eq!(
            op(Boo::from(lhs.clone()), Boo::from(rhs.clone())),
            result,
            "{}",
            msg("", "")
        );
    }
    fn test_op_commute(
        lhs: impl Into<BigIInt>,
        rhs: impl Into<BigIInt>,
        op: impl for<'b> Fn(Boo<'b, BigIInt>, Boo<'b, BigIInt>) -> BigIInt,
        result: impl Into<BigIInt>,
        op_dbg: &str,
    ) {
        let lhs = lhs.into();
        let rhs = rhs.into();
        let result = result.into();

        test_op(lhs.clone(), rhs.clone(), &op, result.clone(), op_dbg);
        test_op(rhs, lhs, op, result, op_dbg);
    }

    #[test]
    fn add() {
        test_op_commute(5, 3, BigIInt::add, 8, "+");
        test_op_commute(-5, 3, BigIInt::add, -2, "+");
        test_op_commute(5, -3, BigIInt::add, 2, "+");
        test_op_commute(-5, -3, BigIInt::add, -8, "+");
        test_op_commute(-5, 5, BigIInt::add, 0, "+");
        test_op_commute(u64::MAX, 1, BigIInt::add, 1u128 << 64, "+");
        test_op_commute(
            num("-18446744073709551616"),
            1,
            BigIInt::add,
            -0xffff_ffff_ffff_ffffi128,
            "+",
        );
    }
    #[test]
    fn sub() {
        test_op(3, 5, BigIInt::sub, -2, "-");
        test_op(-3, -5, BigIInt::sub, 2, "-");
        test_op(-3, 5, BigIInt::sub, -8, "-");
        test_op(1u128 << 64, 1, BigIInt::sub, u64::MAX, "-");
        test_op(0, 0, BigIInt::sub, 0, "-");
        assert_eq!((BigIInt::from(0) - BigIInt::from(0)).to_string(), "0");
    }
    #[test]
    fn mul() {
        test_op_commute(
            num("12345678901234567890"),
            num("98765432109876543210"),
            BigIInt::mul,
            num("1219326311370217952237463801111263526900"),
            "*",
        );
        test_op_commute(-3, 4, BigIInt::mul, -12, "*");
        test_op_commute(-3, -4, BigIInt::mul, 12, "*");
        test_op_commute(0, -4, BigIInt::mul, 0, "*");
        assert_eq!((BigIInt::from(0) * BigIInt::from(-4)).sign(), Sign::Positive);
    }
    #[test]
    fn div() {
        test_op(-100, 7, BigIInt::div, -14, "/");
        test_op(-100, 7, BigIInt::rem, -2, "%");
        test_op(7, -2, BigIInt::div, -3, "/");
        test_op(7, -2, BigIInt::rem, 1, "%");
        test_op(-7, -2, BigIInt::div, 3, "/");
        test_op(-7, -2, BigIInt::rem, -1, "%");
        test_op(-3, 5, BigIInt::div, 0, "/");
        test_op(-3, 5, BigIInt::rem, -3, "%");
        test_op(
            num("340282366920938463463374607431768211456"),
            num("4294967296"),
            BigIInt::div,
            num("79228162514264337593543950336"),
            "/",
        );
    }
    #[test]
    fn div_multi_limb() {
        let u = num("123456789012345678901234567890123456789012345678901234567890");
        let v = num("98765432109876543210987654321");
        assert_eq!(
            u.div_rem(&v),
            Ok((
                num("1249999988609375000142382812499"),
                num("46440971104644097110464409711")
            ))
        );
        assert_eq!(
            (-&u).div_rem(&v),
            Ok((
                num("-1249999988609375000142382812499"),
                num("-46440971104644097110464409711")
            ))
        );
    }
    #[test]
    fn div_estimate_on_edge() {
        let u = BigIInt::from(0x8000_0000_0000_0000_0000_0003u128);
        let v = BigIInt::from(0x2000_0000_0000_0000_0000_0001u128);
        assert_eq!(
            u.div_rem(&v),
            Ok((
                BigIInt::from(3),
                BigIInt::from(0x2000_0000_0000_0000_0000_0000u128)
            ))
        );
    }
    #[test]
    fn div_by_zero() {
        assert_eq!(
            BigIInt::from(1).div_rem(&BigIInt::from(0)),
            Err(DivisionByZero)
        );
        assert_eq!(BigIInt::from(1).checked_rem(&BigIInt::ZERO), Err(DivisionByZero));
        assert_eq!(
            BigUInt::ONE.div_rem(&BigUInt::ZERO),
            Err(DivisionByZero)
        );
    }
    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn div_operator_panics() {
        let _ = BigIInt::from(1) / BigIInt::from(0);
    }
    #[test]
    #[should_panic(expected = "attempt to subtract with overflow")]
    fn unsigned_sub_below_zero() {
        let _ = BigUInt::from(3u8) - BigUInt::from(5u8);
    }

    #[test]
    fn shift() {
        assert_eq!(num("5") << 2, num("20"));
        assert_eq!(num("-5") >> 1, num("-3"));
        assert_eq!(BigIInt::from(-1) >> 1, BigIInt::from(-1));
        assert_eq!(BigIInt::from(-3) >> 1, BigIInt::from(-2));
        assert_eq!(BigIInt::from(-4) >> 1, BigIInt::from(-2));
        assert_eq!(BigIInt::from(-1) >> 100, BigIInt::from(-1));
        assert_eq!(BigIInt::from(5) >> 100, BigIInt::ZERO);
        // negative amounts shift the other way
        assert_eq!(BigIInt::from(5) << -1, BigIInt::from(2));
        assert_eq!(BigIInt::from(5) >> -2, BigIInt::from(20));
        assert_eq!(BigIInt::from(1) << 64usize, BigIInt::from(1u128 << 64));
        assert_eq!(&BigIInt::from(-(1i64 << 40)) >> 40usize, BigIInt::from(-1));
        assert_eq!(BigUInt::from(0x1_0000_0001u64) >> 32, BigUInt::ONE);
        // partial limb shifts wider than half a limb
        assert_eq!(BigIInt::from(1u128 << 100) >> 20, 1u128 << 80);
        assert_eq!(
            BigIInt::from(-(1i128 << 100) - 1) >> 52,
            -(1i128 << 48) - 1
        );

        let mut number = BigIInt::from(3);
        number <<= 33;
        assert_eq!(number, 3u64 << 33);
        number >>= 34;
        assert_eq!(number, 1);
    }
    #[test]
    fn bit_ops() {
        test_op_commute(12, 10, BigIInt::bitand, 8, "&");
        test_op_commute(12, 10, BigIInt::bitor, 14, "|");
        test_op_commute(12, 10, BigIInt::bitxor, 6, "^");
        test_op_commute(-12, 10, BigIInt::bitand, 0, "&");
        test_op_commute(-12, 10, BigIInt::bitor, -2, "|");
        test_op_commute(-12, 10, BigIInt::bitxor, -2, "^");
        test_op_commute(-12, -10, BigIInt::bitand, -12, "&");
        test_op_commute(-12, -10, BigIInt::bitor, -10, "|");
        test_op_commute(-12, -10, BigIInt::bitxor, 2, "^");

        // the shorter operand gets sign extended
        let lhs = -((1i128 << 70) + 12345);
        test_op_commute(lhs, u64::MAX, BigIInt::bitand, 18_446_744_073_709_539_271u64, "&");
        test_op_commute(lhs, u64::MAX, BigIInt::bitor, num("-1180591620717411303425"), "|");
        test_op_commute(lhs, u64::MAX, BigIInt::bitxor, num("-1199038364791120842696"), "^");
    }
    #[test]
    fn not() {
        assert_eq!(!BigIInt::ZERO, BigIInt::NEG_ONE);
        assert_eq!(!BigIInt::NEG_ONE, BigIInt::ZERO);
        assert_eq!(!&BigIInt::from(5), BigIInt::from(-6));
        assert_eq!(!num("-18446744073709551616"), num("18446744073709551615"));
    }
    #[test]
    fn unary() {
        let mut number = BigIInt::from(-1);
        number.increment();
        assert_eq!(number, BigIInt::ZERO);
        assert_eq!(number.sign(), Sign::Positive);
        number.decrement();
        assert_eq!(number, -1);

        let mut number = BigIInt::from(u32::MAX);
        number.increment();
        assert_eq!(number, 1u64 << 32);

        let mut zero = BigIInt::ZERO;
        zero.negate();
        assert_eq!(zero.sign(), Sign::Positive);
        assert_eq!(-BigIInt::from(7), -7);
        assert_eq!(-&BigIInt::from(-7), 7);
    }
    #[test]
    fn compound() {
        let mut number = BigIInt::from(10);
        number += BigIInt::from(5);
        number -= &BigIInt::from(20);
        assert_eq!(number, -5);
        number *= BigIInt::from(-3);
        assert_eq!(number, 15);
        number /= &BigIInt::from(4);
        assert_eq!(number, 3);
        number %= BigIInt::from(2);
        assert_eq!(number, 1);
        number |= BigIInt::from(6);
        number &= &BigIInt::from(-3);
        number ^= BigIInt::from(1);
        assert_eq!(number, 4);
    }
    #[test]
    fn unsigned_ops() {
        let lhs = BigUInt::from(u64::MAX);
        let rhs = BigUInt::from(3u8);
        assert_eq!(&lhs + &rhs, BigUInt::from((1u128 << 64) + 2));
        assert_eq!(&lhs - &rhs, BigUInt::from(u64::MAX - 3));
        assert_eq!(&lhs * &rhs, BigUInt::from(u128::from(u64::MAX) * 3));
        assert_eq!(&lhs / &rhs, BigUInt::from(u64::MAX / 3));
        assert_eq!(&lhs % &rhs, BigUInt::ZERO);
        assert_eq!(&lhs & &rhs, rhs);
        assert_eq!(&lhs ^ &rhs, BigUInt::from(u64::MAX ^ 3));
        assert_eq!(BigUInt::ZERO | rhs.clone(), rhs);
        assert_eq!(&rhs << 64, BigUInt::from(3u128 << 64));
    }
}

mod fuzz {
    use super::*;
    use crate::util::rng::next_bound;

    const ROUNDS: usize = 200;
    const BYTES: std::ops::RangeInclusive<usize> = 0..=40;

    fn pair(rng: &mut rand::rngs::StdRng) -> (BigIInt, BigIInt) {
        (
            BigIInt::new_random(BYTES, &mut *rng),
            BigIInt::new_random(BYTES, &mut *rng),
        )
    }

    #[test]
    fn div_rem_identity() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (lhs, rhs) = pair(&mut rng);
            if rhs.is_zero() {
                continue;
            }
            let (q, r) = lhs
                .div_rem(&rhs)
                .unwrap_or_else(|err| panic!("{err} with seed {seed:?}"));
            assert_eq!(&q * &rhs + &r, lhs, "{lhs} / {rhs} with seed {seed:?}");
            assert!(r.abs() < rhs.abs(), "{lhs} % {rhs} with seed {seed:?}");
            assert!(
                r.is_zero() || r.sign() == lhs.sign(),
                "{lhs} % {rhs} has the wrong sign with seed {seed:?}"
            );
        }
    }
    #[test]
    fn additive_inverse() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (lhs, rhs) = pair(&mut rng);
            assert_eq!(&lhs + -&lhs, BigIInt::ZERO, "{lhs} with seed {seed:?}");
            assert_eq!(-(-&lhs), lhs, "{lhs} with seed {seed:?}");
            assert_eq!((&lhs + &rhs) - &rhs, lhs, "{lhs}, {rhs} with seed {seed:?}");
        }
    }
    #[test]
    fn commutative() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (lhs, rhs) = pair(&mut rng);
            assert_eq!(&lhs * &rhs, &rhs * &lhs, "{lhs}, {rhs} with seed {seed:?}");
            assert_eq!(&lhs + &rhs, &rhs + &lhs, "{lhs}, {rhs} with seed {seed:?}");
        }
    }
    #[test]
    fn complement() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (lhs, _) = pair(&mut rng);
            assert_eq!(!&lhs, -&lhs - BigIInt::ONE, "{lhs} with seed {seed:?}");
            assert_eq!(&lhs & !&lhs, BigIInt::ZERO, "{lhs} with seed {seed:?}");
            assert_eq!(&lhs | !&lhs, BigIInt::NEG_ONE, "{lhs} with seed {seed:?}");
        }
    }
    #[test]
    fn shifts_are_powers_of_two() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (lhs, _) = pair(&mut rng);
            let shift = next_bound(100, &mut rng, None);
            let power = BigIInt::ONE << shift;

            assert_eq!(&lhs << shift, &lhs * &power, "{lhs} << {shift} with seed {seed:?}");

            let (q, r) = lhs
                .div_rem(&power)
                .unwrap_or_else(|err| panic!("{err} with seed {seed:?}"));
            let floor = if r.is_negative() { q - BigIInt::ONE } else { q };
            assert_eq!(&lhs >> shift, floor, "{lhs} >> {shift} with seed {seed:?}");
        }
    }
    #[test]
    fn string_round_trip() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (lhs, _) = pair(&mut rng);
            let s = lhs.to_string();
            assert_eq!(num(&s), lhs, "{s} with seed {seed:?}");
        }
    }
    #[test]
    fn order_matches_difference() {
        let (seed, mut rng) = seeded_rng();
        for _ in 0..ROUNDS {
            let (lhs, rhs) = pair(&mut rng);
            let expected = match (&lhs - &rhs).signum() {
                SigNum::Negative => std::cmp::Ordering::Less,
                SigNum::Zero => std::cmp::Ordering::Equal,
                SigNum::Positive => std::cmp::Ordering::Greater,
            };
            assert_eq!(lhs.cmp(&rhs), expected, "{lhs} <=> {rhs} with seed {seed:?}");
        }
    }
}
