//! Property-based tests for the bignum engine and both algorithms.
//!
//! `num_bigint::BigUint` serves as the independent reference.

use num_bigint::BigUint;
use num_traits::One;
use proptest::prelude::*;

use fibengine_core::{fibonacci, Algorithm, BigNum};

fn limbs_strategy(max_len: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(
        prop_oneof![Just(0u64), Just(u64::MAX), any::<u64>()],
        1..=max_len,
    )
}

fn reference(limbs: &[u64]) -> BigUint {
    let mut value = BigUint::ZERO;
    for &limb in limbs.iter().rev() {
        value = (value << 64u32) + limb;
    }
    value
}

fn reference_fib(n: u64) -> BigUint {
    let mut a = BigUint::ZERO;
    let mut b = BigUint::one();
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    a
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn u64_decimal_round_trip(v in any::<u64>()) {
        prop_assert_eq!(BigNum::from_u64(v).to_decimal().unwrap(), v.to_string());
    }

    #[test]
    fn from_limbs_matches_reference(limbs in limbs_strategy(6)) {
        let x = BigNum::from_limbs(&limbs);
        prop_assert_eq!(BigUint::from(&x), reference(&limbs));
        prop_assert_eq!(x.to_decimal().unwrap(), reference(&limbs).to_string());
    }

    #[test]
    fn add_matches_reference(a in limbs_strategy(6), b in limbs_strategy(6)) {
        let (x, y) = (BigNum::from_limbs(&a), BigNum::from_limbs(&b));
        let sum = x.add(&y).unwrap();
        prop_assert_eq!(BigUint::from(&sum), reference(&a) + reference(&b));
    }

    #[test]
    fn add_is_commutative_and_associative(
        a in limbs_strategy(5),
        b in limbs_strategy(5),
        c in limbs_strategy(5),
    ) {
        let (x, y, z) = (BigNum::from_limbs(&a), BigNum::from_limbs(&b), BigNum::from_limbs(&c));
        prop_assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
        let left = x.add(&y).unwrap().add(&z).unwrap();
        let right = x.add(&y.add(&z).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn sub_matches_reference(a in limbs_strategy(6), b in limbs_strategy(6)) {
        let (x, y) = (BigNum::from_limbs(&a), BigNum::from_limbs(&b));
        let (hi, lo) = if x >= y { (x, y) } else { (y, x) };
        let diff = hi.sub(&lo).unwrap();
        prop_assert_eq!(BigUint::from(&diff), BigUint::from(&hi) - BigUint::from(&lo));
        prop_assert!(diff.size() == 1 || diff.limbs()[diff.size() - 1] != 0);
    }

    #[test]
    fn shl1_doubles(a in limbs_strategy(6)) {
        let x = BigNum::from_limbs(&a);
        let doubled = x.shl1().unwrap();
        prop_assert_eq!(BigUint::from(&doubled), reference(&a) * 2u32);
        prop_assert_eq!(
            doubled.to_decimal().unwrap(),
            (reference(&a) * 2u32).to_string()
        );
    }

    #[test]
    fn mul_matches_reference_and_commutes(a in limbs_strategy(3), b in limbs_strategy(3)) {
        let (x, y) = (BigNum::from_limbs(&a), BigNum::from_limbs(&b));
        let xy = x.mul(&y).unwrap();
        prop_assert_eq!(BigUint::from(&xy), reference(&a) * reference(&b));
        prop_assert_eq!(xy, y.mul(&x).unwrap());
    }

    #[test]
    fn growth_does_not_change_results(a in limbs_strategy(4), b in limbs_strategy(4)) {
        let tight = BigNum::from_limbs(&a);
        let mut roomy = BigNum::from_limbs(&a);
        roomy.grow().unwrap();
        roomy.grow().unwrap();
        let y = BigNum::from_limbs(&b);

        prop_assert_eq!(tight.add(&y).unwrap(), roomy.add(&y).unwrap());
        prop_assert_eq!(y.add(&tight).unwrap(), y.add(&roomy).unwrap());
        prop_assert_eq!(tight.shl1().unwrap(), roomy.shl1().unwrap());
        prop_assert_eq!(tight.mul(&y).unwrap(), roomy.mul(&y).unwrap());
    }

    #[test]
    fn decimal_parse_round_trip(a in limbs_strategy(5)) {
        let text = reference(&a).to_string();
        let parsed: BigNum = text.parse().unwrap();
        prop_assert_eq!(&parsed, &BigNum::from_limbs(&a));
        prop_assert_eq!(parsed.to_decimal().unwrap(), text);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Both algorithms agree for random n.
    #[test]
    fn algorithms_agree(n in 0u64..1500) {
        let linear = fibonacci(n, Algorithm::Linear).unwrap();
        let fast = fibonacci(n, Algorithm::FastDoubling).unwrap();
        prop_assert_eq!(&linear, &fast, "F({}) linear != fast", n);
        prop_assert_eq!(BigUint::from(&fast), reference_fib(n));
    }

    /// F(n) == F(n-1) + F(n-2) through decimal strings and the engine's add.
    #[test]
    fn recurrence_through_decimal(n in 2u64..800) {
        let decode = |k: u64| -> BigNum {
            fibonacci(k, Algorithm::FastDoubling)
                .unwrap()
                .to_decimal()
                .unwrap()
                .parse()
                .unwrap()
        };
        let sum = decode(n - 1).add(&decode(n - 2)).unwrap();
        prop_assert_eq!(sum, decode(n), "F({}) != F({}) + F({})", n, n - 1, n - 2);
    }
}

#[test]
fn f93_and_f94_against_reference() {
    for n in [93, 94] {
        for algo in Algorithm::ALL {
            let f = fibonacci(n, algo).unwrap();
            assert_eq!(BigUint::from(&f), reference_fib(n), "{algo} F({n})");
        }
    }
}

#[test]
fn algorithms_agree_exhaustively_for_small_n() {
    for n in 0..300 {
        assert_eq!(
            fibonacci(n, Algorithm::Linear).unwrap(),
            fibonacci(n, Algorithm::FastDoubling).unwrap(),
            "F({n})"
        );
    }
}
