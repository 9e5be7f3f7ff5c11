use super::generate::{gen_colliding_number, gen_variable_number};
use anyhow::Result;
use itertools::Itertools;
use phonepack_types::number::NormalizedPhoneNumber;
use phonepack_types::packed::{Collate, FixedPackedRecord, PackedCodec, VariablePackedRecord};
use rand::Rng;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    t.hash(&mut hasher);
    hasher.finish()
}

fn gen_variable_records(count: usize, rng: &mut impl Rng) -> Result<Vec<VariablePackedRecord>> {
    let mut records = vec![];
    for i in 0..count {
        let number = if i % 2 == 0 {
            gen_colliding_number(rng)
        } else {
            gen_variable_number(rng)
        };
        records.push(VariablePackedRecord::encode(&number)?);
    }
    Ok(records)
}

#[test]
fn variable_equality_laws() -> Result<()> {
    let mut rng = rand::thread_rng();
    let records = gen_variable_records(40, &mut rng)?;

    let mut equal_pairs = 0;
    for (a, b) in records.iter().cartesian_product(records.iter()) {
        assert_eq!(a == b, b == a);
        assert_eq!(a == b, a.collate(b) == 0);
        assert_eq!(a == b, a.cmp(b) == Ordering::Equal);
        if a == b {
            assert_eq!(hash_of(a), hash_of(b));
            equal_pairs += 1;
        }
    }
    assert!(equal_pairs >= records.len());
    Ok(())
}

#[test]
fn variable_strict_weak_order() -> Result<()> {
    let mut rng = rand::thread_rng();
    let records = gen_variable_records(30, &mut rng)?;

    for a in records.iter() {
        assert_eq!(a.cmp(a), Ordering::Equal);
    }
    for (a, b) in records.iter().cartesian_product(records.iter()) {
        assert_eq!(a.cmp(b), b.cmp(a).reverse());
        assert_eq!(a.collate(b), -b.collate(a));
    }
    for ((a, b), c) in records
        .iter()
        .cartesian_product(records.iter())
        .cartesian_product(records.iter())
    {
        if a < b && b < c {
            assert!(a < c);
        }
        // Incomparability is transitive.
        if a == b && b == c {
            assert!(a == c);
        }
    }

    let mut sorted = records.clone();
    sorted.sort();
    assert!(sorted.iter().tuple_windows().all(|(a, b)| a <= b));
    Ok(())
}

#[test]
fn fixed_equality_laws() -> Result<()> {
    let mut rng = rand::thread_rng();

    let mut records = vec![];
    for _ in 0..40 {
        let number = gen_colliding_number(&mut rng);
        records.push(FixedPackedRecord::encode(&number)?);
    }

    for (a, b) in records.iter().cartesian_product(records.iter()) {
        assert_eq!(a == b, b == a);
        assert_eq!(a == b, a.compare_fast(b) == 0);
        assert_eq!(a.compare_fast(b), b.compare_fast(a).wrapping_neg());
        if a == b {
            assert_eq!(hash_of(a), hash_of(b));
        }
    }
    Ok(())
}

#[test]
fn fixed_compare_fast_regression() -> Result<()> {
    let a = FixedPackedRecord::encode(&NormalizedPhoneNumber::national(1, "5551234567".parse()?))?;
    let b = FixedPackedRecord::encode(&NormalizedPhoneNumber::national(1, "15551234567".parse()?))?;
    assert_eq!(a.compare_fast(&b), 10_000_000_000i64 << 14);
    assert_eq!(a.collate(&b), a.compare_fast(&b));
    Ok(())
}
