use anyhow::{anyhow, Result};
use phonepack_host::config::HostConfig;
use phonepack_host::ops::{cmp, equal, PhoneNumberOps};
use phonepack_host::report::ErrCode;
use phonepack_types::normalize::{BasicNormalizer, Normalizer};
use phonepack_types::packed::{FixedPackedRecord, VariablePackedRecord};
use phonepack_types::serde::{Deser, ReadResult, Ser};
use std::sync::Arc;
use std::thread;

const NUMBERS: [&str; 6] = [
    "+44 20 7946 0123",
    "(650) 253-0000",
    "+1 650 253 0000 ext. 12",
    "+39 06 1234 5678",
    "+81 3-1234-5678",
    "011 49 30 123456",
];

fn new_ops() -> Result<PhoneNumberOps> {
    let normalizer: Arc<dyn Normalizer> = Arc::new(BasicNormalizer::new()?);
    let config = HostConfig::from_lookup(|_| None)?;
    Ok(PhoneNumberOps::new(normalizer, config))
}

#[test]
fn shared_across_threads() -> Result<()> {
    let ops = new_ops()?;

    let outputs = thread::scope(|s| {
        let handles = NUMBERS
            .iter()
            .map(|text| {
                let ops = &ops;
                s.spawn(move || -> Result<String> {
                    let record = ops.input::<VariablePackedRecord>(text)?;
                    let received = ops.recv::<VariablePackedRecord>(&ops.send(&record))?;
                    Ok(ops.output(&received)?)
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| anyhow!("worker panicked"))?)
            .collect::<Result<Vec<_>>>()
    })?;

    assert_eq!(
        outputs,
        [
            "+44 2079460123",
            "+1 6502530000",
            "+1 6502530000 ext. 12",
            "+39 0612345678",
            "+81 312345678",
            "+49 30123456",
        ]
    );
    Ok(())
}

#[test]
fn sorted_by_operator_family() -> Result<()> {
    let ops = new_ops()?;

    let mut records = NUMBERS
        .iter()
        .map(|text| ops.input::<VariablePackedRecord>(text))
        .collect::<Result<Vec<_>, _>>()?;
    records.sort_by(|a, b| cmp(a, b).cmp(&0));

    let country_codes = records
        .iter()
        .map(|record| ops.country_code(record))
        .collect::<Vec<_>>();
    assert_eq!(country_codes, [1, 1, 39, 44, 49, 81]);
    assert!(equal(&records[0], &records[1]));
    Ok(())
}

#[test]
fn stream_of_records() -> Result<()> {
    let ops = new_ops()?;

    let mut buf = vec![];
    for text in NUMBERS {
        let record = ops.input::<FixedPackedRecord>(text)?;
        record.ser(&mut buf)?;
    }
    assert_eq!(buf.len(), 8 * NUMBERS.len());

    let mut r = &buf[..];
    let mut outputs = vec![];
    while let ReadResult::Some(_, record) = FixedPackedRecord::deser(&mut r)? {
        outputs.push(ops.output(&record)?);
    }
    // The fixed record has no room for the extension.
    assert_eq!(outputs[2], "+1 6502530000");
    assert_eq!(outputs.len(), NUMBERS.len());
    Ok(())
}

#[test]
fn reports() -> Result<()> {
    let ops = new_ops()?;

    let err = ops.parse::<VariablePackedRecord>("555 1234", "ZZ").unwrap_err();
    assert_eq!(err.code, ErrCode::InvalidTextRepresentation);
    assert_eq!(err.detail.as_deref(), Some("Invalid country code"));

    let err = ops.input::<FixedPackedRecord>("+1 555 1234 *").unwrap_err();
    assert_eq!(err.code, ErrCode::InvalidTextRepresentation);

    let mut buf = ops.send(&ops.input::<VariablePackedRecord>("+44 20 7946 0123")?);
    buf.truncate(1);
    let err = ops.recv::<VariablePackedRecord>(&buf).unwrap_err();
    assert_eq!(err.code, ErrCode::InvalidBinaryRepresentation);
    Ok(())
}
