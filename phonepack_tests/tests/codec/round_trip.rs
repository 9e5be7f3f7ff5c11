use super::generate::gen_variable_number;
use anyhow::Result;
use phonepack_types::number::{DigitString, NormalizedPhoneNumber};
use phonepack_types::packed::{FixedPackedRecord, PackedCodec, VariablePackedRecord};
use phonepack_types::serde::{Deser, Ser, WireRecord};
use rand::Rng;

#[test]
fn variable_round_trip() -> Result<()> {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let number = gen_variable_number(&mut rng);
        let record = VariablePackedRecord::encode(&number)?;
        assert_eq!(record.decode()?, number);

        let received = VariablePackedRecord::from_wire(&record.to_wire())?;
        assert_eq!(received.decode()?, number);

        let deserialized = VariablePackedRecord::deser_solo(&record.ser_solo()?)?;
        assert_eq!(deserialized.decode()?, number);
    }
    Ok(())
}

#[test]
fn fixed_round_trip() -> Result<()> {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let country_code = rng.gen_range(0..=999);
        let leading_zeros = rng.gen_range(0..=15);
        let national_number = rng.gen_range(0..=FixedPackedRecord::MAX_NATIONAL_NUMBER);

        let mut national = "0".repeat(leading_zeros);
        if national_number > 0 {
            national += &national_number.to_string();
        }
        let number = NormalizedPhoneNumber::national(country_code, national.parse()?);

        let record = FixedPackedRecord::encode(&number)?;
        assert_eq!(record.country_code() as u32, country_code);
        assert_eq!(record.leading_zeros(), leading_zeros as u64);
        assert_eq!(record.national_number(), national_number);
        assert_eq!(record.decode()?, number);

        let received = FixedPackedRecord::from_wire(&record.to_wire())?;
        assert_eq!(received, record);
        assert_eq!(FixedPackedRecord::deser_solo(&record.ser_solo()?)?, record);
    }
    Ok(())
}

#[test]
fn end_to_end() -> Result<()> {
    let number = NormalizedPhoneNumber::national(44, "2079460123".parse()?);

    let record = VariablePackedRecord::encode(&number)?;
    let buf = record.to_wire();
    let received = VariablePackedRecord::from_wire(&buf)?;

    assert_eq!(received.decode()?, number);
    assert_eq!(received.country_code(), 44);
    assert_eq!(received.national_digit_count(), 10);
    assert!(!received.decode()?.has_extension());
    assert_eq!(received.decode()?.extension_digits(), &DigitString::new());
    Ok(())
}
