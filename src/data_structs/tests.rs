use std::str::FromStr;

use bio::io::bed::Record as BedRecord;
use rstest::rstest;

use super::*;
use crate::error::WindowError;

#[rstest]
#[case("+", Strand::Forward)]
#[case("-", Strand::Reverse)]
#[case(".", Strand::None)]
#[case("?", Strand::Unknown)]
#[case("", Strand::Unknown)]
fn test_strand_from_str(
    #[case] input: &str,
    #[case] expected: Strand,
) {
    assert_eq!(Strand::from_str(input).unwrap(), expected);
}

#[test]
fn test_strand_display() {
    assert_eq!(Strand::Forward.to_string(), "+");
    assert_eq!(Strand::Reverse.to_string(), "-");
    assert_eq!(Strand::None.to_string(), ".");
    assert_eq!(Strand::Unknown.to_string(), ".");
}

#[test]
fn test_unknown_strand_reads_back_unstranded() {
    let text = Strand::Unknown.to_string();
    assert_eq!(Strand::from_str(&text).unwrap(), Strand::None);
    assert_eq!(
        Option::<bool>::from(Strand::from_str(&text).unwrap()),
        Option::<bool>::from(Strand::Unknown)
    );

    let json = serde_json::to_string(&Strand::Unknown).unwrap();
    let back: Strand = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Strand::Unknown);
}

#[test]
fn test_strand_into_option_bool() {
    assert_eq!(Option::<bool>::from(Strand::Forward), Some(true));
    assert_eq!(Option::<bool>::from(Strand::Reverse), Some(false));
    assert_eq!(Option::<bool>::from(Strand::None), None);
    assert_eq!(Strand::from(false), Strand::Reverse);
}

#[test]
fn test_record_accessors() {
    let record = Record::new("chr1", 100, 150).with_strand(Strand::Reverse);
    assert_eq!(record.chrom().as_str(), "chr1");
    assert_eq!(record.start(), 100);
    assert_eq!(record.stop(), 150);
    assert_eq!(record.length(), 50);
    assert_eq!(record.strand(), Strand::Reverse);
    assert_eq!(record.to_string(), "chr1:100-150 (-)");
}

#[test]
#[should_panic(expected = "Start position must be less than or equal to stop position")]
fn test_record_new_inverted_panics() {
    let _ = Record::new("chr1", 20, 10);
}

#[test]
fn test_record_try_new_inverted() {
    let err = Record::try_new("chr1", 20, 10, Strand::None).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<WindowError>(),
        Some(WindowError::InvalidInterval { start: 20, stop: 10 })
    ));
}

#[test]
fn test_record_from_bio_bed() {
    let mut bed = BedRecord::new();
    bed.set_chrom("chrX");
    bed.set_start(5);
    bed.set_end(40);
    bed.set_name("read1");
    bed.set_score("0");
    bed.push_aux("-");

    let record = Record::try_from(bed).unwrap();
    assert_eq!(record.chrom().as_str(), "chrX");
    assert_eq!(record.start(), 5);
    assert_eq!(record.stop(), 40);
    assert_eq!(record.strand(), Strand::Reverse);
}

#[rstest]
#[case(Strand::Forward)]
#[case(Strand::None)]
#[case(Strand::Unknown)]
fn test_record_serde(#[case] strand: Strand) {
    let record = Record::new("chr2", 1, 2).with_strand(strand);
    let json = serde_json::to_string(&record).unwrap();
    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
