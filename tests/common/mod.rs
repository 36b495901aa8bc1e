#![allow(dead_code)]

use dupwindow::prelude::*;
use rand::{
    Rng,
    SeedableRng,
};
use rand_chacha::ChaCha8Rng;

/// Generates a sorted stream over `n_chroms` chromosomes. Gaps between
/// consecutive starts are drawn from `0..=max_gap`, so zero gaps produce runs
/// of duplicates.
pub fn random_sorted_records(
    seed: u64,
    n_chroms: usize,
    per_chrom: usize,
    max_gap: u64,
) -> Vec<Record> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(n_chroms * per_chrom);
    for chrom_idx in 0..n_chroms {
        let chrom = format!("chr{}", chrom_idx + 1);
        let mut start = rng.gen_range(0..50u64);
        for _ in 0..per_chrom {
            let length = rng.gen_range(20..60u64);
            let strand = Strand::from(rng.gen_bool(0.5));
            records.push(
                Record::new(chrom.as_str(), start, start + length).with_strand(strand),
            );
            if rng.gen_bool(0.3) {
                continue;
            }
            start += rng.gen_range(0..=max_gap);
        }
    }
    records
}

pub fn starts<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<PosType> {
    records.into_iter().map(Record::start).collect()
}

pub fn to_bed(records: &[Record]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            format!(
                "{}\t{}\t{}\tread{}\t0\t{}\n",
                r.chrom(),
                r.start(),
                r.stop(),
                idx,
                r.strand()
            )
        })
        .collect()
}
