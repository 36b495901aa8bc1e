use std::fs::File;
use std::io::{
    BufReader,
    Read,
};
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use csv::{
    ReaderBuilder,
    StringRecord,
    StringRecordsIntoIter,
};
use log::{
    debug,
    info,
};

use crate::data_structs::typedef::PosType;
use crate::data_structs::{
    Record,
    Strand,
};
use crate::error::WindowError;
use crate::io::RecordSource;

/// Opens `path` for reading. Files ending in `.gz` are decompressed on the
/// fly when the `compression` feature is enabled.
pub fn open_input(path: &Path) -> anyhow::Result<Box<dyn Read>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let is_gz = path.extension().map(|ext| ext == "gz").unwrap_or(false);

    if is_gz {
        #[cfg(feature = "compression")]
        {
            debug!("Reading {} as gzip", path.display());
            return Ok(Box::new(flate2::read::MultiGzDecoder::new(
                BufReader::new(file),
            )));
        }
        #[cfg(not(feature = "compression"))]
        anyhow::bail!(
            "{} looks gzip-compressed, but the compression feature is disabled",
            path.display()
        );
    }
    Ok(Box::new(BufReader::new(file)))
}

/// Reads BED3 to BED6+ lines as [`Record`]s.
///
/// Blank lines, `#` comments and `track`/`browser` header lines are skipped.
/// The strand is taken from the sixth column when it is present.
pub struct BedSource<R: Read> {
    records: StringRecordsIntoIter<R>,
    /// Number of records produced so far.
    produced: u64,
}

impl<R: Read> BedSource<R> {
    pub fn new(reader: R) -> Self {
        let records = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .comment(Some(b'#'))
            .from_reader(reader)
            .into_records();
        Self {
            records,
            produced: 0,
        }
    }

    pub fn produced(&self) -> u64 {
        self.produced
    }
}

impl BedSource<Box<dyn Read>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        info!("Reading BED records from {}", path.display());
        Ok(Self::new(open_input(path)?))
    }
}

fn is_header(row: &StringRecord) -> bool {
    row.get(0)
        .map(|first| first.starts_with("track") || first.starts_with("browser"))
        .unwrap_or(false)
}

fn parse_coord(
    field: Option<&str>,
    name: &str,
    line: u64,
) -> anyhow::Result<PosType> {
    let field = field.ok_or_else(|| WindowError::MalformedRecord {
        line,
        reason: format!("missing {name} column"),
    })?;
    field.trim().parse::<PosType>().map_err(|e| {
        WindowError::MalformedRecord {
            line,
            reason: format!("invalid {name} '{field}': {e}"),
        }
        .into()
    })
}

fn parse_row(row: &StringRecord) -> anyhow::Result<Record> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    if row.len() < 3 {
        return Err(WindowError::MalformedRecord {
            line,
            reason: format!("expected at least 3 columns, found {}", row.len()),
        }
        .into());
    }
    let chrom = row.get(0).unwrap_or_default();
    if chrom.is_empty() {
        return Err(WindowError::MalformedRecord {
            line,
            reason: "empty chromosome name".to_string(),
        }
        .into());
    }
    let start = parse_coord(row.get(1), "start", line)?;
    let stop = parse_coord(row.get(2), "end", line)?;
    let strand = row
        .get(5)
        .map(|s| Strand::from_str(s.trim()).unwrap_or_default())
        .unwrap_or_default();

    Record::try_new(chrom, start, stop, strand).map_err(|e| {
        WindowError::MalformedRecord {
            line,
            reason: e.to_string(),
        }
        .into()
    })
}

impl<R: Read> RecordSource for BedSource<R> {
    fn next_record(&mut self) -> anyhow::Result<Option<Record>> {
        for row in self.records.by_ref() {
            let row = row.context("Failed to read BED line")?;
            if is_header(&row) {
                continue;
            }
            let record = parse_row(&row)?;
            self.produced += 1;
            return Ok(Some(record));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn source(text: &str) -> BedSource<Cursor<Vec<u8>>> {
        BedSource::new(Cursor::new(text.as_bytes().to_vec()))
    }

    fn collect(text: &str) -> anyhow::Result<Vec<Record>> {
        let mut source = source(text);
        let mut out = Vec::new();
        while let Some(record) = source.next_record()? {
            out.push(record);
        }
        Ok(out)
    }

    #[test]
    fn test_bed3() {
        let records = collect("chr1\t10\t20\nchr1\t15\t30\n").unwrap();
        assert_eq!(records, vec![
            Record::new("chr1", 10, 20),
            Record::new("chr1", 15, 30)
        ]);
    }

    #[test]
    fn test_bed6_strand() {
        let records =
            collect("chr2\t0\t5\tr1\t0\t-\nchr2\t1\t6\tr2\t0\t+\nchr2\t2\t7\tr3\t0\t.\n")
                .unwrap();
        let strands = records.iter().map(Record::strand).collect::<Vec<_>>();
        assert_eq!(strands, vec![Strand::Reverse, Strand::Forward, Strand::None]);
    }

    #[test]
    fn test_skips_headers_comments_and_blanks() {
        let text = "track type=bed name=reads\nbrowser position chr1:1-100\n# \
                    comment\n\nchr1\t1\t2\n";
        let mut source = source(text);
        assert_eq!(source.next_record().unwrap(), Some(Record::new("chr1", 1, 2)));
        assert_eq!(source.next_record().unwrap(), None);
        assert_eq!(source.produced(), 1);
    }

    #[test]
    fn test_malformed_coordinate() {
        let err = collect("chr1\t1\t2\nchr1\tabc\t5\n").unwrap_err();
        match err.downcast_ref::<WindowError>() {
            Some(WindowError::MalformedRecord { line, reason }) => {
                assert_eq!(*line, 2);
                assert!(reason.contains("start"));
            },
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_too_few_columns() {
        let err = collect("chr1\t1\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WindowError>(),
            Some(WindowError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_inverted_interval() {
        let err = collect("chr1\t9\t3\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WindowError>(),
            Some(WindowError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_open_input_plain() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".bed").tempfile().unwrap();
        writeln!(file, "chrM\t3\t4").unwrap();
        let mut source = BedSource::from_path(file.path()).unwrap();
        assert_eq!(source.next_record().unwrap(), Some(Record::new("chrM", 3, 4)));
    }

    #[cfg(feature = "compression")]
    #[test]
    fn test_open_input_gzip() {
        use std::io::Write;

        use flate2::write::GzEncoder;
        use flate2::Compression;

        let file = tempfile::Builder::new().suffix(".bed.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        writeln!(encoder, "chrM\t3\t4\nchrM\t5\t9").unwrap();
        encoder.finish().unwrap();

        let mut source = BedSource::from_path(file.path()).unwrap();
        assert_eq!(source.next_record().unwrap(), Some(Record::new("chrM", 3, 4)));
        assert_eq!(source.next_record().unwrap(), Some(Record::new("chrM", 5, 9)));
        assert_eq!(source.next_record().unwrap(), None);
    }
}
