//! Data structures describing the contents of a swap-benchmark results file.
//!
//! The types in this module form a read-only model of the CSV table written by
//! the external `swap_bench` program. They intentionally know nothing about
//! rendering; values are parsed once at load time and handed out as borrowed
//! views so the chart layer can stay free of file-format concerns.

use std::io::{self, Read, Write};
use std::path::Path;

use serde::Deserialize;

/// A single benchmark run as recorded by `swap_bench`.
///
/// Field names match the CSV header exactly so the row can be deserialized
/// directly by the `csv` crate. The `ratio` column is the producer's own
/// `xor_seconds / temp_seconds` and is carried verbatim rather than
/// recomputed, keeping the report in exact agreement with the benchmark's
/// console output.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct BenchRecord {
    /// Number of swap operations performed in the run.
    pub swaps: u64,
    /// Wall-clock duration of the temporary-variable swap loop, in seconds.
    pub temp_seconds: f64,
    /// Wall-clock duration of the XOR swap loop, in seconds.
    pub xor_seconds: f64,
    /// XOR duration divided by temp-variable duration, as stored by the producer.
    pub ratio: f64,
}

/// Ordered, immutable table of benchmark runs in file order.
///
/// The producer appends one row per invocation, so the last row is always the
/// most recent run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsTable {
    records: Vec<BenchRecord>,
}

impl ResultsTable {
    /// Parses a results table from any reader yielding CSV text with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for row in csv_reader.deserialize() {
            records.push(row?);
        }
        Ok(Self { records })
    }

    /// Parses a results table from a CSV file on disk.
    ///
    /// Callers are expected to have checked that the file exists; a missing
    /// file surfaces here as an ordinary I/O error from the `csv` crate.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, csv::Error> {
        let mut csv_reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in csv_reader.deserialize() {
            records.push(row?);
        }
        Ok(Self { records })
    }

    /// Returns all records in file order.
    pub fn records(&self) -> &[BenchRecord] {
        &self.records
    }

    /// Returns the number of data rows in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the last `count` records in file order, or all of them if the
    /// table is shorter than `count`.
    pub fn tail(&self, count: usize) -> &[BenchRecord] {
        let start = self.records.len().saturating_sub(count);
        &self.records[start..]
    }

    /// Returns the most recent run, i.e. the last row of the file.
    pub fn latest(&self) -> Option<&BenchRecord> {
        self.records.last()
    }

    /// Writes the last `count` records as an aligned text table.
    ///
    /// The exact formatting is for human inspection only and is not a
    /// compatibility contract.
    pub fn write_tail<W: Write>(&self, mut out: W, count: usize) -> io::Result<()> {
        writeln!(
            out,
            "{:>12} {:>14} {:>13} {:>8}",
            "swaps", "temp_seconds", "xor_seconds", "ratio"
        )?;
        for record in self.tail(count) {
            writeln!(
                out,
                "{:>12} {:>14.6} {:>13.6} {:>8.4}",
                record.swaps, record.temp_seconds, record.xor_seconds, record.ratio
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ResultsTable;

    const SAMPLE: &str = "\
swaps,temp_seconds,xor_seconds,ratio
1000,0.01,0.02,2.0
1000000,1.5,0.9,0.6
";

    #[test]
    fn parses_rows_in_file_order() {
        let table = ResultsTable::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].swaps, 1000);
        assert_eq!(table.records()[1].swaps, 1_000_000);
    }

    #[test]
    fn latest_is_last_row() {
        let table = ResultsTable::from_reader(SAMPLE.as_bytes()).unwrap();
        let latest = table.latest().unwrap();
        assert_eq!(latest.swaps, 1_000_000);
        assert_eq!(latest.temp_seconds, 1.5);
        assert_eq!(latest.xor_seconds, 0.9);
        assert_eq!(latest.ratio, 0.6);
    }

    #[test]
    fn latest_on_empty_table_is_none() {
        let table = ResultsTable::from_reader("swaps,temp_seconds,xor_seconds,ratio\n".as_bytes())
            .unwrap();
        assert!(table.is_empty());
        assert!(table.latest().is_none());
    }

    #[test]
    fn tail_is_clamped_to_table_length() {
        let table = ResultsTable::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.tail(5).len(), 2);
        assert_eq!(table.tail(1).len(), 1);
        assert_eq!(table.tail(1)[0].swaps, 1_000_000);
    }

    #[test]
    fn missing_column_is_a_parse_error() {
        let malformed = "swaps,temp_seconds,xor_seconds\n1000,0.01,0.02\n";
        assert!(ResultsTable::from_reader(malformed.as_bytes()).is_err());
    }

    #[test]
    fn tail_dump_contains_header_and_values() {
        let table = ResultsTable::from_reader(SAMPLE.as_bytes()).unwrap();
        let mut buffer = Vec::new();
        table.write_tail(&mut buffer, 5).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("temp_seconds"));
        assert!(text.contains("1000000"));
        assert!(text.contains("0.9000"));
    }
}
