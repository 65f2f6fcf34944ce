//! CSV output backend for completion records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use qn_engine::CompletionRecord;

use crate::ReportResult;

/// Writes the run's completion records to one CSV file.
///
/// Columns: `passenger_id, arrival_min, departure_min, sojourn_min`.
/// Times are minutes from run start, six decimal places.
pub struct RecordWriter<W: Write> {
    inner: Writer<W>,
}

impl RecordWriter<File> {
    /// Open (or create) `path` and write the header row.
    pub fn create(path: &Path) -> ReportResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> RecordWriter<W> {
    /// Wrap any `Write` sink (a `Vec<u8>` in tests) and write the header.
    pub fn from_writer(sink: W) -> ReportResult<Self> {
        let mut inner = Writer::from_writer(sink);
        inner.write_record(["passenger_id", "arrival_min", "departure_min", "sojourn_min"])?;
        Ok(Self { inner })
    }

    /// Append one row per record, in the order given.
    pub fn write_records(&mut self, records: &[CompletionRecord]) -> ReportResult<()> {
        for r in records {
            self.inner.write_record(&[
                r.passenger.0.to_string(),
                format!("{:.6}", r.arrival.minutes()),
                format!("{:.6}", r.departure.minutes()),
                format!("{:.6}", r.sojourn),
            ])?;
        }
        Ok(())
    }

    /// Flush and return the underlying sink.
    pub fn finish(self) -> ReportResult<W> {
        Ok(self
            .inner
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()))?)
    }
}
