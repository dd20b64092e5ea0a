//! CSV series sink.

use std::io::Write;

use csv::Writer;

use crate::{SeriesResult, SeriesRow, SeriesSink};

/// Streams rows as CSV to any writer, header first.
pub struct CsvSink<W: Write> {
    writer:   Writer<W>,
    finished: bool,
}

impl<W: Write> CsvSink<W> {
    /// Wrap `inner` and write the header row.
    pub fn new(inner: W) -> SeriesResult<Self> {
        let mut writer = Writer::from_writer(inner);
        writer.write_record(SeriesRow::header())?;
        Ok(Self { writer, finished: false })
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> SeriesResult<W> {
        self.writer.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> SeriesSink for CsvSink<W> {
    fn record(&mut self, row: &SeriesRow) -> SeriesResult<()> {
        self.finished = false;
        self.writer.write_record(row.fields())?;
        Ok(())
    }

    fn finish(&mut self) -> SeriesResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
