//! Streaming conversion of tabular records into a JSON array
//!
//! Records are pulled one at a time from a [`CsvSource`] (or any iterator of
//! [`RawRecord`]s), typed, and written straight to the sink by a
//! [`DocumentWriter`]. Memory use depends on the width of a record, not on
//! the number of records.

pub mod source;
pub mod writer;

pub use source::{CsvSource, RawRecords};
pub use writer::DocumentWriter;

use crate::error::Result;
use crate::types::{ConvertConfig, RawRecord};
use std::io::{Read, Write};

/// Write `records` to `sink` as one JSON array and return how many were written.
///
/// `indent` of 0 gives a single line with no whitespace between records;
/// anything larger puts each record on its own line, indented by that many
/// spaces. The first error from either side ends the conversion and leaves
/// the sink holding an incomplete document.
pub fn convert<I, W>(records: I, sink: W, indent: usize) -> Result<usize>
where
    I: IntoIterator<Item = Result<RawRecord>>,
    W: Write,
{
    let mut writer = DocumentWriter::begin(sink, indent)?;
    for record in records {
        writer.write_record(&record?)?;
    }
    writer.finish()
}

/// Convert header-row tabular text from `reader` into a JSON array on `sink`
pub fn convert_reader<R, W>(reader: R, sink: W, config: &ConvertConfig) -> Result<usize>
where
    R: Read,
    W: Write,
{
    let records = CsvSource::from_reader(reader, config).into_records()?;
    tracing::debug!(
        fields = records.headers().len(),
        indent = config.indent,
        delimiter = %char::from(config.delimiter),
        "converting tabular input"
    );
    convert(records, sink, config.indent)
}
