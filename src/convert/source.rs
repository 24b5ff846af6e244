use crate::error::{ConvertError, Result};
use crate::types::{ConvertConfig, RawRecord};
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Header-row tabular input bound to a generic reader
pub struct CsvSource<R: Read> {
    rdr: csv::Reader<R>,
}

impl CsvSource<File> {
    /// Open a tabular file, reporting a missing file as `SourceNotFound`
    pub fn from_path<P: AsRef<Path>>(path: P, config: &ConvertConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConvertError::SourceNotFound {
                path: path.to_path_buf(),
            },
            _ => ConvertError::Source(e.into()),
        })?;
        Ok(Self::from_reader(file, config))
    }
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(reader: R, config: &ConvertConfig) -> Self {
        let rdr = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(config.delimiter)
            .flexible(true)
            .from_reader(reader);
        Self { rdr }
    }

    /// Read the header row and stream the remaining rows as `RawRecord`s.
    ///
    /// Input without a header row yields no records.
    pub fn into_records(mut self) -> Result<RawRecords<R>> {
        let headers = self.rdr.headers()?.clone();
        Ok(RawRecords {
            headers,
            rows: self.rdr.into_records(),
        })
    }
}

/// Forward-only cursor over the data rows of a `CsvSource`
pub struct RawRecords<R: Read> {
    headers: StringRecord,
    rows: StringRecordsIntoIter<R>,
}

impl<R: Read> RawRecords<R> {
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Pair a row with the header names.
    ///
    /// Short rows are padded with empty values; values past the last
    /// header are dropped.
    fn to_raw(&self, row: &StringRecord) -> RawRecord {
        if row.len() != self.headers.len() {
            tracing::warn!(
                line = row.position().map(|p| p.line()),
                expected = self.headers.len(),
                found = row.len(),
                "row field count differs from header"
            );
        }

        let mut record = RawRecord::with_capacity(self.headers.len());
        for (i, name) in self.headers.iter().enumerate() {
            let value = row.get(i).unwrap_or("");
            record.insert(name.to_string(), value.to_string());
        }
        record
    }
}

impl<R: Read> Iterator for RawRecords<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.rows.next()? {
            Ok(row) => row,
            Err(e) => return Some(Err(e.into())),
        };
        Some(Ok(self.to_raw(&row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(input: &str) -> Vec<RawRecord> {
        CsvSource::from_reader(input.as_bytes(), &ConvertConfig::default())
            .into_records()
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_header_keys_in_order() {
        let rows = records("name,age,city\nAlice,30,Paris\nBob,25,Oslo\n");

        assert_eq!(rows.len(), 2);
        let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "age", "city"]);
        assert_eq!(rows[1]["name"], "Bob");
        assert_eq!(rows[1]["city"], "Oslo");
    }

    #[test]
    fn test_quoted_fields() {
        let rows = records("a,b\n\"x, y\",\"say \"\"hi\"\"\"\n");
        assert_eq!(rows[0]["a"], "x, y");
        assert_eq!(rows[0]["b"], "say \"hi\"");
    }

    #[test]
    fn test_short_row_padded_with_empty() {
        let rows = records("a,b,c\n1\n");
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "");
        assert_eq!(rows[0]["c"], "");
    }

    #[test]
    fn test_extra_values_dropped() {
        let rows = records("a,b\n1,2,3\n");
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0]["b"], "2");
    }

    #[test]
    fn test_header_only_and_empty_input() {
        assert!(records("a,b\n").is_empty());
        assert!(records("").is_empty());
    }

    #[test]
    fn test_custom_delimiter() {
        let config = ConvertConfig::default().with_delimiter(b';');
        let rows: Vec<RawRecord> = CsvSource::from_reader("a;b\n1;2\n".as_bytes(), &config)
            .into_records()
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "2");
    }

    #[test]
    fn test_missing_file() {
        let err = CsvSource::from_path("/definitely/not/here.csv", &ConvertConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, ConvertError::SourceNotFound { .. }));
    }
}
