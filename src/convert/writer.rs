use crate::error::Result;
use crate::infer::infer_record;
use crate::types::{RawRecord, TypedRecord};
use std::io::{self, Write};

/// Position in the array being written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// `[` written, no record yet
    AwaitingFirst,
    /// At least one record written
    Streaming,
}

/// Writes a JSON array of objects one record at a time.
///
/// Usage is `begin`, any number of `write_record`, then `finish`. Only the
/// record being written is held in memory. Nothing is written on drop, so
/// an unfinished writer leaves an unterminated array in the sink.
pub struct DocumentWriter<W: Write> {
    sink: W,
    /// `\n` plus `indent` spaces, or empty in compact mode
    padding: Vec<u8>,
    state: State,
    count: usize,
}

impl<W: Write> DocumentWriter<W> {
    /// Start a document by writing the opening `[`
    pub fn begin(mut sink: W, indent: usize) -> Result<Self> {
        sink.write_all(b"[")?;

        let padding = if indent > 0 {
            let mut padding = Vec::with_capacity(indent + 1);
            padding.push(b'\n');
            padding.resize(indent + 1, b' ');
            padding
        } else {
            Vec::new()
        };

        Ok(DocumentWriter {
            sink,
            padding,
            state: State::AwaitingFirst,
            count: 0,
        })
    }

    /// Infer every field of `record` and write it as the next array element
    pub fn write_record(&mut self, record: &RawRecord) -> Result<()> {
        let typed = infer_record(record);
        self.write_typed(&typed)
    }

    /// Write an already-typed record as the next array element
    pub fn write_typed(&mut self, record: &TypedRecord) -> Result<()> {
        self.write_separator()?;
        serde_json::to_writer(&mut self.sink, record).map_err(io::Error::from)?;
        self.count += 1;
        Ok(())
    }

    /// Records written so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Close the array, flush the sink and return the record count
    pub fn finish(mut self) -> Result<usize> {
        if self.state == State::Streaming && !self.padding.is_empty() {
            self.sink.write_all(b"\n")?;
        }
        self.sink.write_all(b"]")?;
        self.sink.flush()?;
        Ok(self.count)
    }

    fn write_separator(&mut self) -> io::Result<()> {
        match self.state {
            State::AwaitingFirst => self.state = State::Streaming,
            State::Streaming => self.sink.write_all(b",")?,
        }
        self.sink.write_all(&self.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    fn raw(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn write_all(records: &[RawRecord], indent: usize) -> (String, usize) {
        let mut buffer = Vec::new();
        let mut writer = DocumentWriter::begin(&mut buffer, indent).unwrap();
        for record in records {
            writer.write_record(record).unwrap();
        }
        let count = writer.finish().unwrap();
        (String::from_utf8(buffer).unwrap(), count)
    }

    #[test]
    fn test_empty_document() {
        for indent in [0, 1, 4, 8] {
            let (output, count) = write_all(&[], indent);
            assert_eq!(output, "[]");
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_compact_output() {
        let records = vec![
            raw(&[("a", "1"), ("b", "true")]),
            raw(&[("a", "2"), ("b", "no")]),
        ];
        let (output, count) = write_all(&records, 0);

        assert_eq!(output, r#"[{"a":1,"b":true},{"a":2,"b":false}]"#);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_indented_output() {
        let records = vec![
            raw(&[("a", "1"), ("b", "true")]),
            raw(&[("a", "2"), ("b", "no")]),
        ];
        let (output, count) = write_all(&records, 4);

        assert_eq!(
            output,
            "[\n    {\"a\":1,\"b\":true},\n    {\"a\":2,\"b\":false}\n]"
        );
        assert_eq!(count, 2);
    }

    #[test]
    fn test_single_record_indent_two() {
        let (output, _) = write_all(&[raw(&[("x", "null")])], 2);
        assert_eq!(output, "[\n  {\"x\":null}\n]");
    }

    #[test]
    fn test_value_rendering() {
        let record = raw(&[
            ("empty", ""),
            ("int", "-7"),
            ("plus", "+5"),
            ("float", "2.5"),
            ("none", "None"),
            ("text", "  hello  "),
        ]);
        let (output, _) = write_all(&[record], 0);

        assert_eq!(
            output,
            r#"[{"empty":"","int":-7,"plus":5.0,"float":2.5,"none":null,"text":"  hello  "}]"#
        );
    }

    #[test]
    fn test_exponent_floats_keep_their_value() {
        let (output, _) = write_all(&[raw(&[("small", "1e-5"), ("big", "-2.5E+3")])], 0);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["small"].as_f64(), Some(1e-5));
        assert_eq!(parsed[0]["big"].as_f64(), Some(-2500.0));
    }

    #[test]
    fn test_wide_integer_written_exactly() {
        let digits = "123456789012345678901234567890123456789012";
        let (output, _) = write_all(&[raw(&[("id", digits)])], 0);
        assert_eq!(output, format!(r#"[{{"id":{digits}}}]"#));
    }

    #[test]
    fn test_non_ascii_written_verbatim() {
        let (output, _) = write_all(&[raw(&[("città", "Zürich ☕")])], 0);
        assert_eq!(output, "[{\"città\":\"Zürich ☕\"}]");
    }

    #[test]
    fn test_count_tracks_progress() {
        let mut buffer = Vec::new();
        let mut writer = DocumentWriter::begin(&mut buffer, 0).unwrap();
        assert_eq!(writer.count(), 0);
        writer.write_record(&raw(&[("a", "1")])).unwrap();
        writer.write_record(&raw(&[("a", "2")])).unwrap();
        assert_eq!(writer.count(), 2);
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_surfaces() {
        let err = DocumentWriter::begin(FailingSink, 4).err().unwrap();
        assert!(matches!(err, ConvertError::SinkWrite(_)));
    }

    /// Accepts writes but fails every flush
    struct UnflushableSink(Vec<u8>);

    impl Write for UnflushableSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_flush_failure_in_finish() {
        let mut sink = UnflushableSink(Vec::new());
        let mut writer = DocumentWriter::begin(&mut sink, 0).unwrap();
        writer.write_record(&raw(&[("a", "1")])).unwrap();

        let err = writer.finish().unwrap_err();

        assert!(matches!(err, ConvertError::SinkWrite(_)));
        assert_eq!(sink.0, br#"[{"a":1}]"#);
    }
}
