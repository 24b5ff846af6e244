//! # Ingot - CSV to typed JSON
//!
//! Converts header-row tabular text into a single JSON array of objects,
//! inferring native types for every field along the way.
//!
//! ## Modules
//!
//! - **infer**: Classify raw field text as string, integer, float, boolean or null
//! - **convert**: Stream records from a CSV source into a JSON document
//!
//! ## Quick Start
//!
//! ### Value Inference
//!
//! ```rust
//! use ingot::{infer, Integer, TypedValue};
//!
//! assert_eq!(infer("42"), TypedValue::Integer(Integer::from(42)));
//! assert_eq!(infer("+5"), TypedValue::Float(5.0));
//! assert_eq!(infer("Yes"), TypedValue::Boolean(true));
//! assert_eq!(infer("none"), TypedValue::Null);
//! assert_eq!(infer("  hello  "), TypedValue::String("  hello  ".to_string()));
//! ```
//!
//! ### Streaming Conversion
//!
//! ```rust
//! use ingot::{convert_reader, ConvertConfig};
//!
//! # fn main() -> ingot::Result<()> {
//! let csv = "id,name,active\n1,Alice,true\n2,Bob,no\n";
//! let mut output = Vec::new();
//!
//! let config = ConvertConfig::default().with_indent(0);
//! let count = convert_reader(csv.as_bytes(), &mut output, &config)?;
//!
//! assert_eq!(count, 2);
//! assert_eq!(
//!     String::from_utf8_lossy(&output),
//!     r#"[{"id":1,"name":"Alice","active":true},{"id":2,"name":"Bob","active":false}]"#
//! );
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub mod convert;
pub mod error;
pub mod infer;
pub mod types;

pub use convert::{convert, convert_reader, CsvSource, DocumentWriter, RawRecords};
pub use error::{ConvertError, Result};
pub use infer::{infer, infer_record};
pub use types::{ConvertConfig, ConvertReport, Integer, RawRecord, TypedRecord, TypedValue};

/// Main entry point: convert a CSV file into a JSON file
///
/// The input is opened before the output is created, so a missing input
/// leaves no output file behind.
pub fn convert_file<P, Q>(input: P, output: Q, config: &ConvertConfig) -> Result<ConvertReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let records = CsvSource::from_path(input, config)?.into_records()?;
    let sink = BufWriter::new(File::create(output)?);

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        indent = config.indent,
        "starting conversion"
    );
    let count = convert(records, sink, config.indent)?;
    tracing::info!(records = count, output = %output.display(), "conversion finished");

    Ok(ConvertReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records: count,
    })
}
