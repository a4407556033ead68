//! CSV serialization of projected rows.
//!
//! A field is quoted, with inner quotes doubled, only when it contains a
//! comma, a double quote, `\n` or `\r`. Records end with a single `\n`.

use crate::error::ExportError;
use crate::models::{CsvRow, HEADERS};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// UTF-8 byte-order mark written in Excel-compatibility mode.
pub const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Open the output sink: a created/truncated file, or standard output.
pub fn open_sink(output: Option<&Path>) -> Result<Box<dyn Write>, ExportError> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            tracing::debug!(path = %path.display(), "opened output file");
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Write the header and all `rows` to `sink`. Returns the number of data
/// rows written.
pub fn write_csv<W, I>(mut sink: W, rows: I, excel: bool) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = CsvRow>,
{
    if excel {
        sink.write_all(&BOM)?;
    }
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);
    wtr.write_record(HEADERS)?;
    let mut count = 0usize;
    for row in rows {
        wtr.write_record(row.fields())?;
        count += 1;
    }
    wtr.flush()?;
    let mut sink = wtr
        .into_inner()
        .map_err(|e| ExportError::Io(io::Error::new(e.error().kind(), e.error().to_string())))?;
    sink.flush()?;
    tracing::debug!(rows = count, "wrote csv");
    Ok(count)
}
