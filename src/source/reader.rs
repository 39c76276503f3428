use std::path::Path;

use crate::foundation::error::{SwingcapError, SwingcapResult};
use crate::source::stream::{SourceStream, StreamKind};

/// A decoder from one export's text content to flat numeric frame rows.
///
/// The TXT and CSV exports carry the same per-joint block layout behind
/// different delimiters and headers, so the one canonical frame decoder and
/// assembler sit behind this seam instead of being duplicated per format.
/// IO is front-loaded by the caller: sources parse borrowed content only.
pub trait RowSource {
    /// Decode every frame row, skipping malformed rows with a warning.
    fn read_rows(&mut self) -> SwingcapResult<Vec<Vec<f64>>>;
}

/// Reader for the whitespace-delimited TXT export.
///
/// The first line is a header and is skipped; every following non-empty
/// line is expected to be whitespace-separated floats. Rows that fail to
/// parse are dropped with a logged warning, never aborting the conversion.
pub struct DelimitedTextSource<'a> {
    content: &'a str,
}

impl<'a> DelimitedTextSource<'a> {
    /// Wrap TXT export content.
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }
}

impl RowSource for DelimitedTextSource<'_> {
    fn read_rows(&mut self) -> SwingcapResult<Vec<Vec<f64>>> {
        let mut rows = Vec::new();
        for (line_no, line) in self.content.lines().enumerate().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_fields(line.split_whitespace()) {
                Some(row) => rows.push(row),
                None => {
                    tracing::warn!(line = line_no + 1, "skipping unparseable txt row");
                }
            }
        }
        Ok(rows)
    }
}

/// Reader for the comma-delimited CSV export.
///
/// The header row names columns `frame,X1,Y1,Z1,Length1,vX1,...,aAbs1,X2,...`;
/// the leading frame-index column (when present) is dropped so the decoded
/// rows carry exactly the 12-field joint blocks.
pub struct CsvSource<'a> {
    content: &'a str,
}

impl<'a> CsvSource<'a> {
    /// Wrap CSV export content.
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }
}

impl RowSource for CsvSource<'_> {
    fn read_rows(&mut self) -> SwingcapResult<Vec<Vec<f64>>> {
        let mut lines = self.content.lines().enumerate();
        let has_frame_column = match lines.next() {
            Some((_, header)) => header
                .split(',')
                .next()
                .is_some_and(|first| first.trim().eq_ignore_ascii_case("frame")),
            None => false,
        };

        let mut rows = Vec::new();
        for (line_no, line) in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split(',');
            if has_frame_column {
                fields.next();
            }
            match parse_fields(fields) {
                Some(row) => rows.push(row),
                None => {
                    tracing::warn!(line = line_no + 1, "skipping unparseable csv row");
                }
            }
        }
        Ok(rows)
    }
}

fn parse_fields<'a>(fields: impl Iterator<Item = &'a str>) -> Option<Vec<f64>> {
    fields
        .map(|field| field.trim().parse::<f64>().ok())
        .collect()
}

/// Decode a full stream from a row source.
///
/// Content that yields no frame rows at all is a parse error: there is
/// nothing to convert and silently producing an empty sequence would hide a
/// wrong input file.
pub fn read_stream(kind: StreamKind, source: &mut dyn RowSource) -> SwingcapResult<SourceStream> {
    let rows = source.read_rows()?;
    if rows.is_empty() {
        return Err(SwingcapError::parse(format!(
            "{} export contains no decodable frame rows",
            kind.label()
        )));
    }
    Ok(SourceStream::new(kind, rows))
}

/// Input format accepted by the file-level loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    /// Whitespace-delimited TXT export.
    Txt,
    /// Comma-delimited CSV export with header row.
    Csv,
}

/// Load and decode one export file.
///
/// An absent or unreadable file is fatal to the requested conversion and is
/// reported as [`SwingcapError::MissingInput`].
pub fn load_stream(
    kind: StreamKind,
    format: SourceFormat,
    path: &Path,
) -> SwingcapResult<SourceStream> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        SwingcapError::missing_input(format!("{}: {err}", path.display()))
    })?;
    match format {
        SourceFormat::Txt => read_stream(kind, &mut DelimitedTextSource::new(&content)),
        SourceFormat::Csv => read_stream(kind, &mut CsvSource::new(&content)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/reader.rs"]
mod tests;
