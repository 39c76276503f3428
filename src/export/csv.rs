use std::fmt::Write as _;

use crate::source::row::FIELDS_PER_JOINT;
use crate::source::stream::SourceStream;

/// Column suffixes of one 12-field joint block, in stream order.
const BLOCK_COLUMNS: [&str; FIELDS_PER_JOINT] = [
    "X", "Y", "Z", "Length", "vX", "vY", "vZ", "vAbs", "aX", "aY", "aZ", "aAbs",
];

/// Header row for a stream of `num_joints` joints:
/// `frame,X1,Y1,Z1,Length1,vX1,...,aAbs1,X2,...`.
pub fn csv_header(num_joints: usize) -> String {
    let mut columns = vec!["frame".to_string()];
    for joint in 1..=num_joints {
        for name in BLOCK_COLUMNS {
            columns.push(format!("{name}{joint}"));
        }
    }
    columns.join(",")
}

/// Re-emit a decoded raw stream as the fixed-schema CSV export.
///
/// Rows keep their decoded field values verbatim (no coordinate transform);
/// a leading frame-index column is added per the CSV schema. This is the
/// TXT→CSV leg of the toolchain, feeding the CSV-based viewer pipeline.
pub fn stream_to_csv(stream: &SourceStream) -> String {
    let mut out = String::new();
    out.push_str(&csv_header(stream.num_joints()));
    out.push('\n');
    for (frame, row) in stream.rows().iter().enumerate() {
        let _ = write!(out, "{frame}");
        for value in row {
            let _ = write!(out, ",{value}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/export/csv.rs"]
mod tests;
