use crate::foundation::core::Vec3;
use crate::source::row::{source_joint_count, triple_at, FIELDS_PER_JOINT};

/// Which export a stream was decoded from; used for log context only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamKind {
    /// Joint-center positions (up to 25 source joints).
    Centers,
    /// Joint rotations (up to 21 source joints).
    Rotations,
}

impl StreamKind {
    /// Short lowercase label for logs and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Centers => "centers",
            Self::Rotations => "rotations",
        }
    }
}

/// One fully decoded source export: flat numeric rows, one per frame.
///
/// The source joint count is recomputed per file from the first data row
/// rather than assumed constant, because the centers and rotations exports
/// carry different counts. Immutable once constructed.
#[derive(Clone, Debug)]
pub struct SourceStream {
    kind: StreamKind,
    rows: Vec<Vec<f64>>,
    num_joints: usize,
}

impl SourceStream {
    /// Wrap decoded rows, deriving the per-file joint count.
    pub fn new(kind: StreamKind, rows: Vec<Vec<f64>>) -> Self {
        let num_joints = rows
            .iter()
            .find(|row| !row.is_empty())
            .map(|row| source_joint_count(row.len()))
            .unwrap_or(0);
        tracing::debug!(
            kind = kind.label(),
            frames = rows.len(),
            joints = num_joints,
            "decoded source stream"
        );
        Self {
            kind,
            rows,
            num_joints,
        }
    }

    /// Which export this stream came from.
    pub fn kind(&self) -> StreamKind {
        self.kind
    }

    /// Number of decoded frames.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no frames were decoded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Source joints per frame, derived from the first data row.
    pub fn num_joints(&self) -> usize {
        self.num_joints
    }

    /// Raw flat row for `frame`, if present.
    pub fn row(&self, frame: usize) -> Option<&[f64]> {
        self.rows.get(frame).map(Vec::as_slice)
    }

    /// Map a skeleton joint index onto a source joint index.
    ///
    /// The skeleton's 22 joints need not match the stream's joint count, so
    /// index `i` draws from source joint `i % num_joints`. This cyclic reuse
    /// is a compatibility approximation kept from the original exports, not
    /// a precise anatomical correspondence: it merely guarantees every
    /// skeleton joint receives some value even from a shorter stream.
    pub fn source_index_for(&self, skeleton_index: usize) -> usize {
        if self.num_joints == 0 {
            0
        } else {
            skeleton_index % self.num_joints
        }
    }

    /// Decode the (X, Y, Z) triple for a skeleton joint at `frame`.
    ///
    /// Returns a zero triple when the frame is absent or the row is too
    /// short for the mapped block (see [`triple_at`]).
    pub fn triple(&self, frame: usize, skeleton_index: usize) -> Vec3 {
        let source_index = self.source_index_for(skeleton_index);
        match self.row(frame) {
            Some(row) => triple_at(row, source_index),
            None => triple_at(&[], 0),
        }
    }

    /// Raw rows, for re-export to CSV.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Fields a complete row of this stream carries.
    pub fn row_width(&self) -> usize {
        self.num_joints * FIELDS_PER_JOINT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/stream.rs"]
mod tests;
