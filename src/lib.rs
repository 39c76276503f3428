//! Swingcap converts fixed-schema baseball-swing motion-capture exports into
//! CSV, BVH animation and viewer JSON.
//!
//! A capture session produces two flat numeric exports: joint centers
//! (positions plus derived kinematics) and joint rotations, both striding 12
//! fields per source joint. Swingcap decodes those rows onto a fixed 22-joint
//! anatomical skeleton and re-projects the values into the target format's
//! coordinate frame.
//!
//! # Pipeline overview
//!
//! 1. **Read**: `TXT/CSV export -> SourceStream` (one [`RowSource`] adapter
//!    per input format, one shared decoder)
//! 2. **Transform**: `capture triple -> target triple`
//!    ([`CoordinateTransform`]: axis map, unit scale, angle unit)
//! 3. **Assemble**: `Skeleton + centers + rotations -> MotionSequence`
//!    (joint-name-keyed poses per frame)
//! 4. **Serialize**: `MotionSequence -> BVH text | viewer JSON`, or re-emit a
//!    raw stream as schema CSV
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: serializers are byte-stable for a given
//!   sequence.
//! - **Request-scoped state**: every conversion owns its streams and
//!   assembler; the only shared value is the immutable skeleton table.
//! - **Degrade gracefully**: short or malformed rows never abort a
//!   conversion; they decode to zero triples or are skipped with a warning.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod assemble;
mod export;
mod foundation;
mod skeleton;
mod source;
mod transform;

pub use assemble::assembler::{MotionAssembler, MotionSequence, ResolvedFrame, ResolvedPose};
pub use export::bvh::bvh_to_string;
pub use export::csv::{csv_header, stream_to_csv};
pub use export::viewer::{viewer_document, viewer_json, ViewerDocument, ViewerJointSample};
pub use foundation::core::{vec3_zero, FrameRate, Vec3};
pub use foundation::error::{SwingcapError, SwingcapResult};
pub use skeleton::model::{Joint, Skeleton};
pub use source::reader::{
    load_stream, read_stream, CsvSource, DelimitedTextSource, RowSource, SourceFormat,
};
pub use source::row::{source_joint_count, triple_at, FIELDS_PER_JOINT};
pub use source::stream::{SourceStream, StreamKind};
pub use transform::convert::{
    AngleUnit, AxisMap, CoordinateTransform, METERS_TO_CENTIMETERS,
};
