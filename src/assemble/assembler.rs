use std::collections::BTreeMap;

use crate::{
    foundation::core::{FrameRate, Vec3},
    foundation::error::{SwingcapError, SwingcapResult},
    skeleton::model::Skeleton,
    source::stream::SourceStream,
    transform::convert::CoordinateTransform,
};

/// Resolved position and rotation of one joint in one frame, in the target
/// output frame (centimeters / degrees).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedPose {
    /// Joint center position, centimeters.
    pub position: Vec3,
    /// Euler rotation triple, degrees.
    pub rotation: Vec3,
}

/// One frame's joint-name→pose mapping, independent of the source layout.
///
/// Built fresh per frame and never mutated after assembly; the map is
/// ordered so downstream serialization is deterministic.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct ResolvedFrame {
    /// Pose per skeleton joint name; holds an entry for every joint.
    pub joints: BTreeMap<&'static str, ResolvedPose>,
}

impl ResolvedFrame {
    /// Pose of `joint`, if the frame carries it.
    pub fn pose(&self, joint: &str) -> Option<&ResolvedPose> {
        self.joints.get(joint)
    }
}

/// An ordered list of resolved frames plus the frame-rate scalar.
///
/// This is the unit exchanged with both serializers.
#[derive(Clone, Debug)]
pub struct MotionSequence {
    frames: Vec<ResolvedFrame>,
    frame_rate: FrameRate,
}

impl MotionSequence {
    /// All resolved frames in order.
    pub fn frames(&self) -> &[ResolvedFrame] {
        &self.frames
    }

    /// Total frame count.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when the sequence holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Playback frame rate.
    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    /// Sequence duration in seconds (`frames / rate`).
    pub fn duration_secs(&self) -> f64 {
        self.frame_rate.frames_to_secs(self.frames.len())
    }

    /// Fetch a frame by index; an out-of-range index is a boundary error
    /// reported to the caller, not a crash.
    pub fn frame(&self, index: usize) -> SwingcapResult<&ResolvedFrame> {
        self.frames.get(index).ok_or_else(|| {
            SwingcapError::boundary(format!(
                "frame {index} requested from a {}-frame sequence",
                self.frames.len()
            ))
        })
    }
}

/// Combines the skeleton, the two decoded source streams and the coordinate
/// transform into per-frame joint poses.
///
/// Assemblers are cheap request-scoped values: build one per conversion
/// over its own input streams. The skeleton table is the only shared state
/// and it is read-only.
#[derive(Clone, Debug)]
pub struct MotionAssembler {
    skeleton: Skeleton,
    transform: CoordinateTransform,
    frame_rate: FrameRate,
}

impl MotionAssembler {
    /// Build an assembler over a skeleton and a target transform, at the
    /// default 30 fps capture rate.
    pub fn new(skeleton: Skeleton, transform: CoordinateTransform) -> Self {
        Self {
            skeleton,
            transform,
            frame_rate: FrameRate::default(),
        }
    }

    /// Override the configured frame rate.
    pub fn with_frame_rate(mut self, frame_rate: FrameRate) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// The skeleton this assembler resolves onto.
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// Assemble a full motion sequence from the two source streams.
    ///
    /// Sequence length is the minimum common frame count; a mismatch
    /// between the streams is logged as a warning and resolved by
    /// truncation, never treated as fatal.
    #[tracing::instrument(skip(self, centers, rotations))]
    pub fn assemble(
        &self,
        centers: &SourceStream,
        rotations: &SourceStream,
    ) -> SwingcapResult<MotionSequence> {
        if centers.len() != rotations.len() {
            tracing::warn!(
                centers = centers.len(),
                rotations = rotations.len(),
                "frame count mismatch between source streams, truncating to shorter"
            );
        }
        let num_frames = centers.len().min(rotations.len());

        let frames = (0..num_frames)
            .map(|frame| self.resolve_frame(centers, rotations, frame))
            .collect();

        Ok(MotionSequence {
            frames,
            frame_rate: self.frame_rate,
        })
    }

    /// Resolve every skeleton joint for one frame.
    ///
    /// Each joint draws its position and rotation triples through the
    /// streams' cyclic index mapping and the configured transform. The root
    /// (skeleton index 0) thereby receives the transformed first source
    /// center triple as its translation.
    fn resolve_frame(
        &self,
        centers: &SourceStream,
        rotations: &SourceStream,
        frame: usize,
    ) -> ResolvedFrame {
        let mut joints = BTreeMap::new();
        for (index, joint) in self.skeleton.joints().iter().enumerate() {
            let position = self.transform.position(centers.triple(frame, index));
            let rotation = self.transform.rotation(rotations.triple(frame, index));
            joints.insert(joint.name, ResolvedPose { position, rotation });
        }
        ResolvedFrame { joints }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/assembler.rs"]
mod tests;
