use std::collections::BTreeMap;

use crate::{
    assemble::assembler::MotionSequence,
    foundation::error::{SwingcapError, SwingcapResult},
    skeleton::model::Skeleton,
};

/// Flat per-joint sample consumed by the Three.js viewer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewerJointSample {
    /// Position X, centimeters.
    pub x: f64,
    /// Position Y, centimeters.
    pub y: f64,
    /// Position Z, centimeters.
    pub z: f64,
    /// Rotation around X, degrees.
    pub rx: f64,
    /// Rotation around Y, degrees.
    pub ry: f64,
    /// Rotation around Z, degrees.
    pub rz: f64,
}

/// Complete motion document served to the web viewer.
///
/// Sequence-level metadata (names, bone pairs, offsets, timing) travels with
/// the frames so the viewer can build its scene from a single response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerDocument {
    /// Skeleton joint names in table order.
    pub joint_names: Vec<String>,
    /// `[parent, child]` name pairs derived from the parent relation.
    pub bone_connections: Vec<[String; 2]>,
    /// Fixed parent-relative joint offsets, centimeters.
    pub joint_offsets: BTreeMap<String, [f64; 3]>,
    /// Per-frame joint samples, keyed by joint name.
    pub frames: Vec<BTreeMap<String, ViewerJointSample>>,
    /// Frames per second.
    pub frame_rate: f64,
    /// Sequence duration in seconds.
    pub duration: f64,
    /// Total frame count.
    pub total_frames: usize,
}

/// Build the viewer document for an assembled sequence.
pub fn viewer_document(skeleton: &Skeleton, sequence: &MotionSequence) -> ViewerDocument {
    let joint_names = skeleton
        .joint_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let bone_connections = skeleton
        .bone_connections()
        .into_iter()
        .map(|(parent, child)| [parent.to_string(), child.to_string()])
        .collect();
    let joint_offsets = skeleton
        .joints()
        .iter()
        .map(|joint| {
            (
                joint.name.to_string(),
                [joint.offset.x, joint.offset.y, joint.offset.z],
            )
        })
        .collect();

    let frames = sequence
        .frames()
        .iter()
        .map(|frame| {
            frame
                .joints
                .iter()
                .map(|(&name, pose)| {
                    (
                        name.to_string(),
                        ViewerJointSample {
                            x: pose.position.x,
                            y: pose.position.y,
                            z: pose.position.z,
                            rx: pose.rotation.x,
                            ry: pose.rotation.y,
                            rz: pose.rotation.z,
                        },
                    )
                })
                .collect()
        })
        .collect();

    ViewerDocument {
        joint_names,
        bone_connections,
        joint_offsets,
        frames,
        frame_rate: sequence.frame_rate().as_f64(),
        duration: sequence.duration_secs(),
        total_frames: sequence.len(),
    }
}

/// Serialize the viewer document to a JSON string.
pub fn viewer_json(skeleton: &Skeleton, sequence: &MotionSequence) -> SwingcapResult<String> {
    serde_json::to_string_pretty(&viewer_document(skeleton, sequence))
        .map_err(|err| SwingcapError::serde(err.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/export/viewer.rs"]
mod tests;
