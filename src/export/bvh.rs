use std::fmt::Write as _;

use crate::{
    assemble::assembler::{MotionSequence, ResolvedFrame},
    foundation::core::Vec3,
    foundation::error::{SwingcapError, SwingcapResult},
    skeleton::model::Skeleton,
};

/// Constant end-site offset emitted for every leaf joint, in centimeters.
const END_SITE_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// Serialize a motion sequence to BVH text.
///
/// The hierarchy section is a pre-order traversal of the skeleton; the root
/// declares 6 channels (position + rotation), every other joint 3 rotation
/// channels in Z X Y order. Motion lines flatten the channel values in the
/// same traversal and channel order, so each line carries exactly
/// `6 + 3 * (joint_count - 1)` fields. Output is byte-for-byte stable for a
/// given sequence.
pub fn bvh_to_string(skeleton: &Skeleton, sequence: &MotionSequence) -> SwingcapResult<String> {
    let mut out = String::new();
    out.push_str("HIERARCHY\n");
    write_joint(&mut out, skeleton, skeleton.root(), 0);

    out.push_str("MOTION\n");
    let _ = writeln!(out, "Frames: {}", sequence.len());
    let _ = writeln!(
        out,
        "Frame Time: {:.6}",
        sequence.frame_rate().frame_time_secs()
    );

    let order = preorder(skeleton);
    for frame in sequence.frames() {
        write_motion_line(&mut out, skeleton, frame, &order)?;
    }
    Ok(out)
}

fn write_joint(out: &mut String, skeleton: &Skeleton, index: usize, depth: usize) {
    let indent = "  ".repeat(depth);
    let joint = skeleton.joint(index);

    let keyword = if index == skeleton.root() {
        "ROOT"
    } else {
        "JOINT"
    };
    let _ = writeln!(out, "{indent}{keyword} {}", joint.name);
    let _ = writeln!(out, "{indent}{{");
    let _ = writeln!(
        out,
        "{indent}  OFFSET {:.6} {:.6} {:.6}",
        joint.offset.x, joint.offset.y, joint.offset.z
    );
    if index == skeleton.root() {
        let _ = writeln!(
            out,
            "{indent}  CHANNELS 6 Xposition Yposition Zposition Zrotation Xrotation Yrotation"
        );
    } else {
        let _ = writeln!(out, "{indent}  CHANNELS 3 Zrotation Xrotation Yrotation");
    }

    for &child in skeleton.children(index) {
        write_joint(out, skeleton, child, depth + 1);
    }

    if skeleton.is_leaf(index) {
        let _ = writeln!(out, "{indent}  End Site");
        let _ = writeln!(out, "{indent}  {{");
        let _ = writeln!(
            out,
            "{indent}    OFFSET {:.6} {:.6} {:.6}",
            END_SITE_OFFSET.x, END_SITE_OFFSET.y, END_SITE_OFFSET.z
        );
        let _ = writeln!(out, "{indent}  }}");
    }

    let _ = writeln!(out, "{indent}}}");
}

/// Hierarchy traversal order shared by the HIERARCHY and MOTION sections.
fn preorder(skeleton: &Skeleton) -> Vec<usize> {
    let mut order = Vec::with_capacity(skeleton.len());
    let mut stack = vec![skeleton.root()];
    while let Some(index) = stack.pop() {
        order.push(index);
        // Reverse so children pop in table order.
        for &child in skeleton.children(index).iter().rev() {
            stack.push(child);
        }
    }
    order
}

fn write_motion_line(
    out: &mut String,
    skeleton: &Skeleton,
    frame: &ResolvedFrame,
    order: &[usize],
) -> SwingcapResult<()> {
    let mut fields: Vec<String> = Vec::with_capacity(6 + 3 * (order.len() - 1));
    for &index in order {
        let name = skeleton.joint(index).name;
        let pose = frame.pose(name).ok_or_else(|| {
            SwingcapError::serde(format!("resolved frame is missing joint '{name}'"))
        })?;
        if index == skeleton.root() {
            fields.push(format!("{:.6}", pose.position.x));
            fields.push(format!("{:.6}", pose.position.y));
            fields.push(format!("{:.6}", pose.position.z));
        }
        // Declared channel order is Z X Y.
        fields.push(format!("{:.6}", pose.rotation.z));
        fields.push(format!("{:.6}", pose.rotation.x));
        fields.push(format!("{:.6}", pose.rotation.y));
    }
    out.push_str(&fields.join(" "));
    out.push('\n');
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/bvh.rs"]
mod tests;
