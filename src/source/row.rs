use crate::foundation::core::{vec3_zero, Vec3};

/// Fields per source joint block in both export streams.
///
/// Each block is `X, Y, Z, Length, vX, vY, vZ, vAbs, aX, aY, aZ, aAbs`;
/// only the leading position/rotation triple is consumed by the converter,
/// the derived kinematics are carried by the exports but ignored here.
pub const FIELDS_PER_JOINT: usize = 12;

/// Number of source joints encoded in a row of `len` fields.
pub fn source_joint_count(len: usize) -> usize {
    len / FIELDS_PER_JOINT
}

/// Extract the (X, Y, Z) triple of source joint `joint_index` from a flat row.
///
/// Returns a zero triple whenever the row is too short to hold the block
/// head (`joint_index * 12 + 2 >= row.len()`). Real captures sometimes end
/// with truncated rows, so short reads degrade gracefully instead of
/// failing the whole conversion.
pub fn triple_at(row: &[f64], joint_index: usize) -> Vec3 {
    let start = joint_index * FIELDS_PER_JOINT;
    match row.get(start..start + 3) {
        Some([x, y, z]) => Vec3::new(*x, *y, *z),
        _ => vec3_zero(),
    }
}
