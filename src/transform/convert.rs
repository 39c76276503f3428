use crate::foundation::core::Vec3;

/// Unit scale applied to capture positions: exports are in meters, both
/// output targets expect centimeters.
pub const METERS_TO_CENTIMETERS: f64 = 100.0;

/// Axis correspondence between the capture frame and a target frame.
///
/// The capture system is X=left/right, Y=vertical, Z=depth-towards-source.
/// Whether that matches the target depends on the output format, so the
/// mapping is an explicit named configuration rather than inline arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AxisMap {
    /// Capture and target frames already agree (vertical-up, consistent
    /// handedness): (x, y, z) passes through unchanged.
    #[default]
    Direct,
    /// Target defines Y as depth and Z as vertical: (x, y, z) → (x, z, y).
    /// Rotation components around Y and Z swap together with the axes.
    SwapYz,
}

impl AxisMap {
    fn apply(self, v: Vec3) -> Vec3 {
        match self {
            Self::Direct => v,
            Self::SwapYz => Vec3::new(v.x, v.z, v.y),
        }
    }
}

/// Unit assumption for raw rotation components.
///
/// The exports do not label their angle unit. The assumption is therefore a
/// caller-supplied configuration; `Auto` reproduces the legacy magnitude
/// heuristic for captures of unknown provenance but can misread legitimate
/// small-in-degrees values, so it is never a default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AngleUnit {
    /// Raw components are radians; convert to degrees.
    #[default]
    Radians,
    /// Raw components are already degrees; pass through.
    Degrees,
    /// Treat a triple as radians only when every component magnitude is
    /// ≤ π, otherwise assume it is already in degrees.
    Auto,
}

/// Conversion from capture-space triples to a target output frame.
///
/// A transform value is immutable configuration: build one per output
/// target and share it across every frame of a conversion.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CoordinateTransform {
    /// Axis correspondence between capture and target frames.
    pub axis_map: AxisMap,
    /// Multiplier applied to every position component after remapping.
    pub scale: f64,
    /// Unit assumption for raw rotation components.
    pub angle_unit: AngleUnit,
}

impl CoordinateTransform {
    /// Preset for the hierarchical animation (BVH) target, whose frame
    /// disagrees with capture on which axis is vertical.
    pub fn animation() -> Self {
        Self {
            axis_map: AxisMap::SwapYz,
            scale: METERS_TO_CENTIMETERS,
            angle_unit: AngleUnit::Radians,
        }
    }

    /// Preset for the web-viewer JSON target, whose frame matches capture.
    pub fn viewer() -> Self {
        Self {
            axis_map: AxisMap::Direct,
            scale: METERS_TO_CENTIMETERS,
            angle_unit: AngleUnit::Radians,
        }
    }

    /// Convert a raw position triple: axis remap, then unit scale.
    pub fn position(&self, raw: Vec3) -> Vec3 {
        self.axis_map.apply(raw) * self.scale
    }

    /// Convert a raw rotation triple to degrees in the target frame.
    ///
    /// The axis permutation applied to positions is applied to the matching
    /// rotation components so position and orientation stay consistent.
    pub fn rotation(&self, raw: Vec3) -> Vec3 {
        let remapped = self.axis_map.apply(raw);
        match self.angle_unit {
            AngleUnit::Radians => remapped.map(f64::to_degrees),
            AngleUnit::Degrees => remapped,
            AngleUnit::Auto => {
                let within_pi = remapped.x.abs() <= std::f64::consts::PI
                    && remapped.y.abs() <= std::f64::consts::PI
                    && remapped.z.abs() <= std::f64::consts::PI;
                if within_pi {
                    remapped.map(f64::to_degrees)
                } else {
                    remapped
                }
            }
        }
    }
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::viewer()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/convert.rs"]
mod tests;
