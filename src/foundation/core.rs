use crate::foundation::error::{SwingcapError, SwingcapResult};

/// 3-vector used for positions, offsets and Euler rotation triples.
pub type Vec3 = cgmath::Vector3<f64>;

/// Zero vector shorthand for degraded decode paths.
pub fn vec3_zero() -> Vec3 {
    Vec3::new(0.0, 0.0, 0.0)
}

/// Capture/playback frame rate as an exact rational (frames per second).
///
/// Stored as num/den so that common NTSC-style rates stay exact; the default
/// capture rate for swing exports is 30/1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRate {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds); must be > 0.
    pub den: u32,
}

impl FrameRate {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> SwingcapResult<Self> {
        if den == 0 {
            return Err(SwingcapError::parse("FrameRate den must be > 0"));
        }
        if num == 0 {
            return Err(SwingcapError::parse("FrameRate num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Seconds per frame (the BVH `Frame Time` scalar).
    pub fn frame_time_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Duration in seconds of `frames` frames at this rate.
    pub fn frames_to_secs(self, frames: usize) -> f64 {
        (frames as f64) * self.frame_time_secs()
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}
