/// Default tolerance for approximate comparisons (`is_close_to`, `almost_eq`).
pub const EPSILON: f32 = 1e-4;
/// Above this cosine between two quaternions, slerp falls back to normalised lerp.
pub const SLERP_LINEAR_THRESHOLD: f32 = 1.0 - 1e-6;
