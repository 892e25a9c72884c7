//! Vector helpers used by the sensors and movement modes

use glam::Vec3;

/// Squared-distance tolerance under which two vectors compare equal
pub const VECTOR_EQUALITY_EPSILON_SQ: f32 = 1.0e-10;

/// Remove the component of `vector` along `plane_normal`.
///
/// A zero normal leaves the vector untouched.
pub fn project_on_plane(vector: Vec3, plane_normal: Vec3) -> Vec3 {
    let normal_sq = plane_normal.length_squared();
    if normal_sq < f32::EPSILON {
        return vector;
    }
    vector - plane_normal * (vector.dot(plane_normal) / normal_sq)
}

/// Clamp the length of `vector` to at most `max_length`
pub fn clamp_magnitude(vector: Vec3, max_length: f32) -> Vec3 {
    vector.clamp_length_max(max_length.max(0.0))
}

/// Angle between two vectors in degrees; zero when either vector is degenerate
pub fn angle_degrees(a: Vec3, b: Vec3) -> f32 {
    let denom = (a.length_squared() * b.length_squared()).sqrt();
    if denom < 1.0e-15 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Whether two vectors are equal within [`VECTOR_EQUALITY_EPSILON_SQ`]
pub fn approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).length_squared() < VECTOR_EQUALITY_EPSILON_SQ
}
