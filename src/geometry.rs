use nalgebra::{Unit, UnitQuaternion, Vector3};

/// Below this length a vector is treated as degenerate.
pub const EPSILON: f64 = 1e-8;

pub type Vec3 = Vector3<f64>;

/// Unit normal of the triangle `(a, b, c)`, computed as
/// `normalize((c - b) × (b - a))`.
///
/// Returns `None` when either edge or the cross product is near-zero length
/// (degenerate triangle). Callers must treat the sentinel as "no roll
/// reference available" rather than fail.
pub fn unit_normal(a: &Vec3, b: &Vec3, c: &Vec3) -> Option<Unit<Vec3>> {
    let u = b - a;
    let v = c - b;
    if u.norm() < EPSILON || v.norm() < EPSILON {
        return None;
    }
    Unit::try_new(v.cross(&u), EPSILON)
}

/// Scalar projection fraction of `p` onto the segment `head → tail`.
///
/// 0.0 at the head, 1.0 at the tail, values outside `[0, 1]` for points past
/// either end. `None` for a zero-length axis.
pub fn axis_fraction(p: &Vec3, head: &Vec3, tail: &Vec3) -> Option<f64> {
    let axis = tail - head;
    let len_sq = axis.norm_squared();
    if len_sq < EPSILON * EPSILON {
        return None;
    }
    Some((p - head).dot(&axis) / len_sq)
}

/// Point at fraction `t` along `head → tail`.
pub fn lerp(head: &Vec3, tail: &Vec3, t: f64) -> Vec3 {
    head + (tail - head) * t
}

/// Roll angle (radians) that aligns a bone's local X axis with `normal`.
///
/// The zero-roll rest frame is defined by the shortest-arc rotation taking
/// +Y to the bone axis. The reference normal is projected into the plane
/// perpendicular to the axis and the signed angle from the zero-roll X axis,
/// measured around the bone axis, is the roll.
///
/// Returns `None` when the bone axis is degenerate or the normal is parallel
/// to it; callers fall back to zero roll.
pub fn roll_from_normal(head: &Vec3, tail: &Vec3, normal: &Vec3) -> Option<f64> {
    let axis = Unit::try_new(tail - head, EPSILON)?;

    // Antiparallel +Y/axis has no unique shortest arc; pin it to a half-turn
    // about X so the frame stays deterministic.
    let frame = UnitQuaternion::rotation_between(&Vector3::y(), axis.as_ref())
        .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI));
    let zero_roll_x = frame * Vector3::x();

    let projected = normal - axis.as_ref() * normal.dot(axis.as_ref());
    let projected = Unit::try_new(projected, EPSILON)?;

    let sin = axis.dot(&zero_roll_x.cross(projected.as_ref()));
    let cos = zero_roll_x.dot(projected.as_ref());
    Some(sin.atan2(cos))
}

/// Convert a literal point from the engine's Y-up convention into the Z-up
/// build space: `(x, y, z) → (x, -z, y)`.
pub fn from_engine(p: [f64; 3]) -> Vec3 {
    Vector3::new(p[0], -p[2], p[1])
}
