//! Rigid-body velocity fields sampled at surface points.
//!
//! The velocity of a point `x` attached to a body with centroid `c` is
//! `ċ + α̇ ẑ × (x - c)`, i.e. `u = ċx - α̇ (y - yc)` and `v = ċy + α̇ (x - xc)`.
//! Every entry point validates all of its inputs before writing anything.

use crate::body::{Body, BodyList};
use crate::error::{MotionError, Result};
use crate::kinematics::{KinematicState, Kinematics};
use crate::math::{Point, Real};
use crate::motion::RigidMotionList;

fn check_buffers(u: &[Real], v: &[Real], x: &[Real], y: &[Real]) -> Result<()> {
    MotionError::check_len("y coordinates", x.len(), y.len())?;
    MotionError::check_len("u velocities", x.len(), u.len())?;
    MotionError::check_len("v velocities", x.len(), v.len())
}

fn fill_rigid_field(
    u: &mut [Real],
    v: &mut [Real],
    x: &[Real],
    y: &[Real],
    centroid: &Point,
    state: &KinematicState,
) {
    let omega = state.angular_velocity;
    for (((u, v), x), y) in u.iter_mut().zip(v.iter_mut()).zip(x).zip(y) {
        *u = state.velocity.x - omega * (y - centroid.y);
        *v = state.velocity.y + omega * (x - centroid.x);
    }
}

/// Writes into `u` and `v` the velocity at the points `(x, y)` of a body
/// whose centroid is currently at `centroid` and whose motion is `motion`.
///
/// All the coordinates and velocities are in the inertial frame.
pub fn assign_velocity<K: Kinematics + ?Sized>(
    u: &mut [Real],
    v: &mut [Real],
    x: &[Real],
    y: &[Real],
    centroid: Point,
    motion: &K,
    t: Real,
) -> Result<()> {
    check_buffers(u, v, x, y)?;
    MotionError::check_time(t)?;
    fill_rigid_field(u, v, x, y, &centroid, &motion.evaluate(t));
    Ok(())
}

/// Same as [`assign_velocity`], with the points and the centroid taken from `body`.
pub fn assign_body_velocity<B: Body + ?Sized, K: Kinematics + ?Sized>(
    u: &mut [Real],
    v: &mut [Real],
    body: &B,
    motion: &K,
    t: Real,
) -> Result<()> {
    let (x, y) = body.coords();
    assign_velocity(u, v, x, y, body.centroid(), motion, t)
}

/// Writes into the flattened arrays `u` and `v` the velocity of every point
/// of every body of `bodies`, each body moving with the motion of same index.
pub fn assign_list_velocity<B: Body>(
    u: &mut [Real],
    v: &mut [Real],
    bodies: &BodyList<B>,
    motions: &RigidMotionList,
    t: Real,
) -> Result<()> {
    MotionError::check_len("motions", bodies.len(), motions.len())?;
    let n = bodies.total_points();
    MotionError::check_len("u velocities", n, u.len())?;
    MotionError::check_len("v velocities", n, v.len())?;
    MotionError::check_time(t)?;
    for body in bodies {
        let (x, y) = body.coords();
        MotionError::check_len("body x coordinates", body.len(), x.len())?;
        MotionError::check_len("body y coordinates", body.len(), y.len())?;
    }

    for ((body, motion), range) in bodies.iter().zip(motions).zip(bodies.ranges()) {
        let (x, y) = body.coords();
        let state = motion.evaluate(t);
        fill_rigid_field(
            &mut u[range.clone()],
            &mut v[range],
            x,
            y,
            &body.centroid(),
            &state,
        );
    }
    Ok(())
}

/// Returns the velocity at the points `(x, y)`; see [`assign_velocity`].
pub fn velocity<K: Kinematics + ?Sized>(
    x: &[Real],
    y: &[Real],
    centroid: Point,
    motion: &K,
    t: Real,
) -> Result<(Vec<Real>, Vec<Real>)> {
    let mut u = vec![0.0; x.len()];
    let mut v = vec![0.0; x.len()];
    assign_velocity(&mut u, &mut v, x, y, centroid, motion, t)?;
    Ok((u, v))
}

/// Returns the velocity at the points of `body`; see [`assign_body_velocity`].
pub fn body_velocity<B: Body + ?Sized, K: Kinematics + ?Sized>(
    body: &B,
    motion: &K,
    t: Real,
) -> Result<(Vec<Real>, Vec<Real>)> {
    let mut u = vec![0.0; body.len()];
    let mut v = vec![0.0; body.len()];
    assign_body_velocity(&mut u, &mut v, body, motion, t)?;
    Ok((u, v))
}

/// Returns the flattened velocity of every body; see [`assign_list_velocity`].
pub fn list_velocity<B: Body>(
    bodies: &BodyList<B>,
    motions: &RigidMotionList,
    t: Real,
) -> Result<(Vec<Real>, Vec<Real>)> {
    let n = bodies.total_points();
    let mut u = vec![0.0; n];
    let mut v = vec![0.0; n];
    assign_list_velocity(&mut u, &mut v, bodies, motions, t)?;
    Ok((u, v))
}
