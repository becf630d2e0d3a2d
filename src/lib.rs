#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

extern crate nalgebra as na;

/// Point-discretized bodies and index-aligned body collections.
///
/// Only the minimal collaborators needed by the motion algebra live here:
/// shape generators are expected to produce a [`body::BasicBody`] (or their
/// own [`body::Body`] implementation).
pub mod body;
/// Deserializable descriptions of kinematics, for building motions from configuration files.
pub mod config;
/// Errors reported by constructors and evaluation entry points.
pub mod error;
/// Closed-form kinematics evaluators.
pub mod kinematics;
/// Stateful per-body motion caches.
pub mod motion;
/// Composable scalar functions of time.
pub mod profile;
/// Planar rigid transforms acting on coordinates and bodies.
pub mod transform;
/// Rigid-body velocity fields sampled at surface points.
pub mod velocity;

/// Mathematical types used throughout the crate.
///
/// The crate is strictly planar: vectors and points are two-dimensional and
/// orientations are a single angle.
pub mod math {
    /// The scalar type.
    pub type Real = f64;
    /// A planar vector.
    pub type Vector = na::Vector2<Real>;
    /// A planar point.
    pub type Point = na::Point2<Real>;
    /// A planar rotation matrix.
    pub type Rotation = na::Rotation2<Real>;
    /// A planar rotation followed by a translation.
    pub type Isometry = na::Isometry2<Real>;

    /// Rotates `v` by `angle + π/2`.
    ///
    /// This is the derivative of `Rotation::new(angle) * v` with respect to `angle`.
    pub fn rotate_perp(angle: Real, v: &Vector) -> Vector {
        let rv = Rotation::new(angle) * v;
        Vector::new(-rv.y, rv.x)
    }
}

pub use error::{MotionError, Result};
pub use kinematics::{KinematicState, Kinematics};
pub use motion::{RigidBodyMotion, RigidMotionList};
pub use profile::{d_dt, Profile};
pub use transform::{RigidTransform, RigidTransformList};
