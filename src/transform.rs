//! Planar rigid transforms.

use std::fmt;
use std::ops::Index;

use crate::body::{Body, BodyList, CoordsMut};
use crate::error::{MotionError, Result};
use crate::kinematics::KinematicState;
use crate::math::{Isometry, Point, Real, Vector};

/// A rotation by `angle` followed by a translation.
///
/// Applied to a body, the transform maps the body-fixed coordinates to the
/// inertial frame: the translation is the new centroid and the angle the new
/// orientation. The sine and cosine are recomputed at every application.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RigidTransform {
    translation: Vector,
    angle: Real,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// Creates a transform rotating by `angle` then translating by `translation`.
    pub fn new(translation: Vector, angle: Real) -> Self {
        Self { translation, angle }
    }

    /// The transform that leaves every point in place.
    pub fn identity() -> Self {
        Self::new(Vector::zeros(), 0.0)
    }

    /// The translation part.
    pub fn translation(&self) -> &Vector {
        &self.translation
    }

    /// The rotation angle.
    pub fn angle(&self) -> Real {
        self.angle
    }

    /// Returns `[x, y, angle]`.
    pub fn to_array(&self) -> [Real; 3] {
        [self.translation.x, self.translation.y, self.angle]
    }

    /// Converts this transform to an nalgebra isometry.
    pub fn to_isometry(&self) -> Isometry {
        Isometry::new(self.translation, self.angle)
    }

    /// Transforms a single point.
    pub fn apply_point(&self, x: Real, y: Real) -> (Real, Real) {
        let (sin, cos) = self.angle.sin_cos();
        (
            self.translation.x + x * cos - y * sin,
            self.translation.y + x * sin + y * cos,
        )
    }

    /// Transforms the points with coordinates `x` and `y`.
    pub fn apply_coords(&self, x: &[Real], y: &[Real]) -> Result<(Vec<Real>, Vec<Real>)> {
        MotionError::check_len("y coordinates", x.len(), y.len())?;
        Ok(x.iter()
            .zip(y)
            .map(|(x, y)| self.apply_point(*x, *y))
            .unzip())
    }

    /// Moves `body` to the pose described by this transform.
    ///
    /// Only the inertial coordinates and the pose are overwritten; the
    /// body-fixed coordinates are left untouched.
    pub fn apply_to_body<B: Body + ?Sized>(&self, body: &mut B) {
        let (sin, cos) = self.angle.sin_cos();
        let (tx, ty) = (self.translation.x, self.translation.y);
        let CoordsMut {
            body_x,
            body_y,
            x: xs,
            y: ys,
        } = body.coords_mut();
        for ((x, y), (bx, by)) in xs.iter_mut().zip(ys.iter_mut()).zip(body_x.iter().zip(body_y)) {
            *x = tx + bx * cos - by * sin;
            *y = ty + bx * sin + by * cos;
        }
        body.set_pose(Point::from(self.translation), self.angle);
    }

    /// Returns `self ∘ other`, the transform applying `other` first and then `self`.
    pub fn compose(&self, other: &RigidTransform) -> RigidTransform {
        let (x, y) = self.apply_point(other.translation.x, other.translation.y);
        RigidTransform::new(Vector::new(x, y), self.angle + other.angle)
    }

    /// The transform undoing this one.
    pub fn inverse(&self) -> RigidTransform {
        let (sin, cos) = (-self.angle).sin_cos();
        let (tx, ty) = (self.translation.x, self.translation.y);
        RigidTransform::new(
            Vector::new(-(tx * cos - ty * sin), -(tx * sin + ty * cos)),
            -self.angle,
        )
    }
}

impl From<[Real; 3]> for RigidTransform {
    fn from(u: [Real; 3]) -> Self {
        Self::new(Vector::new(u[0], u[1]), u[2])
    }
}

impl From<(Real, Real, Real)> for RigidTransform {
    fn from((x, y, angle): (Real, Real, Real)) -> Self {
        Self::new(Vector::new(x, y), angle)
    }
}

impl From<&KinematicState> for RigidTransform {
    fn from(state: &KinematicState) -> Self {
        Self::new(state.position, state.angle)
    }
}

impl fmt::Display for RigidTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rigid-body transform")?;
        writeln!(
            f,
            "  Translation: ({},{})",
            self.translation.x, self.translation.y
        )?;
        write!(f, "  Rotation angle (rad): {}", self.angle)
    }
}

/// An ordered list of transforms, applied index-by-index to a [`BodyList`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RigidTransformList {
    transforms: Vec<RigidTransform>,
}

impl RigidTransformList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses consecutive `[x, y, angle]` triplets.
    pub fn from_flat(u: &[Real]) -> Result<Self> {
        if u.len() % 3 != 0 {
            return Err(MotionError::SizeMismatch {
                what: "flattened transforms",
                expected: u.len() - u.len() % 3,
                found: u.len(),
            });
        }
        Ok(u.chunks_exact(3)
            .map(|c| RigidTransform::from([c[0], c[1], c[2]]))
            .collect())
    }

    /// Concatenates the `[x, y, angle]` triplets of every transform.
    pub fn to_flat(&self) -> Vec<Real> {
        self.transforms.iter().flat_map(|t| t.to_array()).collect()
    }

    /// Appends a transform.
    pub fn push(&mut self, transform: RigidTransform) {
        self.transforms.push(transform);
    }

    /// Number of transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Is this list empty?
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Iterates over the transforms.
    pub fn iter(&self) -> std::slice::Iter<'_, RigidTransform> {
        self.transforms.iter()
    }

    /// Applies each transform to the body with the same index.
    ///
    /// Fails without moving any body if the lengths differ.
    pub fn apply<B: Body>(&self, bodies: &mut BodyList<B>) -> Result<()> {
        MotionError::check_len("transforms", bodies.len(), self.len())?;
        log::debug!("applying {} rigid transforms", self.len());
        for (transform, body) in self.transforms.iter().zip(bodies.iter_mut()) {
            transform.apply_to_body(body);
        }
        Ok(())
    }
}

impl From<Vec<RigidTransform>> for RigidTransformList {
    fn from(transforms: Vec<RigidTransform>) -> Self {
        Self { transforms }
    }
}

impl FromIterator<RigidTransform> for RigidTransformList {
    fn from_iter<I: IntoIterator<Item = RigidTransform>>(iter: I) -> Self {
        Self {
            transforms: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for RigidTransformList {
    type Output = RigidTransform;

    fn index(&self, i: usize) -> &RigidTransform {
        &self.transforms[i]
    }
}
