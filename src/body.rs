//! Point-discretized bodies.

use std::fmt;
use std::ops::{Index, IndexMut, Range};

use crate::error::{MotionError, Result};
use crate::math::{Point, Real};

/// Mutable access to the inertial coordinates of a body, alongside read-only
/// access to its body-fixed coordinates.
pub struct CoordsMut<'a> {
    /// Body-fixed abscissas.
    pub body_x: &'a [Real],
    /// Body-fixed ordinates.
    pub body_y: &'a [Real],
    /// Inertial abscissas.
    pub x: &'a mut [Real],
    /// Inertial ordinates.
    pub y: &'a mut [Real],
}

/// A rigid body whose surface is discretized by points.
///
/// A body keeps two copies of its points: the body-fixed coordinates, which
/// never change, and the inertial coordinates, which follow the current pose.
pub trait Body {
    /// Number of surface points.
    fn len(&self) -> usize;

    /// Does this body have no points?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Body-fixed coordinates of the surface points.
    fn body_coords(&self) -> (&[Real], &[Real]);

    /// Inertial coordinates of the surface points.
    fn coords(&self) -> (&[Real], &[Real]);

    /// Split access to the body-fixed and inertial coordinates.
    fn coords_mut(&mut self) -> CoordsMut<'_>;

    /// Current centroid, in the inertial frame.
    fn centroid(&self) -> Point;

    /// Current orientation angle.
    fn angle(&self) -> Real;

    /// Records the current pose. Does not move any point.
    fn set_pose(&mut self, centroid: Point, angle: Real);
}

/// A body built directly from body-fixed coordinate arrays.
///
/// The centroid of the body-fixed coordinates is assumed to be at the origin.
/// Upon creation the inertial coordinates coincide with the body-fixed ones.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicBody {
    body_x: Vec<Real>,
    body_y: Vec<Real>,
    x: Vec<Real>,
    y: Vec<Real>,
    centroid: Point,
    angle: Real,
}

impl BasicBody {
    /// Creates a body from its body-fixed coordinates.
    pub fn new(x: Vec<Real>, y: Vec<Real>) -> Result<Self> {
        MotionError::check_len("body y coordinates", x.len(), y.len())?;
        Ok(Self {
            x: x.clone(),
            y: y.clone(),
            body_x: x,
            body_y: y,
            centroid: Point::origin(),
            angle: 0.0,
        })
    }
}

impl Body for BasicBody {
    fn len(&self) -> usize {
        self.body_x.len()
    }

    fn body_coords(&self) -> (&[Real], &[Real]) {
        (&self.body_x, &self.body_y)
    }

    fn coords(&self) -> (&[Real], &[Real]) {
        (&self.x, &self.y)
    }

    fn coords_mut(&mut self) -> CoordsMut<'_> {
        CoordsMut {
            body_x: &self.body_x,
            body_y: &self.body_y,
            x: &mut self.x,
            y: &mut self.y,
        }
    }

    fn centroid(&self) -> Point {
        self.centroid
    }

    fn angle(&self) -> Real {
        self.angle
    }

    fn set_pose(&mut self, centroid: Point, angle: Real) {
        self.centroid = centroid;
        self.angle = angle;
    }
}

impl fmt::Display for BasicBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Basic body with {} points", self.len())?;
        writeln!(
            f,
            "   Current position: ({},{})",
            self.centroid.x, self.centroid.y
        )?;
        write!(f, "   Current angle (rad): {}", self.angle)
    }
}

/// An ordered collection of bodies.
///
/// The points of all the bodies are laid out contiguously, in body order, in
/// any flattened array associated with the list (see [`BodyList::range`]).
#[derive(Clone, Debug, PartialEq)]
pub struct BodyList<B = BasicBody> {
    bodies: Vec<B>,
}

impl<B> Default for BodyList<B> {
    fn default() -> Self {
        Self { bodies: Vec::new() }
    }
}

impl<B: Body> BodyList<B> {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a body.
    pub fn push(&mut self, body: B) {
        self.bodies.push(body);
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Is this list empty?
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterates over the bodies.
    pub fn iter(&self) -> std::slice::Iter<'_, B> {
        self.bodies.iter()
    }

    /// Iterates mutably over the bodies.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, B> {
        self.bodies.iter_mut()
    }

    /// Total number of points over all bodies.
    pub fn total_points(&self) -> usize {
        self.bodies.iter().map(Body::len).sum()
    }

    /// Range of the points of body `i` in flattened arrays.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn range(&self, i: usize) -> Range<usize> {
        let start: usize = self.bodies[..i].iter().map(Body::len).sum();
        start..start + self.bodies[i].len()
    }

    /// Ranges of the points of every body, in order.
    pub fn ranges(&self) -> Vec<Range<usize>> {
        let mut start = 0;
        self.bodies
            .iter()
            .map(|b| {
                let range = start..start + b.len();
                start = range.end;
                range
            })
            .collect()
    }

    /// The portion of the flattened array `f` belonging to body `i`.
    ///
    /// Fails if `f` does not hold exactly one entry per point or if `i` is
    /// not the index of a body.
    pub fn view<'a, T>(&self, f: &'a [T], i: usize) -> Result<&'a [T]> {
        let range = self.checked_range(f.len(), i)?;
        Ok(&f[range])
    }

    /// Mutable version of [`BodyList::view`].
    pub fn view_mut<'a, T>(&self, f: &'a mut [T], i: usize) -> Result<&'a mut [T]> {
        let range = self.checked_range(f.len(), i)?;
        Ok(&mut f[range])
    }

    fn checked_range(&self, flat_len: usize, i: usize) -> Result<Range<usize>> {
        MotionError::check_len("flattened array", self.total_points(), flat_len)?;
        if i >= self.len() {
            return Err(MotionError::DomainError(format!(
                "body index {i} out of range for a list of {} bodies",
                self.len()
            )));
        }
        Ok(self.range(i))
    }

    /// Sum of the entries of the flattened array `f` belonging to body `i`.
    pub fn sum(&self, f: &[Real], i: usize) -> Result<Real> {
        Ok(self.view(f, i)?.iter().sum())
    }

    /// Concatenated inertial coordinates of all the bodies.
    pub fn collect(&self) -> (Vec<Real>, Vec<Real>) {
        let n = self.total_points();
        let mut xs = Vec::with_capacity(n);
        let mut ys = Vec::with_capacity(n);
        for body in &self.bodies {
            let (x, y) = body.coords();
            xs.extend_from_slice(x);
            ys.extend_from_slice(y);
        }
        (xs, ys)
    }
}

impl<B> From<Vec<B>> for BodyList<B> {
    fn from(bodies: Vec<B>) -> Self {
        Self { bodies }
    }
}

impl<B> FromIterator<B> for BodyList<B> {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

impl<B> Index<usize> for BodyList<B> {
    type Output = B;

    fn index(&self, i: usize) -> &B {
        &self.bodies[i]
    }
}

impl<B> IndexMut<usize> for BodyList<B> {
    fn index_mut(&mut self, i: usize) -> &mut B {
        &mut self.bodies[i]
    }
}

impl<'a, B> IntoIterator for &'a BodyList<B> {
    type Item = &'a B;
    type IntoIter = std::slice::Iter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
