//! Per-body motion caches.

use std::ops::{Index, IndexMut};

use crate::body::{Body, BodyList};
use crate::error::{MotionError, Result};
use crate::kinematics::{ConstantVelocity, KinematicState, Kinematics, Stationary};
use crate::math::{Real, Vector};

/// The kinematics of one body, together with the last state they produced.
///
/// The cached state is only modified by [`RigidBodyMotion::update`]; it lets
/// a solver query the current state repeatedly (e.g. across sub-steps)
/// without re-evaluating the kinematics. Evaluating a `RigidBodyMotion`
/// through the [`Kinematics`] trait never touches the cache.
#[derive(Debug)]
pub struct RigidBodyMotion {
    kin: Box<dyn Kinematics>,
    state: KinematicState,
}

impl Default for RigidBodyMotion {
    fn default() -> Self {
        Self::new(Stationary)
    }
}

impl RigidBodyMotion {
    /// Wraps `kin`, caching its state at `t = 0`.
    pub fn new(kin: impl Kinematics + 'static) -> Self {
        Self::from_boxed(Box::new(kin))
    }

    /// Same as [`RigidBodyMotion::new`] for already boxed kinematics.
    pub fn from_boxed(kin: Box<dyn Kinematics>) -> Self {
        let state = kin.evaluate(0.0);
        Self { kin, state }
    }

    /// A motion with constant velocity and angular velocity.
    pub fn constant(velocity: Vector, angular_velocity: Real) -> Result<Self> {
        Ok(Self::new(ConstantVelocity::new(velocity, angular_velocity)?))
    }

    /// The kinematics driving this motion.
    pub fn kinematics(&self) -> &dyn Kinematics {
        &*self.kin
    }

    /// The last evaluated state.
    pub fn current(&self) -> KinematicState {
        self.state
    }

    /// Evaluates the kinematics at `t`, stores the result, and returns it.
    ///
    /// The cache is left untouched if `t` is not finite.
    pub fn update(&mut self, t: Real) -> Result<KinematicState> {
        MotionError::check_time(t)?;
        self.state = self.kin.evaluate(t);
        log::trace!("motion updated at t = {t}: {:?}", self.state);
        Ok(self.state)
    }
}

impl Kinematics for RigidBodyMotion {
    fn evaluate(&self, t: Real) -> KinematicState {
        self.kin.evaluate(t)
    }
}

/// An ordered list of motions, index-aligned with a [`BodyList`].
#[derive(Debug, Default)]
pub struct RigidMotionList {
    motions: Vec<RigidBodyMotion>,
}

impl RigidMotionList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a motion.
    pub fn push(&mut self, motion: RigidBodyMotion) {
        self.motions.push(motion);
    }

    /// Number of motions.
    pub fn len(&self) -> usize {
        self.motions.len()
    }

    /// Is this list empty?
    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    /// Iterates over the motions.
    pub fn iter(&self) -> std::slice::Iter<'_, RigidBodyMotion> {
        self.motions.iter()
    }

    /// Iterates mutably over the motions.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, RigidBodyMotion> {
        self.motions.iter_mut()
    }

    /// The cached states of every motion.
    pub fn current(&self) -> Vec<KinematicState> {
        self.motions.iter().map(RigidBodyMotion::current).collect()
    }

    /// Evaluates every motion at `t`, in the order of `bodies`, without
    /// touching the caches.
    pub fn evaluate_all<B: Body>(
        &self,
        bodies: &BodyList<B>,
        t: Real,
    ) -> Result<Vec<KinematicState>> {
        self.check_alignment(bodies, t)?;
        Ok(self.motions.iter().map(|m| m.evaluate(t)).collect())
    }

    /// Updates every motion at `t`, in the order of `bodies`, and returns the new states.
    ///
    /// Nothing is updated if the lengths differ or `t` is not finite.
    pub fn update_all<B: Body>(
        &mut self,
        bodies: &BodyList<B>,
        t: Real,
    ) -> Result<Vec<KinematicState>> {
        self.check_alignment(bodies, t)?;
        self.motions.iter_mut().map(|m| m.update(t)).collect()
    }

    fn check_alignment<B: Body>(&self, bodies: &BodyList<B>, t: Real) -> Result<()> {
        MotionError::check_len("motions", bodies.len(), self.len())?;
        MotionError::check_time(t)
    }
}

impl From<Vec<RigidBodyMotion>> for RigidMotionList {
    fn from(motions: Vec<RigidBodyMotion>) -> Self {
        Self { motions }
    }
}

impl FromIterator<RigidBodyMotion> for RigidMotionList {
    fn from_iter<I: IntoIterator<Item = RigidBodyMotion>>(iter: I) -> Self {
        Self {
            motions: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for RigidMotionList {
    type Output = RigidBodyMotion;

    fn index(&self, i: usize) -> &RigidBodyMotion {
        &self.motions[i]
    }
}

impl IndexMut<usize> for RigidMotionList {
    fn index_mut(&mut self, i: usize) -> &mut RigidBodyMotion {
        &mut self.motions[i]
    }
}

impl<'a> IntoIterator for &'a RigidMotionList {
    type Item = &'a RigidBodyMotion;
    type IntoIter = std::slice::Iter<'a, RigidBodyMotion>;

    fn into_iter(self) -> Self::IntoIter {
        self.motions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BasicBody;
    use crate::kinematics::{PitchHeave, PitchHeaveParams, SwitchedKinematics};

    fn bodies(n: usize) -> BodyList {
        (0..n)
            .map(|i| BasicBody::new(vec![0.0, i as Real], vec![1.0, 0.0]).unwrap())
            .collect()
    }

    fn pitch_heave() -> PitchHeave {
        PitchHeave::new(PitchHeaveParams {
            axis: [-0.5, 0.0],
            reduced_frequency: 0.5,
            pitch_amplitude: 0.2,
            heave_amplitude: 0.1,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn caches_the_initial_state() {
        let motion = RigidBodyMotion::new(pitch_heave());
        assert_eq!(motion.current(), pitch_heave().evaluate(0.0));
        assert_eq!(RigidBodyMotion::default().current(), KinematicState::default());
    }

    #[test]
    fn update_overwrites_the_cache() {
        let mut motion = RigidBodyMotion::new(pitch_heave());
        let state = motion.update(1.3).unwrap();
        assert_eq!(state, pitch_heave().evaluate(1.3));
        assert_eq!(motion.current(), state);

        // Pure evaluation leaves the cache alone.
        let later = motion.evaluate(2.0);
        assert_ne!(later, state);
        assert_eq!(motion.current(), state);

        assert!(matches!(
            motion.update(Real::NAN),
            Err(MotionError::DomainError(_))
        ));
        assert_eq!(motion.current(), state);
    }

    #[test]
    fn constant_motion() {
        let mut motion = RigidBodyMotion::constant(Vector::new(1.0, 0.0), 2.0).unwrap();
        let s = motion.update(0.5).unwrap();
        assert_eq!(s.position, Vector::new(0.5, 0.0));
        assert_eq!(s.angle, 1.0);
        assert!(RigidBodyMotion::constant(Vector::new(Real::INFINITY, 0.0), 0.0).is_err());
    }

    #[test]
    fn batch_matches_individual_updates() {
        let make = || -> RigidMotionList {
            vec![
                RigidBodyMotion::new(pitch_heave()),
                RigidBodyMotion::default(),
                RigidBodyMotion::new(SwitchedKinematics::new(pitch_heave(), 0.5, 1.0).unwrap()),
            ]
            .into()
        };
        let bl = bodies(3);
        let mut list = make();
        let mut singles = make();
        for t in [0.0, 0.7, 1.5] {
            let batch = list.update_all(&bl, t).unwrap();
            assert_eq!(list.evaluate_all(&bl, t).unwrap(), batch);
            assert_eq!(list.current(), batch);
            for (i, state) in batch.iter().enumerate() {
                assert_eq!(singles[i].update(t).unwrap(), *state);
            }
        }
    }

    #[test]
    fn batch_requires_aligned_lists() {
        let mut list: RigidMotionList = (0..2).map(|_| RigidBodyMotion::default()).collect();
        let bl = bodies(3);
        assert!(matches!(
            list.update_all(&bl, 0.0),
            Err(MotionError::SizeMismatch {
                expected: 3,
                found: 2,
                ..
            })
        ));
        assert!(list.evaluate_all(&bl, 0.0).is_err());

        list.push(RigidBodyMotion::constant(Vector::new(1.0, 0.0), 0.0).unwrap());
        assert!(list.update_all(&bl, Real::INFINITY).is_err());
        assert_eq!(list[2].current().position, Vector::zeros());
        assert_eq!(list.iter().count(), 3);
    }
}
