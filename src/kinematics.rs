//! Closed-form kinematics evaluators.
//!
//! A [`Kinematics`] maps a time to a [`KinematicState`]: the centroid position,
//! velocity and acceleration together with the orientation angle and its first
//! two time derivatives. Evaluators are immutable; caching the last evaluated
//! state is the job of [`crate::motion::RigidBodyMotion`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::math::{rotate_perp, Real, Rotation, Vector};
use crate::profile::Profile;

/// The kinematic state of a planar rigid body at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KinematicState {
    /// Centroid position.
    pub position: Vector,
    /// Centroid velocity.
    pub velocity: Vector,
    /// Centroid acceleration.
    pub acceleration: Vector,
    /// Orientation angle.
    pub angle: Real,
    /// Angular velocity.
    pub angular_velocity: Real,
    /// Angular acceleration.
    pub angular_acceleration: Real,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self {
            position: Vector::zeros(),
            velocity: Vector::zeros(),
            acceleration: Vector::zeros(),
            angle: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
        }
    }
}

impl KinematicState {
    /// A state with the given pose and no motion.
    pub fn at_rest(position: Vector, angle: Real) -> Self {
        Self {
            position,
            angle,
            ..Default::default()
        }
    }

    /// Returns this state with velocities and accelerations set to zero.
    pub fn frozen(&self) -> Self {
        Self::at_rest(self.position, self.angle)
    }
}

/// Something that prescribes the motion of a rigid body as a function of time.
pub trait Kinematics: fmt::Debug + Send + Sync {
    /// Evaluates the kinematic state at time `t`.
    fn evaluate(&self, t: Real) -> KinematicState;
}

impl<K: Kinematics + ?Sized> Kinematics for Box<K> {
    fn evaluate(&self, t: Real) -> KinematicState {
        (**self).evaluate(t)
    }
}

/// Converts the kinematics of a rotation axis into the kinematics of the centroid.
///
/// `axis` holds the position, velocity and acceleration of the rotation axis
/// along with the body orientation. `offset` is the body-fixed vector from the
/// centroid to the axis. With `R` the rotation by `axis.angle` and `R'` its
/// derivative with respect to the angle:
///
/// ```text
/// c  = x_a - R a
/// ċ  = ẋ_a - α̇ R' a
/// c̈  = ẍ_a - α̈ R' a + α̇² R a
/// ```
pub fn axis_offset_correction(axis: &KinematicState, offset: &Vector) -> KinematicState {
    let ra = Rotation::new(axis.angle) * offset;
    let dra = rotate_perp(axis.angle, offset);
    KinematicState {
        position: axis.position - ra,
        velocity: axis.velocity - axis.angular_velocity * dra,
        acceleration: axis.acceleration - axis.angular_acceleration * dra
            + axis.angular_velocity * axis.angular_velocity * ra,
        ..*axis
    }
}

fn check_finite(name: &str, value: Real) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MotionError::InvalidConfiguration(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// A body that never moves.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Stationary;

impl Kinematics for Stationary {
    fn evaluate(&self, _t: Real) -> KinematicState {
        KinematicState::default()
    }
}

/// Uniform translation and rotation starting from the origin at `t = 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantVelocity {
    velocity: Vector,
    angular_velocity: Real,
}

impl ConstantVelocity {
    /// Creates a motion with constant centroid velocity and angular velocity.
    pub fn new(velocity: Vector, angular_velocity: Real) -> Result<Self> {
        check_finite("velocity.x", velocity.x)?;
        check_finite("velocity.y", velocity.y)?;
        check_finite("angular velocity", angular_velocity)?;
        Ok(Self {
            velocity,
            angular_velocity,
        })
    }
}

impl Kinematics for ConstantVelocity {
    fn evaluate(&self, t: Real) -> KinematicState {
        KinematicState {
            position: self.velocity * t,
            velocity: self.velocity,
            acceleration: Vector::zeros(),
            angle: self.angular_velocity * t,
            angular_velocity: self.angular_velocity,
            angular_acceleration: 0.0,
        }
    }
}

/// Kinematics prescribed by profiles for the rotation axis and the angle.
///
/// The axis coordinates and the angle are differentiated symbolically once, at
/// construction; evaluation then applies [`axis_offset_correction`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileKinematics {
    x: [Profile; 3],
    y: [Profile; 3],
    angle: [Profile; 3],
    axis_offset: Vector,
}

fn with_derivatives(p: Profile) -> [Profile; 3] {
    let dp = p.differentiate();
    let ddp = dp.differentiate();
    [p, dp, ddp]
}

impl ProfileKinematics {
    /// Creates kinematics for a body rotating by `angle` about an axis located
    /// at `(x, y)` in the inertial frame and at `axis_offset` from the centroid
    /// in the body frame.
    pub fn new(x: Profile, y: Profile, angle: Profile, axis_offset: Vector) -> Result<Self> {
        check_finite("axis offset x", axis_offset.x)?;
        check_finite("axis offset y", axis_offset.y)?;
        Ok(Self {
            x: with_derivatives(x),
            y: with_derivatives(y),
            angle: with_derivatives(angle),
            axis_offset,
        })
    }

    /// The body-fixed position of the rotation axis relative to the centroid.
    pub fn axis_offset(&self) -> &Vector {
        &self.axis_offset
    }

    /// The profiles of the axis abscissa, ordinate and of the angle.
    pub fn profiles(&self) -> [&Profile; 3] {
        [&self.x[0], &self.y[0], &self.angle[0]]
    }

    /// Evaluates the kinematics of the rotation axis, before the offset correction.
    pub fn axis_state(&self, t: Real) -> KinematicState {
        let at = |p: &[Profile; 3], k: usize| p[k].evaluate(t);
        KinematicState {
            position: Vector::new(at(&self.x, 0), at(&self.y, 0)),
            velocity: Vector::new(at(&self.x, 1), at(&self.y, 1)),
            acceleration: Vector::new(at(&self.x, 2), at(&self.y, 2)),
            angle: at(&self.angle, 0),
            angular_velocity: at(&self.angle, 1),
            angular_acceleration: at(&self.angle, 2),
        }
    }
}

impl Kinematics for ProfileKinematics {
    fn evaluate(&self, t: Real) -> KinematicState {
        axis_offset_correction(&self.axis_state(t), &self.axis_offset)
    }
}

/// Parameters of a [`PitchHeave`] motion.
///
/// Lengths are scaled by the chord, which is therefore one.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchHeaveParams {
    /// Translation speed of the pitch axis along `x`.
    pub freestream: Real,
    /// Pitch axis, relative to the centroid, in the body frame.
    pub axis: [Real; 2],
    /// Reduced frequency `K = Ω c / (2 U₀)`.
    pub reduced_frequency: Real,
    /// Phase of the pitch oscillation, in radians.
    pub pitch_phase: Real,
    /// Phase of the heave oscillation, in radians.
    pub heave_phase: Real,
    /// Mean angle of attack.
    pub mean_angle: Real,
    /// Amplitude of the pitch oscillation.
    pub pitch_amplitude: Real,
    /// Amplitude of the heave oscillation.
    pub heave_amplitude: Real,
}

impl Default for PitchHeaveParams {
    fn default() -> Self {
        Self {
            freestream: 1.0,
            axis: [0.0, 0.0],
            reduced_frequency: 0.0,
            pitch_phase: 0.0,
            heave_phase: 0.0,
            mean_angle: 0.0,
            pitch_amplitude: 0.0,
            heave_amplitude: 0.0,
        }
    }
}

/// Oscillatory pitching and heaving (plunging) of a translating body.
///
/// With `Ω = 2 K U₀`, the angle is `α₀ + Δα sin(Ω t + ϕp)` and the pitch axis
/// sits at `(U₀ t, A sin(Ω t + ϕh))`.
#[derive(Clone, Debug, PartialEq)]
pub struct PitchHeave {
    params: PitchHeaveParams,
    inner: ProfileKinematics,
}

impl PitchHeave {
    /// Builds the pitch-heave kinematics.
    ///
    /// Fails if a parameter is not finite or if the reduced frequency is negative.
    pub fn new(params: PitchHeaveParams) -> Result<Self> {
        let PitchHeaveParams {
            freestream,
            axis,
            reduced_frequency,
            pitch_phase,
            heave_phase,
            mean_angle,
            pitch_amplitude,
            heave_amplitude,
        } = params;
        for (name, value) in [
            ("freestream", freestream),
            ("reduced frequency", reduced_frequency),
            ("pitch phase", pitch_phase),
            ("heave phase", heave_phase),
            ("mean angle", mean_angle),
            ("pitch amplitude", pitch_amplitude),
            ("heave amplitude", heave_amplitude),
        ] {
            check_finite(name, value)?;
        }
        if reduced_frequency < 0.0 {
            return Err(MotionError::InvalidConfiguration(format!(
                "reduced frequency must be non-negative, got {reduced_frequency}"
            )));
        }

        let omega = 2.0 * reduced_frequency * freestream;
        let x = Profile::linear(freestream);
        let y = heave_amplitude * Profile::phased_sinusoid(omega, heave_phase);
        let angle = Profile::constant(mean_angle)
            + pitch_amplitude * Profile::phased_sinusoid(omega, pitch_phase);
        let inner = ProfileKinematics::new(x, y, angle, Vector::new(axis[0], axis[1]))?;
        Ok(Self { params, inner })
    }

    /// The parameters this motion was built from.
    pub fn params(&self) -> &PitchHeaveParams {
        &self.params
    }

    /// The angular frequency of the oscillation.
    pub fn angular_frequency(&self) -> Real {
        2.0 * self.params.reduced_frequency * self.params.freestream
    }

    /// The underlying profile-based kinematics.
    pub fn as_profile_kinematics(&self) -> &ProfileKinematics {
        &self.inner
    }
}

impl Kinematics for PitchHeave {
    fn evaluate(&self, t: Real) -> KinematicState {
        self.inner.evaluate(t)
    }
}

/// Parameters of a [`Pitchup`] motion.
///
/// Lengths are scaled by the chord, which is therefore one.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchupParams {
    /// Translation speed of the rotation axis along `x`.
    pub freestream: Real,
    /// Rotation axis, relative to the centroid, in the body frame.
    pub axis: [Real; 2],
    /// Non-dimensional pitch rate `K = α̇₀ c / (2 U₀)`.
    pub pitch_rate: Real,
    /// Initial angle of attack.
    pub initial_angle: Real,
    /// Nominal start of the pitch-up.
    pub onset: Real,
    /// Total pitching angle.
    pub total_angle: Real,
}

impl Default for PitchupParams {
    fn default() -> Self {
        Self {
            freestream: 1.0,
            axis: [0.0, 0.0],
            pitch_rate: 0.2,
            initial_angle: 0.0,
            onset: 0.0,
            total_angle: std::f64::consts::FRAC_PI_2,
        }
    }
}

/// Sharpness of the default onset ramp of a [`Pitchup`].
pub const DEFAULT_PITCHUP_SHARPNESS: Real = 11.0;

/// A translating body pitching from one angle to another at a nominal constant rate.
///
/// With `α̇₀ = 2 K U₀` and `Δt = Δα / α̇₀`, the angle is
/// `α₀ + α̇₀ (R(t - t₀) - R(t - t₀ - Δt))` where `R` is the onset ramp, and the
/// rotation axis sits at `(U₀ t, 0)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Pitchup {
    params: PitchupParams,
    inner: ProfileKinematics,
}

impl Pitchup {
    /// Builds the pitch-up with the default log-cosh onset ramp.
    pub fn new(params: PitchupParams) -> Result<Self> {
        Self::with_ramp(params, Profile::log_cosh_ramp(DEFAULT_PITCHUP_SHARPNESS)?)
    }

    /// Builds the pitch-up with the given onset ramp.
    ///
    /// `ramp` should vanish for large negative times and behave like `t` for
    /// large positive times, e.g. [`Profile::LogCoshRamp`] or [`Profile::SmoothRamp`].
    pub fn with_ramp(params: PitchupParams, ramp: Profile) -> Result<Self> {
        let PitchupParams {
            freestream,
            axis,
            pitch_rate,
            initial_angle,
            onset,
            total_angle,
        } = params;
        for (name, value) in [
            ("freestream", freestream),
            ("pitch rate", pitch_rate),
            ("initial angle", initial_angle),
            ("onset", onset),
            ("total angle", total_angle),
        ] {
            check_finite(name, value)?;
        }
        let rate = 2.0 * pitch_rate * freestream;
        if rate <= 0.0 {
            return Err(MotionError::InvalidConfiguration(format!(
                "pitch rate and freestream must be positive, got K = {pitch_rate}, U₀ = {freestream}"
            )));
        }

        let duration = total_angle / rate;
        let x = Profile::linear(freestream);
        let y = Profile::zero();
        let angle = Profile::constant(initial_angle)
            + rate * ((ramp.clone() >> onset) - (ramp >> (onset + duration)));
        let inner = ProfileKinematics::new(x, y, angle, Vector::new(axis[0], axis[1]))?;
        Ok(Self { params, inner })
    }

    /// The parameters this motion was built from.
    pub fn params(&self) -> &PitchupParams {
        &self.params
    }

    /// The nominal duration of the pitch-up.
    pub fn duration(&self) -> Real {
        self.params.total_angle / (2.0 * self.params.pitch_rate * self.params.freestream)
    }

    /// The underlying profile-based kinematics.
    pub fn as_profile_kinematics(&self) -> &ProfileKinematics {
        &self.inner
    }
}

impl Kinematics for Pitchup {
    fn evaluate(&self, t: Real) -> KinematicState {
        self.inner.evaluate(t)
    }
}

/// Kinematics that follow another set of kinematics only during `[t_on, t_off)`.
///
/// Outside that window the pose is frozen at its value at the nearest window
/// edge, and the velocities and accelerations are zero. The pose is therefore
/// continuous in time while the velocity jumps at `t_on` and `t_off`.
#[derive(Debug)]
pub struct SwitchedKinematics {
    inner: Box<dyn Kinematics>,
    t_on: Real,
    t_off: Real,
}

impl SwitchedKinematics {
    /// Switches `inner` on at `t_on` and off at `t_off`.
    ///
    /// Fails if either time is not finite or if `t_off < t_on`.
    pub fn new(inner: impl Kinematics + 'static, t_on: Real, t_off: Real) -> Result<Self> {
        Self::from_boxed(Box::new(inner), t_on, t_off)
    }

    /// Same as [`SwitchedKinematics::new`] for already boxed kinematics.
    pub fn from_boxed(inner: Box<dyn Kinematics>, t_on: Real, t_off: Real) -> Result<Self> {
        check_finite("switch-on time", t_on)?;
        check_finite("switch-off time", t_off)?;
        if t_off < t_on {
            return Err(MotionError::InvalidConfiguration(format!(
                "switch-off time {t_off} precedes switch-on time {t_on}"
            )));
        }
        if t_off == t_on {
            log::warn!("switched kinematics with t_on = t_off = {t_on} are never active");
        }
        Ok(Self { inner, t_on, t_off })
    }

    /// The switch-on time.
    pub fn t_on(&self) -> Real {
        self.t_on
    }

    /// The switch-off time.
    pub fn t_off(&self) -> Real {
        self.t_off
    }

    /// Is the inner motion active at time `t`?
    pub fn is_active(&self, t: Real) -> bool {
        t >= self.t_on && t < self.t_off
    }
}

impl Kinematics for SwitchedKinematics {
    fn evaluate(&self, t: Real) -> KinematicState {
        if self.is_active(t) {
            self.inner.evaluate(t)
        } else {
            self.inner.evaluate(t.clamp(self.t_on, self.t_off)).frozen()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    const TIMES: [Real; 6] = [-0.4, 0.0, 0.3, 1.1, 2.5, 7.0];

    fn pitch_heave() -> PitchHeave {
        PitchHeave::new(PitchHeaveParams {
            freestream: 1.0,
            axis: [0.25, 0.0],
            reduced_frequency: 0.7,
            pitch_phase: PI / 2.0,
            heave_phase: 0.0,
            mean_angle: 0.1,
            pitch_amplitude: 0.3,
            heave_amplitude: 0.25,
        })
        .unwrap()
    }

    // Derivatives of the pose checked against central differences.
    fn assert_consistent(kin: &dyn Kinematics, t: Real) {
        let h = 1.0e-5;
        let (m, s, p) = (kin.evaluate(t - h), kin.evaluate(t), kin.evaluate(t + h));
        let d = |a: Real, b: Real| (b - a) / (2.0 * h);
        let tol = 1.0e-6;
        assert_abs_diff_eq!(s.velocity.x, d(m.position.x, p.position.x), epsilon = tol);
        assert_abs_diff_eq!(s.velocity.y, d(m.position.y, p.position.y), epsilon = tol);
        assert_abs_diff_eq!(s.acceleration.x, d(m.velocity.x, p.velocity.x), epsilon = tol);
        assert_abs_diff_eq!(s.acceleration.y, d(m.velocity.y, p.velocity.y), epsilon = tol);
        assert_abs_diff_eq!(s.angular_velocity, d(m.angle, p.angle), epsilon = tol);
        assert_abs_diff_eq!(
            s.angular_acceleration,
            d(m.angular_velocity, p.angular_velocity),
            epsilon = tol
        );
    }

    #[test]
    fn stationary_and_constant_velocity() {
        assert_eq!(Stationary.evaluate(3.0), KinematicState::default());

        let kin = ConstantVelocity::new(Vector::new(1.0, -2.0), 0.5).unwrap();
        let s = kin.evaluate(2.0);
        assert_eq!(s.position, Vector::new(2.0, -4.0));
        assert_eq!(s.velocity, Vector::new(1.0, -2.0));
        assert_eq!(s.acceleration, Vector::zeros());
        assert_eq!(s.angle, 1.0);
        assert_eq!(s.angular_velocity, 0.5);
        assert!(ConstantVelocity::new(Vector::new(Real::NAN, 0.0), 0.0).is_err());
    }

    #[test]
    fn zero_offset_correction_is_the_identity() {
        let axis = KinematicState {
            position: Vector::new(0.3, -1.2),
            velocity: Vector::new(2.0, 0.5),
            acceleration: Vector::new(-0.7, 4.0),
            angle: 0.9,
            angular_velocity: -1.3,
            angular_acceleration: 2.2,
        };
        assert_eq!(axis_offset_correction(&axis, &Vector::zeros()), axis);

        let params = PitchHeaveParams {
            axis: [0.0, 0.0],
            ..*pitch_heave().params()
        };
        let kin = PitchHeave::new(params).unwrap();
        for t in TIMES {
            let pk = kin.as_profile_kinematics();
            assert_eq!(kin.evaluate(t), pk.axis_state(t));
        }
    }

    #[test]
    fn offset_correction_keeps_the_axis_fixed_in_the_body() {
        let kin = pitch_heave();
        let pk = kin.as_profile_kinematics();
        for t in TIMES {
            let c = kin.evaluate(t);
            let axis = pk.axis_state(t);
            let back = c.position + Rotation::new(c.angle) * pk.axis_offset();
            assert_relative_eq!(back, axis.position, epsilon = 1.0e-14);
            // Rigid velocity of a body point located at the axis.
            let r = axis.position - c.position;
            let v = c.velocity + c.angular_velocity * Vector::new(-r.y, r.x);
            assert_relative_eq!(v, axis.velocity, epsilon = 1.0e-14);
        }
    }

    #[test]
    fn pitch_heave_matches_its_closed_form() {
        let kin = pitch_heave();
        let omega = kin.angular_frequency();
        assert_relative_eq!(omega, 1.4);
        let pk = kin.as_profile_kinematics();
        for t in TIMES {
            let axis = pk.axis_state(t);
            assert_relative_eq!(axis.position.x, t, epsilon = 1.0e-14);
            assert_relative_eq!(axis.velocity.x, 1.0);
            assert_relative_eq!(axis.position.y, 0.25 * (omega * t).sin(), epsilon = 1.0e-14);
            assert_relative_eq!(
                axis.velocity.y,
                0.25 * omega * (omega * t).cos(),
                epsilon = 1.0e-14
            );
            assert_relative_eq!(
                axis.angle,
                0.1 + 0.3 * (omega * t + PI / 2.0).sin(),
                epsilon = 1.0e-14
            );
            assert_relative_eq!(
                axis.angular_acceleration,
                -0.3 * omega * omega * (omega * t + PI / 2.0).sin(),
                epsilon = 1.0e-13
            );
            assert_consistent(&kin, t);
        }
    }

    #[test]
    fn pitch_heave_velocity_is_the_exact_derivative() {
        let kin = pitch_heave();
        let pk = kin.as_profile_kinematics();
        let [x, y, angle] = pk.profiles();
        for t in TIMES {
            let axis = pk.axis_state(t);
            assert_eq!(axis.velocity.x, x.evaluate_derivative(1, t));
            assert_eq!(axis.velocity.y, y.evaluate_derivative(1, t));
            assert_eq!(axis.acceleration.y, y.evaluate_derivative(2, t));
            assert_eq!(axis.angular_velocity, angle.evaluate_derivative(1, t));
            assert_eq!(axis.angular_acceleration, angle.evaluate_derivative(2, t));
        }
    }

    #[test]
    fn pitchup_ramps_through_the_total_angle() {
        let params = PitchupParams {
            freestream: 1.0,
            axis: [-0.5, 0.0],
            pitch_rate: 0.2,
            initial_angle: 0.0,
            onset: 0.5,
            total_angle: PI / 4.0,
        };
        let smooth = Pitchup::with_ramp(params, Profile::smooth_ramp(3, 0.2).unwrap()).unwrap();
        assert_relative_eq!(smooth.duration(), PI / 4.0 / 0.4);

        let before = smooth.evaluate(0.0);
        assert_eq!(before.angle, 0.0);
        assert_eq!(before.angular_velocity, 0.0);
        let after = smooth.evaluate(0.5 + smooth.duration() + 1.0);
        assert_relative_eq!(after.angle, PI / 4.0, epsilon = 1.0e-12);
        assert_eq!(after.angular_velocity, 0.0);
        let middle = smooth.evaluate(0.5 + 0.5 * smooth.duration());
        assert_relative_eq!(middle.angular_velocity, 0.4);
        assert_relative_eq!(middle.angle, PI / 8.0, epsilon = 1.0e-12);

        let eldredge = Pitchup::new(params).unwrap();
        let far = eldredge.evaluate(20.0);
        assert_relative_eq!(far.angle, PI / 4.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(eldredge.evaluate(-20.0).angle, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(far.position.x - 20.0, 0.5 * (PI / 4.0).cos(), epsilon = 1.0e-12);
        for t in [0.3, 0.5, 1.0, 2.0, 2.5] {
            assert_consistent(&eldredge, t);
            assert_consistent(&smooth, t);
        }
    }

    #[test]
    fn pitchup_rejects_non_physical_parameters() {
        let bad = PitchupParams {
            pitch_rate: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            Pitchup::new(bad),
            Err(MotionError::InvalidConfiguration(_))
        ));
        let bad = PitchupParams {
            onset: Real::INFINITY,
            ..Default::default()
        };
        assert!(Pitchup::new(bad).is_err());
        let bad = PitchHeaveParams {
            reduced_frequency: -1.0,
            ..Default::default()
        };
        assert!(PitchHeave::new(bad).is_err());
    }

    #[test]
    fn switched_kinematics_freeze_the_pose_outside_the_window() {
        let inner = ConstantVelocity::new(Vector::new(1.0, 2.0), 0.5).unwrap();
        let kin = SwitchedKinematics::new(inner, 1.0, 3.0).unwrap();

        let before = kin.evaluate(0.0);
        assert_eq!(before.position, Vector::new(1.0, 2.0));
        assert_eq!(before.angle, 0.5);
        assert_eq!(before.velocity, Vector::zeros());
        assert_eq!(before.angular_velocity, 0.0);

        let on = kin.evaluate(1.0);
        assert_eq!(on.position, before.position);
        assert_eq!(on.velocity, Vector::new(1.0, 2.0));

        let off = kin.evaluate(3.0);
        assert_eq!(off.position, Vector::new(3.0, 6.0));
        assert_eq!(off.velocity, Vector::zeros());
        assert_eq!(off.angular_velocity, 0.0);
        assert_eq!(kin.evaluate(10.0), off);

        let eps = 1.0e-9;
        assert_relative_eq!(
            kin.evaluate(3.0 - eps).position,
            off.position,
            epsilon = 1.0e-8
        );
        assert_relative_eq!(kin.evaluate(1.0 - eps).angle, on.angle);
    }

    #[test]
    fn switched_kinematics_validate_the_window() {
        assert!(matches!(
            SwitchedKinematics::new(Stationary, 2.0, 1.0),
            Err(MotionError::InvalidConfiguration(_))
        ));
        assert!(SwitchedKinematics::new(Stationary, Real::NAN, 1.0).is_err());
        let never = SwitchedKinematics::new(Stationary, 1.0, 1.0).unwrap();
        assert!(!never.is_active(1.0));
    }
}
