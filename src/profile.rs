//! Composable scalar functions of time.
//!
//! A [`Profile`] is a small expression tree. Arithmetic, time shifts and
//! differentiation build new trees without evaluating anything; evaluation
//! walks the tree once per query time.
//!
//! Every node can report its analytic derivatives of any order through
//! [`Profile::evaluate_derivative`], so a [`Profile::Derivative`] node is
//! exact and never relies on finite differences.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::ops::{Add, Mul, Neg, Shl, Shr, Sub};

use crate::error::{MotionError, Result};
use crate::math::Real;

/// Largest order accepted by [`Profile::smooth_ramp`].
///
/// The ramp polynomial has alternating coefficients growing like `4ⁿ`, so
/// higher orders lose all precision to cancellation.
pub const MAX_SMOOTH_RAMP_ORDER: u32 = 32;

/// A real-valued function of time.
///
/// Two profiles compare equal iff their trees have the same shape and the
/// same leaf parameters. Sums are stored flattened, so `a + (b + c)` and
/// `(a + b) + c` produce the same tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Profile {
    /// The constant `c`.
    Constant(Real),
    /// `c[0] + c[1] t + c[2] t² + …`.
    Polynomial(Vec<Real>),
    /// `sin(omega t + phase)`.
    Sinusoid {
        /// Angular frequency.
        omega: Real,
        /// Phase, in radians.
        phase: Real,
    },
    /// `(ln(2 cosh(a t)) + a t) / (2a)` with `a = sharpness`.
    ///
    /// Smoothly ramps from `0` (for `t → -∞`) to `t` (for `t → +∞`), with the
    /// corner centered at `t = 0`. Its derivative is a smoothed unit step.
    LogCoshRamp {
        /// Controls how abruptly the ramp turns on.
        sharpness: Real,
    },
    /// The integral of the generalized smoothstep of the given order over the
    /// window `[-width/2, width/2]`.
    ///
    /// Exactly `0` before the window and exactly `t` after it; the derivative
    /// of order `k ≤ order + 1` is continuous everywhere.
    SmoothRamp {
        /// Number of derivatives of the step vanishing at both window edges,
        /// at most [`MAX_SMOOTH_RAMP_ORDER`].
        order: u32,
        /// Duration of the window.
        width: Real,
    },
    /// The sum of the addends, in order.
    Sum(Vec<Profile>),
    /// `k * p(t)`.
    Scaled(Real, Box<Profile>),
    /// `-p(t)`.
    Negated(Box<Profile>),
    /// `p(t - dt)`.
    Shifted(Box<Profile>, Real),
    /// `dp/dt (t)`.
    Derivative(Box<Profile>),
}

impl Profile {
    /// The zero profile.
    pub fn zero() -> Self {
        Profile::Constant(0.0)
    }

    /// The constant profile `c`.
    pub fn constant(c: Real) -> Self {
        Profile::Constant(c)
    }

    /// The linear profile `slope * t`.
    pub fn linear(slope: Real) -> Self {
        Profile::Polynomial(vec![0.0, slope])
    }

    /// A polynomial in `t`, with coefficients given in ascending powers.
    pub fn polynomial(coeffs: impl Into<Vec<Real>>) -> Self {
        Profile::Polynomial(coeffs.into())
    }

    /// The profile `sin(omega t)`.
    pub fn sinusoid(omega: Real) -> Self {
        Self::phased_sinusoid(omega, 0.0)
    }

    /// The profile `sin(omega t + phase)`.
    pub fn phased_sinusoid(omega: Real, phase: Real) -> Self {
        Profile::Sinusoid { omega, phase }
    }

    /// A log-cosh ramp with the given sharpness.
    ///
    /// Fails if `sharpness` is not strictly positive and finite.
    pub fn log_cosh_ramp(sharpness: Real) -> Result<Self> {
        if !(sharpness.is_finite() && sharpness > 0.0) {
            return Err(MotionError::InvalidConfiguration(format!(
                "ramp sharpness must be positive and finite, got {sharpness}"
            )));
        }
        Ok(Profile::LogCoshRamp { sharpness })
    }

    /// A smoothstep-integral ramp of the given order, centered on `t = 0`.
    ///
    /// Fails if `width` is not strictly positive and finite, or if `order`
    /// exceeds [`MAX_SMOOTH_RAMP_ORDER`].
    pub fn smooth_ramp(order: u32, width: Real) -> Result<Self> {
        if order > MAX_SMOOTH_RAMP_ORDER {
            return Err(MotionError::InvalidConfiguration(format!(
                "ramp order must be at most {MAX_SMOOTH_RAMP_ORDER}, got {order}"
            )));
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(MotionError::InvalidConfiguration(format!(
                "ramp width must be positive and finite, got {width}"
            )));
        }
        Ok(Profile::SmoothRamp { order, width })
    }

    /// Evaluates this profile at time `t`.
    pub fn evaluate(&self, t: Real) -> Real {
        self.evaluate_derivative(0, t)
    }

    /// Evaluates this profile at each of the given times.
    pub fn sample(&self, times: &[Real]) -> Vec<Real> {
        times.iter().map(|t| self.evaluate(*t)).collect()
    }

    /// Evaluates the `order`-th time derivative of this profile at `t`.
    ///
    /// The result is computed analytically for every node.
    pub fn evaluate_derivative(&self, order: u32, t: Real) -> Real {
        match self {
            Profile::Constant(c) => {
                if order == 0 {
                    *c
                } else {
                    0.0
                }
            }
            Profile::Polynomial(coeffs) => eval_polynomial_derivative(coeffs, order, t),
            Profile::Sinusoid { omega, phase } => {
                // Same operation order as repeated `differentiate`.
                let phase = (0..order).fold(*phase, |acc, _| acc + FRAC_PI_2);
                let value = (omega * t + phase).sin();
                (0..order).fold(value, |acc, _| omega * acc)
            }
            Profile::LogCoshRamp { sharpness } => log_cosh_ramp(*sharpness, order, t),
            Profile::SmoothRamp {
                order: step_order,
                width,
            } => smooth_ramp(*step_order, *width, order, t),
            Profile::Sum(addends) => addends
                .iter()
                .fold(0.0, |acc, p| acc + p.evaluate_derivative(order, t)),
            Profile::Scaled(k, p) => k * p.evaluate_derivative(order, t),
            Profile::Negated(p) => -p.evaluate_derivative(order, t),
            Profile::Shifted(p, dt) => p.evaluate_derivative(order, t - dt),
            Profile::Derivative(p) => p.evaluate_derivative(order + 1, t),
        }
    }

    /// Returns the time derivative of this profile.
    ///
    /// Differentiation distributes over sums, scalings, negations and shifts.
    /// Constants, polynomials and sinusoids are differentiated symbolically;
    /// ramps are wrapped in a [`Profile::Derivative`] node, which evaluates
    /// their closed-form derivative.
    pub fn differentiate(&self) -> Profile {
        match self {
            Profile::Constant(_) => Profile::Constant(0.0),
            Profile::Polynomial(coeffs) => Profile::Polynomial(derive_once(coeffs)),
            Profile::Sinusoid { omega, phase } => Profile::Scaled(
                *omega,
                Box::new(Profile::Sinusoid {
                    omega: *omega,
                    phase: phase + FRAC_PI_2,
                }),
            ),
            Profile::LogCoshRamp { .. } | Profile::SmoothRamp { .. } | Profile::Derivative(_) => {
                Profile::Derivative(Box::new(self.clone()))
            }
            Profile::Sum(addends) => {
                Profile::Sum(addends.iter().map(Profile::differentiate).collect())
            }
            Profile::Scaled(k, p) => Profile::Scaled(*k, Box::new(p.differentiate())),
            Profile::Negated(p) => Profile::Negated(Box::new(p.differentiate())),
            Profile::Shifted(p, dt) => Profile::Shifted(Box::new(p.differentiate()), *dt),
        }
    }

    /// Returns this profile delayed by `dt`, i.e. `q(t) = p(t - dt)`.
    pub fn shift(self, dt: Real) -> Profile {
        Profile::Shifted(Box::new(self), dt)
    }

    /// Returns this profile multiplied by `k`.
    pub fn scale(self, k: Real) -> Profile {
        Profile::Scaled(k, Box::new(self))
    }
}

/// Returns the time derivative of `p`.
pub fn d_dt(p: &Profile) -> Profile {
    p.differentiate()
}

fn int_pow(x: Real, n: u32) -> Real {
    (0..n).fold(1.0, |acc, _| acc * x)
}

fn derive_once(coeffs: &[Real]) -> Vec<Real> {
    coeffs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(k, c)| k as Real * c)
        .collect()
}

// Coefficients of the `order`-th derivative of a polynomial given in ascending powers.
fn derive_coefficients(coeffs: &[Real], order: u32) -> Vec<Real> {
    let mut coeffs = coeffs.to_vec();
    for _ in 0..order {
        coeffs = derive_once(&coeffs);
    }
    coeffs
}

fn horner(coeffs: &[Real], x: Real) -> Real {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

fn eval_polynomial_derivative(coeffs: &[Real], order: u32, t: Real) -> Real {
    if order == 0 {
        horner(coeffs, t)
    } else {
        horner(&derive_coefficients(coeffs, order), t)
    }
}

fn log_cosh_ramp(a: Real, order: u32, t: Real) -> Real {
    let x = a * t;
    match order {
        // ln(2 cosh x) + x = 2 max(x, 0) + ln(1 + e^{-2|x|}) stays finite for large |x|.
        0 => (2.0 * x.max(0.0) + (-2.0 * x.abs()).exp().ln_1p()) / (2.0 * a),
        1 => 0.5 * (1.0 + x.tanh()),
        _ => {
            // d^k/dx^k tanh(x) = P_k(tanh x), with P_{k+1} = P_k' (1 - T²).
            let mut poly = vec![0.0, 1.0];
            for _ in 1..order {
                let dp = derive_coefficients(&poly, 1);
                let mut next = vec![0.0; dp.len() + 2];
                for (i, c) in dp.iter().enumerate() {
                    next[i] += c;
                    next[i + 2] -= c;
                }
                poly = next;
            }
            0.5 * int_pow(a, order - 1) * horner(&poly, x.tanh())
        }
    }
}

fn binomial(n: u32, k: u32) -> Real {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as Real / (i + 1) as Real)
}

// Coefficients, in ascending powers of x ∈ [0, 1], of the integral of the
// generalized smoothstep S_n whose derivative is K xⁿ (1 - x)ⁿ.
fn smooth_ramp_coefficients(n: u32) -> Vec<Real> {
    let k = (2 * n + 1) as Real * binomial(2 * n, n);
    let mut coeffs = vec![0.0; (2 * n + 3) as usize];
    for j in 0..=n {
        let p = n + j;
        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
        coeffs[(p + 2) as usize] =
            sign * k * binomial(n, j) / ((p + 1) as Real * (p + 2) as Real);
    }
    coeffs
}

fn smooth_ramp(n: u32, width: Real, order: u32, t: Real) -> Real {
    let x = (t + 0.5 * width) / width;
    if x <= 0.0 {
        0.0
    } else if x >= 1.0 {
        match order {
            0 => t,
            1 => 1.0,
            _ => 0.0,
        }
    } else {
        let coeffs = smooth_ramp_coefficients(n);
        let scale = width.powi(1 - order as i32);
        scale * eval_polynomial_derivative(&coeffs, order, x)
    }
}

impl Add for Profile {
    type Output = Profile;

    fn add(self, rhs: Profile) -> Profile {
        match (self, rhs) {
            (Profile::Sum(mut lhs), Profile::Sum(rhs)) => {
                lhs.extend(rhs);
                Profile::Sum(lhs)
            }
            (Profile::Sum(mut lhs), rhs) => {
                lhs.push(rhs);
                Profile::Sum(lhs)
            }
            (lhs, Profile::Sum(mut rhs)) => {
                rhs.insert(0, lhs);
                Profile::Sum(rhs)
            }
            (lhs, rhs) => Profile::Sum(vec![lhs, rhs]),
        }
    }
}

impl Neg for Profile {
    type Output = Profile;

    fn neg(self) -> Profile {
        Profile::Negated(Box::new(self))
    }
}

impl Sub for Profile {
    type Output = Profile;

    fn sub(self, rhs: Profile) -> Profile {
        self + (-rhs)
    }
}

impl Mul<Profile> for Real {
    type Output = Profile;

    fn mul(self, rhs: Profile) -> Profile {
        rhs.scale(self)
    }
}

impl Mul<Real> for Profile {
    type Output = Profile;

    fn mul(self, rhs: Real) -> Profile {
        self.scale(rhs)
    }
}

impl Shr<Real> for Profile {
    type Output = Profile;

    fn shr(self, dt: Real) -> Profile {
        self.shift(dt)
    }
}

impl Shl<Real> for Profile {
    type Output = Profile;

    fn shl(self, dt: Real) -> Profile {
        self.shift(-dt)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Constant(c) => write!(f, "Constant ({c})"),
            Profile::Polynomial(coeffs) => write!(f, "Polynomial ({coeffs:?})"),
            Profile::Sinusoid { omega, phase } => {
                if *phase == 0.0 {
                    write!(f, "Sinusoid (ω = {omega:.2})")
                } else {
                    write!(f, "Sinusoid (ω = {omega:.2}, ϕ = {phase:.2})")
                }
            }
            Profile::LogCoshRamp { sharpness } => write!(f, "logcosh ramp (aₛ = {sharpness:.1})"),
            Profile::SmoothRamp { order, width } => {
                write!(f, "power series ramp (n = {order}, width = {width})")
            }
            Profile::Sum(addends) => {
                writeln!(f, "AddedProfiles:")?;
                for p in addends {
                    writeln!(f, "  {p}")?;
                }
                Ok(())
            }
            Profile::Scaled(k, p) => write!(f, "{k} × ({p})"),
            Profile::Negated(p) => write!(f, "-({p})"),
            Profile::Shifted(p, dt) => write!(f, "{p} >> {dt}"),
            Profile::Derivative(p) => write!(f, "d/dt ({p})"),
        }
    }
}
