//! Serializable motion descriptions.
//!
//! A [`MotionConfig`] lists one [`KinematicsDesc`] per body, in body order:
//!
//! ```json
//! {
//!   "bodies": [
//!     { "type": "pitchup", "params": { "pitch_rate": 0.2, "axis": [-0.5, 0.0] } },
//!     { "type": "stationary" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::kinematics::{
    ConstantVelocity, Kinematics, PitchHeave, PitchHeaveParams, Pitchup, PitchupParams,
    Stationary, SwitchedKinematics, DEFAULT_PITCHUP_SHARPNESS,
};
use crate::math::{Real, Vector};
use crate::motion::{RigidBodyMotion, RigidMotionList};
use crate::profile::Profile;

/// The smoothed ramp used at the corners of a pitch-up.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RampDesc {
    /// See [`Profile::LogCoshRamp`].
    LogCosh {
        /// Larger values give sharper corners.
        sharpness: Real,
    },
    /// See [`Profile::SmoothRamp`].
    SmoothStep {
        /// Number of continuous derivatives at the window edges.
        order: u32,
        /// Width of the transition window.
        width: Real,
    },
}

impl Default for RampDesc {
    fn default() -> Self {
        RampDesc::LogCosh {
            sharpness: DEFAULT_PITCHUP_SHARPNESS,
        }
    }
}

impl RampDesc {
    /// Builds the ramp profile.
    pub fn build(&self) -> Result<Profile> {
        match *self {
            RampDesc::LogCosh { sharpness } => Profile::log_cosh_ramp(sharpness),
            RampDesc::SmoothStep { order, width } => Profile::smooth_ramp(order, width),
        }
    }
}

/// The description of the kinematics of one body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KinematicsDesc {
    /// A body at rest at the origin.
    Stationary,
    /// A body translating and rotating at constant rates.
    ConstantVelocity {
        /// Velocity of the centroid.
        velocity: [Real; 2],
        /// Angular velocity.
        #[serde(default)]
        angular_velocity: Real,
    },
    /// An oscillatory pitching and heaving body.
    PitchHeave {
        /// Motion parameters.
        #[serde(default)]
        params: PitchHeaveParams,
    },
    /// A body pitching up at a nominally constant rate.
    Pitchup {
        /// Motion parameters.
        #[serde(default)]
        params: PitchupParams,
        /// Onset ramp.
        #[serde(default)]
        ramp: RampDesc,
    },
    /// Some kinematics only active during `[t_on, t_off)`.
    Switched {
        /// The switched kinematics.
        inner: Box<KinematicsDesc>,
        /// Switch-on time.
        t_on: Real,
        /// Switch-off time.
        t_off: Real,
    },
}

impl KinematicsDesc {
    /// Builds the kinematics evaluator described by `self`.
    pub fn build(&self) -> Result<Box<dyn Kinematics>> {
        let kin: Box<dyn Kinematics> = match self {
            KinematicsDesc::Stationary => Box::new(Stationary),
            KinematicsDesc::ConstantVelocity {
                velocity,
                angular_velocity,
            } => Box::new(ConstantVelocity::new(
                Vector::new(velocity[0], velocity[1]),
                *angular_velocity,
            )?),
            KinematicsDesc::PitchHeave { params } => Box::new(PitchHeave::new(*params)?),
            KinematicsDesc::Pitchup { params, ramp } => {
                Box::new(Pitchup::with_ramp(*params, ramp.build()?)?)
            }
            KinematicsDesc::Switched { inner, t_on, t_off } => Box::new(
                SwitchedKinematics::from_boxed(inner.build()?, *t_on, *t_off)?,
            ),
        };
        log::debug!("built kinematics {kin:?}");
        Ok(kin)
    }
}

/// The motions of a list of bodies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// One description per body, in body order.
    pub bodies: Vec<KinematicsDesc>,
}

impl MotionConfig {
    /// Parses a configuration from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MotionError::InvalidConfiguration(e.to_string()))
    }

    /// Serializes this configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MotionError::InvalidConfiguration(e.to_string()))
    }

    /// Builds one motion per body.
    ///
    /// Fails on the first description that does not build.
    pub fn build(&self) -> Result<RigidMotionList> {
        self.bodies
            .iter()
            .map(|desc| desc.build().map(RigidBodyMotion::from_boxed))
            .collect()
    }
}
