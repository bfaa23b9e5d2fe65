use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An implementation of a time-decaying value
pub trait Decay {
    /// Calculate value at time `t`
    fn evaluate(&self, t: f32) -> f32;
}

fn validate(rate: f32, vi: f32, vf: f32) -> Result<(), ConfigError> {
    ((rate >= 0.0 && vi > vf) || (rate < 0.0 && vi < vf))
        .then_some(())
        .ok_or_else(|| ConfigError::Validation(String::from("`vi - vf` must have same sign as `rate`")))
}

/// A constant value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    value: f32,
}

impl Constant {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Decay for Constant {
    fn evaluate(&self, _t: f32) -> f32 {
        self.value
    }
}

/// v(t) = v<sub>f</sub> + (v<sub>i</sub> - v<sub>f</sub>) * e<sup>-rt</sup>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exponential {
    rate: f32,
    vi: f32,
    vf: f32,
}

impl Exponential {
    pub fn new(rate: f32, vi: f32, vf: f32) -> Result<Self, ConfigError> {
        validate(rate, vi, vf)?;
        Ok(Self { rate, vi, vf })
    }
}

impl Decay for Exponential {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, vi, vf } = self;
        vf + (vi - vf) * (-rate * t).exp()
    }
}

/// v(t) = max(v<sub>i</sub> - rt, v<sub>f</sub>)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Linear {
    rate: f32,
    vi: f32,
    vf: f32,
}

impl Linear {
    pub fn new(rate: f32, vi: f32, vf: f32) -> Result<Self, ConfigError> {
        validate(rate, vi, vf)?;
        Ok(Self { rate, vi, vf })
    }
}

impl Decay for Linear {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, vi, vf } = self;
        (vi - rate * t).max(vf)
    }
}

/// One of the decay strategies, selectable from a config file
///
/// ```toml
/// kind = "exponential"
/// rate = 0.01
/// vi = 0.9
/// vf = 0.1
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Schedule {
    Constant(Constant),
    Exponential(Exponential),
    Linear(Linear),
}

impl Schedule {
    /// Check a deserialized schedule the same way the constructors do
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Schedule::Constant(Constant { value }) => (0.0..=1.0)
                .contains(value)
                .then_some(())
                .ok_or_else(|| {
                    ConfigError::Validation(format!(
                        "constant probability must be in [0, 1], got {value}"
                    ))
                }),
            Schedule::Exponential(Exponential { rate, vi, vf })
            | Schedule::Linear(Linear { rate, vi, vf }) => validate(*rate, *vi, *vf),
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::Constant(Constant::new(0.5))
    }
}

impl Decay for Schedule {
    fn evaluate(&self, t: f32) -> f32 {
        match self {
            Schedule::Constant(d) => d.evaluate(t),
            Schedule::Exponential(d) => d.evaluate(t),
            Schedule::Linear(d) => d.evaluate(t),
        }
    }
}
