//! Spring configuration and presets
//!
//! A [`SpringConfig`] is a validated `(strength, dampness)` pair. Configs can
//! come from the named presets or from a TOML `[spring]` table:
//!
//! ```toml
//! [spring]
//! preset = "snappy"   # optional starting point
//! dampness = 1.2      # overrides the preset
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpringError};
use crate::spring::validate;

/// Physical parameters of a spring
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpringConfig")]
pub struct SpringConfig {
    strength: f32,
    dampness: f32,
}

#[derive(Deserialize)]
struct RawSpringConfig {
    strength: f32,
    dampness: f32,
}

impl TryFrom<RawSpringConfig> for SpringConfig {
    type Error = SpringError;

    fn try_from(raw: RawSpringConfig) -> Result<Self> {
        Self::new(raw.strength, raw.dampness)
    }
}

impl SpringConfig {
    /// Names accepted by [`SpringConfig::preset`]
    pub const PRESETS: [&'static str; 6] =
        ["gentle", "default", "snappy", "stiff", "wobbly", "molasses"];

    pub fn new(strength: f32, dampness: f32) -> Result<Self> {
        validate(strength, dampness)?;
        Ok(Self { strength, dampness })
    }

    pub(crate) const fn from_parts_unchecked(strength: f32, dampness: f32) -> Self {
        Self { strength, dampness }
    }

    /// Critically damped and unhurried
    pub const fn gentle() -> Self {
        Self::from_parts_unchecked(120.0, 1.0)
    }

    /// Quick with barely any overshoot
    pub const fn snappy() -> Self {
        Self::from_parts_unchecked(400.0, 0.9)
    }

    /// Fast, no overshoot
    pub const fn stiff() -> Self {
        Self::from_parts_unchecked(700.0, 1.0)
    }

    /// Visibly bouncy
    pub const fn wobbly() -> Self {
        Self::from_parts_unchecked(180.0, 0.3)
    }

    /// Heavily over-damped, creeps onto the target
    pub const fn molasses() -> Self {
        Self::from_parts_unchecked(280.0, 2.5)
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "gentle" => Some(Self::gentle()),
            "default" => Some(Self::default()),
            "snappy" => Some(Self::snappy()),
            "stiff" => Some(Self::stiff()),
            "wobbly" => Some(Self::wobbly()),
            "molasses" => Some(Self::molasses()),
            _ => None,
        }
    }

    /// Parse the `[spring]` table of a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct Document {
            spring: SpringSection,
        }

        let document: Document =
            toml::from_str(content).map_err(|e| SpringError::Config(e.to_string()))?;
        document.spring.resolve()
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn dampness(&self) -> f32 {
        self.dampness
    }

    /// `dampness >= 1`: the spring approaches its target without overshooting
    pub fn is_overdamped(&self) -> bool {
        self.dampness >= 1.0
    }

    pub fn is_critically_damped(&self) -> bool {
        self.dampness == 1.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from_parts_unchecked(170.0, 0.8)
    }
}

/// A `[spring]` table: an optional preset plus explicit overrides
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpringSection {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub strength: Option<f32>,
    #[serde(default)]
    pub dampness: Option<f32>,
}

impl SpringSection {
    /// Resolve to a validated config. Missing values fall back to the
    /// preset, or to [`SpringConfig::default`] when no preset is named.
    pub fn resolve(&self) -> Result<SpringConfig> {
        let base = match &self.preset {
            Some(name) => SpringConfig::preset(name)
                .ok_or_else(|| SpringError::UnknownPreset(name.clone()))?,
            None => SpringConfig::default(),
        };

        SpringConfig::new(
            self.strength.unwrap_or(base.strength),
            self.dampness.unwrap_or(base.dampness),
        )
    }
}
