//! Damped harmonic oscillator
//!
//! A [`Spring`] is a plain `Copy` value. Every operation consumes the spring
//! and returns the next state, so callers can keep earlier states around for
//! diffing or undo.
//!
//! Time is fed in milliseconds and integrated in seconds: `strength` is the
//! stiffness `k` in s⁻² and `dampness` is the damping ratio ζ, so the motion
//! follows `a = -k·(x - target) - 2·ζ·√k·v`.

use crate::config::SpringConfig;
use crate::error::{Result, SpringError};

/// Longest sub-step the integrator takes, in milliseconds
pub const MAX_SUBSTEP_MS: f32 = 1.0;

/// Upper bound on sub-steps per `animate` call. Elapsed time past
/// `MAX_SUBSTEPS * MAX_SUBSTEP_MS` in a single call is dropped.
pub const MAX_SUBSTEPS: u32 = 1000;

/// Stiffness above which the 1 ms sub-step oscillates out of control
pub const MAX_STABLE_STRENGTH: f32 = 4.0e6;

/// Displacement from the target below which a spring may settle (value units)
pub const REST_DISPLACEMENT: f32 = 0.5;

/// Speed below which a spring may settle (value units per second)
pub const REST_VELOCITY: f32 = 2.0;

/// A single damped spring driving one value toward a target.
///
/// The rest thresholds are absolute, so springs spanning tens to hundreds of
/// units settle cleanly while springs over tiny ranges (an opacity in `0..1`,
/// say) snap early. Animate large magnitudes and rescale downstream.
///
/// Any dampness is stable. Stiffness is stable while `√strength · dt < 2`
/// for the 1 ms sub-step, i.e. `strength` below [`MAX_STABLE_STRENGTH`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    strength: f32,
    dampness: f32,
    value: f32,
    velocity: f32,
    target: f32,
    at_rest: bool,
}

impl Spring {
    /// Create a resting spring at `0.0`.
    ///
    /// Fails with [`SpringError::InvalidParameter`] unless `strength` is
    /// positive and `dampness` is non-negative (both finite).
    pub fn new(strength: f32, dampness: f32) -> Result<Self> {
        validate(strength, dampness)?;
        Ok(Self::resting(strength, dampness))
    }

    /// Create a resting spring at `0.0` from an already validated config
    pub fn from_config(config: SpringConfig) -> Self {
        Self::resting(config.strength(), config.dampness())
    }

    fn resting(strength: f32, dampness: f32) -> Self {
        Self {
            strength,
            dampness,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
            at_rest: true,
        }
    }

    /// Point the spring at a new target, keeping its current motion
    #[must_use]
    pub fn set_target(self, target: f32) -> Self {
        Self {
            target,
            at_rest: target == self.value && self.velocity == 0.0,
            ..self
        }
    }

    /// Teleport to `value`, discarding any velocity
    #[must_use]
    pub fn jump_to(self, value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            at_rest: value == self.target,
            ..self
        }
    }

    /// Advance the spring by `delta_ms` milliseconds.
    ///
    /// Resting springs and non-positive deltas are returned unchanged.
    #[must_use]
    pub fn animate(self, delta_ms: f32) -> Self {
        // Also rejects NaN
        if self.at_rest || !(delta_ms > 0.0) {
            return self;
        }

        let steps = (delta_ms / MAX_SUBSTEP_MS)
            .ceil()
            .clamp(1.0, MAX_SUBSTEPS as f32);
        let simulated_ms = delta_ms.min(MAX_SUBSTEPS as f32 * MAX_SUBSTEP_MS);
        let dt = simulated_ms / steps / 1000.0;

        let damping = 2.0 * self.dampness * self.strength.sqrt();
        let mut value = self.value;
        let mut velocity = self.velocity;

        // Semi-implicit Euler: velocity from the current position, then
        // position from the new velocity. Damping is solved implicitly so
        // any dampness stays stable.
        let damping_divisor = 1.0 + damping * dt;
        for _ in 0..steps as u32 {
            let spring_force = -self.strength * (value - self.target);
            velocity = (velocity + spring_force * dt) / damping_divisor;
            value += velocity * dt;
        }

        if is_settled(value - self.target, velocity) {
            tracing::trace!(value = self.target, "spring settled");
            return Self {
                value: self.target,
                velocity: 0.0,
                at_rest: true,
                ..self
            };
        }

        Self {
            value,
            velocity,
            at_rest: false,
            ..self
        }
    }

    /// Current position
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Position the spring is pulled toward
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current velocity in value units per second
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Whether motion has decayed and the value sits exactly on the target
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn dampness(&self) -> f32 {
        self.dampness
    }

    /// The physical parameters of this spring
    pub fn config(&self) -> SpringConfig {
        SpringConfig::from_parts_unchecked(self.strength, self.dampness)
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::from_config(SpringConfig::default())
    }
}

fn is_settled(displacement: f32, velocity: f32) -> bool {
    displacement.abs() < REST_DISPLACEMENT && velocity.abs() < REST_VELOCITY
}

/// Check the physical parameters shared by [`Spring`] and [`SpringConfig`]
pub(crate) fn validate(strength: f32, dampness: f32) -> Result<()> {
    if !(strength > 0.0 && strength.is_finite()) {
        return Err(SpringError::InvalidParameter {
            name: "strength",
            value: strength,
        });
    }
    if !(dampness >= 0.0 && dampness.is_finite()) {
        return Err(SpringError::InvalidParameter {
            name: "dampness",
            value: dampness,
        });
    }
    Ok(())
}
