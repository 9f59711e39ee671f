//! Spring scheduler
//!
//! Drives many springs from one frame clock. Each tick replaces every moving
//! spring with its next state; resting springs are skipped until a
//! `set_target` or `jump_to` puts them back in motion.

use crate::spring::Spring;
use slotmap::{new_key_type, SlotMap};
use std::time::Instant;

new_key_type! {
    /// Handle to a spring owned by a [`SpringScheduler`]
    pub struct SpringId;
}

/// Ticks a set of springs with the elapsed time between frames
pub struct SpringScheduler {
    springs: SlotMap<SpringId, Spring>,
    last_frame: Option<Instant>,
}

impl SpringScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
            last_frame: None,
        }
    }

    pub fn insert(&mut self, spring: Spring) -> SpringId {
        self.springs.insert(spring)
    }

    pub fn get(&self, id: SpringId) -> Option<Spring> {
        self.springs.get(id).copied()
    }

    pub fn remove(&mut self, id: SpringId) -> Option<Spring> {
        self.springs.remove(id)
    }

    /// Retarget a spring. Returns `false` if the id is unknown.
    pub fn set_target(&mut self, id: SpringId, target: f32) -> bool {
        self.update(id, |spring| spring.set_target(target))
    }

    /// Teleport a spring. Returns `false` if the id is unknown.
    pub fn jump_to(&mut self, id: SpringId, value: f32) -> bool {
        self.update(id, |spring| spring.jump_to(value))
    }

    fn update(&mut self, id: SpringId, f: impl FnOnce(Spring) -> Spring) -> bool {
        match self.springs.get_mut(id) {
            Some(spring) => {
                *spring = f(*spring);
                true
            }
            None => false,
        }
    }

    /// Advance every moving spring by `delta_ms` milliseconds.
    ///
    /// Returns the number of springs that settled during this tick.
    pub fn tick(&mut self, delta_ms: f32) -> usize {
        let mut settled = 0;

        for (_, spring) in self.springs.iter_mut() {
            if spring.is_at_rest() {
                continue;
            }
            *spring = spring.animate(delta_ms);
            if spring.is_at_rest() {
                settled += 1;
            }
        }

        if settled > 0 {
            tracing::debug!(
                settled,
                active = self.active_count(),
                "springs settled this frame"
            );
        }

        settled
    }

    /// Tick with the wall-clock time since the previous `tick_clock` call.
    ///
    /// The first call only starts the clock.
    pub fn tick_clock(&mut self) -> usize {
        let now = Instant::now();
        let elapsed = self.last_frame.replace(now).map(|last| now - last);

        match elapsed {
            Some(dt) => self.tick(dt.as_secs_f32() * 1000.0),
            None => 0,
        }
    }

    /// Check if any spring is still moving
    pub fn has_active_animations(&self) -> bool {
        self.springs.values().any(|s| !s.is_at_rest())
    }

    pub fn active_count(&self) -> usize {
        self.springs.values().filter(|s| !s.is_at_rest()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpringId, &Spring)> {
        self.springs.iter()
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }
}

impl Default for SpringScheduler {
    fn default() -> Self {
        Self::new()
    }
}
