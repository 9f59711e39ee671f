//! Lilt Spring Physics
//!
//! A damped harmonic oscillator for smooth, organic value transitions.
//!
//! # Features
//!
//! - **Immutable springs**: every operation returns the next `Spring` state
//! - **Stable stepping**: fixed 1 ms semi-implicit Euler sub-steps, so frame
//!   hitches cannot blow the simulation up
//! - **Rest detection**: springs snap onto their target once motion decays
//! - **Presets and TOML config**: named parameter sets for common feels
//! - **Scheduler**: ticks many springs from one frame clock
//!
//! # Example
//!
//! ```rust
//! use lilt_spring::Spring;
//!
//! let mut spring = Spring::new(100.0, 2.0)?.set_target(100.0);
//! while !spring.is_at_rest() {
//!     spring = spring.animate(16.0);
//! }
//! assert_eq!(spring.value(), 100.0);
//! # Ok::<(), lilt_spring::SpringError>(())
//! ```

pub mod config;
pub mod error;
pub mod scheduler;
pub mod spring;

pub use config::{SpringConfig, SpringSection};
pub use error::{Result, SpringError};
pub use scheduler::{SpringId, SpringScheduler};
pub use spring::Spring;
