//! Fixed-cadence spring simulation and report rendering

use anyhow::Result;
use lilt_spring::{Spring, SpringConfig};
use serde::Serialize;
use std::io::Write;

use crate::config::SimulationConfig;

/// One animation frame of a simulated spring
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub frame: usize,
    pub elapsed_ms: f32,
    pub value: f32,
    pub velocity: f32,
    pub at_rest: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub settled: bool,
    /// Simulated time until rest, if the spring settled
    pub settle_ms: Option<f32>,
    /// Furthest distance travelled past the target
    pub overshoot: f32,
}

#[derive(Debug, Serialize)]
pub struct Simulation {
    pub strength: f32,
    pub dampness: f32,
    pub from: f32,
    pub to: f32,
    pub frames: Vec<Frame>,
    pub summary: Summary,
}

/// Drive a spring from `from` to `to` with fixed frame deltas until it rests
/// or `max_ms` of simulated time has passed
pub fn run(
    config: SpringConfig,
    from: f32,
    to: f32,
    cadence: SimulationConfig,
) -> Result<Simulation> {
    if !(cadence.frame_ms > 0.0 && cadence.frame_ms.is_finite()) {
        anyhow::bail!("frame_ms must be positive, got {}", cadence.frame_ms);
    }
    if !(cadence.max_ms >= 0.0 && cadence.max_ms.is_finite()) {
        anyhow::bail!("max_ms must be non-negative, got {}", cadence.max_ms);
    }

    let mut spring = Spring::from_config(config).jump_to(from).set_target(to);
    let direction = (to - from).signum();
    let mut frames = Vec::new();
    let mut elapsed_ms = 0.0;
    let mut overshoot: f32 = 0.0;

    while !spring.is_at_rest() && elapsed_ms < cadence.max_ms {
        spring = spring.animate(cadence.frame_ms);
        elapsed_ms += cadence.frame_ms;
        overshoot = overshoot.max((spring.value() - to) * direction);

        frames.push(Frame {
            frame: frames.len() + 1,
            elapsed_ms,
            value: spring.value(),
            velocity: spring.velocity(),
            at_rest: spring.is_at_rest(),
        });
    }

    let settled = spring.is_at_rest();
    tracing::debug!(settled, frames = frames.len(), elapsed_ms, "simulation finished");

    Ok(Simulation {
        strength: config.strength(),
        dampness: config.dampness(),
        from,
        to,
        summary: Summary {
            settled,
            settle_ms: settled.then_some(elapsed_ms),
            overshoot,
        },
        frames,
    })
}

impl Simulation {
    pub fn write_table(&self, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "spring strength={} dampness={} from={} to={}",
            self.strength, self.dampness, self.from, self.to
        )?;
        writeln!(
            out,
            "{:>6}  {:>10}  {:>12}  {:>12}  {:>7}",
            "frame", "elapsed_ms", "value", "velocity", "at_rest"
        )?;
        for f in &self.frames {
            writeln!(
                out,
                "{:>6}  {:>10.1}  {:>12.4}  {:>12.4}  {:>7}",
                f.frame, f.elapsed_ms, f.value, f.velocity, f.at_rest
            )?;
        }

        match self.summary.settle_ms {
            Some(ms) => writeln!(out, "settled after {ms:.1} ms")?,
            None => writeln!(out, "still moving after {} frames", self.frames.len())?,
        }
        writeln!(out, "peak overshoot {:.4}", self.summary.overshoot)?;
        Ok(())
    }

    pub fn write_json(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Print the preset catalog
pub fn write_presets(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<10}  {:>9}  {:>9}  {:>10}", "preset", "strength", "dampness", "overshoot")?;
    for name in SpringConfig::PRESETS {
        let Some(config) = SpringConfig::preset(name) else {
            continue;
        };
        writeln!(
            out,
            "{:<10}  {:>9.1}  {:>9.2}  {:>10}",
            name,
            config.strength(),
            config.dampness(),
            if config.is_overdamped() { "no" } else { "yes" }
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cadence(frame_ms: f32, max_ms: f32) -> SimulationConfig {
        SimulationConfig { frame_ms, max_ms }
    }

    #[test]
    fn test_settles_and_reports() {
        let config = SpringConfig::new(100.0, 2.0).unwrap();
        let sim = run(config, 0.0, 100.0, cadence(16.0, 5000.0)).unwrap();

        assert!(sim.summary.settled);
        let last = sim.frames.last().unwrap();
        assert!(last.at_rest);
        assert_eq!(last.value, 100.0);
        assert_eq!(sim.summary.settle_ms, Some(last.elapsed_ms));
        assert_eq!(sim.summary.overshoot, 0.0);
    }

    #[test]
    fn test_overshoot_measured_in_direction_of_travel() {
        let sim = run(SpringConfig::wobbly(), 100.0, 0.0, cadence(16.0, 10_000.0)).unwrap();
        assert!(sim.summary.settled);
        assert!(sim.summary.overshoot > 10.0);
    }

    #[test]
    fn test_gives_up_after_max_ms() {
        let config = SpringConfig::new(100.0, 0.0).unwrap();
        let sim = run(config, 0.0, 100.0, cadence(16.0, 160.0)).unwrap();
        assert!(!sim.summary.settled);
        assert_eq!(sim.summary.settle_ms, None);
        assert_eq!(sim.frames.len(), 10);
    }

    #[test]
    fn test_already_resting_produces_no_frames() {
        let sim = run(SpringConfig::default(), 5.0, 5.0, cadence(16.0, 1000.0)).unwrap();
        assert!(sim.frames.is_empty());
        assert!(sim.summary.settled);
        assert_eq!(sim.summary.settle_ms, Some(0.0));
    }

    #[test]
    fn test_rejects_bad_cadence() {
        let config = SpringConfig::default();
        assert!(run(config, 0.0, 1.0, cadence(0.0, 100.0)).is_err());
        assert!(run(config, 0.0, 1.0, cadence(16.0, f32::INFINITY)).is_err());
    }

    #[test]
    fn test_table_output() {
        let sim = run(SpringConfig::stiff(), 0.0, 50.0, cadence(16.0, 2000.0)).unwrap();
        let mut out = Vec::new();
        sim.write_table(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("spring strength=700 dampness=1"));
        assert!(text.contains("settled after"));
    }

    #[test]
    fn test_json_output() {
        let sim = run(SpringConfig::snappy(), 0.0, 50.0, cadence(16.0, 2000.0)).unwrap();
        let mut out = Vec::new();
        sim.write_json(&mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["to"], 50.0);
        assert_eq!(json["summary"]["settled"], true);
        assert!(json["frames"].as_array().unwrap().len() > 1);
    }

    #[test]
    fn test_preset_table_lists_every_preset() {
        let mut out = Vec::new();
        write_presets(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for name in SpringConfig::PRESETS {
            assert!(text.contains(name));
        }
    }
}
