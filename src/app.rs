use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::config::FPS_REPORT_INTERVAL;
use crate::error::Result;
use crate::render::{PixelBuffer, TextRenderer};
use crate::simulation::Grid;
use crate::stats::{MovingAverage, Summary};

/// What a scenario does each frame besides stepping the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Step only; nothing is rendered
    StepOnly,
    /// Render the grid as text, then step
    Text,
    /// Paint the grid into an RGBA buffer, then step
    Pixels,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::StepOnly, Strategy::Text, Strategy::Pixels];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::StepOnly => "step",
            Strategy::Text => "text",
            Strategy::Pixels => "pixels",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| format!("unknown scenario '{}' (expected step, text or pixels)", s))
    }
}

/// How a scenario seeds its grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Seed {
    /// Index divisible by 2 or 7
    Canonical,
    Random { density: f64, seed: u64 },
}

/// Everything needed to build a [`Scenario`]
#[derive(Clone, Debug)]
pub struct ScenarioDescriptor {
    pub name: String,
    pub strategy: Strategy,
    pub width: usize,
    pub height: usize,
    pub seed: Seed,
    pub window: usize,
}

/// Timing of one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub elapsed_ms: f64,
    pub average_ms: f64,
}

/// Aggregates for one scenario after a run
#[derive(Clone, Debug)]
pub struct ScenarioReport {
    pub name: String,
    pub strategy: Strategy,
    pub generation: u64,
    pub population: usize,
    pub timing: Option<Summary>,
}

/// A grid, its frame-time tracker and its render strategy
pub struct Scenario {
    name: String,
    strategy: Strategy,
    grid: Grid,
    tracker: MovingAverage,
    text: TextRenderer,
    pixels: Option<PixelBuffer>,
}

impl Scenario {
    pub fn new(descriptor: &ScenarioDescriptor) -> Result<Self> {
        let grid = match descriptor.seed {
            Seed::Canonical => Grid::new(descriptor.width, descriptor.height)?,
            Seed::Random { density, seed } => {
                Grid::random(descriptor.width, descriptor.height, density, seed)?
            }
        };
        let tracker = MovingAverage::new(descriptor.window)?;
        let pixels = match descriptor.strategy {
            Strategy::Pixels => Some(PixelBuffer::for_grid(&grid)),
            _ => None,
        };

        Ok(Self {
            name: descriptor.name.clone(),
            strategy: descriptor.strategy,
            grid,
            tracker,
            text: TextRenderer::new(),
            pixels,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tracker(&self) -> &MovingAverage {
        &self.tracker
    }

    /// Render (per strategy) and step once, recording the elapsed time
    pub fn frame(&mut self) -> FrameReport {
        let start = Instant::now();

        match self.strategy {
            Strategy::StepOnly => {}
            Strategy::Text => {
                self.text.draw(&self.grid);
            }
            Strategy::Pixels => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(e) = pixels.draw(&self.grid) {
                        log::warn!("{}: {}", self.name, e);
                    }
                }
            }
        }
        self.grid.step();

        let elapsed = start.elapsed();
        let average_ms = self.tracker.add_duration(elapsed);
        FrameReport {
            elapsed_ms: elapsed.as_nanos() as f64 / 1_000_000.0,
            average_ms,
        }
    }

    /// Clear timing data; the grid keeps its state
    pub fn reset_timing(&mut self) {
        self.tracker.reset();
    }

    pub fn report(&self) -> ScenarioReport {
        ScenarioReport {
            name: self.name.clone(),
            strategy: self.strategy,
            generation: self.grid.generation(),
            population: self.grid.population(),
            timing: self.tracker.summary(),
        }
    }
}

/// Ordered set of scenarios with one selected at a time
pub struct Bench {
    scenarios: Vec<Scenario>,
    current: usize,
    fps_counter: FpsCounter,
}

impl Bench {
    pub fn new(descriptors: &[ScenarioDescriptor]) -> Result<Self> {
        let scenarios = descriptors
            .iter()
            .map(Scenario::new)
            .collect::<Result<Vec<_>>>()?;
        log::info!("Prepared {} scenario(s)", scenarios.len());

        Ok(Self {
            scenarios,
            current: 0,
            fps_counter: FpsCounter::new(),
        })
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Scenario> {
        self.scenarios.get(self.current)
    }

    /// Select the next scenario, wrapping after the last one
    pub fn next_scenario(&mut self) -> Option<&Scenario> {
        if self.scenarios.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.scenarios.len();
        self.fps_counter = FpsCounter::new();
        let scenario = &self.scenarios[self.current];
        log::info!("Switched to scenario '{}' ({})", scenario.name, scenario.strategy);
        Some(scenario)
    }

    /// Run one frame of the current scenario
    pub fn frame(&mut self) -> Option<FrameReport> {
        let scenario = self.scenarios.get_mut(self.current)?;
        let report = scenario.frame();

        if let Some(fps) = self.fps_counter.tick() {
            log::info!(
                "{} - {:.0} FPS - {:.3} ms avg",
                scenario.name,
                fps,
                report.average_ms
            );
        }
        Some(report)
    }

    /// Run `frames` frames of the current scenario
    pub fn run_frames(&mut self, frames: usize) -> Option<FrameReport> {
        let mut last = None;
        for _ in 0..frames {
            last = self.frame();
        }
        last
    }

    /// Run every scenario for `frames` frames, in order
    pub fn run_all(&mut self, frames: usize) -> Vec<ScenarioReport> {
        for _ in 0..self.scenarios.len() {
            self.run_frames(frames);
            self.next_scenario();
        }
        self.reports()
    }

    pub fn reports(&self) -> Vec<ScenarioReport> {
        self.scenarios.iter().map(Scenario::report).collect()
    }
}

/// Simple FPS counter
pub struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
    interval: Duration,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::with_interval(FPS_REPORT_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
            interval,
        }
    }

    /// Tick the counter, returns Some(fps) once per interval
    pub fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed >= self.interval {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
