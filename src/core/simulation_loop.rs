use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::core::{Clock, FixedStepAccumulator, FrameStats, Interpolation, SimulationConfig, SystemClock};
use crate::error::PhysicsError;
use crate::Result;

/// The game a simulation loop drives
pub trait Simulation {
    /// Length of one physics tick; must be positive
    fn physics_tick_interval_millis(&self) -> u64;

    /// Advances the world by exactly one tick
    fn physics_tick(&mut self) -> Result<()>;

    /// Draws the world `interpolation` of the way toward the next tick
    fn render(&mut self, interpolation: Interpolation);

    /// Throws away the current round and starts over; called after a failed tick
    fn restart(&mut self);
}

/// What happened during one frame of the loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Physics ticks completed
    pub ticks: u64,

    /// Ticks skipped because the frame hit `max_ticks_per_frame`
    pub dropped_ticks: u64,

    /// True if a tick failed and the host was restarted
    pub restarted: bool,

    /// The interpolation handed to `render`
    pub interpolation: Interpolation,
}

/// Everything the loop thread owns while it runs
struct LoopRunner<S, C> {
    host: S,
    clock: C,
    config: SimulationConfig,
    accumulator: FixedStepAccumulator,
    stats: FrameStats,
    previous: u64,
}

struct RunningLoop<S, C> {
    cancel: Arc<AtomicBool>,
    handle: JoinHandle<LoopRunner<S, C>>,
}

/// Fixed-timestep game loop.
///
/// Physics advances in whole ticks of the host's tick interval however long
/// each frame takes; rendering happens once per frame with the leftover lag
/// as an interpolation fraction. While started, the loop runs on its own
/// thread, which owns the host exclusively until `stop` hands it back.
pub struct SimulationLoop<S, C = SystemClock> {
    runner: Option<LoopRunner<S, C>>,
    running: Option<RunningLoop<S, C>>,
    tick_millis: u64,
}

impl<S: Simulation + Send + 'static> SimulationLoop<S, SystemClock> {
    /// Creates a stopped loop timed by the system clock
    pub fn new(host: S, config: SimulationConfig) -> Result<Self> {
        Self::with_clock(host, config, SystemClock::new())
    }
}

impl<S, C> SimulationLoop<S, C>
where
    S: Simulation + Send + 'static,
    C: Clock + Send + 'static,
{
    /// Creates a stopped loop timed by `clock`
    pub fn with_clock(host: S, config: SimulationConfig, clock: C) -> Result<Self> {
        config.validate()?;
        let tick_millis = host.physics_tick_interval_millis();
        let accumulator = FixedStepAccumulator::new(tick_millis)?;
        let previous = clock.now_millis();

        Ok(Self {
            runner: Some(LoopRunner {
                host,
                clock,
                config,
                accumulator,
                stats: FrameStats::default(),
                previous,
            }),
            running: None,
            tick_millis,
        })
    }

    /// Returns the length of one physics tick
    pub fn physics_tick_interval_millis(&self) -> u64 {
        self.tick_millis
    }

    /// Returns true while the loop thread is running
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Returns the host while the loop is stopped
    pub fn host(&self) -> Option<&S> {
        self.runner.as_ref().map(|runner| &runner.host)
    }

    /// Returns the host mutably while the loop is stopped
    pub fn host_mut(&mut self) -> Option<&mut S> {
        self.runner.as_mut().map(|runner| &mut runner.host)
    }

    /// Returns the frame timing gathered so far, while the loop is stopped
    pub fn stats(&self) -> Option<FrameStats> {
        self.runner.as_ref().map(|runner| runner.stats)
    }

    /// Runs one frame on the calling thread without sleeping
    pub fn run_frame(&mut self) -> Result<FrameReport> {
        let runner = self
            .runner
            .as_mut()
            .ok_or_else(|| PhysicsError::LoopError("simulation loop is running".to_string()))?;
        let now = runner.clock.now_millis();
        Ok(runner.frame(now))
    }

    /// Starts the loop on a dedicated thread
    pub fn start(&mut self) -> Result<()> {
        let mut runner = self
            .runner
            .take()
            .ok_or_else(|| PhysicsError::LoopError("simulation loop is already running".to_string()))?;

        let cancel = Arc::new(AtomicBool::new(false));
        let thread_cancel = Arc::clone(&cancel);
        let handle = thread::Builder::new()
            .name("simulation-loop".to_string())
            .spawn(move || {
                runner.run(&thread_cancel);
                runner
            })
            .map_err(|err| PhysicsError::LoopError(format!("failed to spawn loop thread: {}", err)))?;

        self.running = Some(RunningLoop { cancel, handle });
        Ok(())
    }

    /// Signals the loop to stop and blocks until its thread has exited.
    ///
    /// The world is left as of the last completed tick.
    pub fn stop(&mut self) -> Result<()> {
        let running = self
            .running
            .take()
            .ok_or_else(|| PhysicsError::LoopError("simulation loop is not running".to_string()))?;

        running.cancel.store(true, Ordering::Release);
        running.handle.thread().unpark();
        let runner = running
            .handle
            .join()
            .map_err(|_| PhysicsError::LoopError("simulation loop thread panicked".to_string()))?;
        self.runner = Some(runner);
        Ok(())
    }

    /// Stops the loop if needed and returns the host
    pub fn into_host(mut self) -> Result<S> {
        if self.is_running() {
            self.stop()?;
        }
        self.runner
            .take()
            .map(|runner| runner.host)
            .ok_or_else(|| PhysicsError::LoopError("simulation loop has no host".to_string()))
    }
}

impl<S, C> Drop for SimulationLoop<S, C> {
    fn drop(&mut self) {
        if let Some(running) = self.running.take() {
            running.cancel.store(true, Ordering::Release);
            running.handle.thread().unpark();
            let _ = running.handle.join();
        }
    }
}

impl<S: Simulation, C: Clock> LoopRunner<S, C> {
    /// Loops until `cancel` is set. Cancellation is checked once per frame, so
    /// a tick in progress always completes.
    fn run(&mut self, cancel: &AtomicBool) {
        debug!("simulation loop started, tick {} ms", self.accumulator.tick_millis());
        self.previous = self.clock.now_millis();

        while !cancel.load(Ordering::Acquire) {
            let now = self.clock.now_millis();
            self.frame(now);

            let spent = self.clock.now_millis().saturating_sub(now);
            let remaining = self.config.min_frame_millis.saturating_sub(spent);
            if remaining > 0 {
                // `stop` unparks the thread, so the sleep ends early on cancellation
                thread::park_timeout(Duration::from_millis(remaining));
            }
        }

        debug!("simulation loop stopped after {} frames", self.stats.frames());
    }

    fn frame(&mut self, now: u64) -> FrameReport {
        let elapsed = now.saturating_sub(self.previous);
        self.previous = now;
        self.accumulator.add_elapsed(elapsed);

        let mut ticks = 0;
        let mut dropped_ticks = 0;
        let mut restarted = false;
        while self.accumulator.tick_due() {
            if self
                .config
                .max_ticks_per_frame
                .is_some_and(|max| ticks >= u64::from(max))
            {
                dropped_ticks = self.accumulator.discard_backlog();
                warn!("simulation fell behind, dropped {} ticks", dropped_ticks);
                break;
            }

            if let Err(err) = self.host.physics_tick() {
                warn!("physics tick failed, restarting round: {}", err);
                self.host.restart();
                self.accumulator.reset();
                restarted = true;
                break;
            }
            self.accumulator.consume_tick();
            ticks += 1;
        }

        let interpolation = self.accumulator.interpolation();
        self.host.render(interpolation);

        self.stats.record(elapsed);
        if self.config.debug && self.stats.frames() % 100 == 0 {
            debug!("average frame time {:.2} ms", self.stats.average_frame_millis());
        }

        FrameReport {
            ticks,
            dropped_ticks,
            restarted,
            interpolation,
        }
    }
}
