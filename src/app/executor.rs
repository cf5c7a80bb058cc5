//! [`Executor`] — the periodic driver.
//!
//! One tick is strictly sequential:
//!
//! ```text
//!  read_all_sensors ─▶ process.run(snapshot) ─▶ data.run ─▶ delay
//! ```
//!
//! Every predicate the process evaluates sees the snapshot taken at the
//! start of the tick.  The data process and the delay run even when the
//! tick fails, so periodic work keeps its cadence and a persistent sensor
//! fault cannot turn the loop into a busy spin.

use embedded_hal::delay::DelayNs;
use log::{debug, error, info};

use crate::config::{BAUD_RATE, LOOP_DELAY_MS, SystemConfig};
use crate::error::{ConfigError, Result};
use crate::fsm::TickReport;

use super::events::AppEvent;
use super::ports::{DataProcessPort, EventSink, ProcessPort, SensorPort};

pub struct Executor<R, P, D, T> {
    reader: R,
    process: P,
    data: D,
    delay: T,
    loop_delay_ms: u32,
    baud_rate: u32,
    ticks: u64,
}

impl<R, P, D, T> Executor<R, P, D, T>
where
    R: SensorPort,
    P: ProcessPort,
    D: DataProcessPort,
    T: DelayNs,
{
    pub fn builder() -> ExecutorBuilder<R, P, D, T> {
        ExecutorBuilder::default()
    }

    /// One-time preparation: sensors unpowered, console announced.
    /// Leaves the system state untouched.
    pub fn setup(&mut self, sink: &mut dyn EventSink) {
        info!("Executor: console at {} baud, tick every {} ms", self.baud_rate, self.loop_delay_ms);
        self.reader.setup();
        sink.emit(&AppEvent::Started(self.process.phase()));
    }

    /// Run one tick, then wait the configured loop delay.
    pub fn tick(&mut self, sink: &mut dyn EventSink) -> Result<TickReport> {
        self.ticks = self.ticks.wrapping_add(1);
        let outcome = self.step(sink);
        self.delay.delay_ms(self.loop_delay_ms);
        outcome
    }

    /// Drive `n` ticks.  Failed ticks are logged and skipped like the
    /// firmware loop does; the number of failures is returned.
    pub fn run_for(&mut self, n: u64, sink: &mut dyn EventSink) -> u64 {
        let mut failures = 0;
        for _ in 0..n {
            if let Err(e) = self.tick(sink) {
                error!("Executor: tick {} failed: {}", self.ticks, e);
                failures += 1;
            }
        }
        failures
    }

    fn step(&mut self, sink: &mut dyn EventSink) -> Result<TickReport> {
        debug!("Executor: tick {}", self.ticks);
        self.reader.read_all_sensors();
        let readings = self.reader.get_all_sensor_readings();

        let outcome = self.process.run(readings);
        match &outcome {
            Ok(report) => {
                sink.emit(&AppEvent::Action(*report));
                if report.phase_changed() {
                    sink.emit(&AppEvent::PhaseChanged {
                        from: report.phase_before,
                        to: report.phase_after,
                    });
                }
            }
            Err(e) => sink.emit(&AppEvent::TickFailed(*e)),
        }

        self.data.run(self.ticks, readings, outcome.as_ref().map_err(|e| *e), sink);
        outcome
    }

    /// Ticks started so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn process(&self) -> &P {
        &self.process
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn delay(&self) -> &T {
        &self.delay
    }
}

// ───────────────────────────────────────────────────────────────
// Builder
// ───────────────────────────────────────────────────────────────

/// Assembles an [`Executor`]; `build()` rejects any missing collaborator.
pub struct ExecutorBuilder<R, P, D, T> {
    reader: Option<R>,
    process: Option<P>,
    data: Option<D>,
    delay: Option<T>,
    loop_delay_ms: u32,
    baud_rate: u32,
}

impl<R, P, D, T> Default for ExecutorBuilder<R, P, D, T> {
    fn default() -> Self {
        Self {
            reader: None,
            process: None,
            data: None,
            delay: None,
            loop_delay_ms: LOOP_DELAY_MS,
            baud_rate: BAUD_RATE,
        }
    }
}

impl<R, P, D, T> ExecutorBuilder<R, P, D, T>
where
    R: SensorPort,
    P: ProcessPort,
    D: DataProcessPort,
    T: DelayNs,
{
    pub fn reader(mut self, reader: R) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn process(mut self, process: P) -> Self {
        self.process = Some(process);
        self
    }

    pub fn data_process(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }

    pub fn delay(mut self, delay: T) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Take the loop delay and console baud rate from `config`.
    pub fn config(mut self, config: &SystemConfig) -> Self {
        self.loop_delay_ms = config.loop_delay_ms;
        self.baud_rate = config.baud_rate;
        self
    }

    pub fn build(self) -> Result<Executor<R, P, D, T>> {
        Ok(Executor {
            reader: self.reader.ok_or(ConfigError::MissingCollaborator("sensor reader"))?,
            process: self.process.ok_or(ConfigError::MissingCollaborator("process"))?,
            data: self.data.ok_or(ConfigError::MissingCollaborator("data process"))?,
            delay: self.delay.ok_or(ConfigError::MissingCollaborator("delay"))?,
            loop_delay_ms: self.loop_delay_ms,
            baud_rate: self.baud_rate,
            ticks: 0,
        })
    }
}
