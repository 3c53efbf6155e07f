//! Control Loop Task
//!
//! Runs the encoder: one tick reads at most one command line from the
//! serial console, applies it to the channel store, advances cyclic
//! channels, writes all PPM channels and redraws the display.
//!
//! ## Responsibilities
//!
//! - Startup: PPM encoder, console banner, display bring-up
//! - Reply to every command with an acknowledgement or a diagnostic
//! - Refresh PPM output and display unconditionally every tick
//! - Track execution time and jitter in [`TaskStats`]
//!
//! ## Pacing
//!
//! [`ControlTask::tick`] does one iteration and returns. Callers pace it
//! with [`ControlTask::run`] (blocking [`TimerInterface`]) or
//! `run_control_loop` (Embassy `Ticker`, `embassy` feature).

use pico_ppm_core::{
    channel::ChannelStore,
    command::{self, CommandError},
    scheduler::{TaskMetadata, TaskStats},
    traits::TimeSource,
};

use crate::communication::serial::{LineEvent, SerialConsole};
use crate::config::ControlConfig;
use crate::libraries::{ChannelDisplay, PpmOutput};
use crate::platform::{
    traits::{DisplayInterface, PpmInterface, TimerInterface, UartInterface},
    PlatformError, Result,
};

/// Written to the console once the encoder is running
pub const BANNER: &str =
    "PPM Encoder ready. Use format 'Cx YYYY' to change channel x to value YYYY.";

/// Written to the console when the display cannot be brought up
pub const DISPLAY_INIT_FAILED: &str = "SSD1306 allocation failed";

/// Control task owning the channel store and every peripheral
pub struct ControlTask<U, P, D, T>
where
    U: UartInterface,
    P: PpmInterface,
    D: DisplayInterface,
    T: TimeSource,
{
    config: ControlConfig,
    metadata: TaskMetadata,
    console: SerialConsole<U>,
    ppm: PpmOutput<P>,
    display: ChannelDisplay<D>,
    time: T,
    store: ChannelStore,
    stats: TaskStats,
    last_tick_us: Option<u64>,
}

impl<U, P, D, T> ControlTask<U, P, D, T>
where
    U: UartInterface,
    P: PpmInterface,
    D: DisplayInterface,
    T: TimeSource,
{
    pub fn new(config: ControlConfig, uart: U, ppm: P, display: D, time: T) -> Self {
        Self {
            metadata: TaskMetadata::from_period_ms(
                "control",
                config.loop_period_ms,
                config.tick_budget_us,
            ),
            config,
            console: SerialConsole::new(uart),
            ppm: PpmOutput::new(ppm),
            display: ChannelDisplay::new(display),
            time,
            store: ChannelStore::new(),
            stats: TaskStats::default(),
            last_tick_us: None,
        }
    }

    /// Start the encoder
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InitializationFailed` if the display does not
    /// come up. The caller must not start the loop in that case.
    pub fn begin(&mut self) -> Result<()> {
        self.ppm.begin(self.config.ppm_pin)?;
        self.console.write_line(BANNER)?;

        if let Err(e) = self.display.init() {
            let _ = self.console.write_line(DISPLAY_INIT_FAILED);
            crate::log_error!("Display init failed: {}", e.as_str());
            return Err(PlatformError::InitializationFailed);
        }

        crate::log_info!(
            "Control task started: period {} ms, budget {} us",
            self.config.loop_period_ms,
            self.config.tick_budget_us
        );
        Ok(())
    }

    /// Run one iteration
    ///
    /// Every stage runs even if an earlier one failed; the first error is
    /// returned.
    pub fn tick(&mut self) -> Result<()> {
        let start_us = self.time.now_us();
        let now_ms = self.time.now_ms();
        let mut first_error: Option<PlatformError> = None;

        if let Err(e) = self.handle_input(now_ms) {
            crate::log_warn!("Console error: {}", e.as_str());
            first_error.get_or_insert(e);
        }

        self.store.update(now_ms);
        let pulse_widths = self.store.pulse_widths();

        if let Err(e) = self.ppm.write_all(&pulse_widths) {
            first_error.get_or_insert(e);
        }

        if let Err(e) = self.display.render(&pulse_widths) {
            crate::log_warn!("Display refresh failed: {}", e.as_str());
            first_error.get_or_insert(e);
        }

        self.record_stats(start_us);

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Run one iteration, then block for the rest of the period
    pub fn tick_paced<M: TimerInterface>(&mut self, timer: &mut M) -> Result<()> {
        let start_us = self.time.now_us();
        let result = self.tick();

        if !self.metadata.is_free_running() {
            let elapsed = clamp_u32(self.time.elapsed_since(start_us));
            let remaining = self.metadata.remaining_us(elapsed);
            if remaining > 0 {
                timer.delay_us(remaining)?;
            }
        }

        result
    }

    /// Run the loop forever on a blocking timer
    pub fn run<M: TimerInterface>(&mut self, timer: &mut M) -> ! {
        loop {
            if let Err(e) = self.tick_paced(timer) {
                crate::log_warn!("Control tick error: {}", e.as_str());
            }
        }
    }

    /// Run the loop forever on the Embassy time driver
    #[cfg(feature = "embassy")]
    pub async fn run_control_loop(&mut self) {
        use embassy_time::{Duration, Ticker, Timer};

        if self.metadata.is_free_running() {
            loop {
                if let Err(e) = self.tick() {
                    crate::log_warn!("Control tick error: {}", e.as_str());
                }
                Timer::after(Duration::from_ticks(0)).await;
            }
        }

        let mut ticker = Ticker::every(Duration::from_micros(u64::from(self.metadata.period_us)));
        loop {
            if let Err(e) = self.tick() {
                crate::log_warn!("Control tick error: {}", e.as_str());
            }
            ticker.next().await;
        }
    }

    /// Consume at most one line and answer it
    fn handle_input(&mut self, now_ms: u64) -> Result<()> {
        let outcome = match self.console.poll_line()? {
            None => return Ok(()),
            Some(LineEvent::Overflow) => Err(CommandError::InvalidFormat),
            Some(LineEvent::Line(line)) => command::interpret(&mut self.store, &line, now_ms),
        };

        match outcome {
            Ok(applied) => {
                crate::log_debug!("Command applied at {} ms", now_ms);
                self.console.write_line(applied)
            }
            Err(e) => {
                crate::log_warn!("Command rejected: {}", e.reason());
                self.console.write_line(e)
            }
        }
    }

    fn record_stats(&mut self, start_us: u64) {
        let execution_us = clamp_u32(self.time.elapsed_since(start_us));
        let period_us = match self.last_tick_us {
            Some(last) => clamp_u32(start_us.saturating_sub(last)),
            None => self.metadata.period_us,
        };
        self.last_tick_us = Some(start_us);

        let missed = self.stats.update(
            execution_us,
            period_us,
            self.metadata.period_us,
            self.metadata.budget_us,
        );
        if missed {
            crate::log_warn!(
                "Control tick over budget: {} us > {} us",
                execution_us,
                self.metadata.budget_us
            );
        }
    }

    /// Channel state
    pub fn store(&self) -> &ChannelStore {
        &self.store
    }

    pub fn stats(&self) -> &TaskStats {
        &self.stats
    }

    pub fn metadata(&self) -> &TaskMetadata {
        &self.metadata
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn time(&self) -> &T {
        &self.time
    }

    pub fn uart(&self) -> &U {
        self.console.uart()
    }

    pub fn uart_mut(&mut self) -> &mut U {
        self.console.uart_mut()
    }

    pub fn ppm(&self) -> &P {
        self.ppm.inner()
    }

    pub fn display(&self) -> &D {
        self.display.inner()
    }
}

fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
