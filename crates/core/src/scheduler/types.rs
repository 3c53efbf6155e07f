//! Core types for control loop timing
//!
//! - Task metadata (configured cadence and execution budget)
//! - Task statistics (runtime monitoring)

/// Control task timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskMetadata {
    /// Human-readable task name for logging
    pub name: &'static str,

    /// Target period in microseconds
    ///
    /// Zero means free-running: the next tick starts as soon as the
    /// previous one returns.
    pub period_us: u32,

    /// Execution time budget in microseconds
    ///
    /// A tick taking longer than this counts as a deadline miss.
    pub budget_us: u32,
}

impl TaskMetadata {
    /// Metadata for a task with a period given in milliseconds
    pub const fn from_period_ms(name: &'static str, period_ms: u32, budget_us: u32) -> Self {
        Self {
            name,
            period_us: period_ms.saturating_mul(1000),
            budget_us,
        }
    }

    /// Check if the task runs without pacing
    #[inline]
    pub const fn is_free_running(&self) -> bool {
        self.period_us == 0
    }

    /// Nominal rate in Hz, 0 when free-running
    #[inline]
    pub const fn rate_hz(&self) -> u32 {
        if self.period_us == 0 {
            0
        } else {
            1_000_000 / self.period_us
        }
    }

    /// Check if execution time is within budget
    #[inline]
    pub const fn is_within_budget(&self, execution_us: u32) -> bool {
        execution_us <= self.budget_us
    }

    /// Time left in the current period after `execution_us` of work
    #[inline]
    pub const fn remaining_us(&self, execution_us: u32) -> u32 {
        self.period_us.saturating_sub(execution_us)
    }
}

/// Runtime statistics for the control task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Last execution time in microseconds
    pub last_execution_us: u32,

    /// Average execution time in microseconds (EMA, alpha = 0.1)
    pub avg_execution_us: u32,

    /// Maximum execution time observed in microseconds
    pub max_execution_us: u32,

    /// Number of deadline misses (execution time > budget)
    pub deadline_misses: u32,

    /// Last measured period in microseconds (time between tick starts)
    pub last_period_us: u32,

    /// Average deviation from the target period in microseconds (EMA)
    pub avg_jitter_us: u32,

    /// Total number of ticks
    pub execution_count: u64,
}

impl TaskStats {
    /// Record one tick
    ///
    /// # Arguments
    ///
    /// * `execution_us` - Duration of the tick in microseconds
    /// * `period_us` - Time since the previous tick started
    /// * `target_period_us` - Configured period
    /// * `budget_us` - Maximum allowed execution time
    ///
    /// Returns `true` if the tick missed its budget.
    pub fn update(
        &mut self,
        execution_us: u32,
        period_us: u32,
        target_period_us: u32,
        budget_us: u32,
    ) -> bool {
        self.last_execution_us = execution_us;
        self.last_period_us = period_us;
        self.execution_count = self.execution_count.saturating_add(1);

        // Fixed-point EMA: avg_new = (value + 9 * avg_old) / 10
        self.avg_execution_us = ema(self.avg_execution_us, execution_us);
        self.max_execution_us = self.max_execution_us.max(execution_us);

        let missed = execution_us > budget_us;
        if missed {
            self.deadline_misses = self.deadline_misses.saturating_add(1);
        }

        // Free-running loops have no target to deviate from
        if target_period_us > 0 {
            let jitter = period_us.abs_diff(target_period_us);
            self.avg_jitter_us = ema(self.avg_jitter_us, jitter);
        }

        missed
    }

    /// Reset all statistics to initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn ema(avg: u32, value: u32) -> u32 {
    if avg == 0 {
        value
    } else {
        ((u64::from(value) + 9 * u64::from(avg)) / 10) as u32
    }
}
