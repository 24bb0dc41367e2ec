// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fixed-period timer driven by elapsed time.

use core::time::Duration;

/// Counts how many whole periods have passed.
///
/// The host owns the clock: it feeds elapsed time to [`Interval::advance`], which keeps the
/// remainder so no time is lost between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    /// Creates a timer firing every `period`.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// The firing period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time accumulated toward the next firing.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Adds `dt` and returns how many periods completed. A zero period never fires.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        let total = self.elapsed.saturating_add(dt).as_nanos();
        let period = self.period.as_nanos();
        self.elapsed = Duration::from_nanos(u64::try_from(total % period).unwrap_or(u64::MAX));
        u32::try_from(total / period).unwrap_or(u32::MAX)
    }

    /// Drops accumulated time.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
