// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A FIFO of host events for one chart.
//!
//! Data refreshes and timer ticks may arrive in any interleaving; they are handled strictly in
//! arrival order, each to completion before the next.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::backend::ChartBackend;
use crate::chart::{ChartError, ProportionChart, TickOutcome};
use crate::panel::PanelData;

/// Something that happened to a chart.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    /// The panel delivered new data.
    DataUpdated(PanelData),
    /// The toggle timer fired.
    Tick,
}

/// The result of handling one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The data update was accepted and drawn.
    DataAccepted,
    /// The tick ran.
    Ticked(TickOutcome),
}

/// Pending events, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ChartEvents {
    queue: VecDeque<ChartEvent>,
}

impl ChartEvents {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues an event.
    pub fn push(&mut self, event: ChartEvent) {
        self.queue.push_back(event);
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Handles every pending event in order.
    ///
    /// A rejected event does not stop the queue; its error is reported in its slot.
    pub fn dispatch<B: ChartBackend>(
        &mut self,
        chart: &mut ProportionChart<B>,
    ) -> Vec<Result<EventOutcome, ChartError>> {
        let mut out = Vec::with_capacity(self.queue.len());
        while let Some(event) = self.queue.pop_front() {
            out.push(match event {
                ChartEvent::DataUpdated(data) => chart
                    .on_panel_update(&data)
                    .map(|()| EventOutcome::DataAccepted),
                ChartEvent::Tick => chart.on_tick().map(EventOutcome::Ticked),
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use hemicycle_core::RetainedMarks;
    use kurbo::Size;

    use super::*;
    use crate::backend::SceneBackend;
    use crate::config::ChartOptions;
    use crate::option::Representation;
    use crate::panel::PanelError;

    #[test]
    fn events_run_in_arrival_order() {
        let backend = SceneBackend::new(RetainedMarks::new(), Size::new(300.0, 300.0));
        let mut chart = ProportionChart::mount(Some(backend), ChartOptions::new()).unwrap();
        let mut events = ChartEvents::new();
        events.push(ChartEvent::Tick);
        events.push(ChartEvent::DataUpdated(PanelData::from_columns(
            [10.0, 20.0, 30.0],
            ["A", "B", "C"],
        )));
        events.push(ChartEvent::DataUpdated(PanelData::from_columns([5.0], ["X", "Y"])));
        events.push(ChartEvent::Tick);
        assert_eq!(events.len(), 4, "queued");

        let outcomes = events.dispatch(&mut chart);
        assert!(events.is_empty(), "drained");
        assert_eq!(
            outcomes,
            vec![
                Ok(EventOutcome::Ticked(TickOutcome::Idle)),
                Ok(EventOutcome::DataAccepted),
                Err(ChartError::Panel(PanelError::LengthMismatch {
                    values: 1,
                    labels: 2,
                })),
                Ok(EventOutcome::Ticked(TickOutcome::Switched(Representation::Dots))),
            ],
            "a tick before data is idle and a bad update does not block the queue"
        );
        assert!(!chart.backend().sink().is_empty(), "dots are on screen");
    }
}
