// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One mounted proportion chart and its pie/dots toggle.
//!
//! The chart starts as an empty pie. Data updates redraw whatever is on screen; every timer
//! tick with data swaps pie for dots or back, replacing the whole option so the backend can
//! morph between the two.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use hemicycle_charts::{Category, LayoutError, angular_slices};
use log::{debug, error, trace, warn};

use crate::backend::{ChartBackend, SetOptionMode};
use crate::config::ChartOptions;
use crate::interval::Interval;
use crate::option::Representation;
use crate::panel::{PanelData, PanelError};

/// Errors surfaced by a chart.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// No container was supplied to mount the chart in.
    #[error("no chart container to mount in")]
    MissingMount,
    /// The panel data has the wrong shape.
    #[error("malformed panel data")]
    Panel(#[from] PanelError),
    /// The dataset cannot be laid out.
    #[error("unusable dataset")]
    Layout(#[from] LayoutError),
}

/// What a timer tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to switch: no data yet, or nothing on screen.
    Idle,
    /// The chart now shows this representation.
    Switched(Representation),
}

/// A proportion chart bound to a backend.
#[derive(Debug)]
pub struct ProportionChart<B> {
    backend: B,
    options: ChartOptions,
    data: Vec<Category>,
    interval: Interval,
}

impl<B: ChartBackend> ProportionChart<B> {
    /// Mounts a chart in `container` and draws an empty pie.
    pub fn mount(container: Option<B>, options: ChartOptions) -> Result<Self, ChartError> {
        let Some(mut backend) = container else {
            error!("cannot mount chart: no container");
            return Err(ChartError::MissingMount);
        };
        backend.set_option(options.pie_option(&[]), SetOptionMode::Replace)?;
        debug!("mounted chart, toggling every {:?}", options.toggle_period);
        Ok(Self {
            backend,
            interval: Interval::new(options.toggle_period),
            options,
            data: Vec::new(),
        })
    }

    /// Accepts a data refresh from the panel.
    ///
    /// Malformed or degenerate data is rejected and leaves the chart untouched. Accepted data
    /// is drawn in the representation currently on screen.
    pub fn on_panel_update(&mut self, data: &PanelData) -> Result<(), ChartError> {
        let categories = data
            .categories()
            .inspect_err(|err| error!("dropping panel update: {err}"))?;
        angular_slices(&categories).inspect_err(|err| warn!("ignoring panel update: {err}"))?;

        let representation = self.backend.representation().unwrap_or_default();
        let option = self.options.option_for(representation, &categories);
        self.backend
            .set_option(option, SetOptionMode::Merge)
            .inspect_err(|err| warn!("cannot draw panel update: {err}"))?;
        debug!("drew {} categories as {representation:?}", categories.len());
        self.data = categories;
        Ok(())
    }

    /// Swaps the representation, if there is data to show.
    pub fn on_tick(&mut self) -> Result<TickOutcome, ChartError> {
        if self.data.is_empty() {
            trace!("tick without data");
            return Ok(TickOutcome::Idle);
        }
        let Some(current) = self.backend.representation() else {
            trace!("tick without a live representation");
            return Ok(TickOutcome::Idle);
        };
        let next = current.other();
        let option = self.options.option_for(next, &self.data);
        self.backend.set_option(option, SetOptionMode::Replace)?;
        debug!("switched from {current:?} to {next:?}");
        Ok(TickOutcome::Switched(next))
    }

    /// Feeds elapsed time to the toggle timer, running one tick per completed period.
    pub fn advance(&mut self, elapsed: Duration) -> Result<Vec<TickOutcome>, ChartError> {
        let ticks = self.interval.advance(elapsed);
        (0..ticks).map(|_| self.on_tick()).collect()
    }

    /// The representation on screen.
    pub fn representation(&self) -> Option<Representation> {
        self.backend.representation()
    }

    /// The last accepted dataset.
    pub fn data(&self) -> &[Category] {
        &self.data
    }

    /// The chart configuration.
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Unmounts the chart, returning its backend.
    pub fn into_backend(self) -> B {
        self.backend
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
    use crate::option::ChartOption;

    /// Keeps the installed options and the modes they were installed with.
    #[derive(Debug, Default)]
    struct FakeBackend {
        calls: Vec<(Representation, SetOptionMode, usize)>,
        live: Option<ChartOption>,
        reject: Option<LayoutError>,
    }

    impl ChartBackend for FakeBackend {
        fn set_option(
            &mut self,
            option: ChartOption,
            mode: SetOptionMode,
        ) -> Result<(), LayoutError> {
            let rep = option.representation().unwrap_or_default();
            let len = option.series.first().map_or(0, |s| s.data().len());
            self.calls.push((rep, mode, len));
            if let Some(err) = self.reject {
                return Err(err);
            }
            self.live = Some(option);
            Ok(())
        }

        fn option(&self) -> Option<&ChartOption> {
            self.live.as_ref()
        }
    }

    /// Accepts every option but never reports one as live.
    #[derive(Debug, Default)]
    struct BlankBackend {
        calls: usize,
    }

    impl ChartBackend for BlankBackend {
        fn set_option(&mut self, _: ChartOption, _: SetOptionMode) -> Result<(), LayoutError> {
            self.calls += 1;
            Ok(())
        }

        fn option(&self) -> Option<&ChartOption> {
            None
        }
    }

    fn mounted() -> ProportionChart<FakeBackend> {
        ProportionChart::mount(Some(FakeBackend::default()), ChartOptions::new()).unwrap()
    }

    fn scenario() -> PanelData {
        PanelData::from_columns([10.0, 20.0, 30.0], ["A", "B", "C"])
    }

    #[test]
    fn mount_without_container_fails() {
        let err = ProportionChart::<FakeBackend>::mount(None, ChartOptions::new()).unwrap_err();
        assert_eq!(err, ChartError::MissingMount, "fatal mount error");
    }

    #[test]
    fn mount_installs_an_empty_pie() {
        let chart = mounted();
        assert_eq!(
            chart.backend().calls,
            vec![(Representation::Pie, SetOptionMode::Replace, 0)],
            "empty pie replaces whatever was there"
        );
        assert_eq!(chart.representation(), Some(Representation::Pie), "pie");
    }

    #[test]
    fn ticks_without_data_are_idle() {
        let mut chart = mounted();
        assert_eq!(chart.on_tick(), Ok(TickOutcome::Idle), "idle");
        assert_eq!(chart.backend().calls.len(), 1, "no backend call");
    }

    #[test]
    fn ticks_with_data_alternate() {
        let mut chart = mounted();
        chart.on_panel_update(&scenario()).unwrap();
        let outcomes: Vec<_> = (0..4).map(|_| chart.on_tick().unwrap()).collect();
        assert_eq!(
            outcomes,
            vec![
                TickOutcome::Switched(Representation::Dots),
                TickOutcome::Switched(Representation::Pie),
                TickOutcome::Switched(Representation::Dots),
                TickOutcome::Switched(Representation::Pie),
            ],
            "pie, dots, pie, ..."
        );
        assert!(
            chart.backend().calls[2..]
                .iter()
                .all(|(_, mode, len)| *mode == SetOptionMode::Replace && *len == 3),
            "switches replace the option and carry the data"
        );
    }

    #[test]
    fn data_updates_redraw_without_switching() {
        let mut chart = mounted();
        chart.on_panel_update(&scenario()).unwrap();
        chart.on_tick().unwrap();
        chart.on_panel_update(&scenario()).unwrap();
        assert_eq!(
            chart.backend().calls.last(),
            Some(&(Representation::Dots, SetOptionMode::Merge, 3)),
            "dots stay dots"
        );
    }

    #[test]
    fn empty_update_is_dropped() {
        let mut chart = mounted();
        chart.on_panel_update(&scenario()).unwrap();
        let empty: PanelData = PanelData::from_columns(Vec::<f64>::new(), Vec::<&str>::new());
        assert_eq!(
            chart.on_panel_update(&empty),
            Err(ChartError::Layout(LayoutError::Empty)),
            "no categories"
        );
        assert_eq!(chart.data().len(), 3, "previous data kept");
        assert_eq!(chart.backend().calls.len(), 2, "no redraw");
    }

    #[test]
    fn malformed_update_is_dropped() {
        let mut chart = mounted();
        let bad = PanelData::from_columns([5.0], ["X", "Y"]);
        assert_eq!(
            chart.on_panel_update(&bad),
            Err(ChartError::Panel(PanelError::LengthMismatch {
                values: 1,
                labels: 2,
            })),
            "length mismatch"
        );
        assert!(chart.data().is_empty(), "nothing accepted");
        assert_eq!(chart.on_tick(), Ok(TickOutcome::Idle), "still idle");
    }

    #[test]
    fn zero_total_update_is_dropped() {
        let mut chart = mounted();
        chart.on_panel_update(&scenario()).unwrap();
        let zero = PanelData::from_columns([0.0, 0.0], ["A", "B"]);
        assert_eq!(
            chart.on_panel_update(&zero),
            Err(ChartError::Layout(LayoutError::ZeroTotal)),
            "no proportions"
        );
        assert_eq!(chart.data().len(), 3, "previous data kept");
        assert_eq!(chart.backend().calls.len(), 2, "no redraw");
    }

    #[test]
    fn backend_rejection_keeps_the_previous_data() {
        let mut chart = mounted();
        chart.on_panel_update(&scenario()).unwrap();
        chart.backend_mut().reject = Some(LayoutError::Empty);
        let other = PanelData::from_columns([1.0], ["Z"]);
        assert_eq!(
            chart.on_panel_update(&other),
            Err(ChartError::Layout(LayoutError::Empty)),
            "backend error is returned"
        );
        assert_eq!(chart.data().len(), 3, "previous data kept");
    }

    #[test]
    fn ticks_follow_a_representation_swapped_behind_the_chart() {
        let mut chart = mounted();
        chart.on_panel_update(&scenario()).unwrap();
        let dots = chart.options().dots_option(chart.data());
        chart
            .backend_mut()
            .set_option(dots, SetOptionMode::Replace)
            .unwrap();
        assert_eq!(
            chart.on_tick(),
            Ok(TickOutcome::Switched(Representation::Pie)),
            "dots were live, so the tick goes back to pie"
        );
        assert_eq!(
            chart.backend().calls.last(),
            Some(&(Representation::Pie, SetOptionMode::Replace, 3)),
            "pie replaces the swapped-in dots"
        );
    }

    #[test]
    fn ticks_without_a_live_representation_are_idle() {
        let backend = BlankBackend::default();
        let mut chart = ProportionChart::mount(Some(backend), ChartOptions::new()).unwrap();
        chart.on_panel_update(&scenario()).unwrap();
        assert_eq!(chart.backend().calls, 2, "mount and update");
        assert_eq!(chart.on_tick(), Ok(TickOutcome::Idle), "nothing to switch");
        assert_eq!(chart.backend().calls, 2, "no backend call");
    }

    #[test]
    fn dropped_update_leaves_the_scene_and_the_toggle_alone() {
        let backend = SceneBackend::new(RetainedMarks::new(), Size::new(500.0, 500.0));
        let mut chart = ProportionChart::mount(Some(backend), ChartOptions::new()).unwrap();
        chart.on_panel_update(&scenario()).unwrap();
        chart.on_tick().unwrap();
        let shown = chart.backend().sink().len();
        assert!(shown > 3, "dots are on screen");

        let zero = PanelData::from_columns([0.0, 0.0], ["A", "B"]);
        assert!(chart.on_panel_update(&zero).is_err(), "zero total rejected");
        assert_eq!(chart.backend().sink().len(), shown, "scene untouched");

        let outcomes: Vec<_> = (0..3).map(|_| chart.on_tick().unwrap()).collect();
        assert_eq!(
            outcomes,
            vec![
                TickOutcome::Switched(Representation::Pie),
                TickOutcome::Switched(Representation::Dots),
                TickOutcome::Switched(Representation::Pie),
            ],
            "toggle keeps running on the old data"
        );
    }

    #[test]
    fn advance_ticks_once_per_period() {
        let mut chart = mounted();
        chart.on_panel_update(&scenario()).unwrap();
        let early = chart.advance(Duration::from_millis(1999)).unwrap();
        assert!(early.is_empty(), "under one period");
        assert_eq!(
            chart.advance(Duration::from_millis(4001)).unwrap(),
            vec![
                TickOutcome::Switched(Representation::Dots),
                TickOutcome::Switched(Representation::Pie),
                TickOutcome::Switched(Representation::Dots),
            ],
            "six seconds hold three periods"
        );
    }
}
