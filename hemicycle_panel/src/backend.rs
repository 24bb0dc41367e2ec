// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering backend seam.
//!
//! A chart never holds marks itself. It hands [`ChartOption`]s to a [`ChartBackend`] and reads
//! the live representation back from it.

extern crate alloc;

use alloc::vec::Vec;

use hemicycle_charts::{HeuristicTextMeasurer, LayoutError, TextMeasurer};
use hemicycle_core::{DrawSink, Frame, Scene};
use kurbo::Size;

use crate::option::{ChartOption, Representation};

/// How a new option combines with the live one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SetOptionMode {
    /// Match series by id and update them in place.
    #[default]
    Merge,
    /// Drop everything and start from the new option.
    Replace,
}

/// Something that can display a [`ChartOption`].
pub trait ChartBackend {
    /// Installs `option`.
    ///
    /// On error nothing changes.
    fn set_option(&mut self, option: ChartOption, mode: SetOptionMode) -> Result<(), LayoutError>;

    /// The live option, if one was installed.
    fn option(&self) -> Option<&ChartOption>;

    /// The live representation.
    fn representation(&self) -> Option<Representation> {
        self.option().and_then(ChartOption::representation)
    }
}

impl<B: ChartBackend + ?Sized> ChartBackend for &mut B {
    fn set_option(&mut self, option: ChartOption, mode: SetOptionMode) -> Result<(), LayoutError> {
        (**self).set_option(option, mode)
    }

    fn option(&self) -> Option<&ChartOption> {
        (**self).option()
    }
}

/// A backend that diffs lowered marks through a [`Scene`] and presents them to a [`DrawSink`].
#[derive(Debug)]
pub struct SceneBackend<S, M = HeuristicTextMeasurer> {
    sink: S,
    measurer: M,
    view: Size,
    scene: Scene,
    option: Option<ChartOption>,
}

impl<S: DrawSink> SceneBackend<S> {
    /// Creates a backend drawing into `sink` with a `view`-sized viewport.
    pub fn new(sink: S, view: Size) -> Self {
        Self::with_measurer(sink, view, HeuristicTextMeasurer)
    }
}

impl<S: DrawSink, M: TextMeasurer> SceneBackend<S, M> {
    /// Creates a backend with a custom text measurer for legend layout.
    pub fn with_measurer(sink: S, view: Size, measurer: M) -> Self {
        Self {
            sink,
            measurer,
            view,
            scene: Scene::new(),
            option: None,
        }
    }

    /// The viewport size.
    pub fn view(&self) -> Size {
        self.view
    }

    /// The retained scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the backend, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Changes the viewport and redraws the live option for it.
    pub fn resize(&mut self, view: Size) -> Result<(), LayoutError> {
        self.view = view;
        let Some(option) = self.option.take() else {
            return Ok(());
        };
        let marks = match option.marks(self.view, &self.measurer) {
            Ok(marks) => marks,
            Err(err) => {
                self.option = Some(option);
                return Err(err);
            }
        };
        let diffs = self.scene.tick(marks);
        self.sink.present(&Frame {
            background: option.background,
            diffs: &diffs,
            transition: None,
        });
        self.option = Some(option);
        Ok(())
    }
}

impl<S: DrawSink, M: TextMeasurer> ChartBackend for SceneBackend<S, M> {
    fn set_option(&mut self, option: ChartOption, mode: SetOptionMode) -> Result<(), LayoutError> {
        let previous = self.representation();
        let option = match (mode, &self.option) {
            (SetOptionMode::Merge, Some(live)) => {
                let mut merged = live.clone();
                merged.merge(option);
                merged
            }
            _ => option,
        };
        let marks = option.marks(self.view, &self.measurer)?;

        let mut diffs = Vec::new();
        if mode == SetOptionMode::Replace {
            diffs.extend(self.scene.clear());
        }
        diffs.extend(self.scene.tick(marks));

        let current = option.representation();
        let transition = if previous.is_some() && previous != current {
            option.transition()
        } else {
            None
        };
        self.sink.present(&Frame {
            background: option.background,
            diffs: &diffs,
            transition,
        });
        self.option = Some(option);
        Ok(())
    }

    fn option(&self) -> Option<&ChartOption> {
        self.option.as_ref()
    }
}
