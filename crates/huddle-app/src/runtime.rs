//! Generic runtime for the presentation loop.
//!
//! The Runtime owns the [`Controller`], the [`CommandDispatcher`] and the
//! [`MainView`], and pulls inputs from a [`Driver`]:
//!
//! - `Message`: dispatched and applied immediately, in arrival order
//! - `Local`: broadcast to subscribers without touching the model
//! - `Tick`: the view re-reads the model if dirty, then the driver renders
//!
//! Messages never wait for a tick, and ticks never observe a half-applied
//! command because dispatch runs to completion before the next input is
//! pulled.

use std::{cell::RefCell, rc::Rc, time::Duration};

use huddle_client::{CommandDispatcher, Controller, DispatchOutcome, Event};
use huddle_core::Game;

use crate::{Driver, Input, MainView};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Scene started when the loop begins.
    pub main_scene: String,
    /// Interval between render ticks.
    pub tick_interval: Duration,
}

impl RuntimeConfig {
    /// Scene name used by default.
    pub const MAIN_SCENE: &'static str = "MainScene";

    /// Config ticking at `fps` frames per second.
    pub fn with_fps(fps: u32) -> Self {
        Self { tick_interval: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))), ..Self::default() }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { main_scene: Self::MAIN_SCENE.to_owned(), tick_interval: Duration::from_secs_f64(1.0 / 60.0) }
    }
}

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Messages whose command ran to completion.
    pub processed: u64,
    /// Messages with no registered handler.
    pub ignored: u64,
    /// Messages whose command failed.
    pub rejected: u64,
    /// Frames rendered.
    pub frames: u64,
}

impl RunSummary {
    fn record(&mut self, outcome: &DispatchOutcome) {
        match outcome {
            DispatchOutcome::Processed { .. } => self.processed += 1,
            DispatchOutcome::Ignored { .. } => self.ignored += 1,
            DispatchOutcome::Rejected { .. } => self.rejected += 1,
        }
    }
}

/// Generic runtime that orchestrates the controller, the view and a driver.
pub struct Runtime<D: Driver> {
    driver: D,
    controller: Controller,
    dispatcher: CommandDispatcher,
    view: Rc<RefCell<MainView>>,
    config: RuntimeConfig,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime. `view` is registered with the controller here.
    pub fn new(driver: D, mut controller: Controller, view: MainView, config: RuntimeConfig) -> Self {
        let view = Rc::new(RefCell::new(view));
        controller.add_event_listener(&view);

        Self { driver, controller, dispatcher: CommandDispatcher::new(), view, config }
    }

    /// Replace the dispatch table.
    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: CommandDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Shared handle to the view.
    pub fn view(&self) -> Rc<RefCell<MainView>> {
        Rc::clone(&self.view)
    }

    /// Current model.
    pub fn game(&self) -> &Game {
        self.controller.game()
    }

    /// Run until the driver runs out of input.
    ///
    /// # Errors
    ///
    /// Returns the driver's error if reading input or rendering fails.
    /// Failed commands do not end the loop.
    pub async fn run(mut self) -> Result<RunSummary, D::Error> {
        let mut summary = RunSummary::default();

        self.controller.set_scene(&self.config.main_scene, None);
        self.controller.trigger_event(Event::Initialized);

        while let Some(input) = self.driver.next_input().await? {
            match input {
                Input::Message(message) => {
                    let outcome = self.dispatcher.dispatch(message, &mut self.controller);
                    summary.record(&outcome);
                },
                Input::Local(event) => self.controller.trigger_event(event),
                Input::Tick => {
                    if self.tick()? {
                        summary.frames += 1;
                    }
                },
            }
        }

        self.controller.stop_scene();
        self.driver.stop();

        tracing::info!(
            processed = summary.processed,
            ignored = summary.ignored,
            rejected = summary.rejected,
            frames = summary.frames,
            "runtime stopped"
        );
        Ok(summary)
    }

    /// Returns `true` if a frame was rendered.
    fn tick(&mut self) -> Result<bool, D::Error> {
        let game = self.controller.game();
        if !self.view.borrow_mut().update(game) {
            return Ok(false);
        }

        self.driver.render(&self.view.borrow(), game)?;
        self.view.borrow_mut().clear_float_texts();
        Ok(true)
    }
}

impl<D: Driver> std::fmt::Debug for Runtime<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("controller", &self.controller)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
