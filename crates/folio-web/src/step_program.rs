#![forbid(unsafe_code)]

//! Step-based program runner.
//!
//! [`StepProgram`] drives a [`Model`] through init / event / update / view
//! cycles without threads or blocking. The host controls the loop:
//!
//! 1. Push events via [`StepProgram::push_event`].
//! 2. Advance time via [`StepProgram::advance_time`].
//! 3. Call [`StepProgram::step`] to process pending events and render if dirty.
//! 4. Read the rendered HTML via [`StepProgram::take_outputs`].
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use folio_content::Route;
//! use folio_core::Event;
//! use folio_web::{PageModel, StepProgram};
//!
//! let page = PageModel::for_route(&Route::parse("/blog/aws-efs-latency-solutions")).unwrap();
//! let mut prog = StepProgram::new(page);
//! prog.init().unwrap();
//!
//! prog.push_event(Event::scroll(0.0));
//! prog.advance_time(Duration::from_millis(16));
//! let result = prog.step().unwrap();
//! assert!(result.rendered);
//! assert!(prog.take_outputs().last_html.is_some());
//! ```

use core::time::Duration;
use std::collections::VecDeque;

use folio_core::Event;
use folio_render::HtmlPresenter;
use folio_runtime::{Cmd, Model};
use tracing::debug;

use crate::{DeterministicClock, StepError, WebOutputs};

/// Result of a single [`StepProgram::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the program is still running (false after `Cmd::Quit`).
    pub running: bool,
    /// Whether a frame was rendered during this step.
    pub rendered: bool,
    /// Number of events processed during this step.
    pub events_processed: u32,
    /// Current frame index (monotonically increasing).
    pub frame_idx: u64,
}

/// Host-driven, non-blocking runner for one [`Model`].
///
/// Tasks returned by the model run inline and their message is fed straight
/// back into `update`, so a step never leaves work pending.
pub struct StepProgram<M: Model> {
    model: M,
    presenter: HtmlPresenter,
    clock: DeterministicClock,
    queue: VecDeque<Event>,
    outputs: WebOutputs,
    running: bool,
    initialized: bool,
    dirty: bool,
    frame_idx: u64,
    tick_rate: Option<Duration>,
    last_tick: Duration,
}

impl<M: Model> StepProgram<M> {
    #[must_use]
    pub fn new(model: M) -> Self {
        Self {
            model,
            presenter: HtmlPresenter::new(),
            clock: DeterministicClock::new(),
            queue: VecDeque::new(),
            outputs: WebOutputs::default(),
            running: true,
            initialized: false,
            dirty: true,
            frame_idx: 0,
            tick_rate: None,
            last_tick: Duration::ZERO,
        }
    }

    /// Initialize the model and render the first frame. Call exactly once.
    pub fn init(&mut self) -> Result<(), StepError> {
        if self.initialized {
            return Err(StepError::AlreadyInitialized);
        }
        self.initialized = true;
        let cmd = self.model.init();
        self.execute_cmd(cmd);
        if self.running {
            self.render_frame();
        }
        Ok(())
    }

    /// Process all pending events, handle a due tick, and render if dirty.
    pub fn step(&mut self) -> Result<StepResult, StepError> {
        if !self.initialized {
            return Err(StepError::NotInitialized);
        }
        if !self.running {
            return Ok(StepResult {
                running: false,
                rendered: false,
                events_processed: 0,
                frame_idx: self.frame_idx,
            });
        }

        let mut events_processed: u32 = 0;
        while let Some(event) = self.queue.pop_front() {
            events_processed += 1;
            self.handle_event(event);
            if !self.running {
                break;
            }
        }

        if self.running
            && let Some(rate) = self.tick_rate
        {
            let now = self.clock.now();
            if now.saturating_sub(self.last_tick) >= rate {
                self.last_tick = now;
                self.handle_event(Event::Tick);
            }
        }

        let rendered = if self.running && self.dirty {
            self.render_frame();
            true
        } else {
            false
        };

        Ok(StepResult {
            running: self.running,
            rendered,
            events_processed,
            frame_idx: self.frame_idx,
        })
    }

    /// Queue a host event. It is processed on the next [`step`](Self::step).
    pub fn push_event(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Dispatch a message immediately, bypassing the event queue.
    pub fn send(&mut self, msg: M::Message) {
        if !self.running {
            return;
        }
        let cmd = self.model.update(msg);
        self.dirty = true;
        self.execute_cmd(cmd);
    }

    pub fn advance_time(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }

    pub fn set_time(&mut self, now: Duration) {
        self.clock.set(now);
    }

    /// Take the captured outputs, leaving empty defaults.
    pub fn take_outputs(&mut self) -> WebOutputs {
        std::mem::take(&mut self.outputs)
    }

    pub fn outputs(&self) -> &WebOutputs {
        &self.outputs
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn frame_idx(&self) -> u64 {
        self.frame_idx
    }

    pub fn tick_rate(&self) -> Option<Duration> {
        self.tick_rate
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    fn handle_event(&mut self, event: Event) {
        let msg = M::Message::from(event);
        let cmd = self.model.update(msg);
        self.dirty = true;
        self.execute_cmd(cmd);
    }

    fn render_frame(&mut self) {
        let html = self.presenter.render(&self.model.view());
        self.outputs.last_html = Some(html);
        self.outputs.renders += 1;
        self.dirty = false;
        self.frame_idx += 1;
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => {
                self.running = false;
            }
            Cmd::Msg(m) => {
                let cmd = self.model.update(m);
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) | Cmd::Sequence(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Tick(duration) => {
                self.tick_rate = Some(duration);
            }
            Cmd::Log(text) => {
                self.outputs.logs.push(text);
            }
            Cmd::Task(spec, f) => {
                debug!(task = spec.name.as_deref().unwrap_or("<anon>"), "step task");
                let msg = f();
                let cmd = self.model.update(msg);
                self.execute_cmd(cmd);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render::{Element, Node};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Counter {
        value: i32,
        ticks: u32,
    }

    #[derive(Debug)]
    enum CounterMsg {
        Increment,
        Log(&'static str),
        SpawnTask,
        StartTicking,
        Tick,
        Quit,
        Ignore,
    }

    impl From<Event> for CounterMsg {
        fn from(event: Event) -> Self {
            match event {
                Event::Tick => CounterMsg::Tick,
                Event::Scroll { .. } => CounterMsg::Increment,
                _ => CounterMsg::Ignore,
            }
        }
    }

    impl Model for Counter {
        type Message = CounterMsg;

        fn update(&mut self, msg: CounterMsg) -> Cmd<CounterMsg> {
            match msg {
                CounterMsg::Increment => {
                    self.value += 1;
                    Cmd::none()
                }
                CounterMsg::Log(text) => Cmd::log(text),
                CounterMsg::SpawnTask => Cmd::task_named("bump", || CounterMsg::Increment),
                CounterMsg::StartTicking => Cmd::tick(Duration::from_millis(100)),
                CounterMsg::Tick => {
                    self.ticks += 1;
                    Cmd::none()
                }
                CounterMsg::Quit => Cmd::quit(),
                CounterMsg::Ignore => Cmd::none(),
            }
        }

        fn view(&self) -> Vec<Node> {
            vec![Element::new("p").text(format!("{}", self.value)).into()]
        }
    }

    #[test]
    fn init_renders_and_rejects_second_call() {
        let mut prog = StepProgram::new(Counter::default());
        assert_eq!(prog.step(), Err(StepError::NotInitialized));
        prog.init().unwrap();
        assert_eq!(prog.frame_idx(), 1);
        assert_eq!(prog.outputs().last_html.as_deref(), Some("<p>0</p>"));
        assert_eq!(prog.init(), Err(StepError::AlreadyInitialized));
    }

    #[test]
    fn step_drains_queue_and_renders_once() {
        let mut prog = StepProgram::new(Counter::default());
        prog.init().unwrap();
        prog.take_outputs();

        prog.push_event(Event::scroll(1.0));
        prog.push_event(Event::scroll(2.0));
        assert_eq!(prog.pending_events(), 2);

        let result = prog.step().unwrap();
        assert_eq!(
            result,
            StepResult {
                running: true,
                rendered: true,
                events_processed: 2,
                frame_idx: 2,
            }
        );
        let outputs = prog.take_outputs();
        assert_eq!(outputs.renders, 1);
        assert_eq!(outputs.last_html.as_deref(), Some("<p>2</p>"));
    }

    #[test]
    fn idle_step_does_not_render() {
        let mut prog = StepProgram::new(Counter::default());
        prog.init().unwrap();
        let result = prog.step().unwrap();
        assert!(!result.rendered);
        assert_eq!(result.events_processed, 0);
    }

    #[test]
    fn tasks_run_inline() {
        let mut prog = StepProgram::new(Counter::default());
        prog.init().unwrap();
        prog.send(CounterMsg::SpawnTask);
        assert_eq!(prog.model().value, 1);
    }

    #[test]
    fn ticks_follow_the_clock() {
        let mut prog = StepProgram::new(Counter::default());
        prog.init().unwrap();
        prog.send(CounterMsg::StartTicking);
        assert_eq!(prog.tick_rate(), Some(Duration::from_millis(100)));

        prog.advance_time(Duration::from_millis(50));
        prog.step().unwrap();
        assert_eq!(prog.model().ticks, 0);

        prog.advance_time(Duration::from_millis(60));
        prog.step().unwrap();
        assert_eq!(prog.model().ticks, 1);

        prog.step().unwrap();
        assert_eq!(prog.model().ticks, 1);
    }

    #[test]
    fn logs_are_captured() {
        let mut prog = StepProgram::new(Counter::default());
        prog.init().unwrap();
        prog.send(CounterMsg::Log("hello"));
        assert_eq!(prog.take_outputs().logs, vec!["hello".to_owned()]);
        assert!(prog.outputs().logs.is_empty());
    }

    #[test]
    fn quit_stops_processing() {
        let mut prog = StepProgram::new(Counter::default());
        prog.init().unwrap();
        prog.send(CounterMsg::Quit);
        assert!(!prog.is_running());
        prog.push_event(Event::scroll(1.0));
        let result = prog.step().unwrap();
        assert!(!result.running);
        assert_eq!(result.events_processed, 0);
        assert_eq!(prog.model().value, 0);
    }
}
