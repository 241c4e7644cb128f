#![forbid(unsafe_code)]

//! The `Model` trait and the `Cmd` side-effect vocabulary.
//!
//! ```ignore
//! impl Model for Navbar {
//!     type Message = NavMsg;
//!     fn update(&mut self, msg: NavMsg) -> Cmd<NavMsg> { ... }
//!     fn view(&self) -> Vec<Node> { ... }
//! }
//! ```

use std::time::Duration;

use folio_core::Event;
use folio_render::Node;

/// Application state and behavior for one interactive surface.
pub trait Model: Sized {
    /// Messages that drive state transitions.
    ///
    /// Must be convertible from host events.
    type Message: From<Event> + Send + 'static;

    /// Startup commands. Called once before any event.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Core state transition.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state.
    fn view(&self) -> Vec<Node>;
}

/// Scheduling metadata for background tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSpec {
    /// Optional task name for logging.
    pub name: Option<String>,
}

impl TaskSpec {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Side effects returned from `init()` and `update()`.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Stop processing further events.
    Quit,
    /// Execute multiple commands (order not significant).
    Batch(Vec<Cmd<M>>),
    /// Execute commands in order.
    Sequence(Vec<Cmd<M>>),
    /// Send a message to the model.
    Msg(M),
    /// Ask the host to deliver `Event::Tick` after a duration.
    Tick(Duration),
    /// Record a log line in the host's output.
    Log(String),
    /// Run a blocking operation; its return value is fed back as a message.
    Task(TaskSpec, Box<dyn FnOnce() -> M + Send>),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Sequence(cmds) => f.debug_tuple("Sequence").field(cmds).finish(),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Tick(d) => f.debug_tuple("Tick").field(d).finish(),
            Self::Log(s) => f.debug_tuple("Log").field(s).finish(),
            Self::Task(spec, _) => f.debug_struct("Task").field("spec", spec).finish(),
        }
    }
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    #[inline]
    pub fn tick(after: Duration) -> Self {
        Self::Tick(after)
    }

    /// Batch commands. Empty collapses to `None`, a single command is unwrapped.
    pub fn batch(cmds: Vec<Self>) -> Self {
        Self::collapse(cmds, Self::Batch)
    }

    /// Sequence commands. Empty collapses to `None`, a single command is unwrapped.
    pub fn sequence(cmds: Vec<Self>) -> Self {
        Self::collapse(cmds, Self::Sequence)
    }

    fn collapse(mut cmds: Vec<Self>, wrap: fn(Vec<Self>) -> Self) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => wrap(cmds),
        }
    }

    /// Run `f` as an unnamed task.
    pub fn task<F>(f: F) -> Self
    where
        F: FnOnce() -> M + Send + 'static,
    {
        Self::Task(TaskSpec::default(), Box::new(f))
    }

    /// Run `f` as a named task.
    pub fn task_named<F>(name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce() -> M + Send + 'static,
    {
        Self::Task(TaskSpec::named(name), Box::new(f))
    }

    /// Convert the message type, e.g. to embed a child model's commands in a
    /// parent's.
    pub fn map<N, F>(self, f: F) -> Cmd<N>
    where
        M: 'static,
        N: 'static,
        F: Fn(M) -> N + Clone + Send + 'static,
    {
        match self {
            Self::None => Cmd::None,
            Self::Quit => Cmd::Quit,
            Self::Batch(cmds) => Cmd::Batch(cmds.into_iter().map(|c| c.map(f.clone())).collect()),
            Self::Sequence(cmds) => {
                Cmd::Sequence(cmds.into_iter().map(|c| c.map(f.clone())).collect())
            }
            Self::Msg(m) => Cmd::Msg(f(m)),
            Self::Tick(d) => Cmd::Tick(d),
            Self::Log(s) => Cmd::Log(s),
            Self::Task(spec, task) => Cmd::Task(spec, Box::new(move || f(task()))),
        }
    }

    /// Short name of the variant, for logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Quit => "Quit",
            Self::Batch(_) => "Batch",
            Self::Sequence(_) => "Sequence",
            Self::Msg(_) => "Msg",
            Self::Tick(_) => "Tick",
            Self::Log(_) => "Log",
            Self::Task(..) => "Task",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
