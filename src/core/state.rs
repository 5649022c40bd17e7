//! Display state machine for the overlay console.
//!
//! Tracks the presentation state (closed, open, fullscreen, embedded) and the
//! edge the panel docks to. Transition legality does not depend on the
//! orientation; only the presentation layer's animation direction does.

use super::ConsoleError;

/// Presentation state of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsoleState {
    /// Not displayed.
    #[default]
    Closed,
    /// Displayed as a docked panel.
    Open,
    /// Covering the whole host view.
    Fullscreen,
    /// Attached to a host view as a plain subview.
    Embedded,
}

impl ConsoleState {
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleState::Closed => "closed",
            ConsoleState::Open => "open",
            ConsoleState::Fullscreen => "fullscreen",
            ConsoleState::Embedded => "embedded",
        }
    }
}

impl std::fmt::Display for ConsoleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The screen edge the panel docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    Top,
    Bottom,
    Left,
    Right,
    /// Platform default, docks like [`Orientation::Bottom`].
    #[default]
    Default,
}

impl Orientation {
    /// The edge actually used, with `Default` mapped to `Bottom`.
    pub fn effective(self) -> Orientation {
        match self {
            Orientation::Default => Orientation::Bottom,
            other => other,
        }
    }

    /// Whether the panel docks to the left or right edge.
    pub fn is_vertical_edge(self) -> bool {
        matches!(self.effective(), Orientation::Left | Orientation::Right)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Top => "top",
            Orientation::Bottom => "bottom",
            Orientation::Left => "left",
            Orientation::Right => "right",
            Orientation::Default => "default",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How the console was attached to its host during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsoleKind {
    /// Docked popover panel without an input field.
    #[default]
    Popover,
    /// Docked popover panel with an input field.
    TextPopover,
    /// Embedded into a host view.
    View,
    /// Embedded into a host view, with an input field.
    TextView,
}

impl ConsoleKind {
    /// Embedded kinds start in [`ConsoleState::Embedded`] and cannot be closed.
    pub fn is_embedded(self) -> bool {
        matches!(self, ConsoleKind::View | ConsoleKind::TextView)
    }

    /// Whether the presentation layer shows a command input field.
    pub fn has_text_field(self) -> bool {
        matches!(self, ConsoleKind::TextPopover | ConsoleKind::TextView)
    }
}

/// A requested state-machine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionOp {
    Setup,
    Open,
    Close,
    EnterFullscreen,
    ExitFullscreen,
    Reset,
    Remove,
}

impl TransitionOp {
    pub fn name(&self) -> &'static str {
        match self {
            TransitionOp::Setup => "set up",
            TransitionOp::Open => "open",
            TransitionOp::Close => "close",
            TransitionOp::EnterFullscreen => "enter fullscreen",
            TransitionOp::ExitFullscreen => "exit fullscreen",
            TransitionOp::Reset => "reset",
            TransitionOp::Remove => "remove",
        }
    }
}

impl std::fmt::Display for TransitionOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A completed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRecord {
    /// State before the operation.
    pub from: ConsoleState,
    /// The operation that ran.
    pub op: TransitionOp,
    /// Orientation after the operation.
    pub orientation: Orientation,
    /// State after the operation.
    pub to: ConsoleState,
}

/// The console lifecycle.
///
/// Starts not ready and `Closed`. Every operation except [`reset`](Self::reset)
/// requires a prior [`setup`](Self::setup). Failed operations leave the
/// machine untouched.
///
/// # Examples
///
/// ```
/// use bevy_overlay_console::core::{ConsoleKind, ConsoleState, ConsoleStateMachine, Orientation};
///
/// let mut machine = ConsoleStateMachine::new();
/// machine.setup(ConsoleKind::Popover, Orientation::Left);
/// machine.open().unwrap();
/// machine.enter_fullscreen().unwrap();
/// machine.exit_fullscreen(None).unwrap();
/// assert_eq!(machine.state(), ConsoleState::Open);
/// assert_eq!(machine.orientation(), Orientation::Left);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsoleStateMachine {
    state: ConsoleState,
    orientation: Orientation,
    kind: Option<ConsoleKind>,
}

impl ConsoleStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> ConsoleState {
        self.state
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The kind chosen at setup, `None` before setup.
    #[inline]
    pub fn kind(&self) -> Option<ConsoleKind> {
        self.kind
    }

    /// Whether setup has completed.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.kind.is_some()
    }

    /// Whether the console is visible in any form.
    #[inline]
    pub fn is_displayed(&self) -> bool {
        self.state != ConsoleState::Closed
    }

    fn require_ready(&self, op: TransitionOp) -> Result<(), ConsoleError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(ConsoleError::SetupRequired { op })
        }
    }

    fn apply(&mut self, op: TransitionOp, to: ConsoleState) -> TransitionRecord {
        let from = self.state;
        self.state = to;
        TransitionRecord {
            from,
            op,
            orientation: self.orientation,
            to,
        }
    }

    /// Complete setup for the given kind.
    ///
    /// Embedded kinds enter `Embedded` immediately and always dock `Default`.
    /// Setting up again replaces the previous setup.
    pub fn setup(&mut self, kind: ConsoleKind, orientation: Orientation) -> TransitionRecord {
        self.kind = Some(kind);
        if kind.is_embedded() {
            self.orientation = Orientation::Default;
            self.apply(TransitionOp::Setup, ConsoleState::Embedded)
        } else {
            self.orientation = orientation;
            self.apply(TransitionOp::Setup, ConsoleState::Closed)
        }
    }

    /// `Closed` -> `Open`.
    pub fn open(&mut self) -> Result<TransitionRecord, ConsoleError> {
        let op = TransitionOp::Open;
        self.require_ready(op)?;
        match self.state {
            ConsoleState::Closed => Ok(self.apply(op, ConsoleState::Open)),
            state => Err(ConsoleError::InvalidTransition { op, state }),
        }
    }

    /// `Open` or `Fullscreen` -> `Closed`.
    pub fn close(&mut self) -> Result<TransitionRecord, ConsoleError> {
        let op = TransitionOp::Close;
        self.require_ready(op)?;
        match self.state {
            ConsoleState::Open | ConsoleState::Fullscreen => {
                Ok(self.apply(op, ConsoleState::Closed))
            }
            ConsoleState::Embedded => Err(ConsoleError::UnsupportedForEmbedded { op }),
            state => Err(ConsoleError::InvalidTransition { op, state }),
        }
    }

    /// `Open` -> `Fullscreen`, keeping the orientation for the way back.
    pub fn enter_fullscreen(&mut self) -> Result<TransitionRecord, ConsoleError> {
        let op = TransitionOp::EnterFullscreen;
        self.require_ready(op)?;
        match self.state {
            ConsoleState::Open => Ok(self.apply(op, ConsoleState::Fullscreen)),
            state => Err(ConsoleError::InvalidTransition { op, state }),
        }
    }

    /// `Fullscreen` -> `Open`, docking to `to` or to the orientation held
    /// before fullscreen.
    pub fn exit_fullscreen(
        &mut self,
        to: Option<Orientation>,
    ) -> Result<TransitionRecord, ConsoleError> {
        let op = TransitionOp::ExitFullscreen;
        self.require_ready(op)?;
        match self.state {
            ConsoleState::Fullscreen => {
                if let Some(orientation) = to {
                    self.orientation = orientation;
                }
                Ok(self.apply(op, ConsoleState::Open))
            }
            state => Err(ConsoleError::InvalidTransition { op, state }),
        }
    }

    /// Force `Closed`, dock `Default` and drop the setup. Always legal.
    pub fn reset(&mut self) -> TransitionRecord {
        self.kind = None;
        self.orientation = Orientation::Default;
        self.apply(TransitionOp::Reset, ConsoleState::Closed)
    }

    /// Detach the console from its host, embedded or not.
    pub fn remove(&mut self) -> Result<TransitionRecord, ConsoleError> {
        let op = TransitionOp::Remove;
        self.require_ready(op)?;
        self.kind = None;
        Ok(self.apply(op, ConsoleState::Closed))
    }
}
