//! The concrete console: state machine, settings and output buffer.
//!
//! [`OverlayConsole`] implements [`ConsoleFacade`], so stock commands act on
//! it directly. Side effects meant for other systems (output lines,
//! lifecycle changes, mail requests) are queued and drained by the plugin.

use bevy::math::Vec2;
use bevy::prelude::*;

use super::{
    ConsoleError, ConsoleFacade, ConsoleKind, ConsoleLifecycleEvent, ConsoleOutputEvent,
    ConsoleOutputLevel, ConsoleSettings, ConsoleState, ConsoleStateMachine, Orientation,
    PrintTarget, SendEmailEvent, TransitionRecord,
};

/// Log target used for console lines mirrored into the host log.
///
/// The log capture layer skips this target so mirrored lines are not
/// appended twice.
pub const CONSOLE_LOG_TARGET: &str = "overlay_console";

/// Default number of lines kept in the output buffer.
pub const DEFAULT_MAX_LINES: usize = 1000;

/// The overlay console.
///
/// # Examples
///
/// ```
/// use bevy_overlay_console::core::{ConsoleKind, ConsoleState, OverlayConsole, Orientation};
///
/// let mut console = OverlayConsole::new();
/// console.setup(ConsoleKind::TextPopover, Orientation::Top).unwrap();
/// console.open().unwrap();
/// assert_eq!(console.state(), ConsoleState::Open);
/// ```
#[derive(Resource, Debug, Clone)]
pub struct OverlayConsole {
    machine: ConsoleStateMachine,
    settings: ConsoleSettings,
    lines: Vec<ConsoleOutputEvent>,
    max_lines: usize,
    mail_available: bool,
    outbox: Vec<ConsoleOutputEvent>,
    lifecycle: Vec<ConsoleLifecycleEvent>,
    mail: Vec<SendEmailEvent>,
    clear_requested: bool,
}

impl Default for OverlayConsole {
    fn default() -> Self {
        Self::with_settings(ConsoleSettings::default())
    }
}

impl OverlayConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ConsoleSettings) -> Self {
        Self {
            machine: ConsoleStateMachine::new(),
            settings,
            lines: Vec::new(),
            max_lines: DEFAULT_MAX_LINES,
            mail_available: false,
            outbox: Vec::new(),
            lifecycle: Vec::new(),
            mail: Vec::new(),
            clear_requested: false,
        }
    }

    /// Cap the output buffer; oldest lines are dropped first.
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines.max(1);
        self
    }

    /// Declare whether the host can compose mail.
    pub fn set_mail_available(&mut self, available: bool) {
        self.mail_available = available;
    }

    // ---- state -------------------------------------------------------------

    #[inline]
    pub fn state(&self) -> ConsoleState {
        self.machine.state()
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.machine.orientation()
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.machine.is_ready()
    }

    #[inline]
    pub fn kind(&self) -> Option<ConsoleKind> {
        self.machine.kind()
    }

    /// Read-only access to the state machine.
    pub fn machine(&self) -> &ConsoleStateMachine {
        &self.machine
    }

    fn record(&mut self, record: TransitionRecord) -> TransitionRecord {
        self.lifecycle.push(record.into());
        record
    }

    /// Set the console up. Refused in a live environment.
    ///
    /// Setting up a console that is already set up resets it first.
    pub fn setup(
        &mut self,
        kind: ConsoleKind,
        orientation: Orientation,
    ) -> Result<TransitionRecord, ConsoleError> {
        if self.settings.live_environment {
            return Err(ConsoleError::LiveEnvironment);
        }
        if self.machine.is_ready() {
            ConsoleFacade::reset(self);
        }
        let record = self.machine.setup(kind, orientation);
        debug!("Console set up as {:?} docked {}", kind, record.orientation);
        Ok(self.record(record))
    }

    /// Set up for a fixed rectangle instead of an orientation edge.
    pub fn setup_with_frame(
        &mut self,
        kind: ConsoleKind,
        position: Vec2,
        size: Vec2,
    ) -> Result<TransitionRecord, ConsoleError> {
        let record = self.setup(kind, Orientation::Default)?;
        self.settings.set_frame(position, size);
        Ok(record)
    }

    pub fn open(&mut self) -> Result<TransitionRecord, ConsoleError> {
        let record = self.machine.open()?;
        Ok(self.record(record))
    }

    /// Detach the console from its host. Required instead of `close` for
    /// embedded consoles.
    pub fn remove(&mut self) -> Result<TransitionRecord, ConsoleError> {
        let record = self.machine.remove()?;
        if matches!(record.from, ConsoleState::Open | ConsoleState::Fullscreen) {
            self.lifecycle.push(ConsoleLifecycleEvent::Closed);
        }
        Ok(self.record(record))
    }

    // ---- settings ----------------------------------------------------------

    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ConsoleSettings {
        &mut self.settings
    }

    pub fn override_width(&mut self, width: f32) {
        self.settings.width = Some(width);
    }

    pub fn override_height(&mut self, height: f32) {
        self.settings.height = Some(height);
    }

    pub fn reset_width(&mut self) {
        self.settings.width = None;
    }

    pub fn reset_height(&mut self) {
        self.settings.height = None;
    }

    // ---- output ------------------------------------------------------------

    /// Lines currently in the output buffer, oldest first.
    pub fn lines(&self) -> &[ConsoleOutputEvent] {
        &self.lines
    }

    /// The output buffer as text, one line per entry.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Empty the output buffer.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.outbox.clear();
        self.clear_requested = true;
    }

    pub fn print_info(&mut self, message: impl Into<String>) {
        self.print(PrintTarget::Console, ConsoleOutputEvent::info(message));
    }

    pub fn print_warning(&mut self, message: impl Into<String>) {
        self.print(PrintTarget::Console, ConsoleOutputEvent::warn(message));
    }

    pub fn print_error(&mut self, message: impl Into<String>) {
        self.print(PrintTarget::Console, ConsoleOutputEvent::error(message));
    }

    /// Append a line without mirroring it to the host log.
    pub(crate) fn push_line(&mut self, output: ConsoleOutputEvent) {
        if self.lines.len() >= self.max_lines {
            let overflow = self.lines.len() + 1 - self.max_lines;
            self.lines.drain(..overflow);
        }
        self.lines.push(output.clone());
        self.outbox.push(output);
    }

    // ---- queues drained by the plugin --------------------------------------

    pub(crate) fn take_outputs(&mut self) -> Vec<ConsoleOutputEvent> {
        std::mem::take(&mut self.outbox)
    }

    pub(crate) fn take_lifecycle(&mut self) -> Vec<ConsoleLifecycleEvent> {
        std::mem::take(&mut self.lifecycle)
    }

    pub(crate) fn take_mail(&mut self) -> Vec<SendEmailEvent> {
        std::mem::take(&mut self.mail)
    }

    pub(crate) fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }
}

fn mirror_to_host(output: &ConsoleOutputEvent) {
    match output.level {
        ConsoleOutputLevel::Debug => debug!(target: CONSOLE_LOG_TARGET, "{}", output.message),
        ConsoleOutputLevel::Warn => warn!(target: CONSOLE_LOG_TARGET, "{}", output.message),
        ConsoleOutputLevel::Error => error!(target: CONSOLE_LOG_TARGET, "{}", output.message),
        _ => info!(target: CONSOLE_LOG_TARGET, "{}", output.message),
    }
}

impl ConsoleFacade for OverlayConsole {
    fn set_background_color(&mut self, color: Color) {
        self.settings.background_color = color;
    }

    fn set_text_color(&mut self, color: Color) {
        self.settings.text_color = color;
    }

    fn set_text_field_color(&mut self, color: Color) {
        self.settings.text_field_color = color;
    }

    fn set_diag_background_color(&mut self, color: Color) {
        self.settings.diag_background_color = color;
    }

    fn set_diag_text_color(&mut self, color: Color) {
        self.settings.diag_text_color = color;
    }

    fn enable_diag_mode(&mut self) {
        self.settings.diagnostic_mode = true;
    }

    fn disable_diag_mode(&mut self) {
        self.settings.diagnostic_mode = false;
    }

    fn enter_fullscreen(&mut self) -> Result<TransitionRecord, ConsoleError> {
        let record = self.machine.enter_fullscreen()?;
        if !self.settings.fullscreen_enabled {
            // Fullscreen only hides the button; the transition itself is allowed.
            warn!("Fullscreen is disabled in settings");
        }
        Ok(self.record(record))
    }

    fn exit_fullscreen(&mut self, to: Option<Orientation>) -> Result<TransitionRecord, ConsoleError> {
        let record = self.machine.exit_fullscreen(to)?;
        Ok(self.record(record))
    }

    fn close(&mut self) -> Result<TransitionRecord, ConsoleError> {
        let record = self.machine.close()?;
        Ok(self.record(record))
    }

    fn reset(&mut self) -> TransitionRecord {
        let record = self.machine.reset();
        if matches!(record.from, ConsoleState::Open | ConsoleState::Fullscreen) {
            self.lifecycle.push(ConsoleLifecycleEvent::Closed);
        }
        self.settings.reset();
        self.clear();
        self.record(record)
    }

    fn can_send_email(&self) -> bool {
        self.mail_available
    }

    fn send_email(&mut self, recipients: Vec<String>) {
        let body = self.text();
        self.mail.push(SendEmailEvent { recipients, body });
    }

    fn print(&mut self, target: PrintTarget, output: ConsoleOutputEvent) {
        match target {
            PrintTarget::Console => self.push_line(output),
            PrintTarget::Both => {
                mirror_to_host(&output);
                self.push_line(output);
            }
            PrintTarget::HostOnly => mirror_to_host(&output),
        }
    }
}
