//! Command resolution and the stock command table.
//!
//! A line is tokenized, then resolved in this order: stock commands, user
//! commands (delegate list or registered names), unknown.

use bevy::prelude::*;

use super::{
    resolve_color, tokenize, ColorToken, CommandDelegate, ConsoleError, ConsoleFacade,
    ConsoleOutputEvent, ParsedCommand, PrintTarget, TokenizeError,
};

/// A command built into the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockCommand {
    EnterFullscreen,
    ExitFullscreen,
    CloseConsole,
    EnableDiag,
    DisableDiag,
    DiagTextColor,
    DiagBackgroundColor,
    BackgroundColor,
    TextColor,
    TextBoxColor,
    ConsoleReset,
    SendEmail,
}

impl StockCommand {
    /// The canonical table, in help order.
    pub const ALL: [StockCommand; 12] = [
        StockCommand::EnterFullscreen,
        StockCommand::ExitFullscreen,
        StockCommand::CloseConsole,
        StockCommand::EnableDiag,
        StockCommand::DisableDiag,
        StockCommand::DiagTextColor,
        StockCommand::DiagBackgroundColor,
        StockCommand::BackgroundColor,
        StockCommand::TextColor,
        StockCommand::TextBoxColor,
        StockCommand::ConsoleReset,
        StockCommand::SendEmail,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StockCommand::EnterFullscreen => "enterfullscreen",
            StockCommand::ExitFullscreen => "exitfullscreen",
            StockCommand::CloseConsole => "closeconsole",
            StockCommand::EnableDiag => "enablediag",
            StockCommand::DisableDiag => "disablediag",
            StockCommand::DiagTextColor => "diagtextcolor",
            StockCommand::DiagBackgroundColor => "diagbackgroundcolor",
            StockCommand::BackgroundColor => "backgroundcolor",
            StockCommand::TextColor => "textcolor",
            StockCommand::TextBoxColor => "textboxcolor",
            StockCommand::ConsoleReset => "consolereset",
            StockCommand::SendEmail => "sendemail",
        }
    }

    /// Number of arguments the handler reads. Extra arguments are ignored.
    pub fn arity(&self) -> usize {
        match self {
            StockCommand::DiagTextColor
            | StockCommand::DiagBackgroundColor
            | StockCommand::BackgroundColor
            | StockCommand::TextColor
            | StockCommand::TextBoxColor
            | StockCommand::SendEmail => 1,
            _ => 0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StockCommand::EnterFullscreen => "Expand the console to fullscreen",
            StockCommand::ExitFullscreen => "Return from fullscreen to the docked panel",
            StockCommand::CloseConsole => "Close the console",
            StockCommand::EnableDiag => "Enable diagnostic display mode",
            StockCommand::DisableDiag => "Disable diagnostic display mode",
            StockCommand::DiagTextColor => "Set the diagnostic text color",
            StockCommand::DiagBackgroundColor => "Set the diagnostic background color",
            StockCommand::BackgroundColor => "Set the background color",
            StockCommand::TextColor => "Set the text color",
            StockCommand::TextBoxColor => "Set the input field color",
            StockCommand::ConsoleReset => "Reset the console and all its settings",
            StockCommand::SendEmail => "Mail the console log to an address",
        }
    }

    /// Whether the command only exists while a mail composer is attached.
    pub fn requires_mail(&self) -> bool {
        matches!(self, StockCommand::SendEmail)
    }

    /// Look up a lower-cased name in the full table.
    pub fn from_name(name: &str) -> Option<StockCommand> {
        StockCommand::ALL.into_iter().find(|cmd| cmd.name() == name)
    }
}

impl std::fmt::Display for StockCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a line was resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// A stock handler ran (it may still have reported an error).
    Stock(StockCommand),
    /// The delegate received the call.
    Delegated { name: String, arguments: Vec<String> },
}

/// Everything that happened while processing one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// The command the tokenizer produced.
    pub command: Option<ParsedCommand>,
    /// Where the command went, `None` if nothing ran.
    pub outcome: Option<Dispatched>,
    /// Reported errors, in order.
    pub errors: Vec<ConsoleError>,
}

impl DispatchReport {
    /// No errors were reported.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// The stock command that ran, if any.
    pub fn stock(&self) -> Option<StockCommand> {
        match self.outcome {
            Some(Dispatched::Stock(cmd)) => Some(cmd),
            _ => None,
        }
    }
}

/// Resolves command lines against the stock table and the user commands.
///
/// Holds no parse state; each [`process`](Self::process) call is independent.
///
/// # Examples
///
/// ```ignore
/// let mut dispatcher = CommandDispatcher::new();
/// dispatcher.register_user_command("spawn");
///
/// let report = dispatcher.process("-textcolor red", &mut console, None);
/// assert!(report.is_clean());
/// ```
#[derive(Resource, Debug, Clone, Default)]
pub struct CommandDispatcher {
    user_commands: Vec<String>,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user command name handled by the delegate.
    ///
    /// Returns `false` if it was already registered. Names shadowed by a stock
    /// command are accepted but never reached.
    pub fn register_user_command(&mut self, name: impl Into<String>) -> bool {
        let name = name.into().to_lowercase();
        if self.is_registered(&name) {
            return false;
        }
        if StockCommand::from_name(&name).is_some() {
            warn!("User command '{}' is shadowed by a stock command", name);
        }
        self.user_commands.push(name);
        true
    }

    /// Remove a registered user command. Returns `true` if it existed.
    pub fn unregister_user_command(&mut self, name: &str) -> bool {
        let before = self.user_commands.len();
        self.user_commands.retain(|n| !n.eq_ignore_ascii_case(name));
        self.user_commands.len() != before
    }

    /// Whether `name` was registered on this dispatcher.
    pub fn is_registered(&self, name: &str) -> bool {
        self.user_commands.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Iterate over registered user command names.
    pub fn user_commands(&self) -> impl Iterator<Item = &str> {
        self.user_commands.iter().map(String::as_str)
    }

    /// The active stock table. `sendemail` only appears with mail available.
    pub fn stock_commands(&self, mail_available: bool) -> impl Iterator<Item = StockCommand> {
        StockCommand::ALL
            .into_iter()
            .filter(move |cmd| mail_available || !cmd.requires_mail())
    }

    /// Tokenize and dispatch one input line.
    ///
    /// Every reported error is also printed to the console in its own line.
    pub fn process<F: ConsoleFacade + ?Sized>(
        &self,
        line: &str,
        facade: &mut F,
        delegate: Option<&mut dyn CommandDelegate>,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();

        let parsed = match tokenize(line) {
            Ok(parsed) => parsed,
            Err(TokenizeError::EmptyInput) => return report,
            Err(TokenizeError::MissingCommand) => {
                report_error(facade, &mut report, ConsoleError::MissingCommand);
                return report;
            }
        };

        if let Some(extra) = parsed.extra_command {
            report_error(
                facade,
                &mut report,
                ConsoleError::MultipleCommandsInLine { extra },
            );
        }

        debug!(
            "Dispatching '{}' with arguments {:?}",
            parsed.command.name, parsed.command.arguments
        );
        self.dispatch(&parsed.command, facade, delegate, &mut report);
        report.command = Some(parsed.command);
        report
    }

    fn dispatch<F: ConsoleFacade + ?Sized>(
        &self,
        command: &ParsedCommand,
        facade: &mut F,
        delegate: Option<&mut dyn CommandDelegate>,
        report: &mut DispatchReport,
    ) {
        let name = command.name.as_str();

        if let Some(stock) = StockCommand::from_name(name)
            .filter(|cmd| !cmd.requires_mail() || facade.can_send_email())
        {
            report.outcome = Some(Dispatched::Stock(stock));
            run_stock(stock, command.first_argument(), facade, report);
            return;
        }

        match delegate {
            Some(delegate) => {
                let listed = self.is_registered(name)
                    || delegate
                        .command_list()
                        .iter()
                        .any(|n| n.eq_ignore_ascii_case(name));
                if listed {
                    delegate.did_get_command(name, &command.arguments);
                    report.outcome = Some(Dispatched::Delegated {
                        name: name.to_string(),
                        arguments: command.arguments.clone(),
                    });
                    return;
                }
            }
            None if self.is_registered(name) => {
                report_error(
                    facade,
                    report,
                    ConsoleError::DelegateMissing { name: name.to_string() },
                );
                return;
            }
            None => {}
        }

        report_error(
            facade,
            report,
            ConsoleError::UnknownCommand { name: name.to_string() },
        );
    }
}

fn report_error<F: ConsoleFacade + ?Sized>(
    facade: &mut F,
    report: &mut DispatchReport,
    error: ConsoleError,
) {
    let output = if error.is_fallback() {
        ConsoleOutputEvent::warn(error.to_string())
    } else {
        ConsoleOutputEvent::error(error.to_string())
    };
    facade.print(PrintTarget::Both, output);
    report.errors.push(error);
}

fn confirm<F: ConsoleFacade + ?Sized>(facade: &mut F, message: String) {
    facade.print(PrintTarget::Both, ConsoleOutputEvent::result(message));
}

/// Resolve a color argument, reporting a substitution.
fn color_argument<F: ConsoleFacade + ?Sized>(
    argument: Option<&str>,
    facade: &mut F,
    report: &mut DispatchReport,
) -> ColorToken {
    let resolved = resolve_color(argument);
    if let Some(error) = resolved.error {
        report_error(facade, report, error);
    }
    resolved.token
}

fn run_stock<F: ConsoleFacade + ?Sized>(
    cmd: StockCommand,
    argument: Option<&str>,
    facade: &mut F,
    report: &mut DispatchReport,
) {
    match cmd {
        StockCommand::EnterFullscreen => match facade.enter_fullscreen() {
            Ok(_) => confirm(facade, "Fullscreen enabled".into()),
            Err(e) => report_error(facade, report, e),
        },
        StockCommand::ExitFullscreen => match facade.exit_fullscreen(None) {
            Ok(_) => confirm(facade, "Fullscreen disabled".into()),
            Err(e) => report_error(facade, report, e),
        },
        StockCommand::CloseConsole => match facade.close() {
            Ok(_) => confirm(facade, "Console closed".into()),
            Err(e) => report_error(facade, report, e),
        },
        StockCommand::EnableDiag => {
            facade.enable_diag_mode();
            confirm(facade, "Diagnostic mode enabled".into());
        }
        StockCommand::DisableDiag => {
            facade.disable_diag_mode();
            confirm(facade, "Diagnostic mode disabled".into());
        }
        StockCommand::DiagTextColor => {
            let token = color_argument(argument, facade, report);
            facade.set_diag_text_color(token.color());
            confirm(facade, format!("Diagnostic text color changed to {}", token));
        }
        StockCommand::DiagBackgroundColor => {
            let token = color_argument(argument, facade, report);
            facade.set_diag_background_color(token.color());
            confirm(facade, format!("Diagnostic background color changed to {}", token));
        }
        StockCommand::BackgroundColor => {
            let token = color_argument(argument, facade, report);
            facade.set_background_color(token.color());
            confirm(facade, format!("Background color changed to {}", token));
        }
        StockCommand::TextColor => {
            let token = color_argument(argument, facade, report);
            facade.set_text_color(token.color());
            confirm(facade, format!("Text color changed to {}", token));
        }
        StockCommand::TextBoxColor => {
            let token = color_argument(argument, facade, report);
            facade.set_text_field_color(token.color());
            confirm(facade, format!("Text box color changed to {}", token));
        }
        StockCommand::ConsoleReset => {
            facade.reset();
            facade.print(
                PrintTarget::HostOnly,
                ConsoleOutputEvent::result("Console reset, set it up again to continue"),
            );
        }
        StockCommand::SendEmail => match argument.filter(|a| !a.is_empty()) {
            Some(address) => {
                facade.send_email(vec![address.to_string()]);
                confirm(facade, format!("Composing mail to {}", address));
            }
            None => report_error(
                facade,
                report,
                ConsoleError::MissingArgument { command: cmd.name() },
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConsoleState, Orientation, TransitionOp, TransitionRecord};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Background(Color),
        Text(Color),
        TextField(Color),
        DiagBackground(Color),
        DiagText(Color),
        EnableDiag,
        DisableDiag,
        EnterFullscreen,
        ExitFullscreen,
        Close,
        Reset,
        Email(Vec<String>),
    }

    /// Facade that records calls and accepts every transition.
    #[derive(Default)]
    struct RecordingFacade {
        calls: Vec<Call>,
        printed: Vec<ConsoleOutputEvent>,
        mail: bool,
        reject_transitions: bool,
    }

    impl RecordingFacade {
        fn record(&mut self, op: TransitionOp, call: Call) -> Result<TransitionRecord, ConsoleError> {
            self.calls.push(call);
            if self.reject_transitions {
                return Err(ConsoleError::InvalidTransition { op, state: ConsoleState::Closed });
            }
            Ok(TransitionRecord {
                from: ConsoleState::Open,
                op,
                orientation: Orientation::Default,
                to: ConsoleState::Open,
            })
        }
    }

    impl ConsoleFacade for RecordingFacade {
        fn set_background_color(&mut self, color: Color) {
            self.calls.push(Call::Background(color));
        }
        fn set_text_color(&mut self, color: Color) {
            self.calls.push(Call::Text(color));
        }
        fn set_text_field_color(&mut self, color: Color) {
            self.calls.push(Call::TextField(color));
        }
        fn set_diag_background_color(&mut self, color: Color) {
            self.calls.push(Call::DiagBackground(color));
        }
        fn set_diag_text_color(&mut self, color: Color) {
            self.calls.push(Call::DiagText(color));
        }
        fn enable_diag_mode(&mut self) {
            self.calls.push(Call::EnableDiag);
        }
        fn disable_diag_mode(&mut self) {
            self.calls.push(Call::DisableDiag);
        }
        fn enter_fullscreen(&mut self) -> Result<TransitionRecord, ConsoleError> {
            self.record(TransitionOp::EnterFullscreen, Call::EnterFullscreen)
        }
        fn exit_fullscreen(&mut self, _to: Option<Orientation>) -> Result<TransitionRecord, ConsoleError> {
            self.record(TransitionOp::ExitFullscreen, Call::ExitFullscreen)
        }
        fn close(&mut self) -> Result<TransitionRecord, ConsoleError> {
            self.record(TransitionOp::Close, Call::Close)
        }
        fn reset(&mut self) -> TransitionRecord {
            self.calls.push(Call::Reset);
            TransitionRecord {
                from: ConsoleState::Open,
                op: TransitionOp::Reset,
                orientation: Orientation::Default,
                to: ConsoleState::Closed,
            }
        }
        fn can_send_email(&self) -> bool {
            self.mail
        }
        fn send_email(&mut self, recipients: Vec<String>) {
            self.calls.push(Call::Email(recipients));
        }
        fn print(&mut self, _target: PrintTarget, output: ConsoleOutputEvent) {
            self.printed.push(output);
        }
    }

    #[derive(Default)]
    struct ListDelegate {
        names: Vec<String>,
        received: Vec<(String, Vec<String>)>,
    }

    impl CommandDelegate for ListDelegate {
        fn command_list(&self) -> Vec<String> {
            self.names.clone()
        }
        fn did_get_command(&mut self, name: &str, arguments: &[String]) {
            self.received.push((name.to_string(), arguments.to_vec()));
        }
    }

    #[test]
    fn test_text_color_red() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();

        let report = dispatcher.process("-textcolor red", &mut facade, None);

        assert_eq!(
            report.command,
            Some(ParsedCommand::new("textcolor", vec!["red".into()]))
        );
        assert_eq!(report.outcome, Some(Dispatched::Stock(StockCommand::TextColor)));
        assert!(report.is_clean());
        assert_eq!(facade.calls, vec![Call::Text(ColorToken::Red.color())]);
    }

    #[test]
    fn test_multiple_commands_dispatches_first() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();

        let report = dispatcher.process("-textcolor -background blue", &mut facade, None);

        assert_eq!(
            report.errors[0],
            ConsoleError::MultipleCommandsInLine { extra: "background".into() }
        );
        assert_eq!(report.command, Some(ParsedCommand::new("textcolor", vec![])));
        assert_eq!(report.stock(), Some(StockCommand::TextColor));
        // `blue` was never read; the empty argument falls back to green.
        assert_eq!(facade.calls, vec![Call::Text(ColorToken::Green.color())]);
        assert!(!facade.calls.contains(&Call::Background(ColorToken::Blue.color())));
    }

    #[test]
    fn test_unknown_color_falls_back_to_green() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();

        let report = dispatcher.process("-textcolor chartreuse", &mut facade, None);

        assert_eq!(report.stock(), Some(StockCommand::TextColor));
        assert_eq!(
            report.errors,
            vec![ConsoleError::UnresolvedColor {
                token: "chartreuse".into(),
                fallback: ColorToken::Green,
            }]
        );
        assert_eq!(facade.calls, vec![Call::Text(ColorToken::Green.color())]);
    }

    #[test]
    fn test_unknown_command_makes_no_calls() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();
        let mut delegate = ListDelegate::default();

        let report = dispatcher.process("-mystery", &mut facade, Some(&mut delegate));

        assert_eq!(
            report.errors,
            vec![ConsoleError::UnknownCommand { name: "mystery".into() }]
        );
        assert!(report.outcome.is_none());
        assert!(facade.calls.is_empty());
        assert!(delegate.received.is_empty());
    }

    #[test]
    fn test_single_command_token() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();

        let report = dispatcher.process("-closeconsole", &mut facade, None);

        assert_eq!(report.command, Some(ParsedCommand::new("closeconsole", vec![])));
        assert_eq!(report.stock(), Some(StockCommand::CloseConsole));
        assert_eq!(facade.calls, vec![Call::Close]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_every_color_command_routes_to_its_setter() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();
        let blue = ColorToken::Blue.color();

        for line in [
            "-backgroundcolor blue",
            "-textboxcolor blue",
            "-diagtextcolor blue",
            "-diagbackgroundcolor blue",
        ] {
            assert!(dispatcher.process(line, &mut facade, None).is_clean());
        }

        assert_eq!(
            facade.calls,
            vec![
                Call::Background(blue),
                Call::TextField(blue),
                Call::DiagText(blue),
                Call::DiagBackground(blue),
            ]
        );
    }

    #[test]
    fn test_state_commands() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();

        for line in ["-enterfullscreen", "-exitfullscreen", "-enablediag", "-disablediag", "-consolereset"] {
            dispatcher.process(line, &mut facade, None);
        }

        assert_eq!(
            facade.calls,
            vec![
                Call::EnterFullscreen,
                Call::ExitFullscreen,
                Call::EnableDiag,
                Call::DisableDiag,
                Call::Reset,
            ]
        );
    }

    #[test]
    fn test_rejected_transition_is_reported() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade {
            reject_transitions: true,
            ..Default::default()
        };

        let report = dispatcher.process("-closeconsole", &mut facade, None);

        assert_eq!(report.stock(), Some(StockCommand::CloseConsole));
        assert!(matches!(
            report.errors.as_slice(),
            [ConsoleError::InvalidTransition { op: TransitionOp::Close, .. }]
        ));
        let last = facade.printed.last().unwrap();
        assert_eq!(last.level, crate::core::ConsoleOutputLevel::Error);
    }

    #[test]
    fn test_stock_uses_first_argument_only() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();

        let report = dispatcher.process("-textcolor red blue", &mut facade, None);

        assert!(report.is_clean());
        assert_eq!(facade.calls, vec![Call::Text(ColorToken::Red.color())]);
    }

    #[test]
    fn test_sendemail_gated_on_mail() {
        let dispatcher = CommandDispatcher::new();

        let mut facade = RecordingFacade::default();
        let report = dispatcher.process("-sendemail dev@example.com", &mut facade, None);
        assert_eq!(
            report.errors,
            vec![ConsoleError::UnknownCommand { name: "sendemail".into() }]
        );
        assert!(facade.calls.is_empty());

        let mut facade = RecordingFacade { mail: true, ..Default::default() };
        let report = dispatcher.process("-sendemail dev@example.com", &mut facade, None);
        assert!(report.is_clean());
        assert_eq!(facade.calls, vec![Call::Email(vec!["dev@example.com".into()])]);
    }

    #[test]
    fn test_sendemail_without_address() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade { mail: true, ..Default::default() };

        let report = dispatcher.process("-sendemail", &mut facade, None);

        assert_eq!(
            report.errors,
            vec![ConsoleError::MissingArgument { command: "sendemail" }]
        );
        assert!(facade.calls.is_empty());
    }

    #[test]
    fn test_delegate_receives_user_command() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();
        let mut delegate = ListDelegate {
            names: vec!["Spawn".into()],
            ..Default::default()
        };

        let report = dispatcher.process("-spawn Orc 3", &mut facade, Some(&mut delegate));

        assert!(report.is_clean());
        assert_eq!(
            report.outcome,
            Some(Dispatched::Delegated {
                name: "spawn".into(),
                arguments: vec!["orc".into(), "3".into()],
            })
        );
        assert_eq!(delegate.received, vec![("spawn".into(), vec!["orc".into(), "3".into()])]);
        assert!(facade.calls.is_empty());
    }

    #[test]
    fn test_stock_wins_over_user_command() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();
        let mut delegate = ListDelegate {
            names: vec!["textcolor".into()],
            ..Default::default()
        };

        dispatcher.process("-textcolor red", &mut facade, Some(&mut delegate));

        assert!(delegate.received.is_empty());
        assert_eq!(facade.calls, vec![Call::Text(ColorToken::Red.color())]);
    }

    #[test]
    fn test_registered_command_without_delegate() {
        let mut dispatcher = CommandDispatcher::new();
        dispatcher.register_user_command("spawn");
        let mut facade = RecordingFacade::default();

        let report = dispatcher.process("-spawn orc", &mut facade, None);

        assert_eq!(
            report.errors,
            vec![ConsoleError::DelegateMissing { name: "spawn".into() }]
        );
        assert!(report.outcome.is_none());
    }

    #[test]
    fn test_registered_command_with_delegate() {
        let mut dispatcher = CommandDispatcher::new();
        dispatcher.register_user_command("Spawn");
        let mut facade = RecordingFacade::default();
        let mut delegate = ListDelegate::default();

        let report = dispatcher.process("-spawn orc", &mut facade, Some(&mut delegate));

        assert!(report.is_clean());
        assert_eq!(delegate.received, vec![("spawn".into(), vec!["orc".into()])]);
    }

    #[test]
    fn test_register_user_command() {
        let mut dispatcher = CommandDispatcher::new();
        assert!(dispatcher.register_user_command("Spawn"));
        assert!(!dispatcher.register_user_command("spawn"));
        assert!(dispatcher.is_registered("SPAWN"));
        assert_eq!(dispatcher.user_commands().collect::<Vec<_>>(), vec!["spawn"]);

        assert!(dispatcher.unregister_user_command("spawn"));
        assert!(!dispatcher.unregister_user_command("spawn"));
    }

    #[test]
    fn test_missing_command_and_empty_line() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();

        let report = dispatcher.process("red", &mut facade, None);
        assert_eq!(report.errors, vec![ConsoleError::MissingCommand]);
        assert!(report.command.is_none());

        let report = dispatcher.process("", &mut facade, None);
        assert_eq!(report, DispatchReport::default());
        assert_eq!(facade.printed.len(), 1);
    }

    #[test]
    fn test_no_state_between_calls() {
        let dispatcher = CommandDispatcher::new();
        let mut facade = RecordingFacade::default();

        dispatcher.process("-textcolor -background blue", &mut facade, None);
        let report = dispatcher.process("-backgroundcolor red", &mut facade, None);

        assert!(report.is_clean());
        assert_eq!(
            report.command,
            Some(ParsedCommand::new("backgroundcolor", vec!["red".into()]))
        );
    }

    #[test]
    fn test_stock_table() {
        let dispatcher = CommandDispatcher::new();
        assert_eq!(dispatcher.stock_commands(false).count(), 11);
        assert_eq!(dispatcher.stock_commands(true).count(), 12);
        assert!(dispatcher.stock_commands(false).any(|c| c == StockCommand::ConsoleReset));

        assert_eq!(StockCommand::from_name("textcolor"), Some(StockCommand::TextColor));
        assert_eq!(StockCommand::from_name("background"), None);
        assert_eq!(StockCommand::TextColor.arity(), 1);
        assert_eq!(StockCommand::CloseConsole.arity(), 0);
    }
}
