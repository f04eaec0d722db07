//! # Interactive Session
//!
//! The terminal stand-in for the original phone screen: the session owns a
//! `BillState`, each input line mutates it, and the totals are recomputed and
//! re-rendered after every change.
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │   > bill 49.50          state.bill_amount = 49.5      ──┐              │
//! │   > tip 18              state.tip_percentage = 18       │              │
//! │   > preset 20           state.tip_percentage = 20       ├─► breakdown()│
//! │   > slide 33.4          state.tip_percentage = 33       │   render     │
//! │   > round on            state.round_to_nearest = true   │              │
//! │   > split other 7       state.split = Other("7")      ──┘              │
//! │   > share               print share text                               │
//! │   > reset               back to configured defaults                    │
//! │   > quit / EOF          leave                                          │
//! │                                                                         │
//! │  A line that can't be used prints an error and leaves the state alone. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tip_core::share::share_text;
use tip_core::validation::{
    clamp_to_slider, parse_bill_amount, parse_tip_percentage, select_common_percentage,
};
use tip_core::{BillState, SplitSelection, OTHER_SELECTION};

use crate::commands::{pick_split, render_breakdown};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Help text printed by `help`.
pub const HELP: &str = "\
Commands:
  bill <amount>        set the bill amount (e.g. bill 49.50)
  tip <percent>        type a tip percentage (e.g. tip 17.5)
  preset <percent>     pick a common tip: 10, 15, 18, 20, 25
  slide <percent>      move the slider (1-50, whole percents)
  round on|off         round the grand total to a whole unit
  split <1-6>          pick a party size
  split other <n>      type a party size
  show                 print the current totals
  share                print the share text
  reset                start over
  help                 show this help
  quit                 leave";

// ===========================================================================
// Commands
// ===========================================================================

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    SetBill(String),
    SetTip(String),
    Preset(String),
    Slide(String),
    Round(bool),
    Split(SplitSelection),
    Show,
    Share,
    Reset,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parses an input line. Blank lines are `Show`.
    pub fn parse(line: &str) -> CliResult<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(SessionCommand::Show);
        };
        let rest: Vec<&str> = words.collect();
        let arg = rest.join(" ");

        let command = match verb.to_ascii_lowercase().as_str() {
            "bill" => SessionCommand::SetBill(arg),
            "tip" => SessionCommand::SetTip(arg),
            "preset" => SessionCommand::Preset(arg),
            "slide" => SessionCommand::Slide(arg),
            "round" => SessionCommand::Round(parse_switch(&arg)?),
            "split" => SessionCommand::Split(parse_split(&rest)),
            "show" => SessionCommand::Show,
            "share" => SessionCommand::Share,
            "reset" => SessionCommand::Reset,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => {
                return Err(CliError::validation(format!(
                    "Unknown command '{}' (type 'help')",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn parse_switch(arg: &str) -> CliResult<bool> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(CliError::validation("round expects 'on' or 'off'")),
    }
}

/// `split 3` picks a preset, `split other 7` types a size. Anything else
/// becomes whatever the picker would make of it.
fn parse_split(rest: &[&str]) -> SplitSelection {
    match rest {
        [first, tail @ ..] if first.eq_ignore_ascii_case(OTHER_SELECTION) => {
            pick_split(OTHER_SELECTION, &tail.join(" "))
        }
        _ => pick_split(&rest.join(" "), ""),
    }
}

// ===========================================================================
// Session
// ===========================================================================

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Print this and keep going.
    Render(String),

    /// Leave the loop.
    Quit,
}

/// An interactive bill being edited.
#[derive(Debug, Clone)]
pub struct Session {
    state: BillState,
    config: AppConfig,
}

impl Session {
    /// Starts from the configured defaults.
    pub fn new(config: AppConfig) -> Self {
        Session {
            state: config.initial_state(),
            config,
        }
    }

    /// Current bill state (read only).
    pub fn state(&self) -> &BillState {
        &self.state
    }

    /// Applies one command and returns what to print.
    ///
    /// A failed command leaves the state exactly as it was.
    pub fn apply(&mut self, command: SessionCommand) -> CliResult<Outcome> {
        debug!(?command, "session command");

        match command {
            SessionCommand::SetBill(raw) => {
                self.state.bill_amount = parse_bill_amount(&raw)?;
            }
            SessionCommand::SetTip(raw) => {
                self.state.tip_percentage = parse_tip_percentage(&raw)?;
            }
            SessionCommand::Preset(raw) => {
                let requested = parse_tip_percentage(&raw)?;
                self.state.tip_percentage = select_common_percentage(requested)?;
            }
            SessionCommand::Slide(raw) => {
                self.state.tip_percentage = clamp_to_slider(parse_tip_percentage(&raw)?);
            }
            SessionCommand::Round(on) => {
                self.state.round_to_nearest = on;
            }
            SessionCommand::Split(selection) => {
                self.state.split = selection;
            }
            SessionCommand::Show => {}
            SessionCommand::Share => {
                return Ok(Outcome::Render(share_text(
                    &self.state,
                    &self.state.breakdown(),
                    &self.config.currency_symbol,
                )));
            }
            SessionCommand::Reset => {
                self.state = self.config.initial_state();
            }
            SessionCommand::Help => return Ok(Outcome::Render(HELP.to_string())),
            SessionCommand::Quit => return Ok(Outcome::Quit),
        }

        Ok(Outcome::Render(self.render()))
    }

    /// Recomputes and renders the totals for the current state.
    pub fn render(&self) -> String {
        render_breakdown(&self.state, &self.state.breakdown(), &self.config)
    }
}

/// Runs the read-apply-print loop until `quit` or end of input.
pub fn run_session<R, W>(session: &mut Session, input: R, mut output: W) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    info!("Session started");
    writeln!(output, "{}\n", session.render())?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;

        let outcome = SessionCommand::parse(&line).and_then(|cmd| session.apply(cmd));
        match outcome {
            Ok(Outcome::Render(text)) => writeln!(output, "{}\n", text)?,
            Ok(Outcome::Quit) => {
                info!("Session ended");
                return Ok(());
            }
            Err(err) => {
                warn!(input = %line, error = %err.message, "Session input rejected");
                writeln!(output, "error: {}\n", err.message)?;
            }
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    info!("Session ended (end of input)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session() -> Session {
        Session::new(AppConfig::default())
    }

    fn run(script: &str) -> (Session, String) {
        let mut s = session();
        let mut out = Vec::new();
        run_session(&mut s, Cursor::new(script.to_string()), &mut out).unwrap();
        (s, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            SessionCommand::parse("bill $49.50").unwrap(),
            SessionCommand::SetBill("$49.50".to_string())
        );
        assert_eq!(SessionCommand::parse("ROUND on").unwrap(), SessionCommand::Round(true));
        assert_eq!(SessionCommand::parse("").unwrap(), SessionCommand::Show);
        assert_eq!(
            SessionCommand::parse("split 4").unwrap(),
            SessionCommand::Split(SplitSelection::Fixed(4))
        );
        assert_eq!(
            SessionCommand::parse("split other 7").unwrap(),
            SessionCommand::Split(SplitSelection::Other("7".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("split Other").unwrap(),
            SessionCommand::Split(SplitSelection::Other(String::new()))
        );
        assert!(SessionCommand::parse("round maybe").is_err());
        assert!(SessionCommand::parse("dance").is_err());
    }

    #[test]
    fn test_every_change_recomputes() {
        let mut s = session();

        s.apply(SessionCommand::SetBill("50".to_string())).unwrap();
        assert!((s.state().breakdown().total - 60.0).abs() < 1e-9);

        s.apply(SessionCommand::Preset("10".to_string())).unwrap();
        assert!((s.state().breakdown().total - 55.0).abs() < 1e-9);

        s.apply(SessionCommand::Split(SplitSelection::Fixed(5))).unwrap();
        assert!((s.state().breakdown().split_total - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejected_input_keeps_state() {
        let mut s = session();
        s.apply(SessionCommand::SetBill("40".to_string())).unwrap();

        assert!(s.apply(SessionCommand::SetBill("forty".to_string())).is_err());
        assert_eq!(s.state().bill_amount, 40.0);

        assert!(s.apply(SessionCommand::Preset("12".to_string())).is_err());
        assert_eq!(s.state().tip_percentage, 20.0);
    }

    #[test]
    fn test_oversized_bill_is_refused_not_shown_as_zero() {
        let (s, out) = run("bill 25\nbill 1e308\n");

        assert!(out.contains("error: bill amount cannot be larger than 1000000000"));
        assert_eq!(s.state().bill_amount, 25.0);
        assert!((s.state().breakdown().total - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_slide_snaps_to_slider() {
        let mut s = session();
        s.apply(SessionCommand::Slide("33.4".to_string())).unwrap();
        assert_eq!(s.state().tip_percentage, 33.0);

        s.apply(SessionCommand::Slide("90".to_string())).unwrap();
        assert_eq!(s.state().tip_percentage, 50.0);

        // Typed percentages are not clamped
        s.apply(SessionCommand::SetTip("90".to_string())).unwrap();
        assert_eq!(s.state().tip_percentage, 90.0);
    }

    #[test]
    fn test_bad_party_size_splits_for_one() {
        let mut s = session();
        s.apply(SessionCommand::SetBill("30".to_string())).unwrap();
        s.apply(SessionCommand::Split(SplitSelection::Other("lots".to_string())))
            .unwrap();

        let b = s.state().breakdown();
        assert_eq!(b.split_count, 1);
        assert!((b.split_total - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset() {
        let mut s = session();
        s.apply(SessionCommand::SetBill("30".to_string())).unwrap();
        s.apply(SessionCommand::Round(true)).unwrap();
        s.apply(SessionCommand::Reset).unwrap();
        assert_eq!(s.state(), &BillState::default());
    }

    #[test]
    fn test_run_session_script() {
        let (s, out) = run("bill 49.50\nround on\nsplit 2\nshare\nquit\nbill 1000\n");

        // Stopped at quit
        assert_eq!(s.state().bill_amount, 49.5);
        assert!(out.contains("Grand total:     $59.00 (rounded from $59.40)"));
        assert!(out.contains("Per person (2):  $29.50 total, $4.75 tip"));
        assert!(out.contains("Tip percentage: 19.2%"));
    }

    #[test]
    fn test_run_session_reports_errors_and_continues() {
        let (s, out) = run("bill abc\nbill 10\n");

        assert!(out.contains("error: bill amount has invalid format: 'abc' is not a number"));
        assert_eq!(s.state().bill_amount, 10.0);
    }

    #[test]
    fn test_run_session_eof_ends_cleanly() {
        let (_, out) = run("");
        assert!(out.starts_with("Bill:            $0.00"));
        assert!(out.ends_with("> "));
    }
}
