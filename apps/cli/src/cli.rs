//! # Command Line Definition
//!
//! ```text
//! tip50 [--config <PATH>] [--json] <COMMAND>
//!
//!   compute  --bill <AMT> [--tip <PCT>] [--round[=true|false]] [--split <SEL>] [--other <N>]
//!   share    (same arguments as compute)
//!   split    <SELECTION> [OTHER]
//!   presets
//!   config
//!   session
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use tip_core::validation::{parse_bill_amount, parse_tip_percentage};
use tip_core::BillState;

use crate::commands::pick_split;
use crate::config::AppConfig;
use crate::error::CliResult;

// ===========================================================================
// CLI definition
// ===========================================================================

#[derive(Debug, Parser)]
#[command(
    name = "tip50",
    version,
    about = "Work out the tip, grand total and per-person split for a bill"
)]
pub struct Cli {
    /// Path to a TOML config file (overrides TIP50_CONFIG).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute tip, total and per-person shares.
    Compute(BillArgs),

    /// Print the shareable text summary.
    Share(BillArgs),

    /// Resolve a split picker value to a party size.
    Split {
        /// Picker value: 1-6 or "Other".
        selection: String,
        /// Party size typed after choosing "Other".
        #[arg(default_value = "")]
        other: String,
    },

    /// List quick-pick tip percentages and split presets.
    Presets,

    /// Print the effective configuration.
    Config,

    /// Interactive session: edit the bill and watch totals update.
    Session,
}

/// Bill inputs shared by `compute` and `share`.
#[derive(Debug, Clone, Args)]
pub struct BillArgs {
    /// Bill amount, e.g. 49.50 or $49.50.
    #[arg(long, short)]
    pub bill: String,

    /// Tip percentage, e.g. 18 or 18%. Defaults to the configured tip.
    #[arg(long, short)]
    pub tip: Option<String>,

    /// Round the grand total to the nearest whole currency unit.
    /// `--round=false` switches off rounding turned on in the config.
    #[arg(long, short, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub round: Option<bool>,

    /// Split picker value: 1-6 or "Other". Defaults to the configured split.
    #[arg(long, short)]
    pub split: Option<String>,

    /// Party size when --split is "Other".
    #[arg(long, default_value = "")]
    pub other: String,
}

impl BillArgs {
    /// Builds the bill state these arguments describe.
    ///
    /// The bill and tip must parse; the split never fails (bad input means
    /// one person). Flags win over configured defaults.
    pub fn to_state(&self, config: &AppConfig) -> CliResult<BillState> {
        let bill_amount = parse_bill_amount(&self.bill)?;
        let tip_percentage = match &self.tip {
            Some(raw) => parse_tip_percentage(raw)?,
            None => config.default_tip_percentage,
        };
        let selection = self.split.as_deref().unwrap_or(&config.default_split);

        Ok(BillState::new(bill_amount, tip_percentage)
            .with_rounding(self.round.unwrap_or(config.round_to_nearest))
            .with_split(pick_split(selection, &self.other)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tip_core::SplitSelection;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tip50").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_compute_args() {
        let cli = parse(&["compute", "--bill", "49.50", "--tip", "20", "--round"]);
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };

        let state = args.to_state(&AppConfig::default()).unwrap();
        assert_eq!(state.bill_amount, 49.5);
        assert_eq!(state.tip_percentage, 20.0);
        assert!(state.round_to_nearest);
        assert_eq!(state.split_count(), 1);
    }

    #[test]
    fn test_other_split_args() {
        let cli = parse(&["share", "-b", "80", "--split", "Other", "--other", "9", "--json"]);
        assert!(cli.json);
        let Command::Share(args) = cli.command else {
            panic!("expected share");
        };

        let state = args.to_state(&AppConfig::default()).unwrap();
        assert_eq!(state.split, SplitSelection::Other("9".to_string()));
        assert_eq!(state.split_count(), 9);
    }

    #[test]
    fn test_defaults_come_from_config() {
        let config = AppConfig {
            default_tip_percentage: 15.0,
            round_to_nearest: true,
            default_split: "3".to_string(),
            ..AppConfig::default()
        };
        let cli = parse(&["compute", "--bill", "30"]);
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };

        let state = args.to_state(&config).unwrap();
        assert_eq!(state.tip_percentage, 15.0);
        assert!(state.round_to_nearest);
        assert_eq!(state.split_count(), 3);
    }

    #[test]
    fn test_round_flag_overrides_config() {
        let config = AppConfig {
            round_to_nearest: true,
            ..AppConfig::default()
        };

        let cli = parse(&["compute", "--bill", "49.50", "--round=false"]);
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(args.round, Some(false));
        let state = args.to_state(&config).unwrap();
        assert!(!state.round_to_nearest);
        assert!((state.breakdown().total - 59.4).abs() < 1e-9);

        let cli = parse(&["compute", "--bill", "49.50", "--round", "--tip", "18"]);
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(args.round, Some(true));
        assert!(args.to_state(&AppConfig::default()).unwrap().round_to_nearest);

        let cli = parse(&["compute", "--bill", "49.50"]);
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(args.round, None);
        assert!(args.to_state(&config).unwrap().round_to_nearest);
    }

    #[test]
    fn test_unreadable_split_tag_means_one_person() {
        let cli = parse(&["compute", "--bill", "30", "--split", "lots"]);
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };
        assert_eq!(args.to_state(&AppConfig::default()).unwrap().split_count(), 1);
    }

    #[test]
    fn test_bad_bill_is_validation_error() {
        let cli = parse(&["compute", "--bill", "lots"]);
        let Command::Compute(args) = cli.command else {
            panic!("expected compute");
        };

        let err = args.to_state(&AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_split_command_other_defaults_empty() {
        let cli = parse(&["split", "Other"]);
        match cli.command {
            Command::Split { selection, other } => {
                assert_eq!(selection, "Other");
                assert_eq!(other, "");
            }
            _ => panic!("expected split"),
        }
    }
}
