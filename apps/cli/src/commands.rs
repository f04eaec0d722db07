//! # Commands
//!
//! One function per `tip50` subcommand. Each returns the text to print so it
//! can be tested without capturing stdout.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tip50 compute --bill 49.50 --round                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  BillArgs::to_state(config) ──► BillState                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  state.breakdown() ───────────► TipBreakdown   (tip-core engine)       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  render_breakdown / JSON ─────► String ──► stdout                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use tip_core::share::{format_percentage, share_text};
use tip_core::validation::parse_split_count;
use tip_core::{
    resolve_split_count, BillState, SplitSelection, TipBreakdown, COMMON_TIP_PERCENTAGES,
    OTHER_SELECTION, SPLIT_PRESETS, TIP_SLIDER_MAX, TIP_SLIDER_MIN,
};

use crate::cli::BillArgs;
use crate::config::AppConfig;
use crate::error::CliResult;

/// Compute response including the inputs and the derived figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResponse {
    pub state: BillState,
    pub breakdown: TipBreakdown,
}

impl From<&BillState> for ComputeResponse {
    fn from(state: &BillState) -> Self {
        ComputeResponse {
            state: state.clone(),
            breakdown: state.breakdown(),
        }
    }
}

/// Share response for `--json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub text: String,
}

/// Split response for `--json`. `selection` is the normalized picker tag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResponse {
    pub selection: String,
    pub other: String,
    pub split_count: u32,
}

/// Presets response for `--json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetsResponse {
    pub tip_percentages: Vec<u32>,
    pub slider_min: f64,
    pub slider_max: f64,
    pub split_options: Vec<String>,
}

// ===========================================================================
// Subcommands
// ===========================================================================

/// `tip50 compute`
pub fn compute(args: &BillArgs, config: &AppConfig, json: bool) -> CliResult<String> {
    let state = args.to_state(config)?;
    debug!(?state, "compute command");

    if json {
        return Ok(serde_json::to_string_pretty(&ComputeResponse::from(&state))?);
    }

    Ok(render_breakdown(&state, &state.breakdown(), config))
}

/// `tip50 share`
pub fn share(args: &BillArgs, config: &AppConfig, json: bool) -> CliResult<String> {
    let state = args.to_state(config)?;
    debug!(?state, "share command");

    let text = share_text(&state, &state.breakdown(), &config.currency_symbol);
    if json {
        return Ok(serde_json::to_string_pretty(&ShareResponse { text })?);
    }

    Ok(text)
}

/// `tip50 split`
pub fn split(selection: &str, other: &str, json: bool) -> CliResult<String> {
    debug!(selection, other, "split command");
    let split_count = resolve_split_count(selection, other);
    let picked = pick_split(selection, other);

    if json {
        return Ok(serde_json::to_string_pretty(&SplitResponse {
            selection: picked.tag(),
            other: other.to_string(),
            split_count,
        })?);
    }

    Ok(split_count.to_string())
}

/// `tip50 presets`
pub fn presets(json: bool) -> CliResult<String> {
    debug!("presets command");
    let split_options: Vec<String> = SPLIT_PRESETS
        .iter()
        .map(|n| n.to_string())
        .chain(std::iter::once(OTHER_SELECTION.to_string()))
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&PresetsResponse {
            tip_percentages: COMMON_TIP_PERCENTAGES.to_vec(),
            slider_min: TIP_SLIDER_MIN,
            slider_max: TIP_SLIDER_MAX,
            split_options,
        })?);
    }

    let tips: Vec<String> = COMMON_TIP_PERCENTAGES
        .iter()
        .map(|p| format!("{}%", p))
        .collect();

    Ok(format!(
        "Common tip percentages: {}\nTip slider: {}% to {}%\nSplit options: {}",
        tips.join(", "),
        TIP_SLIDER_MIN,
        TIP_SLIDER_MAX,
        split_options.join(", ")
    ))
}

/// `tip50 config`
pub fn show_config(config: &AppConfig, json: bool) -> CliResult<String> {
    debug!("config command");
    if json {
        return Ok(serde_json::to_string_pretty(config)?);
    }

    Ok(toml::to_string_pretty(config)?)
}

// ===========================================================================
// Rendering
// ===========================================================================

/// Human-readable breakdown used by `compute` and the session.
///
/// ```text
/// Bill:            $49.50
/// Tip:             $9.50 (20.0% selected, 19.2% effective)
/// Grand total:     $59.00 (rounded from $59.40)
/// Per person (2):  $29.50 total, $4.75 tip
/// ```
pub fn render_breakdown(state: &BillState, breakdown: &TipBreakdown, config: &AppConfig) -> String {
    let money = |amount: f64| config.format_currency(amount);

    let mut lines = vec![
        format!("Bill:            {}", money(state.bill_amount)),
        format!(
            "Tip:             {} ({}% selected, {}% effective)",
            money(breakdown.tip),
            format_percentage(state.tip_percentage),
            format_percentage(breakdown.effective_tip_percentage)
        ),
    ];

    if state.round_to_nearest && breakdown.total != breakdown.unrounded_total {
        lines.push(format!(
            "Grand total:     {} (rounded from {})",
            money(breakdown.total),
            money(breakdown.unrounded_total)
        ));
    } else {
        lines.push(format!("Grand total:     {}", money(breakdown.total)));
    }

    if breakdown.split_count > 1 {
        lines.push(format!(
            "Per person ({}):  {} total, {} tip",
            breakdown.split_count,
            money(breakdown.split_total),
            money(breakdown.split_tip)
        ));
    }

    lines.join("\n")
}

/// Builds the split selection from raw picker text.
///
/// Logs when neither the picker tag nor the "Other" text names a party size
/// and one person is assumed.
pub fn pick_split(selection: &str, other: &str) -> SplitSelection {
    if !split_is_readable(selection, other) {
        warn!(selection, other, "Party size not understood, splitting for 1 person");
    }
    SplitSelection::from_picker(selection, other)
}

/// Whether the picker text resolves to a party size without falling back.
pub fn split_is_readable(selection: &str, other: &str) -> bool {
    let raw = if selection == OTHER_SELECTION {
        other
    } else {
        selection
    };
    parse_split_count(raw).is_some()
}
