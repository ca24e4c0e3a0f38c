use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::TradeRecord;
use prop_firm::{PhaseEvaluator, PhaseStatus};
use rust_decimal::Decimal;
use scoring::ZellaScore;
use statistics::{StatisticsEngine, StatisticsReport};

/// The main entry point for the tradelytics CLI.
fn main() {
    // Route engine diagnostics through the standard RUST_LOG filter.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Report(args) => handle_report(args),
        Commands::Evaluate(args) => handle_evaluate(args),
    };
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Journal statistics and prop-firm evaluation over exported trades.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the statistics report and Zella score for a trade export.
    Report(ReportArgs),
    /// Evaluate a trade export against a configured prop-firm phase.
    Evaluate(EvaluateArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// Path to a JSON trade export: an array of
    /// `{"pnl": ..., "commission": ..., "entry_date": "..."}` objects.
    #[arg(long)]
    trades: PathBuf,
}

#[derive(Parser)]
struct EvaluateArgs {
    /// Path to a JSON trade export (same format as `report`).
    #[arg(long)]
    trades: PathBuf,

    /// The phase to evaluate against, by its configured name.
    /// Defaults to the first phase in the configuration.
    #[arg(long)]
    phase: Option<String>,

    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn load_trades(path: &PathBuf) -> anyhow::Result<Vec<TradeRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read trade export {}", path.display()))?;
    let trades: Vec<TradeRecord> =
        serde_json::from_str(&raw).context("failed to parse trade export")?;
    tracing::info!(trades = trades.len(), "loaded trade export");
    Ok(trades)
}

/// Handles the `report` command: full statistics plus the composite score.
fn handle_report(args: ReportArgs) -> anyhow::Result<()> {
    let trades = load_trades(&args.trades)?;
    let report = StatisticsEngine::new().calculate(&trades, Utc::now());
    let score = ZellaScore::from_report(&report);

    println!("{}", statistics_table(&report));
    println!("{}", score_table(&score));
    Ok(())
}

/// Handles the `evaluate` command: breach detection and phase progression.
fn handle_evaluate(args: EvaluateArgs) -> anyhow::Result<()> {
    let config = configuration::load_config_from(&args.config.to_string_lossy())?;
    let rules = match &args.phase {
        Some(name) => config
            .phase(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no phase named '{name}' in configuration"))?,
        None => config.phases[0].clone(),
    };
    let trades = load_trades(&args.trades)?;

    let evaluator = PhaseEvaluator::new(config.account.account_size, rules)?;
    let evaluation = evaluator.evaluate(&trades);

    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Phase".to_string(), format!("{:?}", evaluation.phase)]);
    table.add_row(vec![
        "Status".to_string(),
        format!("{:?}", evaluation.status),
    ]);
    table.add_row(vec![
        "Ending balance".to_string(),
        evaluation.ending_balance.to_string(),
    ]);
    table.add_row(vec![
        "Net profit".to_string(),
        evaluation.net_profit.to_string(),
    ]);
    table.add_row(vec![
        "Max drawdown used".to_string(),
        evaluation.max_drawdown_used.to_string(),
    ]);
    table.add_row(vec![
        "Trading days".to_string(),
        evaluation.trading_days.to_string(),
    ]);
    if let Some(target) = evaluation.profit_target {
        let progress = evaluation
            .target_progress_pct
            .unwrap_or(Decimal::ZERO);
        table.add_row(vec![
            "Profit target".to_string(),
            format!("{target} ({progress}% reached)"),
        ]);
    }
    if let Some(breach) = &evaluation.breach {
        table.add_row(vec![
            "Breach".to_string(),
            format!(
                "{:?} on {}: lost {} against a {} limit",
                breach.kind, breach.date, breach.loss, breach.limit
            ),
        ]);
    }
    table.add_row(vec![
        "Payout eligible".to_string(),
        evaluation.payout_eligible.to_string(),
    ]);
    if evaluation.status == PhaseStatus::Passed {
        if let Some(next) = evaluation.next_phase {
            table.add_row(vec!["Advances to".to_string(), format!("{next:?}")]);
        }
    }
    println!("{table}");
    Ok(())
}

// ==============================================================================
// Rendering
// ==============================================================================

fn statistics_table(report: &StatisticsReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Total trades".to_string(),
        report.total_trades.to_string(),
    ]);
    table.add_row(vec![
        "Win / loss / breakeven".to_string(),
        format!(
            "{} / {} / {}",
            report.winning_trades, report.losing_trades, report.break_even_trades
        ),
    ]);
    table.add_row(vec![
        "Win rate".to_string(),
        format!("{}%", report.win_rate_pct),
    ]);
    table.add_row(vec![
        "Net profit".to_string(),
        report.net_profit.to_string(),
    ]);
    table.add_row(vec![
        "Gross profit / loss".to_string(),
        format!("{} / {}", report.gross_profit, report.gross_loss),
    ]);
    table.add_row(vec![
        "Profit factor".to_string(),
        match report.profit_factor {
            Some(pf) => pf.to_string(),
            None => "inf".to_string(),
        },
    ]);
    table.add_row(vec![
        "Average win / loss".to_string(),
        format!("{} / {}", report.average_win, report.average_loss),
    ]);
    table.add_row(vec![
        "Risk/reward".to_string(),
        report.risk_reward_ratio.to_string(),
    ]);
    table.add_row(vec![
        "Biggest win / loss".to_string(),
        format!("{} / {}", report.biggest_win, report.biggest_loss),
    ]);
    table.add_row(vec![
        "Max drawdown".to_string(),
        format!("{} ({}%)", report.max_drawdown, report.max_drawdown_pct),
    ]);
    table.add_row(vec![
        "Recovery factor".to_string(),
        report.recovery_factor.to_string(),
    ]);
    table.add_row(vec![
        "Trade streak (cur/best/worst)".to_string(),
        format!(
            "{} / {} / {}",
            report.trade_streaks.current, report.trade_streaks.best_win, report.trade_streaks.worst_loss
        ),
    ]);
    table.add_row(vec![
        "Day streak (cur/best/worst)".to_string(),
        format!(
            "{} / {} / {}",
            report.day_streaks.current, report.day_streaks.best_win, report.day_streaks.worst_loss
        ),
    ]);
    table.add_row(vec![
        "Consistency".to_string(),
        report.consistency_score.to_string(),
    ]);
    table
}

fn score_table(score: &ZellaScore) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Zella Score Component", "Input", "Sub-score"]);
    table.add_row(vec![
        "Avg win/loss (20%)".to_string(),
        score.inputs.avg_win_loss_ratio.to_string(),
        score.sub_scores.avg_win_loss.to_string(),
    ]);
    table.add_row(vec![
        "Win percentage (15%)".to_string(),
        score.inputs.win_percentage.to_string(),
        score.sub_scores.win_percentage.to_string(),
    ]);
    table.add_row(vec![
        "Max drawdown (20%)".to_string(),
        score.inputs.max_drawdown_pct.to_string(),
        score.sub_scores.max_drawdown.to_string(),
    ]);
    table.add_row(vec![
        "Profit factor (25%)".to_string(),
        score
            .inputs
            .profit_factor
            .map_or("inf".to_string(), |pf| pf.to_string()),
        score.sub_scores.profit_factor.to_string(),
    ]);
    table.add_row(vec![
        "Recovery factor (10%)".to_string(),
        score.inputs.recovery_factor.to_string(),
        score.sub_scores.recovery_factor.to_string(),
    ]);
    table.add_row(vec![
        "Consistency (10%)".to_string(),
        score.inputs.consistency_score.to_string(),
        score.sub_scores.consistency.to_string(),
    ]);
    table.add_row(vec![
        "Overall".to_string(),
        String::new(),
        score.overall_score.to_string(),
    ]);
    table
}
