use anyhow::Context;
use clap::{Args, ColorChoice, CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use freshsense::config::CliConfig;
use freshsense::engine::FuzzyEngine;
use freshsense::membership::FreshnessState;
use freshsense::recommend::recommendations;
use freshsense::rules::default_label_rules;
use freshsense::schema::{AnalysisRecord, AssessedDetection, DetectorResponse};
use is_terminal::IsTerminal;
use serde_json::json;
use std::io::{Read, stdout};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "freshsense",
    about = "Fruit freshness assessment utilities",
    arg_required_else_help = true
)]
struct Cli {
    /// Disable color
    #[arg(long = "no-color", global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess every prediction in a detector response
    Analyze(AnalyzeArgs),
    /// Assess a single detection given on the command line
    Score(ScoreArgs),
    /// Show the active rule tables
    Rules(RulesArgs),
}

#[derive(Args, Clone)]
struct AnalyzeArgs {
    /// Detector response JSON file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output the full analysis record as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct ScoreArgs {
    /// Detector confidence in [0, 1]
    #[arg(long)]
    confidence: f64,

    /// Classifier label (e.g. apple_fresh)
    #[arg(long)]
    label: String,

    /// Detected object name (e.g. apple)
    #[arg(long)]
    fruit: String,

    /// Output the assessment as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone)]
struct RulesArgs {
    /// Output the rule tables as JSON
    #[arg(long)]
    json: bool,
}

fn engine_from_config(config: &CliConfig) -> FuzzyEngine {
    match &config.rules.fruit_rules {
        Some(fruit_rules) => FuzzyEngine::with_rules(default_label_rules(), fruit_rules.clone()),
        None => FuzzyEngine::new(),
    }
}

fn state_colored(state: FreshnessState, color: bool) -> String {
    if !color {
        return state.to_string();
    }
    match state {
        FreshnessState::Fresh => state.to_string().green().to_string(),
        FreshnessState::Ripening => state.to_string().yellow().to_string(),
        FreshnessState::Overripe => state.to_string().magenta().to_string(),
        FreshnessState::Spoiled => state.to_string().red().to_string(),
    }
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

fn render_assessed(entry: &AssessedDetection, config: &CliConfig, color: bool, out: &mut String) {
    let detection = &entry.detection;
    let assessment = &entry.assessment;

    out.push_str(&format!(
        "  {} — {} (confidence {:.3})\n",
        entry.fruit_name, detection.label, detection.confidence
    ));
    out.push_str(&format!(
        "    verdict: {} [{}] (fuzzy confidence {:.3})\n",
        assessment.linguistic_description,
        state_colored(assessment.dominant_state, color),
        assessment.fuzzy_confidence
    ));

    if config.output.show_scores {
        out.push_str("    scores:\n");
        for state in FreshnessState::ALL {
            out.push_str(&format!(
                "      {} = {:.3}\n",
                state,
                assessment.membership_scores.get(state)
            ));
        }
    }

    if config.output.show_recommendations && !entry.recommendations.is_empty() {
        out.push_str("    recommendations:\n");
        for rec in &entry.recommendations {
            out.push_str(&format!("      - {}\n", rec));
        }
    }
}

fn render_record(record: &AnalysisRecord, config: &CliConfig, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&heading("Session:", color));
    out.push_str(&format!(" {}\n", record.session_id));
    out.push_str(&heading("Analyzed:", color));
    out.push_str(&format!(" {}\n", record.analyzed_at.to_rfc3339()));
    out.push_str(&heading("Detections:", color));
    out.push('\n');
    for entry in &record.detections {
        render_assessed(entry, config, color, &mut out);
    }
    out
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("failed to read stdin")?;
            Ok(body)
        }
    }
}

fn run_analyze(args: AnalyzeArgs, color: bool) -> Result<(), i32> {
    let config = CliConfig::load();
    let engine = engine_from_config(&config);

    let body = match read_input(args.input.as_ref()) {
        Ok(body) => body,
        Err(e) => {
            eprintln!("{:#}", e);
            return Err(2);
        }
    };

    let response = match DetectorResponse::from_json(&body) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("{}", e);
            return Err(2);
        }
    };

    let record = AnalysisRecord::build(&engine, &response);

    if args.json {
        match serde_json::to_string_pretty(&record) {
            Ok(s) => println!("{}", s),
            Err(_) => return Err(3),
        }
    } else {
        print!("{}", render_record(&record, &config, color));
    }
    Ok(())
}

fn run_score(args: ScoreArgs, color: bool) -> Result<(), i32> {
    if !args.confidence.is_finite() || !(0.0..=1.0).contains(&args.confidence) {
        eprintln!("confidence {} outside [0, 1]", args.confidence);
        return Err(2);
    }

    let config = CliConfig::load();
    let engine = engine_from_config(&config);
    let assessment = engine.assess(args.confidence, &args.label, &args.fruit);
    let recs = recommendations(&assessment, &args.fruit);

    if args.json {
        let v = json!({
            "assessment": assessment,
            "recommendations": recs,
        });
        match serde_json::to_string_pretty(&v) {
            Ok(s) => println!("{}", s),
            Err(_) => return Err(3),
        }
        return Ok(());
    }

    println!(
        "{} [{}] (fuzzy confidence {:.3})",
        assessment.linguistic_description,
        state_colored(assessment.dominant_state, color),
        assessment.fuzzy_confidence
    );
    if config.output.show_scores {
        for state in FreshnessState::ALL {
            println!("  {} = {:.3}", state, assessment.membership_scores.get(state));
        }
    }
    if config.output.show_recommendations {
        for rec in &recs {
            println!("  - {}", rec);
        }
    }
    Ok(())
}

fn run_rules(args: RulesArgs, color: bool) -> Result<(), i32> {
    let config = CliConfig::load();
    let engine = engine_from_config(&config);

    if args.json {
        let v = json!({
            "label_rules": engine.label_rules(),
            "fruit_rules": engine.fruit_rules(),
        });
        match serde_json::to_string_pretty(&v) {
            Ok(s) => println!("{}", s),
            Err(_) => return Err(3),
        }
        return Ok(());
    }

    println!("{}", heading("Label rules:", color));
    for rule in engine.label_rules() {
        println!(
            "  {} ({}) -> {}",
            rule.id,
            rule.patterns.join(", "),
            rule.primary
        );
    }
    println!("{}", heading("Fruit rules:", color));
    for rule in engine.fruit_rules() {
        let adjustments: Vec<String> = rule
            .multipliers
            .iter()
            .map(|m| format!("{} x{}", m.state, m.factor))
            .collect();
        println!(
            "  {} ({}) -> {}",
            rule.id,
            rule.patterns.join(", "),
            adjustments.join(", ")
        );
    }
    Ok(())
}

fn detect_color_choice() -> ColorChoice {
    // Scan args before clap so help/errors honor `--no-color`.
    // Mirror clap's parsing by stopping at `--` which terminates flags.
    let mut args = std::env::args_os();
    // Skip binary name
    args.next();
    let mut flag = false;
    for arg in args {
        if arg == "--" {
            break;
        }
        if arg == "--no-color" {
            flag = true;
            break;
        }
    }
    if flag || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

fn main() {
    let color_choice = detect_color_choice();
    let matches = Cli::command().color(color_choice).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let color = stdout().is_terminal() && !matches!(color_choice, ColorChoice::Never);

    let result = match cli.command {
        Some(Commands::Analyze(args)) => run_analyze(args, color),
        Some(Commands::Score(args)) => run_score(args, color),
        Some(Commands::Rules(args)) => run_rules(args, color),
        None => Ok(()),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
