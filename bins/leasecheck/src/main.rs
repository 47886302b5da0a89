use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use leasecheck_core::config::AppConfig;
use leasecheck_core::utils::{now_ms, parse_amount, parse_amount_clamped};
use leasecheck_core::{ContractType, ScanInput};
use leasecheck_intake::{Geocoder, PlainTextExtractor, StaticGeocoder, TextExtractor};
use leasecheck_risk::{classify, RiskScorer, ScanReport};
use leasecheck_session::{apply_event, SessionEvent, SessionId, SessionStore};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "leasecheck", version, about = "Rent deposit risk scan")]
struct Cli {
    #[arg(short, long, global = true, default_value = "config/leasecheck.toml")]
    config: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Scan {
        #[arg(long, value_parser = clamped_amount, allow_negative_numbers = true)]
        deposit: u64,
        #[arg(
            long,
            value_parser = clamped_amount,
            allow_negative_numbers = true,
            default_value = "0"
        )]
        rent: u64,
        #[arg(long, value_parser = contract_type)]
        contract: ContractType,
        #[arg(long, conflicts_with = "memo_file")]
        memo: Option<String>,
        #[arg(long)]
        memo_file: Option<PathBuf>,
        #[arg(long, value_parser = amount)]
        market_price: Option<u64>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        json: bool,
    },
    Classify {
        #[arg(long)]
        score: u32,
    },
    Replay {
        #[arg(short, long, default_value = "samples/sessions.json")]
        file: PathBuf,
    },
    PrintConfig,
}

fn amount(raw: &str) -> Result<u64, String> {
    parse_amount(raw).map_err(|e| e.to_string())
}

fn clamped_amount(raw: &str) -> Result<u64, String> {
    parse_amount_clamped(raw).map_err(|e| e.to_string())
}

fn contract_type(raw: &str) -> Result<ContractType, String> {
    ContractType::parse(raw).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(&cli.config)?;
    init_tracing(&cfg.observability.log_level);
    match cli.command {
        Commands::Scan {
            deposit,
            rent,
            contract,
            memo,
            memo_file,
            market_price,
            address,
            json,
        } => {
            let memo = match memo_file {
                Some(path) => Some(
                    PlainTextExtractor
                        .extract_file(&path)
                        .with_context(|| format!("reading memo from {}", path.display()))?,
                ),
                None => memo,
            };
            let scorer = RiskScorer::new(&cfg.scan);
            let input = ScanInput::new(deposit, rent, contract, memo.as_deref());
            let report = scorer.report(input, market_price);
            let location = address.as_deref().and_then(|addr| {
                let point = StaticGeocoder::new().locate(addr);
                if point.is_none() {
                    warn!(address = addr, "address not resolved");
                }
                point
            });
            if json {
                let out = ScanOutput {
                    report: &report,
                    location,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_report(&report);
                if let Some(point) = location {
                    println!(
                        "location: {} ({:.4}, {:.4})",
                        point.district, point.latitude, point.longitude
                    );
                }
            }
        }
        Commands::Classify { score } => {
            let classification = classify(score.min(100));
            println!("{}: {}", classification.tier, classification.advisory);
        }
        Commands::Replay { file } => {
            let data = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let events: Vec<SessionEvent> = serde_json::from_str(&data)?;
            let scorer = RiskScorer::new(&cfg.scan);
            let mut store = SessionStore::new(&cfg.session);
            let mut sessions = BTreeSet::new();
            let now = now_ms();
            for event in events {
                let session = event.session().clone();
                match apply_event(&mut store, &scorer, event, now) {
                    Ok(outcome) => info!(%session, ?outcome, "event applied"),
                    Err(err) => warn!(%session, %err, "event rejected"),
                }
                sessions.insert(session);
            }
            let summaries: Vec<_> = sessions
                .iter()
                .filter_map(|id: &SessionId| store.summary(id, now))
                .collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        Commands::PrintConfig => {
            let json = serde_json::to_string_pretty(&cfg)?;
            println!("{json}");
        }
    }

    info!("done");
    Ok(())
}

#[derive(Serialize)]
struct ScanOutput<'a> {
    #[serde(flatten)]
    report: &'a ScanReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<leasecheck_intake::GeoPoint>,
}

fn print_report(report: &ScanReport) {
    println!("score: {}/100", report.result.score);
    println!(
        "tier: {} ({})",
        report.classification.tier, report.classification.advisory
    );
    if report.result.detected_issues.is_empty() {
        println!("issues: none");
    } else {
        let issues: Vec<&str> = report.result.issues().collect();
        println!("issues: {}", issues.join(", "));
    }
    if let Some(ratio) = report.deposit_ratio {
        println!("deposit ratio: {:.1}% ({:?})", ratio.percent, ratio.band);
    }
}

fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(value) => EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        Err(_) => EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
