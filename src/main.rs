use std::io::{stderr, stdout, BufWriter, Write};
use std::path::Path;
use std::process::exit;
use std::time::Instant;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use pocket_finance::actors::StoreActor;
use pocket_finance::aggregation::{Granularity, MonthlyTotals, Summary};
use pocket_finance::engine::{CsvImporter, PeriodReport, ReportEngine};
use pocket_finance::models::{Transaction, TransactionType};
use pocket_finance::storage::{TransactionStore, RECENT_TRANSACTIONS_LIMIT};

const DEMO_SOURCE: &str = "demo";
const TREND_MONTHS: usize = 6;

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: Positional arguments keep this a thin driver over the library; a richer CLI would reach for clap.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: pocket-finance [input.csv|demo] [week|month|year:optional] [YYYY-MM-DD:optional] [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let source = &args[1];
    let granularity = args.get(2)
        .map(|s| parse_granularity(s)).transpose()?.unwrap_or(Granularity::Month);
    let reference = args.get(3)
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d")).transpose()?;
    let log_level = args.get(4)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let actor = if source == DEMO_SOURCE {
        StoreActor::spawn(TransactionStore::with_demo_data())
    } else {
        let actor = StoreActor::spawn(TransactionStore::new());

        let timer = Instant::now();
        CsvImporter::new(actor.handle()).run(Path::new(source)).await?;
        let duration = timer.elapsed();

        info!("Imported transactions in: {duration:?}");

        actor
    };

    let engine = ReportEngine::builder().store(actor.handle()).build()?;

    let recent = engine.recent(RECENT_TRANSACTIONS_LIMIT).await?;
    let reference = reference
        .or_else(|| recent.first().map(|transaction| transaction.date().date()))
        .unwrap_or_else(|| Local::now().date_naive());

    let overall = engine.summary().await?;
    let report = engine.report(reference, granularity).await?;
    let trend = engine.trend(reference, TREND_MONTHS).await?;

    write_results_to_stdout(&overall, &recent, &report, &trend)?;

    actor.despawn().await?;

    Ok(())
}

fn parse_granularity(value: &str) -> Result<Granularity> {
    match value.to_lowercase().as_str() {
        "week" => Ok(Granularity::Week),
        "month" => Ok(Granularity::Month),
        "year" => Ok(Granularity::Year),
        _ => Err(anyhow!("Invalid period '{value}', expected week, month or year"))
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn signed_amount(transaction: &Transaction) -> String {
    match transaction.transaction_type() {
        TransactionType::Income => format!("+{}", transaction.amount()),
        TransactionType::Expense => format!("-{}", transaction.amount())
    }
}

fn write_summary(output: &mut impl Write, summary: &Summary, balance_label: &str) -> Result<()> {
    writeln!(output, "Income: {}", summary.income)?;
    writeln!(output, "Expenses: {}", summary.expenses)?;
    writeln!(output, "{balance_label}: {}", summary.balance)?;

    Ok(())
}

fn write_results_to_stdout(overall: &Summary, recent: &[Transaction], report: &PeriodReport, trend: &[MonthlyTotals]) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    write_summary(&mut output, overall, "Total balance")?;

    writeln!(output)?;
    writeln!(output, "Recent transactions")?;

    for transaction in recent {
        writeln!(
            output,
            "{}  {}  {}  {}",
            transaction.date().format("%Y-%m-%d %H:%M"),
            transaction.category(),
            transaction.description(),
            signed_amount(transaction)
        )?;
    }

    writeln!(output)?;
    writeln!(output, "{}", report.period.label())?;
    write_summary(&mut output, &report.summary, "Net amount")?;

    writeln!(output)?;
    writeln!(output, "Expenses by category")?;

    for share in report.shares() {
        writeln!(output, "{}: {} ({:.2}%)", share.category, share.total, share.percent)?;
    }

    for day in &report.days {
        writeln!(output)?;
        writeln!(output, "{}", day.heading())?;

        for transaction in &day.transactions {
            writeln!(
                output,
                "  {}  {}  {}  {}",
                transaction.date().format("%-I:%M %p"),
                transaction.category(),
                transaction.description(),
                signed_amount(transaction)
            )?;
        }
    }

    writeln!(output)?;
    writeln!(output, "Monthly trend")?;

    for month in trend {
        writeln!(output, "{}: income {}, expenses {}", month.period.label(), month.summary.income, month.summary.expenses)?;
    }

    output.flush()?;

    Ok(())
}
