//! Implicant - Command Line Interface
//!
//! Parses a boolean expression, prints its truth table and the simplified
//! sum-of-products form.

use clap::{Parser, ValueEnum};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use implicant_logic::{analyze, AnalysisConfig, SumOfProducts};
use simplelog::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(val: LogLevel) -> Self {
        match val {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "implicant")]
#[command(about = "Truth tables and prime implicants for boolean expressions", long_about = None)]
#[command(version)]
struct Args {
    /// Expression to analyse, e.g. "a&b|!c"
    #[arg(short = 'e', long = "expression", value_name = "EXPR")]
    expression: Option<String>,

    /// Expression given as a positional argument
    #[arg(value_name = "EXPR", conflicts_with = "expression")]
    positional: Option<String>,

    /// Dump the parsed syntax tree
    #[arg(long = "show-ast")]
    show_ast: bool,

    /// Do not print the truth table
    #[arg(long = "no-table")]
    no_table: bool,

    /// Log verbosity
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level.into(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let input = args
        .expression
        .or(args.positional)
        .ok_or_else(|| eyre!("no expression given, use --expression <EXPR> or pass it as an argument"))?;

    let analysis = analyze(&input, &AnalysisConfig::default())?;

    if args.show_ast {
        println!("{:#?}", analysis.expr().ast());
        println!();
    }

    if let Some(explicit) = analysis.explicit_form() {
        println!("AST-Based expression reconstruction: {}", explicit);
        println!();
    }

    if !args.no_table {
        println!("{}", analysis.table());
    }

    let variables: Vec<String> = analysis.variables().iter().map(char::to_string).collect();
    println!("Variables: [{}]", variables.join(", "));

    let minterms: Vec<String> = analysis.minterms().iter().map(u64::to_string).collect();
    println!("Minterms: [{}]", minterms.join(", "));

    let primes: Vec<String> = analysis
        .prime_implicants()
        .iter()
        .map(|term| term.to_string())
        .collect();
    println!("Prime implicants: [{}]", primes.join(", "));

    if let Some(simplified) = analysis.simplified() {
        println!("Simplified: {}", simplified);
        if let SumOfProducts::Implicants { .. } = simplified {
            println!("Parseable: {}", simplified.to_parseable_string());
        }
    }

    Ok(())
}
