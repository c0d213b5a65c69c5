use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::PathBuf;

use calculator::config::{CalcConfig, OutputFormat};
use calculator::core::operation::Operation;
use calculator::{logging, output, Result};

#[derive(Parser)]
#[command(name = "calc")]
#[command(author = "Calculator Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Calculator - arithmetic from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(long, help = "Path to a JSON config file", global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Decimal places to print", global = true)]
    precision: Option<usize>,

    #[arg(short, long, value_enum, help = "Output format", global = true)]
    format: Option<FormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Add two numbers")]
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    #[command(about = "Subtract B from A", visible_alias = "sub")]
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    #[command(about = "Multiply two numbers", visible_alias = "mul")]
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    #[command(about = "Divide A by B", visible_alias = "div")]
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    #[command(about = "Raise BASE to EXPONENT", visible_alias = "pow")]
    Power {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: f64,
    },

    #[command(about = "Square root of N", visible_aliases = ["square_root", "square-root"])]
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        n: f64,
    },

    #[command(about = "PERCENT percent of VALUE", visible_alias = "percent")]
    Percentage {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },

    #[command(about = "Average of a list of numbers", visible_alias = "avg")]
    Average {
        #[arg(allow_negative_numbers = true, help = "Numbers to average")]
        numbers: Vec<f64>,
    },

    #[command(about = "List available operations")]
    List,
}

impl Commands {
    fn into_call(self) -> Option<(Operation, Vec<f64>)> {
        let call = match self {
            Commands::Add { a, b } => (Operation::Add, vec![a, b]),
            Commands::Subtract { a, b } => (Operation::Subtract, vec![a, b]),
            Commands::Multiply { a, b } => (Operation::Multiply, vec![a, b]),
            Commands::Divide { a, b } => (Operation::Divide, vec![a, b]),
            Commands::Power { base, exponent } => (Operation::Power, vec![base, exponent]),
            Commands::Sqrt { n } => (Operation::SquareRoot, vec![n]),
            Commands::Percentage { value, percent } => {
                (Operation::Percentage, vec![value, percent])
            }
            Commands::Average { numbers } => (Operation::Average, numbers),
            Commands::List => return None,
        };
        Some(call)
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("{} {}", "⚠".yellow(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CalcConfig::load_from(path)?,
        None => CalcConfig::load()?,
    };
    let config = config.with_overrides(cli.precision, cli.format.map(OutputFormat::from))?;

    let Some((operation, operands)) = cli.command.into_call() else {
        list_operations();
        return Ok(());
    };

    let evaluation = operation.evaluate(operands).map_err(|e| {
        logging::log_rejected_input(operation.name(), &e);
        e
    })?;
    logging::log_evaluation(&evaluation);

    println!("{}", output::render(&evaluation, &config)?);
    Ok(())
}

fn list_operations() {
    println!("{}", "Available operations:".blue().bold());
    for op in Operation::ALL {
        println!(
            "  {} {} ({})",
            "•".blue(),
            op.name().cyan(),
            op.arity().describe()
        );
    }
}
