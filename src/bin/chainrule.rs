//! chainrule command-line host
//!
//! Runs forward or backward chaining against the built-in animal knowledge
//! base. Rule edits given on the command line apply to this invocation only.

use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chainrule::{
    BackwardEngine, BackwardResult, ChainResult, FactSet, ForwardEngine, ForwardResult, RuleStore,
    RuleSyntax,
};

#[derive(Debug, Parser)]
#[command(name = "chainrule", version, about = "Animal identification by production rules")]
struct Cli {
    /// Add a rule line ("premise premise，conclusion") before running the command.
    #[arg(long = "add", value_name = "LINE", global = true)]
    add: Vec<String>,

    /// Remove the rule listed as number N (1-based) before running the command.
    #[arg(long = "remove", value_name = "N", global = true)]
    remove: Vec<NonZeroUsize>,

    /// Separator between premises and conclusion in rule lines.
    #[arg(long, value_name = "CHAR", global = true)]
    separator: Option<char>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the rule store.
    Rules,
    /// List observable features and their numbers.
    Features,
    /// Derive conclusions from observed features (labels or numbers).
    Forward {
        /// Observed features.
        #[arg(required = true)]
        facts: Vec<String>,
    },
    /// Find the base features needed to prove a goal.
    Prove {
        /// Goal fact, e.g. 斑马.
        goal: String,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_store(cli: &Cli) -> ChainResult<RuleStore> {
    let syntax = cli
        .separator
        .map_or_else(RuleSyntax::default, RuleSyntax::with_separator);
    let mut store = RuleStore::seeded().with_syntax(syntax);

    for line in &cli.add {
        store.add_line(line)?;
    }
    for number in &cli.remove {
        store.remove_at(number.get() - 1)?;
    }
    Ok(store)
}

fn print_forward(result: &ForwardResult) {
    let initial: Vec<&str> = result.initial.iter().map(|f| f.as_str()).collect();
    println!("=== Forward chaining ===");
    println!("Initial facts: {}", initial.join(" ∧ "));
    for step in &result.trace {
        println!("Applied: {step}");
    }
    println!();
    match &result.classification {
        Some(animal) => println!("Result: {animal}"),
        None => {
            let intermediates: Vec<&str> =
                result.intermediates().iter().map(|f| f.as_str()).collect();
            println!("No animal identified");
            println!("Intermediate conclusions: {}", intermediates.join(" ∧ "));
        }
    }
}

fn print_backward(result: &BackwardResult) {
    println!("=== Backward chaining: {} ===", result.goal);
    for step in &result.trace {
        println!("Needs: {step}");
    }
    for goal in &result.unresolved {
        println!("No rule concludes '{goal}'");
    }
    println!();
    if result.required.is_empty() {
        println!("Cannot determine the features needed to prove '{}'", result.goal);
    } else {
        println!("To prove '{}' these features are needed:", result.goal);
        for fact in result.required_facts() {
            println!(" - {fact}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = build_store(&cli).context("cannot apply rule edits")?;

    match &cli.command {
        Command::Rules => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(store.rules())?);
            } else {
                for line in store.render_listing() {
                    println!("{line}");
                }
            }
        }
        Command::Features => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(store.vocabulary())?);
            } else {
                for feature in store.vocabulary().features() {
                    println!("{:>2}: {}", feature.key, feature.label);
                }
            }
        }
        Command::Forward { facts } => {
            let vocabulary = store.vocabulary();
            let observed = facts
                .iter()
                .map(|t| vocabulary.observe(t))
                .collect::<Result<FactSet, _>>()
                .context("observed facts must be base features (see `chainrule features`)")?;
            let result = ForwardEngine::new(&store).run(&observed)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_forward(&result);
            }
        }
        Command::Prove { goal } => {
            let result = BackwardEngine::new(&store).prove(goal.trim());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_backward(&result);
            }
        }
    }

    Ok(())
}
