//! Command-line front end for set expressions.
//!
//! Run with: `cargo run --example venn -- eval "(A∪B)'∩C"`

use clap::{Parser, Subcommand};
use color_eyre::Result;
use venn_sets::universe::STANDARD;
use venn_sets::{are_expressions_equivalent, describe_set, parse_expr, token, try_parse};

#[derive(Parser)]
#[command(author, version, about = "Evaluate set expressions over a three-set Venn diagram")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print its regions
    Eval {
        /// Expression, e.g. "(A∪B)'∩C"
        expr: String,
    },

    /// Check whether two expressions denote the same set
    Equiv {
        /// First expression
        expr_a: String,
        /// Second expression
        expr_b: String,
    },

    /// Print the token stream of an expression
    Tokens { expr: String },

    /// Print the parsed syntax tree of an expression
    Ast { expr: String },

    /// Print each region of the result with the sets containing it
    Regions { expr: String },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    match cli.command {
        Commands::Eval { expr } => {
            let regions = try_parse(&expr)?;
            println!("{}", describe_set(&regions));
        }
        Commands::Equiv { expr_a, expr_b } => {
            let equivalent = are_expressions_equivalent(&expr_a, &expr_b);
            println!("{} {} {}", expr_a, if equivalent { "≡" } else { "≢" }, expr_b);
        }
        Commands::Tokens { expr } => {
            for t in token::tokenize(&expr)? {
                println!("{:>3}  {}", t.offset, t.kind);
            }
        }
        Commands::Ast { expr } => {
            let ast = parse_expr(&expr)?;
            println!("{:#?}", ast);
            println!("{}", ast);
        }
        Commands::Regions { expr } => {
            let regions = try_parse(&expr)?;
            log::info!("{} covers {} region(s)", expr, regions.len());
            for region in regions {
                // Every evaluated region belongs to the universe.
                let sets = STANDARD.sets_containing(region).unwrap_or_default();
                let label = if sets.is_empty() {
                    "outside A, B, C".to_string()
                } else {
                    sets.iter().map(char::to_string).collect::<Vec<_>>().join("∩")
                };
                println!("{}  {}", region, label);
            }
        }
    }

    Ok(())
}
