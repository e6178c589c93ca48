use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use po2strings_cli::batch::run_batch_command;
use po2strings_cli::check::run_check_command;
use po2strings_cli::config::{CliConfig, ConversionFlags, DEFAULT_TABLE, load_config};
use po2strings_cli::convert::run_convert_command;
use po2strings_cli::logging::{level_for, setup_logger};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file; po2strings.toml in the current directory is used when present
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log progress to stderr (-vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a PO catalog into a .strings table.
    Convert {
        /// The PO catalog to convert
        #[arg(short, long)]
        input: String,
        /// The .strings file to write; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        flags: ConversionFlags,
    },

    /// Convert without writing and report problems in the catalog.
    Check {
        /// The PO catalog to check
        #[arg(short, long)]
        input: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Exit with an error when any problem was found
        #[arg(long)]
        strict: bool,
        #[command(flatten)]
        flags: ConversionFlags,
    },

    /// Convert many catalogs into a <lang>.lproj tree.
    Batch {
        /// Catalogs or glob patterns, e.g. 'po/*.po'; the language comes from the file name
        #[arg(short = 'i', long = "input", num_args = 1.., required = true)]
        inputs: Vec<String>,
        /// Directory receiving the .lproj folders
        #[arg(short, long)]
        output: String,
        /// Table name, i.e. the .strings file name inside each .lproj
        #[arg(long)]
        table: Option<String>,
        #[command(flatten)]
        flags: ConversionFlags,
    },

    /// Print a shell completion script.
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn run(args: Args) -> Result<(), String> {
    if let Commands::Completions { shell } = args.commands {
        let mut command = Args::command();
        clap_complete::generate(shell, &mut command, "po2strings", &mut std::io::stdout());
        return Ok(());
    }

    let config: CliConfig = load_config(args.config.as_deref())?;

    match args.commands {
        Commands::Convert {
            input,
            output,
            flags,
        } => {
            let options = flags.resolve(&config)?;
            run_convert_command(&input, output.as_deref(), &options)
        }
        Commands::Check {
            input,
            json,
            strict,
            flags,
        } => {
            let options = flags.resolve(&config)?;
            run_check_command(&input, &options, json, strict)
        }
        Commands::Batch {
            inputs,
            output,
            table,
            flags,
        } => {
            let options = flags.resolve(&config)?;
            let table = table
                .or_else(|| config.table.clone())
                .unwrap_or_else(|| DEFAULT_TABLE.to_string());
            run_batch_command(&inputs, &output, &table, &options)
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn main() {
    let args = Args::parse();
    let reports_diagnostics = matches!(args.commands, Commands::Check { .. });
    setup_logger(level_for(args.verbose, reports_diagnostics));

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
