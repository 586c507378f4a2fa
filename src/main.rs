//! spending-reporter: federal agency spending dashboard
//!
//! Fetches the USAspending top-tier agency list and reports on budget
//! utilization, interactively or from the command line.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use spending_reporter::{
    cli::{self, OutputFormat, EXIT_ERROR, EXIT_SUCCESS},
    config::{self, AppConfig, ConfigOverrides, Validatable},
};
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spending-reporter")]
#[command(version)]
#[command(about = "Federal agency spending dashboard backed by the USAspending API", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  No data returned / nothing selected
    3  Error occurred

EXAMPLES:
    # Interactive dashboard
    spending-reporter

    # Print the first 15 agencies
    spending-reporter fetch

    # Summary for the Department of Agriculture
    spending-reporter summary --agency 012")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the top-tier agencies endpoint URL
    #[arg(long, global = true, env = "SPENDING_REPORTER_ENDPOINT")]
    endpoint: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Override the User-Agent header
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Override the number of rows shown in the data table
    #[arg(long, global = true)]
    rows: Option<usize>,

    /// Override the dashboard theme (dark, light, high-contrast)
    #[arg(long, global = true)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Dashboard,

    /// Fetch the agency list once and print it
    Fetch {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Fetch once and list selectable agencies as CODE<TAB>NAME
    Agencies,

    /// Fetch once and print the summary report for one agency
    Summary {
        /// Toptier code of the agency (e.g. 012)
        #[arg(short, long)]
        agency: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Clone, Copy, Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (defaults + file + flags)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .spending-reporter.yaml in the current directory
    Init,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout,
            row_limit: self.rows,
            theme: self.theme.clone(),
        }
    }

    /// Effective configuration; invalid values are reported together.
    fn effective_config(&self) -> Result<AppConfig> {
        let (mut config, loaded_from) = config::load_or_default(self.config.as_deref());
        if let Some(path) = &loaded_from {
            tracing::debug!("Loaded config from {}", path.display());
        }
        config.apply_overrides(&self.overrides());

        let errors = config.validate();
        if !errors.is_empty() {
            let listing = errors
                .iter()
                .map(|e| format!("  {e}"))
                .collect::<Vec<_>>()
                .join("\n");
            anyhow::bail!("invalid configuration:\n{listing}");
        }
        Ok(config)
    }
}

fn log_level(verbose: bool) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose { "debug" } else { "info" }.to_string()
    })
}

fn init_stderr_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level(verbose)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

/// The dashboard owns the terminal, so its logs go to a file.
fn init_file_logging(verbose: bool) -> Option<WorkerGuard> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("spending-reporter");
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "spending-reporter.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level(verbose)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .ok()?;

    tracing::info!(log_dir = %log_dir.display(), "dashboard logging initialized");
    Some(guard)
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Dashboard);

    // Keep the guard alive so buffered log lines are flushed before exit
    let log_guard = if matches!(command, Commands::Dashboard) {
        init_file_logging(cli.verbose)
    } else {
        init_stderr_logging(cli.verbose);
        None
    };

    let exit_code = run(&cli, &command).unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        EXIT_ERROR
    });

    drop(log_guard);
    std::process::exit(exit_code);
}

fn run(cli: &Cli, command: &Commands) -> Result<i32> {
    match command {
        Commands::Dashboard => cli::run_dashboard(&cli.effective_config()?),

        Commands::Fetch { output } => {
            let config = cli.effective_config()?;
            let client = cli::build_client(&config.api)?;
            cli::run_fetch(&client, *output, config.display.row_limit, &mut io::stdout())
        }

        Commands::Agencies => {
            let config = cli.effective_config()?;
            let client = cli::build_client(&config.api)?;
            cli::run_agencies(&client, &mut io::stdout())
        }

        Commands::Summary { agency } => {
            let config = cli.effective_config()?;
            let client = cli::build_client(&config.api)?;
            cli::run_summary(&client, agency, &mut io::stdout())
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "spending-reporter", &mut io::stdout());
            Ok(EXIT_SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(EXIT_SUCCESS)
        }

        Commands::Config { action } => run_config_action(cli, action),
    }
}

fn run_config_action(cli: &Cli, action: &ConfigAction) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (mut config, loaded_from) = config::load_or_default(cli.config.as_deref());
            config.apply_overrides(&cli.overrides());
            match &loaded_from {
                Some(path) => eprintln!("# Loaded from: {}", path.display()),
                None => eprintln!("# No config file found; showing defaults"),
            }
            for error in config.validate() {
                eprintln!("# Warning: {error}");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
            Ok(EXIT_SUCCESS)
        }
        ConfigAction::Path => {
            eprintln!("Config file search paths (in order):");
            for path in config::file::search_paths() {
                eprintln!("  {}", path.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in config::file::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
            Ok(EXIT_SUCCESS)
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".spending-reporter.yaml");
            if target.exists() {
                eprintln!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
                return Ok(EXIT_ERROR);
            }
            let content = config::generate_full_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
            Ok(EXIT_SUCCESS)
        }
    }
}
