//! Command-line interface implementation for Tron.
//! Provides argument parsing and help text formatting using clap.

use clap::{builder::NonEmptyStringValueParser, error::ErrorKind, Args as ClapArgs};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::TemplateKind;

/// Command-line arguments structure for Tron.
#[derive(Parser, Debug)]
#[command(author, version, about = "Tron: CLI scaffolding app", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Keep going when the template is missing or the project directory
    /// already exists, reporting the condition instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Configuration file (JSON or YAML) overriding the default directories
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the template trees
    #[arg(long, value_name = "DIR", global = true)]
    pub templates_dir: Option<PathBuf>,

    /// Scratch directory used while the project is assembled
    #[arg(long, value_name = "DIR", global = true)]
    pub staging_dir: Option<PathBuf>,

    /// Directory in which the new project is created
    #[arg(long, value_name = "DIR", global = true)]
    pub output_root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Creates new application template
    New {
        #[command(subcommand)]
        template: NewCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum NewCommand {
    /// Creates pure JS/CSS/HTML application.
    Basic(NameArgs),
    /// Creates new React application.
    ReactApp(NameArgs),
}

#[derive(ClapArgs, Debug)]
pub struct NameArgs {
    /// Adds an application's name.
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
}

impl NewCommand {
    pub fn kind(&self) -> TemplateKind {
        match self {
            NewCommand::Basic(_) => TemplateKind::Basic,
            NewCommand::ReactApp(_) => TemplateKind::ReactApp,
        }
    }

    pub fn app_name(&self) -> &str {
        match self {
            NewCommand::Basic(args) | NewCommand::ReactApp(args) => &args.name,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
