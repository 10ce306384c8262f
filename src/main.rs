//! vpath - a command-line toolbox over the virtual path API.

use anyhow::Result;
use clap::{ColorChoice, Parser, Subcommand};
use owo_colors::OwoColorize;

/// POSIX-style path toolbox for slash-delimited virtual paths
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    color: ColorChoice,

    /// Document location the working directory is derived from
    #[arg(short = 'L', long, global = true, value_hint = clap::ValueHint::Url)]
    location: Option<String>,

    /// subcommands
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Collapse `.` and `..` segments and repeated slashes
    #[command(visible_alias = "n")]
    Normalize { path: String },

    /// Join path fragments and normalize the result
    #[command(visible_alias = "j")]
    Join { parts: Vec<String> },

    /// Resolve path fragments against the working directory
    #[command(visible_alias = "r")]
    Resolve { parts: Vec<String> },

    /// Relative path leading from one path to another
    Relative { from: String, to: String },

    /// Directory part of a path
    Dirname { path: String },

    /// Final path component, optionally with a suffix stripped
    Basename {
        path: String,

        /// Suffix to strip when the component ends with it
        #[arg(short = 'x', long)]
        strip: Option<String>,
    },

    /// Extension of the final path component
    Extname { path: String },

    /// Structural pieces of a path (root, dir, base, ext) as JSON
    Split {
        path: String,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Working directory derived from the document location
    Cwd,
}

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if let Some(location) = cli.location {
        vpath::set_location_source(move || location.clone());
    }

    if let Err(err) = run(cli.command) {
        eprintln!("{} {err:#}", "error:".bright_red().bold());
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    let out = match command {
        Commands::Normalize { path } => vpath::normalize(&path),
        Commands::Join { parts } => vpath::join(parts)?,
        Commands::Resolve { parts } => vpath::resolve(parts)?,
        Commands::Relative { from, to } => vpath::relative(&from, &to),
        Commands::Dirname { path } => vpath::dirname(&path),
        Commands::Basename { path, strip } => vpath::basename(&path, strip.as_deref()),
        Commands::Extname { path } => vpath::extname(&path),
        Commands::Split { path, pretty } => {
            let parts = vpath::split(&path);
            if pretty {
                serde_json::to_string_pretty(&parts)?
            } else {
                serde_json::to_string(&parts)?
            }
        }
        Commands::Cwd => vpath::current_dir(),
    };

    println!("{out}");
    Ok(())
}
