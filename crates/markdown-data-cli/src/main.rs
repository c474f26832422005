use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use markdown_data_config::Config;
use markdown_data_engine::{
    Outline, RenderOptions, Selector, from_json, inspect, json, parse, parse_located, render,
    select, to_json_string,
};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "m2d")]
#[command(author, version)]
#[command(about = "Convert markdown building blocks to JSON and back")]
#[command(after_help = "\
EXAMPLES:

    # Markdown to a JSON list of elements
    m2d convert notes.md

    # Nested by headers
    m2d convert notes.md --format dict

    # Back to markdown, tables only, no blank lines between them
    m2d md notes.json --include table --spacer 0

    # Counts and variants per element kind
    m2d info notes.md

CONFIGURATION:

Defaults are read from ~/.config/markdown-data/config.toml unless --config is given.

    [render]
    spacer = 1
    include = [\"all\"]
    exclude = []

    [output]
    json_indent = 2")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Log what the parser does (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Markdown to JSON
    Convert {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::List)]
        format: Format,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// JSON element list back to markdown
    Md {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,

        /// Selectors to keep: kind names, headers, h1-h6, positions or all
        #[arg(long, value_delimiter = ',')]
        include: Vec<String>,

        /// Selectors to drop; wins over --include
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Empty lines between elements
        #[arg(long, allow_negative_numbers = true)]
        spacer: Option<i64>,
    },
    /// Per-kind statistics as JSON
    Info {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,
    },
    /// Selected elements as JSON
    Extract {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,

        #[arg(long, value_delimiter = ',', required = true)]
        kinds: Vec<String>,
    },
    /// Header outline as an indented tree
    Tree {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,

        /// Deepest level to show, 0 being the top level
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Flat element list
    List,
    /// Elements nested under their headers
    Dict,
    /// Flat list with source line ranges
    Located,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = load_config(cli.config.as_deref())?;
    let indent = |compact: bool| {
        let width = config.output.json_indent;
        (!compact && width > 0).then_some(width)
    };

    let output = match cli.command {
        Commands::Convert {
            file,
            format,
            compact,
        } => {
            let input = read_all(file.as_deref())?;
            let value = match format {
                Format::List => json::to_json(&parse(&input))?,
                Format::Dict => json::outline_to_json(&Outline::build(&parse(&input)))?,
                Format::Located => json::located_to_json(&parse_located(&input))?,
            };
            to_json_string(&value, indent(compact))?
        }
        Commands::Md {
            file,
            include,
            exclude,
            spacer,
        } => {
            let input = read_all(file.as_deref())?;
            let elements = from_json(&input).context("Input is not a JSON element list")?;

            let include = if include.is_empty() {
                config.render.include.clone()
            } else {
                include
            };
            let exclude = if exclude.is_empty() {
                config.render.exclude.clone()
            } else {
                exclude
            };
            let spacer = spacer.unwrap_or(config.render.spacer);
            let options = RenderOptions::from_strs(&include, &exclude, spacer)
                .context("Invalid render options")?;

            render(&elements, &options).context("Cannot render elements")?
        }
        Commands::Info { file } => {
            let input = read_all(file.as_deref())?;
            to_json_string(&inspect(&parse(&input)), indent(false))?
        }
        Commands::Extract { file, kinds } => {
            let input = read_all(file.as_deref())?;
            let selectors: Vec<Selector> = Selector::parse_all(&kinds)?.into_iter().collect();
            let selected = select(&parse(&input), &selectors);
            to_json_string(&json::to_json(&selected)?, indent(false))?
        }
        Commands::Tree { file, max_depth } => {
            let input = read_all(file.as_deref())?;
            Outline::build(&parse(&input))
                .tree_lines(max_depth)
                .join("\n")
        }
    };

    write_output(&output, cli.output.as_deref(), &config)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found: {}", path.display()),
        },
        None => {
            let config = Config::load()?;
            if config.is_some() {
                log::debug!("Using config from: {}", Config::config_path().display());
            } else {
                log::debug!("Using default config");
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn read_all(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Relative output paths land in the configured default directory, if any.
fn write_output(text: &str, path: Option<&Path>, config: &Config) -> Result<()> {
    let Some(path) = path else {
        println!("{text}");
        return Ok(());
    };

    let path = match &config.output.default_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let mut content = text.to_string();
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}
