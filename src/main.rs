use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::config::{ConfigLayer, Overrides};
use recase::{prompt, CaseStyle, Config, Conversion, Converter};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert text to camelCase, kebab-case, dot.case and more", long_about = None)]
struct Cli {
    /// Text to convert (reads lines from stdin when omitted).
    /// Put `--` first to convert words that name a subcommand: `recase -- styles`
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Target style (camel, kebab, dot, snake, pascal)
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Only treat ASCII letters and digits as word characters
    #[arg(long, overrides_with = "unicode")]
    ascii: bool,

    /// Treat letters and digits of any script as word characters
    #[arg(long, overrides_with = "ascii")]
    unicode: bool,

    /// Also split words at case transitions (fooBar -> foo, Bar)
    #[arg(long, overrides_with = "no_split_case")]
    split_case: bool,

    /// Keep runs like fooBar as one word
    #[arg(long, overrides_with = "split_case")]
    no_split_case: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Config file to use instead of ./.recase.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Print prompt text describing the conversion functions
    Prompt {
        /// Styles to describe (default: all)
        #[arg(short, long)]
        style: Vec<CaseStyle>,

        /// Emit JSON function-calling definitions instead of prose
        #[arg(long)]
        tools: bool,
    },
    /// List supported styles with an example
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("RECASE_LOG", default_level))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    if let Some(command) = cli.command {
        return handle_command(command, !cli.no_color);
    }

    let config = Config::load(Overrides {
        settings: ConfigLayer {
            style: cli.style,
            unicode: flag_pair(cli.unicode, cli.ascii),
            split_case_boundaries: flag_pair(cli.split_case, cli.no_split_case),
            format: cli.format,
        },
        config_file: cli.config.clone(),
    })?;
    log::debug!("effective config: {:?}", config);

    let converter = Converter::new(config.tokenizer_options());

    let conversions = if cli.texts.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        converter.convert_lines(config.style, &input)
    } else {
        cli.texts
            .iter()
            .map(|text| Conversion {
                input: text.clone(),
                output: converter.convert(config.style, text),
                style: config.style,
            })
            .collect()
    };

    output::print_conversions(config.style, &conversions, !cli.no_color, &config.format)
}

/// `Some(true)` for the "on" flag, `Some(false)` for its negation, `None` if neither was given
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn handle_command(command: Commands, colored: bool) -> Result<()> {
    match command {
        Commands::Prompt { style, tools } => {
            let styles = if style.is_empty() {
                CaseStyle::ALL.to_vec()
            } else {
                style
            };

            if tools {
                let definitions = prompt::tool_definitions(&styles);
                println!("{}", serde_json::to_string_pretty(&definitions)?);
            } else {
                println!("{}", prompt::system_prompt(&styles));
            }
        }
        Commands::Styles => output::print_styles(colored),
    }
    Ok(())
}
