use crate::case::CaseStyle;
use crate::Conversion;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonConversion<'a> {
    input: &'a str,
    output: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    style: CaseStyle,
    conversions: Vec<JsonConversion<'a>>,
}

pub fn render_json(style: CaseStyle, conversions: &[Conversion]) -> Result<String> {
    let output = JsonOutput {
        style,
        conversions: conversions
            .iter()
            .map(|c| JsonConversion {
                input: &c.input,
                output: &c.output,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn print_conversions(
    style: CaseStyle,
    conversions: &[Conversion],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text_conversions(conversions, colored_output),
        OutputFormat::Json => println!("{}", render_json(style, conversions)?),
    }
    Ok(())
}

fn print_text_conversions(conversions: &[Conversion], colored_output: bool) {
    for conversion in conversions {
        if colored_output {
            println!("{}", conversion.output.green());
        } else {
            println!("{}", conversion.output);
        }
    }
}

pub fn print_styles(colored_output: bool) {
    const SAMPLE: &str = "Hello big WORLD";

    if colored_output {
        println!("{}", "Supported styles:".bold());
    } else {
        println!("Supported styles:");
    }
    println!();

    for style in CaseStyle::ALL {
        let example = style.apply(SAMPLE);
        if colored_output {
            println!(
                "  {:<8} {} {}",
                style.name().cyan().bold(),
                "→".dimmed(),
                example.green()
            );
        } else {
            println!("  {:<8} → {}", style.name(), example);
        }
    }
}
