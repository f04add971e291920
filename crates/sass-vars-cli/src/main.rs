//! sass-vars CLI - Main entry point

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sass_vars::{ConversionOptions, Data, InputType, Strategy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "sass-vars")]
#[command(version)]
#[command(about = "Convert JSON or YAML data into an SCSS variable declaration", long_about = None)]
struct Cli {
    /// Input file ('-' reads from stdin)
    input: String,

    /// Variable name (defaults to the input file name without extension)
    #[arg(short, long)]
    name: Option<String>,

    /// Input type (defaults to the input file extension)
    #[arg(short = 't', long = "type", value_enum)]
    input_type: Option<TypeArg>,

    /// Append !default to the declaration
    #[arg(short, long)]
    default: bool,

    /// Keep color literals quoted
    #[arg(long)]
    no_unquote_colors: bool,

    /// Keep length, angle and time literals quoted
    #[arg(long)]
    no_unquote_numbers: bool,

    /// Text encoding of the input
    #[arg(long)]
    encoding: Option<String>,

    /// How literals are recognised
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Replace pixel lengths with plain numbers in the output
    #[arg(long)]
    float_pixels: bool,

    /// YAML or JSON file with conversion options; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write output to FILE instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TypeArg {
    Json,
    Yaml,
    Yml,
    Js,
}

impl From<TypeArg> for InputType {
    fn from(value: TypeArg) -> Self {
        match value {
            TypeArg::Json => InputType::Json,
            TypeArg::Yaml | TypeArg::Yml => InputType::Yaml,
            TypeArg::Js => InputType::Js,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Text,
    Tree,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Text => Strategy::Text,
            StrategyArg::Tree => Strategy::Tree,
        }
    }
}

impl Cli {
    /// Build conversion options: config file first, then flags.
    fn options(&self) -> Result<ConversionOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => ConversionOptions::default(),
        };

        if let Some(name) = &self.name {
            options.name = Some(name.clone());
        }
        if let Some(input_type) = self.input_type {
            options.input_type = Some(input_type.into());
        }
        if self.default {
            options.default = true;
        }
        if self.no_unquote_colors {
            options.unquote_colors = false;
        }
        if self.no_unquote_numbers {
            options.unquote_numbers = Some(false);
        }
        if let Some(encoding) = &self.encoding {
            options.encoding = encoding.clone();
        }
        if let Some(strategy) = self.strategy {
            options.strategy = strategy.into();
        }

        // A path on the command line is always a file; stdin never is.
        options.is_file = self.input != "-";
        Ok(options)
    }
}

fn load_options(path: &Path) -> Result<ConversionOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse options file {}", path.display()))
}

fn run(cli: &Cli) -> Result<String> {
    let options = cli.options()?;
    tracing::debug!(?options, "resolved options");

    let data = if cli.input == "-" {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        Data::Buffer(bytes)
    } else {
        Data::Text(cli.input.clone())
    };

    let mut declaration = sass_vars::convert(data, &options)
        .with_context(|| format!("Failed to convert {}", cli.input))?;

    if cli.float_pixels {
        declaration = sass_vars::float_pixels(&declaration);
    }
    Ok(declaration)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sass_vars=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let declaration = run(&cli)?;

    match &cli.output {
        Some(path) => std::fs::write(path, format!("{declaration}\n"))
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{declaration}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sass-vars").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli = parse(&[
            "theme.yml",
            "--name",
            "brand",
            "--type",
            "yml",
            "--default",
            "--no-unquote-colors",
            "--no-unquote-numbers",
            "--strategy",
            "tree",
        ]);
        let options = cli.options().unwrap();
        assert_eq!(options.name.as_deref(), Some("brand"));
        assert_eq!(options.input_type, Some(InputType::Yaml));
        assert!(options.default);
        assert!(options.is_file);
        assert!(!options.unquote_colors);
        assert!(!options.unquote_numbers());
        assert_eq!(options.strategy, Strategy::Tree);
    }

    #[test]
    fn test_stdin_is_not_a_file() {
        let options = parse(&["-"]).options().unwrap();
        assert!(!options.is_file);
        assert_eq!(options.input_type(), InputType::Js);
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("options.yml");
        std::fs::write(&config, "name: fromfile\ndefault: true\nunquoteLengths: false\n").unwrap();

        let cli = parse(&["data.json", "-c", config.to_str().unwrap(), "-n", "override"]);
        let options = cli.options().unwrap();
        assert_eq!(options.name.as_deref(), Some("override"));
        assert!(options.default);
        assert!(!options.unquote_numbers());
    }

    #[test]
    fn test_run_with_file_and_float_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("grid.json");
        std::fs::write(&input, "{\"gutter\":\"30px\",\"accent\":\"red\"}\n").unwrap();

        let cli = parse(&[input.to_str().unwrap(), "--float-pixels"]);
        assert_eq!(run(&cli).unwrap(), "$grid: (\"gutter\":30,\"accent\":red);");
    }
}
