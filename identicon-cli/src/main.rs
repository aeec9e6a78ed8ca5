use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use identicon::color::Color;
use identicon::config::{self, Style};
use identicon::grid::Cell;
use identicon::name::format_image_name;
use identicon::output;
use identicon::raster::PixelRect;
use identicon::Identicon;

/// Identicon generator: hash text into a mirrored 5x5 image
#[derive(Parser)]
#[command(name = "identicon", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render identicons as PNG files
    Render {
        /// Text to render; prompts on stdin when omitted
        texts: Vec<String>,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
        #[command(flatten)]
        style: StyleArgs,
        /// Don't print written paths
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print the pipeline intermediates as JSON
    Inspect {
        text: String,
        #[command(flatten)]
        style: StyleArgs,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the grid as text art
    Preview { text: String },
}

#[derive(clap::Args)]
struct StyleArgs {
    /// Path to a .toml style config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Background color (#rrggbb), overrides the config
    #[arg(long)]
    background: Option<String>,
    /// File name separator, overrides the config
    #[arg(long)]
    separator: Option<String>,
}

impl StyleArgs {
    /// Load the config file, then apply command-line overrides.
    fn resolve(&self) -> Result<Style> {
        let mut style = match &self.config {
            Some(path) => load_style(path)?,
            None => Style::default(),
        };
        if let Some(bg) = &self.background {
            let color: Color = bg.parse().context("invalid --background")?;
            style = style.with_background(color);
        }
        if let Some(sep) = &self.separator {
            let separator = config::parse_separator(sep).context("invalid separator")?;
            style = style.with_separator(separator);
        }
        Ok(style)
    }
}

#[derive(Serialize)]
struct OutputInspect<'a> {
    input: &'a str,
    digest: String,
    color: String,
    rgb: Color,
    squares: &'a [Cell],
    pixel_map: &'a [PixelRect],
    file_name: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identicon=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            texts,
            output,
            style,
            quiet,
        } => cmd_render(texts, &output, &style, quiet),
        Command::Inspect {
            text,
            style,
            pretty,
        } => cmd_inspect(&text, &style, pretty),
        Command::Preview { text } => cmd_preview(&text),
    }
}

fn load_style(path: &Path) -> Result<Style> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Style::from_toml_str(&toml_str)
        .with_context(|| format!("parsing style from {}", path.display()))
}

/// Ask for one line of text on stdin.
fn prompt_text() -> Result<String> {
    println!("Write something: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading text from stdin")?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn cmd_render(texts: Vec<String>, output_dir: &Path, style: &StyleArgs, quiet: bool) -> Result<()> {
    let style = style.resolve()?;
    let texts = if texts.is_empty() {
        vec![prompt_text()?]
    } else {
        texts
    };

    for (text, earlier) in overwritten(&texts, output_dir, &style) {
        tracing::warn!(
            text,
            earlier,
            "file name collides with an earlier text and will replace it"
        );
    }

    for text in &texts {
        let icon = Identicon::new(text);
        let path = output::save(&icon, output_dir, &style)
            .with_context(|| format!("saving identicon for '{}'", text))?;
        if !quiet {
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}

/// Pairs of (text, earlier text) that normalize to the same output path.
fn overwritten<'a>(
    texts: &'a [String],
    output_dir: &Path,
    style: &Style,
) -> Vec<(&'a str, &'a str)> {
    let mut seen: HashMap<PathBuf, &str> = HashMap::new();
    let mut collisions = Vec::new();
    for text in texts {
        let path = output::image_path(text, output_dir, style);
        if let Some(earlier) = seen.insert(path, text) {
            collisions.push((text.as_str(), earlier));
        }
    }
    collisions
}

fn cmd_inspect(text: &str, style: &StyleArgs, pretty: bool) -> Result<()> {
    let style = style.resolve()?;
    let icon = Identicon::new(text);

    let result = OutputInspect {
        input: icon.input(),
        digest: icon.digest().to_hex(),
        color: icon.color().to_string(),
        rgb: icon.color(),
        squares: icon.squares(),
        pixel_map: icon.pixel_map(),
        file_name: format!("{}.png", format_image_name(text, style.separator)),
    };

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_preview(text: &str) -> Result<()> {
    let icon = Identicon::new(text);
    println!("Input:   {}", icon.input());
    println!("Digest:  {}", icon.digest());
    println!("Color:   {}", icon.color());
    println!();
    for row in icon.grid().rows() {
        print!("  ");
        for cell in row {
            print!("{}", if cell.is_painted() { "██" } else { "  " });
        }
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_accepts_multiple_texts() {
        let cli = Cli::try_parse_from([
            "identicon",
            "render",
            "Jane Doe",
            "bob",
            "-o",
            "out",
            "-q",
        ])
        .unwrap();
        match cli.command {
            Command::Render {
                texts,
                output,
                quiet,
                ..
            } => {
                assert_eq!(texts, vec!["Jane Doe", "bob"]);
                assert_eq!(output, PathBuf::from("out"));
                assert!(quiet);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn render_without_text_parses() {
        let cli = Cli::try_parse_from(["identicon", "render"]).unwrap();
        assert!(matches!(cli.command, Command::Render { ref texts, .. } if texts.is_empty()));
    }

    #[test]
    fn style_overrides_apply() {
        let cli = Cli::try_parse_from([
            "identicon",
            "inspect",
            "x",
            "--background",
            "#000000",
            "--separator",
            "-",
        ])
        .unwrap();
        let Command::Inspect { style, .. } = cli.command else {
            panic!("expected inspect");
        };
        let style = style.resolve().unwrap();
        assert_eq!(style.background, Color::BLACK);
        assert_eq!(style.separator, '-');
    }

    #[test]
    fn bad_background_is_an_error() {
        let cli =
            Cli::try_parse_from(["identicon", "inspect", "x", "--background", "blue"]).unwrap();
        let Command::Inspect { style, .. } = cli.command else {
            panic!("expected inspect");
        };
        assert!(style.resolve().is_err());
    }

    #[test]
    fn texts_with_same_file_name_are_flagged() {
        let texts: Vec<String> = ["A B", "c", "a b", "a\tb"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let style = Style::default();
        let collisions = overwritten(&texts, Path::new("out"), &style);
        assert_eq!(collisions, vec![("a b", "A B"), ("a\tb", "a b")]);
    }

    #[test]
    fn distinct_file_names_are_not_flagged() {
        let texts = vec!["a b".to_string(), "a_b".to_string()];
        let style = Style::default().with_separator('-');
        assert!(overwritten(&texts, Path::new("."), &style).is_empty());
    }

    #[test]
    fn inspect_requires_text() {
        assert!(Cli::try_parse_from(["identicon", "inspect"]).is_err());
    }
}
