//! Cassia CLI
//!
//! Builds selectors from part tokens and exercises the rectangle JSON helpers.

mod tokens;

use anyhow::{Context, Result};
use cassia_common::warning::set_color_enabled;
use cassia_proto::{Area, Rectangle, RectanglePrototype, from_json, to_json};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

/// Cassia: fluent CSS selector builder
#[derive(Parser, Debug)]
#[command(name = "cassia")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compound selector
    cassia selector element=a id=home class=nav pseudo-class=hover

    # Complex selector
    cassia selector element=div id=main + element=table id=data '~' element=p

    # Rectangle as JSON
    cassia rect 10 20

    # Rehydrate a rectangle record
    cassia rehydrate '{"width":10,"height":20}'
"#)]
struct Cli {
    /// Disable colored warnings
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build and print a selector from `kind=value` parts and combinators
    Selector {
        /// Parts (`element=div`, `class=nav`, `attr=href`, ...) and
        /// combinators (`>`, `+`, `~`, `||`, `descendant`)
        #[arg(required = true, value_name = "TOKEN", allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Print a rectangle as JSON along with its area
    Rect {
        /// Rectangle width
        width: f64,
        /// Rectangle height
        height: f64,
    },

    /// Decode a rectangle record and print its area
    Rehydrate {
        /// JSON object with `width` and `height`
        json: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_color_enabled(!cli.no_color);

    match cli.command {
        Command::Selector { tokens } => {
            let rendered = tokens::build(&tokens)?;
            println!("{rendered}");
        }
        Command::Rect { width, height } => {
            let rect = Rectangle::new(width, height);
            println!("{}", to_json(&rect)?);
            println!("{} {}", "area:".bold(), rect.area());
        }
        Command::Rehydrate { json } => {
            let attached = from_json(&RectanglePrototype, &json)
                .context("could not rehydrate rectangle")?;
            println!(
                "width={} height={} {} {}",
                attached.width,
                attached.height,
                "area:".bold(),
                attached.area()
            );
        }
    }

    Ok(())
}
