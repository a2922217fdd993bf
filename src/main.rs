use clap::{Parser, Subcommand};
use serde::Serialize;
use site_nav::types::{Cta, NavItem};
use site_nav::{data, output, render, validate};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "site-nav")]
#[command(about = "Navigation table tooling for the marketing site")]
#[command(long_about = "\
Navigation table tooling for the marketing site

The navigation table is compiled into this binary. Entries opt into the
header nav and the footer independently via showInNav/showInFooter; the
CTA is always present. Edit src/data.rs to change the menus, then run
'site-nav check' to verify the shape.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serialize the table and CTA as JSON
    Export {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate the table shape and print the full inventory
    Check,
    /// Write a standalone HTML preview of both menu surfaces
    Render {
        /// Output directory for preview.html
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
}

/// The exported shape: same two top-level exports the site consumes.
#[derive(Serialize)]
struct Export<'a> {
    cta: &'a Cta,
    navigation: &'a [NavItem],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Export { pretty, out } => {
            let export = Export {
                cta: data::cta(),
                navigation: data::navigation(),
            };
            let json = if pretty {
                serde_json::to_string_pretty(&export)?
            } else {
                serde_json::to_string(&export)?
            };
            match out {
                Some(path) => {
                    std::fs::write(&path, &json)?;
                    println!("Exported navigation table to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
        Command::Check => {
            validate::validate(data::navigation(), data::cta())?;
            for line in output::format_inventory(data::navigation(), data::cta()) {
                println!("{line}");
            }
            println!();
            println!("Table shape is valid");
        }
        Command::Render { output } => {
            validate::validate(data::navigation(), data::cta())?;
            std::fs::create_dir_all(&output)?;
            let preview = render::render_preview(data::navigation(), data::cta());
            let path = output.join("preview.html");
            std::fs::write(&path, preview.into_string())?;
            println!("Generated {}", path.display());
        }
    }

    Ok(())
}
