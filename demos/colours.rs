use clap::Parser;
use colour::Colour;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

/// Prints every colour, then resolves each given tag back into a colour.
#[derive(Parser)]
#[command(name = "colours", version = "0.1")]
struct Cli {
    /// Tags to resolve
    #[arg(default_value = "red")]
    tags: Vec<String>,
}

fn print_colours<W: Write>(out: &mut W, tags: &[String]) -> io::Result<()> {
    for colour in Colour::iter() {
        writeln!(out, "{}", colour)?;
    }
    for tag in tags {
        let colour = Colour::from_tag(tag)?;
        writeln!(out, "found enum: {}", colour)?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    if let Err(error) = print_colours(&mut stdout.lock(), &cli.tags) {
        eprintln!("{}", error);
        process::exit(1);
    }
}

//===========================================================================//


//===========================================================================//
