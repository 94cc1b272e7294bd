use std::io::Read;

use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::Parser;
use component_suggester::catalog::catalog_by_category;
use component_suggester::report::{EXAMPLE_DESCRIPTIONS, SuggestionReport};
use component_suggester::Pattern;

#[derive(Parser, Debug)]
#[command(author, version, about = "Suggest Nova React components and generate a matching template", long_about = None)]
struct Cli {
    /// Free-text description of the UI to build
    #[arg(value_name = "DESCRIPTION", conflicts_with = "file")]
    description: Option<String>,

    /// Read the description from a file (`-` for stdin)
    #[arg(short, long, value_name = "PATH")]
    file: Option<Utf8PathBuf>,

    /// Render this pattern instead of classifying the description
    /// (login, payment, profile, search, settings, generic)
    #[arg(short, long, value_name = "NAME")]
    pattern: Option<Pattern>,

    /// Print the full report as JSON
    #[arg(long, conflicts_with = "code_only")]
    json: bool,

    /// Print only the generated code
    #[arg(long)]
    code_only: bool,

    /// List sample descriptions and exit
    #[arg(long)]
    examples: bool,

    /// List the component catalog and exit
    #[arg(long)]
    catalog: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn read_description(cli: &Cli) -> Result<String> {
    match (&cli.description, &cli.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) if path.as_str() == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Read description from stdin")?;
            Ok(text)
        }
        (None, Some(path)) => {
            std::fs::read_to_string(path).with_context(|| format!("Read description from {}", path))
        }
        (None, None) => bail!("No description given (pass DESCRIPTION or --file)"),
    }
}

fn print_catalog() {
    for group in catalog_by_category() {
        println!("{}:", group.category);
        for e in &group.entries {
            println!("  {:<10} {:<16} {}", e.key, e.name, e.description);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    if cli.examples {
        for example in EXAMPLE_DESCRIPTIONS {
            println!("{}", example);
        }
        return Ok(());
    }
    if cli.catalog {
        print_catalog();
        return Ok(());
    }

    let description = read_description(&cli)?;
    let report = match cli.pattern {
        Some(pattern) => SuggestionReport::build_with_pattern(&description, pattern),
        None => SuggestionReport::build(&description),
    }?;
    log::info!(
        "{} suggestion(s), '{}' pattern",
        report.suggestions.len(),
        report.pattern
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{}", json);
    } else if cli.code_only {
        print!("{}", report.code);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
