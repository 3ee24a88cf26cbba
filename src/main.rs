//! CLI for attr-l10n - inspect suffix resolution and language-tagged rendering

use attr_l10n::core::locale::try_parse_locale;
use attr_l10n::{
    parse, parse_strict, render, DisplayLanguages, LocalizedText, Negotiated, RenderOptions,
    Resolver, Result,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the suffix priority chain for each display language
    Resolve {
        /// Localizations encoding, e.g. "default: en-US _fr: fr-CA"
        encoding: Option<String>,

        /// Read the encoding from a file instead
        #[arg(long, conflicts_with = "encoding")]
        file: Option<PathBuf>,

        /// Display languages, comma or space separated
        #[arg(long, default_value = "en")]
        languages: String,

        /// How candidate locales are matched against each display language
        #[arg(long, value_enum, default_value_t = Strategy::Range)]
        strategy: Strategy,

        /// Fail on dangling keys and unparseable language tags
        #[arg(long)]
        strict: bool,
    },

    /// Render text as HTML for a page in the given language
    Render {
        /// Text to render
        text: String,

        /// Language tag of the text (unknown if omitted)
        #[arg(long)]
        locale: Option<String>,

        /// Language code of the page
        #[arg(long)]
        page: String,

        /// Wrapper element name
        #[arg(long, default_value = "span")]
        tag: String,

        /// Wrap lines longer than this many characters
        #[arg(long)]
        max_line_length: Option<usize>,

        /// Prefix inserted after each wrapped line break
        #[arg(long, default_value = "")]
        line_prefix: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    /// Language-range filtering
    Range,
    /// fluent-langneg filtering with likely-subtag and region fallback
    Negotiated,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Resolve {
            encoding,
            file,
            languages,
            strategy,
            strict,
        } => {
            let encoding = match file {
                Some(path) => Some(std::fs::read_to_string(path)?),
                None => encoding,
            };
            let table = if strict {
                parse_strict(encoding.as_deref().unwrap_or_default())?
            } else {
                parse(encoding.as_deref())
            };

            let resolver = match strategy {
                Strategy::Range => Resolver::new(),
                Strategy::Negotiated => Resolver::with_strategy(Negotiated),
            };
            let languages = DisplayLanguages::parse_list(&languages);
            let priorities = resolver.build_priority_table(&languages, &table);

            let lines = priorities
                .iter()
                .map(|(code, chain)| format!("{}: {}", code, chain))
                .collect::<Vec<_>>();
            Ok(lines.join("\n"))
        }
        Command::Render {
            text,
            locale,
            page,
            tag,
            max_line_length,
            line_prefix,
        } => {
            let locale = locale.as_deref().map(try_parse_locale).transpose()?;
            let options = RenderOptions {
                tag_name: tag,
                max_line_length,
                line_prefix,
            };
            Ok(render(&LocalizedText::new(text, locale), &page, &options))
        }
    }
}
