extern crate asciifold;

use anyhow::Context;
use asciifold::{config::Config, escape_with, rename, Converter, EscapeMode};
use indicatif::ProgressBar;
use std::{
    io::{self, Read},
    path::PathBuf,
};
use structopt::StructOpt;
use tracing::Level;

#[derive(StructOpt, Debug)]
#[structopt(name = "asciifold")]
/// Convert Unicode text to plain ASCII.
struct Opt {
    #[structopt(subcommand)]
    command: Command,

    #[structopt(long, parse(from_os_str))]
    /// A YAML file with default settings and extra mappings.
    config: Option<PathBuf>,

    #[structopt(short = "v", parse(from_occurrences))]
    /// Verbosity of output.
    verbose: usize,
}

#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
enum Command {
    /// Convert text to ASCII, replacing known characters and escaping the rest.
    Convert {
        /// The text to convert. Lines from stdin are converted if none is given.
        text: Vec<String>,

        #[structopt(long)]
        /// How characters without a replacement are escaped: html, unicode, or hex.
        mode: Option<EscapeMode>,

        #[structopt(long)]
        /// Escape every non-ASCII character without replacing any.
        keep_diacritics: bool,

        #[structopt(long)]
        /// Collapse runs of whitespace and trim the ends.
        tidy: bool,
    },

    /// Escape every non-ASCII character.
    Escape {
        /// The text to escape. Lines from stdin are escaped if none is given.
        text: Vec<String>,

        #[structopt(long)]
        /// How characters are escaped: html, unicode, or hex.
        mode: Option<EscapeMode>,
    },

    /// Rename files and folders to ASCII, file safe names.
    Rename {
        #[structopt(long, default_value = ".", parse(from_os_str))]
        /// The folder to rename the contents of. The current directory is used if not specified.
        folder: PathBuf,

        #[structopt(long)]
        /// How characters without a replacement are escaped: html, unicode, or hex. Hex is
        /// used if neither this nor the config sets a mode.
        mode: Option<EscapeMode>,

        /// Prints out renames instead of doing them.
        #[structopt(long)]
        dry_run: bool,
    },

    /// Show some sample conversions.
    Demo,
}

const DEMO_NAMES: &[&str] = &[
    "Sørensen",
    "Ærø",
    "Blåbær",
    "Straße",
    "François",
    "Yücetürk",
    "成田市",
    "Güzelbahçe",
    "堺市",
    "São Paulo",
    "Düsseldorf",
    "Montréal",
    "Iwakuni–shi",
    "Þorlákshöfn",
];

fn init_logging(verbose: usize) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("couldn't read stdin")?;
    Ok(buf)
}

fn main() -> anyhow::Result<()> {
    let Opt {
        command,
        config,
        verbose,
    } = Opt::from_args();

    init_logging(verbose);

    let config = match &config {
        Some(path) => Config::load(path)
            .with_context(|| format!("couldn't load config \"{}\"", path.display()))?,
        None => Config::default(),
    };
    let table = config.table()?;

    match command {
        Command::Convert {
            text,
            mode,
            keep_diacritics,
            tidy,
        } => {
            let converter = Converter::new(&table)
                .with_mode(mode.or(config.mode).unwrap_or_default())
                .with_strip(!keep_diacritics)
                .with_tidy(tidy || config.tidy.unwrap_or(false));
            if text.is_empty() {
                for line in converter.convert_lines(&read_stdin()?) {
                    println!("{}", line);
                }
            } else {
                for t in &text {
                    println!("{}", converter.convert(t));
                }
            }
        }
        Command::Escape { text, mode } => {
            let mode = mode.or(config.mode).unwrap_or_default();
            if text.is_empty() {
                for line in read_stdin()?.lines() {
                    println!("{}", escape_with(line, mode));
                }
            } else {
                for t in &text {
                    println!("{}", escape_with(t, mode));
                }
            }
        }
        Command::Rename {
            folder,
            mode,
            dry_run,
        } => {
            let converter =
                Converter::new(&table).with_mode(mode.or(config.mode).unwrap_or(EscapeMode::Hex));
            let renames = rename::plan(&folder, &converter)
                .with_context(|| format!("couldn't plan renames in \"{}\"", folder.display()))?;

            if dry_run {
                for rename in &renames {
                    println!(
                        "\"{}\" -> \"{}\"",
                        rename.from.display(),
                        rename.to.display()
                    );
                }
                return Ok(());
            }

            // Renames are applied in order, since a folder is renamed after its contents.
            let bar = ProgressBar::new(renames.len() as u64);
            bar.set_message("Renaming...");
            let errs = renames
                .iter()
                .filter_map(|rename| {
                    let res = rename.apply();
                    bar.inc(1);
                    res.err().map(|err| (rename, err))
                })
                .collect::<Vec<_>>();
            bar.finish();

            for (rename, err) in errs {
                println!("\"{}\" - {}", rename.from.display(), err);
            }
        }
        Command::Demo => {
            let converter = Converter::new(&table).with_tidy(true);

            println!("Normalizing and escaping non-ASCII:");
            for name in DEMO_NAMES {
                println!("{} → {}", name, converter.convert(name));
            }

            let input = "ß";
            println!("\nEscaping: {}", input);
            for mode in &[EscapeMode::Html, EscapeMode::Unicode, EscapeMode::Hex] {
                println!("{}: {}", mode, escape_with(input, *mode));
            }
        }
    }

    Ok(())
}
