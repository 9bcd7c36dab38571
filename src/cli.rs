// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    config::options::{AppOptions, RefreshPolicy},
    data::SlangDictionary,
    error::Result,
    lookup::{self, Lookup},
    progress::Progress,
    scrape,
    translate::HostedModel,
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Vietnamese slang dictionary: refresh, list, look up")]
pub struct Cli {
    /// Dictionary snapshot (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// When to re-scrape before list/lookup: never | if-missing | always
    #[arg(long, global = true, default_value_t = RefreshPolicy::IfMissing)]
    pub refresh: RefreshPolicy,

    /// Inference endpoint base URL for the translation model
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch both sources, merge into the snapshot, and save it
    Update,
    /// Print every term, sorted
    List,
    /// Show the Vietnamese explanation and English translation of a term
    Lookup {
        /// The term (words are joined with spaces)
        #[arg(required = true)]
        term: Vec<String>,

        /// Skip loading the translation model
        #[arg(long)]
        no_translate: bool,
    },
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(p) = &self.store {
            opts.store_path = p.clone();
        }
        opts.refresh = self.refresh;
        if let Some(url) = &self.endpoint {
            opts.translator.endpoint = url.clone();
        }
        opts
    }
}

/// Prints progress lines to stderr so stdout stays clean for `list`.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, source: &str, entries: usize) {
        eprintln!("  {source}: {entries} terms");
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    run_with(&cli)
}

pub fn run_with(cli: &Cli) -> Result<()> {
    let opts = cli.options();
    crate::log::init(&opts.log_path());
    logf!("CLI: {:?} options={:?}", cli.command, opts);

    match &cli.command {
        Command::Update => {
            let (_, summary) = scrape::refresh(&opts, Some(&mut ConsoleProgress))?;
            println!(
                "Wrote {} ({} terms, was {})",
                summary.path.display(), summary.total, summary.previous
            );
        }
        Command::List => {
            let dict = load(&opts)?;
            for term in dict.terms() {
                println!("{term}");
            }
        }
        Command::Lookup { term, no_translate } => {
            let dict = load(&opts)?;
            let query = term.join(" ");

            let outcome = if *no_translate {
                lookup::lookup_untranslated(&dict, &query)
            } else if lookup::resolve(&dict, &query).is_none() {
                // Miss: no reason to pay for the model
                lookup::lookup_untranslated(&dict, &query)
            } else {
                let model = HostedModel::load(&opts.translator)?;
                lookup::lookup(&dict, &model, &query)?
            };
            print!("{}", render(&outcome));
        }
    }
    Ok(())
}

fn load(opts: &AppOptions) -> Result<SlangDictionary> {
    scrape::load_or_refresh(opts, Some(&mut ConsoleProgress))
}

/// Two labeled blocks, or the not-found notice.
pub fn render(outcome: &Lookup) -> String {
    match outcome {
        Lookup::Found { term, explanation, translation } => {
            let mut out = format!("{term}\n\nNghĩa tiếng Việt:\n  {explanation}\n");
            if let Some(en) = translation {
                out.push_str(&format!("\nEnglish Translation:\n  {en}\n"));
            }
            out
        }
        Lookup::NotFound { query } => {
            format!("Không tìm thấy “{query}” trong từ điển. (Not found)\n")
        }
    }
}
