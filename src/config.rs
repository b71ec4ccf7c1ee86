//! Command line options and the resolved run configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::priority_queue::TieBreak;
use crate::report::Language;

#[derive(Parser, Debug)]
#[command(
    name = "agenda",
    about = "Bounded priority agenda: serves tasks by priority and reports what is left",
    version
)]
pub struct Cli {
    /// Input file; `-` or nothing reads stdin
    pub input: Option<PathBuf>,

    /// Report file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Which task is served first among equal priorities
    #[arg(long, value_enum, default_value_t = TiePolicy::NewestFirst)]
    pub ties: TiePolicy,

    /// Language of the report texts
    #[arg(long, value_enum, default_value_t = ReportLanguage::En)]
    pub lang: ReportLanguage,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TiePolicy {
    NewestFirst,
    OldestFirst,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportLanguage {
    En,
    Pt,
}

/// Settings for a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgendaConfig {
    /// `None` reads stdin.
    pub input: Option<PathBuf>,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub tie_break: TieBreak,
    pub language: Language,
    pub verbose: bool,
}

impl From<Cli> for AgendaConfig {
    fn from(cli: Cli) -> Self {
        let input = cli.input.filter(|path| path.as_os_str() != "-");
        let tie_break = match cli.ties {
            TiePolicy::NewestFirst => TieBreak::NewestFirst,
            TiePolicy::OldestFirst => TieBreak::OldestFirst,
        };
        let language = match cli.lang {
            ReportLanguage::En => Language::English,
            ReportLanguage::Pt => Language::Portuguese,
        };
        Self {
            input,
            output: cli.output,
            tie_break,
            language,
            verbose: cli.verbose,
        }
    }
}
