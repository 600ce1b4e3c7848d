use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "resume-desk")]
#[command(about = "Search job postings and draft cover letters through the resume service", long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,

    /// Also write the rendered page as an HTML fragment
    #[arg(long, value_name = "FILE", global = true)]
    pub html: Option<PathBuf>,

    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search postings matching a free-text description of yourself
    Search {
        /// Skills, experience, preferred roles...
        #[arg(value_name = "SPEC")]
        spec: String,
    },

    /// Load the company's questions, then generate a cover letter and feedback
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Company name
    #[arg(long, value_name = "NAME")]
    pub company: String,

    /// Job title applied for
    #[arg(long, value_name = "TITLE")]
    pub job: String,

    /// Your spec, experience and skills
    #[arg(long, value_name = "TEXT", required_unless_present = "spec_file", conflicts_with = "spec_file")]
    pub spec: Option<String>,

    /// Path to a file containing your spec
    #[arg(long, value_name = "FILE")]
    pub spec_file: Option<PathBuf>,

    /// Letter language, overrides the configured default
    #[arg(short, long, value_name = "LANG", value_parser = ["ko", "en"])]
    pub language: Option<String>,

    /// Maximum letter length in characters (0 = no limit)
    #[arg(long, value_name = "N")]
    pub char_limit: Option<u32>,

    /// Ask the server to use stored example answers
    #[arg(long)]
    pub use_example: bool,

    /// Choose the question interactively instead of taking the first one
    #[arg(long)]
    pub pick_question: bool,
}
