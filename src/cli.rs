use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: skillcheck <skill_directory>";

#[derive(Parser, Debug)]
#[command(name = "skillcheck", about = "Validate a Claude Skill directory's SKILL.md")]
pub struct Cli {
    /// Skill directory containing SKILL.md (exactly one)
    #[arg(value_name = "skill_directory")]
    pub paths: Vec<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
    /// Read thresholds from this JSON file instead of the defaults
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Emit debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
