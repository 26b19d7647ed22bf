use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::search;

#[derive(Debug, Parser)]
#[command(
    name = "grounds",
    about = "A curated knowledge-base relevance engine and search CLI"
)]
pub struct Cli {
    /// Directory containing the corpus files
    #[arg(short = 'C', long, global = true, default_value = "knowledge")]
    pub corpus: PathBuf,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the knowledge base
    Search(SearchArgs),
    /// Retrieve a document by id
    Get(GetArgs),
    /// Retrieve a document by title
    Title(TitleArgs),
    /// List documents similar to one document
    Similar(SimilarArgs),
    /// List distinct topics
    Topics(ListArgs),
    /// List distinct tags
    Tags(ListArgs),
    /// List documents in a topic
    Topic(FilterArgs),
    /// List documents carrying a tag
    Tag(FilterArgs),
    /// Show corpus status
    Status(ListArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// The search query
    pub query: String,

    /// Number of results to return
    #[arg(short = 'n', long, default_value_t = search::DEFAULT_MAX_RESULTS)]
    pub count: usize,

    /// Minimum score threshold for scored results
    #[arg(long, default_value_t = search::DEFAULT_MIN_SCORE)]
    pub min_score: f64,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Output only source file paths (one per line)
    #[arg(long)]
    pub files: bool,
}

// -- Get / Title --

#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Document id (the source filename stem)
    pub id: String,

    /// Output as JSON with metadata
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct TitleArgs {
    /// Document title (exact match first, best search hit as fallback)
    pub title: String,

    /// Output as JSON with metadata
    #[arg(long)]
    pub json: bool,
}

// -- Similar --

#[derive(Debug, Parser)]
pub struct SimilarArgs {
    /// Document id to compare against
    pub id: String,

    /// Number of results to return
    #[arg(short = 'n', long, default_value_t = crate::kb::DEFAULT_SIMILAR_RESULTS)]
    pub count: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Enumeration / filtering --

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct FilterArgs {
    /// Topic or tag name (case-insensitive)
    pub name: String,

    /// Number of results to return
    #[arg(short = 'n', long, default_value_t = search::DEFAULT_MAX_RESULTS)]
    pub count: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, "grounds", &mut std::io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_search_defaults() {
        let cli = Cli::parse_from(["grounds", "search", "espresso maintenance"]);
        assert_eq!(cli.corpus, PathBuf::from("knowledge"));
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.query, "espresso maintenance");
                assert_eq!(args.count, 10);
                assert_eq!(args.min_score, 1.0);
                assert!(!args.json);
                assert!(!args.files);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn parse_global_corpus_after_subcommand() {
        let cli = Cli::parse_from(["grounds", "topics", "--corpus", "/srv/kb"]);
        assert_eq!(cli.corpus, PathBuf::from("/srv/kb"));
        assert!(matches!(cli.command, Command::Topics(_)));
    }

    #[test]
    fn parse_similar_count_override() {
        let cli = Cli::parse_from(["grounds", "similar", "01-intro", "-n", "3"]);
        match cli.command {
            Command::Similar(args) => {
                assert_eq!(args.id, "01-intro");
                assert_eq!(args.count, 3);
            }
            _ => panic!("expected similar command"),
        }
    }
}
