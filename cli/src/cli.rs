use clap::{Parser, Subcommand};
use debugger::Category;

#[derive(Parser)]
#[command(name = "gptdebug")]
#[command(
    author,
    version,
    about = "Diagnose GPT tool-call errors and suggest how to fix them"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a single error message and print remediation steps
    Analyze {
        /// Error message to analyze (read from stdin when omitted)
        message: Option<String>,

        /// Print the result envelope as JSON instead of a formatted report
        #[clap(long, default_value_t = false)]
        json: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Run a raw params mapping ({"error_message": "..."}) and print the result envelope
    Run {
        /// Params as an inline JSON object
        #[clap(short, long, conflicts_with = "file")]
        params: Option<String>,

        /// Path to a file containing the params JSON (stdin is used when neither option is given)
        #[clap(short, long)]
        file: Option<String>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// List the known error categories with their descriptions and suggestions
    Categories {
        /// Only show this category
        #[clap(value_enum)]
        category: Option<Category>,

        /// Print the categories as JSON
        #[clap(long, default_value_t = false)]
        json: bool,
    },
}
