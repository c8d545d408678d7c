use clap::{Parser, Subcommand};

/// Command-line interface definition for eventquery
/// Chatbot actions answering event questions from an SQLite events table
#[derive(Parser)]
#[command(
    name = "eventquery",
    version = env!("CARGO_PKG_VERSION"),
    about = "Answer event questions: natural-language dates to SQL, with an LLM fallback",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Verbose logging on stderr (RUST_LOG takes precedence)
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long, default_value_t = 20, help = "Number of rows to show")]
        limit: usize,
    },

    /// Add an event to the store
    Add {
        #[arg(long)]
        title: String,

        /// Date and time as stored by the back-office (dd/mm/YYYY,HH:MM)
        #[arg(long = "date-time", help = "Event date and time (dd/mm/YYYY,HH:MM)")]
        date_time: String,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        link: Option<String>,

        #[arg(long, help = "Rating from 0 to 5")]
        rating: Option<f64>,

        #[arg(long, help = "Event description")]
        about: Option<String>,

        #[arg(long, help = "Category: music, sports, art, education, tech, food")]
        category: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        long: Option<f64>,
    },

    /// Import events from a JSON array
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Answer an event question (action_fetch_event_data)
    Ask {
        /// The question, e.g. "events between 1 June and 10 June"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Pretend today is this date")]
        today: Option<String>,
    },

    /// Show the SQL a question would run, without running it
    Sql {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Pretend today is this date")]
        today: Option<String>,

        #[arg(long, help = "Print the plan as JSON")]
        json: bool,
    },

    /// Answer a general question about events (action_general_info)
    Info {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Handle one webhook action request (JSON on stdin or --file)
    Webhook {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Pretend today is this date")]
        today: Option<String>,
    },
}
