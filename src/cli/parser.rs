use clap::{Parser, Subcommand};

/// Command-line interface definition for pantrywatch
/// CLI application to track perishable items with SQLite
#[derive(Parser)]
#[command(
    name = "pantrywatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track perishable household items and get warned before they spoil",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

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

    /// Add an item to the inventory
    Add {
        /// Item name
        name: String,

        /// Quantity (integer)
        #[arg(allow_hyphen_values = true)]
        quantity: String,

        /// Unit label (g, pcs, ...). Defaults to the catalog unit for the name
        #[arg(long, short = 'u')]
        unit: Option<String>,

        /// Expiry date (YYYY-MM-DD). Defaults to three days from today
        #[arg(long, short = 'e', value_name = "YYYY-MM-DD")]
        expires: Option<String>,
    },

    /// List current items, coloured by freshness
    List {
        #[arg(long, short = 's', help = "Only items whose name contains this text")]
        search: Option<String>,

        #[arg(
            long,
            default_value = "expiry",
            help = "Sort column: id, name, quantity, unit, expiry"
        )]
        sort: String,

        #[arg(long, short = 'r', help = "Reverse the sort order")]
        reverse: bool,

        #[arg(long = "no-color", help = "Disable coloured rows")]
        no_color: bool,
    },

    /// Delete items by id
    Del {
        /// One or more item ids
        #[arg(required = true)]
        ids: Vec<i64>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Purge stale items and print reminders once
    Notify,

    /// Check periodically and print reminders until interrupted
    Watch {
        #[arg(long, help = "Minutes between checks (overrides the configuration)")]
        interval: Option<u64>,

        #[arg(long, help = "Seconds before the first check (overrides the configuration)")]
        delay: Option<u64>,
    },

    /// Suggest ingredient names from the common ingredients catalog
    Suggest {
        /// Part of an ingredient name
        text: String,
    },

    /// Ask the recipe service for ideas based on the current inventory
    Recipes {
        #[arg(long, help = "Print the prompt instead of sending it")]
        dry_run: bool,
    },

    /// Database maintenance
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
