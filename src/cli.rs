use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about = "admin-tool app registry")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Ignore config files and use the compiled-in app list
    #[arg(long, global = true, conflicts_with = "config")]
    pub builtin: bool,

    /// Sub‑commands (list, resolve)
    #[command(subcommand)]
    pub sub: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print every registered app in order (default if no sub‑command)
    List {
        /// Emit a JSON array instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Print the API server for an app (Exit 0 = found, 1 = unknown app)
    Resolve {
        /// App name, matched exactly
        name: String,
    },
}
