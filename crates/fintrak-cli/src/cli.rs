use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fintrak_shared::uac::Role;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        global = true,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    /// File the session is kept in. Overrides `storage.path` from the configuration
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start a session with the given role
    Login {
        #[arg(long)]
        work_id: String,
        #[arg(long)]
        role: Role,
        #[arg(long)]
        password: String,
        /// Visit this path first, as if it was the page that asked for a login
        #[arg(long)]
        from: Option<String>,
    },
    /// Register and start a session
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        work_id: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: Role,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        contact_number: Option<String>,
    },
    Logout,
    /// Show the current session
    Whoami,
    /// Resolve a path through the gate and show where it ends up
    Visit { path: String },
    /// List every known path and what it needs
    Routes,
}
