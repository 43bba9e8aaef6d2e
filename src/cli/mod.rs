use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Chat interactively: each line typed is submitted, replies print as they arrive
    Repl,

    /// Submit a single message and print the resulting chat log
    Send {
        message: String,

        /// Print the log as the HTML blocks a page would show
        #[arg(long)]
        html: bool,
    },
}
