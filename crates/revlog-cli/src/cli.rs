use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "revlog",
    about = "revlog — append-only local version control",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize an empty repository
    Init(InitArgs),
    /// Stage a file for the next commit
    Add(AddArgs),
    /// Record the staged files as a new commit
    Commit(CommitArgs),
    /// Show commit history, most recent first
    Log(LogArgs),
    /// Materialize a commit's files into the working directory
    Checkout(CheckoutArgs),
    /// Print a commit and its contents without touching the working directory
    Show(ShowArgs),
    /// Verify the commit log and rebuild the index from it
    Fsck(FsckArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory)
    pub path: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// File to stage
    pub path: String,
}

#[derive(Args)]
pub struct CommitArgs {
    /// Commit message
    pub message: String,
}

#[derive(Args)]
pub struct LogArgs {
    /// Also print each commit's stored file contents
    #[arg(long)]
    pub contents: bool,
    /// Limit the number of commits shown
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct CheckoutArgs {
    /// Commit identifier or prefix (defaults to the most recent commit)
    pub id: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Commit identifier or prefix
    pub id: String,
}

#[derive(Args)]
pub struct FsckArgs {}
