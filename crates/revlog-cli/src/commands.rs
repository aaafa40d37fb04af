use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;

use revlog_checkout::Snapshot;
use revlog_types::Commit;

use crate::cli::*;
use crate::repo::Repository;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let workdir = std::env::current_dir()?;
    match cli.command {
        Command::Init(args) => cmd_init(args, workdir),
        Command::Add(args) => cmd_add(args, workdir),
        Command::Commit(args) => cmd_commit(args, workdir),
        Command::Log(args) => cmd_log(args, workdir, &cli.format),
        Command::Checkout(args) => cmd_checkout(args, workdir),
        Command::Show(args) => cmd_show(args, workdir, &cli.format),
        Command::Fsck(_) => cmd_fsck(workdir),
    }
}

fn cmd_init(args: InitArgs, workdir: PathBuf) -> anyhow::Result<()> {
    let target = match args.path {
        Some(path) => workdir.join(path),
        None => workdir,
    };
    let repo = Repository::init(&target)?;
    println!(
        "{} initialized empty revlog repository in {}",
        "✓".green().bold(),
        repo.layout().root().display().to_string().bold()
    );
    Ok(())
}

fn cmd_add(args: AddArgs, workdir: PathBuf) -> anyhow::Result<()> {
    let mut repo = Repository::open(&workdir)?;
    repo.add(&args.path)?;
    println!("  {} {}", "staged:".green(), args.path);
    Ok(())
}

fn cmd_commit(args: CommitArgs, workdir: PathBuf) -> anyhow::Result<()> {
    let mut repo = Repository::open(&workdir)?;
    let commit = repo.commit(&args.message)?;
    println!(
        "{} committed {} ({} file{})",
        "✓".green().bold(),
        commit.id.short_hex().yellow(),
        commit.files.len(),
        if commit.files.len() == 1 { "" } else { "s" }
    );
    println!("{}", commit.id);
    Ok(())
}

fn cmd_log(args: LogArgs, workdir: PathBuf, format: &OutputFormat) -> anyhow::Result<()> {
    let repo = Repository::open(&workdir)?;
    let mut commits = repo.log()?;
    if let Some(limit) = args.limit {
        commits.truncate(limit);
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&commits)?);
        }
        OutputFormat::Text => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for commit in &commits {
                print_commit_header(&mut out, commit)?;
                if args.contents {
                    let snapshot = repo.snapshot(Some(&commit.id.to_hex()))?;
                    print_snapshot_contents(&mut out, &snapshot)?;
                }
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn cmd_checkout(args: CheckoutArgs, workdir: PathBuf) -> anyhow::Result<()> {
    let repo = Repository::open(&workdir)?;
    let written = repo.checkout(args.id.as_deref())?;
    for path in &written {
        println!("  {} {}", "restored:".green(), path.display());
    }
    println!(
        "{} checked out {} file{}",
        "✓".green().bold(),
        written.len(),
        if written.len() == 1 { "" } else { "s" }
    );
    Ok(())
}

fn cmd_show(args: ShowArgs, workdir: PathBuf, format: &OutputFormat) -> anyhow::Result<()> {
    let repo = Repository::open(&workdir)?;
    match format {
        OutputFormat::Json => {
            let snapshot = repo.snapshot(Some(&args.id))?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        OutputFormat::Text => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            repo.show(&args.id, &mut out)?;
        }
    }
    Ok(())
}

fn cmd_fsck(workdir: PathBuf) -> anyhow::Result<()> {
    let mut repo = Repository::open(&workdir)?;
    let count = repo.fsck()?;
    println!(
        "{} index rebuilt from commit log: {} commit{}",
        "✓".green().bold(),
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(())
}

fn print_commit_header<W: Write>(out: &mut W, commit: &Commit) -> anyhow::Result<()> {
    writeln!(out, "{} {}", "commit".yellow().bold(), commit.id.to_hex().yellow())?;
    writeln!(out, "Date: {}", commit.timestamp.to_display())?;
    writeln!(out)?;
    writeln!(out, "    {}", commit.message)?;
    Ok(())
}

fn print_snapshot_contents<W: Write>(out: &mut W, snapshot: &Snapshot) -> anyhow::Result<()> {
    for file in &snapshot.files {
        writeln!(out)?;
        writeln!(out, "--- {} ({} bytes)", file.path.bold(), file.bytes.len())?;
        out.write_all(&file.bytes)?;
        if !file.bytes.ends_with(b"\n") {
            writeln!(out)?;
        }
    }
    Ok(())
}
