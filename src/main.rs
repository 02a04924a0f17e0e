// zfm - bookmarks for the files and directories you keep coming back to
//
// This is the main entry point. Parses CLI args and dispatches to handlers.
// Shell glue (cd-ing into a queried directory) lives outside and calls us.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use zfm_lib::{config, BookmarkFile, BookmarkStore, KindFilter, Result};

#[derive(Parser)]
#[command(name = "zfm", version, about = "Bookmark files and directories")]
struct Cli {
    /// Bookmarks file to use instead of ~/.zfm.txt
    #[arg(long, global = true, env = "ZFM_BOOKMARKS_FILE", value_name = "PATH")]
    bookmarks_file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bookmark one or more paths
    Add {
        /// Files or directories to bookmark
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print bookmarks, one per line
    List {
        #[command(flatten)]
        kind: KindArgs,

        /// Print a JSON array instead
        #[arg(long)]
        json: bool,
    },

    /// Print the first bookmark whose path contains SUBSTRING
    Query {
        #[command(flatten)]
        kind: KindArgs,

        /// Case-sensitive text to look for in bookmarked paths
        #[arg(allow_hyphen_values = true)]
        substring: String,
    },

    /// Drop bookmarks whose target is gone and correct changed kinds
    Fix,

    /// Remove all bookmarks
    Clear,

    /// Show where bookmarks are stored and how many there are
    Status,
}

#[derive(Args)]
struct KindArgs {
    /// Only files
    #[arg(long, conflicts_with = "dirs")]
    files: bool,

    /// Only directories
    #[arg(long)]
    dirs: bool,
}

impl KindArgs {
    fn filter(&self) -> KindFilter {
        KindFilter::from_flags(self.files, self.dirs)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("zfm: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr so `zfm query` output stays clean for the shell
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let path = config::resolve_bookmarks_file(cli.bookmarks_file)?;
    tracing::debug!(path = %path.display(), "using bookmarks file");

    let open = || BookmarkStore::open_path(&path);

    match cli.command {
        Commands::Add { paths } => handle_add(&mut open()?, &paths),
        Commands::List { kind, json } => handle_list(&open()?, kind.filter(), json),
        Commands::Query { kind, substring } => handle_query(&open()?, &substring, kind.filter()),
        Commands::Fix => handle_fix(&mut open()?),
        // Never reads the old contents, so a corrupt file can still be reset
        Commands::Clear => BookmarkStore::clear(&BookmarkFile::new(&path)),
        Commands::Status => handle_status(&open()?),
    }
}

fn handle_add(store: &mut BookmarkStore, paths: &[PathBuf]) -> Result<()> {
    // Quiet on success, like cp
    store.add(paths)?;
    Ok(())
}

fn handle_list(store: &BookmarkStore, filter: KindFilter, json: bool) -> Result<()> {
    let bookmarks = store.list(filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&bookmarks)?);
        return Ok(());
    }

    for bm in bookmarks {
        println!("{}", bm);
    }

    Ok(())
}

fn handle_query(store: &BookmarkStore, substring: &str, filter: KindFilter) -> Result<()> {
    let bm = store.query(substring, filter)?;
    println!("{}", bm.path);
    Ok(())
}

fn handle_fix(store: &mut BookmarkStore) -> Result<()> {
    let report = store.fix()?;

    if report.is_clean() {
        tracing::info!("all bookmarks are up to date");
    } else {
        tracing::info!(
            removed = report.removed.len(),
            retagged = report.retagged.len(),
            unchecked = report.unchecked.len(),
            "fixed bookmarks"
        );
    }

    Ok(())
}

fn handle_status(store: &BookmarkStore) -> Result<()> {
    let stats = store.stats();

    println!("\nzfm Status");
    println!("{}", "=".repeat(60));
    println!("  File:        {}", stats.path.display());
    println!(
        "  Exists:      {}",
        if stats.file_exists { "yes" } else { "no" }
    );
    println!("  Bookmarks:   {}", stats.total);
    println!("  Directories: {}", stats.directories);
    println!("  Files:       {}", stats.files);
    println!("{}", "=".repeat(60));

    Ok(())
}
