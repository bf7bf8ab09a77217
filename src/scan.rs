//! Repository discovery and the `scan` subcommand.

use crate::error::Result;
use crate::git;
use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Walk the tree under `root` and return the work dir of every repository
/// found, i.e. the parent of each `.git` directory.
///
/// Hidden directories are not descended into. Repositories nested below
/// another repository's work dir are still found.
pub fn find_repos(root: &Path) -> Result<Vec<PathBuf>> {
    let mut repos = Vec::new();
    let mut walker = walkdir::WalkDir::new(root).follow_links(false).into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry?;
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !name.starts_with('.') {
            continue;
        }
        if name == ".git" {
            if let Some(repo) = entry.path().parent() {
                repos.push(repo.to_path_buf());
            }
        }
        walker.skip_current_dir();
    }

    Ok(repos)
}

/// Walk `root` and emit a CSV summary for every repository found.
///
/// A repository whose log invocation or parse fails is reported on stderr
/// and skipped; the scan continues with the remaining repositories.
pub fn exec(root: &Path) -> anyhow::Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Scanning for repositories...");
    pb.enable_steady_tick(Duration::from_millis(80));

    let repos = find_repos(root).context("Failed to scan directory tree")?;
    pb.finish_and_clear();

    for repo in &repos {
        match git::log(repo) {
            Ok(records) => {
                println!("{}", style(repo.display()).cyan().bold());
                crate::emit::write_csv(&records, io::stdout().lock())
                    .context("Failed to write CSV")?;
            }
            Err(e) => {
                eprintln!(
                    "{} {}: {e}",
                    style("skipped").yellow().bold(),
                    repo.display()
                );
            }
        }
    }

    Ok(())
}
