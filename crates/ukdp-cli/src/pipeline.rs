//! Staged load pipeline.
//!
//! The run is strictly sequential, with no branching back:
//! 1. **LoadUsers**: read raw user rows (fatal if the source is unreachable)
//! 2. **AssembleUsers**: clean and assemble every row, counting rejects
//! 3. **IndexAndLoadLogins**: build the email→id index, read and assemble
//!    login rows, filtering unresolved or invalid entries
//! 4. **Persist**: commit the user batch, then the login batch
//!
//! Users are durably committed before any login is submitted, so the
//! referential invariant holds even though the store also enforces it with a
//! foreign key. A failed run leaves no half-written pair of tables and is
//! simply re-run from the start; deterministic ids plus upsert semantics make
//! that idempotent.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use ukdp_assemble::{EmailIndex, UsernameMatchPolicy, assemble_logins, assemble_users};
use ukdp_ingest::{TextEncoding, read_rows};
use ukdp_store::Store;

/// Everything a run needs; built from CLI flags, fixed defaults otherwise.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub users_csv: PathBuf,
    pub logins_csv: PathBuf,
    pub database: PathBuf,
    /// The user dataset ships Latin-1 encoded in practice.
    pub users_encoding: TextEncoding,
    pub username_policy: UsernameMatchPolicy,
    pub dry_run: bool,
}

/// Counts reported by a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub users_loaded: usize,
    pub users_rejected: usize,
    pub logins_loaded: usize,
    pub logins_dropped_unresolved: usize,
    pub logins_dropped_bad_timestamp: usize,
    /// Set when the persist stage ran.
    pub database: Option<PathBuf>,
}

/// Runs the full pipeline and returns the summary of a completed run.
///
/// Any error here is fatal for the run: source unreachable, sink rejecting a
/// commit, or a data-integrity violation at the store.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    // Stage 1: LoadUsers
    let user_rows = read_rows(&config.users_csv, config.users_encoding)
        .context("load user dataset")?;
    info!(rows = user_rows.len(), "loaded user dataset");

    // Stage 2: AssembleUsers
    let user_assembly = assemble_users(&user_rows);
    info!(
        users = user_assembly.users.len(),
        rejected = user_assembly.rejected.len(),
        "assembled users"
    );

    // Stage 3: IndexAndLoadLogins
    let index = EmailIndex::build(&user_assembly.users, config.username_policy);
    let login_rows = read_rows(&config.logins_csv, TextEncoding::Utf8)
        .context("load login dataset")?;
    let login_assembly = assemble_logins(&login_rows, &index);
    info!(
        logins = login_assembly.logins.len(),
        dropped = login_assembly.dropped(),
        "assembled logins"
    );

    let mut summary = RunSummary {
        users_loaded: user_assembly.users.len(),
        users_rejected: user_assembly.rejected.len(),
        logins_loaded: login_assembly.logins.len(),
        logins_dropped_unresolved: login_assembly.dropped_unresolved,
        logins_dropped_bad_timestamp: login_assembly.dropped_bad_timestamp,
        database: None,
    };

    // Stage 4: Persist
    if config.dry_run {
        info!("dry run: skipping persist stage");
        return Ok(summary);
    }
    if let Some(parent) = config.database.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create database directory {}", parent.display()))?;
    }
    let mut store = Store::open(&config.database).context("open store")?;
    store.ensure_schema().context("ensure schema")?;
    store
        .store_users(&user_assembly.users)
        .context("store user batch")?;
    store
        .store_logins(&login_assembly.logins)
        .context("store login batch")?;
    summary.database = Some(config.database.clone());

    info!("pipeline completed");
    Ok(summary)
}
