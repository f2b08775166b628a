use std::env;
use std::path::Path;

use crate::audible::{self, audible_dir};
use crate::cli::{AudibleArgs, Cli, Command, TreeArgs};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::ops::{self, Context, Operation};
use crate::report::{LogReporter, Reporter};
use crate::staging::{Outcome, StdinConfirm, stage_and_run};
use crate::tags::LoftyTagStore;

mod settings;

pub fn run(cli: Cli) -> Result<()> {
    let settings = settings::load_settings(&LogReporter);

    match &cli.command {
        Command::Download { audible } => download(audible, &settings),
        Command::Convert { audible, jobs } => convert(audible, *jobs, &settings),
        Command::ShowConfig => show_config(&settings),
        command => match command.tree_operation() {
            Some((tree, op)) => reconcile(tree, &op, &settings),
            None => Ok(()),
        },
    }
}

/// Plan `op` over the tree, then stage it behind one confirmation.
fn reconcile(tree: &TreeArgs, op: &Operation, settings: &Settings) -> Result<()> {
    let root = match &tree.root {
        Some(root) => root.clone(),
        None => env::current_dir().map_err(|e| Error::io(".", e))?,
    };
    let reporter = LogReporter;
    let store = LoftyTagStore;
    let ctx = Context {
        settings: &settings.library,
        store: &store,
        reporter: &reporter,
    };

    reporter.debug(&format!("planning {op:?} under {}", root.display()));
    let changes = ops::plan(&root, op, &ctx)?;

    match stage_and_run(changes, &mut StdinConfirm, &store, &reporter)? {
        Outcome::Applied(n) => reporter.info(&format!("{n} change(s) applied")),
        Outcome::Declined { .. } | Outcome::NothingToChange => {}
    }
    Ok(())
}

fn download(args: &AudibleArgs, settings: &Settings) -> Result<()> {
    let dir = audible_dir(args.audible_dir.as_deref(), &settings.audible)?;
    audible::download(&settings.audible, &dir, &args.window(), &LogReporter)
}

fn convert(args: &AudibleArgs, jobs: Option<usize>, settings: &Settings) -> Result<()> {
    let dir = audible_dir(args.audible_dir.as_deref(), &settings.audible)?;
    let jobs = jobs.unwrap_or(settings.audible.jobs);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::io(Path::new("<runtime>"), e))?;
    let items = rt.block_on(audible::fetch_library(
        &settings.audible,
        &args.window(),
        &LogReporter,
    ))?;

    audible::convert(&items, &dir, &settings.audible, jobs, &LogReporter)
}

fn show_config(settings: &Settings) -> Result<()> {
    let rendered =
        toml::to_string_pretty(settings).map_err(|e| Error::InvalidConfig(e.to_string()))?;
    print!("{rendered}");
    Ok(())
}
