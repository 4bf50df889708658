use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use versync_cargo::CargoManifest;
use versync_core::{BumpType, Manifest, Reporter, Version, WriteOutcome};
use versync_python::PythonInitFile;
use versync_utils::display_bump;

use crate::options::SyncOptions;

/// Arguments for a sync run, already converted out of the clap layer.
#[derive(Debug)]
pub struct SyncArgs {
    pub bump: Option<BumpType>,
    pub set: Option<String>,
    pub options: SyncOptions,
}

/// Synchronize the version across both manifests.
///
/// Reads the current version, decides the target (`--set` wins over `--bump`,
/// neither means no-op), and only touches the files when the target differs.
///
/// # Errors
/// Returns error on a malformed explicit version or a current version that
/// cannot be parsed for a bump. Write failures are not errors; they surface
/// as reported [`WriteOutcome`]s.
pub async fn handle_sync(args: &SyncArgs, reporter: &dyn Reporter) -> Result<()> {
    let cargo = CargoManifest::new(args.options.cargo_path.clone());
    let current = cargo.read_version(reporter).await;
    println!("Current version: {}", current.bold());

    let target = match (&args.set, args.bump) {
        (Some(explicit), _) => Some(
            explicit
                .parse::<Version>()
                .context("please provide a valid version in X.Y.Z format")?,
        ),
        (None, Some(bump_type)) => {
            let parsed = current
                .parse::<Version>()
                .with_context(|| format!("current version '{current}' is not X.Y.Z"))?;
            println!("{} bump: {}", bump_type, display_bump(&parsed, bump_type));
            Some(parsed.bump(bump_type))
        }
        (None, None) => {
            println!("No version change requested, keeping the current version");
            None
        }
    };

    let target = match target {
        Some(target) if target.to_string() != current => target,
        _ => {
            println!("Version unchanged, nothing to write");
            return Ok(());
        }
    };

    println!("Setting version to {}", target.to_string().bold());
    let manifests: [Box<dyn Manifest>; 2] = [
        Box::new(cargo),
        Box::new(PythonInitFile::new(args.options.init_path.clone())),
    ];
    let mut outcomes = Vec::new();
    for manifest in &manifests {
        // Writes are independent: one target failing never stops the other.
        let outcome = manifest.write_version(&target).await;
        outcomes.push((manifest.label(), manifest.path().to_path_buf(), outcome));
    }
    report_outcomes(&outcomes);
    Ok(())
}

fn report_outcomes(outcomes: &[(&str, PathBuf, WriteOutcome)]) {
    for (label, path, outcome) in outcomes {
        println!(
            "  {label} {} {outcome}",
            path.display().to_string().bright_black()
        );
    }
    if outcomes.iter().all(|(_, _, outcome)| outcome.is_write()) {
        println!("{}", "Version synchronized successfully".green().bold());
    } else {
        println!("{}", "Version sync finished with warnings".yellow().bold());
    }
}
