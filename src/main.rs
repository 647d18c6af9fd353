mod config;
mod error;
mod mapping;
mod nbt;
mod paths;
mod remap;
mod world;

use clap::Parser;
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::load_cfg;
use crate::error::Result;
use crate::paths::{expand_path, PATH_SETTINGS};
use crate::remap::types::TransformReport;
use crate::remap::{transform_world, TransformOptions};

/// Remap Minecraft registry IDs inside a Forge world save
#[derive(Parser, Debug)]
#[command(name = "remapper", version, about, long_about = None)]
struct Args {
    /// Path to the world directory (the one holding level.dat)
    #[arg(short, long)]
    world: String,

    /// Path to the mapping file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(short, long)]
    mapping: String,

    /// Report what would change without writing the save
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Copy the save into <world>/remap_backups/ before overwriting it
    #[arg(long, default_value_t = false)]
    backup: bool,

    /// Settings file (defaults to $XDG_CONFIG_HOME/remapper/settings.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (prints every rewritten key)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let settings_path = args.config.clone().unwrap_or_else(|| PATH_SETTINGS.clone());
    let cfg = load_cfg(&settings_path);
    debug!("[remapper] Settings from {}: {:?}", settings_path.display(), cfg);

    let options = TransformOptions {
        save_candidates: cfg.save_candidates,
        backup: args.backup || cfg.backup_before_write,
        dry_run: args.dry_run,
    };

    let world = expand_path(&args.world);
    let mapping = expand_path(&args.mapping);

    let outcome = transform_world(&world, &mapping, &options);
    let status = finish(
        outcome,
        options.dry_run,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    ExitCode::from(status)
}

/// Print the outcome of a run and pick the exit status: the reference count
/// goes to `out` with status 0, an error goes to `err` with status 1.
fn finish(
    outcome: Result<TransformReport>,
    dry_run: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    match outcome {
        Ok(report) => {
            for (registry, count) in &report.result.per_registry {
                debug!("[remapper] {}: {} references", registry, count);
            }
            if let Some(backup) = &report.backup {
                info!("[remapper] Original kept at {}", backup.display());
            }
            if !report.written && !dry_run {
                debug!("[remapper] {} left unchanged", report.save.display());
            }

            let verb = if dry_run { "would remap" } else { "remapped" };
            let _ = writeln!(out, "{} {} references", verb, report.result.count());
            0
        }
        Err(e) => {
            let _ = writeln!(err, "remapper: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemapError;
    use crate::remap::types::RemapResult;

    fn report(total: usize, written: bool) -> TransformReport {
        TransformReport {
            save: PathBuf::from("/w/level.dat"),
            result: RemapResult {
                total,
                per_registry: vec![("minecraft:items".to_string(), total)],
            },
            written,
            backup: None,
        }
    }

    fn run(outcome: Result<TransformReport>, dry_run: bool) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = finish(outcome, dry_run, &mut out, &mut err);
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn success_prints_count_on_stdout() {
        let (status, out, err) = run(Ok(report(3, true)), false);
        assert_eq!(status, 0);
        assert_eq!(out, "remapped 3 references\n");
        assert!(err.is_empty());
    }

    #[test]
    fn nothing_to_do_still_reports_zero() {
        let (status, out, _) = run(Ok(report(0, false)), false);
        assert_eq!(status, 0);
        assert_eq!(out, "remapped 0 references\n");
    }

    #[test]
    fn dry_run_uses_conditional_wording() {
        let (status, out, _) = run(Ok(report(2, false)), true);
        assert_eq!(status, 0);
        assert_eq!(out, "would remap 2 references\n");
    }

    #[test]
    fn failure_prints_error_on_stderr_and_exits_one() {
        let outcome = Err(RemapError::MissingRegistryTable {
            segment: "FML".to_string(),
        });
        let (status, out, err) = run(outcome, false);
        assert_eq!(status, 1);
        assert!(out.is_empty());
        assert!(err.starts_with("remapper: missing registry table: 'FML'"));
        assert!(err.ends_with('\n'));
    }

    #[test]
    fn args_require_world_and_mapping() {
        assert!(Args::try_parse_from(["remapper", "--world", "w"]).is_err());
        let args =
            Args::try_parse_from(["remapper", "-w", "w", "-m", "ids.json", "--dry-run"]).unwrap();
        assert!(args.dry_run);
        assert!(!args.backup);
        assert_eq!(args.mapping, "ids.json");
    }
}
