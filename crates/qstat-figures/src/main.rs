// ─────────────────────────────────────────────────────────────────────
// QStat Distributions — Figure Set
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Renders the five distribution figures into the configured output
//! directory. With no argument everything runs from defaults; an
//! optional JSON config path overrides parameters.

use std::path::PathBuf;

use qstat_types::config::JobConfig;
use qstat_types::error::QstatResult;

mod common;
mod contour_be;
mod contour_fd;
mod surfaces;
mod sweep;
mod validation;

fn main() {
    if let Err(err) = run() {
        eprintln!("qstat-figures: {err}");
        std::process::exit(1);
    }
}

fn run() -> QstatResult<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => JobConfig::from_file(&path)?,
        None => JobConfig::default(),
    };
    cfg.validate()?;

    let out = PathBuf::from(&cfg.output_dir);
    std::fs::create_dir_all(&out)?;

    let saved = [
        validation::render(&cfg, &out)?,
        sweep::render(&cfg, &out)?,
        surfaces::render(&cfg, &out)?,
        contour_fd::render(&cfg, &out)?,
        contour_be::render(&cfg, &out)?,
    ];
    for path in saved {
        println!("Saved {}", path.display());
    }
    Ok(())
}
