//! Preset suite command.

use std::path::Path;

use console::style;

use muninn_sweep::{RunMetadata, append_records, presets, run_batch};

/// Execute the preset command: both curated grids, one report file.
pub fn execute(output: &Path, jobs: usize) -> anyhow::Result<()> {
    let grids = [
        ("depolarizing", presets::depolarizing_preset()),
        ("biased", presets::biased_preset()),
    ];

    let mut total = 0_usize;
    for (name, grid) in grids {
        let configs = grid.configs();
        let metadata = RunMetadata::capture(format!("preset-{name}"));
        let records = run_batch(&configs, &metadata, jobs)?;
        total += records.len();
        append_records(output, &records)?;
        println!(
            "{} preset {} ({} points)",
            style("finished").green().bold(),
            name,
            records.len()
        );
    }

    println!("Appended {} rows to {}", total, output.display());
    Ok(())
}
