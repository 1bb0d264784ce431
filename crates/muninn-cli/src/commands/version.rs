//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - surface-code memory-experiment simulator",
        style("Muninn").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  muninn-code    Layout, noise specification, syndrome blocks");
    println!("  muninn-sim     Sampling backends (statevector, frame)");
    println!("  muninn-decode  Decoders (local, mwpm)");
    println!("  muninn-sweep   Sweep orchestration and report rows");
    println!("  muninn-cli     Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
