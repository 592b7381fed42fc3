// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `sortbench list` command - List registered algorithms.

use sortbench_core::AlgorithmRegistry;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub fn execute() -> Result<(), Box<dyn std::error::Error>> {
    let registry = AlgorithmRegistry::standard();

    println!("╔════════════════════════════════════════════════════════════════════╗");
    println!("║                      REGISTERED ALGORITHMS                         ║");
    println!("╠═══════════════════════╦════════════╦════════════╦══════════════════╣");
    println!("║ Name                  ║ Stable     ║ In-place   ║ Bound-sensitive  ║");
    println!("╠═══════════════════════╬════════════╬════════════╬══════════════════╣");

    for algorithm in registry.iter() {
        let traits = algorithm.traits();
        println!(
            "║ {:<21} ║ {:<10} ║ {:<10} ║ {:<16} ║",
            algorithm.name(),
            yes_no(traits.stable),
            yes_no(traits.in_place),
            yes_no(traits.bound_sensitive)
        );
    }

    println!("╚═══════════════════════╩════════════╩════════════╩══════════════════╝");
    println!();
    println!("Total: {} algorithm(s)", registry.len());

    Ok(())
}
