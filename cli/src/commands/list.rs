use modelfetch_core::selection::{Entry, Selection};
use modelfetch_core::CATALOG;

pub fn execute() {
    // Marks show the defaults a fresh selection starts with.
    let selection = Selection::new(CATALOG);

    println!("{:<4} {:<44} {:<12} {}", "", "NAME", "TIER", "FOLDER");
    println!("{}", "-".repeat(80));

    for entry in selection.entries() {
        println!("{}", format_row(entry));
    }

    println!("\nRun `modelfetch select` to choose and download models.");
}

fn format_row(entry: &Entry) -> String {
    format!(
        "{:<4} {:<44} {:<12} {}",
        entry.mark().as_str(),
        entry.descriptor.name,
        entry.descriptor.tier.as_str(),
        entry.descriptor.destination
    )
}
