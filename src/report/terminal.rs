use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::attribution::Attribution;
use crate::models::Dependency;

/// Print a summary of the run after the document was written.
pub fn render(attribution: &Attribution, deps: &[Dependency], verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let excluded = attribution.excluded.len();
    let unlicensed = attribution.unlicensed.len();

    println!(
        "\n {} v{}\n",
        "upstream-licenses".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        " Dependencies: {}  Attributed: {}  Excluded: {}  Unlicensed: {}\n",
        deps.len(),
        attribution.attributed.to_string().green(),
        excluded.to_string().yellow(),
        unlicensed.to_string().red(),
    );

    if !attribution.groups.is_empty() {
        render_groups(attribution);
        println!();
    }

    if verbose && excluded > 0 {
        println!(
            " {} Dependencies with no acceptable license:\n",
            "[EXCLUDED]".yellow().bold()
        );
        render_excluded(attribution);
        println!();
    }
}

fn render_groups(attribution: &Attribution) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Count").add_attribute(Attribute::Bold),
            Cell::new("Dependencies").add_attribute(Attribute::Bold),
        ]);

    for group in &attribution.groups {
        table.add_row(vec![
            Cell::new(&group.license).fg(Color::Green),
            Cell::new(group.dependencies.len()).set_alignment(CellAlignment::Right),
            Cell::new(group.dependencies.join(", ")),
        ]);
    }

    println!("{}", table);
}

fn render_excluded(attribution: &Attribution) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Unsatisfied").add_attribute(Attribute::Bold),
        ]);

    for dep in &attribution.excluded {
        table.add_row(vec![
            Cell::new(&dep.name),
            Cell::new(&dep.license),
            Cell::new(&dep.unsatisfied).fg(Color::Yellow),
        ]);
    }

    println!("{}", table);
}
