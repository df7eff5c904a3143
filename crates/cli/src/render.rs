//! Text rendering of simulation reports.
//!
//! Each table is printed as a title, a dashed rule, a fixed-width header, another rule,
//! then one line per access. Columns are left-aligned in widths 12/15/10/10/10/8.

use std::fmt::Write;

use cachesim_core::common::{ADDRESS_WIDTH, to_binary_padded};
use cachesim_core::report::{Report, Table, TraceRow};

const RULE: &str = "--------------------------------------------------------------------";

/// Presentation switches for text output.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Zero-pad the address to 32 bits and the index and offset to their field widths.
    pub pad: bool,
    /// Append hit/miss totals after each table.
    pub stats: bool,
}

/// Renders every table of `report` in order.
pub fn render_report(report: &Report, options: RenderOptions) -> String {
    let mut out = String::new();
    for table in &report.tables {
        render_table(&mut out, table, options);
    }
    out
}

fn render_table(out: &mut String, table: &Table, options: RenderOptions) {
    let _ = writeln!(out, "\n{} Cache", table.label);
    let _ = writeln!(out, "{RULE}");
    push_line(
        out,
        ["Word Addr.", "Bin Addr.", "Tag", "Index", "Offset", "Hit/Miss"],
    );
    let _ = writeln!(out, "{RULE}");

    for row in &table.rows {
        let (address, index, offset) = binary_columns(table, row, options.pad);
        push_line(
            out,
            [
                &row.address.to_string(),
                &address,
                &row.tag_bin,
                &index,
                &offset,
                &row.outcome.to_string(),
            ],
        );
    }

    if options.stats {
        let stats = &table.stats;
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(
            out,
            "Hits: {}, Misses: {}, Hit rate: {:.2}%",
            stats.hits,
            stats.misses,
            stats.hit_rate() * 100.0
        );
    }
}

/// Address, index and offset columns, padded when requested.
fn binary_columns(table: &Table, row: &TraceRow, pad: bool) -> (String, String, String) {
    if !pad {
        return (
            row.address_bin.clone(),
            row.index_bin.clone(),
            row.offset_bin.clone(),
        );
    }
    let geometry = &table.geometry;
    let index = row.index.map_or_else(
        || row.index_bin.clone(),
        |index| to_binary_padded(index, geometry.index_bits as usize),
    );
    (
        to_binary_padded(row.address, ADDRESS_WIDTH as usize),
        index,
        to_binary_padded(row.offset, geometry.offset_bits as usize),
    )
}

fn push_line(out: &mut String, cols: [&str; 6]) {
    let [addr, bin, tag, index, offset, outcome] = cols;
    let _ = writeln!(
        out,
        "{addr:<12} {bin:<15} {tag:<10} {index:<10} {offset:<10} {outcome:<8}"
    );
}
