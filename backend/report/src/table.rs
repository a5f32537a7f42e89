//! Markdown table rendering of the product table, shared by the report file
//! and the terminal output.

use std::fmt::Write;

use shelfscan_core::{lifespan_display, InventoryRecord};

/// Column order of the product table.
pub const COLUMNS: [&str; 7] = [
    "Sl No",
    "Timestamp",
    "Brand",
    "Expiry Date",
    "Count",
    "Expired",
    "Expected Lifespan (Days)",
];

/// Render the records as a Markdown table, one row per record in sequence order.
pub fn render_table(records: &[InventoryRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "| {} |", COLUMNS.join(" | "));
    out.push('|');
    for _ in COLUMNS {
        out.push_str(" --- |");
    }
    out.push('\n');
    for r in records {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} | {} |",
            r.sequence_number,
            r.timestamp.to_rfc3339(),
            r.brand,
            r.expiry_date,
            r.count,
            r.expired,
            lifespan_display(r.expected_lifespan_days),
        );
    }
    out
}
