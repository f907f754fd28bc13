//! Plain-text rendering of product lists for terminal output.

use crate::model::Product;

const HEADERS: [&str; 4] = ["ID", "Name", "Quantity", "Price"];

/// Renders products as an aligned table.
///
/// ID and Name are left-aligned, Quantity and Price right-aligned, prices with
/// two decimals. An empty list renders as `(no results)`.
pub fn format_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "(no results)".to_string();
    }

    let rows: Vec<[String; 4]> = products
        .iter()
        .map(|p| {
            [
                p.id().to_string(),
                p.name().to_string(),
                p.quantity().to_string(),
                format!("{:.2}", p.price()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(str::to_string);
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&header, &widths));
    lines.push("-".repeat(widths.iter().sum::<usize>() + 6));
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.join("\n")
}

fn format_row(row: &[String; 4], widths: &[usize; 4]) -> String {
    format!(
        "{:<w0$}  {:<w1$}  {:>w2$}  {:>w3$}",
        row[0],
        row[1],
        row[2],
        row[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    )
}
