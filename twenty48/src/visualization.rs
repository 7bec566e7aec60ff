use crate::{tile_value, Grid};

/// Number of decimal digits needed to print `n`.
pub fn decimal_digits(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Render the grid as a box drawing, one line per text row.
///
/// Every cell is `digits` characters wide plus padding, and tile values are
/// left-aligned. Empty cells are blank.
pub fn visualize_grid(grid: &Grid, digits: usize) -> String {
    let size = grid.size();
    let cell_width = digits + 2;
    let horizontal = format!("+{}", "-".repeat(cell_width)).repeat(size) + "+\n";
    let spacer = format!("|{}", " ".repeat(cell_width)).repeat(size) + "|\n";

    let mut result = String::new();
    for row in grid.rows() {
        result += &horizontal;
        result += &spacer;
        for &exponent in row {
            if exponent == 0 {
                result += &format!("|{}", " ".repeat(cell_width));
            } else {
                result += &format!("| {:<digits$} ", tile_value(exponent), digits = digits);
            }
        }
        result += "|\n";
        result += &spacer;
    }
    result += &horizontal;
    result
}
