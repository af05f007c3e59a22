//! Console rendering of labeled sequences.

/// Formats one output line: `<label>: [v0, v1, ..., vn-1]`.
pub fn render(label: &str, data: &[i32]) -> String {
    let values = data
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{label}: [{values}]")
}

/// Prints a labeled sequence on its own line.
pub fn print_list(label: &str, data: &[i32]) {
    println!("{}", render(label, data));
}
