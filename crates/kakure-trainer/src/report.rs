//! Console formatting of matrices and decoded sequences.

use kakure_core::HiddenState;

/// Format a probability matrix as tab-separated rows, fixed precision.
pub fn format_matrix(matrix: &[Vec<f64>]) -> String {
    let mut out = String::new();
    for row in matrix {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:.6}")).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

/// Render a decoded state sequence as its label string.
pub fn decoded_labels(decoded: &[HiddenState]) -> String {
    decoded.iter().map(|s| s.to_string()).collect()
}
