// Side-by-side line view of two documents' extracted text.
//
// Lines are paired by index; the shorter document is padded with blanks.

use colored::Colorize;

/// Width of the left column before the ` | ` divider.
pub const LEFT_WIDTH: usize = 60;

/// Pair up lines from two texts, padding the shorter side with "".
pub fn pair_lines<'a>(left: &'a str, right: &'a str) -> Vec<(&'a str, &'a str)> {
    let left: Vec<&str> = left.lines().collect();
    let right: Vec<&str> = right.lines().collect();
    let rows = left.len().max(right.len());

    (0..rows)
        .map(|i| {
            (
                left.get(i).copied().unwrap_or(""),
                right.get(i).copied().unwrap_or(""),
            )
        })
        .collect()
}

/// Render the header and paired rows as plain text lines.
pub fn render(left_name: &str, left: &str, right_name: &str, right: &str) -> Vec<String> {
    let mut out = vec![
        format!("{left_name:<LEFT_WIDTH$} | {right_name}"),
        "-".repeat(LEFT_WIDTH * 2 + 10),
    ];
    out.extend(
        pair_lines(left, right)
            .into_iter()
            .map(|(l, r)| format!("{l:<LEFT_WIDTH$} | {r}")),
    );
    out
}

/// Print the side-by-side view to the terminal.
pub fn display(left_name: &str, left: &str, right_name: &str, right: &str) {
    println!("\n{}\n", "=== Side-by-Side Document Comparison ===".bold());
    for line in render(left_name, left, right_name, right) {
        println!("{line}");
    }
    println!("\n{}\n", "Comparison complete".green());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorter_side_padded() {
        let rows = pair_lines("one\ntwo\nthree", "uno");
        assert_eq!(rows, vec![("one", "uno"), ("two", ""), ("three", "")]);
    }

    #[test]
    fn test_render_aligns_divider() {
        let lines = render("a.txt", "left", "b.txt", "right");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].find(" | "), Some(LEFT_WIDTH));
        assert!(lines[0].starts_with("a.txt "));
        assert!(lines[0].ends_with("| b.txt"));
    }
}
