/// A simple text-based table generator for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
    right_aligned: Vec<bool>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.len()).collect();
        let right_aligned = vec![false; headers.len()];
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
            right_aligned,
        }
    }

    /// Right-align a column (for numeric values such as amounts)
    pub fn right_align(mut self, col: usize) -> Self {
        if col < self.right_aligned.len() {
            self.right_aligned[col] = true;
        }
        self
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row_strings: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        // Update column widths if needed
        for (i, col) in row_strings.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.len());
            }
        }

        self.rows.push(row_strings);
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    /// Render a single row with proper spacing. The final column gets no
    /// trailing padding unless it is right-aligned.
    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                let width = self.col_widths[i];
                let last = i + 1 == row.len();
                if self.right_aligned[i] {
                    line.push_str(&format!("{:>width$}", col, width = width));
                } else if last {
                    line.push_str(col);
                } else {
                    line.push_str(&format!("{:<width$}", col, width = width));
                }
                if !last {
                    line.push_str(" | ");
                }
            }
        }
        line
    }

    /// Render a separator line
    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_grow_with_rows() {
        let mut table = Table::new(vec!["Who", "Amount"]);
        table.add_row(vec!["Alice", "500.000"]);
        table.add_row(vec!["Bob", "1.000"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Who   | Amount");
        assert_eq!(lines[1], "------+--------");
        assert_eq!(lines[2], "Alice | 500.000");
        assert_eq!(lines[3], "Bob   | 1.000");
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let mut table = Table::new(vec!["Who", "Amount"]);
        table.add_row(vec!["Alice", "500.000"]);
        table.add_row(vec!["Bob", "1.000"]);

        let rendered = table.render();
        assert!(rendered.lines().all(|line| line == line.trim_end()));
    }

    #[test]
    fn test_right_aligned_column() {
        let mut table = Table::new(vec!["Who", "Amount"]).right_align(1);
        table.add_row(vec!["Alice", "500.000"]);
        table.add_row(vec!["Bob", "1.000"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "Bob   |   1.000");
    }
}
