use std::fmt;

/// The tabular (or acknowledgement) result of one executed statement.
/// `empty` marks DDL/DML acknowledgements that carry no rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryResponse {
    pub fields: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub empty: bool,
}

impl QueryResponse {
    /// An acknowledgement response, rendered as the literal `ok`.
    pub fn ack() -> Self {
        Self {
            empty: true,
            ..Self::default()
        }
    }

    pub fn table(fields: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            fields,
            rows,
            empty: false,
        }
    }
}

impl fmt::Display for QueryResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.empty {
            return f.write_str("ok");
        }

        let mut header = String::new();
        for field in &self.fields {
            header.push_str("| ");
            header.push_str(field);
            header.push_str("\t\t");
        }
        header.push('|');

        writeln!(f, "{}", header)?;
        writeln!(f, "+{}+", "=".repeat(header.len().saturating_sub(2)))?;

        for row in &self.rows {
            for cell in row {
                write!(f, "| {}\t\t", cell)?;
            }
            writeln!(f, "|")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_renders_ok() {
        assert_eq!(QueryResponse::ack().to_string(), "ok");
    }

    #[test]
    fn table_renders_header_separator_and_rows() {
        let response = QueryResponse::table(
            vec!["name".to_string(), "age".to_string()],
            vec![vec!["Alice".to_string(), "30".to_string()]],
        );

        let rendered = response.to_string();
        let mut lines = rendered.lines();

        assert_eq!(lines.next(), Some("| name\t\t| age\t\t|"));
        let separator = lines.next().unwrap();
        assert!(separator.starts_with("+="));
        assert!(separator.ends_with("=+"));
        assert_eq!(lines.next(), Some("| Alice\t\t| 30\t\t|"));
        assert_eq!(lines.next(), None);
    }
}
