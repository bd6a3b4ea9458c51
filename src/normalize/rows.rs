//! Schema-less serialization of query-result rows.
//!
//! The query tool accepts arbitrary `SELECT` shapes, so rows are rendered as
//! generic tuple text rather than through a typed table model. One line per
//! row, values in column order.

use libsql::Value;

/// Render a single row as a tuple line, e.g. `(42,)` or `('Atelier RAG', '2024-06-03')`.
///
/// Single-column rows keep a trailing comma so a one-value row stays
/// distinguishable from a bare scalar.
pub fn format_row(values: &[Value]) -> String {
    let parts: Vec<String> = values.iter().map(render_value).collect();
    match parts.as_slice() {
        [single] => format!("({},)", single),
        _ => format!("({})", parts.join(", ")),
    }
}

/// Render a result set as one text block: each row on its own line, each
/// line preceded by a newline, native row order preserved.
pub fn format_rows(rows: &[Vec<Value>]) -> String {
    rows.iter()
        .map(|row| format!("\n{}", format_row(row)))
        .collect()
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
        Value::Blob(b) => format!("<blob {} bytes>", b.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column_keeps_trailing_comma() {
        assert_eq!(format_row(&[Value::Integer(42)]), "(42,)");
    }

    #[test]
    fn test_multi_column_row() {
        let row = vec![
            Value::Text("Atelier RAG".into()),
            Value::Text("2024-06-03".into()),
        ];
        assert_eq!(format_row(&row), "('Atelier RAG', '2024-06-03')");
    }

    #[test]
    fn test_null_and_real_rendering() {
        let row = vec![Value::Null, Value::Real(3.5)];
        assert_eq!(format_row(&row), "(NULL, 3.5)");
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        let row = vec![Value::Text("l'atelier".into())];
        assert_eq!(format_row(&row), "('l''atelier',)");
    }

    #[test]
    fn test_format_rows_prefixes_each_line() {
        let rows = vec![vec![Value::Integer(1)], vec![Value::Integer(2)]];
        assert_eq!(format_rows(&rows), "\n(1,)\n(2,)");
    }

    #[test]
    fn test_empty_result_set_is_empty_text() {
        assert_eq!(format_rows(&[]), "");
    }
}
