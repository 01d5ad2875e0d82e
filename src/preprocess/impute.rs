//! Missing-value imputation
//!
//! Categorical columns are filled with their most frequent training value,
//! numeric columns with their training mean. The fill values are fixed at
//! fit time; transforming a test table never looks at the test data's own
//! statistics.

use crate::core::{PrepError, Result, Table, Value};
use std::collections::HashMap;

/// Per-column fill values learned from a training table
#[derive(Debug, Clone)]
pub struct Imputer {
    fill: Vec<Value>,
}

impl Imputer {
    /// Learn one fill value per column
    ///
    /// Categorical columns use the most frequent observed value, ties
    /// broken in favor of the value seen first. Numeric columns use the
    /// arithmetic mean of the non-missing values. A column with nothing
    /// observed has no defensible fill value and fails.
    pub fn fit(table: &Table) -> Result<Self> {
        let mut fill = Vec::with_capacity(table.n_cols());

        for j in 0..table.n_cols() {
            let observed: Vec<&Value> =
                table.column(j).filter(|v| !v.is_missing()).collect();

            if observed.is_empty() {
                return Err(PrepError::Imputation { column: j });
            }

            let is_text = observed.iter().any(|v| v.as_text().is_some());
            if is_text {
                fill.push(Value::Text(most_frequent(&observed).to_string()));
            } else {
                let sum: f64 = observed.iter().filter_map(|v| v.as_num()).sum();
                fill.push(Value::Num(sum / observed.len() as f64));
            }
        }

        Ok(Self { fill })
    }

    /// Replace every missing value with its column's fill value
    pub fn transform(&self, table: &Table) -> Result<Table> {
        if table.n_cols() != self.fill.len() {
            return Err(PrepError::ShapeMismatch {
                expected: self.fill.len(),
                actual: table.n_cols(),
            });
        }

        let rows = table
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, v)| {
                        if v.is_missing() {
                            self.fill[j].clone()
                        } else {
                            v.clone()
                        }
                    })
                    .collect()
            })
            .collect();

        Table::new(rows)
    }

    /// Fill value learned for a column
    ///
    /// # Panics
    /// Panics if `j` is out of range
    pub fn fill_value(&self, j: usize) -> &Value {
        &self.fill[j]
    }
}

/// Most frequent text value, first-seen winning ties
fn most_frequent<'a>(observed: &[&'a Value]) -> &'a str {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for v in observed {
        if let Some(s) = v.as_text() {
            let count = counts.entry(s).or_insert(0);
            if *count == 0 {
                order.push(s);
            }
            *count += 1;
        }
    }

    let mut best = order[0];
    for &candidate in &order[1..] {
        if counts[candidate] > counts[best] {
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn table(rows: Vec<Vec<Value>>) -> Table {
        Table::new(rows).unwrap()
    }

    #[test]
    fn test_fit_most_frequent_for_text() {
        let t = table(vec![
            vec![text("a")],
            vec![text("b")],
            vec![text("b")],
            vec![Value::Missing],
        ]);

        let imputer = Imputer::fit(&t).unwrap();
        assert_eq!(imputer.fill_value(0), &text("b"));
    }

    #[test]
    fn test_fit_tie_broken_by_first_seen() {
        let t = table(vec![
            vec![text("x")],
            vec![text("y")],
            vec![text("y")],
            vec![text("x")],
        ]);

        let imputer = Imputer::fit(&t).unwrap();
        assert_eq!(imputer.fill_value(0), &text("x"));
    }

    #[test]
    fn test_fit_mean_for_numeric() {
        let t = table(vec![
            vec![Value::Num(1.0)],
            vec![Value::Num(3.0)],
            vec![Value::Missing],
        ]);

        let imputer = Imputer::fit(&t).unwrap();
        assert_eq!(imputer.fill_value(0), &Value::Num(2.0));
    }

    #[test]
    fn test_fit_all_missing_column_fails() {
        let t = table(vec![
            vec![Value::Num(1.0), Value::Missing],
            vec![Value::Num(2.0), Value::Missing],
        ]);

        let result = Imputer::fit(&t);
        assert!(matches!(result, Err(PrepError::Imputation { column: 1 })));
    }

    #[test]
    fn test_transform_replaces_missing_only() {
        let train = table(vec![
            vec![text("a"), Value::Num(2.0)],
            vec![text("a"), Value::Num(4.0)],
        ]);
        let imputer = Imputer::fit(&train).unwrap();

        let t = table(vec![
            vec![Value::Missing, Value::Num(10.0)],
            vec![text("z"), Value::Missing],
        ]);
        let out = imputer.transform(&t).unwrap();

        assert_eq!(out.row(0), &[text("a"), Value::Num(10.0)]);
        assert_eq!(out.row(1), &[text("z"), Value::Num(3.0)]);
    }

    #[test]
    fn test_transform_is_idempotent_when_nothing_missing() {
        let train = table(vec![
            vec![Value::Num(1.0)],
            vec![Value::Num(2.0)],
            vec![Value::Missing],
        ]);
        let imputer = Imputer::fit(&train).unwrap();

        let once = imputer.transform(&train).unwrap();
        let twice = imputer.transform(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_transform_uses_training_statistics_only() {
        let train = table(vec![vec![Value::Num(2.0)], vec![Value::Num(4.0)]]);
        let imputer = Imputer::fit(&train).unwrap();

        // Test table with very different values; the fill stays at the
        // training mean of 3.0.
        let test = table(vec![vec![Value::Num(100.0)], vec![Value::Missing]]);
        let out = imputer.transform(&test).unwrap();
        assert_eq!(out.row(1)[0], Value::Num(3.0));
    }

    #[test]
    fn test_transform_width_mismatch() {
        let train = table(vec![vec![Value::Num(1.0)]]);
        let imputer = Imputer::fit(&train).unwrap();

        let wide = table(vec![vec![Value::Num(1.0), Value::Num(2.0)]]);
        assert!(matches!(
            imputer.transform(&wide),
            Err(PrepError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_transform_preserves_row_count() {
        let train = table(vec![vec![Value::Num(1.0)], vec![Value::Missing]]);
        let imputer = Imputer::fit(&train).unwrap();
        let out = imputer.transform(&train).unwrap();
        assert_eq!(out.n_rows(), train.n_rows());
    }
}
