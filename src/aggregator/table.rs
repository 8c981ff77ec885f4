//! Per-method accumulator table.

/// Method → one value per category, in configured order
///
/// **Public** - built by `accumulate`, normalized in place, then written
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    methods: Vec<String>,
    rows: Vec<Vec<f64>>,
    category_count: usize,
}

impl ResultTable {
    /// Create a table with every accumulator at zero
    pub fn new(methods: &[String], category_count: usize) -> Self {
        Self {
            methods: methods.to_vec(),
            rows: vec![vec![0.0; category_count]; methods.len()],
            category_count,
        }
    }

    /// Build a table from ready-made rows
    ///
    /// Returns `None` if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<(String, Vec<f64>)>) -> Option<Self> {
        let category_count = rows.first().map(|(_, values)| values.len()).unwrap_or(0);
        if rows.iter().any(|(_, values)| values.len() != category_count) {
            return None;
        }

        let (methods, rows): (Vec<String>, Vec<Vec<f64>>) = rows.into_iter().unzip();
        Some(Self {
            methods,
            rows,
            category_count,
        })
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn category_count(&self) -> usize {
        self.category_count
    }

    /// Values of one method, or `None` for an unknown method
    pub fn values(&self, method: &str) -> Option<&[f64]> {
        self.methods
            .iter()
            .position(|m| m == method)
            .map(|idx| self.rows[idx].as_slice())
    }

    /// Single cell lookup
    pub fn get(&self, method: &str, category: usize) -> Option<f64> {
        self.values(method).and_then(|v| v.get(category).copied())
    }

    /// Iterate `(method, values)` in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.methods
            .iter()
            .map(String::as_str)
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    pub(crate) fn add(&mut self, method: usize, category: usize, value: f64) {
        self.rows[method][category] += value;
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut Vec<f64>> {
        self.rows.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let methods = vec!["a".to_string(), "b".to_string()];
        let table = ResultTable::new(&methods, 3);
        assert_eq!(table.values("a"), Some(&[0.0, 0.0, 0.0][..]));
        assert_eq!(table.category_count(), 3);
        assert_eq!(table.values("missing"), None);
    }

    #[test]
    fn test_add_and_get() {
        let methods = vec!["a".to_string()];
        let mut table = ResultTable::new(&methods, 2);
        table.add(0, 1, 2.5);
        table.add(0, 1, 2.5);
        assert_eq!(table.get("a", 1), Some(5.0));
        assert_eq!(table.get("a", 2), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![
            ("a".to_string(), vec![1.0, 2.0]),
            ("b".to_string(), vec![1.0]),
        ];
        assert!(ResultTable::from_rows(rows).is_none());
    }

    #[test]
    fn test_iter_keeps_order() {
        let rows = vec![
            ("z".to_string(), vec![1.0]),
            ("a".to_string(), vec![2.0]),
        ];
        let table = ResultTable::from_rows(rows).unwrap();
        let names: Vec<&str> = table.iter().map(|(m, _)| m).collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
