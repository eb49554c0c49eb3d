//! Named per-point feature columns for points layers.

/// Ordered mapping from feature name to a per-point value column.
///
/// Column order is the declaration order, which decides which column wins
/// when a conversion can keep only one. Names are unique; inserting an
/// existing name replaces the column in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Features {
    columns: Vec<(String, Vec<f64>)>,
}

impl Features {
    /// Create an empty feature table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a column under a name, replacing any existing column in place.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        let name = name.into();
        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some(column) => column.1 = values,
            None => self.columns.push((name, values)),
        }
    }

    /// Number of feature columns.
    pub fn num_features(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Get the first declared column, if any.
    pub fn first_column(&self) -> Option<(&str, &[f64])> {
        self.columns
            .first()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Iterate over columns in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Iterate over column names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

impl From<Vec<(String, Vec<f64>)>> for Features {
    fn from(columns: Vec<(String, Vec<f64>)>) -> Self {
        let mut features = Self::new();
        for (name, values) in columns {
            features.insert(name, values);
        }
        features
    }
}

impl From<Vec<(&str, Vec<f64>)>> for Features {
    fn from(columns: Vec<(&str, Vec<f64>)>) -> Self {
        let mut features = Self::new();
        for (name, values) in columns {
            features.insert(name, values);
        }
        features
    }
}
