use serde::{Deserialize, Serialize};

/// One movie entry loaded from a genre catalog
///
/// Non-numeric columns the presenter cares about are pulled out by name;
/// every numeric column ends up in `features`, aligned with the owning
/// catalog's `feature_names`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogRow {
    pub title: String,
    pub director: Option<String>,
    pub runtime: Option<f64>,
    pub release: Option<String>,
    /// Genre catalog the row was loaded from
    pub genre: String,
    /// Numeric rating columns, in source column order
    pub features: Vec<f64>,
}

/// All rows loaded from one genre's table
///
/// `feature_names` and each row's `features` share the same column order.
/// Row order matches the source file; the feature matrix, the decomposition
/// and the ranking all rely on that positional alignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenreCatalog {
    pub genre: String,
    pub feature_names: Vec<String>,
    pub rows: Vec<CatalogRow>,
}

impl GenreCatalog {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A recommended movie with its reconstructed score
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedMovie {
    pub row: CatalogRow,
    pub score: f64,
}
