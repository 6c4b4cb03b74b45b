use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory containing one CSV file per genre
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Known genre set, in menu order; each genre maps to `<genre>.csv`
    #[serde(default = "default_genres")]
    pub genres: Vec<String>,

    /// Movies shown per genre in the startup overview table
    #[serde(default = "default_overview_top")]
    pub overview_top: usize,

    /// Movies recommended for a single selected genre
    #[serde(default = "default_genre_top")]
    pub genre_top: usize,

    /// Maximum number of fuzzy candidates offered for disambiguation
    #[serde(default = "default_fuzzy_limit")]
    pub fuzzy_limit: usize,

    /// Minimum similarity ratio for a fuzzy candidate
    #[serde(default = "default_fuzzy_cutoff")]
    pub fuzzy_cutoff: f64,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_genres() -> Vec<String> {
    [
        "Action",
        "Romance",
        "Thriller",
        "War",
        "Animation",
        "Crime",
        "Horror",
        "History",
        "Adventure",
        "Sport",
    ]
    .iter()
    .map(|g| g.to_string())
    .collect()
}

fn default_overview_top() -> usize {
    3
}

fn default_genre_top() -> usize {
    5
}

fn default_fuzzy_limit() -> usize {
    10
}

fn default_fuzzy_cutoff() -> f64 {
    0.3
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            genres: default_genres(),
            overview_top: default_overview_top(),
            genre_top: default_genre_top(),
            fuzzy_limit: default_fuzzy_limit(),
            fuzzy_cutoff: default_fuzzy_cutoff(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_genre_set_is_ordered() {
        let config = Config::default();
        assert_eq!(config.genres.len(), 10);
        assert_eq!(config.genres[0], "Action");
        assert_eq!(config.genres[9], "Sport");
    }

    #[test]
    fn test_default_limits() {
        let config = Config::default();
        assert_eq!(config.overview_top, 3);
        assert_eq!(config.genre_top, 5);
        assert_eq!(config.fuzzy_limit, 10);
        assert!((config.fuzzy_cutoff - 0.3).abs() < f64::EPSILON);
    }
}
