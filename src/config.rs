use crate::error::AppError;
use std::env;

pub const DEFAULT_FIGHTERS_COLLECTION: &str = "fighterData";
pub const DEFAULT_WEIGHT_CLASS_COLLECTION: &str = "weightClass";
pub const DEFAULT_PAGE_SIZE: u32 = 300;
const MAX_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub project_id: Option<String>,
    pub api_key: Option<String>,
    pub fighters_collection: String,
    pub weight_class_collection: String,
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project_id: None,
            api_key: None,
            fighters_collection: DEFAULT_FIGHTERS_COLLECTION.to_string(),
            weight_class_collection: DEFAULT_WEIGHT_CLASS_COLLECTION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let page_size = match env::var("FIRESTORE_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Config {
            project_id: non_empty(env::var("FIRESTORE_PROJECT_ID").ok()),
            api_key: non_empty(env::var("FIRESTORE_API_KEY").ok()),
            fighters_collection: env::var("FIGHTERS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_FIGHTERS_COLLECTION.to_string()),
            weight_class_collection: env::var("WEIGHT_CLASS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_WEIGHT_CLASS_COLLECTION.to_string()),
            page_size,
        })
    }

    /// The project id is only needed when talking to Firestore.
    pub fn require_project_id(&self) -> Result<&str, AppError> {
        self.project_id.as_deref().ok_or_else(|| {
            AppError::ConfigError(
                "FIRESTORE_PROJECT_ID not found in environment or .env file".to_string(),
            )
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_page_size(raw: &str) -> Result<u32, AppError> {
    let size: u32 = raw.trim().parse().map_err(|_| {
        AppError::ConfigError(format!("FIRESTORE_PAGE_SIZE must be a number, got '{}'", raw))
    })?;

    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(AppError::ConfigError(format!(
            "FIRESTORE_PAGE_SIZE must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, size
        )));
    }

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("300").unwrap(), 300);
        assert_eq!(parse_page_size(" 25 ").unwrap(), 25);
        assert!(parse_page_size("0").is_err());
        assert!(parse_page_size("5000").is_err());
        assert!(parse_page_size("lots").is_err());
    }

    #[test]
    fn test_require_project_id() {
        let config = Config::default();
        assert!(matches!(config.require_project_id(), Err(AppError::ConfigError(_))));

        let config = Config {
            project_id: Some("fightstats".to_string()),
            ..Config::default()
        };
        assert_eq!(config.require_project_id().unwrap(), "fightstats");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some("key".to_string())), Some("key".to_string()));
        assert_eq!(non_empty(None), None);
    }
}
