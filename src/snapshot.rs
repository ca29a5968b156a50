use crate::analysis::record::{FighterRecord, WeightClassAverage};
use crate::api::models::Document;
use crate::api::DocumentSource;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// On-disk layout: `{ "fetched_at": .., "collections": { "<name>": [ { "id": .., ... } ] } }`
#[derive(Debug, Default, Serialize, Deserialize)]
struct SnapshotData {
    #[serde(default)]
    fetched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    collections: BTreeMap<String, Vec<Document>>,
}

/// A local JSON export read as a document source.
pub struct SnapshotFile {
    path: PathBuf,
    data: SnapshotData,
}

impl SnapshotFile {
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::SnapshotError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let data: SnapshotData = serde_json::from_str(&content).map_err(|e| {
            AppError::JsonError(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), collections = data.collections.len(), "opened snapshot file");
        Ok(SnapshotFile {
            path: path.to_path_buf(),
            data,
        })
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.data.fetched_at
    }
}

impl DocumentSource for SnapshotFile {
    fn fetch_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        match self.data.collections.get(collection) {
            Some(documents) => Ok(documents.clone()),
            None => {
                warn!(collection, path = %self.path.display(), "collection missing from snapshot");
                Ok(Vec::new())
            }
        }
    }
}

/// Immutable view of both collections for one run.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub fetched_at: DateTime<Utc>,
    pub fighters: Vec<FighterRecord>,
    pub weight_classes: Vec<WeightClassAverage>,
}

impl Snapshot {
    /// Fighter fetch failures propagate. A failed weight-class fetch only
    /// drops the cohort baselines.
    pub fn load(
        source: &dyn DocumentSource,
        fighters_collection: &str,
        weight_class_collection: &str,
    ) -> Result<Self, AppError> {
        let fighters = decode_all(source.fetch_all(fighters_collection)?, FighterRecord::from_document);

        let weight_classes = match source.fetch_all(weight_class_collection) {
            Ok(documents) => decode_all(documents, WeightClassAverage::from_document),
            Err(e) => {
                warn!(collection = weight_class_collection, error = %e, "weight class averages unavailable");
                Vec::new()
            }
        };

        info!(
            fighters = fighters.len(),
            weight_classes = weight_classes.len(),
            "snapshot loaded"
        );
        Ok(Snapshot {
            fetched_at: Utc::now(),
            fighters,
            weight_classes,
        })
    }

    pub fn read(
        path: &Path,
        fighters_collection: &str,
        weight_class_collection: &str,
    ) -> Result<Self, AppError> {
        let file = SnapshotFile::open(path)?;
        let mut snapshot = Snapshot::load(&file, fighters_collection, weight_class_collection)?;
        if let Some(fetched_at) = file.fetched_at() {
            snapshot.fetched_at = fetched_at;
        }
        Ok(snapshot)
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fight_metrics")
            .join("snapshot.json")
    }

    pub fn save(
        &self,
        path: &Path,
        fighters_collection: &str,
        weight_class_collection: &str,
    ) -> Result<(), AppError> {
        let mut collections = BTreeMap::new();
        collections.insert(
            fighters_collection.to_string(),
            self.fighters
                .iter()
                .map(|f| to_document(&f.id, f))
                .collect::<Result<Vec<_>, _>>()?,
        );
        collections.insert(
            weight_class_collection.to_string(),
            self.weight_classes
                .iter()
                .map(|w| to_document(&w.id, w))
                .collect::<Result<Vec<_>, _>>()?,
        );

        let data = SnapshotData {
            fetched_at: Some(self.fetched_at),
            collections,
        };
        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize snapshot: {}", e)))?;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::SnapshotError(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        fs::write(path, json).map_err(|e| {
            AppError::SnapshotError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), "snapshot saved");
        Ok(())
    }

    /// Cohort averages for the fighter's weight class, matched by name.
    pub fn weight_class_for(&self, record: &FighterRecord) -> Option<&WeightClassAverage> {
        let name = record.weight_class.as_deref()?.trim();
        self.weight_classes
            .iter()
            .find(|wc| wc.weight_class_name.trim().eq_ignore_ascii_case(name))
    }

    /// Look a fighter up by document id, fighter code or display name.
    pub fn find_fighter(&self, query: &str) -> Option<&FighterRecord> {
        let query = query.trim();
        self.fighters
            .iter()
            .find(|f| f.id == query || f.code() == query)
            .or_else(|| {
                self.fighters
                    .iter()
                    .find(|f| f.display_name().eq_ignore_ascii_case(query))
            })
    }
}

fn decode_all<T>(documents: Vec<Document>, decode: fn(Document) -> Result<T, AppError>) -> Vec<T> {
    let total = documents.len();
    let decoded: Vec<T> = documents
        .into_iter()
        .filter_map(|doc| {
            let id = doc.id.clone();
            decode(doc)
                .map_err(|e| warn!(id = %id, error = %e, "skipping invalid document"))
                .ok()
        })
        .collect();

    if decoded.len() < total {
        warn!(skipped = total - decoded.len(), total, "some documents failed validation");
    }
    decoded
}

fn to_document<T: Serialize>(id: &str, value: &T) -> Result<Document, AppError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(mut fields)) => {
            fields.remove("id");
            Ok(Document {
                id: id.to_string(),
                fields,
            })
        }
        Ok(_) => Err(AppError::JsonError(format!("document '{}' is not an object", id))),
        Err(e) => Err(AppError::JsonError(e.to_string())),
    }
}
