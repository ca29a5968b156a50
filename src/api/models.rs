use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value as JsonValue};
use std::collections::HashMap;

/// A plain key/value document with its id, as handed to the analysis layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, JsonValue>,
}

// Firestore REST: documents.list response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<FirestoreDocument>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct FirestoreDocument {
    /// projects/{project}/databases/(default)/documents/{collection}/{id}
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, FirestoreValue>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FirestoreValue {
    NullValue(JsonValue),
    BooleanValue(bool),
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(GeoPoint),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Debug, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<FirestoreValue>,
}

#[derive(Debug, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: HashMap<String, FirestoreValue>,
}

impl FirestoreValue {
    /// Collapse the typed wire encoding into plain JSON.
    pub fn into_json(self) -> JsonValue {
        match self {
            FirestoreValue::NullValue(_) => JsonValue::Null,
            FirestoreValue::BooleanValue(b) => JsonValue::Bool(b),
            FirestoreValue::IntegerValue(raw) => raw
                .parse::<i64>()
                .map(|n| JsonValue::Number(n.into()))
                .unwrap_or(JsonValue::Null),
            FirestoreValue::DoubleValue(d) => Number::from_f64(d)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            FirestoreValue::TimestampValue(s)
            | FirestoreValue::StringValue(s)
            | FirestoreValue::BytesValue(s)
            | FirestoreValue::ReferenceValue(s) => JsonValue::String(s),
            FirestoreValue::GeoPointValue(p) => {
                let mut map = Map::new();
                map.insert("latitude".to_string(), float(p.latitude));
                map.insert("longitude".to_string(), float(p.longitude));
                JsonValue::Object(map)
            }
            FirestoreValue::ArrayValue(a) => {
                JsonValue::Array(a.values.into_iter().map(FirestoreValue::into_json).collect())
            }
            FirestoreValue::MapValue(m) => JsonValue::Object(fields_to_json(m.fields)),
        }
    }
}

fn float(value: f64) -> JsonValue {
    Number::from_f64(value)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

fn fields_to_json(fields: HashMap<String, FirestoreValue>) -> Map<String, JsonValue> {
    fields
        .into_iter()
        .map(|(key, value)| (key, value.into_json()))
        .collect()
}

impl FirestoreDocument {
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    pub fn into_document(self) -> Document {
        let id = self.id().to_string();
        Document {
            id,
            fields: fields_to_json(self.fields),
        }
    }
}
