use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clock::parse_timestamp;

/// JSON field names of a furniture record
pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const STARTING_PRICE: &str = "startingPrice";
    pub const IMAGE_URL: &str = "imageUrl";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
    pub const SELLER: &str = "seller";
    pub const STATUS: &str = "status";
}

/// Listing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureStatus {
    Available,
    Sold,
    Auction,
}

impl FurnitureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Sold => "sold",
            Self::Auction => "auction",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "available" => Some(Self::Available),
            "sold" => Some(Self::Sold),
            "auction" => Some(Self::Auction),
            _ => None,
        }
    }
}

impl From<FurnitureStatus> for Value {
    fn from(status: FurnitureStatus) -> Self {
        Value::String(status.as_str().to_string())
    }
}

// region:    --- Furniture Record
/// A stored furniture listing.
///
/// Records are JSON objects: callers may send any fields with any types and
/// they are kept as given. The accessors read the well-known fields and
/// return `None` when a field is missing or has an unexpected type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FurnitureRecord(Map<String, Value>);

impl FurnitureRecord {
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Replace every top-level field present in `patch`. Nested values are replaced whole.
    pub fn overlay(&mut self, patch: FurniturePatch) {
        self.0.extend(patch.0);
    }

    /// Key this record is stored under.
    /// A non-string `id` (only possible when a caller overrides it) is keyed by its JSON text.
    pub fn store_key(&self) -> String {
        match self.0.get(fields::ID) {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field(fields::ID)
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field(fields::NAME)
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field(fields::DESCRIPTION)
    }

    pub fn starting_price(&self) -> Option<f64> {
        self.0.get(fields::STARTING_PRICE).and_then(Value::as_f64)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.str_field(fields::IMAGE_URL)
    }

    pub fn seller(&self) -> Option<&str> {
        self.str_field(fields::SELLER)
    }

    /// `None` for a missing status or one outside the known set
    pub fn status(&self) -> Option<FurnitureStatus> {
        self.str_field(fields::STATUS).and_then(FurnitureStatus::parse)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.0.get(fields::CREATED_AT).and_then(parse_timestamp)
    }

    /// `None` until the record has been updated
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.0.get(fields::UPDATED_AT).and_then(parse_timestamp)
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }
}

// endregion: --- Furniture Record

// region:    --- Furniture Patch
/// Request body for create and update: any subset of record fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FurniturePatch(Map<String, Value>);

impl FurniturePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for FurniturePatch {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

// endregion: --- Furniture Patch
