use serde::{Deserialize, Serialize};

use crate::shared::api::ApiError;
use crate::shared::serde_helpers::{lenient_string, null_as_empty};

// ============================================================================
// Shelf
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub capacity: Option<i64>,
    #[serde(default)]
    pub shelf_name: Option<String>,
}

impl Shelf {
    pub fn label(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else {
            self.shelf_name.as_deref().unwrap_or(&self.id)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShelfDto {
    pub name: String,
    pub product_name: String,
}

impl NewShelfDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Invalid("Shelf name is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateShelfDto {
    pub id: String,
    pub code: String,
    pub area: String,
    pub capacity: i64,
}

impl UpdateShelfDto {
    pub fn from_inputs(shelf: &Shelf, code: &str, area: &str, capacity: &str) -> Result<Self, ApiError> {
        let capacity = capacity
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|c| *c >= 0)
            .ok_or_else(|| ApiError::Invalid(format!("Invalid capacity: {}", capacity)))?;
        Ok(Self {
            id: shelf.id.clone(),
            code: code.trim().to_string(),
            area: area.trim().to_string(),
            capacity,
        })
    }
}

// ============================================================================
// Product locations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLocation {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    pub quantity: i64,
    pub product_id: i64,
    pub shelf_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shelf_name: String,
}

/// Which slice of product locations to list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationFilter {
    #[default]
    All,
    Empty,
    ByProduct(Option<i64>),
    ByShelf(Option<i64>),
    OccupiedShelf(Option<i64>),
}

impl LocationFilter {
    /// Path below `/api/positions/`. A by-id filter without an id lists everything.
    pub fn path(&self) -> String {
        match self {
            LocationFilter::All => "all".to_string(),
            LocationFilter::Empty => "empty".to_string(),
            LocationFilter::ByProduct(Some(id)) => format!("product/{}", id),
            LocationFilter::ByShelf(Some(id)) => format!("shelf/{}", id),
            LocationFilter::OccupiedShelf(Some(id)) => format!("shelf/{}/occupied", id),
            LocationFilter::ByProduct(None)
            | LocationFilter::ByShelf(None)
            | LocationFilter::OccupiedShelf(None) => "all".to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LocationFilter::All => "all",
            LocationFilter::Empty => "empty",
            LocationFilter::ByProduct(_) => "by-product",
            LocationFilter::ByShelf(_) => "by-shelf",
            LocationFilter::OccupiedShelf(_) => "occupied-shelf",
        }
    }

    /// Rebuilds a filter from the select value plus the id text box.
    pub fn from_parts(code: &str, id: &str) -> Self {
        let id = id.trim().parse::<i64>().ok();
        match code {
            "empty" => LocationFilter::Empty,
            "by-product" => LocationFilter::ByProduct(id),
            "by-shelf" => LocationFilter::ByShelf(id),
            "occupied-shelf" => LocationFilter::OccupiedShelf(id),
            _ => LocationFilter::All,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLocationDto {
    pub name: String,
    pub product_id: i64,
    pub shelf_id: i64,
    pub quantity: i64,
}

impl AddLocationDto {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.product_id <= 0 || self.shelf_id <= 0 {
            return Err(ApiError::Invalid("Product and shelf are required".into()));
        }
        if self.quantity < 0 {
            return Err(ApiError::Invalid("Quantity cannot be negative".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQuantityDto {
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_paths() {
        assert_eq!(LocationFilter::All.path(), "all");
        assert_eq!(LocationFilter::Empty.path(), "empty");
        assert_eq!(LocationFilter::ByProduct(Some(7)).path(), "product/7");
        assert_eq!(LocationFilter::ByShelf(Some(2)).path(), "shelf/2");
        assert_eq!(
            LocationFilter::OccupiedShelf(Some(2)).path(),
            "shelf/2/occupied"
        );
        assert_eq!(LocationFilter::ByShelf(None).path(), "all");
    }

    #[test]
    fn filter_from_select_value() {
        assert_eq!(
            LocationFilter::from_parts("by-product", " 4 "),
            LocationFilter::ByProduct(Some(4))
        );
        assert_eq!(
            LocationFilter::from_parts("by-shelf", ""),
            LocationFilter::ByShelf(None)
        );
        assert_eq!(LocationFilter::from_parts("bogus", "1"), LocationFilter::All);
    }

    #[test]
    fn shelf_id_may_be_numeric() {
        let shelf: Shelf =
            serde_json::from_str(r#"{"id":12,"name":"","shelfName":"B-2","capacity":40}"#)
                .unwrap();
        assert_eq!(shelf.id, "12");
        assert_eq!(shelf.label(), "B-2");

        let dto = UpdateShelfDto::from_inputs(&shelf, "B2", "North", "50").unwrap();
        assert_eq!(dto.capacity, 50);
        assert!(UpdateShelfDto::from_inputs(&shelf, "B2", "North", "-1").is_err());
    }
}
