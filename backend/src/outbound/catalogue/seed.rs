//! JSON seed loading for the in-memory catalogue.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;
use thiserror::Error;

use super::InMemoryCatalogue;
use crate::domain::{Menu, Restaurant};

/// Errors raised while loading a catalogue seed.
#[derive(Debug, Error)]
pub enum CatalogueLoadError {
    #[error("failed to read catalogue seed {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalogue seed {path} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalogue seed lists restaurant {id} more than once")]
    DuplicateRestaurant { id: String },
}

/// On-disk catalogue document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueSeed {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub menus: Vec<Menu>,
}

impl CatalogueSeed {
    /// Parse a seed document, rejecting duplicate restaurant identifiers.
    pub fn from_json(path: &Path, raw: &str) -> Result<Self, CatalogueLoadError> {
        let seed: Self = serde_json::from_str(raw).map_err(|source| CatalogueLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut seen = HashSet::new();
        for restaurant in &seed.restaurants {
            if !seen.insert(restaurant.id()) {
                return Err(CatalogueLoadError::DuplicateRestaurant {
                    id: restaurant.id().to_string(),
                });
            }
        }
        Ok(seed)
    }
}

/// Read and parse the catalogue seed at `path` through `cap_std`.
pub fn load_catalogue(path: &Path) -> Result<InMemoryCatalogue, CatalogueLoadError> {
    let read_error = |source| CatalogueLoadError::Read {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path has no file name",
        ))
    })?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let raw = directory
        .read_to_string(Path::new(file_name))
        .map_err(read_error)?;
    CatalogueSeed::from_json(path, &raw).map(InMemoryCatalogue::from)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;

    use super::*;

    const SEED: &str = r#"{
        "restaurants": [
            {"restaurantId": "1", "name": "Udupi Grand", "city": "Bengaluru",
             "imageUrl": "", "latitude": 12.9716, "longitude": 77.5946,
             "opensAt": "07:00:00", "closesAt": "22:30:00",
             "attributes": ["South Indian"]}
        ],
        "menus": [
            {"restaurantId": "1", "items": [
                {"itemId": "1-1", "name": "Masala Dosa", "price": 90.0,
                 "attributes": ["veg"]}
            ]}
        ]
    }"#;

    #[rstest]
    fn loads_a_seed_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SEED.as_bytes()).expect("write seed");

        let catalogue = load_catalogue(file.path()).expect("seed loads");
        assert_eq!(catalogue.restaurant_count(), 1);
        assert_eq!(catalogue.menu_count(), 1);
    }

    #[rstest]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_catalogue(&dir.path().join("absent.json")).expect_err("missing");
        assert!(matches!(err, CatalogueLoadError::Read { .. }));
    }

    #[rstest]
    fn duplicate_identifiers_are_rejected() {
        let raw = r#"{"restaurants": [
            {"restaurantId": "1", "name": "A", "latitude": 1.0, "longitude": 1.0,
             "opensAt": "07:00:00", "closesAt": "22:00:00"},
            {"restaurantId": "1", "name": "B", "latitude": 1.0, "longitude": 1.0,
             "opensAt": "07:00:00", "closesAt": "22:00:00"}
        ]}"#;
        let err = CatalogueSeed::from_json(Path::new("seed.json"), raw).expect_err("duplicate");
        assert!(matches!(err, CatalogueLoadError::DuplicateRestaurant { id } if id == "1"));
    }

    #[rstest]
    fn invalid_coordinates_fail_parsing() {
        let raw = r#"{"restaurants": [
            {"restaurantId": "1", "name": "A", "latitude": 91.0, "longitude": 1.0,
             "opensAt": "07:00:00", "closesAt": "22:00:00"}
        ]}"#;
        let err = CatalogueSeed::from_json(Path::new("seed.json"), raw).expect_err("invalid");
        assert!(matches!(err, CatalogueLoadError::Parse { .. }));
    }
}
