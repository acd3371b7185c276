use std::fs;
use std::path::{Path, PathBuf};

use super::catalog::Catalog;
use super::errors::CatalogError;

/// Status describing how the catalog was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum CatalogLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the catalog from disk.
#[derive(Debug)]
pub(crate) struct CatalogLoad {
    catalog: Catalog,
    status: CatalogLoadStatus,
}

impl CatalogLoad {
    fn new(catalog: Catalog, status: CatalogLoadStatus) -> Self {
        Self { catalog, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (Catalog, CatalogLoadStatus) {
        (self.catalog, self.status)
    }
}

pub(crate) fn load_catalog() -> Result<CatalogLoad, CatalogError> {
    load_catalog_from_path(&catalog_path())
}

fn load_catalog_from_path(path: &Path) -> Result<CatalogLoad, CatalogError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CatalogLoad::new(
                Catalog::default(),
                CatalogLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match parse_catalog(&data) {
        Ok(catalog) => Ok(CatalogLoad::new(catalog, CatalogLoadStatus::Loaded)),
        Err(err) => Ok(CatalogLoad::new(
            Catalog::default(),
            CatalogLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn parse_catalog(data: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_json::from_str(data)?;
    catalog.validate()?;
    Ok(catalog)
}

fn catalog_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("backoffice")
            .join("catalog.json");
    }

    std::env::temp_dir().join("backoffice").join("catalog.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{CatalogLoadStatus, load_catalog_from_path};

    #[test]
    fn given_missing_file_when_loading_then_defaults_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("catalog.json");

        let (catalog, status) = load_catalog_from_path(&path)
            .expect("missing catalog should not fail")
            .into_parts();

        assert!(matches!(status, CatalogLoadStatus::Missing));
        assert_eq!(catalog.default_section, "dashboard");

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_partial_catalog_when_loading_then_missing_fields_use_defaults() {
        let root = test_temp_dir("partial");
        let path = root.join("catalog.json");
        let payload = r##"{
            "menu": [
                {"id": "home", "label": "Home"},
                {"id": "ops", "label": "Ops", "children": [
                    {"id": "jobs", "label": "Jobs"}
                ]}
            ],
            "default_section": "jobs",
            "modules": [
                {"id": "jobs", "title": "Jobs", "color": "#112233",
                 "icon": "box", "section": "jobs"}
            ]
        }"##;
        fs::write(&path, payload).expect("test payload should be written");

        let (catalog, status) = load_catalog_from_path(&path)
            .expect("catalog should load")
            .into_parts();

        assert!(matches!(status, CatalogLoadStatus::Loaded));
        assert_eq!(catalog.menu.len(), 2);
        assert_eq!(catalog.modules.len(), 1);
        assert_eq!(catalog.default_section, "jobs");
        assert!(!catalog.accounts.is_empty());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_loading_then_defaults_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("catalog.json");
        fs::write(&path, "{ not json")
            .expect("invalid test payload should be written");

        let (catalog, status) = load_catalog_from_path(&path)
            .expect("invalid catalog should not fail with io error")
            .into_parts();

        assert_eq!(catalog.default_section, "dashboard");
        match status {
            CatalogLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_duplicate_ids_when_loading_then_catalog_is_rejected() {
        let root = test_temp_dir("duplicates");
        let path = root.join("catalog.json");
        let payload = r#"{
            "menu": [
                {"id": "home", "label": "Home"},
                {"id": "home", "label": "Home again"}
            ],
            "default_section": "home"
        }"#;
        fs::write(&path, payload).expect("test payload should be written");

        let (catalog, status) = load_catalog_from_path(&path)
            .expect("catalog load should not fail with io error")
            .into_parts();

        match status {
            CatalogLoadStatus::Invalid(message) => {
                assert!(message.contains("home"));
            },
            other => panic!("expected invalid status, got {other:?}"),
        }
        assert_eq!(catalog.default_section, "dashboard");

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "backoffice-catalog-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
