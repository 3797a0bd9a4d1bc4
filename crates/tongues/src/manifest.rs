//! Reading the host site manifest from disk.

use std::path::Path;

use tongues_site::SiteManifest;

use crate::error::CliError;

/// Load a manifest, choosing the format by file extension.
///
/// `.yaml` and `.yml` are parsed as YAML, everything else as JSON.
pub(crate) fn load_manifest(path: &Path) -> Result<SiteManifest, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let manifest = if is_yaml {
        SiteManifest::from_yaml_str(&content)
    } else {
        SiteManifest::from_json_str(&content)
    };
    manifest.map_err(|source| CliError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_manifest_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(
            &path,
            r#"{"pages": [{"source_path": "en/index.md", "url": "/en/", "title": "Home"}]}"#,
        )
        .unwrap();

        let manifest = load_manifest(&path).unwrap();

        assert_eq!(manifest.pages.len(), 1);
        assert_eq!(manifest.pages[0].url, "/en/");
    }

    #[test]
    fn test_load_manifest_yaml_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.YML");
        std::fs::write(
            &path,
            "pages:\n  - source_path: zh/index.md\n    url: /zh/\n    title: 首页\n",
        )
        .unwrap();

        let manifest = load_manifest(&path).unwrap();

        assert_eq!(manifest.pages[0].title, "首页");
    }

    #[test]
    fn test_load_manifest_missing_file() {
        let err = load_manifest(Path::new("/nonexistent/site.json")).unwrap_err();

        assert!(matches!(err, CliError::File { .. }));
    }

    #[test]
    fn test_load_manifest_invalid_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_manifest(&path).unwrap_err();

        assert!(err.to_string().contains("site.json"));
    }
}
