use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub files: Option<FilesConfig>,
    pub sheets: Option<SheetsConfig>,
    pub export: Option<ExportConfig>,
}

/// Paths to the input workbooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Paper workbook (headerless rows: title, authors, comment, pdf url).
    pub papers: Option<String>,
    /// Reference workbook holding the venue taxonomy and keyword worksheets.
    pub reference: Option<String>,
}

/// Worksheet names inside the reference workbook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetsConfig {
    pub venues: Option<String>,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for timestamped report files. Defaults to the CWD.
    pub directory: Option<String>,
    /// "xlsx", "csv" or "json".
    pub format: Option<String>,
}

/// Platform config directory path: `<config_dir>/paperfilter/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("paperfilter").join("config.toml"))
}

/// Load config by cascading CWD `.paperfilter.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".paperfilter.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    fn pick<T: Clone>(
        overlay: Option<&T>,
        base: Option<&T>,
        field: impl Fn(&T) -> Option<String>,
    ) -> Option<String> {
        overlay.and_then(&field).or_else(|| base.and_then(&field))
    }

    ConfigFile {
        files: Some(FilesConfig {
            papers: pick(overlay.files.as_ref(), base.files.as_ref(), |f| {
                f.papers.clone()
            }),
            reference: pick(overlay.files.as_ref(), base.files.as_ref(), |f| {
                f.reference.clone()
            }),
        }),
        sheets: Some(SheetsConfig {
            venues: pick(overlay.sheets.as_ref(), base.sheets.as_ref(), |s| {
                s.venues.clone()
            }),
            keywords: pick(overlay.sheets.as_ref(), base.sheets.as_ref(), |s| {
                s.keywords.clone()
            }),
        }),
        export: Some(ExportConfig {
            directory: pick(overlay.export.as_ref(), base.export.as_ref(), |e| {
                e.directory.clone()
            }),
            format: pick(overlay.export.as_ref(), base.export.as_ref(), |e| {
                e.format.clone()
            }),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let cfg: ConfigFile = toml::from_str(
            r#"
            [files]
            papers = "papers.xlsx"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.files.as_ref().unwrap().papers.as_deref(), Some("papers.xlsx"));
        assert!(cfg.sheets.is_none());
        assert!(cfg.export.is_none());
    }

    #[test]
    fn test_merge_overlay_wins() {
        let base: ConfigFile = toml::from_str(
            r#"
            [files]
            papers = "base.xlsx"
            reference = "ref.xlsx"

            [sheets]
            venues = "Publications"
            "#,
        )
        .unwrap();
        let overlay: ConfigFile = toml::from_str(
            r#"
            [files]
            papers = "overlay.xlsx"
            "#,
        )
        .unwrap();

        let merged = merge(base, overlay);
        let files = merged.files.unwrap();
        assert_eq!(files.papers.as_deref(), Some("overlay.xlsx"));
        // Base value survives where the overlay is silent
        assert_eq!(files.reference.as_deref(), Some("ref.xlsx"));
        assert_eq!(
            merged.sheets.unwrap().venues.as_deref(),
            Some("Publications")
        );
    }

    #[test]
    fn test_load_from_path_missing_file() {
        assert!(load_from_path(Path::new("/nonexistent/paperfilter.toml")).is_none());
    }

    #[test]
    fn test_load_from_path_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not [ valid { toml").unwrap();
        assert!(load_from_path(&path).is_none());
    }

    #[test]
    fn test_load_from_path_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [sheets]
            venues = "Publication Category"
            keywords = "Keywords"
            "#,
        )
        .unwrap();
        let cfg = load_from_path(&path).unwrap();
        let sheets = cfg.sheets.unwrap();
        assert_eq!(sheets.venues.as_deref(), Some("Publication Category"));
        assert_eq!(sheets.keywords.as_deref(), Some("Keywords"));
    }
}
