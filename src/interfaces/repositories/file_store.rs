use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tokio::fs;
use tracing::{info, warn};

use crate::domain::entities::language::Language;
use crate::errors::AppError;
use crate::interfaces::repositories::resume::ResumeRepository;

/// File-backed resume storage: one pretty-printed `{lang}.json` per
/// language under a fixed data directory. Single-writer by design;
/// writes still go through a temp file and rename so a crashed save
/// never leaves a half-written document behind.
#[derive(Debug, Clone)]
pub struct FileResumeRepo {
    data_dir: PathBuf,
}

impl FileResumeRepo {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        FileResumeRepo {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Creates the data directory if it does not exist yet. Called
    /// once at startup; files appear lazily on first save.
    pub async fn ensure_data_dir(&self) -> std::io::Result<()> {
        if fs::metadata(&self.data_dir).await.is_err() {
            fs::create_dir_all(&self.data_dir).await?;
            info!("Created data directory: {}", self.data_dir.display());
        }
        Ok(())
    }

    fn resume_path(&self, lang: Language) -> PathBuf {
        self.data_dir.join(lang.file_name())
    }
}

#[async_trait]
impl ResumeRepository for FileResumeRepo {
    async fn load(&self, lang: Language) -> Result<JsonValue, AppError> {
        let path = self.resume_path(lang);

        let raw = fs::read_to_string(&path).await.map_err(|e| {
            warn!("Error loading {}: {}", path.display(), e);
            AppError::ResumeNotFound(lang)
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            warn!("Error parsing {}: {}", path.display(), e);
            AppError::ResumeNotFound(lang)
        })
    }

    async fn store(&self, lang: Language, document: &JsonValue) -> Result<(), AppError> {
        let path = self.resume_path(lang);
        let text = serde_json::to_string_pretty(document)
            .map_err(|e| AppError::SaveFailed(e.to_string()))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, text)
            .await
            .map_err(|e| AppError::SaveFailed(e.to_string()))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| AppError::SaveFailed(e.to_string()))?;

        info!("Saved resume: {}", lang.file_name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn repo() -> (TempDir, FileResumeRepo) {
        let dir = TempDir::new().unwrap();
        let repo = FileResumeRepo::new(dir.path());
        (dir, repo)
    }

    #[tokio::test]
    async fn load_missing_file_maps_to_not_found() {
        let (_dir, repo) = repo();
        let result = repo.load(Language::En).await;
        assert!(matches!(result, Err(AppError::ResumeNotFound(Language::En))));
    }

    #[tokio::test]
    async fn load_unparseable_file_maps_to_not_found() {
        let (dir, repo) = repo();
        std::fs::write(dir.path().join("pt.json"), "{broken").unwrap();
        let result = repo.load(Language::Pt).await;
        assert!(matches!(result, Err(AppError::ResumeNotFound(Language::Pt))));
    }

    #[tokio::test]
    async fn store_then_load_returns_the_document_verbatim() {
        let (_dir, repo) = repo();
        let document = json!({"anything": ["goes", 1, null], "nested": {"k": true}});

        repo.store(Language::En, &document).await.unwrap();
        let loaded = repo.load(Language::En).await.unwrap();
        assert_eq!(loaded, document);
    }

    #[tokio::test]
    async fn store_writes_pretty_json_with_no_temp_file_left() {
        let (dir, repo) = repo();
        repo.store(Language::Pt, &json!({"a": 1})).await.unwrap();

        let text = std::fs::read_to_string(dir.path().join("pt.json")).unwrap();
        assert_eq!(text, "{\n  \"a\": 1\n}");
        assert!(!dir.path().join("pt.json.tmp").exists());
    }

    #[tokio::test]
    async fn store_overwrites_previous_content() {
        let (_dir, repo) = repo();
        repo.store(Language::En, &json!({"v": 1})).await.unwrap();
        repo.store(Language::En, &json!({"v": 2})).await.unwrap();
        assert_eq!(repo.load(Language::En).await.unwrap(), json!({"v": 2}));
    }

    #[tokio::test]
    async fn ensure_data_dir_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("data");
        let repo = FileResumeRepo::new(&nested);

        repo.ensure_data_dir().await.unwrap();
        assert!(nested.is_dir());

        // Idempotent when the directory already exists.
        repo.ensure_data_dir().await.unwrap();
    }
}
