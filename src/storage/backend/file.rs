use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{KeyValueStore, validate_key};
use crate::errors::{LocalShortError, Result};

/// File-backed key-value store
///
/// Every key maps to `<data_dir>/<key>.json`. Writes go to a sibling temp
/// file first and are renamed over the target, so a reader never sees a
/// half-written entry.
pub struct FileKvStore {
    data_dir: PathBuf,
}

impl FileKvStore {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        let data_dir = data_dir.into();
        debug!("FileKvStore using data dir: {}", data_dir.display());
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.data_dir.join(format!("{}.json", key)))
    }

    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(|e| {
                LocalShortError::storage(format!(
                    "创建数据目录失败 {}: {}",
                    self.data_dir.display(),
                    e
                ))
            })?;
            info!("Created data directory: {}", self.data_dir.display());
        }
        Ok(())
    }
}

impl KeyValueStore for FileKvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LocalShortError::storage(format!(
                "读取 {} 失败: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.ensure_data_dir()?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).map_err(|e| {
            LocalShortError::storage(format!("写入 {} 失败: {}", tmp_path.display(), e))
        })?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            LocalShortError::storage(format!("替换 {} 失败: {}", path.display(), e))
        })?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
