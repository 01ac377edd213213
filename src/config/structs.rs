use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{LocalShortError, Result};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Durable-storage key holding the serialized record list
pub const DEFAULT_STORAGE_KEY: &str = "shortened-urls";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - storage: 数据目录与存储键
/// - shortener: 短链生成参数
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub shortener: ShortenerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从默认的 config.toml 和环境变量加载配置
    pub fn load() -> Self {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// 从指定 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > TOML 文件 > 默认值
    /// ENV 前缀：LS，分隔符：__
    /// 示例：LS__SHORTENER__ORIGIN=https://sho.rt
    ///
    /// A missing file is not an error. A file that fails to parse falls back
    /// to defaults, since logging is not initialized yet the problem goes to
    /// stderr.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_sources(path, None)
    }

    /// Same as [`StaticConfig::load_from`], reading `LS__*` overrides from
    /// `env` instead of the process environment when it is given
    pub fn load_from_sources<P: AsRef<Path>>(
        path: P,
        env: Option<config::Map<String, String>>,
    ) -> Self {
        use config::{Config, Environment, File, FileFormat};

        let path = path.as_ref();

        let builder = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("LS")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let mut config = match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        };
        config.sanitize();
        config
    }

    /// 修正无效的配置值
    fn sanitize(&mut self) {
        if self.shortener.id_length == 0 {
            eprintln!(
                "[WARN] shortener.id_length must be at least 1, using {}",
                default_id_length()
            );
            self.shortener.id_length = default_id_length();
        }
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LocalShortError::config(format!("Failed to render config: {}", e)))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Directory holding one `<key>.json` file per stored entry
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_storage_key")]
    pub key: String,
}

/// 短链生成配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortenerConfig {
    /// Origin the fabricated short URLs are composed against
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_id_length")]
    pub id_length: usize,
    /// Cosmetic pause before a submission completes
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// Regenerate ids that already exist in the list
    #[serde(default = "default_ensure_unique_ids")]
    pub ensure_unique_ids: bool,
}

impl ShortenerConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
}

// ============================================================
// Default value functions
// ============================================================

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_id_length() -> usize {
    6
}

fn default_submit_delay_ms() -> u64 {
    500
}

fn default_ensure_unique_ids() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_storage_key(),
        }
    }
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            id_length: default_id_length(),
            submit_delay_ms: default_submit_delay_ms(),
            ensure_unique_ids: default_ensure_unique_ids(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();
        assert_eq!(config.storage.key, "shortened-urls");
        assert_eq!(config.shortener.id_length, 6);
        assert_eq!(config.shortener.submit_delay(), Duration::from_millis(500));
        assert!(config.shortener.ensure_unique_ids);
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_sanitize_resets_zero_id_length() {
        let mut config = StaticConfig::default();
        config.shortener.id_length = 0;
        config.sanitize();
        assert_eq!(config.shortener.id_length, 6);

        config.shortener.id_length = 3;
        config.sanitize();
        assert_eq!(config.shortener.id_length, 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: StaticConfig = toml::from_str(
            r#"
            [shortener]
            origin = "https://sho.rt"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.shortener.origin, "https://sho.rt");
        assert_eq!(parsed.shortener.id_length, 6);
        assert_eq!(parsed.storage, StorageConfig::default());
    }
}
