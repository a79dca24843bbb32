use crate::error::{Result, TrashSortError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use trash_sort_common::resolver::{DEFAULT_LIMIT, DEFAULT_SUGGESTION_LIMIT, DEFAULT_THRESHOLD};
use trash_sort_common::{ResolverOptions, Scorer};

/// 用户偏好（只影响匹配参数，分类表本身不可配置）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub threshold: f64,
    pub limit: usize,
    pub suggestion_limit: usize,
    pub scorer: Scorer,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            scorer: Scorer::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 文件不存在时返回默认值
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TrashSortError::Config("找不到用户主目录".into()))?;
        Ok(home.join(".config").join("trash-sort").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.threshold) {
            return Err(TrashSortError::Config(format!(
                "阈值必须在 0 到 100 之间: {}",
                self.threshold
            )));
        }
        if self.limit == 0 {
            return Err(TrashSortError::Config("候选数必须至少为 1".into()));
        }
        if self.suggestion_limit == 0 {
            return Err(TrashSortError::Config("建议数必须至少为 1".into()));
        }
        Ok(())
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            limit: self.limit,
            threshold: self.threshold,
            suggestion_limit: self.suggestion_limit,
            scorer: self.scorer,
        }
    }
}
