//! 终端设置
//!
//! 提供设置数据结构和 JSON 持久化。日志系统要等设置读完才能初始化，
//! 所以加载时不直接打日志，而是返回 [`LoadStatus`]，由调用方稍后报告。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use orbito_core::RuleSet;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// 指定设置文件路径的环境变量
pub const SETTINGS_ENV: &str = "ORBITO_SETTINGS";

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// `EnvFilter` 指令中的级别名
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 棋盘显示字符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoneSymbols {
    pub black: char,
    pub white: char,
    pub empty: char,
    /// 可移动目标格
    pub highlight: char,
}

impl Default for StoneSymbols {
    fn default() -> Self {
        Self {
            black: 'B',
            white: 'W',
            empty: '.',
            highlight: '*',
        }
    }
}

/// 终端设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === 规则 ===
    /// 规则开关
    pub rules: RuleSet,

    // === 显示 ===
    /// 棋子字符
    pub symbols: StoneSymbols,
    /// 标出拿起棋子后可去的格子
    pub show_highlights: bool,
    /// 显示行列坐标
    pub show_coordinates: bool,

    // === 高级 ===
    /// 日志级别（`RUST_LOG` 优先）
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            symbols: StoneSymbols::default(),
            show_highlights: true,
            show_coordinates: true,
            log_level: LogLevel::default(),
        }
    }
}

/// 设置加载结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// 已从文件加载
    Loaded(PathBuf),
    /// 文件不存在，使用默认设置
    Missing(PathBuf),
    /// 文件无法读取或格式无效，使用默认设置
    Invalid { path: PathBuf, reason: String },
    /// 无法确定配置目录，使用默认设置
    NoConfigDir,
}

impl LoadStatus {
    /// 通过日志报告加载结果
    pub fn report(&self) {
        match self {
            LoadStatus::Loaded(path) => tracing::info!("已加载设置: {:?}", path),
            LoadStatus::Missing(path) => {
                tracing::info!("设置文件不存在: {:?}，使用默认设置", path)
            }
            LoadStatus::Invalid { path, reason } => {
                tracing::warn!("设置文件 {:?} 无效: {}，使用默认设置", path, reason)
            }
            LoadStatus::NoConfigDir => tracing::warn!("无法获取配置目录，使用默认设置"),
        }
    }
}

impl Settings {
    /// 日志过滤器：`RUST_LOG` 有效时完全采用它，否则按设置中的级别过滤本项目的日志
    pub fn log_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        let from_env = rust_log
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok());

        from_env.unwrap_or_else(|| {
            let level = self.log_level.as_directive();
            EnvFilter::new(format!("orbito_cli={level},orbito_core={level}"))
        })
    }

    /// 获取设置文件路径：优先环境变量，其次系统配置目录
    pub fn settings_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Some(PathBuf::from(path));
        }

        dirs::config_dir().map(|mut path| {
            path.push("orbito");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置
    pub fn load() -> (Self, LoadStatus) {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => (Self::default(), LoadStatus::NoConfigDir),
        }
    }

    /// 从指定文件加载设置，失败时回退到默认设置
    pub fn load_from(path: &Path) -> (Self, LoadStatus) {
        if !path.exists() {
            return (Self::default(), LoadStatus::Missing(path.to_path_buf()));
        }

        let invalid = |reason: String| LoadStatus::Invalid {
            path: path.to_path_buf(),
            reason,
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => (settings, LoadStatus::Loaded(path.to_path_buf())),
                Err(e) => (Self::default(), invalid(e.to_string())),
            },
            Err(e) => (Self::default(), invalid(e.to_string())),
        }
    }

    /// 保存设置到默认位置，返回写入的路径
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::settings_path().context("无法获取配置目录")?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;

        std::fs::write(path, content)
            .with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }
}
