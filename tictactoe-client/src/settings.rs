//! 游戏设置模块
//!
//! 提供设置数据结构和 JSON 持久化

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tictactoe_core::{Difficulty, COMPUTER_MOVE_DELAY_MS};

use crate::theme::ThemeName;

/// 人机对战的先手方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartingPlayer {
    /// 玩家先手
    #[default]
    Human,
    /// 电脑先手
    Computer,
}

impl StartingPlayer {
    pub fn display_name(&self) -> &'static str {
        match self {
            StartingPlayer::Human => "Player",
            StartingPlayer::Computer => "Computer",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            StartingPlayer::Human => StartingPlayer::Computer,
            StartingPlayer::Computer => StartingPlayer::Human,
        }
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// EnvFilter 指令
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

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// 电脑难度
    pub difficulty: Difficulty,
    /// 人机对战先手方
    pub starting_player: StartingPlayer,
    /// 配色主题
    pub theme: ThemeName,
    /// 电脑落子前等待（毫秒）
    pub move_delay_ms: u64,
    /// 日志级别
    pub log_level: LogLevel,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            starting_player: StartingPlayer::default(),
            theme: ThemeName::default(),
            move_delay_ms: COMPUTER_MOVE_DELAY_MS,
            log_level: LogLevel::default(),
        }
    }
}

impl GameSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 读取设置文件（`None` 时使用默认位置），文件不存在时返回默认设置
    pub fn try_load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::settings_path().context("无法获取配置目录")?,
        };
        if !path.exists() {
            tracing::debug!("设置文件不存在: {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("无法读取设置文件: {:?}", path))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("设置文件格式无效: {:?}", path))?;
        Ok(settings)
    }

    /// 加载设置，失败时回退到默认设置并交回失败原因
    ///
    /// 启动时日志还没初始化，由调用方在日志就绪后报告
    pub fn load_or_default(path: Option<&Path>) -> (Self, Option<anyhow::Error>) {
        match Self::try_load(path) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// 报告加载失败（日志初始化之后调用）
    pub fn warn_fallback(error: &anyhow::Error) {
        tracing::warn!("{:#}，使用默认设置", error);
    }

    /// 保存到默认位置
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::settings_path().context("无法获取配置目录")?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// 保存到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content).with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }

    /// 电脑落子等待时间
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }
}
