//! 主题和配色方案
//!
//! 定义棋盘、棋子和提示文字的终端颜色

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// 主题名称（持久化在设置文件中）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Sunset,
    Ocean,
    Forest,
    Mono,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Sunset => "sunset",
            ThemeName::Ocean => "ocean",
            ThemeName::Forest => "forest",
            ThemeName::Mono => "mono",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeName::Sunset => "Sunset",
            ThemeName::Ocean => "Ocean",
            ThemeName::Forest => "Forest",
            ThemeName::Mono => "Mono",
        }
    }

    /// 所有选项
    pub fn all() -> &'static [ThemeName] {
        &[ThemeName::Sunset, ThemeName::Ocean, ThemeName::Forest, ThemeName::Mono]
    }

    /// 下一个选项
    pub fn next(self) -> Self {
        match self {
            ThemeName::Sunset => ThemeName::Ocean,
            ThemeName::Ocean => ThemeName::Forest,
            ThemeName::Forest => ThemeName::Mono,
            ThemeName::Mono => ThemeName::Sunset,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::all()
            .iter()
            .copied()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown theme: {}", s.trim()))
    }
}

/// 颜色主题配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTheme {
    pub name: ThemeName,

    // 棋子
    pub x_color: Color,
    pub o_color: Color,

    // 棋盘
    pub grid: Color,
    pub cell_number: Color,

    // 高亮与文字
    pub highlight: Color,
    pub status: Color,
    pub notice: Color,
}

impl ColorTheme {
    /// 根据名称获取主题
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Sunset => Self::sunset(),
            ThemeName::Ocean => Self::ocean(),
            ThemeName::Forest => Self::forest(),
            ThemeName::Mono => Self::mono(),
        }
    }

    /// 落日暖色（默认）
    pub fn sunset() -> Self {
        Self {
            name: ThemeName::Sunset,
            x_color: Color::Rgb { r: 255, g: 112, b: 67 },  // #FF7043 橙红
            o_color: Color::Rgb { r: 255, g: 202, b: 40 },  // #FFCA28 琥珀
            grid: Color::Rgb { r: 141, g: 110, b: 99 },     // #8D6E63 褐色
            cell_number: Color::DarkGrey,
            highlight: Color::Rgb { r: 123, g: 31, b: 162 }, // #7B1FA2 紫色
            status: Color::Rgb { r: 255, g: 224, b: 178 },  // #FFE0B2 浅橙
            notice: Color::Rgb { r: 239, g: 83, b: 80 },    // #EF5350 红色
        }
    }

    /// 海洋冷色
    pub fn ocean() -> Self {
        Self {
            name: ThemeName::Ocean,
            x_color: Color::Rgb { r: 41, g: 182, b: 246 },  // #29B6F6
            o_color: Color::Rgb { r: 38, g: 198, b: 218 },  // #26C6DA
            grid: Color::Rgb { r: 84, g: 110, b: 122 },     // #546E7A
            cell_number: Color::DarkGrey,
            highlight: Color::Rgb { r: 13, g: 71, b: 161 }, // #0D47A1
            status: Color::Rgb { r: 178, g: 235, b: 242 },  // #B2EBF2
            notice: Color::Rgb { r: 255, g: 138, b: 101 },  // #FF8A65
        }
    }

    /// 森林绿色
    pub fn forest() -> Self {
        Self {
            name: ThemeName::Forest,
            x_color: Color::Rgb { r: 139, g: 195, b: 74 },  // #8BC34A
            o_color: Color::Rgb { r: 255, g: 241, b: 118 }, // #FFF176
            grid: Color::Rgb { r: 93, g: 64, b: 55 },       // #5D4037
            cell_number: Color::DarkGrey,
            highlight: Color::Rgb { r: 27, g: 94, b: 32 },  // #1B5E20
            status: Color::Rgb { r: 200, g: 230, b: 201 },  // #C8E6C9
            notice: Color::Rgb { r: 255, g: 183, b: 77 },   // #FFB74D
        }
    }

    /// 单色（不支持真彩色的终端）
    pub fn mono() -> Self {
        Self {
            name: ThemeName::Mono,
            x_color: Color::White,
            o_color: Color::Grey,
            grid: Color::DarkGrey,
            cell_number: Color::DarkGrey,
            highlight: Color::DarkGrey,
            status: Color::White,
            notice: Color::White,
        }
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::sunset()
    }
}
