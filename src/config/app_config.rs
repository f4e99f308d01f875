// ==========================================
// 订单查询助手 - 应用配置
// ==========================================
// 存储: TOML 文件（可选）
// 覆写优先级: 命令行 > 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::i18n;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

// ==========================================
// 环境变量键
// ==========================================
pub mod env_keys {
    /// 配置文件路径
    pub const CONFIG: &str = "ORDER_LOOKUP_CONFIG";
    /// 订单数据文件路径（.csv / .xlsx / .xls）
    pub const DATA: &str = "ORDER_LOOKUP_DATA";
    /// 界面语言
    pub const LOCALE: &str = "ORDER_LOOKUP_LOCALE";
    /// 币种符号
    pub const CURRENCY: &str = "ORDER_LOOKUP_CURRENCY";
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {0}")]
    FileNotFound(String),

    #[error("配置文件读取失败 ({path}): {message}")]
    Io { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    Parse { path: String, message: String },

    #[error("不支持的语言: {locale}（可选: {supported}）")]
    UnsupportedLocale { locale: String, supported: String },

    #[error("配置值错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// 颜色模式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // 终端输出时启用
    Always,
    Never,
}

impl ColorMode {
    /// 结合输出是否为终端，得出最终是否着色
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("不支持的颜色模式: {}（可选: auto / always / never）", other)),
        }
    }
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 界面语言（es / en / zh-CN）
    pub locale: String,
    /// 币种符号（价格后缀）
    pub currency_symbol: String,
    /// 订单数据文件；为空时使用内置参考数据
    pub data_file: Option<PathBuf>,
    /// 颜色模式
    pub color: ColorMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: i18n::DEFAULT_LOCALE.to_string(),
            currency_symbol: "€".to_string(),
            data_file: None,
            color: ColorMode::Auto,
        }
    }
}

/// 命令行覆写项（None 表示不覆写）
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub locale: Option<String>,
    pub currency_symbol: Option<String>,
    pub data_file: Option<PathBuf>,
    pub color: Option<ColorMode>,
}

impl AppConfig {
    /// 默认配置文件路径: <config_dir>/order-lookup/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("order-lookup").join("config.toml"))
    }

    /// 从指定文件加载；文件不存在时返回默认配置
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        // 配置文件中的相对数据路径以配置文件所在目录为基准
        if let (Some(data_file), Some(base)) = (&config.data_file, path.parent()) {
            if data_file.is_relative() {
                config.data_file = Some(base.join(data_file));
            }
        }

        Ok(config)
    }

    /// 解析配置文件位置并加载
    ///
    /// # 优先级
    /// 1. 显式路径（必须存在）
    /// 2. ORDER_LOOKUP_CONFIG 环境变量（必须存在）
    /// 3. 默认路径（不存在则使用默认配置）
    pub fn load(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with_env(explicit_path, |key| std::env::var(key).ok())
    }

    /// 同 [`AppConfig::load`]，环境变量通过 `env` 读取（便于测试）
    pub fn load_with_env<F>(explicit_path: Option<&Path>, env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = explicit_path
            .map(Path::to_path_buf)
            .or_else(|| non_blank(env(env_keys::CONFIG)).map(PathBuf::from));

        match required {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path.display().to_string()));
                }
                Self::load_from(&path)
            }
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// 应用环境变量覆写
    pub fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data) = non_blank(env(env_keys::DATA)) {
            self.data_file = Some(PathBuf::from(data));
        }
        if let Some(locale) = non_blank(env(env_keys::LOCALE)) {
            self.locale = locale;
        }
        if let Some(currency) = non_blank(env(env_keys::CURRENCY)) {
            self.currency_symbol = currency;
        }
    }

    /// 应用命令行覆写
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(locale) = &overrides.locale {
            self.locale = locale.clone();
        }
        if let Some(currency) = &overrides.currency_symbol {
            self.currency_symbol = currency.clone();
        }
        if let Some(data_file) = &overrides.data_file {
            self.data_file = Some(data_file.clone());
        }
        if let Some(color) = overrides.color {
            self.color = color;
        }
    }

    /// 校验配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !i18n::is_supported(&self.locale) {
            return Err(ConfigError::UnsupportedLocale {
                locale: self.locale.clone(),
                supported: i18n::supported_locales().join(" / "),
            });
        }

        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "currency_symbol".to_string(),
                value: self.currency_symbol.clone(),
                message: "币种符号不能为空".to_string(),
            });
        }

        Ok(())
    }

    /// 完整解析流程: 文件 → 环境变量 → 命令行 → 校验
    pub fn resolve(
        explicit_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> ConfigResult<Self> {
        Self::resolve_with_env(explicit_path, overrides, |key| std::env::var(key).ok())
    }

    /// 同 [`AppConfig::resolve`]，环境变量通过 `env` 读取（便于测试）
    pub fn resolve_with_env<F>(
        explicit_path: Option<&Path>,
        overrides: &ConfigOverrides,
        env: F,
    ) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load_with_env(explicit_path, &env)?;
        config.apply_env(&env);
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
