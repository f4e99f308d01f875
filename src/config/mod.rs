// ==========================================
// 订单查询助手 - 配置层
// ==========================================
// 职责: 应用配置加载与多级覆写
// 存储: TOML 文件 + 环境变量 + 命令行
// ==========================================

pub mod app_config;

// 重导出核心配置
pub use app_config::{
    env_keys, AppConfig, ColorMode, ConfigError, ConfigOverrides, ConfigResult,
};
