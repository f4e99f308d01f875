// ==========================================
// 订单查询助手 - 核心库
// ==========================================
// 技术栈: Rust + CLI (clap) + 本地文件 (CSV/Excel)
// 系统定位: 只读查询工具 (客户 × 查询类型 → 文本答复)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "es");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 只读订单表
pub mod repository;

// 导入层 - 外部数据文件
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 查询接口
pub mod api;

// 应用层 - 页面渲染与命令行
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AnswerStyle, OrderStatus, QueryKind};

// 领域实体
pub use domain::OrderRecord;

// 仓储
pub use repository::{OrderTable, RepositoryError};

// API
pub use api::{Answer, ApiError, ApiResult, LookupOptions, OrderLookupApi};

// 配置
pub use config::{AppConfig, ColorMode};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "订单查询助手";
