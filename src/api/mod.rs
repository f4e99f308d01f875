// ==========================================
// 订单查询助手 - API 层
// ==========================================
// 职责: 提供查询接口，供命令行与交互页面调用
// ==========================================

pub mod answer;
pub mod error;
pub mod lookup_api;

// 重导出核心类型
pub use answer::{Answer, AnswerFormatter};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use lookup_api::{LookupOptions, OrderLookupApi};
