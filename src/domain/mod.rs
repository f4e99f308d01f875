// ==========================================
// 订单查询助手 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含展示逻辑
// ==========================================

pub mod order;
pub mod types;

// 重导出核心类型
pub use order::OrderRecord;
pub use types::{AnswerStyle, OrderStatus, ParseQueryKindError, QueryKind};
