// ==========================================
// 订单查询助手 - 数据仓储层
// ==========================================
// 职责: 持有只读订单表，提供按客户查找
// 来源: 内置参考数据，或由导入层从文件构造
// ==========================================

pub mod error;
pub mod order_table;
pub mod seed;

pub use error::{RepositoryError, RepositoryResult};
pub use order_table::OrderTable;
pub use seed::{reference_orders, reference_table};
