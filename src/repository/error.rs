// ==========================================
// 订单查询助手 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use rust_decimal::Decimal;
use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    // ===== 查询错误 =====
    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    // ===== 建表约束错误 =====
    #[error("客户名称为空 (第 {index} 条记录)")]
    EmptyCustomer { index: usize },

    #[error("客户重复: {customer} (第 {first} 条与第 {second} 条记录)")]
    DuplicateCustomer {
        customer: String,
        first: usize,
        second: usize,
    },

    #[error("厚度必须为正整数: customer={customer}, thickness_mm={value}")]
    InvalidThickness { customer: String, value: u32 },

    #[error("价格不能为负数: customer={customer}, price={price}")]
    NegativePrice { customer: String, price: Decimal },

    #[error("订单状态为空: customer={customer}")]
    EmptyStatus { customer: String },

    // ===== 数据质量错误 =====
    #[error("字段值错误 (field={field}): {message}")]
    FieldValueError { field: String, message: String },
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
