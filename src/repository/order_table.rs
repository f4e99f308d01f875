// ==========================================
// 订单查询助手 - 订单表
// ==========================================
// 职责: 持有进程内只读订单集合
// 红线: 构造后不可变；客户名唯一性在构造时校验
// ==========================================

use crate::domain::OrderRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// 只读订单表
///
/// 通过 [`OrderTable::new`] 构造，构造时校验：
/// - 客户名非空且唯一
/// - 厚度为正整数
/// - 价格非负
/// - 订单状态非空
///
/// 构造之后不提供任何修改接口。
#[derive(Debug, Clone, Default)]
pub struct OrderTable {
    records: Vec<OrderRecord>,
}

impl OrderTable {
    /// 校验并构造订单表
    ///
    /// # 参数
    /// - records: 订单记录（保持原始顺序）
    ///
    /// # 返回
    /// - Ok(OrderTable): 校验通过
    /// - Err(RepositoryError): 第一条违反约束的记录
    pub fn new(records: Vec<OrderRecord>) -> RepositoryResult<Self> {
        validate_records(&records)?;

        debug!(rows = records.len(), "订单表构造完成");
        Ok(Self { records })
    }

    /// 记录条数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 全部记录（只读）
    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// 客户名列表（按表内顺序，无重复）
    pub fn customers(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.customer.as_str()).collect()
    }

    /// 按客户名精确查找
    pub fn find_by_customer(&self, customer: &str) -> Option<&OrderRecord> {
        self.records.iter().find(|r| r.customer == customer)
    }

    /// 按客户名查找，未找到返回 NotFound
    pub fn get_by_customer(&self, customer: &str) -> RepositoryResult<&OrderRecord> {
        self.find_by_customer(customer)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "OrderRecord".to_string(),
                id: customer.to_string(),
            })
    }
}

/// 逐条校验建表约束
fn validate_records(records: &[OrderRecord]) -> RepositoryResult<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        let index = idx + 1;

        if record.customer.trim().is_empty() {
            return Err(RepositoryError::EmptyCustomer { index });
        }

        if let Some(first) = seen.insert(record.customer.as_str(), index) {
            return Err(RepositoryError::DuplicateCustomer {
                customer: record.customer.clone(),
                first,
                second: index,
            });
        }

        if record.thickness_mm == 0 {
            return Err(RepositoryError::InvalidThickness {
                customer: record.customer.clone(),
                value: record.thickness_mm,
            });
        }

        if record.price < Decimal::ZERO {
            return Err(RepositoryError::NegativePrice {
                customer: record.customer.clone(),
                price: record.price,
            });
        }

        if record.status.is_blank() {
            return Err(RepositoryError::EmptyStatus {
                customer: record.customer.clone(),
            });
        }
    }

    Ok(())
}
