// ==========================================
// 订单查询助手 - 参考数据集
// ==========================================
// 未指定数据文件时使用的内置订单表（4 条）
// ==========================================

use crate::domain::{OrderRecord, OrderStatus};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::order_table::OrderTable;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

// (客户, 材质, 厚度mm, 尺寸, 价格, 状态, 下单日期)
type SeedRow = (
    &'static str,
    &'static str,
    u32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const REFERENCE_ROWS: [SeedRow; 4] = [
    ("Alubal", "Hierro", 5, "2000x1000", "94.20", "En preparación", "2025-06-01"),
    ("Metálicas Lozano", "Hierro", 10, "3000x1500", "282.00", "Disponible", "2025-06-03"),
    ("Aceros Albacete", "Inoxidable", 3, "1500x1000", "79.30", "Enviado", "2025-05-30"),
    (
        "Estructuras Hermanos Pérez",
        "Hierro",
        8,
        "3000x1500",
        "215.00",
        "Entregado",
        "2025-05-25",
    ),
];

/// 参考订单记录（按固定顺序）
pub fn reference_orders() -> RepositoryResult<Vec<OrderRecord>> {
    REFERENCE_ROWS.iter().map(seed_row_to_record).collect()
}

fn seed_row_to_record(row: &SeedRow) -> RepositoryResult<OrderRecord> {
    let &(customer, material, thickness_mm, dimensions, price, status, date) = row;

    let price = Decimal::from_str(price).map_err(|e| RepositoryError::FieldValueError {
        field: "price".to_string(),
        message: format!("{}: {}", price, e),
    })?;
    let order_date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
        RepositoryError::FieldValueError {
            field: "order_date".to_string(),
            message: format!("{}: {}", date, e),
        }
    })?;

    Ok(OrderRecord {
        customer: customer.to_string(),
        material: material.to_string(),
        thickness_mm,
        dimensions: dimensions.to_string(),
        price,
        status: OrderStatus::from(status),
        order_date,
    })
}

/// 参考订单表
pub fn reference_table() -> RepositoryResult<OrderTable> {
    OrderTable::new(reference_orders()?)
}
