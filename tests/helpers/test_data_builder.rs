// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use order_lookup::domain::{OrderRecord, OrderStatus};
use rust_decimal::Decimal;
use std::str::FromStr;

// ==========================================
// OrderRecord 构建器
// ==========================================

pub struct OrderBuilder {
    customer: String,
    material: String,
    thickness_mm: u32,
    dimensions: String,
    price: Decimal,
    status: String,
    order_date: NaiveDate,
}

impl OrderBuilder {
    pub fn new(customer: &str) -> Self {
        Self {
            customer: customer.to_string(),
            material: "Hierro".to_string(),
            thickness_mm: 5,
            dimensions: "2000x1000".to_string(),
            price: Decimal::new(10000, 2),
            status: "Disponible".to_string(),
            order_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    pub fn material(mut self, material: &str) -> Self {
        self.material = material.to_string();
        self
    }

    pub fn thickness(mut self, mm: u32) -> Self {
        self.thickness_mm = mm;
        self
    }

    pub fn dimensions(mut self, dimensions: &str) -> Self {
        self.dimensions = dimensions.to_string();
        self
    }

    /// 价格（十进制字符串，如 "94.20"）
    pub fn price(mut self, price: &str) -> Self {
        self.price = Decimal::from_str(price).unwrap();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn order_date(mut self, y: i32, m: u32, d: u32) -> Self {
        self.order_date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        self
    }

    pub fn build(self) -> OrderRecord {
        OrderRecord {
            customer: self.customer,
            material: self.material,
            thickness_mm: self.thickness_mm,
            dimensions: self.dimensions,
            price: self.price,
            status: OrderStatus::new(self.status),
            order_date: self.order_date,
        }
    }
}

// ==========================================
// CSV 内容构建器
// ==========================================

/// 西班牙语表头
pub const CSV_HEADER_ES: &str = "Cliente,Material,Espesor (mm),Medidas,Precio,Estado,Fecha de pedido";

/// 将订单记录写成 CSV 行（与 CSV_HEADER_ES 列顺序一致）
pub fn csv_line(record: &OrderRecord) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        record.customer,
        record.material,
        record.thickness_mm,
        record.dimensions,
        record.price,
        record.status,
        record.order_date_iso()
    )
}
