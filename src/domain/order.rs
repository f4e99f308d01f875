// ==========================================
// 订单查询助手 - 订单领域模型
// ==========================================
// 一行订单记录，以客户名为键
// 用途: 仓储层持有，API 层只读
// ==========================================

use crate::domain::types::OrderStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// OrderRecord - 订单记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    // ===== 主键 =====
    pub customer: String, // 客户名称（表内唯一）

    // ===== 材料信息 =====
    pub material: String,   // 材质（开放集合，如 Hierro / Inoxidable）
    pub thickness_mm: u32,  // 厚度（mm，正整数）
    pub dimensions: String, // 尺寸 "宽x高"（mm，原样展示，不解析）

    // ===== 商务信息 =====
    pub price: Decimal,      // 价格（单一币种，非负）
    pub status: OrderStatus, // 订单状态（开放标签）
    pub order_date: NaiveDate, // 下单日期
}

impl OrderRecord {
    /// 价格，保留两位小数
    pub fn price_2dp(&self) -> String {
        format!("{:.2}", self.price.round_dp(2))
    }

    /// 下单日期，ISO 格式 (YYYY-MM-DD)
    pub fn order_date_iso(&self) -> String {
        self.order_date.format("%Y-%m-%d").to_string()
    }
}
