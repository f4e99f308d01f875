// ==========================================
// 订单查询助手 - 字段映射器实现
// ==========================================
// 职责: 源列名 → 标准字段映射 + 类型转换
// 列名: 西班牙语参考表头 / 英文字段名，不区分大小写
// ==========================================

use crate::domain::{OrderRecord, OrderStatus};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::order_importer_trait::{FieldMapper as FieldMapperTrait, RawRow};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

// 标准字段名（用于错误信息）
pub mod fields {
    pub const CUSTOMER: &str = "customer";
    pub const MATERIAL: &str = "material";
    pub const THICKNESS_MM: &str = "thickness_mm";
    pub const DIMENSIONS: &str = "dimensions";
    pub const PRICE: &str = "price";
    pub const STATUS: &str = "status";
    pub const ORDER_DATE: &str = "order_date";
}

pub struct OrderFieldMapper;

impl FieldMapperTrait for OrderFieldMapper {
    fn map_to_order(&self, row: &RawRow) -> ImportResult<OrderRecord> {
        let row_number = row.row_number;

        let customer = self.require(row, fields::CUSTOMER)?;
        let material = self.require(row, fields::MATERIAL)?;
        let dimensions = self.require(row, fields::DIMENSIONS)?;
        let status = self.require(row, fields::STATUS)?;

        let raw_thickness = self.require(row, fields::THICKNESS_MM)?;
        let thickness_mm =
            parse_thickness(&raw_thickness).ok_or_else(|| ImportError::TypeConversionError {
                row: row_number,
                field: fields::THICKNESS_MM.to_string(),
                message: format!("无法解析为正整数: {}", raw_thickness),
            })?;

        let raw_price = self.require(row, fields::PRICE)?;
        let price = parse_price(&raw_price).ok_or_else(|| ImportError::TypeConversionError {
            row: row_number,
            field: fields::PRICE.to_string(),
            message: format!("无法解析为金额: {}", raw_price),
        })?;

        let raw_date = self.require(row, fields::ORDER_DATE)?;
        let order_date = parse_date(&raw_date).ok_or_else(|| ImportError::DateFormatError {
            row: row_number,
            field: fields::ORDER_DATE.to_string(),
            value: raw_date.clone(),
        })?;

        Ok(OrderRecord {
            customer,
            material,
            thickness_mm,
            dimensions,
            price,
            status: OrderStatus::from(status),
            order_date,
        })
    }
}

impl OrderFieldMapper {
    /// 标准字段对应的源列名（别名）
    fn aliases(field: &str) -> &'static [&'static str] {
        match field {
            fields::CUSTOMER => &["Cliente", "customer"],
            fields::MATERIAL => &["Material", "material"],
            fields::THICKNESS_MM => &["Espesor", "Espesor (mm)", "thickness_mm", "thickness"],
            fields::DIMENSIONS => &["Medidas", "dimensions"],
            fields::PRICE => &["Precio", "price"],
            fields::STATUS => &["Estado", "Estado del pedido", "status"],
            fields::ORDER_DATE => &["Fecha", "Fecha de pedido", "order_date", "date"],
            _ => &[],
        }
    }

    /// 提取字符串字段（返回 Option），支持多个可能的列名（别名）
    fn get_string(&self, row: &RawRow, field: &str) -> Option<String> {
        for alias in Self::aliases(field) {
            let alias_lower = alias.to_lowercase();
            let hit = row
                .cells
                .iter()
                .find(|(header, _)| header.to_lowercase() == alias_lower);
            if let Some((_, value)) = hit {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    /// 提取必填字段
    fn require(&self, row: &RawRow, field: &str) -> ImportResult<String> {
        self.get_string(row, field)
            .ok_or_else(|| ImportError::MissingField {
                row: row.row_number,
                field: field.to_string(),
            })
    }
}

// ==========================================
// 类型转换
// ==========================================

/// 解析厚度: "5" / "5 mm" / "5.0"（Excel 数值单元格）
pub fn parse_thickness(raw: &str) -> Option<u32> {
    let cleaned = raw.trim().trim_end_matches("mm").trim();
    if let Ok(value) = cleaned.parse::<u32>() {
        return (value > 0).then_some(value);
    }

    let value = cleaned.replace(',', ".").parse::<f64>().ok()?;
    if value > 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

/// 解析金额: "94.20" / "94,20" / "1.234,50" / "94.20 €"
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .trim_end_matches('€')
        .trim_start_matches('€')
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    // 同时出现 '.' 和 ','：靠后的为小数点，另一个为千分位
    let normalized = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) if dot > comma => cleaned.replace(',', ""),
        (Some(_), Some(_)) => cleaned.replace('.', "").replace(',', "."),
        _ => cleaned.replace(',', "."),
    };

    Decimal::from_str(&normalized).ok()
}

/// 解析日期: YYYY-MM-DD / YYYYMMDD / DD/MM/YYYY / ISO 日期时间 / Excel 序列号
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();

    // ISO 日期时间只取日期部分
    let date_part = value.split(['T', ' ']).next().unwrap_or(value);

    for format in ["%Y-%m-%d", "%Y%m%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
            return Some(date);
        }
    }

    excel_serial_to_date(value)
}

/// Excel 日期序列号（1900 日期系统）→ 日期
fn excel_serial_to_date(raw: &str) -> Option<NaiveDate> {
    let serial = raw.parse::<f64>().ok()?;
    // 合理范围: 1900-03-01 之后，9999-12-31 之前
    if !(61.0..2_958_466.0).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}
