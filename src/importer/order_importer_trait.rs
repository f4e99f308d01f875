// ==========================================
// 订单查询助手 - 订单导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 管道: 文件解析 → 字段映射 → 建表校验
// ==========================================

use crate::domain::OrderRecord;
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// RawRow - 原始行记录
// ==========================================
/// 文件中的一行数据（列名 → 单元格文本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 文件内行号（表头为第 1 行）
    pub row_number: usize,
    pub cells: HashMap<String, String>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 行记录列表（已跳过空白行）
    /// - Err: 文件读取错误、格式错误
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: OrderFieldMapper
pub trait FieldMapper: Send + Sync {
    /// 将原始行记录映射为 OrderRecord
    ///
    /// # 参数
    /// - row: 原始行记录
    ///
    /// # 返回
    /// - Ok(OrderRecord): 映射后的订单记录
    /// - Err: 必填字段缺失、类型转换错误（带行号）
    fn map_to_order(&self, row: &RawRow) -> ImportResult<OrderRecord>;
}
