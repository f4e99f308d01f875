// ==========================================
// 订单查询助手 - 订单导入器
// ==========================================
// 管道: 文件解析 → 字段映射 → 建表校验
// 任一行失败即整体失败（订单表要么完整，要么不加载）
// ==========================================

use crate::domain::OrderRecord;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::OrderFieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::order_importer_trait::{FieldMapper, FileParser};
use crate::repository::OrderTable;
use std::path::Path;
use tracing::info;

/// 订单导入器
///
/// 默认使用 [`UniversalFileParser`] 与 [`OrderFieldMapper`]，
/// 也可注入其他实现（测试或自定义表头）。
pub struct OrderImporter<P = UniversalFileParser, M = OrderFieldMapper>
where
    P: FileParser,
    M: FieldMapper,
{
    parser: P,
    mapper: M,
}

impl OrderImporter {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: OrderFieldMapper,
        }
    }
}

impl Default for OrderImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, M> OrderImporter<P, M>
where
    P: FileParser,
    M: FieldMapper,
{
    pub fn with_components(parser: P, mapper: M) -> Self {
        Self { parser, mapper }
    }

    /// 读取文件并映射为订单记录（保持文件顺序）
    pub fn load_records(&self, file_path: &Path) -> ImportResult<Vec<OrderRecord>> {
        let rows = self.parser.parse_to_raw_rows(file_path)?;

        let records = rows
            .iter()
            .map(|row| self.mapper.map_to_order(row))
            .collect::<ImportResult<Vec<_>>>()?;

        info!(
            file = %file_path.display(),
            rows = records.len(),
            "订单文件解析完成"
        );
        Ok(records)
    }

    /// 读取文件并构造只读订单表
    pub fn load_table(&self, file_path: &Path) -> ImportResult<OrderTable> {
        let records = self.load_records(file_path)?;
        Ok(OrderTable::new(records)?)
    }
}
