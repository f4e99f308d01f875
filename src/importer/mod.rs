// ==========================================
// 订单查询助手 - 导入层
// ==========================================
// 职责: 从外部文件构造只读订单表
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod order_importer;
pub mod order_importer_trait;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::OrderFieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use order_importer::OrderImporter;

// 重导出 Trait 接口
pub use order_importer_trait::{FieldMapper, FileParser, RawRow};
