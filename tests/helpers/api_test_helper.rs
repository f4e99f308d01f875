// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 构造查询 API、临时数据文件与配置文件
// ==========================================

use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

use order_lookup::api::{LookupOptions, OrderLookupApi};
use order_lookup::domain::OrderRecord;
use order_lookup::repository::{reference_table, OrderTable};

use super::test_data_builder::{csv_line, CSV_HEADER_ES};

/// 基于内置参考数据的查询 API（es / €）
pub fn reference_api() -> OrderLookupApi {
    OrderLookupApi::with_defaults(Arc::new(reference_table().expect("参考数据无效")))
        .expect("无法创建查询API")
}

/// 基于给定记录的查询 API
pub fn api_with(records: Vec<OrderRecord>, locale: &str, currency: &str) -> OrderLookupApi {
    let table = OrderTable::new(records).expect("订单表无效");
    OrderLookupApi::new(
        Arc::new(table),
        LookupOptions {
            locale: locale.to_string(),
            currency_symbol: currency.to_string(),
        },
    )
    .expect("无法创建查询API")
}

/// 写入临时文件（指定后缀），返回句柄以保持生命周期
pub fn temp_file(suffix: &str, lines: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("无法创建临时文件");
    for line in lines {
        writeln!(file, "{}", line).expect("写入失败");
    }
    file.flush().expect("写入失败");
    file
}

/// 将订单记录写成带西班牙语表头的临时 CSV
pub fn orders_csv(records: &[OrderRecord]) -> NamedTempFile {
    let mut lines = vec![CSV_HEADER_ES.to_string()];
    lines.extend(records.iter().map(csv_line));
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    temp_file(".csv", &refs)
}

/// 空配置文件（屏蔽用户目录下的真实配置）
pub fn empty_config() -> NamedTempFile {
    temp_file(".toml", &["# test config"])
}
