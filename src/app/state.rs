// ==========================================
// 订单查询助手 - 应用状态
// ==========================================
// 职责: 启动时装配订单表与查询 API，之后只读共享
// ==========================================

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{ApiResult, LookupOptions, OrderLookupApi};
use crate::config::AppConfig;
use crate::importer::OrderImporter;
use crate::repository::{reference_table, OrderTable};

/// 订单数据来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// 内置参考数据
    Reference,
    /// 外部数据文件
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Reference => write!(f, "内置参考数据"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// 应用状态
///
/// 包含订单表和查询 API 实例，装配完成后不再修改
pub struct AppState {
    /// 生效配置
    pub config: AppConfig,

    /// 订单表
    pub table: Arc<OrderTable>,

    /// 查询 API
    pub lookup_api: Arc<OrderLookupApi>,

    /// 数据来源
    pub source: DataSource,
}

impl AppState {
    /// 创建新的 AppState 实例
    ///
    /// # 说明
    /// 1. 配置了数据文件时经导入层加载，否则使用内置参考数据
    /// 2. 订单表在构造时完成校验（客户唯一等）
    /// 3. 按配置的语言与币种创建查询 API
    pub fn new(config: AppConfig) -> ApiResult<Self> {
        let (table, source) = match &config.data_file {
            Some(path) => {
                tracing::info!("从数据文件加载订单: {}", path.display());
                let table = OrderImporter::new().load_table(path)?;
                (table, DataSource::File(path.clone()))
            }
            None => (reference_table()?, DataSource::Reference),
        };

        Self::with_table(config, table, source)
    }

    /// 使用已构造的订单表创建
    pub fn with_table(config: AppConfig, table: OrderTable, source: DataSource) -> ApiResult<Self> {
        let table = Arc::new(table);
        let lookup_api = Arc::new(OrderLookupApi::new(
            table.clone(),
            LookupOptions {
                locale: config.locale.clone(),
                currency_symbol: config.currency_symbol.clone(),
            },
        )?);

        tracing::info!(
            source = %source,
            orders = table.len(),
            locale = %config.locale,
            "AppState初始化完成"
        );

        Ok(Self {
            config,
            table,
            lookup_api,
            source,
        })
    }
}
