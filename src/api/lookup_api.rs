// ==========================================
// 订单查询助手 - 查询 API
// ==========================================
// 职责: 按客户名 + 查询类型生成答复
// 约束: 只读；同一输入永远得到同一答复
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::answer::{Answer, AnswerFormatter};
use crate::api::error::{ApiError, ApiResult};
use crate::domain::QueryKind;
use crate::i18n::{self, t, DEFAULT_LOCALE};
use crate::repository::{OrderTable, RepositoryError};

// ==========================================
// LookupOptions - 答复格式参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOptions {
    /// 答复语言
    pub locale: String,
    /// 货币符号（附在价格之后）
    pub currency_symbol: String,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            currency_symbol: "€".to_string(),
        }
    }
}

// ==========================================
// OrderLookupApi - 查询 API
// ==========================================

/// 订单查询 API
///
/// 职责：
/// 1. 客户列表（页面客户选择控件的选项）
/// 2. 查询答复（价格 / 状态 / 详情）
///
/// 订单表只读共享，多个会话可并发调用。
pub struct OrderLookupApi {
    table: Arc<OrderTable>,
    options: LookupOptions,
}

impl OrderLookupApi {
    /// 创建查询 API
    ///
    /// # 参数
    /// - table: 已校验的订单表
    /// - options: 默认语言与货币符号
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): 语言未加载或货币符号为空
    pub fn new(table: Arc<OrderTable>, options: LookupOptions) -> ApiResult<Self> {
        if !i18n::is_supported(&options.locale) {
            return Err(ApiError::InvalidInput(format!(
                "不支持的语言: {}（可选: {}）",
                options.locale,
                i18n::supported_locales().join(", ")
            )));
        }
        if options.currency_symbol.trim().is_empty() {
            return Err(ApiError::InvalidInput("货币符号不能为空".to_string()));
        }

        Ok(Self { table, options })
    }

    /// 使用默认参数创建
    pub fn with_defaults(table: Arc<OrderTable>) -> ApiResult<Self> {
        Self::new(table, LookupOptions::default())
    }

    pub fn locale(&self) -> &str {
        &self.options.locale
    }

    pub fn currency_symbol(&self) -> &str {
        &self.options.currency_symbol
    }

    pub fn table(&self) -> &OrderTable {
        &self.table
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 客户列表（表中顺序）
    pub fn list_customers(&self) -> Vec<String> {
        self.table
            .customers()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// 查询类型选项标签
    pub fn query_kind_label(&self, kind: QueryKind) -> String {
        t(kind.label_key(), &self.options.locale)
    }

    /// 按默认语言答复
    ///
    /// # 返回
    /// - Err(ApiError::NotFound): 客户不在表中
    pub fn answer(&self, customer: &str, kind: QueryKind) -> ApiResult<Answer> {
        self.answer_in(customer, kind, &self.options.locale)
    }

    /// 按指定语言答复（会话级语言，不影响其他调用）
    pub fn answer_in(&self, customer: &str, kind: QueryKind, locale: &str) -> ApiResult<Answer> {
        if !i18n::is_supported(locale) {
            return Err(ApiError::InvalidInput(format!("不支持的语言: {}", locale)));
        }

        let record = self.table.get_by_customer(customer).map_err(|e| {
            if let RepositoryError::NotFound { .. } = e {
                warn!(customer = %customer, kind = %kind, "客户不存在");
            }
            ApiError::from(e)
        })?;

        let answer =
            AnswerFormatter::new(locale, &self.options.currency_symbol).format(record, kind);

        debug!(
            customer = %customer,
            kind = %kind,
            locale = %locale,
            lines = answer.lines.len(),
            "查询完成"
        );

        Ok(answer)
    }
}
