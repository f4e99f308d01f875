// ==========================================
// 订单查询助手 - 领域类型定义
// ==========================================
// 查询类型为封闭集合 (价格/状态/详情)
// 订单状态为开放标签，不建状态机
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// 查询类型 (Query Kind)
// ==========================================
// 封闭集合: 前端只提供这三个选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryKind {
    Price,   // 价格
    Status,  // 订单状态
    Details, // 订单详情
}

impl QueryKind {
    /// 前端展示顺序
    pub const ALL: [QueryKind; 3] = [QueryKind::Price, QueryKind::Status, QueryKind::Details];

    /// 每种查询对应的展示风格
    pub fn style(self) -> AnswerStyle {
        match self {
            QueryKind::Price => AnswerStyle::Success,
            QueryKind::Status => AnswerStyle::Info,
            QueryKind::Details => AnswerStyle::Plain,
        }
    }

    /// 选项标签的翻译 key
    pub fn label_key(self) -> &'static str {
        match self {
            QueryKind::Price => "query.price",
            QueryKind::Status => "query.status",
            QueryKind::Details => "query.details",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::Price => write!(f, "PRICE"),
            QueryKind::Status => write!(f, "STATUS"),
            QueryKind::Details => write!(f, "DETAILS"),
        }
    }
}

/// 查询类型解析失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("未知的查询类型: {0}（可选: price / status / details）")]
pub struct ParseQueryKindError(pub String);

impl FromStr for QueryKind {
    type Err = ParseQueryKindError;

    /// 同时接受英文代码和西班牙语选项标签
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" | "precio" => Ok(QueryKind::Price),
            "status" | "estado" | "estado del pedido" => Ok(QueryKind::Status),
            "details" | "detalles" | "detalles del pedido" => Ok(QueryKind::Details),
            _ => Err(ParseQueryKindError(s.to_string())),
        }
    }
}

// ==========================================
// 答复展示风格 (Answer Style)
// ==========================================
// 渲染层据此选择颜色，查询逻辑不关心具体样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerStyle {
    Success, // 成功提示
    Info,    // 信息提示
    Plain,   // 普通文本
}

impl fmt::Display for AnswerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerStyle::Success => write!(f, "SUCCESS"),
            AnswerStyle::Info => write!(f, "INFO"),
            AnswerStyle::Plain => write!(f, "PLAIN"),
        }
    }
}

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 开放标签: 样例数据中有 En preparación / Disponible / Enviado / Entregado，
// 但不约束取值，也不定义状态转换
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 空白标签视为缺失
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderStatus {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for OrderStatus {
    fn from(label: String) -> Self {
        Self(label)
    }
}
