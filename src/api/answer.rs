// ==========================================
// 订单查询助手 - 查询答复
// ==========================================
// 职责: 订单记录 + 查询类型 → 本地化文本
// 价格固定两位小数；日期固定 YYYY-MM-DD；数据值不翻译
// ==========================================

use crate::domain::{AnswerStyle, OrderRecord, QueryKind};
use crate::i18n::{t, t_with_args};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Answer - 查询答复
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub customer: String,
    pub kind: QueryKind,
    pub style: AnswerStyle,
    /// 多行答复的标题（仅详情查询）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

impl Answer {
    /// 完整文本（标题 + 各行，换行分隔）
    pub fn text(&self) -> String {
        self.heading
            .iter()
            .chain(self.lines.iter())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

// ==========================================
// AnswerFormatter - 答复格式化
// ==========================================
pub struct AnswerFormatter<'a> {
    locale: &'a str,
    currency_symbol: &'a str,
}

impl<'a> AnswerFormatter<'a> {
    pub fn new(locale: &'a str, currency_symbol: &'a str) -> Self {
        Self {
            locale,
            currency_symbol,
        }
    }

    /// 按查询类型生成答复
    pub fn format(&self, record: &OrderRecord, kind: QueryKind) -> Answer {
        let (heading, lines) = match kind {
            QueryKind::Price => (None, vec![self.price_line(record)]),
            QueryKind::Status => (None, vec![self.status_line(record)]),
            QueryKind::Details => (
                Some(t("answer.details_heading", self.locale)),
                self.detail_lines(record),
            ),
        };

        Answer {
            customer: record.customer.clone(),
            kind,
            style: kind.style(),
            heading,
            lines,
        }
    }

    fn price_line(&self, record: &OrderRecord) -> String {
        t_with_args(
            "answer.price",
            self.locale,
            &[
                ("customer", &record.customer),
                ("price", &record.price_2dp()),
                ("currency", self.currency_symbol),
            ],
        )
    }

    fn status_line(&self, record: &OrderRecord) -> String {
        t_with_args(
            "answer.status",
            self.locale,
            &[
                ("status", record.status.as_str()),
                ("date", &record.order_date_iso()),
            ],
        )
    }

    fn detail_lines(&self, record: &OrderRecord) -> Vec<String> {
        let thickness = record.thickness_mm.to_string();
        let price = record.price_2dp();
        let date = record.order_date_iso();

        vec![
            t_with_args("answer.material", self.locale, &[("material", &record.material)]),
            t_with_args("answer.thickness", self.locale, &[("thickness", &thickness)]),
            t_with_args(
                "answer.dimensions",
                self.locale,
                &[("dimensions", &record.dimensions)],
            ),
            t_with_args(
                "answer.status_line",
                self.locale,
                &[("status", record.status.as_str())],
            ),
            t_with_args("answer.order_date", self.locale, &[("date", &date)]),
            t_with_args(
                "answer.price_line",
                self.locale,
                &[("price", &price), ("currency", self.currency_symbol)],
            ),
        ]
    }
}
