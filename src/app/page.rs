// ==========================================
// 订单查询助手 - 页面渲染
// ==========================================
// 页面结构: 标题 → 说明 → 客户选择 → 查询类型 → 答复 → 分隔线 + 页脚
// 颜色只由 AnswerStyle 决定；关闭颜色时输出纯文本
// ==========================================

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::api::{Answer, OrderLookupApi};
use crate::domain::{AnswerStyle, QueryKind};
use crate::i18n::{t, t_with_args};

/// 分隔线
const RULE: &str = "---";

// ==========================================
// Palette - 终端配色
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dimmed(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn selected(&self, text: &str) -> String {
        if self.enabled {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    /// 按答复风格着色
    pub fn styled(&self, style: AnswerStyle, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match style {
            AnswerStyle::Success => text.green().to_string(),
            AnswerStyle::Info => text.cyan().to_string(),
            AnswerStyle::Plain => text.to_string(),
        }
    }
}

// ==========================================
// PageRenderer - 页面渲染器
// ==========================================
pub struct PageRenderer<'a> {
    api: &'a OrderLookupApi,
    palette: Palette,
    locale: String,
}

impl<'a> PageRenderer<'a> {
    /// 使用 API 的默认语言
    pub fn new(api: &'a OrderLookupApi, palette: Palette) -> Self {
        Self::with_locale(api, palette, api.locale())
    }

    pub fn with_locale(api: &'a OrderLookupApi, palette: Palette, locale: &str) -> Self {
        Self {
            api,
            palette,
            locale: locale.to_string(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn api(&self) -> &OrderLookupApi {
        self.api
    }

    /// 翻译（当前会话语言）
    pub fn text(&self, key: &str) -> String {
        t(key, &self.locale)
    }

    pub fn kind_label(&self, kind: QueryKind) -> String {
        t(kind.label_key(), &self.locale)
    }

    /// 标题 + 说明
    pub fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.palette.heading(&self.text("page.title")))?;
        writeln!(out, "{}", self.palette.dimmed(&self.text("page.caption")))?;
        writeln!(out)
    }

    /// 客户选择控件（编号列表，选中项标记 ›）
    pub fn write_customer_control<W: Write>(
        &self,
        out: &mut W,
        selected: Option<&str>,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.palette.heading(&self.text("page.customer_control")))?;

        let customers = self.api.list_customers();
        if customers.is_empty() {
            writeln!(out, "  {}", self.text("page.no_customers"))?;
        }
        for (i, customer) in customers.iter().enumerate() {
            if selected == Some(customer.as_str()) {
                writeln!(out, "› {}. {}", i + 1, self.palette.selected(customer))?;
            } else {
                writeln!(out, "  {}. {}", i + 1, customer)?;
            }
        }
        writeln!(out)
    }

    /// 查询类型控件
    pub fn write_kind_control<W: Write>(
        &self,
        out: &mut W,
        selected: Option<QueryKind>,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.palette.heading(&self.text("page.kind_control")))?;
        for (i, kind) in QueryKind::ALL.iter().enumerate() {
            let label = self.kind_label(*kind);
            if selected == Some(*kind) {
                writeln!(out, "› {}. {}", i + 1, self.palette.selected(&label))?;
            } else {
                writeln!(out, "  {}. {}", i + 1, label)?;
            }
        }
        writeln!(out)
    }

    /// 答复块（标题加粗，各行按风格着色）
    pub fn write_answer<W: Write>(&self, out: &mut W, answer: &Answer) -> io::Result<()> {
        if let Some(heading) = &answer.heading {
            writeln!(out, "{}", self.palette.heading(heading))?;
        }
        for line in &answer.lines {
            writeln!(out, "{}", self.palette.styled(answer.style, line))?;
        }
        writeln!(out)
    }

    /// 分隔线 + 页脚
    pub fn write_footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", self.palette.dimmed(&self.text("page.footer")))
    }

    /// 客户不存在的提示
    pub fn write_not_found<W: Write>(&self, out: &mut W, customer: &str) -> io::Result<()> {
        let message = t_with_args("error.not_found", &self.locale, &[("customer", customer)]);
        writeln!(out, "{}", self.palette.error(&message))
    }

    /// 完整页面（当前选择 + 答复）
    pub fn render_page<W: Write>(
        &self,
        out: &mut W,
        customer: &str,
        kind: QueryKind,
        answer: &Answer,
    ) -> io::Result<()> {
        self.write_header(out)?;
        self.write_customer_control(out, Some(customer))?;
        self.write_kind_control(out, Some(kind))?;
        self.write_answer(out, answer)?;
        self.write_footer(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::reference_table;
    use std::sync::Arc;

    fn api() -> OrderLookupApi {
        OrderLookupApi::with_defaults(Arc::new(reference_table().unwrap())).unwrap()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_palette_has_no_escape_codes() {
        let palette = Palette::plain();
        assert_eq!(palette.styled(AnswerStyle::Success, "ok"), "ok");
        assert_eq!(palette.heading("t"), "t");
    }

    #[test]
    fn test_colored_palette_wraps_text() {
        let palette = Palette::new(true);
        let styled = palette.styled(AnswerStyle::Success, "ok");
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("ok"));
        assert_eq!(palette.styled(AnswerStyle::Plain, "ok"), "ok");
    }

    #[test]
    fn test_customer_control_marks_selection() {
        let api = api();
        let renderer = PageRenderer::new(&api, Palette::plain());
        let out = render(|buf| renderer.write_customer_control(buf, Some("Alubal")));
        assert!(out.starts_with("Selecciona el cliente\n"));
        assert!(out.contains("› 1. Alubal"));
        assert!(out.contains("  2. Metálicas Lozano"));
    }

    #[test]
    fn test_full_page_layout() {
        let api = api();
        let renderer = PageRenderer::new(&api, Palette::plain());
        let answer = api.answer("Alubal", QueryKind::Price).unwrap();
        let out = render(|buf| renderer.render_page(buf, "Alubal", QueryKind::Price, &answer));

        let title = out.find("🤖 Chatbot Albasistemas").unwrap();
        let control = out.find("Tipo de consulta").unwrap();
        let price = out.find("94.20").unwrap();
        let footer = out.find("Demo moderna para Albasistemas.").unwrap();
        assert!(title < control && control < price && price < footer);
        assert!(out.contains("› 1. Precio"));
        assert!(out.contains("\n---\n"));
    }

    #[test]
    fn test_session_locale() {
        let api = api();
        let renderer = PageRenderer::with_locale(&api, Palette::plain(), "en");
        let out = render(|buf| renderer.write_kind_control(buf, None));
        assert!(out.contains("Query type"));
        assert!(out.contains("1. Price"));
    }
}
