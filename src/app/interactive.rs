// ==========================================
// 订单查询助手 - 交互会话
// ==========================================
// 循环: 选择客户 → 选择查询类型 → 显示答复
// 空输入或 q 退出；无效输入提示后重新选择
// ==========================================

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::api::ApiError;
use crate::app::page::PageRenderer;
use crate::domain::QueryKind;
use crate::i18n::t_with_args;

/// 解析选项输入
///
/// 顺序: 名称完全匹配 → 序号（从 1 开始）→ 名称忽略大小写匹配
pub fn resolve_choice(input: &str, options: &[String]) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(i) = options.iter().position(|o| o == input) {
        return Some(i);
    }

    if let Ok(n) = input.parse::<usize>() {
        return (1..=options.len()).contains(&n).then(|| n - 1);
    }

    let lower = input.to_lowercase();
    options.iter().position(|o| o.to_lowercase() == lower)
}

/// 单次输入的结果
enum Prompt {
    Quit,
    Input(String),
}

/// 交互会话
pub struct InteractiveSession<'a> {
    renderer: PageRenderer<'a>,
}

impl<'a> InteractiveSession<'a> {
    pub fn new(renderer: PageRenderer<'a>) -> Self {
        Self { renderer }
    }

    /// 运行会话直到退出或输入结束
    ///
    /// # 返回
    /// - Ok(n): 已显示的答复数量
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<usize> {
        let api = self.renderer.api();
        let customers = api.list_customers();
        let kind_labels: Vec<String> = QueryKind::ALL
            .iter()
            .map(|k| self.renderer.kind_label(*k))
            .collect();

        self.renderer.write_header(out)?;

        if customers.is_empty() {
            writeln!(out, "{}", self.renderer.text("page.no_customers"))?;
            self.renderer.write_footer(out)?;
            return Ok(0);
        }

        let mut answered = 0;
        loop {
            // 客户选择
            self.renderer.write_customer_control(out, None)?;
            let customer = match self.prompt(input, out)? {
                Prompt::Quit => break,
                Prompt::Input(raw) => match resolve_choice(&raw, &customers) {
                    Some(i) => customers[i].clone(),
                    None => {
                        self.write_invalid(out, &raw)?;
                        continue;
                    }
                },
            };

            // 查询类型选择
            let kind = loop {
                self.renderer.write_kind_control(out, None)?;
                match self.prompt(input, out)? {
                    Prompt::Quit => break None,
                    Prompt::Input(raw) => {
                        let kind = resolve_choice(&raw, &kind_labels)
                            .map(|i| QueryKind::ALL[i])
                            .or_else(|| raw.parse::<QueryKind>().ok());
                        match kind {
                            Some(kind) => break Some(kind),
                            None => self.write_invalid(out, &raw)?,
                        }
                    }
                }
            };
            let Some(kind) = kind else { break };

            debug!(customer = %customer, kind = %kind, "交互查询");
            match api.answer_in(&customer, kind, self.renderer.locale()) {
                Ok(answer) => {
                    self.renderer.write_answer(out, &answer)?;
                    answered += 1;
                }
                Err(ApiError::NotFound { .. }) => {
                    self.renderer.write_not_found(out, &customer)?;
                }
                Err(e) => {
                    writeln!(out, "{}", self.renderer.palette().error(&e.to_string()))?;
                }
            }
        }

        self.renderer.write_footer(out)?;
        Ok(answered)
    }

    fn prompt<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<Prompt> {
        write!(out, "{}", self.renderer.text("page.prompt_choice"))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(Prompt::Quit);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("q") {
            return Ok(Prompt::Quit);
        }
        Ok(Prompt::Input(trimmed.to_string()))
    }

    fn write_invalid<W: Write>(&self, out: &mut W, raw: &str) -> io::Result<()> {
        let message = t_with_args(
            "page.invalid_choice",
            self.renderer.locale(),
            &[("input", raw)],
        );
        writeln!(out, "{}", self.renderer.palette().error(&message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["Alubal".to_string(), "Metálicas Lozano".to_string()]
    }

    #[test]
    fn test_resolve_by_number() {
        assert_eq!(resolve_choice("1", &options()), Some(0));
        assert_eq!(resolve_choice(" 2 ", &options()), Some(1));
        assert_eq!(resolve_choice("0", &options()), None);
        assert_eq!(resolve_choice("3", &options()), None);
    }

    #[test]
    fn test_resolve_by_name() {
        assert_eq!(resolve_choice("Metálicas Lozano", &options()), Some(1));
        assert_eq!(resolve_choice("alubal", &options()), Some(0));
        assert_eq!(resolve_choice("Nadie", &options()), None);
        assert_eq!(resolve_choice("", &options()), None);
    }

    #[test]
    fn test_resolve_numeric_name_before_index() {
        let options = vec!["2".to_string(), "7".to_string(), "Alubal".to_string()];
        // "2" 是第一个客户的名称，不按序号取第二项
        assert_eq!(resolve_choice("2", &options), Some(0));
        assert_eq!(resolve_choice("7", &options), Some(1));
        // 非名称的数字仍按序号
        assert_eq!(resolve_choice("3", &options), Some(2));
        assert_eq!(resolve_choice("1", &options), Some(0));
    }
}
