// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持西班牙语（默认）、英文、中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 注意: 所有翻译显式传入 locale，不修改全局语言，
//       多个会话可以同时使用不同语言
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "es";

/// 已加载的语言列表（排序后）
pub fn supported_locales() -> Vec<String> {
    let mut locales: Vec<String> = rust_i18n::available_locales!()
        .into_iter()
        .map(|l| l.to_string())
        .collect();
    locales.sort();
    locales
}

/// 判断语言是否已加载
pub fn is_supported(locale: &str) -> bool {
    supported_locales().iter().any(|l| l == locale)
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use order_lookup::i18n::t;
/// let title = t("page.title", "es");
/// ```
pub fn t(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数）
///
/// 占位符格式: `%{name}`
///
/// # 示例
/// ```no_run
/// use order_lookup::i18n::t_with_args;
/// let msg = t_with_args("error.not_found", "es", &[("customer", "Alubal")]);
/// ```
pub fn t_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(key, locale);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_locales() {
        let locales = supported_locales();
        assert!(locales.contains(&"es".to_string()));
        assert!(locales.contains(&"en".to_string()));
        assert!(locales.contains(&"zh-CN".to_string()));
        assert!(is_supported(DEFAULT_LOCALE));
        assert!(!is_supported("fr"));
    }

    #[test]
    fn test_translate_simple() {
        assert_eq!(t("query.price", "es"), "Precio");
        assert_eq!(t("query.price", "en"), "Price");
        assert_eq!(t("query.status", "es"), "Estado del pedido");
    }

    #[test]
    fn test_translate_with_args() {
        let msg = t_with_args("error.not_found", "es", &[("customer", "Nadie")]);
        assert!(msg.contains("Nadie"));
        assert!(!msg.contains("%{customer}"));

        let msg = t_with_args("error.not_found", "en", &[("customer", "Nobody")]);
        assert!(msg.contains("No order found"));
        assert!(msg.contains("Nobody"));
    }

    #[test]
    fn test_locales_do_not_leak_between_calls() {
        // 交替调用不同语言，结果互不影响
        let es = t("page.kind_control", "es");
        let en = t("page.kind_control", "en");
        assert_eq!(es, "Tipo de consulta");
        assert_eq!(en, "Query type");
        assert_eq!(t("page.kind_control", "es"), es);
    }
}
