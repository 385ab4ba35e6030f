// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "zh-CN"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数, 当前语言）
///
/// # 示例
/// ```no_run
/// use internship_consolidator::i18n::t;
/// let msg = t("summary.title");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数, 当前语言）
///
/// # 示例
/// ```no_run
/// use internship_consolidator::i18n::t_with_args;
/// let msg = t_with_args("summary.files_failed", &[("count", "2")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    fill(rust_i18n::t!(key).to_string(), args)
}

/// 翻译消息（带参数, 指定语言）
///
/// 不读写全局语言设置
pub fn t_in(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    fill(rust_i18n::t!(key, locale = locale).to_string(), args)
}

fn fill(mut message: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        message = message.replace(&placeholder, v);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // rust-i18n 的 locale 为全局状态，且 Rust 测试默认并行执行；
    // 为避免测试互相干扰，这里对 i18n 相关测试串行化。
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");

        set_locale("en");
        assert_eq!(current_locale(), "en");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(
            t_with_args("summary.files_failed", &[("count", "2")]),
            "Files with errors: 2"
        );
    }

    #[test]
    fn test_explicit_locale() {
        assert_eq!(
            t_in("zh-CN", "summary.total_students", &[("count", "3")]),
            "学生总数: 3"
        );
        assert_eq!(
            t_in("en", "summary.total_students", &[("count", "3")]),
            "Total students: 3"
        );
    }
}
