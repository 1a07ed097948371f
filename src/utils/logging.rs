/// 日志工具模块
///
/// 提供日志初始化与输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 过滤级别优先读取 RUST_LOG 环境变量，默认 info。
/// 交互式的题目提示走标准输出，日志只承载诊断信息。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `questions_file`: 题库文件路径
pub fn log_startup(questions_file: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - MBTI 性格测试");
    info!("📋 题库文件: {}", questions_file);
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
///
/// # 参数
/// - `total`: 题目总数
pub fn log_questions_loaded(total: usize) {
    info!("✓ 共加载 {} 道题目", total);
}

/// 记录测试完成信息
///
/// # 参数
/// - `type_code`: 派生出的类型代码
pub fn log_completed(type_code: &str) {
    info!("{}", "=".repeat(60));
    info!("📊 作答完成，类型: {}", type_code);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("短文本", 10), "短文本");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
    }
}
