/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 题库 YAML 文件路径
    pub questions_file: String,
    /// JSON 报告输出路径（为空则不导出）
    pub report_file: Option<String>,
    /// 报告署名
    pub author: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_file: "config/mbti_questionnaire.yaml".to_string(),
            report_file: None,
            author: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            questions_file: std::env::var("QUESTIONS_FILE").unwrap_or(default.questions_file),
            report_file: std::env::var("REPORT_FILE").ok().filter(|v| !v.is_empty()),
            author: std::env::var("REPORT_AUTHOR").unwrap_or(default.author),
        }
    }
}
