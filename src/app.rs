use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::models::{load_questions_from_yaml, Question};
use crate::services::collector::{AnswerCollector, LineSource, StdinLineSource};
use crate::services::report::{render_result, ReportWriter};
use crate::services::scorer::score_responses;
use crate::utils::logging;

/// 应用主结构
pub struct App {
    config: Config,
    questions: Vec<Question>,
}

impl App {
    /// 初始化应用
    ///
    /// 加载并校验题库，失败时直接返回错误
    pub fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config.questions_file);

        let questions = load_questions_from_yaml(Path::new(&config.questions_file))?;
        logging::log_questions_loaded(questions.len());

        Ok(Self { config, questions })
    }

    /// 运行应用主逻辑（交互模式，从标准输入读取答案）
    pub fn run(&self) -> Result<()> {
        self.run_with_source(StdinLineSource)
    }

    /// 使用指定输入源运行应用主逻辑
    ///
    /// 流程：说明 → 逐题收集 → 计分 → 渲染 → 可选导出
    pub fn run_with_source<S: LineSource>(&self, source: S) -> Result<()> {
        let mut collector = AnswerCollector::new(source);
        collector.prompt_intro();
        let answers = collector.collect(&self.questions)?;

        let result = score_responses(&self.questions, &answers)?;
        logging::log_completed(&result.type_code);

        print!("{}", render_result(&result));

        if let Some(report_file) = &self.config.report_file {
            ReportWriter::new(report_file).write(&result, &self.config.author)?;
            info!("📄 报告已保存至: {}", report_file);
        }

        Ok(())
    }
}
