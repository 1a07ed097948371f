//! 结果报告服务 - 业务能力层
//!
//! 负责把计分结果渲染为终端文本，以及可选地导出 JSON 报告文件

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::error::AppError;
use crate::models::{Dichotomy, ScoreResult};

/// 16 种类型代码到描述的静态映射
static TYPE_DESCRIPTIONS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "INTJ" => "The Architect: Imaginative and strategic thinkers, with a plan for everything.",
    "INTP" => "The Logician: Innovative inventors with an unquenchable thirst for knowledge.",
    "ENTJ" => "The Commander: Bold, imaginative and strong-willed leaders.",
    "ENTP" => "The Debater: Smart and curious thinkers who cannot resist an intellectual challenge.",
    "INFJ" => "The Advocate: Quiet and mystical, yet very inspiring and tireless idealists.",
    "INFP" => "The Mediator: Poetic, kind and altruistic, always eager to help a good cause.",
    "ENFJ" => "The Protagonist: Charismatic and inspiring leaders, able to mesmerize their listeners.",
    "ENFP" => "The Campaigner: Enthusiastic, creative and sociable free spirits.",
    "ISTJ" => "The Logistician: Practical and fact-minded individuals, whose reliability cannot be doubted.",
    "ISFJ" => "The Defender: Very dedicated and warm protectors, always ready to defend their loved ones.",
    "ESTJ" => "The Executive: Excellent administrators, unsurpassed at managing things or people.",
    "ESFJ" => "The Consul: Extraordinarily caring, social and popular people, always eager to help.",
    "ISTP" => "The Virtuoso: Bold and practical experimenters, masters of all kinds of tools.",
    "ISFP" => "The Adventurer: Flexible and charming artists, always ready to explore and experience something new.",
    "ESTP" => "The Entrepreneur: Smart, energetic and very perceptive people, who truly enjoy living on the edge.",
    "ESFP" => "The Entertainer: Spontaneous, energetic and enthusiastic people - life is never boring around them.",
};

/// 百分比条的总宽度（字符数）
const BAR_WIDTH: usize = 30;

/// 查询类型代码对应的描述
pub fn type_description(type_code: &str) -> Option<&'static str> {
    TYPE_DESCRIPTIONS.get(type_code).copied()
}

/// 把计分结果渲染为多行终端文本
pub fn render_result(result: &ScoreResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n你的 MBTI 类型: {}\n", result.type_code));
    if let Some(desc) = type_description(&result.type_code) {
        out.push_str(desc);
        out.push('\n');
    }

    out.push_str("\n得分:\n");
    for pair in Dichotomy::ALL {
        let (lp, rp) = result.percentages.get(&pair).copied().unwrap_or((0, 0));
        out.push_str(&format!(
            "{}: {:>3}%  {} {:>3}% :{}\n",
            pair.left(),
            lp,
            percentage_bar(lp),
            rp,
            pair.right(),
        ));
    }

    out
}

/// 渲染单个维度对的水平百分比条
fn percentage_bar(left_pct: u32) -> String {
    let filled = (left_pct as usize * BAR_WIDTH) / 100;
    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..BAR_WIDTH {
        bar.push('░');
    }
    bar
}

/// JSON 报告的顶层结构
#[derive(Debug, Serialize)]
struct Report<'a> {
    /// 作者署名（可为空）
    author: &'a str,
    /// 报告生成时间
    generated_at: String,
    /// 计分结果
    result: &'a ScoreResult,
}

/// 报告写入服务
///
/// 职责：
/// - 将计分结果连同署名、生成时间写入 JSON 文件
/// - 不关心结果如何产生
pub struct ReportWriter {
    report_file_path: String,
}

impl ReportWriter {
    /// 使用目标文件路径创建报告写入服务
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            report_file_path: path.into(),
        }
    }

    /// 写入 JSON 报告
    pub fn write(&self, result: &ScoreResult, author: &str) -> Result<()> {
        let report = Report {
            author,
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            result,
        };

        let json = serde_json::to_string_pretty(&report).map_err(AppError::from)?;

        debug!(
            "写入报告: {} | 类型 {} | {} 字节",
            self.report_file_path,
            result.type_code,
            json.len()
        );

        std::fs::write(Path::new(&self.report_file_path), &json)
            .map_err(|e| AppError::file_write_failed(self.report_file_path.as_str(), e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dimension;
    use crate::services::scorer::score_responses;
    use crate::models::Question;

    fn sample_result() -> ScoreResult {
        let qs: Vec<Question> = Dimension::ALL
            .iter()
            .map(|&d| Question::new(format!("{} 题", d), d))
            .collect();
        score_responses(&qs, &[5, 3, 5, 1, 4, 2, 5, 1]).unwrap()
    }

    #[test]
    fn test_all_sixteen_types_have_descriptions() {
        for ei in ["E", "I"] {
            for sn in ["S", "N"] {
                for tf in ["T", "F"] {
                    for jp in ["J", "P"] {
                        let code = format!("{}{}{}{}", ei, sn, tf, jp);
                        assert!(
                            type_description(&code).is_some(),
                            "缺少 {} 的描述",
                            code
                        );
                    }
                }
            }
        }
        assert!(type_description("XXXX").is_none());
    }

    #[test]
    fn test_render_contains_type_and_percentages() {
        let result = sample_result();
        let text = render_result(&result);
        assert!(text.contains("ESTJ"));
        assert!(text.contains("The Executive"));
        assert!(text.contains("63%"));
        assert!(text.contains("37%"));
    }

    #[test]
    fn test_percentage_bar_width_is_constant() {
        for pct in [0, 13, 50, 100] {
            assert_eq!(percentage_bar(pct).chars().count(), BAR_WIDTH);
        }
        assert!(percentage_bar(100).chars().all(|c| c == '█'));
        assert!(percentage_bar(0).chars().all(|c| c == '░'));
    }

    #[test]
    fn test_report_json_shape() {
        let result = sample_result();
        let report = Report {
            author: "测试者",
            generated_at: "2026-01-01 00:00:00".to_string(),
            result: &result,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["author"], "测试者");
        assert_eq!(json["result"]["type_code"], "ESTJ");
        assert_eq!(json["result"]["totals"]["E"], 5);
        assert_eq!(json["result"]["percentages"]["E/I"][0], 63);
    }
}
