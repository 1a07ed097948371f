use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::{AppError, AppResult, DataError};
use crate::models::dimension::Dichotomy;
use crate::models::question::Question;
use crate::utils::logging::truncate_text;

/// 题库文件的顶层结构
#[derive(Debug, Deserialize)]
struct QuestionBank {
    #[serde(default)]
    items: Vec<Question>,
}

/// 从 YAML 文本解析并校验题目列表
///
/// 校验规则：
/// - `items` 列表非空
/// - 题干非空
/// - 权重为正整数
/// - 四个维度对中每一对至少有一道题目贡献
///
/// 维度字母的合法性由 `Dimension` 的反序列化保证
pub fn parse_questions(yaml: &str) -> AppResult<Vec<Question>> {
    let bank: QuestionBank = serde_yaml::from_str(yaml)?;

    if bank.items.is_empty() {
        return Err(AppError::Data(DataError::NoItems));
    }

    for (idx, q) in bank.items.iter().enumerate() {
        if q.text.trim().is_empty() {
            return Err(AppError::invalid_item(idx, "'text' 必须为非空字符串"));
        }
        if q.weight == 0 {
            return Err(AppError::invalid_item(idx, "'weight' 必须为正整数"));
        }
        tracing::debug!(
            "题目 {}: [{}{}] 权重 {} | {}",
            idx,
            q.dimension,
            if q.reverse { ", 反向" } else { "" },
            q.weight,
            truncate_text(&q.text, 40)
        );
    }

    // 基本健全性检查：每个维度对至少有一侧存在题目
    for pair in Dichotomy::ALL {
        let covered = bank
            .items
            .iter()
            .any(|q| q.dimension.dichotomy() == pair);
        if !covered {
            return Err(AppError::Data(DataError::MissingDichotomy { pair }));
        }
    }

    Ok(bank.items)
}

/// 从 YAML 文件加载题目列表
pub fn load_questions_from_yaml(path: &Path) -> Result<Vec<Question>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let questions = parse_questions(&content)
        .with_context(|| format!("题库文件校验失败: {}", path.display()))?;

    tracing::info!("✓ 成功加载 {} 道题目", questions.len());

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::dimension::Dimension;

    #[test]
    fn test_parse_valid_minimal_bank() {
        // 每个维度对覆盖一侧即可
        let yaml = r#"
items:
  - text: "我喜欢大型社交聚会"
    dimension: E
  - text: "我关注具体的事实"
    dimension: S
  - text: "我重视客观逻辑"
    dimension: T
  - text: "我喜欢结构和计划"
    dimension: J
"#;
        let qs = parse_questions(yaml).unwrap();
        assert_eq!(qs.len(), 4);
        assert_eq!(qs[0].dimension, Dimension::E);
        assert!(!qs[0].reverse);
        assert_eq!(qs[0].weight, 1);
    }

    #[test]
    fn test_parse_reverse_and_weight() {
        let yaml = r#"
items:
  - text: "反向加权题"
    dimension: I
    reverse: true
    weight: 3
  - text: "S 题"
    dimension: S
  - text: "T 题"
    dimension: T
  - text: "J 题"
    dimension: J
"#;
        let qs = parse_questions(yaml).unwrap();
        assert!(qs[0].reverse);
        assert_eq!(qs[0].weight, 3);
    }

    #[test]
    fn test_empty_items_rejected() {
        let err = parse_questions("items: []\n").unwrap_err();
        assert!(matches!(err, AppError::Data(DataError::NoItems)));
    }

    #[test]
    fn test_invalid_dimension_rejected() {
        let yaml = r#"
items:
  - text: "非法维度"
    dimension: X
"#;
        let err = parse_questions(yaml).unwrap_err();
        assert!(matches!(err, AppError::Data(DataError::ParseFailed { .. })));
    }

    #[test]
    fn test_non_mapping_item_rejected() {
        // items 里的元素必须是映射
        let err = parse_questions("items:\n  - 5\n").unwrap_err();
        assert!(matches!(err, AppError::Data(DataError::ParseFailed { .. })));
    }

    #[test]
    fn test_empty_text_rejected() {
        let yaml = r#"
items:
  - text: "   "
    dimension: E
"#;
        let err = parse_questions(yaml).unwrap_err();
        match err {
            AppError::Data(DataError::InvalidItem { index, reason }) => {
                assert_eq!(index, 0);
                assert!(reason.contains("text"));
            }
            other => panic!("错误类型不符: {}", other),
        }
    }

    #[test]
    fn test_zero_weight_rejected() {
        let yaml = r#"
items:
  - text: "权重为零"
    dimension: E
    weight: 0
"#;
        let err = parse_questions(yaml).unwrap_err();
        assert!(matches!(
            err,
            AppError::Data(DataError::InvalidItem { index: 0, .. })
        ));
    }

    #[test]
    fn test_missing_dichotomy_named() {
        // 完全缺少 J/P
        let yaml = r#"
items:
  - text: "E 题"
    dimension: E
  - text: "S 题"
    dimension: S
  - text: "T 题"
    dimension: T
"#;
        let err = parse_questions(yaml).unwrap_err();
        assert!(err.to_string().contains("J/P"));
        assert!(matches!(
            err,
            AppError::Data(DataError::MissingDichotomy {
                pair: Dichotomy::JP
            })
        ));
    }
}
