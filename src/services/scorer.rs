//! 计分服务 - 业务能力层
//!
//! 纯函数流水线：(题目, 答案) → 总分 → 百分比 → 类型代码。
//! 无副作用、无 I/O，所有失败都以 `ScoreError` 形式同步返回。

use crate::error::ScoreError;
use crate::models::{Dichotomy, Dimension, Likert, Percentages, Question, ScoreResult, Totals};

/// 计算单题的有效分值
///
/// 反向题先做 `6 - value` 翻转到与正向题相同的极性，再乘以权重
pub fn effective_value(value: Likert, reverse: bool, weight: u32) -> i64 {
    let v: i64 = if reverse {
        6 - i64::from(value)
    } else {
        i64::from(value)
    };
    v * i64::from(weight)
}

/// 汇总各维度字母的总分
///
/// 八个累加器全部从零开始，没有题目贡献的字母保持为 0 而不是缺失
pub fn aggregate_totals(
    questions: &[Question],
    answers: &[Likert],
) -> Result<Totals, ScoreError> {
    if questions.len() != answers.len() {
        return Err(ScoreError::LengthMismatch {
            questions: questions.len(),
            answers: answers.len(),
        });
    }

    let mut totals: Totals = Dimension::ALL.iter().map(|&d| (d, 0)).collect();
    for (q, &a) in questions.iter().zip(answers.iter()) {
        *totals.entry(q.dimension).or_insert(0) += effective_value(a, q.reverse, q.weight);
    }
    Ok(totals)
}

/// 计算每个维度对的百分比
///
/// 左侧百分比按四舍五入（0.5 进位）取整，右侧取 `100 - 左侧`，
/// 保证两数之和恒为 100。某对两侧总分之和不为正时报错并指明该对。
pub fn compute_percentages(totals: &Totals) -> Result<Percentages, ScoreError> {
    let mut percentages = Percentages::new();
    for pair in Dichotomy::ALL {
        let left = totals.get(&pair.left()).copied().unwrap_or(0);
        let right = totals.get(&pair.right()).copied().unwrap_or(0);
        let denom = left + right;
        if denom <= 0 {
            return Err(ScoreError::EmptyDichotomy { pair });
        }
        // floor((left * 100 / denom) + 0.5)，纯整数运算
        let left_pct = ((left * 200 + denom) / (2 * denom)) as u32;
        let right_pct = 100 - left_pct;
        percentages.insert(pair, (left_pct, right_pct));
    }
    Ok(percentages)
}

/// 派生四字母类型代码
///
/// 每对取总分严格更大的一侧；恰好平局时固定取该对左侧字母
/// （E、S、T、J），这是确定性的既定策略而非随机选择
pub fn derive_type(totals: &Totals) -> String {
    let mut code = String::with_capacity(4);
    for pair in Dichotomy::ALL {
        let left = totals.get(&pair.left()).copied().unwrap_or(0);
        let right = totals.get(&pair.right()).copied().unwrap_or(0);
        let letter = if right > left {
            pair.right()
        } else {
            pair.left()
        };
        code.push(letter.letter());
    }
    code
}

/// 计分入口
///
/// 依次执行 汇总 → 百分比 → 类型派生，任一步失败立即返回，
/// 不产生部分结果
pub fn score_responses(
    questions: &[Question],
    answers: &[Likert],
) -> Result<ScoreResult, ScoreError> {
    let totals = aggregate_totals(questions, answers)?;
    let percentages = compute_percentages(&totals)?;
    let type_code = derive_type(&totals);
    Ok(ScoreResult {
        totals,
        percentages,
        type_code,
    })
}
