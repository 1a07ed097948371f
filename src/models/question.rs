use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::dimension::{Dichotomy, Dimension};

/// Likert 量表答案值，取值范围 1-5
pub type Likert = u8;

/// Likert 量表最小值
pub const LIKERT_MIN: Likert = 1;
/// Likert 量表最大值
pub const LIKERT_MAX: Likert = 5;

/// 单个题目
///
/// 加载时创建一次，此后不再修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 题干
    pub text: String,
    /// 该题贡献的维度字母
    pub dimension: Dimension,
    /// 是否为反向计分题
    #[serde(default)]
    pub reverse: bool,
    /// 题目权重，必须为正
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

impl Question {
    /// 创建正向计分、权重为 1 的题目
    pub fn new(text: impl Into<String>, dimension: Dimension) -> Self {
        Self {
            text: text.into(),
            dimension,
            reverse: false,
            weight: 1,
        }
    }

    /// 创建指定反向与权重的题目
    pub fn with_options(
        text: impl Into<String>,
        dimension: Dimension,
        reverse: bool,
        weight: u32,
    ) -> Self {
        Self {
            text: text.into(),
            dimension,
            reverse,
            weight,
        }
    }
}

/// 各维度字母的累计总分
pub type Totals = BTreeMap<Dimension, i64>;

/// 各维度对的百分比，键为 "E/I" 形式
pub type Percentages = BTreeMap<Dichotomy, (u32, u32)>;

/// 计分结果
///
/// 完全由题目与答案派生，无独立生命周期
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    /// 八个字母的总分（全部字母始终存在，无贡献的为 0）
    pub totals: Totals,
    /// 每个维度对的百分比，两数之和恒为 100
    pub percentages: Percentages,
    /// 四字母类型代码，按 E/I、S/N、T/F、J/P 顺序
    pub type_code: String,
}
