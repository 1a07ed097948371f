use std::fmt;

use crate::models::Dichotomy;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 题库数据错误
    Data(DataError),
    /// 计分错误
    Score(ScoreError),
    /// 输入源错误
    Input(InputError),
    /// 文件操作错误
    File(FileError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Data(e) => write!(f, "题库错误: {}", e),
            AppError::Score(e) => write!(f, "计分错误: {}", e),
            AppError::Input(e) => write!(f, "输入错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Data(e) => Some(e),
            AppError::Score(e) => Some(e),
            AppError::Input(e) => Some(e),
            AppError::File(e) => Some(e),
        }
    }
}

/// 题库数据错误
#[derive(Debug)]
pub enum DataError {
    /// YAML 解析失败
    ParseFailed { source: serde_yaml::Error },
    /// items 列表为空或缺失
    NoItems,
    /// 单个题目字段非法
    InvalidItem { index: usize, reason: String },
    /// 某个维度对没有任何题目
    MissingDichotomy { pair: Dichotomy },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::ParseFailed { source } => {
                write!(f, "无法解析题库 YAML: {}", source)
            }
            DataError::NoItems => {
                write!(f, "题库必须包含非空的 'items' 列表")
            }
            DataError::InvalidItem { index, reason } => {
                write!(f, "题目 {} 非法: {}", index, reason)
            }
            DataError::MissingDichotomy { pair } => {
                write!(f, "题库缺少维度对 {} 两侧的题目", pair.key())
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::ParseFailed { source } => Some(source),
            _ => None,
        }
    }
}

/// 计分错误
///
/// 纯计算阶段的错误，出现即表示调用方传入了非法数据
#[derive(Debug, PartialEq, Eq)]
pub enum ScoreError {
    /// 题目数量与答案数量不一致
    LengthMismatch { questions: usize, answers: usize },
    /// 某个维度对的总分之和为零
    EmptyDichotomy { pair: Dichotomy },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::LengthMismatch { questions, answers } => {
                write!(
                    f,
                    "题目数量 ({}) 与答案数量 ({}) 不一致",
                    questions, answers
                )
            }
            ScoreError::EmptyDichotomy { pair } => {
                write!(f, "没有题目贡献于维度对 {}", pair.key())
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// 输入源错误
#[derive(Debug)]
pub enum InputError {
    /// 输入流已结束（交互模式下标准输入被关闭）
    StreamClosed,
    /// 脚本输入已耗尽（测试时提供的输入少于实际读取次数）
    Exhausted { reads: usize },
    /// 底层读取失败
    ReadFailed { source: std::io::Error },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::StreamClosed => write!(f, "输入流已结束"),
            InputError::Exhausted { reads } => {
                write!(f, "脚本输入在第 {} 次读取时耗尽", reads)
            }
            InputError::ReadFailed { source } => {
                write!(f, "读取输入失败: {}", source)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::ReadFailed { source } => Some(source),
            _ => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: std::io::Error,
    },
    /// JSON 序列化失败
    JsonSerializeFailed { source: serde_json::Error },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ReadFailed { path, source } => {
                write!(f, "无法读取文件 {}: {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "无法写入文件 {}: {}", path, source)
            }
            FileError::JsonSerializeFailed { source } => {
                write!(f, "JSON 序列化失败: {}", source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } | FileError::WriteFailed { source, .. } => {
                Some(source)
            }
            FileError::JsonSerializeFailed { source } => Some(source),
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<ScoreError> for AppError {
    fn from(err: ScoreError) -> Self {
        AppError::Score(err)
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::Data(err)
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError::Input(err)
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Data(DataError::ParseFailed { source: err })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::File(FileError::JsonSerializeFailed { source: err })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建题目字段非法错误
    pub fn invalid_item(index: usize, reason: impl Into<String>) -> Self {
        AppError::Data(DataError::InvalidItem {
            index,
            reason: reason.into(),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
