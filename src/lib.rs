//! # MBTI Personality Test
//!
//! 一个在终端中进行 MBTI 性格测试的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用三层架构：
//!
//! ### ① 模型层（Models）
//! - `models/` - 不可变的领域类型与题库加载
//! - `Dimension` / `Dichotomy` - 八个维度字母与四个固定维度对
//! - `Question` - 题目记录（题干、维度、反向标记、权重）
//! - `yaml_loader` - 题库 YAML 解析与校验
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `AnswerCollector` - 逐题收集答案，支持撤销与结束确认
//! - `scorer` - 纯函数计分流水线（总分 → 百分比 → 类型代码）
//! - `report` - 结果渲染与 JSON 报告导出
//!
//! ### ③ 编排层（App）
//! - `app` - 串联 加载 → 收集 → 计分 → 渲染 的完整流程
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, ScoreError};
pub use models::{Dichotomy, Dimension, Likert, Question, ScoreResult};
pub use services::collector::{AnswerCollector, LineSource, ScriptedLineSource};
pub use services::scorer::score_responses;
