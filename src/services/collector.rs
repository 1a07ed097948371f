//! 答案收集服务 - 业务能力层
//!
//! 单线程阻塞式的逐题作答循环，支持撤销上一题和显式结束确认。
//! 当前题目下标恒等于已接受答案的数量，严格顺序作答，不支持跳题。

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::error::InputError;
use crate::models::{Likert, Question, LIKERT_MAX, LIKERT_MIN};

/// 撤销上一题的命令
pub const CMD_UNDO: &str = "z";
/// 结束作答的命令
pub const CMD_FINISH: &str = "done";

/// "读取一行输入"的能力抽象
///
/// 注入不同实现即可在交互模式与脚本化测试之间切换
pub trait LineSource {
    /// 读取一行原始文本
    ///
    /// 输入耗尽时必须返回错误（视为调用方缺陷，不可恢复）
    fn read_line(&mut self) -> Result<String, InputError>;
}

/// 标准输入源（交互模式）
#[derive(Debug, Default)]
pub struct StdinLineSource;

impl LineSource for StdinLineSource {
    fn read_line(&mut self) -> Result<String, InputError> {
        let mut buf = String::new();
        let n = std::io::stdin()
            .read_line(&mut buf)
            .map_err(|e| InputError::ReadFailed { source: e })?;
        if n == 0 {
            return Err(InputError::StreamClosed);
        }
        Ok(buf)
    }
}

/// 脚本输入源（测试模式）
///
/// 按顺序回放预设的输入行，读取次数超出预设数量时报错
#[derive(Debug)]
pub struct ScriptedLineSource {
    lines: Vec<String>,
    cursor: usize,
}

impl ScriptedLineSource {
    /// 从输入行列表创建脚本输入源
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }
}

impl LineSource for ScriptedLineSource {
    fn read_line(&mut self) -> Result<String, InputError> {
        let line = self
            .lines
            .get(self.cursor)
            .cloned()
            .ok_or(InputError::Exhausted {
                reads: self.cursor + 1,
            })?;
        self.cursor += 1;
        Ok(line)
    }
}

/// 答案收集器
///
/// 职责：
/// - 按题目顺序收集每题一个合法的 Likert 答案
/// - 支持 'z' 撤销上一个答案、'done' 在全部作答后结束
/// - 非法输入只提示并重问，不改变状态、不抛错
pub struct AnswerCollector<S: LineSource> {
    source: S,
}

impl<S: LineSource> AnswerCollector<S> {
    /// 创建新的答案收集器
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 打印测试说明
    pub fn prompt_intro(&self) {
        println!("MBTI 性格测试");
        println!("请对每条陈述按 1（非常不同意）到 5（非常同意）作答。");
        println!(
            "命令：1-5 作答，'{}' 撤销上一题，全部作答后输入 '{}' 结束。\n",
            CMD_UNDO, CMD_FINISH
        );
    }

    /// 收集全部答案
    ///
    /// 阻塞直到每道题都有答案并且收到显式的结束命令。
    /// 返回与题目一一对应的答案序列。
    pub fn collect(&mut self, questions: &[Question]) -> Result<Vec<Likert>> {
        let total = questions.len();
        let mut answers: Vec<Likert> = Vec::with_capacity(total);

        loop {
            if answers.len() < total {
                let q = &questions[answers.len()];
                println!("[{}/{}] {}", answers.len() + 1, total, q.text);
            } else {
                println!("所有题目已作答完毕，输入 '{}' 结束作答。", CMD_FINISH);
            }
            print!("> ");
            let _ = std::io::stdout().flush();

            let raw = self.source.read_line()?;
            let input = raw.trim().to_lowercase();

            if input == CMD_UNDO {
                if answers.pop().is_some() {
                    println!("已撤销上一个答案。\n");
                } else {
                    println!("没有可撤销的答案。\n");
                }
                continue;
            }

            if input == CMD_FINISH {
                if answers.len() == total {
                    debug!("收到结束命令，共收集 {} 个答案", answers.len());
                    break;
                }
                println!("必须先回答所有题目才能结束。\n");
                continue;
            }

            if answers.len() == total {
                // 已全部作答，只接受撤销或结束
                println!(
                    "请输入 '{}' 撤销上一题，或 '{}' 结束作答。\n",
                    CMD_UNDO, CMD_FINISH
                );
                continue;
            }

            // 先按带符号整数解析，负数同样走越界提示
            match input.parse::<i64>() {
                Ok(v) if (i64::from(LIKERT_MIN)..=i64::from(LIKERT_MAX)).contains(&v) => {
                    answers.push(v as Likert);
                    println!();
                }
                Ok(_) => {
                    println!("数值必须在 {} 到 {} 之间。\n", LIKERT_MIN, LIKERT_MAX);
                }
                Err(_) => {
                    println!(
                        "请输入 1-5、'{}' 撤销，或 '{}' 结束。\n",
                        CMD_UNDO, CMD_FINISH
                    );
                }
            }
        }

        Ok(answers)
    }
}
