//! 固定的演示序列：一次写入、一次安全读取、若干次注入读取，最后一条故意触发语法错误。
//!
//! 每一步先输出 `-- <label>`，拼接路径再输出实际提交的 SQL，读取路径最后输出 JSON 结果
//! （无结果为 `null`）。遇到第一个错误即停止。

use std::io::Write;

use crate::error::DemoError;
use crate::flavor::Flavor;
use crate::runner::QueryRunner;
use crate::users::UserRecord;

pub const DEMO_EMAIL: &str = "webmaster@python.org";
pub const DEMO_PASSWORD: &str = "very-secret";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Insert {
        email: String,
        password: String,
    },
    ReadSafe {
        email: String,
    },
    ReadPartiallyBound {
        email: String,
        password_fragment: String,
    },
    ReadUnsafe {
        email_fragment: String,
        password_fragment: String,
    },
    ReadUnsafeMultiline {
        email_fragment: String,
        password_fragment: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub step: Step,
}

impl Scenario {
    pub fn new(label: impl Into<String>, step: Step) -> Self {
        Self {
            label: label.into(),
            step,
        }
    }
}

/// 默认序列。注入片段使用该 flavor 自己的行注释标记。
pub fn scenarios(flavor: Flavor) -> Vec<Scenario> {
    let comment = flavor.line_comment();
    vec![
        Scenario::new(
            "insert (bound parameters)",
            Step::Insert {
                email: DEMO_EMAIL.into(),
                password: DEMO_PASSWORD.into(),
            },
        ),
        Scenario::new(
            "read by email (bound parameter)",
            Step::ReadSafe {
                email: DEMO_EMAIL.into(),
            },
        ),
        Scenario::new(
            "email bound, password spliced",
            Step::ReadPartiallyBound {
                email: DEMO_EMAIL.into(),
                password_fragment: format!("0' OR 1=1 {comment} "),
            },
        ),
        Scenario::new(
            format!("email spliced, short `{comment}` comment"),
            Step::ReadUnsafeMultiline {
                email_fragment: format!("{DEMO_EMAIL}' OR 1=1 {comment}"),
                password_fragment: "0".into(),
            },
        ),
        Scenario::new(
            "email spliced, `-- ` comment with trailing space",
            Step::ReadUnsafeMultiline {
                email_fragment: format!("{DEMO_EMAIL}' OR 1=1 -- "),
                password_fragment: "0".into(),
            },
        ),
        Scenario::new(
            "error case: unbalanced quote",
            Step::ReadUnsafeMultiline {
                email_fragment: format!("{DEMO_EMAIL}' OR 1=1  "),
                password_fragment: "0".into(),
            },
        ),
    ]
}

/// 依次执行 `scenarios`，输出写入 `out`。
pub async fn run<W: Write>(
    runner: &mut QueryRunner,
    scenarios: &[Scenario],
    out: &mut W,
) -> Result<(), DemoError> {
    for (idx, scenario) in scenarios.iter().enumerate() {
        tracing::debug!(step = idx + 1, label = %scenario.label, "Running scenario");
        writeln!(out, "-- {}", scenario.label)?;
        run_step(runner, &scenario.step, out).await?;
    }
    out.flush()?;
    Ok(())
}

async fn run_step<W: Write>(
    runner: &mut QueryRunner,
    step: &Step,
    out: &mut W,
) -> Result<(), DemoError> {
    let record = match step {
        Step::Insert { email, password } => {
            runner.insert(email, password).await?;
            return Ok(());
        }
        Step::ReadSafe { email } => runner.read_safe(email).await?,
        Step::ReadPartiallyBound {
            email,
            password_fragment,
        } => {
            runner
                .read_partially_bound(email, password_fragment, out)
                .await?
        }
        Step::ReadUnsafe {
            email_fragment,
            password_fragment,
        } => {
            runner
                .read_unsafe(email_fragment, password_fragment, out)
                .await?
        }
        Step::ReadUnsafeMultiline {
            email_fragment,
            password_fragment,
        } => {
            runner
                .read_unsafe_multiline(email_fragment, password_fragment, out)
                .await?
        }
    };
    write_record(out, record.as_ref())
}

fn write_record<W: Write>(out: &mut W, record: Option<&UserRecord>) -> Result<(), DemoError> {
    let json = serde_json::to_string(&record)
        .map_err(|e| DemoError::Output(std::io::Error::other(e)))?;
    writeln!(out, "{json}")?;
    Ok(())
}
