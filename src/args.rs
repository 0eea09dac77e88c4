//! Args：收集绑定参数，并把含 `$` 引用的 format 编译成带占位符的 SQL。
//!
//! 参数值永远不会写进 SQL 文本，只有占位符会。

use crate::flavor::Flavor;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("builder invalid arg reference ${0}")]
    InvalidArgRef(usize),
}

/// Args 存储 SQL 相关参数。
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// 默认 flavor，用于 `compile`。
    pub flavor: Flavor,

    pub(crate) arg_values: Vec<SqlValue>,
}

impl Args {
    /// Add：追加一个参数并返回内部引用（`$0/$1/...`）。
    pub fn add(&mut self, arg: impl Into<SqlValue>) -> String {
        let idx = self.arg_values.len();
        self.arg_values.push(arg.into());
        format!("${idx}")
    }

    /// CompileWithFlavor：编译 format，并用 `flavor` 输出最终占位符。
    ///
    /// - `$$` 输出一个 `$`；
    /// - `$n` 引用第 n 个参数。
    pub fn compile_with_flavor(
        &self,
        format: &str,
        flavor: Flavor,
    ) -> Result<(String, Vec<SqlValue>), CompileError> {
        let mut ctx = CompileContext {
            buf: StringBuilder::new(),
            flavor,
            values: Vec::new(),
        };
        let mut rest = format;
        while let Some(pos) = rest.find('$') {
            if pos > 0 {
                ctx.buf.write_str(&rest[..pos]);
            }
            rest = &rest[pos + 1..];

            let Some(&b0) = rest.as_bytes().first() else {
                ctx.buf.write_char('$');
                break;
            };
            match b0 {
                b'$' => {
                    ctx.buf.write_char('$');
                    rest = &rest[1..];
                }
                b'0'..=b'9' => {
                    let end = rest.bytes().take_while(u8::is_ascii_digit).count();
                    let pointer: usize = rest[..end]
                        .parse()
                        .map_err(|_| CompileError::InvalidArgRef(usize::MAX))?;
                    self.compile_successive(&mut ctx, pointer)?;
                    rest = &rest[end..];
                }
                _ => ctx.buf.write_char('$'),
            }
        }

        if !rest.is_empty() {
            ctx.buf.write_str(rest);
        }

        Ok((ctx.buf.into_string(), ctx.values))
    }

    fn compile_successive(
        &self,
        ctx: &mut CompileContext,
        pointer: usize,
    ) -> Result<(), CompileError> {
        let arg = self
            .arg_values
            .get(pointer)
            .ok_or(CompileError::InvalidArgRef(pointer))?;
        ctx.write_placeholder_and_push(arg.clone());
        Ok(())
    }
}

#[derive(Debug)]
struct CompileContext {
    buf: StringBuilder,
    flavor: Flavor,
    values: Vec<SqlValue>,
}

impl CompileContext {
    fn write_placeholder_and_push(&mut self, arg: SqlValue) {
        self.buf.write_char(self.flavor.placeholder());
        self.values.push(arg);
    }
}
