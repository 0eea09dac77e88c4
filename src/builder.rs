//! Builder：insert/select/create table 共用的构建接口。

use crate::args::CompileError;
use crate::flavor::Flavor;
use crate::query::ParameterizedQuery;

pub trait Builder {
    fn build(&self) -> Result<ParameterizedQuery, CompileError> {
        self.build_with_flavor(self.flavor())
    }

    fn build_with_flavor(&self, flavor: Flavor) -> Result<ParameterizedQuery, CompileError>;

    fn flavor(&self) -> Flavor;
}

/// 把 `$` 转义成 `$$`，避免标识符被 `Args::compile` 当成参数引用。
pub fn escape(ident: &str) -> String {
    ident.replace('$', "$$")
}

/// 按 flavor 给标识符加引号并转义。
pub(crate) fn quote_ident(flavor: Flavor, ident: &str) -> String {
    escape(&flavor.quote(ident))
}
