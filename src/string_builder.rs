//! SQL 文本拼接缓冲。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    /// 写入 `s`；如果不是首次写入，会先写入一个空格。
    pub(crate) fn write_leading(&mut self, s: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(s);
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub(crate) fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// 用 `sep` 连接非空项。
    pub(crate) fn write_strings(&mut self, items: &[String], sep: &str) {
        let mut first_added = false;
        for s in items {
            if s.is_empty() {
                continue;
            }
            if first_added {
                self.buf.push_str(sep);
            }
            self.buf.push_str(s);
            first_added = true;
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::StringBuilder;

    #[test]
    fn write_leading_adds_single_space() {
        let mut sb = StringBuilder::new();
        sb.write_leading("SELECT");
        sb.write_leading("1");
        assert_eq!(sb.into_string(), "SELECT 1");
    }

    #[test]
    fn write_strings_skips_empty() {
        let mut sb = StringBuilder::new();
        sb.write_strings(&["a".into(), String::new(), "b".into()], ", ");
        assert_eq!(sb.into_string(), "a, b");
    }
}
