#[cfg(test)]
mod tests {
    use crate::args::{Args, CompileError};
    use crate::flavor::Flavor;
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn args_add_returns_dollar_refs() {
        let mut args = Args::default();
        assert_eq!(args.add("a"), "$0");
        assert_eq!(args.add(1_i64), "$1");

        let (sql, values) = args.compile_with_flavor("$1 $0", Flavor::MySQL).unwrap();
        assert_eq!(sql, "? ?");
        assert_eq!(values, vec![SqlValue::I64(1), SqlValue::from("a")]);
    }

    #[test]
    fn args_compile_cases() {
        let mut args = Args::default();
        args.add("webmaster@python.org");
        args.add("very-secret");

        let cases: Vec<(&str, &str, Vec<SqlValue>)> = vec![
            (
                "a=$0 AND b=$1",
                "a=? AND b=?",
                vec!["webmaster@python.org".into(), "very-secret".into()],
            ),
            (
                "a=$1 OR a=$0",
                "a=? OR a=?",
                vec!["very-secret".into(), "webmaster@python.org".into()],
            ),
            ("cost $$5", "cost $5", vec![]),
            ("trailing $", "trailing $", vec![]),
            ("$x", "$x", vec![]),
        ];

        for (format, expected_sql, expected_values) in cases {
            let (sql, values) = args.compile_with_flavor(format, Flavor::SQLite).unwrap();
            assert_eq!(sql, expected_sql, "format: {format}");
            assert_eq!(values, expected_values, "format: {format}");
        }
    }

    #[test]
    fn args_compile_never_writes_values_into_text() {
        let mut args = Args::default();
        let ph = args.add("x' OR 1=1 -- ");
        let (sql, values) = args
            .compile_with_flavor(&format!("`email`={ph}"), Flavor::MySQL)
            .unwrap();
        assert_eq!(sql, "`email`=?");
        assert_eq!(values, vec![SqlValue::from("x' OR 1=1 -- ")]);
    }

    #[test]
    fn args_compile_invalid_ref() {
        let mut args = Args::default();
        args.add(1_i64);
        assert_eq!(
            args.compile_with_flavor("$0 $3", Flavor::MySQL),
            Err(CompileError::InvalidArgRef(3))
        );
    }
}
