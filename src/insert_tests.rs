#[cfg(test)]
mod tests {
    use crate::builder::Builder;
    use crate::insert::{InsertBuilder, insert_into};
    use crate::{Flavor, SqlValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_values_basic() {
        let mut ib = InsertBuilder::new();
        ib.insert_into("users")
            .cols(["email", "password"])
            .values(["webmaster@python.org", "very-secret"]);
        let q = ib.build().unwrap();
        assert_eq!(
            q.sql(),
            "INSERT INTO `users` (`email`, `password`) VALUES (?, ?)"
        );
        assert_eq!(
            q.args(),
            &[
                SqlValue::from("webmaster@python.org"),
                SqlValue::from("very-secret")
            ]
        );
    }

    #[test]
    fn insert_sqlite_quotes_with_double_quotes() {
        let mut ib = insert_into("users");
        ib.cols(["email", "password"]).values(["a@b.com", "secret"]);
        let q = ib.build_with_flavor(Flavor::SQLite).unwrap();
        assert_eq!(
            q.sql(),
            "INSERT INTO \"users\" (\"email\", \"password\") VALUES (?, ?)"
        );
    }

    #[test]
    fn insert_multiple_rows() {
        let mut ib = insert_into("users");
        ib.cols(["email", "password"])
            .values(["a@b.com", "1"])
            .values(["c@d.com", "2"]);
        let q = ib.build().unwrap();
        assert_eq!(
            q.sql(),
            "INSERT INTO `users` (`email`, `password`) VALUES (?, ?), (?, ?)"
        );
        assert_eq!(q.args().len(), 4);
    }

    #[test]
    fn insert_values_with_metacharacters_stay_out_of_text() {
        let mut ib = insert_into("users");
        ib.cols(["email", "password"])
            .values(["x'); DROP TABLE users; -- ", "$0"]);
        let q = ib.build().unwrap();
        assert_eq!(
            q.sql(),
            "INSERT INTO `users` (`email`, `password`) VALUES (?, ?)"
        );
        assert_eq!(q.args()[1], SqlValue::from("$0"));
    }
}
