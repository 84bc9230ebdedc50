/// DDL owned by a record type
pub trait TableSchema {
    /// The table name in the database
    fn table_name() -> &'static str;

    /// Generate CREATE TABLE SQL statement
    fn create_table_sql() -> String;

    /// Generate DROP TABLE SQL statement
    fn drop_table_sql() -> String {
        format!("DROP TABLE IF EXISTS {}", Self::table_name())
    }
}
