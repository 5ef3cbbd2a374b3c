use crate::{Result, SqlType, StatementKind, Value};

/// A live database connection able to compile SQL text into an executable
/// statement handle. Physical drivers implement this behind their own
/// connection types.
pub trait Connection {
    type Compiled: CompiledStatement;

    /// Compile `sql` for the given statement kind, without executing it.
    fn compile_statement(&mut self, sql: &str, kind: StatementKind) -> Result<Self::Compiled>;
}

/// A backend-compiled statement accepting positional parameter binds.
///
/// # Binding semantics
/// * Positions start at 1 and follow placeholder order in the SQL text.
/// * Nulls are bound *typed*: the driver receives the column's wire type
///   alongside the null, since strict backends reject untyped nulls.
///
/// Handles for non-row-returning statements may ignore `set_max_rows`.
pub trait CompiledStatement {
    /// Cap the number of rows a query may return.
    fn set_max_rows(&mut self, limit: u32) -> Result<()>;

    /// Bind a SQL null typed as `sql_type` at `position`.
    fn bind_null(&mut self, position: usize, sql_type: SqlType) -> Result<()>;

    /// Bind a concrete value at `position`.
    fn bind_value(&mut self, position: usize, value: &Value, sql_type: SqlType) -> Result<()>;
}
