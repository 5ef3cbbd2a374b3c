use crate::{
    BoundArg, CompiledStatement, ConfigError, Connection, DatabaseError, Error, FieldConfig,
    Result, SqlType, TableConfig, truncate_long,
};
use std::sync::Arc;

/// The kind of SQL statement a compiled handle will execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    /// Only row-returning statements honor a row limit.
    pub fn returns_rows(&self) -> bool {
        matches!(self, StatementKind::Select)
    }
}

/// A fully described statement: SQL text, the field config of every
/// placeholder position, the placeholder value holders, and row-limit /
/// kind metadata. Built once, immutable, compiled against a connection
/// with [`compile`](MappedStatement::compile).
///
/// Concurrent executions need independent instances (independent
/// [`BoundArg`] lists); the field config lists they share can be reused
/// freely.
#[derive(Debug)]
pub struct MappedStatement {
    table: Arc<TableConfig>,
    statement: String,
    arg_fields: Box<[Arc<FieldConfig>]>,
    arg_sql_types: Box<[SqlType]>,
    result_fields: Box<[Arc<FieldConfig>]>,
    args: Box<[BoundArg]>,
    limit: Option<u32>,
    kind: StatementKind,
}

impl MappedStatement {
    /// Mismatched argument plumbing (a bound-argument list whose length
    /// differs from the argument field list) and unresolvable argument
    /// types fail here, before any connection is touched.
    pub fn new(
        table: Arc<TableConfig>,
        statement: impl Into<String>,
        arg_fields: Vec<Arc<FieldConfig>>,
        result_fields: Vec<Arc<FieldConfig>>,
        args: Vec<BoundArg>,
        limit: Option<u32>,
        kind: StatementKind,
    ) -> Result<Self> {
        if arg_fields.len() != args.len() {
            let error = ConfigError::ArgumentCountMismatch {
                fields: arg_fields.len(),
                args: args.len(),
            };
            log::error!("{}", error);
            return Err(error.into());
        }
        let arg_sql_types = arg_fields
            .iter()
            .map(|field| field.sql_type())
            .collect::<Result<Box<[_]>>>()?;
        Ok(Self {
            table,
            statement: statement.into(),
            arg_fields: arg_fields.into(),
            arg_sql_types,
            result_fields: result_fields.into(),
            args: args.into(),
            limit,
            kind,
        })
    }

    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn arg_fields(&self) -> &[Arc<FieldConfig>] {
        &self.arg_fields
    }

    pub fn result_fields(&self) -> &[Arc<FieldConfig>] {
        &self.result_fields
    }

    pub fn args(&self) -> &[BoundArg] {
        &self.args
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Compile the statement on `connection` and bind every placeholder in
    /// list order (positions start at 1): an absent argument value binds a
    /// typed null, a present one binds the value, both under the position's
    /// resolved wire type. Applies the row limit for row-returning kinds.
    ///
    /// Returns the bound handle without executing it. Any connection-level
    /// failure aborts the whole call and surfaces with the statement text
    /// attached; there are no retries.
    pub fn compile<C: Connection>(&self, connection: &mut C) -> Result<C::Compiled> {
        let mut compiled = connection
            .compile_statement(&self.statement, self.kind)
            .map_err(|source| self.database_error(source))?;
        if let Some(limit) = self.limit
            && self.kind.returns_rows()
        {
            compiled
                .set_max_rows(limit)
                .map_err(|source| self.database_error(source))?;
        }
        // The materialized argument array exists only for the trace log.
        let mut arg_values = (log::log_enabled!(log::Level::Trace) && !self.args.is_empty())
            .then(|| Vec::with_capacity(self.args.len()));
        for (i, arg) in self.args.iter().enumerate() {
            let sql_type = self.arg_sql_types[i];
            // Placeholder positions start at 1.
            match arg.value() {
                None => compiled.bind_null(i + 1, sql_type),
                Some(value) => compiled.bind_value(i + 1, value, sql_type),
            }
            .map_err(|source| self.database_error(source))?;
            if let Some(values) = &mut arg_values {
                values.push(arg.value().cloned());
            }
        }
        log::debug!(
            "prepared statement `{}` with {} args",
            truncate_long!(self.statement),
            self.args.len()
        );
        if let Some(values) = arg_values {
            log::trace!("prepared statement arguments: {:?}", values);
        }
        Ok(compiled)
    }

    fn database_error(&self, source: Error) -> Error {
        let error: Error = DatabaseError::new(self.statement.as_str(), source).into();
        log::error!("{:#}", error);
        error
    }
}
