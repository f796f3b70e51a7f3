use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Structural problems that make a table schema unusable for enumeration.
/// All of these are fatal for the table they are raised against.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("table '{table}' declares no partition key columns")]
    EmptyPartitionKey { table: String },

    #[error("column '{column}' appears more than once in table '{table}'")]
    DuplicateColumnName { table: String, column: String },

    #[error("column '{column}' in table '{table}' has an invalid name: {reason}")]
    InvalidColumnName {
        table: String,
        column: String,
        reason: String,
    },

    #[error("table name '{table}' is invalid: {reason}")]
    InvalidTableName { table: String, reason: String },
}

///
/// ErrorTree
///
/// Collects every validation failure for one schema so the caller sees the
/// full list instead of the first problem only. Errors keep discovery order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, ThisError)]
#[error("{}", join_messages(.errors))]
pub struct ErrorTree {
    errors: Vec<SchemaError>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, err: impl Into<SchemaError>) {
        self.errors.push(err.into());
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// The first recorded error, used when a single classification is needed.
    #[must_use]
    pub fn first(&self) -> Option<&SchemaError> {
        self.errors.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn join_messages(errors: &[SchemaError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<SchemaError> for ErrorTree {
    fn from(err: SchemaError) -> Self {
        Self { errors: vec![err] }
    }
}
