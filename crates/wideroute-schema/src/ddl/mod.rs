//! Offline schema provider: CQL `CREATE TABLE` statements in, `TableSchema`
//! out. No connection to a live cluster is made or needed.

mod lexer;
mod parser;


use crate::node::TableSchema;
use lexer::{Token, tokenize};
use parser::Parser;
use thiserror::Error as ThisError;
use tracing::{debug, warn};

///
/// DdlError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DdlError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("unexpected '{found}' at offset {offset}, expected {expected}")]
    UnexpectedToken {
        expected: String,
        found: String,
        offset: usize,
    },

    #[error("unterminated quote starting at offset {offset}")]
    UnterminatedQuote { offset: usize },

    #[error("unterminated block comment starting at offset {offset}")]
    UnterminatedComment { offset: usize },

    #[error("table '{table}' declares no primary key")]
    MissingPrimaryKey { table: String },

    #[error("table '{table}' declares its primary key more than once")]
    DuplicatePrimaryKey { table: String },

    #[error("primary key of table '{table}' references undeclared column '{column}'")]
    UnknownKeyColumn { table: String, column: String },

    #[error("input contains no CREATE TABLE statement")]
    NoTables,
}

/// Parse the first `CREATE TABLE` statement in `input`.
///
/// The whole input must lex, but statements after the first table are not
/// parsed, so a later malformed statement does not fail the call.
pub fn parse_create_table(input: &str) -> Result<TableSchema, DdlError> {
    let tokens = tokenize(input)?;
    let statement = table_statements(&tokens)
        .next()
        .ok_or(DdlError::NoTables)?;

    parse_table(statement)
}

///
/// Parse every `;`-separated statement in `input`.
/// Statements other than `CREATE TABLE` are skipped with a warning.
///
pub fn parse_statements(input: &str) -> Result<Vec<TableSchema>, DdlError> {
    let tokens = tokenize(input)?;

    table_statements(&tokens).map(parse_table).collect()
}

// Non-empty `CREATE TABLE` statements, in input order.
fn table_statements(tokens: &[Token]) -> impl Iterator<Item = &[Token]> {
    tokens.split(|t| t.is_symbol(';')).filter(|statement| {
        let Some(first) = statement.first() else {
            return false;
        };

        let is_create_table = first.is_keyword("create")
            && statement.get(1).is_some_and(|t| t.is_keyword("table"));
        if !is_create_table {
            warn!(offset = first.offset, "skipping non CREATE TABLE statement");
        }

        is_create_table
    })
}

fn parse_table(statement: &[Token]) -> Result<TableSchema, DdlError> {
    let table = Parser::new(statement).create_table()?;
    debug!(
        table = %table.qualified_name(),
        partition = table.partition_keys.len(),
        clustering = table.clustering_keys.len(),
        regular = table.regular_columns.len(),
        "parsed table"
    );

    Ok(table)
}
