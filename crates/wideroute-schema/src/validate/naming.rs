use crate::{MAX_COLUMN_NAME_LEN, MAX_TABLE_NAME_LEN, error::SchemaError, prelude::*};

/// Validate the table, keyspace, and every column identifier.
pub fn validate_table_naming(table: &TableSchema, errs: &mut ErrorTree) {
    if let Err(reason) = validate_ident(&table.name, MAX_TABLE_NAME_LEN) {
        errs.add(SchemaError::InvalidTableName {
            table: table.name.clone(),
            reason,
        });
    }

    if let Some(keyspace) = &table.keyspace
        && let Err(reason) = validate_ident(keyspace, MAX_TABLE_NAME_LEN)
    {
        errs.add(SchemaError::InvalidTableName {
            table: table.qualified_name(),
            reason: format!("keyspace {reason}"),
        });
    }

    for (_, column) in table.columns() {
        if let Err(reason) = validate_ident(&column.name, MAX_COLUMN_NAME_LEN) {
            errs.add(SchemaError::InvalidColumnName {
                table: table.qualified_name(),
                column: column.name.clone(),
                reason,
            });
        }
    }
}

///
/// Ensure an identifier can be carried into a generated method name and a
/// route segment: ASCII letters, digits and underscores, starting with a
/// letter, within `max_len`.
///
pub fn validate_ident(ident: &str, max_len: usize) -> Result<(), String> {
    let Some(first) = ident.chars().next() else {
        return Err("ident is empty".to_string());
    };

    if ident.len() > max_len {
        return Err(format!("'{ident}' exceeds max length {max_len}"));
    }
    if !first.is_ascii_alphabetic() {
        return Err(format!("'{ident}' must start with an ASCII letter"));
    }
    if let Some(bad) = ident
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(format!("'{ident}' contains invalid character '{bad}'"));
    }

    Ok(())
}
