use super::{
    DdlError,
    lexer::{Token, TokenKind},
};
use crate::{node::Column, node::TableSchema, types::ValueType};

///
/// PrimaryKeyDecl
///

#[derive(Debug, Default)]
struct PrimaryKeyDecl {
    partition: Vec<String>,
    clustering: Vec<String>,
}

///
/// Parser
///
/// Recursive-descent parser over the tokens of one statement.
///

pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    // CREATE TABLE [IF NOT EXISTS] [ks.]name ( defs ) [WITH ...]
    pub(crate) fn create_table(&mut self) -> Result<TableSchema, DdlError> {
        self.expect_keyword("create")?;
        self.expect_keyword("table")?;

        if self.eat_keyword("if") {
            self.expect_keyword("not")?;
            self.expect_keyword("exists")?;
        }

        let first = self.ident("table name")?;
        let (keyspace, name) = if self.eat_symbol('.') {
            (Some(first), self.ident("table name")?)
        } else {
            (None, first)
        };
        let qualified = keyspace
            .as_ref()
            .map_or_else(|| name.clone(), |ks| format!("{ks}.{name}"));

        self.expect_symbol('(')?;

        let mut columns: Vec<Column> = Vec::new();
        let mut primary_key: Option<PrimaryKeyDecl> = None;

        loop {
            if self.peek().is_some_and(|t| t.is_keyword("primary")) {
                self.pos += 1;
                self.expect_keyword("key")?;
                let decl = self.primary_key_clause()?;
                set_primary_key(&mut primary_key, decl, &qualified)?;
            } else {
                let column_name = self.ident("column name")?;
                let type_expr = self.type_expr()?;

                // STATIC columns are regular columns shared per partition.
                self.eat_keyword("static");

                if self.eat_keyword("primary") {
                    self.expect_keyword("key")?;
                    let decl = PrimaryKeyDecl {
                        partition: vec![column_name.clone()],
                        clustering: Vec::new(),
                    };
                    set_primary_key(&mut primary_key, decl, &qualified)?;
                }

                columns.push(Column::new(column_name, ValueType::from_cql(&type_expr)));
            }

            if self.eat_symbol(',') {
                continue;
            }
            self.expect_symbol(')')?;
            break;
        }

        // table options (WITH ...) carry nothing the key model needs

        let primary_key = primary_key.ok_or_else(|| DdlError::MissingPrimaryKey {
            table: qualified.clone(),
        })?;

        build_table(keyspace, name, &qualified, columns, primary_key)
    }

    // ( (p1, p2), c1, c2 ) | ( p1, c1 )
    fn primary_key_clause(&mut self) -> Result<PrimaryKeyDecl, DdlError> {
        self.expect_symbol('(')?;

        let partition = if self.eat_symbol('(') {
            let cols = self.ident_list()?;
            self.expect_symbol(')')?;
            cols
        } else {
            vec![self.ident("partition key column")?]
        };

        let mut clustering = Vec::new();
        while self.eat_symbol(',') {
            clustering.push(self.ident("clustering key column")?);
        }
        self.expect_symbol(')')?;

        Ok(PrimaryKeyDecl {
            partition,
            clustering,
        })
    }

    fn ident_list(&mut self) -> Result<Vec<String>, DdlError> {
        let mut idents = vec![self.ident("column name")?];
        while self.eat_symbol(',') {
            idents.push(self.ident("column name")?);
        }

        Ok(idents)
    }

    // A type name with optional, possibly nested, generic arguments.
    fn type_expr(&mut self) -> Result<String, DdlError> {
        let mut text = self.ident("column type")?;

        if self.eat_symbol('<') {
            let mut args = vec![self.type_expr()?];
            while self.eat_symbol(',') {
                args.push(self.type_expr()?);
            }
            self.expect_symbol('>')?;
            text = format!("{text}<{}>", args.join(", "));
        }

        Ok(text)
    }

    // Unquoted identifiers fold to lower case; quoted ones keep their case.
    fn ident(&mut self, expected: &str) -> Result<String, DdlError> {
        let token = self.next(expected)?;

        match &token.kind {
            TokenKind::Word(w) => Ok(w.to_ascii_lowercase()),
            TokenKind::Quoted(q) => Ok(q.clone()),
            _ => Err(unexpected(token, expected)),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self, expected: &str) -> Result<&'a Token, DdlError> {
        let token = self.peek().ok_or_else(|| DdlError::UnexpectedEof {
            expected: expected.to_string(),
        })?;
        self.pos += 1;

        Ok(token)
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let hit = self.peek().is_some_and(|t| t.is_keyword(keyword));
        if hit {
            self.pos += 1;
        }

        hit
    }

    fn eat_symbol(&mut self, symbol: char) -> bool {
        let hit = self.peek().is_some_and(|t| t.is_symbol(symbol));
        if hit {
            self.pos += 1;
        }

        hit
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), DdlError> {
        let expected = keyword.to_ascii_uppercase();
        let token = self.next(&expected)?;
        if token.is_keyword(keyword) {
            Ok(())
        } else {
            Err(unexpected(token, &expected))
        }
    }

    fn expect_symbol(&mut self, symbol: char) -> Result<(), DdlError> {
        let expected = format!("'{symbol}'");
        let token = self.next(&expected)?;
        if token.is_symbol(symbol) {
            Ok(())
        } else {
            Err(unexpected(token, &expected))
        }
    }
}

fn unexpected(token: &Token, expected: &str) -> DdlError {
    DdlError::UnexpectedToken {
        expected: expected.to_string(),
        found: token.describe(),
        offset: token.offset,
    }
}

fn set_primary_key(
    slot: &mut Option<PrimaryKeyDecl>,
    decl: PrimaryKeyDecl,
    table: &str,
) -> Result<(), DdlError> {
    if slot.is_some() {
        return Err(DdlError::DuplicatePrimaryKey {
            table: table.to_string(),
        });
    }
    *slot = Some(decl);

    Ok(())
}

// Split declared columns into the three key groups.
fn build_table(
    keyspace: Option<String>,
    name: String,
    qualified: &str,
    columns: Vec<Column>,
    primary_key: PrimaryKeyDecl,
) -> Result<TableSchema, DdlError> {
    let lookup = |key: &str| {
        columns
            .iter()
            .find(|c| c.name == key)
            .cloned()
            .ok_or_else(|| DdlError::UnknownKeyColumn {
                table: qualified.to_string(),
                column: key.to_string(),
            })
    };

    let partition_keys = primary_key
        .partition
        .iter()
        .map(|key| lookup(key.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    let clustering_keys = primary_key
        .clustering
        .iter()
        .map(|key| lookup(key.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let is_key = |column: &Column| {
        primary_key.partition.contains(&column.name)
            || primary_key.clustering.contains(&column.name)
    };
    let regular_columns = columns.iter().filter(|c| !is_key(*c)).cloned().collect();

    Ok(TableSchema {
        keyspace,
        name,
        partition_keys,
        clustering_keys,
        regular_columns,
    })
}
