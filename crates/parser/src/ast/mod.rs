use {
    crate::lexer::{Token, TokenKind},
    std::fmt,
};

/// One column of a CREATE TABLE statement: name plus declared type.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDef {
    pub name: Token,
    pub kind: Token,
}

/// Statement and expression nodes. The tree is owned by the statement
/// root; `Display` produces the canonical debug rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Literal(Token),
    Binop {
        left: Box<Node>,
        op: TokenKind,
        right: Box<Node>,
    },
    FunctionCall {
        name: Token,
        args: Vec<Node>,
    },
    Select {
        columns: Vec<Node>,
        from: Token,
        filter: Option<Box<Node>>,
    },
    CreateTable {
        table: Token,
        columns: Vec<ColumnDef>,
    },
    Insert {
        table: Token,
        values: Vec<Node>,
    },
}

fn write_joined(f: &mut fmt::Formatter, items: &[Node]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", item)?;
    }

    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Literal(token) => f.write_str(&token.text),
            Self::Binop { left, op, right } => write!(f, "{} {} {}", left, op, right),
            Self::FunctionCall { name, args } => {
                write!(f, "{}(", name.text)?;
                write_joined(f, args)?;
                f.write_str(")")
            }
            Self::Select {
                columns,
                from,
                filter,
            } => {
                writeln!(f, "SELECT")?;
                for (i, column) in columns.iter().enumerate() {
                    let separator = if i + 1 < columns.len() { "," } else { "" };
                    writeln!(f, "  {}{}", column, separator)?;
                }
                writeln!(f, "FROM")?;
                writeln!(f, "  {}", from.text)?;
                if let Some(filter) = filter {
                    writeln!(f, "WHERE")?;
                    writeln!(f, "  {}", filter)?;
                }
                Ok(())
            }
            Self::CreateTable { table, columns } => {
                write!(f, "CREATE TABLE {}(", table.text)?;
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{} {}", column.name.text, column.kind.text)?;
                }
                writeln!(f, ")")
            }
            Self::Insert { table, values } => {
                write!(f, "INSERT INTO {} VALUES(", table.text)?;
                write_joined(f, values)?;
                writeln!(f, ")")
            }
        }
    }
}
