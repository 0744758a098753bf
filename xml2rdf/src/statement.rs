use std::fmt;

use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Iri,
    BlankNode,
    Literal,
}

/// One subject–predicate–object statement, as handed to a [`StatementSink`](crate::StatementSink).
///
/// All positions are plain strings: IRIs, blank node references of the form `_:id`,
/// or literal text. `datatype` and `language` are empty when they do not apply.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Statement {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    pub datatype: String,
    pub language: String,
    pub object_kind: ObjectKind,
}

impl Statement {
    pub fn is_literal(&self) -> bool {
        self.object_kind == ObjectKind::Literal
    }
}

pub(crate) fn blank_node_label(reference: &str) -> Option<&str> {
    reference.strip_prefix("_:")
}

/// Picks the object kind of a resource reference (anything that is not literal text).
pub(crate) fn resource_kind(reference: &str) -> ObjectKind {
    if blank_node_label(reference).is_some() {
        ObjectKind::BlankNode
    } else {
        ObjectKind::Iri
    }
}

fn write_resource(f: &mut fmt::Formatter<'_>, reference: &str) -> fmt::Result {
    match blank_node_label(reference) {
        Some(_) => f.write_str(reference),
        None => write!(f, "<{reference}>"),
    }
}

fn write_escaped_literal(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

// N-Triples line, without the trailing newline.
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_resource(f, &self.subject)?;
        write!(f, " <{}> ", self.predicate)?;
        match self.object_kind {
            ObjectKind::Iri | ObjectKind::BlankNode => write_resource(f, &self.object)?,
            ObjectKind::Literal => {
                write_escaped_literal(f, &self.object)?;
                if !self.datatype.is_empty() {
                    write!(f, "^^<{}>", self.datatype)?;
                } else if !self.language.is_empty() {
                    write!(f, "@{}", self.language)?;
                }
            }
        }
        f.write_str(" .")
    }
}

fn named_node(iri: &str) -> Result<oxrdf::NamedNode, Error> {
    oxrdf::NamedNode::new(iri).map_err(|source| Error::IriParseError {
        source,
        iri: iri.to_string(),
    })
}

fn blank_node(reference: &str, label: &str) -> Result<oxrdf::BlankNode, Error> {
    oxrdf::BlankNode::new(label).map_err(|err| Error::InvalidTerm {
        term: reference.to_string(),
        reason: err.to_string(),
    })
}

fn subject(reference: &str) -> Result<oxrdf::Subject, Error> {
    Ok(match blank_node_label(reference) {
        Some(label) => blank_node(reference, label)?.into(),
        None => named_node(reference)?.into(),
    })
}

impl TryFrom<&Statement> for oxrdf::Triple {
    type Error = Error;

    fn try_from(statement: &Statement) -> Result<Self, Self::Error> {
        let object: oxrdf::Term = match statement.object_kind {
            ObjectKind::Iri => named_node(&statement.object)?.into(),
            ObjectKind::BlankNode => {
                let label = blank_node_label(&statement.object).unwrap_or(&statement.object);
                blank_node(&statement.object, label)?.into()
            }
            ObjectKind::Literal if !statement.datatype.is_empty() => {
                oxrdf::Literal::new_typed_literal(
                    statement.object.as_str(),
                    named_node(&statement.datatype)?,
                )
                .into()
            }
            ObjectKind::Literal if !statement.language.is_empty() => {
                oxrdf::Literal::new_language_tagged_literal(
                    statement.object.as_str(),
                    statement.language.as_str(),
                )
                .map_err(|err| Error::InvalidTerm {
                    term: statement.language.clone(),
                    reason: err.to_string(),
                })?
                .into()
            }
            ObjectKind::Literal => {
                oxrdf::Literal::new_simple_literal(statement.object.as_str()).into()
            }
        };

        Ok(oxrdf::Triple::new(
            subject(&statement.subject)?,
            named_node(&statement.predicate)?,
            object,
        ))
    }
}
