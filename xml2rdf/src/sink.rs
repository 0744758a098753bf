use std::collections::BTreeMap;

use crate::{Error, Statement};

/// Receives everything a parser produces for one document.
///
/// Callbacks run synchronously inside [`RdfXmlParser::parse_chunk`](crate::RdfXmlParser::parse_chunk);
/// any back-pressure has to be applied from inside `on_statement`.
pub trait StatementSink {
    /// Called once per emitted statement, in document order.
    fn on_statement(&mut self, statement: &Statement);

    /// Called once per namespace declaration; purely informational.
    fn on_namespace(&mut self, _prefix: &str, _uri: &str) {}

    /// Called at most once per document, with the fatal error that stopped it.
    fn on_error(&mut self, _error: &Error) {}
}

impl StatementSink for Vec<Statement> {
    fn on_statement(&mut self, statement: &Statement) {
        self.push(statement.clone());
    }
}

impl<S: StatementSink + ?Sized> StatementSink for &mut S {
    fn on_statement(&mut self, statement: &Statement) {
        (**self).on_statement(statement)
    }

    fn on_namespace(&mut self, prefix: &str, uri: &str) {
        (**self).on_namespace(prefix, uri)
    }

    fn on_error(&mut self, error: &Error) {
        (**self).on_error(error)
    }
}

/// A sink assembled from closures, one per callback.
pub struct FnSink<S, N = fn(&str, &str), E = fn(&Error)> {
    on_statement: S,
    on_namespace: N,
    on_error: E,
}

impl<S: FnMut(&Statement)> FnSink<S> {
    pub fn new(on_statement: S) -> Self {
        Self {
            on_statement,
            on_namespace: |_, _| {},
            on_error: |_| {},
        }
    }
}

impl<S, N, E> FnSink<S, N, E> {
    pub fn with_namespace<N2: FnMut(&str, &str)>(self, on_namespace: N2) -> FnSink<S, N2, E> {
        FnSink {
            on_statement: self.on_statement,
            on_namespace,
            on_error: self.on_error,
        }
    }

    pub fn with_error<E2: FnMut(&Error)>(self, on_error: E2) -> FnSink<S, N, E2> {
        FnSink {
            on_statement: self.on_statement,
            on_namespace: self.on_namespace,
            on_error,
        }
    }
}

impl<S, N, E> StatementSink for FnSink<S, N, E>
where
    S: FnMut(&Statement),
    N: FnMut(&str, &str),
    E: FnMut(&Error),
{
    fn on_statement(&mut self, statement: &Statement) {
        (self.on_statement)(statement)
    }

    fn on_namespace(&mut self, prefix: &str, uri: &str) {
        (self.on_namespace)(prefix, uri)
    }

    fn on_error(&mut self, error: &Error) {
        (self.on_error)(error)
    }
}

/// Collects statements into an [`oxrdf::Graph`].
///
/// Statements that cannot be represented in `oxrdf` (for example a relative IRI,
/// or a language tag that is not BCP47) are not inserted; the first such problem
/// is kept and reported by [`GraphSink::finish`].
pub struct GraphSink<'g> {
    graph: &'g mut oxrdf::Graph,
    prefixes: BTreeMap<String, String>,
    conversion_error: Option<Error>,
}

impl<'g> GraphSink<'g> {
    pub fn new(graph: &'g mut oxrdf::Graph) -> Self {
        Self {
            graph,
            prefixes: BTreeMap::new(),
            conversion_error: None,
        }
    }

    /// The namespace declarations seen so far; later declarations of a prefix win.
    pub fn prefixes(&self) -> &BTreeMap<String, String> {
        &self.prefixes
    }

    pub fn finish(self) -> Result<BTreeMap<String, String>, Error> {
        match self.conversion_error {
            Some(err) => Err(err),
            None => Ok(self.prefixes),
        }
    }
}

impl StatementSink for GraphSink<'_> {
    fn on_statement(&mut self, statement: &Statement) {
        match oxrdf::Triple::try_from(statement) {
            Ok(triple) => {
                self.graph.insert(&triple);
            }
            Err(err) => {
                log::warn!("Dropping statement `{statement}`: {err}");
                self.conversion_error.get_or_insert(err);
            }
        }
    }

    fn on_namespace(&mut self, prefix: &str, uri: &str) {
        self.prefixes.insert(prefix.to_string(), uri.to_string());
    }
}
