use oxrdf::vocab::rdf;

use crate::statement::{ObjectKind, Statement, resource_kind};
use crate::{Error, StatementSink};

/// The object position of a statement about to be emitted.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Object<'a> {
    /// An IRI or a `_:` blank node reference.
    Resource(&'a str),
    Literal {
        value: &'a str,
        datatype: &'a str,
        language: &'a str,
    },
}

impl<'a> Object<'a> {
    pub fn plain(value: &'a str, language: &'a str) -> Self {
        Object::Literal {
            value,
            datatype: "",
            language,
        }
    }
}

/// The single exit for statements: every triple the handlers produce passes through here.
pub(crate) struct Emitter<S> {
    sink: S,
}

impl<S: StatementSink> Emitter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn namespace(&mut self, prefix: &str, uri: &str) {
        log::debug!("- namespace {prefix:?} = <{uri}>");
        self.sink.on_namespace(prefix, uri);
    }

    pub fn error(&mut self, error: &Error) {
        self.sink.on_error(error);
    }

    pub fn emit(&mut self, subject: &str, predicate: &str, object: Object<'_>) {
        let (object, datatype, language, object_kind) = match object {
            Object::Resource(iri) => (iri, "", "", resource_kind(iri)),
            Object::Literal {
                value,
                datatype,
                language,
            } => (value, datatype, language, ObjectKind::Literal),
        };

        let statement = Statement {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: object.to_string(),
            datatype: datatype.to_string(),
            language: language.to_string(),
            object_kind,
        };
        log::trace!("- emitting {statement}");
        self.sink.on_statement(&statement);
    }

    /// Emits the statement and, when `reify_id` is given, the four statements describing it.
    pub fn emit_with_reification(
        &mut self,
        subject: &str,
        predicate: &str,
        object: Object<'_>,
        reify_id: Option<&str>,
    ) {
        self.emit(subject, predicate, object);

        if let Some(reify_id) = reify_id {
            self.emit(
                reify_id,
                rdf::TYPE.as_str(),
                Object::Resource(rdf::STATEMENT.as_str()),
            );
            self.emit(reify_id, rdf::SUBJECT.as_str(), Object::Resource(subject));
            self.emit(
                reify_id,
                rdf::PREDICATE.as_str(),
                Object::Resource(predicate),
            );
            self.emit(reify_id, rdf::OBJECT.as_str(), object);
        }
    }
}
