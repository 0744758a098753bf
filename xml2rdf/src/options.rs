use oxiri::Iri;

use crate::Error;

pub const DEFAULT_BLANK_NODE_PREFIX: &str = "_:b";

/// Construction-time settings for one [`RdfXmlParser`](crate::RdfXmlParser).
///
/// Every parser instance owns its own copy, so documents parsed on
/// different threads never share configuration or counters.
#[derive(Clone, Debug)]
pub struct ParserOptions {
    base_iri: String,
    blank_node_prefix: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            base_iri: String::new(),
            blank_node_prefix: DEFAULT_BLANK_NODE_PREFIX.to_string(),
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document base, used for relative references and for `rdf:ID` subjects
    /// when no `xml:base` is in scope.
    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Result<Self, Error> {
        let base_iri = base_iri.into();
        Iri::parse(base_iri.as_str()).map_err(|source| Error::IriParseError {
            source,
            iri: base_iri.clone(),
        })?;
        self.base_iri = base_iri;
        Ok(self)
    }

    /// Sets the string prepended to the blank node counter (`_:b` gives `_:b1`, `_:b2`, …).
    pub fn with_blank_node_prefix(mut self, prefix: impl Into<String>) -> Result<Self, Error> {
        let prefix = prefix.into();
        let valid = prefix.strip_prefix("_:").is_some_and(|label| {
            label
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
                && !label.starts_with(['-', '.'])
        });

        if !valid {
            return Err(Error::InvalidBlankNodePrefix { prefix });
        }

        self.blank_node_prefix = prefix;
        Ok(self)
    }

    pub fn base_iri(&self) -> &str {
        &self.base_iri
    }

    pub fn blank_node_prefix(&self) -> &str {
        &self.blank_node_prefix
    }
}
