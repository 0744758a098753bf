use crate::handler::RdfXmlHandler;
use crate::tokenizer::PushTokenizer;
use crate::{Error, ParserOptions, StatementSink};

/// Where a [`RdfXmlParser`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserState {
    /// Accepting chunks.
    Running,
    /// The final chunk was processed without error.
    Finished,
    /// An error was reported; further input is ignored.
    Failed,
}

/// Streaming RDF/XML parser.
///
/// Feed the document through [`parse_chunk`](Self::parse_chunk) in pieces of any
/// size; statements are delivered to the sink as soon as the markup that
/// determines them has been read. The first error is reported to
/// [`StatementSink::on_error`] exactly once and stops the parse.
pub struct RdfXmlParser<S> {
    tokenizer: PushTokenizer,
    handler: RdfXmlHandler<S>,
    state: ParserState,
    error: Option<Error>,
}

impl<S: StatementSink> RdfXmlParser<S> {
    pub fn new(options: ParserOptions, sink: S) -> Self {
        log::debug!(
            "new parser (base <{}>, blank node prefix {:?})",
            options.base_iri(),
            options.blank_node_prefix()
        );
        Self {
            tokenizer: PushTokenizer::new(),
            handler: RdfXmlHandler::new(&options, sink),
            state: ParserState::Running,
            error: None,
        }
    }

    /// Processes the next piece of the document. `is_final` marks the last one,
    /// which may be empty.
    ///
    /// Calls made after the final chunk or after an error do nothing.
    pub fn parse_chunk(&mut self, chunk: &[u8], is_final: bool) {
        match self.state {
            ParserState::Running => {}
            ParserState::Finished => {
                log::warn!("ignoring {} bytes after the final chunk", chunk.len());
                return;
            }
            ParserState::Failed => {
                log::warn!("ignoring {} bytes after a parse error", chunk.len());
                return;
            }
        }

        match self.tokenizer.feed(chunk, is_final, &mut self.handler) {
            Ok(()) if is_final => {
                log::debug!("document complete");
                self.state = ParserState::Finished;
            }
            Ok(()) => {}
            Err(err) => {
                log::debug!("parse failed: {err}");
                self.handler.report_error(&err);
                self.state = ParserState::Failed;
                self.error = Some(err);
            }
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// The error that stopped the parse, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn sink(&self) -> &S {
        self.handler.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.handler.sink_mut()
    }

    pub fn into_sink(self) -> S {
        self.handler.into_sink()
    }

    /// Sends the final chunk if it has not been sent yet and hands back the sink,
    /// or the error that stopped the parse.
    pub fn finish(mut self) -> Result<S, Error> {
        if self.state == ParserState::Running {
            self.parse_chunk(&[], true);
        }

        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(self.into_sink()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Statement;

    #[derive(Default)]
    struct Counting {
        statements: Vec<Statement>,
        errors: usize,
    }

    impl StatementSink for Counting {
        fn on_statement(&mut self, statement: &Statement) {
            self.statements.push(statement.clone());
        }

        fn on_error(&mut self, _error: &Error) {
            self.errors += 1;
        }
    }

    #[test]
    fn error_is_reported_once() {
        let mut parser = RdfXmlParser::new(ParserOptions::default(), Counting::default());
        parser.parse_chunk(b"<a xmlns='http://example.org/'></b>", false);
        parser.parse_chunk(b"<more/>", false);
        parser.parse_chunk(b"", true);

        assert_eq!(parser.state(), ParserState::Failed);
        assert!(matches!(parser.error(), Some(Error::MismatchedEndTag { .. })));
        assert_eq!(parser.sink().errors, 1);
    }

    #[test]
    fn malformed_markup_fails_without_the_final_chunk() {
        let mut parser = RdfXmlParser::new(ParserOptions::default(), Counting::default());
        parser.parse_chunk(
            b"<rdf:RDF xmlns:rdf='http://www.w3.org/1999/02/22-rdf-syntax-ns#'><!X>",
            false,
        );

        assert_eq!(parser.state(), ParserState::Failed);
        assert!(matches!(parser.error(), Some(Error::Xml { .. })));
        assert_eq!(parser.sink().errors, 1);

        parser.parse_chunk(&[b' '; 4096], false);
        assert_eq!(parser.sink().errors, 1);
    }

    #[test]
    fn final_chunk_is_idempotent() {
        let mut parser = RdfXmlParser::new(ParserOptions::default(), Counting::default());
        parser.parse_chunk(
            br#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"/>"#,
            true,
        );
        assert_eq!(parser.state(), ParserState::Finished);

        parser.parse_chunk(b"<junk>", true);
        parser.parse_chunk(b"", true);
        assert_eq!(parser.state(), ParserState::Finished);
        assert_eq!(parser.sink().errors, 0);
        assert!(parser.sink().statements.is_empty());
    }

    #[test]
    fn finish_sends_the_final_chunk() {
        let mut parser = RdfXmlParser::new(ParserOptions::default(), Counting::default());
        parser.parse_chunk(b"<rdf:RDF xmlns:rdf='http://www.w3.org/1999/02/22-rdf-syntax-ns#'>", false);
        let result = parser.finish();
        assert!(matches!(result, Err(Error::UnclosedElements { .. })));
    }

    #[test]
    fn empty_document_has_no_root() {
        let parser = RdfXmlParser::new(ParserOptions::default(), Vec::new());
        assert!(matches!(parser.finish(), Err(Error::NoRootElement)));
    }
}
