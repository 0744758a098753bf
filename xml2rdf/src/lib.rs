//! Streaming RDF/XML parser.
//!
//! Bytes are pushed into an [`RdfXmlParser`] in chunks of any size and the
//! statements they encode come out through a [`StatementSink`] as soon as they
//! are known. [`parse`] is the one-shot form that fills an [`oxrdf::Graph`].
//!
//! ```
//! let mut graph = oxrdf::Graph::new();
//! xml2rdf::parse(
//!     br#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
//!                  xmlns:ex="http://example.org/">
//!           <rdf:Description rdf:about="http://example.org/s">
//!             <ex:p>hello</ex:p>
//!           </rdf:Description>
//!         </rdf:RDF>"#,
//!     xml2rdf::ParserOptions::default(),
//!     &mut graph,
//! )?;
//! assert_eq!(graph.len(), 1);
//! # Ok::<(), xml2rdf::Error>(())
//! ```

use oxrdf::Graph;

mod attributes;
mod blank_node;
mod emitter;
mod error;
mod frame;
mod handler;
mod iri;
mod options;
mod parser;
mod sink;
mod statement;
pub mod tokenizer;

pub use error::Error;
pub use options::{DEFAULT_BLANK_NODE_PREFIX, ParserOptions};
pub use parser::{ParserState, RdfXmlParser};
pub use sink::{FnSink, GraphSink, StatementSink};
pub use statement::{ObjectKind, Statement};

pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Size of the pieces [`parse`] feeds to the parser.
pub const PARSING_CHUNK_SIZE: usize = 4096;

/// Local names in the RDF namespace that the grammar treats specially.
pub(crate) mod rdf_syntax {
    pub const RDF: &str = "RDF";
    pub const DESCRIPTION: &str = "Description";
    pub const LI: &str = "li";

    pub const ABOUT: &str = "about";
    pub const ID: &str = "ID";
    pub const NODE_ID: &str = "nodeID";
    pub const RESOURCE: &str = "resource";
    pub const DATATYPE: &str = "datatype";
    pub const PARSE_TYPE: &str = "parseType";
}

/// Parses a complete document into `output_graph`.
///
/// `rdf:resource`, `rdf:datatype` and `xml:base` values are resolved against the
/// in-scope base IRI, but `rdf:about` is taken exactly as written. A relative
/// `rdf:about` (including `""` and `"#x"`) therefore cannot be inserted into a
/// graph and fails with [`Error::IriParseError`]; write subjects as absolute IRIs,
/// or use `rdf:ID` for names relative to the document.
pub fn parse(input: &[u8], options: ParserOptions, output_graph: &mut Graph) -> Result<(), Error> {
    let mut parser = RdfXmlParser::new(options, GraphSink::new(output_graph));
    for chunk in input.chunks(PARSING_CHUNK_SIZE) {
        if parser.state() != ParserState::Running {
            break;
        }
        parser.parse_chunk(chunk, false);
    }

    parser.finish()?.finish()?;
    Ok(())
}
