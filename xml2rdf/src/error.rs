#[derive(derive_more::Error, derive_more::Display, derive_more::From, Debug)]
pub enum Error {
    #[display("XML syntax error at byte {position}: {source}")]
    Xml {
        source: quick_xml::Error,
        position: u64,
    },

    #[display("Invalid XML attribute: {_0}")]
    #[from]
    Attribute(quick_xml::events::attributes::AttrError),

    #[display("Invalid UTF-8 in document: {_0}")]
    #[from]
    Utf8(std::str::Utf8Error),

    #[display("Mismatched end tag: expected `</{expected}>`, found `</{found}>`")]
    MismatchedEndTag { expected: String, found: String },

    #[display("Unexpected end tag `</{found}>`: no element is open")]
    UnexpectedEndTag { found: String },

    #[display("Document ended with unclosed elements: {open}")]
    UnclosedElements { open: String },

    #[display("The namespace prefix `{prefix}` is not bound")]
    UnboundPrefix { prefix: String },

    #[display("`{name}` is not a valid XML name")]
    InvalidName { name: String },

    #[display("Character data is not allowed outside of the root element")]
    TextOutsideRoot,

    #[display("The document has more than one root element")]
    MultipleRoots,

    #[display("The document has no root element")]
    NoRootElement,

    #[display("Unsupported document encoding `{encoding}`: only UTF-8 is supported")]
    UnsupportedEncoding { encoding: String },

    #[display("IRI parse error: `{iri}`")]
    IriParseError {
        source: oxiri::IriParseError,
        iri: String,
    },

    #[display("Invalid blank node prefix `{prefix}`: it must start with `_:`")]
    InvalidBlankNodePrefix { prefix: String },

    #[display("Invalid term `{term}`: {reason}")]
    InvalidTerm { term: String, reason: String },
}
