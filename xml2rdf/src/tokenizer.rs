//! Push-style adapter over `quick-xml`.
//!
//! Bytes arrive in arbitrary chunks. Each call to [`PushTokenizer::feed`] tokenizes
//! as much of the buffered input as forms complete events, resolves namespaces
//! and hands the events to an [`XmlEventHandler`]. Markup cut by a chunk boundary
//! stays buffered until more input (or the final chunk) arrives. Text is passed on
//! as it comes, except for a reference or UTF-8 sequence cut at the boundary, so
//! handlers may see one text node as several `characters` calls. Apart from that
//! split, the event stream does not depend on how the document was chunked.
//!
//! Anything that is malformed regardless of what follows is reported right away.

use std::borrow::Cow;

use itertools::Itertools;
use quick_xml::Reader;
use quick_xml::errors::SyntaxError;
use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};

use crate::{Error, XML_NAMESPACE};

/// An element or attribute name with its namespace already resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlName {
    pub local_name: String,
    pub prefix: Option<String>,
    pub namespace: Option<String>,
}

impl XmlName {
    /// Namespace IRI followed by the local name; just the local name when unqualified.
    pub fn expanded(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}{}", self.local_name),
            None => self.local_name.clone(),
        }
    }

    /// The name as written in the document.
    pub fn qualified(&self) -> Cow<'_, str> {
        match &self.prefix {
            Some(prefix) => Cow::Owned(format!("{prefix}:{}", self.local_name)),
            None => Cow::Borrowed(&self.local_name),
        }
    }

    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.local_name == local_name
    }
}

/// `xmlns` (prefix `None`) or `xmlns:prefix` declared on an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceDecl {
    pub prefix: Option<String>,
    pub uri: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlAttribute {
    pub name: XmlName,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartElement {
    pub name: XmlName,
    pub namespace_decls: Vec<NamespaceDecl>,
    /// Attributes other than namespace declarations, values unescaped.
    pub attributes: Vec<XmlAttribute>,
}

/// Receives the events of one document, in order.
pub trait XmlEventHandler {
    fn start_element(&mut self, element: &StartElement);
    fn end_element(&mut self, name: &XmlName);
    /// Decoded character data; consecutive calls belong to the same text node.
    fn characters(&mut self, text: &str);
}

struct OpenElement {
    qname: String,
    declared: usize,
}

#[derive(Default)]
pub struct PushTokenizer {
    pending: Vec<u8>,
    // byte offset of `pending[0]` in the document
    offset: u64,
    // `pending` starts with markup that is still missing its closing `>`
    awaiting_markup_end: bool,
    bindings: Vec<NamespaceDecl>,
    open: Vec<OpenElement>,
    seen_root: bool,
}

impl PushTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(
        &mut self,
        chunk: &[u8],
        is_final: bool,
        handler: &mut impl XmlEventHandler,
    ) -> Result<(), Error> {
        self.pending.extend_from_slice(chunk);

        // every kind of markup ends in `>`, so nothing new can complete without one
        if self.awaiting_markup_end && !is_final && !chunk.contains(&b'>') {
            return Ok(());
        }

        let mut pending = std::mem::take(&mut self.pending);
        let consumed = self.tokenize(&pending, is_final, handler)?;
        pending.drain(..consumed);
        self.pending = pending;
        self.offset += consumed as u64;

        if is_final {
            self.finish()?;
        }

        Ok(())
    }

    /// Returns how many bytes of `input` were turned into events.
    fn tokenize(
        &mut self,
        input: &[u8],
        is_final: bool,
        handler: &mut impl XmlEventHandler,
    ) -> Result<usize, Error> {
        let mut reader = Reader::from_reader(input);
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        // end tags are matched here, across readers
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        self.awaiting_markup_end = false;
        let mut consumed = 0;
        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(source) => {
                    let start = reader.error_position() as usize;
                    if !is_final && is_cut_off(&source, &input[start..]) {
                        self.awaiting_markup_end = true;
                        return Ok(consumed);
                    }
                    return Err(Error::Xml {
                        source,
                        position: self.offset + start as u64,
                    });
                }
            };

            let end = reader.buffer_position() as usize;
            let position = self.offset + consumed as u64;
            match event {
                Event::Eof => return Ok(consumed),
                // the text may continue in the next chunk, possibly mid-reference
                Event::Text(text) if !is_final && end == input.len() => {
                    let complete = complete_text_len(&text);
                    if complete > 0 {
                        let raw = std::str::from_utf8(&text[..complete])?;
                        let text = Event::Text(BytesText::from_escaped(raw));
                        self.dispatch(text, position, handler)?;
                    }
                    return Ok(consumed + complete);
                }
                event => self.dispatch(event, position, handler)?,
            }

            consumed = end;
        }
    }

    fn dispatch(
        &mut self,
        event: Event<'_>,
        position: u64,
        handler: &mut impl XmlEventHandler,
    ) -> Result<(), Error> {
        let xml_error = |source| Error::Xml { source, position };
        match event {
            Event::Start(start) => self.start_element(&start, position, handler),
            Event::Empty(start) => {
                self.start_element(&start, position, handler)?;
                self.end_element(start.name().as_ref(), handler)
            }
            Event::End(end) => self.end_element(end.name().as_ref(), handler),
            Event::Text(text) => {
                let text = text.unescape().map_err(xml_error)?;
                self.characters(&text, handler)
            }
            Event::CData(cdata) => {
                let text = std::str::from_utf8(&cdata)?;
                self.characters(text, handler)
            }
            Event::Decl(decl) => check_encoding(&decl).map_err(|err| match err {
                EncodingCheck::Xml(source) => xml_error(source),
                EncodingCheck::Unsupported(encoding) => Error::UnsupportedEncoding { encoding },
            }),
            Event::Comment(_) | Event::PI(_) | Event::DocType(_) | Event::Eof => Ok(()),
        }
    }

    fn start_element(
        &mut self,
        start: &BytesStart<'_>,
        position: u64,
        handler: &mut impl XmlEventHandler,
    ) -> Result<(), Error> {
        if self.open.is_empty() {
            if self.seen_root {
                return Err(Error::MultipleRoots);
            }
            self.seen_root = true;
        }

        let qname = std::str::from_utf8(start.name().as_ref())?.to_string();
        validate_qname(&qname)?;

        let mut namespace_decls = Vec::new();
        let mut raw_attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = std::str::from_utf8(attribute.key.as_ref())?;
            let value = attribute
                .unescape_value()
                .map_err(|source| Error::Xml { source, position })?
                .into_owned();

            if key == "xmlns" {
                namespace_decls.push(NamespaceDecl {
                    prefix: None,
                    uri: value,
                });
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                validate_ncname(prefix)?;
                namespace_decls.push(NamespaceDecl {
                    prefix: Some(prefix.to_string()),
                    uri: value,
                });
            } else {
                validate_qname(key)?;
                raw_attributes.push((key.to_string(), value));
            }
        }

        self.bindings.extend(namespace_decls.iter().cloned());
        self.open.push(OpenElement {
            qname,
            declared: namespace_decls.len(),
        });

        let qname = &self.open[self.open.len() - 1].qname;
        let name = self.resolve(qname, true)?;
        let attributes = raw_attributes
            .into_iter()
            .map(|(key, value)| {
                Ok(XmlAttribute {
                    name: self.resolve(&key, false)?,
                    value,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        handler.start_element(&StartElement {
            name,
            namespace_decls,
            attributes,
        });
        Ok(())
    }

    fn end_element(&mut self, raw: &[u8], handler: &mut impl XmlEventHandler) -> Result<(), Error> {
        let found = std::str::from_utf8(raw)?;
        let Some(open) = self.open.pop() else {
            return Err(Error::UnexpectedEndTag {
                found: found.to_string(),
            });
        };

        if open.qname != found {
            return Err(Error::MismatchedEndTag {
                expected: open.qname,
                found: found.to_string(),
            });
        }

        // resolve before the element's own declarations go out of scope
        let name = self.resolve(found, true)?;
        self.bindings.truncate(self.bindings.len() - open.declared);
        handler.end_element(&name);
        Ok(())
    }

    fn characters(&mut self, text: &str, handler: &mut impl XmlEventHandler) -> Result<(), Error> {
        if !self.open.is_empty() {
            handler.characters(text);
        } else if !text.trim().is_empty() {
            return Err(Error::TextOutsideRoot);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Error> {
        if !self.open.is_empty() {
            return Err(Error::UnclosedElements {
                open: self.open.iter().map(|e| e.qname.as_str()).join(" > "),
            });
        }

        if !self.seen_root {
            return Err(Error::NoRootElement);
        }

        Ok(())
    }

    fn lookup(&self, prefix: Option<&str>) -> Option<&str> {
        self.bindings
            .iter()
            .rev()
            .find(|decl| decl.prefix.as_deref() == prefix)
            .map(|decl| decl.uri.as_str())
    }

    /// Unprefixed elements take the default namespace; unprefixed attributes have none.
    fn resolve(&self, qname: &str, is_element: bool) -> Result<XmlName, Error> {
        let (prefix, local_name) = match qname.split_once(':') {
            Some((prefix, local_name)) => (Some(prefix), local_name),
            None => (None, qname),
        };

        let namespace = match prefix {
            Some("xml") => Some(XML_NAMESPACE.to_string()),
            Some(prefix) => match self.lookup(Some(prefix)) {
                Some(uri) if !uri.is_empty() => Some(uri.to_string()),
                _ => {
                    return Err(Error::UnboundPrefix {
                        prefix: prefix.to_string(),
                    });
                }
            },
            None if is_element => self
                .lookup(None)
                .filter(|uri| !uri.is_empty())
                .map(str::to_string),
            None => None,
        };

        Ok(XmlName {
            local_name: local_name.to_string(),
            prefix: prefix.map(str::to_string),
            namespace,
        })
    }
}

fn validate_ncname(name: &str) -> Result<(), Error> {
    rxml_validation::validate_ncname(name).map_err(|_| Error::InvalidName {
        name: name.to_string(),
    })
}

fn validate_qname(qname: &str) -> Result<(), Error> {
    match qname.split_once(':') {
        Some((prefix, local_name)) => {
            validate_ncname(prefix)?;
            validate_ncname(local_name)
        }
        None => validate_ncname(qname),
    }
    .map_err(|_| Error::InvalidName {
        name: qname.to_string(),
    })
}

/// Whether `error` only means that the markup starting at `rest` has not fully arrived yet.
fn is_cut_off(error: &quick_xml::Error, rest: &[u8]) -> bool {
    match error {
        // `<!` followed by anything other than `--`, `[CDATA[` or `DOCTYPE` is never valid
        quick_xml::Error::Syntax(SyntaxError::InvalidBangMarkup) => rest == b"<!",
        quick_xml::Error::Syntax(SyntaxError::UnclosedPIOrXmlDecl) => {
            !rest.windows(2).any(|w| w == b"?>")
        }
        quick_xml::Error::Syntax(_) => true,
        _ => false,
    }
}

/// Length of the prefix of raw text that can be decoded on its own: a trailing
/// entity reference without its `;`, or a trailing partial UTF-8 sequence, has to
/// wait for the next chunk.
fn complete_text_len(raw: &[u8]) -> usize {
    let mut len = match raw.iter().rposition(|&b| b == b'&') {
        Some(amp) if !raw[amp..].contains(&b';') => amp,
        _ => raw.len(),
    };

    if let Err(err) = std::str::from_utf8(&raw[..len]) {
        if err.error_len().is_none() {
            len = err.valid_up_to();
        }
    }

    len
}

enum EncodingCheck {
    Xml(quick_xml::Error),
    Unsupported(String),
}

fn check_encoding(decl: &BytesDecl<'_>) -> Result<(), EncodingCheck> {
    let Some(encoding) = decl.encoding() else {
        return Ok(());
    };
    let encoding = encoding
        .map_err(|err| EncodingCheck::Xml(quick_xml::Error::InvalidAttr(err)))?;
    if matches!(
        encoding.to_ascii_lowercase().as_slice(),
        b"utf-8" | b"utf8" | b"unicode-1-1-utf-8" | b"unicode11utf8" | b"unicode20utf8"
    ) {
        Ok(())
    } else {
        Err(EncodingCheck::Unsupported(
            String::from_utf8_lossy(&encoding).into_owned(),
        ))
    }
}
