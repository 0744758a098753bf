use std::fmt::Write;

use itertools::Itertools;
use oxrdf::vocab::rdf;
use quick_xml::escape::escape;

use crate::attributes::{PropertyAttribute, ReservedAttributes};
use crate::blank_node::BlankNodeGenerator;
use crate::emitter::{Emitter, Object};
use crate::frame::{
    CollectionFrame, ElementRole, Frame, FrameKind, FrameStack, NodeFrame, PropertyFrame, Scope,
    XmlLiteralFrame,
};
use crate::tokenizer::{StartElement, XmlEventHandler, XmlName};
use crate::{Error, ParserOptions, RDF_NAMESPACE, StatementSink, iri, rdf_syntax};

/// The RDF/XML grammar, driven one tokenizer event at a time.
pub(crate) struct RdfXmlHandler<S> {
    stack: FrameStack,
    emitter: Emitter<S>,
    blank_nodes: BlankNodeGenerator,
}

/// `base#id`, ignoring any fragment the base already has.
fn id_iri(base: &str, id: &str) -> String {
    let base = base.split_once('#').map_or(base, |(base, _)| base);
    format!("{base}#{id}")
}

fn trim_text(text: &str) -> &str {
    text.trim_matches([' ', '\t', '\n', '\r'])
}

impl<S: StatementSink> RdfXmlHandler<S> {
    pub fn new(options: &ParserOptions, sink: S) -> Self {
        Self {
            stack: FrameStack::new(options.base_iri()),
            emitter: Emitter::new(sink),
            blank_nodes: BlankNodeGenerator::new(options.blank_node_prefix()),
        }
    }

    pub fn sink(&self) -> &S {
        self.emitter.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.emitter.sink_mut()
    }

    pub fn into_sink(self) -> S {
        self.emitter.into_sink()
    }

    pub fn report_error(&mut self, error: &Error) {
        self.emitter.error(error);
    }

    fn node_element(&mut self, element: &StartElement, attributes: ReservedAttributes, scope: Scope) {
        let subject = if let Some(about) = attributes.about {
            about
        } else if let Some(id) = &attributes.id {
            id_iri(&scope.base_uri, id)
        } else if let Some(node_id) = &attributes.node_id {
            format!("_:{node_id}")
        } else {
            self.blank_nodes.issue()
        };

        self.link_to_parent(&subject);

        if !element.name.is(RDF_NAMESPACE, rdf_syntax::DESCRIPTION) {
            self.emitter.emit(
                &subject,
                rdf::TYPE.as_str(),
                Object::Resource(&element.name.expanded()),
            );
        }

        self.emit_property_attributes(&subject, &attributes.properties, &scope);
        self.stack.push(
            scope,
            FrameKind::Node(NodeFrame {
                subject,
                li_counter: 0,
            }),
        );
    }

    /// Connects a new node element to the property or collection it is nested in.
    fn link_to_parent(&mut self, subject: &str) {
        let Some(enclosing) = self.stack.enclosing_subject().map(str::to_string) else {
            return;
        };

        let Some(parent) = self.stack.top_mut() else {
            return;
        };

        match &mut parent.kind {
            FrameKind::Property(property) => {
                property.has_object_nodes = true;
                self.emitter.emit_with_reification(
                    &enclosing,
                    &property.predicate,
                    Object::Resource(subject),
                    property.reify_id.as_deref(),
                );
            }
            FrameKind::PropertyCollection(collection) => {
                let list_node = self.blank_nodes.issue();
                match collection.tail.replace(list_node.clone()) {
                    None => self.emitter.emit_with_reification(
                        &enclosing,
                        &collection.predicate,
                        Object::Resource(&list_node),
                        collection.reify_id.as_deref(),
                    ),
                    Some(tail) => self.emitter.emit(
                        &tail,
                        rdf::REST.as_str(),
                        Object::Resource(&list_node),
                    ),
                }
                self.emitter
                    .emit(&list_node, rdf::FIRST.as_str(), Object::Resource(subject));
            }
            FrameKind::Root | FrameKind::Node(_) | FrameKind::PropertyXmlLiteral(_) => {}
        }
    }

    fn property_element(
        &mut self,
        element: &StartElement,
        attributes: ReservedAttributes,
        scope: Scope,
    ) {
        let Some(Frame {
            kind: FrameKind::Node(node),
            ..
        }) = self.stack.top_mut()
        else {
            return;
        };

        let predicate = if element.name.is(RDF_NAMESPACE, rdf_syntax::LI) {
            node.li_counter += 1;
            format!("{RDF_NAMESPACE}_{}", node.li_counter)
        } else {
            element.name.expanded()
        };
        let subject = node.subject.clone();
        let reify_id = attributes
            .id
            .as_deref()
            .map(|id| id_iri(&scope.base_uri, id));

        match attributes.parse_type.as_deref() {
            Some("Resource") => {
                let object = self.blank_nodes.issue();
                self.emitter.emit_with_reification(
                    &subject,
                    &predicate,
                    Object::Resource(&object),
                    reify_id.as_deref(),
                );
                self.stack.push(
                    scope,
                    FrameKind::Node(NodeFrame {
                        subject: object,
                        li_counter: 0,
                    }),
                );
            }
            Some("Collection") => {
                self.stack.push(
                    scope,
                    FrameKind::PropertyCollection(CollectionFrame {
                        predicate,
                        reify_id,
                        tail: None,
                    }),
                );
            }
            Some(parse_type) => {
                if parse_type != "Literal" {
                    log::debug!("- parseType=\"{parse_type}\" is handled as \"Literal\"");
                }
                self.stack.push(
                    scope,
                    FrameKind::PropertyXmlLiteral(XmlLiteralFrame {
                        predicate,
                        reify_id,
                        markup: String::new(),
                        depth: 0,
                    }),
                );
            }
            None if attributes.resource.is_some()
                || attributes.node_id.is_some()
                || attributes.has_properties() =>
            {
                let object = match (&attributes.resource, &attributes.node_id) {
                    (Some(resource), _) => iri::resolve(&scope.base_uri, resource),
                    (None, Some(node_id)) => format!("_:{node_id}"),
                    (None, None) => self.blank_nodes.issue(),
                };
                self.emitter.emit_with_reification(
                    &subject,
                    &predicate,
                    Object::Resource(&object),
                    reify_id.as_deref(),
                );
                self.emit_property_attributes(&object, &attributes.properties, &scope);
                self.stack.push(
                    scope,
                    FrameKind::Property(PropertyFrame {
                        predicate,
                        datatype: None,
                        reify_id,
                        text: String::new(),
                        has_object_nodes: true,
                    }),
                );
            }
            None => {
                let datatype = attributes
                    .datatype
                    .as_deref()
                    .map(|datatype| iri::resolve(&scope.base_uri, datatype));
                self.stack.push(
                    scope,
                    FrameKind::Property(PropertyFrame {
                        predicate,
                        datatype,
                        reify_id,
                        text: String::new(),
                        has_object_nodes: false,
                    }),
                );
            }
        }
    }

    fn emit_property_attributes(
        &mut self,
        subject: &str,
        properties: &[PropertyAttribute],
        scope: &Scope,
    ) {
        for property in properties {
            if property.predicate == rdf::TYPE.as_str() {
                let object = iri::resolve(&scope.base_uri, &property.value);
                self.emitter
                    .emit(subject, &property.predicate, Object::Resource(&object));
            } else {
                self.emitter.emit(
                    subject,
                    &property.predicate,
                    Object::plain(&property.value, &scope.lang),
                );
            }
        }
    }

    fn capture_start_tag(&mut self, element: &StartElement) {
        let Some(Frame {
            kind: FrameKind::PropertyXmlLiteral(literal),
            ..
        }) = self.stack.top_mut()
        else {
            return;
        };

        let markup = &mut literal.markup;
        // writing into a String cannot fail
        let _ = write!(markup, "<{}", element.name.qualified());
        for decl in &element.namespace_decls {
            let _ = match &decl.prefix {
                Some(prefix) => write!(markup, " xmlns:{prefix}=\"{}\"", escape(&decl.uri)),
                None => write!(markup, " xmlns=\"{}\"", escape(&decl.uri)),
            };
        }
        for attribute in &element.attributes {
            let _ = write!(
                markup,
                " {}=\"{}\"",
                attribute.name.qualified(),
                escape(&attribute.value)
            );
        }
        markup.push('>');
        literal.depth += 1;
    }

    fn close_frame(&mut self, frame: Frame) {
        let Frame { scope, kind } = frame;
        match kind {
            FrameKind::Root | FrameKind::Node(_) => {}
            FrameKind::PropertyCollection(collection) => {
                let nil = Object::Resource(rdf::NIL.as_str());
                match &collection.tail {
                    Some(tail) => self.emitter.emit(tail, rdf::REST.as_str(), nil),
                    None => {
                        let Some(subject) = self.stack.enclosing_subject() else {
                            return;
                        };
                        self.emitter.emit_with_reification(
                            subject,
                            &collection.predicate,
                            nil,
                            collection.reify_id.as_deref(),
                        );
                    }
                }
            }
            FrameKind::Property(property) if !property.has_object_nodes => {
                let Some(subject) = self.stack.enclosing_subject() else {
                    return;
                };
                let datatype = property.datatype.as_deref().unwrap_or("");
                let language = if datatype.is_empty() {
                    scope.lang.as_str()
                } else {
                    ""
                };
                self.emitter.emit_with_reification(
                    subject,
                    &property.predicate,
                    Object::Literal {
                        value: trim_text(&property.text),
                        datatype,
                        language,
                    },
                    property.reify_id.as_deref(),
                );
            }
            FrameKind::Property(_) => {}
            FrameKind::PropertyXmlLiteral(literal) => {
                let Some(subject) = self.stack.enclosing_subject() else {
                    return;
                };
                self.emitter.emit_with_reification(
                    subject,
                    &literal.predicate,
                    Object::Literal {
                        value: trim_text(&literal.markup),
                        datatype: rdf::XML_LITERAL.as_str(),
                        language: "",
                    },
                    literal.reify_id.as_deref(),
                );
            }
        }
    }
}

impl<S: StatementSink> XmlEventHandler for RdfXmlHandler<S> {
    fn start_element(&mut self, element: &StartElement) {
        for decl in &element.namespace_decls {
            self.emitter
                .namespace(decl.prefix.as_deref().unwrap_or(""), &decl.uri);
        }

        if self.stack.root_closed() {
            log::trace!("- ignoring <{}> after the root element", element.name.qualified());
            return;
        }

        let role = self.stack.role_of_next();
        if log::log_enabled!(log::Level::Trace) {
            let attrs = element
                .attributes
                .iter()
                .map(|a| format!("@{}='{}'", a.name.qualified(), a.value))
                .join(" ");
            log::trace!("<{}> {attrs} as {role:?}", element.name.qualified());
        }

        if role == ElementRole::LiteralContent {
            self.capture_start_tag(element);
            return;
        }

        let attributes = ReservedAttributes::extract(&element.attributes);
        let scope = self
            .stack
            .resolve_scope(attributes.lang.as_deref(), attributes.base.as_deref());

        if self.stack.is_empty() && element.name.is(RDF_NAMESPACE, rdf_syntax::RDF) {
            self.stack.push(scope, FrameKind::Root);
        } else if role == ElementRole::Node {
            self.node_element(element, attributes, scope);
        } else {
            self.property_element(element, attributes, scope);
        }
    }

    fn end_element(&mut self, name: &XmlName) {
        if let Some(Frame {
            kind: FrameKind::PropertyXmlLiteral(literal),
            ..
        }) = self.stack.top_mut()
        {
            if literal.depth > 0 {
                let _ = write!(literal.markup, "</{}>", name.qualified());
                literal.depth -= 1;
                return;
            }
        }

        match self.stack.pop() {
            Some(frame) => self.close_frame(frame),
            None => log::trace!("- ignoring </{}> with no open frame", name.qualified()),
        }
    }

    fn characters(&mut self, text: &str) {
        match self.stack.top_mut().map(|frame| &mut frame.kind) {
            Some(FrameKind::Property(property)) => property.text.push_str(text),
            Some(FrameKind::PropertyXmlLiteral(literal)) => {
                literal.markup.push_str(&escape(text))
            }
            _ => {}
        }
    }
}
