use crate::iri;

/// Values inherited down the element tree unless an element overrides them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Scope {
    // empty when no xml:lang is in effect
    pub lang: String,
    pub base_uri: String,
}

#[derive(Debug)]
pub(crate) struct NodeFrame {
    pub subject: String,
    /// Last number handed out to an `rdf:li` child.
    pub li_counter: u64,
}

#[derive(Debug)]
pub(crate) struct PropertyFrame {
    pub predicate: String,
    pub datatype: Option<String>,
    pub reify_id: Option<String>,
    pub text: String,
    /// Set once the element's object is a resource, which suppresses the literal.
    pub has_object_nodes: bool,
}

#[derive(Debug)]
pub(crate) struct XmlLiteralFrame {
    pub predicate: String,
    pub reify_id: Option<String>,
    pub markup: String,
    /// Open descendant elements captured into `markup`.
    pub depth: usize,
}

#[derive(Debug)]
pub(crate) struct CollectionFrame {
    pub predicate: String,
    pub reify_id: Option<String>,
    /// Last list node appended; `None` while the collection is empty.
    pub tail: Option<String>,
}

#[derive(Debug)]
pub(crate) enum FrameKind {
    Root,
    Node(NodeFrame),
    Property(PropertyFrame),
    PropertyXmlLiteral(XmlLiteralFrame),
    PropertyCollection(CollectionFrame),
}

impl FrameKind {
    pub fn name(&self) -> &'static str {
        match self {
            FrameKind::Root => "root",
            FrameKind::Node(_) => "node",
            FrameKind::Property(_) => "property",
            FrameKind::PropertyXmlLiteral(_) => "literal property",
            FrameKind::PropertyCollection(_) => "collection property",
        }
    }
}

#[derive(Debug)]
pub(crate) struct Frame {
    pub scope: Scope,
    pub kind: FrameKind,
}

/// What a new element is, judged from the frame it opens under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ElementRole {
    Node,
    Property,
    /// Markup inside a `parseType="Literal"` property, captured verbatim.
    LiteralContent,
}

/// The open elements of one document, innermost last.
#[derive(Debug)]
pub(crate) struct FrameStack {
    frames: Vec<Frame>,
    document_base: String,
    root_closed: bool,
}

impl FrameStack {
    pub fn new(document_base: impl Into<String>) -> Self {
        Self {
            frames: Vec::new(),
            document_base: document_base.into(),
            root_closed: false,
        }
    }

    pub fn push(&mut self, scope: Scope, kind: FrameKind) {
        log::trace!(
            "- push {} frame (depth {}, lang {:?}, base <{}>)",
            kind.name(),
            self.frames.len(),
            scope.lang,
            scope.base_uri
        );
        self.frames.push(Frame { scope, kind });
    }

    pub fn pop(&mut self) -> Option<Frame> {
        let frame = self.frames.pop()?;
        if self.frames.is_empty() {
            self.root_closed = true;
        }
        Some(frame)
    }

    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// True once the document element has been closed; later events are ignored.
    pub fn root_closed(&self) -> bool {
        self.root_closed
    }

    /// Nodes open under properties, collections and the root; properties open under nodes.
    pub fn role_of_next(&self) -> ElementRole {
        match self.top().map(|frame| &frame.kind) {
            None
            | Some(FrameKind::Root)
            | Some(FrameKind::Property(_))
            | Some(FrameKind::PropertyCollection(_)) => ElementRole::Node,
            Some(FrameKind::Node(_)) => ElementRole::Property,
            Some(FrameKind::PropertyXmlLiteral(_)) => ElementRole::LiteralContent,
        }
    }

    /// Base URI in effect for the innermost open element.
    pub fn current_base(&self) -> &str {
        self.top()
            .map(|frame| frame.scope.base_uri.as_str())
            .unwrap_or(&self.document_base)
    }

    pub fn current_lang(&self) -> &str {
        self.top().map(|frame| frame.scope.lang.as_str()).unwrap_or("")
    }

    /// Scope for a new element: its own `xml:lang`/`xml:base` if given, otherwise the parent's.
    pub fn resolve_scope(&self, lang: Option<&str>, base: Option<&str>) -> Scope {
        let lang = lang.unwrap_or_else(|| self.current_lang()).to_string();
        let base_uri = match base {
            Some(base) => iri::resolve(self.current_base(), base),
            None => self.current_base().to_string(),
        };
        Scope { lang, base_uri }
    }

    /// Subject of the innermost open node element.
    pub fn enclosing_subject(&self) -> Option<&str> {
        self.frames.iter().rev().find_map(|frame| match &frame.kind {
            FrameKind::Node(node) => Some(node.subject.as_str()),
            _ => None,
        })
    }
}
