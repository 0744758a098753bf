use std::collections::HashSet;

use itertools::Itertools;
use oxrdf::Graph;
use xml2rdf::{ParserOptions, RdfXmlParser, Statement};

pub const BASE: &str = "http://example.org/doc";

const KNOWN_PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("ex", "http://example.org/stuff/1.0/"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

pub fn options() -> ParserOptions {
    ParserOptions::default().with_base_iri(BASE).unwrap()
}

pub fn serialize_graph(graph: Graph, base: &str) -> String {
    // NB: blank node labels depend on the parser, so compare canonical forms
    let idents = rdf_canon::issue_graph_with::<sha2::Sha256>(&graph, &Default::default()).unwrap();
    let graph = rdf_canon::relabel_graph(&graph, &idents).unwrap();

    let mut output = Vec::new();
    let mut ttl = oxttl::TurtleSerializer::new().with_base_iri(base).unwrap();

    let mut prefixes_to_use = HashSet::new();
    let mut add_prefix = |full_iri: &str| {
        if let Some(&(prefix, iri)) = KNOWN_PREFIXES
            .iter()
            .find(|(_, iri)| full_iri.starts_with(*iri))
        {
            prefixes_to_use.insert((prefix, iri));
        }
    };

    for triple in graph.iter() {
        if let oxrdf::SubjectRef::NamedNode(n) = triple.subject {
            add_prefix(n.as_str());
        }

        add_prefix(triple.predicate.as_str());

        if let oxrdf::TermRef::NamedNode(n) = triple.object {
            add_prefix(n.as_str());
        } else if let oxrdf::TermRef::Literal(l) = triple.object {
            if !l.is_plain() {
                add_prefix(l.datatype().as_str());
            }
        }
    }

    for (prefix, iri) in prefixes_to_use.into_iter().sorted() {
        ttl = ttl.with_prefix(prefix, iri).unwrap();
    }

    let mut ttl = ttl.for_writer(&mut output);
    for triple in graph.iter().sorted_by_cached_key(|t| {
        (
            t.subject.to_string(),
            if t.predicate.as_str() == "http://www.w3.org/1999/02/22-rdf-syntax-ns#type" {
                // make "a" come first
                None
            } else {
                Some(t.predicate.to_string())
            },
            t.object.to_string(),
        )
    }) {
        ttl.serialize_triple(triple).unwrap();
    }

    ttl.finish().unwrap();

    String::from_utf8_lossy(&output).into_owned()
}

#[allow(unused)]
pub fn assert_graph(xml: &str, ttl: &str) {
    let mut output_graph = Graph::new();
    xml2rdf::parse(xml.as_bytes(), options(), &mut output_graph).unwrap();

    let mut ttl_graph = Graph::new();
    {
        let ttl_rdf = oxttl::TurtleParser::new()
            .with_base_iri(BASE)
            .unwrap()
            .for_slice(ttl.as_bytes());
        for triple in ttl_rdf {
            ttl_graph.insert(&triple.unwrap());
        }
    }

    let output = serialize_graph(output_graph, BASE);
    let ttl_output = serialize_graph(ttl_graph, BASE);

    pretty_assertions::assert_eq!(output, ttl_output);
}

/// Statements in emission order, feeding the document `chunk_size` bytes at a time.
#[allow(unused)]
pub fn statements_chunked(xml: &str, chunk_size: usize) -> Vec<Statement> {
    let mut parser = RdfXmlParser::new(options(), Vec::new());
    for chunk in xml.as_bytes().chunks(chunk_size) {
        parser.parse_chunk(chunk, false);
    }
    parser.finish().unwrap()
}

#[allow(unused)]
pub fn statements(xml: &str) -> Vec<Statement> {
    statements_chunked(xml, xml.len().max(1))
}

/// One N-Triples line per statement, in emission order.
#[allow(unused)]
pub fn ntriples(xml: &str) -> String {
    statements(xml).iter().join("\n")
}
