// Samples from: https://www.w3.org/TR/rdf-syntax-grammar/
mod utils;

#[test]
pub fn example7_complete_description() {
    let xml = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:dc="http://purl.org/dc/elements/1.1/"
            xmlns:ex="http://example.org/stuff/1.0/">
  <rdf:Description rdf:about="http://www.w3.org/TR/rdf-syntax-grammar"
		   dc:title="RDF1.1 XML Syntax">
    <ex:editor>
      <rdf:Description ex:fullName="Dave Beckett">
	<ex:homePage rdf:resource="http://purl.org/net/dajobe/" />
      </rdf:Description>
    </ex:editor>
  </rdf:Description>
</rdf:RDF>"#;

    let ttl = r#"
    @prefix dc: <http://purl.org/dc/elements/1.1/> .
    @prefix ex: <http://example.org/stuff/1.0/> .
    <http://www.w3.org/TR/rdf-syntax-grammar> dc:title "RDF1.1 XML Syntax" ;
      ex:editor [ ex:fullName "Dave Beckett" ; ex:homePage <http://purl.org/net/dajobe/> ] .
    "#;

    utils::assert_graph(xml, ttl);
}

#[test]
pub fn example8_languages() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:dc="http://purl.org/dc/elements/1.1/">
  <rdf:Description rdf:about="http://www.w3.org/TR/rdf-syntax-grammar">
    <dc:title>RDF 1.1 XML Syntax</dc:title>
    <dc:title xml:lang="en">RDF 1.1 XML Syntax</dc:title>
    <dc:title xml:lang="en-US">RDF 1.1 XML Syntax</dc:title>
  </rdf:Description>

  <rdf:Description rdf:about="http://example.org/buecher/baum" xml:lang="de">
    <dc:title>Der Baum</dc:title>
    <dc:description>Das Buch ist außergewöhnlich</dc:description>
    <dc:title xml:lang="en">The Tree</dc:title>
  </rdf:Description>
</rdf:RDF>"#;

    let ttl = r#"
    @prefix dc: <http://purl.org/dc/elements/1.1/> .
    <http://www.w3.org/TR/rdf-syntax-grammar> dc:title "RDF 1.1 XML Syntax", "RDF 1.1 XML Syntax"@en, "RDF 1.1 XML Syntax"@en-US .
    <http://example.org/buecher/baum> dc:title "Der Baum"@de, "The Tree"@en ;
      dc:description "Das Buch ist außergewöhnlich"@de .
    "#;

    utils::assert_graph(xml, ttl);
}

#[test]
pub fn example10_typed_literal() {
    let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:ex="http://example.org/stuff/1.0/">
  <rdf:Description rdf:about="http://example.org/item01">
    <ex:size rdf:datatype="http://www.w3.org/2001/XMLSchema#int">123</ex:size>
  </rdf:Description>
</rdf:RDF>"#;

    let ttl = r#"
    @prefix ex: <http://example.org/stuff/1.0/> .
    @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
    <http://example.org/item01> ex:size "123"^^xsd:int .
    "#;

    utils::assert_graph(xml, ttl);
}

#[test]
pub fn example11_node_ids() {
    let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:dc="http://purl.org/dc/elements/1.1/"
            xmlns:ex="http://example.org/stuff/1.0/">
  <rdf:Description rdf:about="http://www.w3.org/TR/rdf-syntax-grammar"
		   dc:title="RDF 1.1 XML Syntax">
    <ex:editor rdf:nodeID="abc"/>
  </rdf:Description>

  <rdf:Description rdf:nodeID="abc"
                   ex:fullName="Dave Beckett">
    <ex:homePage rdf:resource="http://purl.org/net/dajobe/"/>
  </rdf:Description>
</rdf:RDF>"#;

    let ttl = r#"
    @prefix dc: <http://purl.org/dc/elements/1.1/> .
    @prefix ex: <http://example.org/stuff/1.0/> .
    <http://www.w3.org/TR/rdf-syntax-grammar> dc:title "RDF 1.1 XML Syntax" ;
      ex:editor _:abc .
    _:abc ex:fullName "Dave Beckett" ;
      ex:homePage <http://purl.org/net/dajobe/> .
    "#;

    utils::assert_graph(xml, ttl);
}

#[test]
pub fn example12_parse_type_resource() {
    let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:dc="http://purl.org/dc/elements/1.1/"
            xmlns:ex="http://example.org/stuff/1.0/">
  <rdf:Description rdf:about="http://www.w3.org/TR/rdf-syntax-grammar"
		   dc:title="RDF 1.1 XML Syntax">
    <ex:editor rdf:parseType="Resource">
      <ex:fullName>Dave Beckett</ex:fullName>
      <ex:homePage rdf:resource="http://purl.org/net/dajobe/"/>
    </ex:editor>
  </rdf:Description>
</rdf:RDF>"#;

    let ttl = r#"
    @prefix dc: <http://purl.org/dc/elements/1.1/> .
    @prefix ex: <http://example.org/stuff/1.0/> .
    <http://www.w3.org/TR/rdf-syntax-grammar> dc:title "RDF 1.1 XML Syntax" ;
      ex:editor [ ex:fullName "Dave Beckett" ; ex:homePage <http://purl.org/net/dajobe/> ] .
    "#;

    utils::assert_graph(xml, ttl);
}

#[test]
pub fn example13_property_attributes_on_empty_property() {
    let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:dc="http://purl.org/dc/elements/1.1/"
            xmlns:ex="http://example.org/stuff/1.0/">
  <rdf:Description rdf:about="http://www.w3.org/TR/rdf-syntax-grammar"
		   dc:title="RDF 1.1 XML Syntax">
    <ex:editor ex:fullName="Dave Beckett" />
  </rdf:Description>
</rdf:RDF>"#;

    let ttl = r#"
    @prefix dc: <http://purl.org/dc/elements/1.1/> .
    @prefix ex: <http://example.org/stuff/1.0/> .
    <http://www.w3.org/TR/rdf-syntax-grammar> dc:title "RDF 1.1 XML Syntax" ;
      ex:editor [ ex:fullName "Dave Beckett" ] .
    "#;

    utils::assert_graph(xml, ttl);
}

#[test]
pub fn example14_typed_node() {
    let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:dc="http://purl.org/dc/elements/1.1/"
            xmlns:ex="http://example.org/stuff/1.0/">
  <ex:Document rdf:about="http://example.org/thing">
    <dc:title>A marvelous thing</dc:title>
  </ex:Document>
</rdf:RDF>"#;

    let ttl = r#"
    @prefix dc: <http://purl.org/dc/elements/1.1/> .
    @prefix ex: <http://example.org/stuff/1.0/> .
    <http://example.org/thing> a ex:Document ;
      dc:title "A marvelous thing" .
    "#;

    utils::assert_graph(xml, ttl);
}

#[test]
pub fn example16_id_and_xml_base() {
    let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:ex="http://example.org/stuff/1.0/"
            xml:base="http://example.org/here/">
  <rdf:Description rdf:ID="snack">
    <ex:prop rdf:resource="fruit/apple"/>
  </rdf:Description>
</rdf:RDF>"#;

    let ttl = r#"
    @prefix ex: <http://example.org/stuff/1.0/> .
    <http://example.org/here/#snack> ex:prop <http://example.org/here/fruit/apple> .
    "#;

    utils::assert_graph(xml, ttl);
}

#[test]
pub fn example17_container_membership() {
    let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Seq rdf:about="http://example.org/favourite-fruit">
    <rdf:li rdf:resource="http://example.org/banana"/>
    <rdf:li rdf:resource="http://example.org/apple"/>
    <rdf:li rdf:resource="http://example.org/pear"/>
  </rdf:Seq>
</rdf:RDF>"#;

    let ttl = r#"
    @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
    <http://example.org/favourite-fruit> a rdf:Seq ;
      rdf:_1 <http://example.org/banana> ;
      rdf:_2 <http://example.org/apple> ;
      rdf:_3 <http://example.org/pear> .
    "#;

    utils::assert_graph(xml, ttl);
}

#[test]
pub fn example19_collection() {
    let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:ex="http://example.org/stuff/1.0/">
  <rdf:Description rdf:about="http://example.org/basket">
    <ex:hasFruit rdf:parseType="Collection">
      <rdf:Description rdf:about="http://example.org/banana"/>
      <rdf:Description rdf:about="http://example.org/apple"/>
      <rdf:Description rdf:about="http://example.org/pear"/>
    </ex:hasFruit>
  </rdf:Description>
</rdf:RDF>"#;

    let ttl = r#"
    @prefix ex: <http://example.org/stuff/1.0/> .
    <http://example.org/basket> ex:hasFruit (
      <http://example.org/banana> <http://example.org/apple> <http://example.org/pear>
    ) .
    "#;

    utils::assert_graph(xml, ttl);
}

#[test]
pub fn example20_reification() {
    let xml = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
            xmlns:ex="http://example.org/stuff/1.0/"
            xml:base="http://example.org/triples/">
  <rdf:Description rdf:about="http://example.org/">
    <ex:prop rdf:ID="triple1">blah</ex:prop>
  </rdf:Description>
</rdf:RDF>"#;

    let ttl = r#"
    @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
    @prefix ex: <http://example.org/stuff/1.0/> .
    <http://example.org/> ex:prop "blah" .
    <http://example.org/triples/#triple1> a rdf:Statement ;
      rdf:subject <http://example.org/> ;
      rdf:predicate ex:prop ;
      rdf:object "blah" .
    "#;

    utils::assert_graph(xml, ttl);
}
