use crate::tokenizer::XmlAttribute;
use crate::{RDF_NAMESPACE, XML_NAMESPACE, rdf_syntax};

/// A non-reserved attribute, later emitted as a property of the element's subject or object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PropertyAttribute {
    pub predicate: String,
    pub value: String,
}

/// The RDF/XML-reserved attributes of one element, plus everything else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ReservedAttributes {
    pub about: Option<String>,
    pub id: Option<String>,
    pub node_id: Option<String>,
    pub resource: Option<String>,
    pub datatype: Option<String>,
    pub parse_type: Option<String>,
    pub lang: Option<String>,
    pub base: Option<String>,
    pub properties: Vec<PropertyAttribute>,
}

impl ReservedAttributes {
    pub fn extract(attributes: &[XmlAttribute]) -> Self {
        let mut result = Self::default();
        for attribute in attributes {
            let name = &attribute.name;
            let value = || Some(attribute.value.clone());
            match name.namespace.as_deref() {
                Some(RDF_NAMESPACE) => match name.local_name.as_str() {
                    rdf_syntax::ABOUT => result.about = value(),
                    rdf_syntax::ID => result.id = value(),
                    rdf_syntax::NODE_ID => result.node_id = value(),
                    rdf_syntax::RESOURCE => result.resource = value(),
                    rdf_syntax::DATATYPE => result.datatype = value(),
                    rdf_syntax::PARSE_TYPE => result.parse_type = value(),
                    _ => result.properties.push(PropertyAttribute {
                        predicate: name.expanded(),
                        value: attribute.value.clone(),
                    }),
                },
                Some(XML_NAMESPACE) => match name.local_name.as_str() {
                    "lang" => result.lang = value(),
                    "base" => result.base = value(),
                    // xml:space and friends carry no RDF meaning
                    _ => {}
                },
                Some(_) => result.properties.push(PropertyAttribute {
                    predicate: name.expanded(),
                    value: attribute.value.clone(),
                }),
                None => {
                    log::trace!("- ignoring unqualified attribute @{}", name.local_name);
                }
            }
        }
        result
    }

    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }
}
