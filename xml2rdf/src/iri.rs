use oxiri::Iri;

/// `scheme ":" …` per RFC 3986; everything else is a relative reference.
pub(crate) fn is_absolute(reference: &str) -> bool {
    let Some((scheme, _)) = reference.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Resolves `reference` against `base`.
///
/// Absolute references are returned untouched. When the base is empty or is not
/// itself a valid IRI, the reference is appended to it verbatim.
pub(crate) fn resolve(base: &str, reference: &str) -> String {
    if is_absolute(reference) {
        return reference.to_string();
    }

    match Iri::parse(base) {
        Ok(base_iri) => match base_iri.resolve(reference) {
            Ok(iri) => iri.into_inner(),
            Err(err) => {
                log::debug!("- cannot resolve <{reference}> against <{base}>: {err}");
                format!("{base}{reference}")
            }
        },
        Err(_) => format!("{base}{reference}"),
    }
}
