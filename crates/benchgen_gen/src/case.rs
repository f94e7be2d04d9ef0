//! Identifier casing for generated host-language types.

/// Converts a base name into a type identifier: splits on every
/// non-alphanumeric character, upper-cases the first letter of each segment
/// and joins the segments.
///
/// `counter_test_design` becomes `CounterTestDesign`. Distinct inputs can
/// collide (`a_b` and `a__b`); names derived from real module identifiers do
/// not in practice.
pub fn to_type_name(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
