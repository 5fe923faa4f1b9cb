/// Reduces an organism name to genus and species, dropping strain or
/// subspecies qualifiers (e.g. "Escherichia coli O157:H7" -> "Escherichia coli").
pub fn display_name(organism_name: &str) -> String {
    organism_name
        .split_whitespace()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
}
