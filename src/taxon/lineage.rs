//! Parsing of semicolon-delimited lineage strings such as
//! `d__Bacteria;p__Pseudomonadota;g__Escherichia;s__coli`.

const GENUS_PREFIX: &str = "g__";
const SPECIES_PREFIX: &str = "s__";

/// Genus and species tags found in a lineage string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineageTags {
    pub genus: Option<String>,
    pub species: Option<String>,
}

impl LineageTags {
    /// Scans every `;`-separated token. Later tags overwrite earlier ones and a
    /// prefix with nothing after it counts as absent.
    pub fn parse(lineage: &str) -> Self {
        let mut tags = Self::default();
        for token in lineage.split(';') {
            if let Some(value) = token.strip_prefix(GENUS_PREFIX) {
                tags.genus = non_empty(value);
            } else if let Some(value) = token.strip_prefix(SPECIES_PREFIX) {
                tags.species = non_empty(value);
            }
        }
        tags
    }

    /// `"{genus} {species}"`, or `None` when either rank is missing.
    pub fn organism_name(&self) -> Option<String> {
        match (&self.genus, &self.species) {
            (Some(genus), Some(species)) => Some(format!("{} {}", genus, species)),
            _ => None,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Extracts the organism name from a lineage string. `None` marks the record
/// as unparseable.
pub fn parse_organism_name(lineage: &str) -> Option<String> {
    LineageTags::parse(lineage).organism_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_genus_and_species() {
        assert_eq!(
            parse_organism_name("g__Escherichia;s__coli"),
            Some("Escherichia coli".to_string())
        );
        assert_eq!(
            parse_organism_name(
                "d__Bacteria;p__Bacillota;c__Bacilli;o__Bacillales;f__Bacillaceae;g__Bacillus;s__subtilis"
            ),
            Some("Bacillus subtilis".to_string())
        );
    }

    #[test]
    fn token_order_is_not_assumed() {
        assert_eq!(
            parse_organism_name("s__aureus;f__Staphylococcaceae;g__Staphylococcus"),
            Some("Staphylococcus aureus".to_string())
        );
    }

    #[test]
    fn missing_rank_is_invalid() {
        assert_eq!(parse_organism_name("unclassified"), None);
        assert_eq!(parse_organism_name("g__Escherichia"), None);
        assert_eq!(parse_organism_name("f__Enterobacteriaceae;s__coli"), None);
        assert_eq!(parse_organism_name(""), None);
    }

    #[test]
    fn last_tag_wins() {
        let tags = LineageTags::parse("g__First;s__one;g__Second;s__two");
        assert_eq!(tags.genus.as_deref(), Some("Second"));
        assert_eq!(tags.organism_name(), Some("Second two".to_string()));
    }

    #[test]
    fn empty_value_after_prefix_is_absent() {
        assert_eq!(parse_organism_name("g__;s__coli"), None);
        assert_eq!(parse_organism_name("g__Escherichia;s__"), None);
        // A later empty tag clears an earlier value.
        assert_eq!(parse_organism_name("g__Escherichia;g__;s__coli"), None);
    }

    #[test]
    fn tokens_are_not_trimmed() {
        assert_eq!(parse_organism_name("g__Escherichia; s__coli"), None);
    }

    #[test]
    fn species_may_carry_strain_qualifiers() {
        assert_eq!(
            parse_organism_name("g__Escherichia;s__coli O157:H7"),
            Some("Escherichia coli O157:H7".to_string())
        );
    }
}
