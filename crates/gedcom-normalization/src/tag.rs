//! GEDCOM tag canonicalization.
//!
//! Some applications (FTM among them) write the long GEDCOM tag *names*
//! (`BIRTH`, `MARRIAGE`) instead of the tags (`BIRT`, `MARR`). Others use
//! their own custom tags that have a direct equivalent. Both are folded to
//! the canonical short tag here.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Long-form tag names -> tags.
const TAG_NAMES: &[(&str, &str)] = &[
    ("ABBREVIATION", "ABBR"),
    ("ADDRESS", "ADDR"),
    ("ADDRESS1", "ADR1"),
    ("ADDRESS2", "ADR2"),
    ("ADDRESS3", "ADR3"),
    ("ADOPTION", "ADOP"),
    ("AGENCY", "AGNC"),
    ("ALIAS", "ALIA"),
    ("ANCESTORS", "ANCE"),
    ("ANCES_INTEREST", "ANCI"),
    ("ANULMENT", "ANUL"),
    ("ASSOCIATES", "ASSO"),
    ("AUTHOR", "AUTH"),
    ("BAPTISM-LDS", "BAPL"),
    ("BAPTISM", "BAPM"),
    ("BAR_MITZVAH", "BARM"),
    ("BAS_MITZVAH", "BASM"),
    ("BIRTH", "BIRT"),
    ("BLESSING", "BLES"),
    ("BURIAL", "BURI"),
    ("CALL_NUMBER", "CALN"),
    ("CASTE", "CAST"),
    ("CAUSE", "CAUS"),
    ("CENSUS", "CENS"),
    ("CHANGE", "CHAN"),
    ("CHARACTER", "CHAR"),
    ("CHILD", "CHIL"),
    ("CHRISTENING", "CHR"),
    ("ADULT_CHRISTENING", "CHRA"),
    ("CONCATENATION", "CONC"),
    ("CONFIRMATION", "CONF"),
    ("CONFIRMATION-LDS", "CONL"),
    ("CONTINUED", "CONT"),
    ("COPYRIGHT", "COPY"),
    ("CORPORTATE", "CORP"),
    ("CREMATION", "CREM"),
    ("COUNTRY", "CTRY"),
    ("DEATH", "DEAT"),
    ("DESCENDANTS", "DESC"),
    ("DESCENDANTS_INT", "DESI"),
    ("DESTINATION", "DEST"),
    ("DIVORCE", "DIV"),
    ("DIVORCE_FILED", "DIVF"),
    ("PHY_DESCRIPTION", "DSCR"),
    ("EDUCATION", "EDUC"),
    ("EMIGRATION", "EMIG"),
    ("ENDOWMENT", "ENDL"),
    ("ENGAGEMENT", "ENGA"),
    ("EVENT", "EVEN"),
    ("FAMILY", "FAM"),
    ("FAMILY_CHILD", "FAMC"),
    ("FAMILY_FILE", "FAMF"),
    ("FAMILY_SPOUSE", "FAMS"),
    ("FACIMILIE", "FAX"),
    ("FIRST_COMMUNION", "FCOM"),
    ("FORMAT", "FORM"),
    ("PHONETIC", "FONE"),
    ("GEDCOM", "GEDC"),
    ("GIVEN_NAME", "GIVN"),
    ("GRADUATION", "GRAD"),
    ("HEADER", "HEAD"),
    ("HUSBAND", "HUSB"),
    ("IDENT_NUMBER", "IDNO"),
    ("IMMIGRATION", "IMMI"),
    ("INDIVIDUAL", "INDI"),
    ("LANGUAGE", "LANG"),
    ("LATITUDE", "LATI"),
    ("LONGITUDE", "LONG"),
    ("MARRIAGE_BANN", "MARB"),
    ("MARR_CONTRACT", "MARC"),
    ("MARR_LICENSE", "MARL"),
    ("MARRIAGE", "MARR"),
    ("MEDIA", "MEDI"),
    ("NATIONALITY", "NATI"),
    ("NATURALIZATION", "NATU"),
    ("CHILDREN_COUNT", "NCHI"),
    ("NICKNAME", "NICK"),
    ("MARRIAGE_COUNT", "NMR"),
    ("NAME_PREFIX", "NPFX"),
    ("NAME_SUFFIX", "NSFX"),
    ("OBJECT", "OBJE"),
    ("OCCUPATION", "OCCU"),
    ("ORDINANCE", "ORDI"),
    ("ORDINATION", "ORDN"),
    ("PEDIGREE", "PEDI"),
    ("PHONE", "PHON"),
    ("PLACE", "PLAC"),
    ("POSTAL_CODE", "POST"),
    ("PROBATE", "PROB"),
    ("PROPERTY", "PROP"),
    ("PUBLICATION", "PUBL"),
    ("QUALITY_OF_DATA", "QUAY"),
    ("REFERENCE", "REFN"),
    ("RELATIONSHIP", "RELA"),
    ("RELIGION", "RELI"),
    ("REPOSITORY", "REPO"),
    ("RESIDENCE", "RESI"),
    ("RESTRICTION", "RESN"),
    ("RETIREMENT", "RETI"),
    ("REC_FILE_NUMBER", "RFN"),
    ("REC_ID_NUMBER", "RIN"),
    ("ROMANIZED", "ROMN"),
    ("SEALING_CHILD", "SLGC"),
    ("SEALING_SPOUSE", "SLGS"),
    ("SOURCE", "SOUR"),
    ("SURN_PREFIX", "SPFX"),
    ("SOC_SEC_NUMBER", "SSN"),
    ("STATE", "STAE"),
    ("STATUS", "STAT"),
    ("SUBMITTER", "SUBM"),
    ("SUBMISSION", "SUBN"),
    ("SURNAME", "SURN"),
    ("TEMPLE", "TEMP"),
    ("TITLE", "TITL"),
    ("TRAILER", "TRLR"),
    ("VERSION", "VERS"),
    ("WEB", "WWW"),
    ("_DEATH_OF_SPOUSE", "DETS"),
    ("_DEGREE", "_DEG"),
    ("_MEDICAL", "_MCL"),
    ("_MILITARY_SERVICE", "_MILT"),
];

/// Custom tags of other applications with a direct equivalent.
const TAG_SYNONYMS: &[(&str, &str)] = &[
    // PhpGedView
    ("_PGVU", "_WT_USER"),
    ("_PGV_OBJS", "_WT_OBJE_SORT"),
];

static TAG_NAME_LOOKUP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TAG_NAMES.iter().copied().collect());

static TAG_SYNONYM_LOOKUP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TAG_SYNONYMS.iter().copied().collect());

/// Convert a GEDCOM tag to its canonical form.
///
/// The tag is uppercased, then looked up as a long-form name, then as a
/// synonym. Unknown tags are returned uppercased.
///
/// # Examples
///
/// ```
/// use gedcom_normalization::canonical_tag;
///
/// assert_eq!(canonical_tag("marriage"), "MARR");
/// assert_eq!(canonical_tag("_PGVU"), "_WT_USER");
/// assert_eq!(canonical_tag("chr"), "CHR");
/// ```
pub fn canonical_tag(tag: &str) -> String {
    let tag = tag.to_ascii_uppercase();

    TAG_NAME_LOOKUP
        .get(tag.as_str())
        .or_else(|| TAG_SYNONYM_LOOKUP.get(tag.as_str()))
        .map_or(tag, |canonical| (*canonical).to_string())
}

/// Canonicalize each segment of a colon-separated tag path
/// (`INDIVIDUAL:BIRTH:PLACE` -> `INDI:BIRT:PLAC`).
pub fn canonical_tag_path(path: &str) -> String {
    path.split(':')
        .map(canonical_tag)
        .collect::<Vec<_>>()
        .join(":")
}

/// Whether `tag` is a long-form name or synonym rather than a canonical tag.
pub fn is_alias(tag: &str) -> bool {
    let tag = tag.to_ascii_uppercase();
    TAG_NAME_LOOKUP.contains_key(tag.as_str()) || TAG_SYNONYM_LOOKUP.contains_key(tag.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_form_names() {
        assert_eq!(canonical_tag("BIRTH"), "BIRT");
        assert_eq!(canonical_tag("Baptism-LDS"), "BAPL");
        assert_eq!(canonical_tag("_military_service"), "_MILT");
        assert_eq!(canonical_tag("_DEATH_OF_SPOUSE"), "DETS");
    }

    #[test]
    fn test_synonyms() {
        assert_eq!(canonical_tag("_pgvu"), "_WT_USER");
        assert_eq!(canonical_tag("_PGV_OBJS"), "_WT_OBJE_SORT");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(canonical_tag("CHR"), "CHR");
        assert_eq!(canonical_tag("chr"), "CHR");
        assert_eq!(canonical_tag("_CUSTOM"), "_CUSTOM");
        assert_eq!(canonical_tag(""), "");
    }

    #[test]
    fn test_tag_path() {
        assert_eq!(canonical_tag_path("individual:birth:place"), "INDI:BIRT:PLAC");
        assert_eq!(canonical_tag_path("FAM:MARR:TYPE"), "FAM:MARR:TYPE");
    }

    #[test]
    fn test_canonical_tags_are_not_aliases() {
        for (_, tag) in TAG_NAMES.iter().chain(TAG_SYNONYMS) {
            assert!(!is_alias(tag), "{tag} is both canonical and an alias");
        }
        assert!(is_alias("address"));
        assert!(!is_alias("ADDR"));
    }

    #[test]
    fn test_tables_have_unique_keys() {
        assert_eq!(TAG_NAME_LOOKUP.len(), TAG_NAMES.len());
        assert_eq!(TAG_SYNONYM_LOOKUP.len(), TAG_SYNONYMS.len());
    }
}
