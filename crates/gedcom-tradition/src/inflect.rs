//! Gendered surname inflection.
//!
//! Each table maps a surname ending to its replacement. The first matching
//! ending wins, so longer endings are listed before shorter ones that they
//! contain.

/// Polish masculine to feminine (`Kowalski` -> `Kowalska`).
pub const POLISH_FEMININE: &[(&str, &str)] = &[
    ("dzki", "dzka"),
    ("żki", "żka"),
    ("cki", "cka"),
    ("ski", "ska"),
];

/// Polish feminine to masculine (`Kowalska` -> `Kowalski`).
pub const POLISH_MASCULINE: &[(&str, &str)] = &[
    ("dzka", "dzki"),
    ("żka", "żki"),
    ("cka", "cki"),
    ("ska", "ski"),
];

/// Lithuanian father's surname to daughter's (`Kazlauskas` -> `Kazlauskaitė`).
pub const LITHUANIAN_DAUGHTER: &[(&str, &str)] = &[
    ("as", "aitė"),
    ("is", "ytė"),
    ("ys", "ytė"),
    ("us", "utė"),
];

/// Lithuanian husband's surname to wife's (`Kazlauskas` -> `Kazlauskienė`).
pub const LITHUANIAN_WIFE: &[(&str, &str)] = &[
    ("as", "ienė"),
    ("is", "ienė"),
    ("ys", "ienė"),
    ("us", "uvienė"),
];

/// Lithuanian daughter's surname back to her father's.
///
/// `-ytė` is ambiguous between `-is` and `-ys`; `-is` is the more common.
pub const LITHUANIAN_FATHER: &[(&str, &str)] = &[
    ("aitė", "as"),
    ("ytė", "is"),
    ("utė", "us"),
];

/// Replace the first matching ending of `surname` from `table`.
///
/// Returns `surname` unchanged when no ending matches.
pub fn inflect(surname: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .find_map(|(ending, replacement)| {
            surname
                .strip_suffix(ending)
                .map(|stem| format!("{stem}{replacement}"))
        })
        .unwrap_or_else(|| surname.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polish() {
        assert_eq!(inflect("Kowalski", POLISH_FEMININE), "Kowalska");
        assert_eq!(inflect("Nowicki", POLISH_FEMININE), "Nowicka");
        assert_eq!(inflect("Zawadzki", POLISH_FEMININE), "Zawadzka");
        assert_eq!(inflect("Nowak", POLISH_FEMININE), "Nowak");
        assert_eq!(inflect("Kowalska", POLISH_MASCULINE), "Kowalski");
        assert_eq!(inflect("Kowalski", POLISH_MASCULINE), "Kowalski");
    }

    #[test]
    fn test_lithuanian() {
        assert_eq!(inflect("Kazlauskas", LITHUANIAN_DAUGHTER), "Kazlauskaitė");
        assert_eq!(inflect("Petraitis", LITHUANIAN_DAUGHTER), "Petraitytė");
        assert_eq!(inflect("Butkus", LITHUANIAN_DAUGHTER), "Butkutė");
        assert_eq!(inflect("Kazlauskas", LITHUANIAN_WIFE), "Kazlauskienė");
        assert_eq!(inflect("Butkus", LITHUANIAN_WIFE), "Butkuvienė");
        assert_eq!(inflect("Kazlauskaitė", LITHUANIAN_FATHER), "Kazlauskas");
        assert_eq!(inflect("Butkutė", LITHUANIAN_FATHER), "Butkus");
    }

    #[test]
    fn test_empty_surname() {
        assert_eq!(inflect("", POLISH_FEMININE), "");
    }
}
