//! Name-part extraction.
//!
//! GEDCOM writes the surname of a NAME value between slashes:
//! `John /de White/`. The first slash pair is the *surname group*. Inside
//! it, a run of leading prefix particles (`de`, `van der`, `de la`) is
//! separated from the surname proper. Which tokens count as particles is set
//! by a [`ParticleRule`]; the last token of the group is always surname.
//!
//! ```text
//! John /de la Cruz/
//!      ^^^^^^^^^^^^   full
//!       ^^^^^         prefix
//!             ^^^^    surname
//! ```

use gedcom_model::{NameParts, NameSource, ParticleRule};

/// The preferred NAME text of an individual, or `""` when there is none.
pub fn extract_name<'a, S>(individual: Option<&'a S>) -> &'a str
where
    S: NameSource + ?Sized,
{
    individual.and_then(S::preferred_name).unwrap_or("")
}

/// Surname-group grammar with a configurable particle rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameGrammar {
    particles: ParticleRule,
}

impl NameGrammar {
    pub fn new(particles: ParticleRule) -> Self {
        Self { particles }
    }

    pub fn particles(&self) -> &ParticleRule {
        &self.particles
    }

    /// Split the first surname group of `text` into prefix and surname.
    ///
    /// Returns `None` when `text` has no complete slash pair.
    pub fn parts(&self, text: &str) -> Option<NameParts> {
        let (full, inner) = first_group(text)?;
        let tokens: Vec<&str> = inner.split_whitespace().collect();

        let candidates = tokens.len().saturating_sub(1);
        let prefix_len = tokens[..candidates]
            .iter()
            .take_while(|token| self.particles.is_particle(token))
            .count();

        Some(NameParts::new(
            full,
            tokens[..prefix_len].join(" "),
            tokens[prefix_len..].join(" "),
        ))
    }
}

/// Returns `(group with slashes, group without slashes)` for the first pair.
fn first_group(text: &str) -> Option<(&str, &str)> {
    let open = text.find('/')?;
    let after = &text[open + 1..];
    let close = after.find('/')?;
    Some((&text[open..open + close + 2], &after[..close]))
}

/// Every surname group of `text`, trimmed, in order (`/Garcia/ /Lopez/`).
pub fn surname_groups(text: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = text;
    while let Some((full, inner)) = first_group(rest) {
        groups.push(inner.trim());
        let consumed = rest.find(full).map_or(rest.len(), |idx| idx + full.len());
        rest = &rest[consumed..];
    }
    groups
}

/// The first given name: the first word before the surname group.
pub fn given_name(text: &str) -> Option<&str> {
    text.split('/').next()?.split_whitespace().next()
}
