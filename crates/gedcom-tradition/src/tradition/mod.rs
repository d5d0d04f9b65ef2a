//! Surname traditions.
//!
//! A [`SurnameTradition`] decides which NAME records a new relative receives:
//! a child of a known father and mother, a parent of a known child, or a
//! spouse of a known individual. Each tradition is a [`TraditionKind`]
//! dispatched to small helper modules; a derivation that cannot proceed
//! (missing relative, no surname group, a sex the tradition does not
//! derive for) yields the default empty name.

mod iberian;
mod inflected;
mod lineal;
mod patronymic;

use gedcom_model::{EngineConfig, LabelProvider, NameRecord, NameSource, Sex, TraditionKind};
use tracing::debug;

use crate::extract::{NameGrammar, extract_name};

/// Empty given name and empty surname.
pub const DEFAULT_NAME: &str = "//";

const NAME_DOMAIN: &str = "surname-tradition";
const DESCRIPTION_DOMAIN: &str = "surname-tradition.description";

/// A configured surname tradition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurnameTradition {
    kind: TraditionKind,
    grammar: NameGrammar,
}

impl SurnameTradition {
    /// Tradition with the default particle rule.
    pub fn new(kind: TraditionKind) -> Self {
        Self::with_grammar(kind, NameGrammar::default())
    }

    pub fn with_grammar(kind: TraditionKind, grammar: NameGrammar) -> Self {
        Self { kind, grammar }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_grammar(config.tradition, NameGrammar::new(config.particles.clone()))
    }

    /// Every tradition, in display order.
    pub fn all() -> Vec<SurnameTradition> {
        TraditionKind::ALL.into_iter().map(Self::new).collect()
    }

    pub fn kind(&self) -> TraditionKind {
        self.kind
    }

    pub fn grammar(&self) -> &NameGrammar {
        &self.grammar
    }

    /// Display name of the tradition.
    pub fn name(&self, labels: &dyn LabelProvider) -> String {
        let english = match self.kind {
            TraditionKind::None => "none",
            TraditionKind::Patrilineal => "patrilineal",
            TraditionKind::Matrilineal => "matrilineal",
            TraditionKind::Paternal => "paternal",
            TraditionKind::Patronymic => "patronymic",
            TraditionKind::Spanish => "Spanish",
            TraditionKind::Portuguese => "Portuguese",
            TraditionKind::Polish => "Polish",
            TraditionKind::Lithuanian => "Lithuanian",
        };
        labels.label(NAME_DOMAIN, self.kind.key(), english)
    }

    /// One-sentence summary of the tradition.
    pub fn description(&self, labels: &dyn LabelProvider) -> String {
        let english = match self.kind {
            TraditionKind::None => "Surnames are not inherited from relatives.",
            TraditionKind::Patrilineal => "Children take their father’s surname.",
            TraditionKind::Matrilineal => "Children take their mother’s surname.",
            TraditionKind::Paternal => {
                "Children take their father’s surname. Wives take their husband’s surname."
            }
            TraditionKind::Patronymic => {
                "Children take a patronym instead of a surname."
            }
            TraditionKind::Spanish => {
                "Children take one surname from the father and one surname from the mother."
            }
            TraditionKind::Portuguese => {
                "Children take one surname from the mother and one surname from the father."
            }
            TraditionKind::Polish => {
                "Children take their father’s surname. Wives take their husband’s surname. \
                 Surnames are inflected to indicate an individual’s sex."
            }
            TraditionKind::Lithuanian => {
                "Children take their father’s surname. Wives take their husband’s surname. \
                 Surnames are inflected to indicate an individual’s sex and marital status."
            }
        };
        labels.label(DESCRIPTION_DOMAIN, self.kind.key(), english)
    }

    /// The NAME value used when nothing can be derived.
    pub fn default_name(&self) -> &'static str {
        DEFAULT_NAME
    }

    /// NAME records for a new child of `father` and `mother`.
    pub fn new_child_records<S>(
        &self,
        father: Option<&S>,
        mother: Option<&S>,
        sex: Sex,
    ) -> Vec<NameRecord>
    where
        S: NameSource + ?Sized,
    {
        let father = extract_name(father);
        let mother = extract_name(mother);
        let grammar = &self.grammar;

        let derived = match self.kind {
            TraditionKind::None => None,
            TraditionKind::Patrilineal | TraditionKind::Paternal => {
                lineal::inherit(grammar, father)
            }
            // Without a usable mother's surname, fall back to the father's.
            TraditionKind::Matrilineal => lineal::inherit(grammar, mother)
                .or_else(|| lineal::inherit(grammar, father)),
            TraditionKind::Patronymic => patronymic::child(father, sex),
            TraditionKind::Spanish => iberian::spanish_child(father, mother),
            TraditionKind::Portuguese => iberian::portuguese_child(father, mother),
            TraditionKind::Polish => inflected::polish_child(grammar, father, sex),
            TraditionKind::Lithuanian => inflected::lithuanian_child(grammar, father, sex),
        };
        self.or_default(derived, "child", sex)
    }

    /// NAME records for a new parent of `child`, where `sex` is the parent's.
    pub fn new_parent_records<S>(&self, child: &S, sex: Sex) -> Vec<NameRecord>
    where
        S: NameSource + ?Sized,
    {
        let child = extract_name(Some(child));
        let grammar = &self.grammar;

        let derived = match (self.kind, sex) {
            (TraditionKind::Patrilineal | TraditionKind::Paternal, Sex::Male) => {
                lineal::inherit(grammar, child)
            }
            (TraditionKind::Matrilineal, Sex::Female) => lineal::inherit(grammar, child),
            (TraditionKind::Paternal, Sex::Female) => lineal::marry(grammar, child),
            (TraditionKind::Patronymic, Sex::Male) => patronymic::father(grammar, child),
            (TraditionKind::Spanish, _) => iberian::spanish_parent(child, sex),
            (TraditionKind::Portuguese, _) => iberian::portuguese_parent(child, sex),
            (TraditionKind::Polish, Sex::Male) => inflected::polish_father(grammar, child),
            (TraditionKind::Polish, Sex::Female) => inflected::polish_wife(grammar, child),
            (TraditionKind::Lithuanian, Sex::Male) => {
                inflected::lithuanian_father(grammar, child)
            }
            (TraditionKind::Lithuanian, Sex::Female) => inflected::lithuanian_wife(grammar, child),
            _ => None,
        };
        self.or_default(derived, "parent", sex)
    }

    /// NAME records for a new spouse of `individual`, where `sex` is the
    /// spouse's.
    pub fn new_spouse_records<S>(&self, individual: &S, sex: Sex) -> Vec<NameRecord>
    where
        S: NameSource + ?Sized,
    {
        let individual = extract_name(Some(individual));
        let grammar = &self.grammar;

        let derived = match (self.kind, sex) {
            (TraditionKind::Paternal, Sex::Female) => lineal::marry(grammar, individual),
            (TraditionKind::Polish, Sex::Female) => inflected::polish_wife(grammar, individual),
            (TraditionKind::Lithuanian, Sex::Female) => {
                inflected::lithuanian_wife(grammar, individual)
            }
            _ => None,
        };
        self.or_default(derived, "spouse", sex)
    }

    /// Rendered [`new_child_records`](Self::new_child_records).
    pub fn new_child_names<S>(&self, father: Option<&S>, mother: Option<&S>, sex: Sex) -> Vec<String>
    where
        S: NameSource + ?Sized,
    {
        render_all(self.new_child_records(father, mother, sex))
    }

    /// Rendered [`new_parent_records`](Self::new_parent_records).
    pub fn new_parent_names<S>(&self, child: &S, sex: Sex) -> Vec<String>
    where
        S: NameSource + ?Sized,
    {
        render_all(self.new_parent_records(child, sex))
    }

    /// Rendered [`new_spouse_records`](Self::new_spouse_records).
    pub fn new_spouse_names<S>(&self, individual: &S, sex: Sex) -> Vec<String>
    where
        S: NameSource + ?Sized,
    {
        render_all(self.new_spouse_records(individual, sex))
    }

    fn or_default(
        &self,
        derived: Option<Vec<NameRecord>>,
        relative: &'static str,
        sex: Sex,
    ) -> Vec<NameRecord> {
        derived.unwrap_or_else(|| {
            debug!(
                tradition = %self.kind,
                relative,
                sex = %sex,
                "no name derived, using default name"
            );
            vec![NameRecord::birth(DEFAULT_NAME)]
        })
    }
}

fn render_all(records: Vec<NameRecord>) -> Vec<String> {
    records.iter().map(NameRecord::render).collect()
}
