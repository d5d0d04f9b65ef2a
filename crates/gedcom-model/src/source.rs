//! Access to an individual's NAME text.

/// Anything that can supply an individual's preferred NAME value.
///
/// Selecting among several NAME facts is the implementor's job; the engine
/// only consumes the chosen text.
pub trait NameSource {
    /// The preferred NAME value, e.g. `John /White/`.
    fn preferred_name(&self) -> Option<&str>;
}

impl NameSource for str {
    fn preferred_name(&self) -> Option<&str> {
        Some(self)
    }
}

impl NameSource for String {
    fn preferred_name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

/// An individual's NAME values in preference order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndividualNames {
    pub names: Vec<String>,
}

impl IndividualNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl NameSource for IndividualNames {
    fn preferred_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}
