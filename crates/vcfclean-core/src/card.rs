/// One content line of a vCard, split at the first colon.
///
/// `name` keeps the original case for output; comparisons are
/// case-insensitive. Group prefixes (`item1.TEL`) stay part of the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub params: Vec<String>,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Serialized content line, `NAME:value` or `NAME;P1;P2:value`.
    pub fn to_line(&self) -> String {
        if self.params.is_empty() {
            format!("{}:{}", self.name, self.value)
        } else {
            format!("{};{}:{}", self.name, self.params.join(";"), self.value)
        }
    }

    /// Canonical form used when comparing properties across cards.
    pub fn match_key(&self) -> String {
        let mut key = self.name.to_ascii_uppercase();
        for param in &self.params {
            key.push(';');
            key.push_str(&param.to_ascii_uppercase());
        }
        key.push(':');
        key.push_str(self.value.trim());
        key
    }
}

/// One `BEGIN:VCARD`..`END:VCARD` block. Property order is insertion
/// order and survives cleaning, merging and writing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub properties: Vec<Property>,
}

impl Card {
    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// First value of the named field, if any.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|prop| prop.is(name))
            .map(|prop| prop.value.as_str())
    }

    /// All values of the named field, in stored order.
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|prop| prop.is(name))
            .map(|prop| prop.value.as_str())
            .collect()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.first_value("FN")
    }
}
