use std::collections::BTreeSet;
use std::fmt;

pub const WORLD: &str = "world";
pub const WORLD_IPV4: &str = "world-ipv4";
pub const WORLD_IPV6: &str = "world-ipv6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LabelSource {
    Cidr,
    Reserved,
}

impl LabelSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSource::Cidr => "cidr",
            LabelSource::Reserved => "reserved",
        }
    }
}

/// One symbolic fact about a prefix, rendered as `source:key` or
/// `source:key=value`. Identity is all three fields.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label {
    pub source: LabelSource,
    pub key: String,
    pub value: Option<String>,
}

impl Label {
    pub fn cidr(key: String) -> Label {
        Label {
            source: LabelSource::Cidr,
            key,
            value: None,
        }
    }

    pub fn reserved(key: &str) -> Label {
        Label {
            source: LabelSource::Reserved,
            key: key.to_string(),
            value: None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}={}", self.source.as_str(), self.key, value),
            None => write!(f, "{}:{}", self.source.as_str(), self.key),
        }
    }
}

/// Ordered set of labels. Merging the chains of several prefixes collapses
/// shared ancestors and duplicate reserved markers to one entry each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: BTreeSet<Label>,
}

impl LabelSet {
    pub fn new() -> LabelSet {
        LabelSet {
            labels: BTreeSet::new(),
        }
    }

    pub fn insert(&mut self, label: Label) -> bool {
        self.labels.insert(label)
    }

    pub fn merge<I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = Label>,
    {
        self.labels.extend(labels);
    }

    pub fn contains(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> LabelSet {
        LabelSet {
            labels: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for label in &self.labels {
            write!(f, "{}{}", sep, label)?;
            sep = ",";
        }
        Ok(())
    }
}
