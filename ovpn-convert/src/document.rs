//! The configuration document: options and inline blocks.
//!
//! JSON object key order is part of the output contract (options and
//! inline tags appear in encounter order), so the maps here are
//! vectors of pairs with handwritten [`Serialize`] impls rather than
//! hash maps.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use ovpn_schema::InlineKind;

/// One occurrence of an option with its raw string arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub args: Vec<String>,
}

/// Insertion-ordered map from option name to its occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsMap {
    entries: Vec<(String, Vec<Occurrence>)>,
}

impl OptionsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an occurrence under `name`, creating the entry on first
    /// use.
    pub fn push_occurrence(&mut self, name: &str, occurrence: Occurrence) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, list)) => list.push(occurrence),
            None => self.entries.push((name.to_string(), vec![occurrence])),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Occurrence]> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, list)| list.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for OptionsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, occurrences) in &self.entries {
            map.serialize_entry(name, occurrences)?;
        }
        map.end()
    }
}

/// Content collected for one inline tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InlineData {
    /// Accumulated text bodies, one string per block.
    Plain(Vec<String>),
    /// Nested option maps, one per block.
    Options(Vec<OptionsMap>),
}

/// One inline tag with its kind and collected data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEntry {
    pub kind: InlineKind,
    pub data: InlineData,
}

impl InlineEntry {
    fn new(kind: InlineKind) -> Self {
        let data = match kind {
            InlineKind::Plain => InlineData::Plain(Vec::new()),
            InlineKind::Options => InlineData::Options(Vec::new()),
        };
        Self { kind, data }
    }
}

impl Serialize for InlineEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.kind.as_str())?;
        map.serialize_entry("data", &self.data)?;
        map.end()
    }
}

/// Insertion-ordered map from inline tag name to its entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlinesMap {
    entries: Vec<(String, InlineEntry)>,
}

impl InlinesMap {
    /// Fetch the entry for `tag`, creating it with the given kind on
    /// first use. A re-opened tag keeps its original entry and data
    /// array.
    pub fn entry_or_insert(&mut self, tag: &str, kind: InlineKind) -> &mut InlineEntry {
        if let Some(index) = self.entries.iter().position(|(key, _)| key == tag) {
            return &mut self.entries[index].1;
        }
        self.entries.push((tag.to_string(), InlineEntry::new(kind)));
        &mut self
            .entries
            .last_mut()
            .expect("entry just pushed")
            .1
    }

    pub fn get(&self, tag: &str) -> Option<&InlineEntry> {
        self.entries
            .iter()
            .find(|(key, _)| key == tag)
            .map(|(_, entry)| entry)
    }

    pub fn get_mut(&mut self, tag: &str) -> Option<&mut InlineEntry> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == tag)
            .map(|(_, entry)| entry)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for InlinesMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (tag, entry) in &self.entries {
            map.serialize_entry(tag, entry)?;
        }
        map.end()
    }
}

/// The full configuration document built by one parse run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigDocument {
    pub inlines: InlinesMap,
    pub options: OptionsMap,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use ovpn_schema::InlineKind;

    use super::{ConfigDocument, InlineData, Occurrence, OptionsMap};

    fn occ(args: &[&str]) -> Occurrence {
        Occurrence {
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn occurrences_group_under_one_key_in_first_seen_order() {
        let mut options = OptionsMap::new();
        options.push_occurrence("remote", occ(&["a", "1194"]));
        options.push_occurrence("port", occ(&["1194"]));
        options.push_occurrence("remote", occ(&["b", "443"]));

        assert_eq!(options.len(), 2);
        assert_eq!(options.get("remote").map(<[_]>::len), Some(2));
        assert_eq!(
            serde_json::to_value(&options).expect("serialize"),
            json!({
                "remote": [ { "args": ["a", "1194"] }, { "args": ["b", "443"] } ],
                "port": [ { "args": ["1194"] } ],
            })
        );
    }

    #[test]
    fn inline_entries_serialize_with_type_and_data() {
        let mut doc = ConfigDocument::default();
        let entry = doc.inlines.entry_or_insert("ca", InlineKind::Plain);
        match &mut entry.data {
            InlineData::Plain(bodies) => bodies.push("CERT".to_string()),
            InlineData::Options(_) => unreachable!(),
        }

        assert_eq!(
            serde_json::to_value(&doc).expect("serialize"),
            json!({
                "inlines": { "ca": { "type": "plain", "data": ["CERT"] } },
                "options": {},
            })
        );
    }

    #[test]
    fn reopened_tag_reuses_its_entry() {
        let mut doc = ConfigDocument::default();
        for body in ["ONE", "TWO"] {
            let entry = doc.inlines.entry_or_insert("cert", InlineKind::Plain);
            match &mut entry.data {
                InlineData::Plain(bodies) => bodies.push(body.to_string()),
                InlineData::Options(_) => unreachable!(),
            }
        }

        let entry = doc.inlines.get("cert").expect("entry");
        assert_eq!(
            entry.data,
            InlineData::Plain(vec!["ONE".to_string(), "TWO".to_string()])
        );
    }
}
