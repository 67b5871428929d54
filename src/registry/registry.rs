use std::collections::BTreeMap;

use tracing::trace;

use crate::Position;

/// Everything the registry knows about one identifier name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierEntry {
    /// 1-based, in order of first encounter
    pub sequence: usize,
    pub name: String,
    pub first_occurrence: Position,
    /// Never empty; the first element is `first_occurrence`
    pub occurrences: Vec<Position>,
}

impl IdentifierEntry {
    pub fn occurrence_count(&self) -> usize {
        self.occurrences.len()
    }
}

/// Read-only view of an entry handed out by `IdentifierRegistry::snapshot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierSummary {
    pub sequence: usize,
    pub name: String,
    pub first_occurrence: (usize, usize),
    pub occurrence_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct IdentifierRegistry {
    entries: BTreeMap<String, IdentifierEntry>,
    last_sequence: usize,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        IdentifierRegistry::default()
    }

    /// Records an occurrence of `name` at `position`.
    ///
    /// Unseen names get the next sequence number. Known names only grow their
    /// occurrence list.
    pub fn add(&mut self, name: &str, position: Position) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.occurrences.push(position);
            trace!(identifier = name, %position, count = entry.occurrences.len(), "identifier seen again");
            return;
        }

        self.last_sequence += 1;
        trace!(identifier = name, %position, sequence = self.last_sequence, "new identifier");
        self.entries.insert(
            String::from(name),
            IdentifierEntry {
                sequence: self.last_sequence,
                name: String::from(name),
                first_occurrence: position,
                occurrences: vec![position],
            },
        );
    }

    pub fn lookup(&self, name: &str) -> Option<&IdentifierEntry> {
        self.entries.get(name)
    }

    /// Entries ordered by name.
    pub fn snapshot(&self) -> Vec<IdentifierSummary> {
        self.entries
            .values()
            .map(|entry| IdentifierSummary {
                sequence: entry.sequence,
                name: entry.name.clone(),
                first_occurrence: entry.first_occurrence.row_column(),
                occurrence_count: entry.occurrence_count(),
            })
            .collect()
    }

    /// Entries ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &IdentifierEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
