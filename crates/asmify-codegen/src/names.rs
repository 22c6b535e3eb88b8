//! Identifier allocation for declared entities.

use std::collections::{HashMap, HashSet};

use asmify_model::utils::sanitize_identifier;
use indexmap::IndexMap;

/// Identity of a declared entity within the module graph.
///
/// Indices are declaration-order positions: `Method(2, 0)` is the first
/// method of the third type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MemberId {
    Type(usize),
    Method(usize, usize),
    Field(usize, usize),
    Event(usize, usize),
    Property(usize, usize),
}

impl MemberId {
    /// One-letter kind tag. Events and properties share a tag.
    fn tag(self) -> &'static str {
        match self {
            Self::Type(_) => "t",
            Self::Method(..) => "m",
            Self::Field(..) => "f",
            Self::Event(..) | Self::Property(..) => "e",
        }
    }
}

/// Pass-scoped table assigning each entity a unique script identifier.
///
/// Base names are `{tag}_{sanitized}`; entities whose base collides with
/// an already-issued name get a numeric suffix from a per-base counter
/// that lives for the whole pass, so suffixes never restart.
#[derive(Default, Debug)]
pub struct NameTable {
    assigned: IndexMap<MemberId, String>,
    used: HashSet<String>,
    dup_counters: HashMap<String, u32>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for an entity, allocating on first use.
    ///
    /// Idempotent: a later call with the same id returns the name issued
    /// the first time, regardless of `raw_name`.
    pub fn allocate(&mut self, id: MemberId, raw_name: &str) -> String {
        if let Some(existing) = self.assigned.get(&id) {
            return existing.clone();
        }

        let base = format!("{}_{}", id.tag(), sanitize_identifier(raw_name));
        let name = if self.used.contains(&base) {
            let counter = self.dup_counters.entry(base.clone()).or_insert(0);
            loop {
                *counter += 1;
                let candidate = format!("{base}_{counter}");
                if !self.used.contains(&candidate) {
                    break candidate;
                }
            }
        } else {
            base
        };

        self.used.insert(name.clone());
        self.assigned.insert(id, name.clone());
        name
    }
}
