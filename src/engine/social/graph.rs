use super::status_update::StatusUpdate;
use crate::engine::errors::GraphError;
use crate::engine::merge::SortOrder;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Single-pass stream of one person's status updates.
pub type StatusStream<'a> = Box<dyn Iterator<Item = StatusUpdate> + 'a>;

/// Read access to people, friendships and status updates.
///
/// Implementations must return status streams sorted by date in the
/// requested order. Updates sharing a date keep their posting order in both
/// directions.
pub trait SocialGraph {
    fn contains(&self, name: &str) -> bool;

    /// Names of the person's friends, in declaration order.
    fn friends(&self, name: &str) -> Result<Vec<String>, GraphError>;

    fn status_updates(&self, name: &str, order: SortOrder) -> Result<StatusStream<'_>, GraphError>;
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub friends: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<StatusUpdate>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphDocument {
    people: Vec<Person>,
}

/// Social graph held entirely in memory, loadable from a JSON document of
/// the form `{"people": [{"name", "friends", "statuses"}]}`.
#[derive(Debug, Default)]
pub struct InMemorySocialGraph {
    people: HashMap<String, Person>,
}

impl InMemorySocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let graph = Self::from_json_str(&raw)?;
        info!(
            target: "socnet_feed::graph",
            path = %path.display(),
            people = graph.len(),
            "Loaded social graph"
        );
        Ok(graph)
    }

    /// Parses a graph document. Statuses are sorted by date and missing
    /// authors are filled in; every friend must name a known person.
    pub fn from_json_str(raw: &str) -> Result<Self, GraphError> {
        let doc: GraphDocument = serde_json::from_str(raw)?;

        let mut names = HashSet::with_capacity(doc.people.len());
        for person in &doc.people {
            if !names.insert(person.name.as_str()) {
                return Err(GraphError::DuplicatePerson(person.name.clone()));
            }
        }
        // first dangling name in document order
        if let Some(missing) = doc
            .people
            .iter()
            .flat_map(|p| p.friends.iter())
            .find(|f| !names.contains(f.as_str()))
        {
            return Err(GraphError::UnknownPerson(missing.clone()));
        }

        let mut graph = Self::new();
        for mut person in doc.people {
            for status in person.statuses.iter_mut() {
                if status.author.is_empty() {
                    status.author = person.name.clone();
                }
            }
            person.statuses.sort_by_key(|s| s.date);
            graph.people.insert(person.name.clone(), person);
        }

        debug!(
            target: "socnet_feed::graph",
            people = graph.people.len(),
            "Parsed graph document"
        );
        Ok(graph)
    }

    pub fn add_person(&mut self, name: &str) -> Result<(), GraphError> {
        if self.people.contains_key(name) {
            return Err(GraphError::DuplicatePerson(name.to_string()));
        }
        self.people.insert(name.to_string(), Person::new(name));
        Ok(())
    }

    /// Records a friendship in both directions. Repeated calls are no-ops.
    pub fn befriend(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        for name in [a, b] {
            if !self.people.contains_key(name) {
                return Err(GraphError::UnknownPerson(name.to_string()));
            }
        }
        for (from, to) in [(a, b), (b, a)] {
            if from == to {
                continue;
            }
            if let Some(person) = self.people.get_mut(from) {
                if !person.friends.iter().any(|f| f == to) {
                    person.friends.push(to.to_string());
                }
            }
        }
        Ok(())
    }

    /// Posts a status, keeping the person's statuses sorted by date. A status
    /// dated equal to existing ones lands after them.
    pub fn add_status(&mut self, name: &str, text: &str, date: u64) -> Result<(), GraphError> {
        let person = self
            .people
            .get_mut(name)
            .ok_or_else(|| GraphError::UnknownPerson(name.to_string()))?;
        let at = person.statuses.partition_point(|s| s.date <= date);
        person
            .statuses
            .insert(at, StatusUpdate::new(name, text, date));
        Ok(())
    }

    pub fn person(&self, name: &str) -> Result<&Person, GraphError> {
        self.people
            .get(name)
            .ok_or_else(|| GraphError::UnknownPerson(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl SocialGraph for InMemorySocialGraph {
    fn contains(&self, name: &str) -> bool {
        self.people.contains_key(name)
    }

    fn friends(&self, name: &str) -> Result<Vec<String>, GraphError> {
        Ok(self.person(name)?.friends.clone())
    }

    fn status_updates(&self, name: &str, order: SortOrder) -> Result<StatusStream<'_>, GraphError> {
        let statuses = &self.person(name)?.statuses;
        let stream: StatusStream<'_> = match order {
            SortOrder::Ascending => Box::new(statuses.iter().cloned()),
            // newest date first; same-date updates keep their posting order
            SortOrder::Descending => Box::new(
                statuses
                    .chunk_by(|a, b| a.date == b.date)
                    .rev()
                    .flatten()
                    .cloned(),
            ),
        };
        Ok(stream)
    }
}
