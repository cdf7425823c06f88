use crate::engine::social::InMemorySocialGraph;

/// Builds in-memory graphs; people are created on first mention.
pub struct SocialGraphFactory {
    people: Vec<String>,
    friendships: Vec<(String, String)>,
    statuses: Vec<(String, String, u64)>,
}

impl SocialGraphFactory {
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            friendships: Vec::new(),
            statuses: Vec::new(),
        }
    }

    pub fn with_person(mut self, name: &str) -> Self {
        if !self.people.iter().any(|p| p == name) {
            self.people.push(name.to_string());
        }
        self
    }

    pub fn with_friendship(self, a: &str, b: &str) -> Self {
        let mut this = self.with_person(a).with_person(b);
        this.friendships.push((a.to_string(), b.to_string()));
        this
    }

    pub fn with_statuses(self, name: &str, dated: &[(&str, u64)]) -> Self {
        let mut this = self.with_person(name);
        for (text, date) in dated {
            this.statuses
                .push((name.to_string(), text.to_string(), *date));
        }
        this
    }

    pub fn create(self) -> InMemorySocialGraph {
        let mut graph = InMemorySocialGraph::new();
        for name in &self.people {
            graph.add_person(name).unwrap();
        }
        for (a, b) in &self.friendships {
            graph.befriend(a, b).unwrap();
        }
        for (name, text, date) in &self.statuses {
            graph.add_status(name, text, *date).unwrap();
        }
        graph
    }

    /// alice is friends with bob, carol and dave; dave never posted.
    pub fn sample() -> InMemorySocialGraph {
        Self::new()
            .with_friendship("alice", "bob")
            .with_friendship("alice", "carol")
            .with_friendship("alice", "dave")
            .with_friendship("bob", "erin")
            .with_statuses("alice", &[("alice wakes up", 2)])
            .with_statuses("bob", &[("bob 1", 1), ("bob 5", 5), ("bob 9", 9)])
            .with_statuses("carol", &[("carol 2", 2), ("carol 3", 3)])
            .with_statuses("erin", &[("erin 4", 4)])
            .create()
    }
}
