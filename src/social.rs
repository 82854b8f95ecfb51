use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// Undirected friendship graph, independent of the scheduling engine.
///
/// People are keyed by name; adding a friendship records it in both
/// directions so the relation stays symmetric.
#[derive(Debug, Clone, Default)]
pub struct FriendNetwork {
    friends: HashMap<String, BTreeSet<String>>,
}

impl FriendNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_friendship(&mut self, a: impl Into<String>, b: impl Into<String>) {
        let a = a.into();
        let b = b.into();
        self.friends.entry(a.clone()).or_default().insert(b.clone());
        self.friends.entry(b).or_default().insert(a);
    }

    pub fn friends_of(&self, person: &str) -> BTreeSet<String> {
        self.friends.get(person).cloned().unwrap_or_default()
    }

    /// Friends shared by both people; empty when either is unknown.
    pub fn common_friends(&self, a: &str, b: &str) -> BTreeSet<String> {
        match (self.friends.get(a), self.friends.get(b)) {
            (Some(fa), Some(fb)) => fa.intersection(fb).cloned().collect(),
            _ => BTreeSet::new(),
        }
    }

    /// Number of edges on the shortest path between two people.
    ///
    /// Direct friends are `Some(1)`, a friend of a friend `Some(2)`, the
    /// same person twice `Some(0)`. `None` means no connection exists.
    pub fn connection_distance(&self, from: &str, to: &str) -> Option<usize> {
        if from == to {
            return self.friends.contains_key(from).then_some(0);
        }
        if !self.friends.contains_key(from) || !self.friends.contains_key(to) {
            return None;
        }

        let mut visited: HashSet<&str> = HashSet::from([from]);
        let mut queue: VecDeque<(&str, usize)> = VecDeque::from([(from, 0)]);
        while let Some((current, depth)) = queue.pop_front() {
            for neighbor in &self.friends[current] {
                if neighbor == to {
                    return Some(depth + 1);
                }
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FriendNetwork {
        let mut network = FriendNetwork::new();
        network.add_friendship("Alice", "Bob");
        network.add_friendship("Alice", "Carol");
        network.add_friendship("Bob", "Dave");
        network.add_friendship("Bob", "Janice");
        network.add_friendship("Carol", "Eve");
        network
    }

    #[test]
    fn common_friends_is_the_set_intersection() {
        let mut network = sample();
        network.add_friendship("Carol", "Bob");
        let common = network.common_friends("Alice", "Dave");
        assert_eq!(common, BTreeSet::from(["Bob".to_string()]));
    }

    #[test]
    fn connection_distance_counts_edges() {
        let network = sample();
        assert_eq!(network.connection_distance("Alice", "Bob"), Some(1));
        assert_eq!(network.connection_distance("Alice", "Janice"), Some(2));
        assert_eq!(network.connection_distance("Janice", "Eve"), Some(4));
        assert_eq!(network.connection_distance("Alice", "Alice"), Some(0));
    }

    #[test]
    fn unreachable_people_have_no_distance() {
        let mut network = sample();
        network.add_friendship("Zed", "Yara");
        assert_eq!(network.connection_distance("Alice", "Zed"), None);
        assert_eq!(network.connection_distance("Alice", "Nobody"), None);
    }
}
