use serde::{Deserialize, Serialize};

/// Registered participants, unique by display name, kept in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    members: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Roster { members: Vec::new() }
    }

    /// Adds a member. Returns `false` when the name is already registered.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.members.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    pub fn names(&self) -> &[String] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for name in iter {
            roster.insert(name);
        }
        roster
    }
}

impl From<Vec<String>> for Roster {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.members
    }
}
