use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Capacity in which a person is credited on a filmwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Actor,
    Director,
    Writer,
}

impl RoleKind {
    pub const ALL: [RoleKind; 3] = [RoleKind::Actor, RoleKind::Director, RoleKind::Writer];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Actor => "actor",
            RoleKind::Director => "director",
            RoleKind::Writer => "writer",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lightweight person reference embedded in filmwork documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: String,
    pub name: String,
}

/// Roles and filmworks derived from the filmworks that credit a person
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonCredits {
    pub roles: BTreeSet<RoleKind>,
    /// Engine-return order, no duplicates
    pub filmwork_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub roles: BTreeSet<RoleKind>,
    pub filmwork_ids: Vec<String>,
}

impl Person {
    pub fn new(id: String, name: String, credits: PersonCredits) -> Self {
        Self {
            id,
            name,
            roles: credits.roles,
            filmwork_ids: credits.filmwork_ids,
        }
    }

    pub fn has_role(&self, role: RoleKind) -> bool {
        self.roles.contains(&role)
    }
}
