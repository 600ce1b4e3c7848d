use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub spec: &'a str,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct JobPosting {
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
}

impl JobPosting {
    /// Title to display, `None` when the server sent no title or an empty one.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleResults {
    pub role: String,
    pub postings: Vec<JobPosting>,
}

/// Postings grouped by role, in the order the server listed the roles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults(pub Vec<RoleResults>);

impl SearchResults {
    pub fn iter(&self) -> impl Iterator<Item = &RoleResults> {
        self.0.iter()
    }

    pub fn total_postings(&self) -> usize {
        self.0.iter().map(|r| r.postings.len()).sum()
    }
}

// A plain map type would lose the server's role order, so the object is
// walked entry by entry.
impl<'de> Deserialize<'de> for SearchResults {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RolesVisitor;

        impl<'de> Visitor<'de> for RolesVisitor {
            type Value = SearchResults;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping role names to lists of postings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut roles = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((role, postings)) = map.next_entry::<String, Vec<JobPosting>>()? {
                    roles.push(RoleResults { role, postings });
                }
                Ok(SearchResults(roles))
            }
        }

        deserializer.deserialize_map(RolesVisitor)
    }
}
