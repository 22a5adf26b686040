use std::collections::BTreeSet;

use crate::foundation::error::{RoadmapError, RoadmapResult};

/// One lesson node of the roadmap.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    /// Stable identity, unique within a catalog.
    pub id: u32,
    /// Display title.
    #[serde(alias = "moduleTitle")]
    pub title: String,
    /// Short lesson summary.
    pub description: String,
    /// URL-safe lesson identifier, unique within a catalog.
    pub slug: String,
    /// Course the lesson belongs to.
    #[serde(default)]
    pub course_name: String,
    /// Traversal position; defaults to the position in the source list.
    #[serde(default)]
    pub order: Option<usize>,
}

/// Ordered, validated list of checkpoints.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Catalog {
    checkpoints: Vec<Checkpoint>,
}

impl Catalog {
    /// Sort by `order` (list position when absent) and validate identity.
    pub fn new(mut checkpoints: Vec<Checkpoint>) -> RoadmapResult<Self> {
        for (pos, c) in checkpoints.iter_mut().enumerate() {
            c.order.get_or_insert(pos);
        }
        checkpoints.sort_by_key(|c| c.order);

        let mut ids = BTreeSet::new();
        let mut slugs = BTreeSet::new();
        for (pos, c) in checkpoints.iter().enumerate() {
            if c.order != Some(pos) {
                return Err(RoadmapError::content(format!(
                    "checkpoint '{}' has order {:?}, expected {pos} (orders must be 0..n without gaps)",
                    c.slug, c.order
                )));
            }
            if !ids.insert(c.id) {
                return Err(RoadmapError::content(format!("duplicate checkpoint id {}", c.id)));
            }
            if c.slug.is_empty() || c.slug.contains('/') {
                return Err(RoadmapError::content(format!(
                    "checkpoint {} has an invalid slug '{}'",
                    c.id, c.slug
                )));
            }
            if !slugs.insert(c.slug.as_str()) {
                return Err(RoadmapError::content(format!("duplicate slug '{}'", c.slug)));
            }
        }
        Ok(Self { checkpoints })
    }

    /// Parse a JSON array of checkpoints.
    pub fn from_json(s: &str) -> RoadmapResult<Self> {
        let checkpoints: Vec<Checkpoint> = serde_json::from_str(s)?;
        Self::new(checkpoints)
    }

    /// The bundled five-module Python course.
    pub fn builtin() -> Self {
        let course = "Python Course";
        let entries = [
            (
                "Introduction to Python",
                "python-intro",
                "Learn the basics of Python syntax, variables, and data types.",
            ),
            (
                "Data Structures in Python",
                "python-data-structures",
                "Work with lists, dictionaries, sets, and more to handle data effectively.",
            ),
            (
                "Object-Oriented Programming",
                "python-oop",
                "Learn how to structure your code using classes and objects in Python.",
            ),
            (
                "Python for Data Analysis",
                "python-data-analysis",
                "Use popular libraries like NumPy and Pandas to analyze and visualize data.",
            ),
            (
                "Advanced Topics & Best Practices",
                "python-advanced",
                "Explore advanced Python features and recommended practices for production.",
            ),
        ];
        let checkpoints = entries
            .iter()
            .zip(1u32..)
            .enumerate()
            .map(|(order, (&(title, slug, description), id))| Checkpoint {
                id,
                title: title.to_string(),
                description: description.to_string(),
                slug: slug.to_string(),
                course_name: course.to_string(),
                order: Some(order),
            })
            .collect();
        Self { checkpoints }
    }

    /// Number of checkpoints.
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// `true` for a catalog without checkpoints.
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Checkpoint at traversal position `index`.
    pub fn get(&self, index: usize) -> Option<&Checkpoint> {
        self.checkpoints.get(index)
    }

    /// Checkpoints in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Checkpoint> {
        self.checkpoints.iter()
    }

    /// Checkpoint whose slug is `slug`.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Checkpoint> {
        self.checkpoints.iter().find(|c| c.slug == slug)
    }

    /// Traversal position of the checkpoint whose slug is `slug`.
    pub fn index_of_slug(&self, slug: &str) -> Option<usize> {
        self.checkpoints.iter().position(|c| c.slug == slug)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Checkpoint;
    type IntoIter = std::slice::Iter<'a, Checkpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/catalog.rs"]
mod tests;
