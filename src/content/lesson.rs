use crate::content::catalog::Catalog;

/// Lesson detail view model.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LessonView {
    /// A checkpoint with the requested slug exists.
    Found {
        /// Course the lesson belongs to.
        course_name: String,
        /// Lesson title.
        title: String,
        /// Lesson summary.
        description: String,
    },
    /// No checkpoint has the requested slug.
    NotFound {
        /// Slug that matched nothing.
        slug: String,
    },
}

impl LessonView {
    /// Resolve `slug` against `catalog`.
    pub fn lookup(catalog: &Catalog, slug: &str) -> Self {
        match catalog.find_by_slug(slug) {
            Some(c) => Self::Found {
                course_name: c.course_name.clone(),
                title: c.title.clone(),
                description: c.description.clone(),
            },
            None => {
                tracing::debug!(slug, "lesson not found");
                Self::NotFound {
                    slug: slug.to_string(),
                }
            }
        }
    }

    /// `true` for [`LessonView::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        match self {
            Self::Found {
                course_name,
                title,
                description,
            } => {
                let mut out = String::new();
                if !course_name.is_empty() {
                    out.push_str(course_name);
                    out.push('\n');
                }
                out.push_str(title);
                out.push('\n');
                out.push_str(&"=".repeat(title.chars().count()));
                out.push_str("\n\n");
                out.push_str(description);
                out.push('\n');
                out
            }
            Self::NotFound { .. } => {
                "Lesson Not Found\n\nThe requested lesson could not be found.\n".to_string()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/lesson.rs"]
mod tests;
