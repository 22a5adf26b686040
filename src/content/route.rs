/// Navigation targets understood by the roadmap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// The roadmap itself.
    Home,
    /// Detail view of one lesson.
    Lesson {
        /// Slug of the lesson's checkpoint.
        slug: String,
    },
}

impl Route {
    /// Route to the lesson with `slug`.
    pub fn lesson(slug: impl Into<String>) -> Self {
        Self::Lesson { slug: slug.into() }
    }

    /// Target path string, e.g. `/courses/python-intro`.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Lesson { slug } => format!("/courses/{slug}"),
        }
    }

    /// Inverse of [`Route::path`]; `None` for anything else.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Home);
        }
        let slug = trimmed.strip_prefix("/courses/")?;
        if slug.is_empty() || slug.contains('/') {
            return None;
        }
        Some(Self::lesson(slug))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/route.rs"]
mod tests;
