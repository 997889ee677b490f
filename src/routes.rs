//! Route construction for detail pages.

/// Builds application paths under a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    prefix: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self::new("/repositories")
    }
}

impl Routes {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn repository_detail(&self, repository: &str) -> String {
        format!("{}/{}", self.prefix, repository)
    }

    pub fn project_detail(&self, repository: &str, project: &str) -> String {
        format!("{}/{}", self.repository_detail(repository), project)
    }

    pub fn task_detail(&self, repository: &str, project: &str, task: &str) -> String {
        format!("{}/{}", self.project_detail(repository, project), task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths() {
        let routes = Routes::new("/repositories/");
        assert_eq!(routes.repository_detail("r"), "/repositories/r");
        assert_eq!(routes.project_detail("r", "p"), "/repositories/r/p");
        assert_eq!(routes.task_detail("r", "p", "t"), "/repositories/r/p/t");
    }
}
