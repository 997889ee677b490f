//! Ordered precondition checks for the task detail page.
//!
//! Each entity is checked in dependency order (repository, project, task).
//! The first check that cannot proceed decides the whole view.

use crate::i18n::Translator;
use crate::routes::Routes;

/// State of a fetch-if-missing lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fetch<T> {
    #[default]
    Pending,
    NotFound,
    Found(T),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub slug: String,
    pub name: String,
    pub repo_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub branch_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    pub id: Option<String>,
    pub valid_token_for: Option<String>,
    pub is_devhub_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Repository,
    Project,
    Task,
}

/// Everything the page needs, as fetched so far. Slugs are the ones in the
/// requested path, which may be outdated.
#[derive(Debug, Clone, Default)]
pub struct TaskDetailInput {
    pub repository: Fetch<Repository>,
    pub repository_slug: Option<String>,
    pub project: Fetch<Project>,
    pub project_slug: Option<String>,
    pub task: Fetch<Task>,
    pub task_slug: Option<String>,
    pub orgs_loaded: bool,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderActionKind {
    DeleteTask,
    ViewBranch { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderAction {
    pub kind: HeaderActionKind,
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPage {
    pub document_title: String,
    pub title: String,
    pub description: String,
    pub repo_url: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub header_actions: Vec<HeaderAction>,
    pub show_capture_button: bool,
    /// Orgs table is still loading; show a spinner in its place.
    pub orgs_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Loading(EntityKind),
    NotFound(EntityKind),
    /// The path used outdated slugs; go to the canonical one.
    Redirect(String),
    Page(Box<TaskPage>),
}

pub fn resolve_task_detail(
    input: &TaskDetailInput,
    routes: &Routes,
    t: &dyn Translator,
) -> DetailView {
    match build_page(input, routes, t) {
        Ok(page) => DetailView::Page(Box::new(page)),
        Err(view) => view,
    }
}

fn build_page(
    input: &TaskDetailInput,
    routes: &Routes,
    t: &dyn Translator,
) -> Result<TaskPage, DetailView> {
    let repository = require(&input.repository, EntityKind::Repository)?;
    let project = require(&input.project, EntityKind::Project)?;
    let task = require(&input.task, EntityKind::Task)?;

    let stale = |requested: &Option<String>, current: &str| {
        requested.as_deref().is_some_and(|slug| slug != current)
    };
    if stale(&input.repository_slug, &repository.slug)
        || stale(&input.project_slug, &project.slug)
        || stale(&input.task_slug, &task.slug)
    {
        let path = routes.task_detail(&repository.slug, &project.slug, &task.slug);
        tracing::debug!(%path, "Redirecting to canonical task path");
        return Err(DetailView::Redirect(path));
    }

    let mut header_actions = vec![HeaderAction {
        kind: HeaderActionKind::DeleteTask,
        label: t.translate("Delete Task"),
        disabled: true,
    }];
    if let Some(url) = &task.branch_url {
        header_actions.push(HeaderAction {
            kind: HeaderActionKind::ViewBranch { url: url.clone() },
            label: t.translate("View Branch"),
            disabled: false,
        });
    }

    Ok(TaskPage {
        document_title: format!(
            " {} | {} | {} | {}",
            task.name,
            project.name,
            repository.name,
            t.translate("MetaShare")
        ),
        title: task.name.clone(),
        description: task.description.clone(),
        repo_url: repository.repo_url.clone(),
        breadcrumbs: vec![
            Breadcrumb {
                name: repository.name.clone(),
                url: Some(routes.repository_detail(&repository.slug)),
            },
            Breadcrumb {
                name: project.name.clone(),
                url: Some(routes.project_detail(&repository.slug, &project.slug)),
            },
            Breadcrumb {
                name: task.name.clone(),
                url: None,
            },
        ],
        header_actions,
        show_capture_button: input
            .user
            .as_ref()
            .is_some_and(|user| user.id.is_some()),
        orgs_loading: !input.orgs_loaded,
    })
}

fn require<T>(fetch: &Fetch<T>, kind: EntityKind) -> Result<&T, DetailView> {
    match fetch {
        Fetch::Found(value) => Ok(value),
        Fetch::Pending => Err(DetailView::Loading(kind)),
        Fetch::NotFound => Err(DetailView::NotFound(kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_maps_each_state() {
        let pending: Fetch<Project> = Fetch::Pending;
        assert_eq!(
            require(&pending, EntityKind::Project),
            Err(DetailView::Loading(EntityKind::Project))
        );
        let missing: Fetch<Project> = Fetch::NotFound;
        assert_eq!(
            require(&missing, EntityKind::Project),
            Err(DetailView::NotFound(EntityKind::Project))
        );
    }
}
