//! Task detail page: guard pipeline, capture-changes modals and scratch
//! org actions.

mod capture;
mod guard;
mod org_actions;

pub use capture::{CaptureButton, CaptureIntent, CaptureReducer, CaptureState};
pub use guard::{
    resolve_task_detail, Breadcrumb, DetailView, EntityKind, Fetch, HeaderAction,
    HeaderActionKind, Project, Repository, Task, TaskDetailInput, TaskPage, User,
};
pub use org_actions::{org_action, OrgAction, OrgActionInput, ScratchOrg};
