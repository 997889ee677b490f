//! Form state and submission.
//!
//! The wizard never owns field values directly. It talks to a [`FormStore`]
//! for synchronous reads and writes, and to a [`Submitter`] for the single
//! asynchronous operation.
//!
//! ```text
//! field edit ──→ FormStore::set_field ──→ synchronizer ──→ FormStore::set_fields
//!                                                              │
//! submit ──→ Submitter::submit(SubmitRequest) ──→ Ok / Validation / Transport
//! ```

mod sanitize;
mod store;
mod submit;
mod value;

pub use sanitize::{sanitize_repo_name, MAX_REPO_NAME_LEN};
pub use store::{FormState, FormStore, MemoryFormStore};
pub use submit::{ObjectType, SimulatedSubmitter, SubmitError, SubmitRequest, Submitter};
pub use value::{FieldErrors, FieldValue, Fields};
