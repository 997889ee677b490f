//! Model-View-Intent primitives shared by every stateful surface.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain data, cloned into the next state
//! - **Intent**: user action or completion event
//! - **Reducer**: `(State, Intent) -> State`, no side effects
//!
//! Side effects (calling the store, invoking close callbacks, spawning a
//! submission) stay in the owner of the state; reducers only decide which
//! transition is legal.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Run a reducer over a state field in place.
#[macro_export]
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}
