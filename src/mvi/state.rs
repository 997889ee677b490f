/// Marker trait for reducer-owned state.
///
/// `Default` is the closed/hidden state; `PartialEq` lets tests and hosts
/// detect no-op transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
