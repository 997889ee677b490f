/// Marker trait for intents.
///
/// An intent is either something the user did (pressed "Save & Next",
/// toggled a collaborator) or something that finished (a submission
/// resolved). Reducers consume intents by value.
pub trait Intent: Send + 'static {}
