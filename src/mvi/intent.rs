/// Marker trait for intents.
///
/// In this crate intents are produced when a backend call settles
/// (data loaded, record created, record updated) or when one starts.
pub trait Intent: Send + 'static {}
