/// Marker trait for view state.
///
/// States are cloned into snapshots for readers and compared to detect
/// changes, and `Default` is the state before anything has loaded.
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
