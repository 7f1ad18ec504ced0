/// Snapshot of one screen: raw inputs plus everything derived from them.
///
/// `Default` is the freshly opened screen and what `reset` returns to.
/// `PartialEq` lets [`Store::dispatch`](super::Store::dispatch) skip
/// publishing when an intent changes nothing.
pub trait UiState: Clone + PartialEq + Default + 'static {}
