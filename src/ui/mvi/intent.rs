/// One input to a reducer: a field edit, a reset, or a settled echo value.
pub trait Intent: 'static {}
