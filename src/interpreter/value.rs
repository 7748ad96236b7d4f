/// The [`Value`](core::Value) union every evaluation produces, with its
/// conversions and rendering.
pub mod core;
/// The hashable key projection backing dict storage.
pub mod dict_key;
/// Object definitions and instances.
pub mod object;
