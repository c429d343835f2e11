pub mod cause;
pub mod custom_kind;
pub mod kinds;
pub mod properties;
