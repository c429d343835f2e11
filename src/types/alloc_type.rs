/// Boxed, thread-safe trait object for arbitrary underlying errors.
pub type BoxedError = std::boxed::Box<dyn core::error::Error + Send + Sync + 'static>;
