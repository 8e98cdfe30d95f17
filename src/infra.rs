#[cfg(feature = "profile")]
pub use no_nonsense_flamegraphs::span;

// Without the `profile` feature, spans cost nothing.
#[cfg(not(feature = "profile"))]
#[macro_export]
macro_rules! __span {
    ($name:expr) => {};
}

// `macro_export` places the macro at the crate root; re-export it so that callers can write
// `use crate::infra::span` whether or not profiling is on.
#[cfg(not(feature = "profile"))]
pub use crate::__span as span;
