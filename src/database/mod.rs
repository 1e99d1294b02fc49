pub mod probe;

pub use probe::{DataStore, ProbeReport};
