//! Directory loading: a Doxygen XML output folder into a built [`Site`](crate::Site).

mod loader;

#[cfg(test)]
mod tests;

pub use loader::{load_config, load_index, load_site, tracked_refids};
