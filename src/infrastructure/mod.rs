pub mod cache;
pub mod repositories;
pub mod seed;
pub(crate) mod sync;
