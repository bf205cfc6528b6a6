//! Generic structures, not specific to search or inference.

pub mod index_heap;
