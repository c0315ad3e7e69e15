/// Vector types shared with the on-disk layout.
pub mod types;

/// The read side: the `Parseable` trait and its primitive impls.
pub mod reader;

/// The write side: the `Writable` trait and its primitive impls.
pub mod writer;
