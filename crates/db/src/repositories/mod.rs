//! Repository layer: one zero-sized struct per table with async query methods.

pub mod product_repo;

pub use product_repo::ProductRepo;
