//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` form struct as submitted by clients, validated into
//! - A create DTO for inserts and an update DTO (all `Option` fields) for patches

pub mod product;
