//! Read and write OPERA ODIM_H5 v2.0/v2.1 weather radar files.
//!
//! The crate mirrors the three layers of the ODIM_H5 file model: a
//! [`factory`] binds a path to a version, a [`tree`] of typed node handles
//! (`Object` -> `Dataset` -> `Data`/`Quality`) exposes the attribute and
//! matrix schema, and [`backend`]/[`codec`] carry the on-store primitives
//! neither layer above needs to know about directly.
//!
//! ```no_run
//! use odimh5::factory;
//! use odimh5::tree::object::OpenMode;
//!
//! # fn main() -> odimh5::error::Result<()> {
//! let volume = factory::V21.open("pvol.h5", OpenMode::ReadOnly)?;
//! for i in 0..volume.dataset_count() {
//!     let scan = volume.get_dataset(i)?;
//!     println!("elangle={}", scan.elevation_angle()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod factory;
pub mod matrix;
pub mod tree;

pub use error::{OdimError, Result};
pub use odimh5_types::{Direction, ElemType, Method, ObjectKind, Polarization, ProductKind, Version};
