/// Object / Dataset / Data / Quality node tree (C1)
///
/// The four node kinds (`Object`, `Dataset`, `Data`, `Quality`) share one
/// structural idiom: each owns zero or more attribute groups and zero or
/// more densely-numbered children of a fixed name prefix (`dataset`,
/// `data`, `quality`). That shared plumbing lives here; the per-node-kind
/// modules add the specific attribute schema and product polymorphism.

pub mod attributes;
pub mod data;
pub mod dataset;
pub mod object;
pub mod products;
pub mod quality;

use crate::backend::hdf5_adapter;
use crate::error::{OdimError, Result};

/// Number of densely-numbered children (`prefix1..prefixN`) directly under `parent`.
pub fn count_indexed(parent: &hdf5::Group, prefix: &str) -> usize {
    let mut n = 0;
    while hdf5_adapter::child_exists(parent, &format!("{prefix}{}", n + 1)) {
        n += 1;
    }
    n
}

/// Opens the 1-based child `prefix<index+1>` for the externally 0-based `index`.
pub fn get_indexed(parent: &hdf5::Group, prefix: &str, index: usize) -> Result<hdf5::Group> {
    let name = format!("{prefix}{}", index + 1);
    if !hdf5_adapter::child_exists(parent, &name) {
        return Err(OdimError::InvalidArgument(format!(
            "no such child '{name}'"
        )));
    }
    hdf5_adapter::get_child(parent, &name)
}

/// Creates the next sequential child `prefix<count+1>` and returns its
/// 0-based index alongside the new group handle.
pub fn create_indexed(parent: &hdf5::Group, prefix: &str) -> Result<(usize, hdf5::Group)> {
    let count = count_indexed(parent, prefix);
    let name = format!("{prefix}{}", count + 1);
    let group = hdf5_adapter::ensure_child(parent, &name)?;
    Ok((count, group))
}

/// Removes the 0-based `index`-th child and renames every following sibling
/// down by one so the `prefix1..prefixN` sequence stays dense.
pub fn remove_indexed(parent: &hdf5::Group, prefix: &str, index: usize) -> Result<()> {
    let count = count_indexed(parent, prefix);
    if index >= count {
        return Err(OdimError::InvalidArgument(format!(
            "index {index} out of range (have {count} '{prefix}' children)"
        )));
    }
    let removed_name = format!("{prefix}{}", index + 1);
    hdf5_adapter::remove_child(parent, &removed_name)?;
    for n in (index + 2)..=count {
        let from = format!("{prefix}{n}");
        let to = format!("{prefix}{}", n - 1);
        hdf5_adapter::rename_child(parent, &from, &to)?;
    }
    Ok(())
}
