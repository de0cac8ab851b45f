/// HDF5 backend adapter
///
/// Grounds `odimh5v21_hdf5.hpp`'s `HDF5File`/`HDF5Attribute`/`HDF5Group`/
/// `HDF5AtomType` static-method classes. The original wraps the HDF5 C API
/// directly; here the `hdf5` crate already owns that layer, so this module
/// is a thin adapter translating between OdimH5 vocabulary (attribute
/// get/set-by-name, dense child enumeration, ensure-or-create) and the
/// crate's `Group`/`Dataset`/`Attribute` handles.

pub mod hdf5_adapter;

pub use hdf5_adapter::{Hdf5Group, Hdf5Location};
