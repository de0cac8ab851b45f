/// Thin wrapper over `hdf5::Group` giving OdimH5 tree code the same small
/// vocabulary `odimh5v21_hdf5.hpp` gives the C++ engine: typed attribute
/// get/set, dense child enumeration, ensure-or-create group lookup, and
/// atom-type introspection for matrix datasets.

use hdf5::types::{FixedAscii, TypeDescriptor, VarLenAscii};
use hdf5::{Attribute, Dataset, Group};
use log::debug;

use crate::codec::AttributeValue;
use crate::error::{OdimError, Result};

/// A `hdf5::Group` or `hdf5::File` handle, both of which implement
/// `hdf5::Location` and therefore support attribute access the same way.
pub type Hdf5Location = hdf5::Group;

/// Re-exported so callers that only need group semantics don't have to pull
/// in the raw `hdf5` crate name.
pub type Hdf5Group = Group;

/// Invokes `$cb!(N)` once for each fixed-ascii byte length (string length
/// plus its trailing NUL) this library round-trips without falling back to
/// `VarLenAscii`. OdimH5 string attributes are short site/source codes,
/// dates, times and the occasional comment; 128 bytes covers them with
/// plenty of headroom.
macro_rules! for_each_fixed_ascii_len {
    ($cb:ident) => {
        $cb!(1); $cb!(2); $cb!(3); $cb!(4); $cb!(5); $cb!(6); $cb!(7); $cb!(8);
        $cb!(9); $cb!(10); $cb!(11); $cb!(12); $cb!(13); $cb!(14); $cb!(15); $cb!(16);
        $cb!(17); $cb!(18); $cb!(19); $cb!(20); $cb!(21); $cb!(22); $cb!(23); $cb!(24);
        $cb!(25); $cb!(26); $cb!(27); $cb!(28); $cb!(29); $cb!(30); $cb!(31); $cb!(32);
        $cb!(33); $cb!(34); $cb!(35); $cb!(36); $cb!(37); $cb!(38); $cb!(39); $cb!(40);
        $cb!(41); $cb!(42); $cb!(43); $cb!(44); $cb!(45); $cb!(46); $cb!(47); $cb!(48);
        $cb!(49); $cb!(50); $cb!(51); $cb!(52); $cb!(53); $cb!(54); $cb!(55); $cb!(56);
        $cb!(57); $cb!(58); $cb!(59); $cb!(60); $cb!(61); $cb!(62); $cb!(63); $cb!(64);
        $cb!(65); $cb!(66); $cb!(67); $cb!(68); $cb!(69); $cb!(70); $cb!(71); $cb!(72);
        $cb!(73); $cb!(74); $cb!(75); $cb!(76); $cb!(77); $cb!(78); $cb!(79); $cb!(80);
        $cb!(81); $cb!(82); $cb!(83); $cb!(84); $cb!(85); $cb!(86); $cb!(87); $cb!(88);
        $cb!(89); $cb!(90); $cb!(91); $cb!(92); $cb!(93); $cb!(94); $cb!(95); $cb!(96);
        $cb!(97); $cb!(98); $cb!(99); $cb!(100); $cb!(101); $cb!(102); $cb!(103); $cb!(104);
        $cb!(105); $cb!(106); $cb!(107); $cb!(108); $cb!(109); $cb!(110); $cb!(111); $cb!(112);
        $cb!(113); $cb!(114); $cb!(115); $cb!(116); $cb!(117); $cb!(118); $cb!(119); $cb!(120);
        $cb!(121); $cb!(122); $cb!(123); $cb!(124); $cb!(125); $cb!(126); $cb!(127); $cb!(128);
    };
}

/// Reads a fixed-ascii/fixed-unicode attribute of on-disk byte size `size`.
/// Dispatches through a const-generic `FixedAscii<N>` per supported size
/// since the crate has no runtime-sized fixed-string read.
fn read_fixed_ascii(attr: &Attribute, size: usize, name: &str) -> Result<String> {
    macro_rules! read_arm {
        ($n:literal) => {
            if size == $n {
                let text = attr.read_scalar::<FixedAscii<$n>>()?;
                return Ok(text.as_str().to_string());
            }
        };
    }
    for_each_fixed_ascii_len!(read_arm);
    Err(OdimError::format(
        name,
        format!("fixed-ascii attribute of size {size} exceeds the supported fast path"),
    ))
}

/// Reads a named attribute, auto-detecting its stored atomic type the way
/// `HDF5AtomType::fromDataType` drives `HDF5Attribute::get`.
pub fn get_attr(loc: &impl hdf5::Location, name: &str) -> Result<AttributeValue> {
    let attr = loc.attr(name)?;
    let descriptor = attr.dtype()?.to_descriptor()?;
    match descriptor {
        TypeDescriptor::Integer(_) | TypeDescriptor::Unsigned(_) => {
            Ok(AttributeValue::Long(attr.read_scalar::<i64>()?))
        }
        TypeDescriptor::Float(_) => Ok(AttributeValue::Double(attr.read_scalar::<f64>()?)),
        TypeDescriptor::VarLenUnicode | TypeDescriptor::VarLenAscii => {
            let s = attr.read_scalar::<VarLenAscii>()?;
            Ok(AttributeValue::Str(s.as_str().to_string()))
        }
        TypeDescriptor::FixedAscii(size) | TypeDescriptor::FixedUnicode(size) => {
            Ok(AttributeValue::Str(read_fixed_ascii(&attr, size, name)?))
        }
        other => Err(OdimError::format(
            name,
            format!("unsupported attribute storage type {other:?}"),
        )),
    }
}

pub fn attr_exists(loc: &impl hdf5::Location, name: &str) -> bool {
    loc.attr(name).is_ok()
}

/// Writes a named attribute, creating it if absent and overwriting it (by
/// delete-then-recreate, since the HDF5 attribute type cannot be changed in
/// place) if a differently-typed value already exists.
pub fn set_attr(loc: &impl hdf5::Location, name: &str, value: &AttributeValue) -> Result<()> {
    if attr_exists(loc, name) {
        loc.delete_attr(name)?;
    }
    match value {
        AttributeValue::Long(v) => {
            loc.new_attr::<i64>().create(name)?.write_scalar(v)?;
        }
        AttributeValue::Double(v) => {
            loc.new_attr::<f64>().create(name)?.write_scalar(v)?;
        }
        AttributeValue::Str(s) => write_fixed_ascii(loc, name, s)?,
    }
    Ok(())
}

/// Stores `s` as fixed-length ASCII of size `len(s)+1`, the on-store form
/// the ODIM spec mandates for bit-exact compatibility with `radarlib` and
/// other conformant writers. Values beyond the fixed-size fast path fall
/// back to `VarLenAscii`.
fn write_fixed_ascii(loc: &impl hdf5::Location, name: &str, s: &str) -> Result<()> {
    if !s.is_ascii() {
        return Err(OdimError::format(name, format!("'{s}' is not ASCII")));
    }
    let stored_len = s.len() + 1;
    macro_rules! write_arm {
        ($n:literal) => {
            if stored_len == $n {
                let text = FixedAscii::<$n>::from_ascii(s.as_bytes())
                    .map_err(|_| OdimError::format(name, format!("'{s}' does not fit in {} bytes", $n)))?;
                loc.new_attr::<FixedAscii<$n>>().create(name)?.write_scalar(&text)?;
                return Ok(());
            }
        };
    }
    for_each_fixed_ascii_len!(write_arm);
    let text = VarLenAscii::from_ascii(s.as_bytes())
        .map_err(|_| OdimError::format(name, format!("'{s}' is not valid ASCII")))?;
    loc.new_attr::<VarLenAscii>().create(name)?.write_scalar(&text)?;
    Ok(())
}

pub fn remove_attr(loc: &impl hdf5::Location, name: &str) -> Result<()> {
    if attr_exists(loc, name) {
        loc.delete_attr(name)?;
    }
    Ok(())
}

/// Number of direct subgroups and datasets, mirroring `HDF5Group::getChildCount`.
pub fn child_count(group: &Group) -> usize {
    group.member_names().map(|names| names.len()).unwrap_or(0)
}

pub fn child_exists(group: &Group, name: &str) -> bool {
    group.link_exists(name)
}

/// Returns the group at `name`, creating it if it does not yet exist --
/// `HDF5Group::ensureChild`.
pub fn ensure_child(group: &Group, name: &str) -> Result<Group> {
    if let Ok(child) = group.group(name) {
        Ok(child)
    } else {
        Ok(group.create_group(name)?)
    }
}

pub fn get_child(group: &Group, name: &str) -> Result<Group> {
    Ok(group.group(name)?)
}

pub fn get_dataset(group: &Group, name: &str) -> Result<Dataset> {
    Ok(group.dataset(name)?)
}

/// Removes a child group or dataset by name. HDF5 does not compact storage
/// on unlink; callers that require dense renumbering must also relink the
/// remaining siblings (see `tree::object::renumber_children`).
pub fn remove_child(group: &Group, name: &str) -> Result<()> {
    group.unlink(name)?;
    Ok(())
}

/// Renames a child link in place via `hdf5::Group::relink` (`H5Lmove`).
pub fn rename_child(group: &Group, from: &str, to: &str) -> Result<()> {
    debug!("renaming child '{from}' -> '{to}'");
    group.relink(from, to)?;
    Ok(())
}

/// Copies every attribute from `src` onto `dst`, as `HDF5Group::copyAttributes` does.
pub fn copy_attributes(src: &impl hdf5::Location, dst: &impl hdf5::Location) -> Result<()> {
    for name in src.attr_names()? {
        let value = get_attr(src, &name)?;
        set_attr(dst, &name, &value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn scratch_file() -> (NamedTempFile, hdf5::File) {
        let tmp = NamedTempFile::new().unwrap();
        let file = hdf5::File::create(tmp.path()).unwrap();
        (tmp, file)
    }

    #[test]
    fn long_attribute_round_trips() {
        let (_tmp, file) = scratch_file();
        set_attr(&file, "nbins", &AttributeValue::Long(480)).unwrap();
        assert_eq!(get_attr(&file, "nbins").unwrap(), AttributeValue::Long(480));
    }

    #[test]
    fn string_attribute_round_trips() {
        let (_tmp, file) = scratch_file();
        set_attr(&file, "object", &AttributeValue::Str("PVOL".to_string())).unwrap();
        assert_eq!(
            get_attr(&file, "object").unwrap(),
            AttributeValue::Str("PVOL".to_string())
        );
    }

    #[test]
    fn short_strings_store_as_exact_fixed_ascii() {
        let (_tmp, file) = scratch_file();
        set_attr(&file, "object", &AttributeValue::Str("PVOL".to_string())).unwrap();
        let descriptor = file.attr("object").unwrap().dtype().unwrap().to_descriptor().unwrap();
        assert_eq!(descriptor, TypeDescriptor::FixedAscii(5));
    }

    #[test]
    fn overlong_strings_fall_back_to_varlen_ascii() {
        let (_tmp, file) = scratch_file();
        let long = "x".repeat(200);
        set_attr(&file, "comment", &AttributeValue::Str(long.clone())).unwrap();
        let descriptor = file.attr("comment").unwrap().dtype().unwrap().to_descriptor().unwrap();
        assert_eq!(descriptor, TypeDescriptor::VarLenAscii);
        assert_eq!(get_attr(&file, "comment").unwrap(), AttributeValue::Str(long));
    }

    #[test]
    fn ensure_child_is_idempotent() {
        let (_tmp, file) = scratch_file();
        let g1 = ensure_child(&file, "dataset1").unwrap();
        let g2 = ensure_child(&file, "dataset1").unwrap();
        assert_eq!(g1.name(), g2.name());
    }

    #[test]
    fn rename_child_moves_attributes_along() {
        let (_tmp, file) = scratch_file();
        let child = file.create_group("dataset2").unwrap();
        set_attr(&child, "quantity", &AttributeValue::Str("DBZH".to_string())).unwrap();
        drop(child);
        rename_child(&file, "dataset2", "dataset1").unwrap();
        assert!(!child_exists(&file, "dataset2"));
        let moved = get_child(&file, "dataset1").unwrap();
        assert_eq!(
            get_attr(&moved, "quantity").unwrap(),
            AttributeValue::Str("DBZH".to_string())
        );
    }
}
