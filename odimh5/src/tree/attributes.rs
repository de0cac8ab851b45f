/// Typed attribute-group accessors
///
/// Wraps a `what`/`where`/`how` sub-group with the get/get-default/set/
/// remove/exists contract of C2, plus the sequence and ODIM-composite forms
/// layered on top of the single-string backing store. One `AttrGroup`
/// instance fronts one HDF5 group; callers build the typed surface (scan
/// geometry, product tags, ...) out of these primitives rather than each
/// node re-implementing attribute access.

use chrono::{NaiveDate, NaiveTime};

use crate::backend::hdf5_adapter;
use crate::codec::{self, composite, AttributeValue};
use crate::error::{OdimError, Result};

pub struct AttrGroup {
    group: hdf5::Group,
}

impl AttrGroup {
    pub fn new(group: hdf5::Group) -> Self {
        AttrGroup { group }
    }

    /// Opens `name` under `parent`, creating it if absent -- every OdimH5
    /// non-leaf node lazily grows its `what`/`where`/`how` groups on first
    /// attribute write.
    pub fn open_or_create(parent: &hdf5::Group, name: &str) -> Result<Self> {
        Ok(AttrGroup::new(hdf5_adapter::ensure_child(parent, name)?))
    }

    pub fn open(parent: &hdf5::Group, name: &str) -> Result<Option<Self>> {
        if hdf5_adapter::child_exists(parent, name) {
            Ok(Some(AttrGroup::new(hdf5_adapter::get_child(parent, name)?)))
        } else {
            Ok(None)
        }
    }

    pub fn exists(parent: &hdf5::Group, name: &str) -> bool {
        hdf5_adapter::child_exists(parent, name)
    }

    pub fn group(&self) -> &hdf5::Group {
        &self.group
    }

    pub fn attr_exists(&self, name: &str) -> bool {
        hdf5_adapter::attr_exists(&self.group, name)
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        hdf5_adapter::remove_attr(&self.group, name)
    }

    fn missing(&self, name: &str) -> OdimError {
        OdimError::MissingAttribute(name.to_string())
    }

    pub fn get_long(&self, name: &str) -> Result<i64> {
        hdf5_adapter::get_attr(&self.group, name)
            .map_err(|_| self.missing(name))?
            .as_long()
    }

    pub fn get_long_or(&self, name: &str, default: i64) -> i64 {
        self.get_long(name).unwrap_or(default)
    }

    pub fn set_long(&self, name: &str, value: i64) -> Result<()> {
        hdf5_adapter::set_attr(&self.group, name, &AttributeValue::Long(value))
    }

    pub fn get_double(&self, name: &str) -> Result<f64> {
        hdf5_adapter::get_attr(&self.group, name)
            .map_err(|_| self.missing(name))?
            .as_double()
    }

    pub fn get_double_or(&self, name: &str, default: f64) -> f64 {
        self.get_double(name).unwrap_or(default)
    }

    pub fn set_double(&self, name: &str, value: f64) -> Result<()> {
        hdf5_adapter::set_attr(&self.group, name, &AttributeValue::Double(value))
    }

    pub fn get_str(&self, name: &str) -> Result<String> {
        hdf5_adapter::get_attr(&self.group, name)
            .map_err(|_| self.missing(name))?
            .as_str()
    }

    pub fn get_str_or(&self, name: &str, default: &str) -> String {
        self.get_str(name).unwrap_or_else(|_| default.to_string())
    }

    pub fn set_str(&self, name: &str, value: &str) -> Result<()> {
        hdf5_adapter::set_attr(&self.group, name, &AttributeValue::Str(value.to_string()))
    }

    pub fn get_bool(&self, name: &str) -> Result<bool> {
        codec::parse_bool(&self.get_str(name)?)
    }

    pub fn set_bool(&self, name: &str, value: bool) -> Result<()> {
        self.set_str(name, codec::format_bool(value))
    }

    pub fn get_date(&self, name: &str) -> Result<NaiveDate> {
        composite::parse_date(name, &self.get_str(name)?)
    }

    pub fn set_date(&self, name: &str, value: NaiveDate) -> Result<()> {
        self.set_str(name, &composite::format_date(value))
    }

    pub fn get_time(&self, name: &str) -> Result<NaiveTime> {
        composite::parse_time(name, &self.get_str(name)?)
    }

    pub fn set_time(&self, name: &str, value: NaiveTime) -> Result<()> {
        self.set_str(name, &composite::format_time(value))
    }

    pub fn get_double_sequence(&self, name: &str) -> Result<Vec<f64>> {
        composite::parse_angle_sequence(name, &self.get_str(name)?)
    }

    pub fn get_double_sequence_or(&self, name: &str, default: Vec<f64>) -> Vec<f64> {
        self.get_double_sequence(name).unwrap_or(default)
    }

    /// `precision` controls the fixed-point decimal digits written, per the
    /// library-wide precision parameter on float-sequence writers.
    pub fn set_double_sequence(&self, name: &str, values: &[f64], precision: usize) -> Result<()> {
        self.set_str(name, &composite::format_angle_sequence(values, precision))
    }

    pub fn get_time_sequence(&self, name: &str) -> Result<Vec<NaiveTime>> {
        composite::parse_time_sequence(name, &self.get_str(name)?)
    }

    pub fn set_time_sequence(&self, name: &str, values: &[NaiveTime]) -> Result<()> {
        self.set_str(name, &composite::format_time_sequence(values))
    }

    pub fn get_node_sequence(&self, name: &str) -> Result<Vec<String>> {
        composite::parse_node_sequence(name, &self.get_str(name)?)
    }

    pub fn set_node_sequence(&self, name: &str, values: &[String]) -> Result<()> {
        self.set_str(name, &composite::format_node_sequence(values))
    }
}
