/// Quality node: an ancillary field attached to a Data node
///
/// Same shape as [`super::data::Data`] (attribute groups + matrix), minus
/// the `quantity` tag -- a quality field is identified by its parent Data
/// and its `how/task`, not by a quantity of its own. Grounds `OdimQuality`
/// in `odimh5v21_classes.hpp`.

use ndarray::Array2;

use crate::constants::*;
use crate::error::{OdimError, Result};
use crate::matrix::{self, Matrix};
use crate::tree::attributes::AttrGroup;

pub struct Quality {
    group: hdf5::Group,
    index: usize,
}

impl Quality {
    pub fn new(group: hdf5::Group, index: usize) -> Self {
        Quality { group, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn what(&self) -> Result<AttrGroup> {
        AttrGroup::open_or_create(&self.group, GROUP_WHAT)
    }

    pub fn how(&self) -> Result<AttrGroup> {
        AttrGroup::open_or_create(&self.group, GROUP_HOW)
    }

    pub fn task(&self) -> Result<String> {
        self.how()?.get_str(ATTR_HOW_TASK)
    }

    pub fn set_task(&self, task: &str) -> Result<()> {
        self.how()?.set_str(ATTR_HOW_TASK, task)
    }

    pub fn gain(&self) -> Result<f64> {
        self.what()?.get_double(ATTR_WHAT_GAIN)
    }

    pub fn offset(&self) -> Result<f64> {
        self.what()?.get_double(ATTR_WHAT_OFFSET)
    }

    pub fn nodata(&self) -> Option<f64> {
        self.what().ok()?.get_double(ATTR_WHAT_NODATA).ok()
    }

    pub fn undetect(&self) -> Option<f64> {
        self.what().ok()?.get_double(ATTR_WHAT_UNDETECT).ok()
    }

    pub fn set_gain_offset(&self, gain: f64, offset: f64) -> Result<()> {
        if gain == 0.0 {
            return Err(OdimError::InvalidArgument("gain must be non-zero".to_string()));
        }
        let what = self.what()?;
        what.set_double(ATTR_WHAT_GAIN, gain)?;
        what.set_double(ATTR_WHAT_OFFSET, offset)
    }

    pub fn has_matrix(&self) -> bool {
        crate::backend::hdf5_adapter::child_exists(&self.group, DATASET_DATA)
    }

    pub fn elem_type(&self) -> odimh5_types::ElemType {
        if !self.has_matrix() {
            return odimh5_types::ElemType::Opaque;
        }
        matrix::elem_type_of(&self.group, DATASET_DATA).unwrap_or(odimh5_types::ElemType::Opaque)
    }

    pub fn read_matrix(&self) -> Result<Matrix> {
        matrix::read_matrix(&self.group, DATASET_DATA)
    }

    pub fn write_matrix(&self, data: &Matrix) -> Result<()> {
        if self.has_matrix() {
            crate::backend::hdf5_adapter::remove_child(&self.group, DATASET_DATA)?;
        }
        matrix::write_matrix(&self.group, DATASET_DATA, data)
    }

    pub fn read_translated(&self) -> Result<Array2<f64>> {
        let raw = self.read_matrix()?;
        Ok(matrix::read_translated(&raw, self.gain()?, self.offset()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::object::Object;
    use odimh5_types::Version;
    use tempfile::NamedTempFile;

    #[test]
    fn task_round_trips() {
        let tmp = NamedTempFile::new().unwrap();
        let object = Object::create(tmp.path(), Version::V21).unwrap();
        let dataset = object.create_dataset().unwrap();
        let data = dataset.create_data().unwrap();
        let quality = data.create_quality().unwrap();
        quality.set_task("se.smhi.detector.beamblockage").unwrap();
        assert_eq!(quality.task().unwrap(), "se.smhi.detector.beamblockage");
    }
}
