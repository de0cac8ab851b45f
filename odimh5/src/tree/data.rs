/// Data node: one measured quantity on a Dataset
///
/// Grounds `OdimData` in `odimh5v21_classes.hpp`. Owns the `what` group
/// (quantity, gain, offset, nodata, undetect), the `data` matrix, and any
/// `quality1..qualityN` ancillary fields.

use ndarray::Array2;

use crate::constants::*;
use crate::error::{OdimError, Result};
use crate::matrix::{self, Matrix};
use crate::tree::attributes::AttrGroup;
use crate::tree::quality::Quality;

pub struct Data {
    group: hdf5::Group,
    index: usize,
}

impl Data {
    pub fn new(group: hdf5::Group, index: usize) -> Self {
        Data { group, index }
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

    pub fn quantity(&self) -> Result<String> {
        self.what()?.get_str(ATTR_WHAT_QUANTITY)
    }

    pub fn set_quantity(&self, quantity: &str) -> Result<()> {
        self.what()?.set_str(ATTR_WHAT_QUANTITY, quantity)
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

    pub fn set_sentinels(&self, nodata: Option<f64>, undetect: Option<f64>) -> Result<()> {
        let what = self.what()?;
        if let Some(v) = nodata {
            what.set_double(ATTR_WHAT_NODATA, v)?;
        }
        if let Some(v) = undetect {
            what.set_double(ATTR_WHAT_UNDETECT, v)?;
        }
        Ok(())
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

    /// Deletes any existing matrix first, then writes the new one.
    pub fn write_matrix(&self, data: &Matrix) -> Result<()> {
        if self.has_matrix() {
            crate::backend::hdf5_adapter::remove_child(&self.group, DATASET_DATA)?;
        }
        matrix::write_matrix(&self.group, DATASET_DATA, data)
    }

    /// Reads the stored matrix rescaled to physical units via `gain`/`offset`.
    /// `nodata`/`undetect` are not special-cased; callers that need to treat
    /// those raw values specially should compare `read_matrix()` first.
    pub fn read_translated(&self) -> Result<Array2<f64>> {
        let raw = self.read_matrix()?;
        Ok(matrix::read_translated(&raw, self.gain()?, self.offset()?))
    }

    /// Rescales `values` from physical units into `elem_type`'s storage
    /// domain using this node's `gain`/`offset`, and writes the result.
    pub fn write_and_translate(
        &self,
        values: &Array2<f64>,
        elem_type: odimh5_types::ElemType,
    ) -> Result<()> {
        let gain = self.gain()?;
        let offset = self.offset()?;
        let matrix = matrix::write_and_translate(values, elem_type, gain, offset)?;
        self.write_matrix(&matrix)
    }

    pub fn quality_count(&self) -> usize {
        crate::tree::count_indexed(&self.group, GROUP_QUALITY_PREFIX)
    }

    pub fn create_quality(&self) -> Result<Quality> {
        let (index, group) = crate::tree::create_indexed(&self.group, GROUP_QUALITY_PREFIX)?;
        Ok(Quality::new(group, index))
    }

    pub fn get_quality(&self, index: usize) -> Result<Quality> {
        let group = crate::tree::get_indexed(&self.group, GROUP_QUALITY_PREFIX, index)?;
        Ok(Quality::new(group, index))
    }

    pub fn remove_quality(&self, index: usize) -> Result<()> {
        crate::tree::remove_indexed(&self.group, GROUP_QUALITY_PREFIX, index)
    }
}
