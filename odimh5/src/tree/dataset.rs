/// Dataset node: one polar sweep, or one product instance inside a 2-D object
///
/// Grounds the `PolarScan`/`Product_2D` family in `odimh5v21_classes.hpp`.
/// Rather than mirror the original's per-product-kind subclass, one
/// `Dataset` struct exposes the union of the polar and cartesian/vertical
/// attribute surfaces; callers read only the fields relevant to the
/// `product`/owning-object kind they already know they are working with,
/// the same way `odimh5_types::ProductKind::is_horizontal/is_vertical`
/// exists to let callers branch instead of needing a distinct Rust type per
/// branch.

use chrono::{NaiveDate, NaiveTime};
use odimh5_types::ProductKind;

use crate::codec::composite::AzimuthAnglePair;
use crate::constants::*;
use crate::error::{OdimError, Result};
use crate::tree::attributes::AttrGroup;
use crate::tree::data::Data;

pub struct Dataset {
    group: hdf5::Group,
    index: usize,
}

impl Dataset {
    pub fn new(group: hdf5::Group, index: usize) -> Self {
        Dataset { group, index }
    }

    /// 0-based index among the owning object's `dataset1..datasetN` children.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn what(&self) -> Result<AttrGroup> {
        AttrGroup::open_or_create(&self.group, GROUP_WHAT)
    }

    pub fn exists_what(&self) -> bool {
        AttrGroup::exists(&self.group, GROUP_WHAT)
    }

    pub fn where_(&self) -> Result<AttrGroup> {
        AttrGroup::open_or_create(&self.group, GROUP_WHERE)
    }

    pub fn exists_where(&self) -> bool {
        AttrGroup::exists(&self.group, GROUP_WHERE)
    }

    pub fn how(&self) -> Result<AttrGroup> {
        AttrGroup::open_or_create(&self.group, GROUP_HOW)
    }

    pub fn exists_how(&self) -> bool {
        AttrGroup::exists(&self.group, GROUP_HOW)
    }

    pub fn product(&self) -> Result<ProductKind> {
        let tag = self.what()?.get_str(ATTR_WHAT_PRODUCT)?;
        ProductKind::parse(&tag)
            .ok_or_else(|| OdimError::format(ATTR_WHAT_PRODUCT, format!("unknown product tag '{tag}'")))
    }

    pub fn set_product(&self, kind: ProductKind) -> Result<()> {
        self.what()?.set_str(ATTR_WHAT_PRODUCT, kind.as_str())
    }

    pub fn start_date_time(&self) -> Result<(NaiveDate, NaiveTime)> {
        let what = self.what()?;
        Ok((
            what.get_date(ATTR_WHAT_STARTDATE)?,
            what.get_time(ATTR_WHAT_STARTTIME)?,
        ))
    }

    pub fn set_start_date_time(&self, date: NaiveDate, time: NaiveTime) -> Result<()> {
        let what = self.what()?;
        what.set_date(ATTR_WHAT_STARTDATE, date)?;
        what.set_time(ATTR_WHAT_STARTTIME, time)
    }

    pub fn end_date_time(&self) -> Result<(NaiveDate, NaiveTime)> {
        let what = self.what()?;
        Ok((
            what.get_date(ATTR_WHAT_ENDDATE)?,
            what.get_time(ATTR_WHAT_ENDTIME)?,
        ))
    }

    pub fn set_end_date_time(&self, date: NaiveDate, time: NaiveTime) -> Result<()> {
        let what = self.what()?;
        what.set_date(ATTR_WHAT_ENDDATE, date)?;
        what.set_time(ATTR_WHAT_ENDTIME, time)
    }

    // -- polar geometry (PVOL/SCAN datasets) --

    pub fn elevation_angle(&self) -> Result<f64> {
        self.where_()?.get_double(ATTR_WHERE_ELANGLE)
    }

    pub fn set_elevation_angle(&self, degrees: f64) -> Result<()> {
        self.where_()?.set_double(ATTR_WHERE_ELANGLE, degrees)
    }

    pub fn n_bins(&self) -> Result<i64> {
        self.where_()?.get_long(ATTR_WHERE_NBINS)
    }

    pub fn range_start(&self) -> Result<f64> {
        self.where_()?.get_double(ATTR_WHERE_RSTART)
    }

    pub fn range_scale(&self) -> Result<f64> {
        self.where_()?.get_double(ATTR_WHERE_RSCALE)
    }

    pub fn n_rays(&self) -> Result<i64> {
        self.where_()?.get_long(ATTR_WHERE_NRAYS)
    }

    pub fn a1_gate(&self) -> Result<i64> {
        self.where_()?.get_long(ATTR_WHERE_A1GATE)
    }

    pub fn set_polar_geometry(
        &self,
        elangle: f64,
        nbins: i64,
        rstart: f64,
        rscale: f64,
        nrays: i64,
        a1gate: i64,
    ) -> Result<()> {
        let where_ = self.where_()?;
        where_.set_double(ATTR_WHERE_ELANGLE, elangle)?;
        where_.set_long(ATTR_WHERE_NBINS, nbins)?;
        where_.set_double(ATTR_WHERE_RSTART, rstart)?;
        where_.set_double(ATTR_WHERE_RSCALE, rscale)?;
        where_.set_long(ATTR_WHERE_NRAYS, nrays)?;
        where_.set_long(ATTR_WHERE_A1GATE, a1gate)
    }

    pub fn azimuth_bounds(&self) -> Result<AzimuthAnglePair> {
        let where_ = self.where_()?;
        Ok(AzimuthAnglePair {
            start: where_.get_double(ATTR_WHERE_STARTAZ)?,
            stop: where_.get_double(ATTR_WHERE_STOPAZ)?,
        })
    }

    pub fn set_azimuth_bounds(&self, bounds: AzimuthAnglePair) -> Result<()> {
        let where_ = self.where_()?;
        where_.set_double(ATTR_WHERE_STARTAZ, bounds.start)?;
        where_.set_double(ATTR_WHERE_STOPAZ, bounds.stop)
    }

    pub fn rpm(&self) -> Option<f64> {
        self.how().ok()?.get_double(ATTR_HOW_RPM).ok()
    }

    /// Per-ray elevation angles. A zero-length stored sequence is expanded
    /// by duplicating `elangle`, per the invariant that a per-ray `how`
    /// sequence is either `nrays` long or absent.
    pub fn ray_elevation_angles(&self) -> Result<Vec<f64>> {
        let nrays = self.n_rays()? as usize;
        let how = self.how()?;
        let values = how.get_double_sequence_or(ATTR_HOW_ELANGLES, Vec::new());
        if values.is_empty() {
            Ok(vec![self.elevation_angle()?; nrays])
        } else {
            Ok(values)
        }
    }

    /// `precision` is the fixed-point decimal digits to write; pass
    /// `codec::composite::DEFAULT_ANGLE_PRECISION` absent a reason to do otherwise.
    pub fn set_ray_elevation_angles(&self, values: &[f64], precision: usize) -> Result<()> {
        self.how()?.set_double_sequence(ATTR_HOW_ELANGLES, values, precision)
    }

    pub fn ray_start_azimuth_times(&self) -> Result<Vec<NaiveTime>> {
        self.how()?.get_time_sequence(ATTR_HOW_STARTAZT)
    }

    pub fn set_ray_start_azimuth_times(&self, values: &[NaiveTime]) -> Result<()> {
        self.how()?.set_time_sequence(ATTR_HOW_STARTAZT, values)
    }

    pub fn ray_stop_azimuth_times(&self) -> Result<Vec<NaiveTime>> {
        self.how()?.get_time_sequence(ATTR_HOW_STOPAZT)
    }

    pub fn set_ray_stop_azimuth_times(&self, values: &[NaiveTime]) -> Result<()> {
        self.how()?.set_time_sequence(ATTR_HOW_STOPAZT, values)
    }

    // -- cartesian/horizontal product geometry (IMAGE/COMP datasets) --

    pub fn cartesian_size(&self) -> Result<(i64, i64)> {
        let where_ = self.where_()?;
        Ok((where_.get_long(ATTR_WHERE_XSIZE)?, where_.get_long(ATTR_WHERE_YSIZE)?))
    }

    pub fn cartesian_scale(&self) -> Result<(f64, f64)> {
        let where_ = self.where_()?;
        Ok((
            where_.get_double(ATTR_WHERE_XSCALE)?,
            where_.get_double(ATTR_WHERE_YSCALE)?,
        ))
    }

    pub fn projection_definition(&self) -> Result<String> {
        self.where_()?.get_str(ATTR_WHERE_PROJDEF)
    }

    pub fn set_cartesian_geometry(
        &self,
        xsize: i64,
        ysize: i64,
        xscale: f64,
        yscale: f64,
        projdef: &str,
    ) -> Result<()> {
        let where_ = self.where_()?;
        where_.set_long(ATTR_WHERE_XSIZE, xsize)?;
        where_.set_long(ATTR_WHERE_YSIZE, ysize)?;
        where_.set_double(ATTR_WHERE_XSCALE, xscale)?;
        where_.set_double(ATTR_WHERE_YSCALE, yscale)?;
        where_.set_str(ATTR_WHERE_PROJDEF, projdef)
    }

    /// Four-corner lon/lat geography shared by every horizontal product.
    pub fn corners(&self) -> Result<[(f64, f64); 4]> {
        let where_ = self.where_()?;
        Ok([
            (where_.get_double(ATTR_WHERE_LL_LON)?, where_.get_double(ATTR_WHERE_LL_LAT)?),
            (where_.get_double(ATTR_WHERE_UL_LON)?, where_.get_double(ATTR_WHERE_UL_LAT)?),
            (where_.get_double(ATTR_WHERE_UR_LON)?, where_.get_double(ATTR_WHERE_UR_LAT)?),
            (where_.get_double(ATTR_WHERE_LR_LON)?, where_.get_double(ATTR_WHERE_LR_LAT)?),
        ])
    }

    pub fn set_corners(&self, corners: [(f64, f64); 4]) -> Result<()> {
        let where_ = self.where_()?;
        let [(ll_lon, ll_lat), (ul_lon, ul_lat), (ur_lon, ur_lat), (lr_lon, lr_lat)] = corners;
        where_.set_double(ATTR_WHERE_LL_LON, ll_lon)?;
        where_.set_double(ATTR_WHERE_LL_LAT, ll_lat)?;
        where_.set_double(ATTR_WHERE_UL_LON, ul_lon)?;
        where_.set_double(ATTR_WHERE_UL_LAT, ul_lat)?;
        where_.set_double(ATTR_WHERE_UR_LON, ur_lon)?;
        where_.set_double(ATTR_WHERE_UR_LAT, ur_lat)?;
        where_.set_double(ATTR_WHERE_LR_LON, lr_lon)?;
        where_.set_double(ATTR_WHERE_LR_LAT, lr_lat)
    }

    // -- vertical/cross-section product geometry (XSEC datasets) --

    pub fn height_bounds(&self) -> Result<(f64, f64)> {
        let where_ = self.where_()?;
        Ok((
            where_.get_double(ATTR_WHERE_MINHEIGHT)?,
            where_.get_double(ATTR_WHERE_MAXHEIGHT)?,
        ))
    }

    pub fn set_height_bounds(&self, min: f64, max: f64) -> Result<()> {
        let where_ = self.where_()?;
        where_.set_double(ATTR_WHERE_MINHEIGHT, min)?;
        where_.set_double(ATTR_WHERE_MAXHEIGHT, max)
    }

    /// `start_lon/lat` + `stop_lon/lat`, used by HSP/VSP vertical products.
    pub fn vertical_endpoints(&self) -> Result<((f64, f64), (f64, f64))> {
        let where_ = self.where_()?;
        Ok((
            (where_.get_double(ATTR_WHERE_START_LON)?, where_.get_double(ATTR_WHERE_START_LAT)?),
            (where_.get_double(ATTR_WHERE_STOP_LON)?, where_.get_double(ATTR_WHERE_STOP_LAT)?),
        ))
    }

    pub fn set_vertical_endpoints(&self, start: (f64, f64), stop: (f64, f64)) -> Result<()> {
        let where_ = self.where_()?;
        where_.set_double(ATTR_WHERE_START_LON, start.0)?;
        where_.set_double(ATTR_WHERE_START_LAT, start.1)?;
        where_.set_double(ATTR_WHERE_STOP_LON, stop.0)?;
        where_.set_double(ATTR_WHERE_STOP_LAT, stop.1)
    }

    // -- data children --

    pub fn data_count(&self) -> usize {
        crate::tree::count_indexed(&self.group, GROUP_DATA_PREFIX)
    }

    pub fn create_data(&self) -> Result<Data> {
        let (index, group) = crate::tree::create_indexed(&self.group, GROUP_DATA_PREFIX)?;
        Ok(Data::new(group, index))
    }

    pub fn get_data(&self, index: usize) -> Result<Data> {
        let group = crate::tree::get_indexed(&self.group, GROUP_DATA_PREFIX, index)?;
        Ok(Data::new(group, index))
    }

    pub fn remove_data(&self, index: usize) -> Result<()> {
        crate::tree::remove_indexed(&self.group, GROUP_DATA_PREFIX, index)
    }

    /// Whether any child `Data` node stores `quantity`.
    pub fn carries_quantity(&self, quantity: &str) -> bool {
        (0..self.data_count()).any(|i| {
            self.get_data(i)
                .and_then(|d| d.quantity())
                .map(|q| q == quantity)
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::object::Object;
    use odimh5_types::Version;
    use tempfile::NamedTempFile;

    #[test]
    fn polar_geometry_round_trips() {
        let tmp = NamedTempFile::new().unwrap();
        let object = Object::create(tmp.path(), Version::V21).unwrap();
        let dataset = object.create_dataset().unwrap();
        dataset.set_polar_geometry(0.5, 480, 0.0, 250.0, 360, 0).unwrap();
        assert_eq!(dataset.elevation_angle().unwrap(), 0.5);
        assert_eq!(dataset.n_bins().unwrap(), 480);
        assert_eq!(dataset.n_rays().unwrap(), 360);
    }

    #[test]
    fn ray_elevation_angles_expand_when_absent() {
        let tmp = NamedTempFile::new().unwrap();
        let object = Object::create(tmp.path(), Version::V21).unwrap();
        let dataset = object.create_dataset().unwrap();
        dataset.set_polar_geometry(1.5, 480, 0.0, 250.0, 4, 0).unwrap();
        assert_eq!(dataset.ray_elevation_angles().unwrap(), vec![1.5, 1.5, 1.5, 1.5]);
    }

    #[test]
    fn carries_quantity_inspects_children() {
        let tmp = NamedTempFile::new().unwrap();
        let object = Object::create(tmp.path(), Version::V21).unwrap();
        let dataset = object.create_dataset().unwrap();
        let data = dataset.create_data().unwrap();
        data.set_quantity("DBZH").unwrap();
        assert!(dataset.carries_quantity("DBZH"));
        assert!(!dataset.carries_quantity("VRAD"));
    }
}
