/// Product polymorphism and polar-volume convenience operations
///
/// The original engine models `Product_2D`/`Horizontal_Product_2D`/
/// `Vertical_Product_2D`/`PolarScan` as a class hierarchy four levels deep.
/// [`tree::dataset::Dataset`] already exposes the union of every branch's
/// attribute surface, so the traits here exist for call-site clarity and
/// dispatch -- "does this dataset have cartesian geometry" -- rather than
/// to hold new state; `Dataset` implements all three unconditionally and
/// callers branch on `ProductKind`/`ObjectKind` to decide which trait's
/// methods are meaningful for the dataset they hold, the same way the
/// original branched on `instanceof`.

use chrono::NaiveTime;
use odimh5_types::Direction;

use crate::codec::composite::AzimuthAnglePair;
use crate::error::Result;
use crate::tree::dataset::Dataset;
use crate::tree::object::Object;

/// 2-D cartesian geometry: projection, x/y size and scale, four-corner geography.
pub trait HasCartesianGeometry {
    fn cartesian_size(&self) -> Result<(i64, i64)>;
    fn cartesian_scale(&self) -> Result<(f64, f64)>;
    fn projection_definition(&self) -> Result<String>;
    fn corners(&self) -> Result<[(f64, f64); 4]>;
}

impl HasCartesianGeometry for Dataset {
    fn cartesian_size(&self) -> Result<(i64, i64)> {
        Dataset::cartesian_size(self)
    }
    fn cartesian_scale(&self) -> Result<(f64, f64)> {
        Dataset::cartesian_scale(self)
    }
    fn projection_definition(&self) -> Result<String> {
        Dataset::projection_definition(self)
    }
    fn corners(&self) -> Result<[(f64, f64); 4]> {
        Dataset::corners(self)
    }
}

/// Polar sweep geometry: elevation angle, range/ray counts and scale, a1gate.
pub trait HasPolarGeometry {
    fn elevation_angle(&self) -> Result<f64>;
    fn n_bins(&self) -> Result<i64>;
    fn n_rays(&self) -> Result<i64>;
    fn range_start(&self) -> Result<f64>;
    fn range_scale(&self) -> Result<f64>;
    fn a1_gate(&self) -> Result<i64>;
    fn azimuth_bounds(&self) -> Result<AzimuthAnglePair>;
}

impl HasPolarGeometry for Dataset {
    fn elevation_angle(&self) -> Result<f64> {
        Dataset::elevation_angle(self)
    }
    fn n_bins(&self) -> Result<i64> {
        Dataset::n_bins(self)
    }
    fn n_rays(&self) -> Result<i64> {
        Dataset::n_rays(self)
    }
    fn range_start(&self) -> Result<f64> {
        Dataset::range_start(self)
    }
    fn range_scale(&self) -> Result<f64> {
        Dataset::range_scale(self)
    }
    fn a1_gate(&self) -> Result<i64> {
        Dataset::a1_gate(self)
    }
    fn azimuth_bounds(&self) -> Result<AzimuthAnglePair> {
        Dataset::azimuth_bounds(self)
    }
}

/// The polar `how` attribute set (radar system metadata) shared by every
/// scan dataset regardless of the owning object's kind.
pub trait HasHowPolar {
    fn rpm(&self) -> Option<f64>;
    fn ray_elevation_angles(&self) -> Result<Vec<f64>>;
    fn ray_start_azimuth_times(&self) -> Result<Vec<NaiveTime>>;
    fn ray_stop_azimuth_times(&self) -> Result<Vec<NaiveTime>>;
}

impl HasHowPolar for Dataset {
    fn rpm(&self) -> Option<f64> {
        Dataset::rpm(self)
    }
    fn ray_elevation_angles(&self) -> Result<Vec<f64>> {
        Dataset::ray_elevation_angles(self)
    }
    fn ray_start_azimuth_times(&self) -> Result<Vec<NaiveTime>> {
        Dataset::ray_start_azimuth_times(self)
    }
    fn ray_stop_azimuth_times(&self) -> Result<Vec<NaiveTime>> {
        Dataset::ray_stop_azimuth_times(self)
    }
}

/// `elangle` of every scan dataset owned by `volume`, in storage order.
pub fn list_scan_elevation_angles(volume: &Object) -> Result<Vec<f64>> {
    (0..volume.dataset_count())
        .map(|i| volume.get_dataset(i)?.elevation_angle())
        .collect()
}

/// The above, deduplicated while preserving first-occurrence order.
pub fn list_distinct_elevation_angles(volume: &Object) -> Result<Vec<f64>> {
    let mut seen = Vec::new();
    for angle in list_scan_elevation_angles(volume)? {
        if !seen.iter().any(|s: &f64| (*s - angle).abs() < f64::EPSILON) {
            seen.push(angle);
        }
    }
    Ok(seen)
}

/// Scan datasets whose `elangle` falls within `[min_el, max_el]`.
pub fn scans_within(volume: &Object, min_el: f64, max_el: f64) -> Result<Vec<Dataset>> {
    let mut out = Vec::new();
    for i in 0..volume.dataset_count() {
        let dataset = volume.get_dataset(i)?;
        let elangle = dataset.elevation_angle()?;
        if elangle >= min_el && elangle <= max_el {
            out.push(dataset);
        }
    }
    Ok(out)
}

/// Scan datasets carrying a Data child measuring `quantity`.
pub fn scans_carrying_quantity(volume: &Object, quantity: &str) -> Result<Vec<Dataset>> {
    let mut out = Vec::new();
    for i in 0..volume.dataset_count() {
        let dataset = volume.get_dataset(i)?;
        if dataset.carries_quantity(quantity) {
            out.push(dataset);
        }
    }
    Ok(out)
}

/// Antenna rotation direction for `dataset`: `rpm` sign if present and
/// non-zero, otherwise inferred from the monotonicity of `startazT`.
pub fn direction(dataset: &Dataset) -> Result<Direction> {
    if let Some(rpm) = dataset.rpm() {
        if rpm > 0.0 {
            return Ok(Direction::Clockwise);
        }
        if rpm < 0.0 {
            return Ok(Direction::CounterClockwise);
        }
    }
    let times = dataset.ray_start_azimuth_times()?;
    let non_decreasing = times.windows(2).all(|w| w[1] >= w[0]);
    Ok(if non_decreasing {
        Direction::Clockwise
    } else {
        Direction::CounterClockwise
    })
}

/// Maps ray index `i` (0-based, in `data` storage order) to its index in
/// acquisition order, given `direction`, `nrays` and `a1gate`.
pub fn original_ray_index(i: i64, direction: Direction, nrays: i64, a1gate: i64) -> i64 {
    match direction {
        Direction::Clockwise => (i + a1gate).rem_euclid(nrays),
        Direction::CounterClockwise => (nrays + a1gate - i).rem_euclid(nrays),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::object::Object;
    use odimh5_types::{ObjectKind, Version};
    use tempfile::NamedTempFile;

    #[test]
    fn distinct_elevation_angles_preserve_first_occurrence_order() {
        let tmp = NamedTempFile::new().unwrap();
        let volume = Object::create_kind(tmp.path(), Version::V21, ObjectKind::Pvol).unwrap();
        for elangle in [0.5, 1.5, 0.5, 2.5] {
            let dataset = volume.create_dataset().unwrap();
            dataset.set_polar_geometry(elangle, 1, 0.0, 1.0, 1, 0).unwrap();
        }
        assert_eq!(list_distinct_elevation_angles(&volume).unwrap(), vec![0.5, 1.5, 2.5]);
    }

    #[test]
    fn scans_within_filters_by_elevation() {
        let tmp = NamedTempFile::new().unwrap();
        let volume = Object::create_kind(tmp.path(), Version::V21, ObjectKind::Pvol).unwrap();
        for elangle in [0.5, 1.5, 2.5] {
            let dataset = volume.create_dataset().unwrap();
            dataset.set_polar_geometry(elangle, 1, 0.0, 1.0, 1, 0).unwrap();
        }
        let matched = scans_within(&volume, 1.0, 2.0).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].elevation_angle().unwrap(), 1.5);
    }

    #[test]
    fn original_ray_index_handles_both_directions() {
        assert_eq!(original_ray_index(0, Direction::Clockwise, 360, 10), 10);
        assert_eq!(original_ray_index(0, Direction::CounterClockwise, 360, 10), 10);
        assert_eq!(original_ray_index(350, Direction::Clockwise, 360, 10), 0);
    }
}
