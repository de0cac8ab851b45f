/// End-to-end scenarios exercising the tree, codec, matrix and factory
/// layers together against real (tempfile-backed) HDF5 files.

use ndarray::Array2;
use odimh5::codec::composite::SourceInfo;
use odimh5::factory;
use odimh5::matrix::Matrix;
use odimh5::tree::object::OpenMode;
use odimh5_types::{ElemType, ObjectKind, ProductKind, Version};
use tempfile::NamedTempFile;

#[test]
fn round_trip_a_polar_volume() {
    let tmp = NamedTempFile::new().unwrap();

    {
        let volume = factory::V21.create_polar_volume(tmp.path()).unwrap();
        let what = volume.what().unwrap();
        what.set_date("date", chrono::NaiveDate::from_ymd_opt(2000, 1, 2).unwrap())
            .unwrap();
        what.set_time("time", chrono::NaiveTime::from_hms_opt(3, 4, 5).unwrap())
            .unwrap();
        volume
            .set_source(&SourceInfo::parse("WMO:12345,CMT:unknown").unwrap())
            .unwrap();

        let scan = volume.create_dataset().unwrap();
        scan.set_polar_geometry(0.5, 256, 0.0, 1000.0, 360, 0).unwrap();

        let data = scan.create_data().unwrap();
        data.set_quantity("DBZH").unwrap();
        data.set_gain_offset(0.5, -32.0).unwrap();
        data.set_sentinels(Some(255.0), Some(0.0)).unwrap();

        let mut raw = Array2::<u8>::zeros((360, 256));
        for r in 0..360 {
            for b in 0..256 {
                raw[[r, b]] = ((r + b) % 256) as u8;
            }
        }
        data.write_matrix(&Matrix::UInt8(raw)).unwrap();
    }

    let volume = factory::V21.open(tmp.path(), OpenMode::ReadOnly).unwrap();
    assert_eq!(volume.object_kind().unwrap(), ObjectKind::Pvol);
    let what = volume.what().unwrap();
    assert_eq!(
        what.get_date("date").unwrap(),
        chrono::NaiveDate::from_ymd_opt(2000, 1, 2).unwrap()
    );
    assert_eq!(volume.source().unwrap().wmo.as_deref(), Some("12345"));

    let scan = volume.get_dataset(0).unwrap();
    assert_eq!(scan.elevation_angle().unwrap(), 0.5);
    assert_eq!(scan.n_bins().unwrap(), 256);
    assert_eq!(scan.n_rays().unwrap(), 360);

    let data = scan.get_data(0).unwrap();
    assert_eq!(data.quantity().unwrap(), "DBZH");
    match data.read_matrix().unwrap() {
        Matrix::UInt8(m) => {
            for r in 0..360 {
                for b in 0..256 {
                    assert_eq!(m[[r, b]], ((r + b) % 256) as u8);
                }
            }
        }
        other => panic!("expected UInt8, got {other:?}"),
    }
}

#[test]
fn element_type_migration_round_trips_u16() {
    let tmp = NamedTempFile::new().unwrap();
    {
        let image = factory::V21.create_image(tmp.path()).unwrap();
        let product = image.create_dataset().unwrap();
        product.set_product(ProductKind::Ppi).unwrap();
        product
            .set_cartesian_geometry(256, 256, 1000.0, 1000.0, "+proj=gnom")
            .unwrap();
        product
            .set_corners([(10.0, 40.0), (10.0, 45.0), (15.0, 45.0), (15.0, 40.0)])
            .unwrap();

        let data = product.create_data().unwrap();
        data.set_quantity("DBZH").unwrap();
        data.set_gain_offset(0.001, 0.0).unwrap();
        data.set_sentinels(Some(65535.0), Some(0.0)).unwrap();

        let mut raw = Array2::<u16>::zeros((256, 256));
        for i in 0..256 {
            for j in 0..256 {
                raw[[i, j]] = (65 + (i * j) % 65) as u16;
            }
        }
        data.write_matrix(&Matrix::UInt16(raw)).unwrap();
    }

    let image = factory::V21.open(tmp.path(), OpenMode::ReadOnly).unwrap();
    let product = image.get_dataset(0).unwrap();
    assert_eq!(product.product().unwrap(), ProductKind::Ppi);
    let data = product.get_data(0).unwrap();
    match data.read_matrix().unwrap() {
        Matrix::UInt16(m) => {
            for i in 0..256 {
                for j in 0..256 {
                    assert_eq!(m[[i, j]], (65 + (i * j) % 65) as u16);
                }
            }
        }
        other => panic!("expected UInt16, got {other:?}"),
    }
}

#[test]
fn dense_renumbering_survives_removal_from_the_middle() {
    let tmp = NamedTempFile::new().unwrap();
    let image = factory::V21.create_image(tmp.path()).unwrap();
    for i in 0..4 {
        let product = image.create_dataset().unwrap();
        product.what().unwrap().set_long("marker", i).unwrap();
    }
    image.remove_dataset(1).unwrap();
    assert_eq!(image.dataset_count(), 3);
    let markers: Vec<i64> = (0..3)
        .map(|i| image.get_dataset(i).unwrap().what().unwrap().get_long("marker").unwrap())
        .collect();
    assert_eq!(markers, vec![0, 2, 3]);
}

#[test]
fn version_guard_blocks_cross_version_open_without_override() {
    let tmp = NamedTempFile::new().unwrap();
    factory::V21.create_polar_volume(tmp.path()).unwrap();

    assert!(factory::V20.open(tmp.path(), OpenMode::ReadOnly).is_err());

    std::env::set_var("RADARLIB_SKIP_CHECK_VERSION", "yes");
    let opened = factory::V20.open(tmp.path(), OpenMode::ReadOnly);
    std::env::remove_var("RADARLIB_SKIP_CHECK_VERSION");
    assert!(opened.is_ok());
}

#[test]
fn source_info_parses_partial_and_rejects_bad_keys() {
    let parsed = SourceInfo::parse("WMO:16144,RAD:IY41,PLC:Gattatico,CMT:Radar").unwrap();
    assert_eq!(parsed.wmo.as_deref(), Some("16144"));
    assert_eq!(parsed.cty, None);
    assert_eq!(
        parsed.to_string(),
        "WMO:16144,RAD:IY41,PLC:Gattatico,CMT:Radar"
    );

    let empty_field = SourceInfo::parse("WMO:").unwrap();
    assert_eq!(empty_field.wmo.as_deref(), Some(""));

    assert!(SourceInfo::parse("ABCD:x").is_err());
}

#[test]
fn attributes_copy_verbatim_across_files_like_a_product_splitter() {
    let src_tmp = NamedTempFile::new().unwrap();
    let src = factory::V21.create_image(src_tmp.path()).unwrap();
    let product = src.create_dataset().unwrap();
    product.set_product(ProductKind::Ppi).unwrap();
    product
        .set_cartesian_geometry(16, 16, 500.0, 500.0, "+proj=gnom")
        .unwrap();
    let data = product.create_data().unwrap();
    data.set_quantity("DBZH").unwrap();
    data.set_gain_offset(1.0, 0.0).unwrap();
    data.write_matrix(&Matrix::UInt8(Array2::<u8>::from_elem((16, 16), 7)))
        .unwrap();

    let dst_tmp = NamedTempFile::new().unwrap();
    {
        let dst = factory::V21.create_image(dst_tmp.path()).unwrap();
        let dst_product = dst.create_dataset().unwrap();
        dst_product.set_product(product.product().unwrap()).unwrap();
        odimh5::backend::hdf5_adapter::copy_attributes(
            product.what().unwrap().group(),
            dst_product.what().unwrap().group(),
        )
        .unwrap();
        let dst_data = dst_product.create_data().unwrap();
        odimh5::backend::hdf5_adapter::copy_attributes(
            data.what().unwrap().group(),
            dst_data.what().unwrap().group(),
        )
        .unwrap();
        dst_data.write_matrix(&data.read_matrix().unwrap()).unwrap();
    }

    let dst = factory::V21.open(dst_tmp.path(), OpenMode::ReadOnly).unwrap();
    let dst_product = dst.get_dataset(0).unwrap();
    assert_eq!(dst_product.product().unwrap(), ProductKind::Ppi);
    let dst_data = dst_product.get_data(0).unwrap();
    assert_eq!(dst_data.quantity().unwrap(), "DBZH");
    assert_eq!(dst_data.read_matrix().unwrap(), data.read_matrix().unwrap());
}
