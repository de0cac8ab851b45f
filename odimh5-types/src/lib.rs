/// Common types and constants shared across the odimh5 ecosystem

use serde::{Deserialize, Serialize};

/// ODIM_H5 convention version this crate can read and write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    /// ODIM_H5/V2_0
    V20,
    /// ODIM_H5/V2_1
    V21,
}

impl Version {
    /// The literal value of the root `Conventions` attribute for this version
    pub fn conventions_str(self) -> &'static str {
        match self {
            Version::V20 => "ODIM_H5/V2_0",
            Version::V21 => "ODIM_H5/V2_1",
        }
    }

    /// Parse a `Conventions` attribute value, if it names a version this crate knows
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ODIM_H5/V2_0" => Some(Version::V20),
            "ODIM_H5/V2_1" => Some(Version::V21),
            _ => None,
        }
    }
}

/// Root-level object kind (`what/object`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Polar volume
    Pvol,
    /// Cartesian volume
    Cvol,
    /// Single polar scan (sweep)
    Scan,
    /// Single polar ray
    Ray,
    /// Azimuthal object
    Azim,
    /// Cartesian image
    Image,
    /// Cartesian composite
    Comp,
    /// Cross section
    Xsec,
    /// Vertical profile
    Vp,
    /// Embedded picture
    Pic,
}

impl ObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Pvol => "PVOL",
            ObjectKind::Cvol => "CVOL",
            ObjectKind::Scan => "SCAN",
            ObjectKind::Ray => "RAY",
            ObjectKind::Azim => "AZIM",
            ObjectKind::Image => "IMAGE",
            ObjectKind::Comp => "COMP",
            ObjectKind::Xsec => "XSEC",
            ObjectKind::Vp => "VP",
            ObjectKind::Pic => "PIC",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "PVOL" => ObjectKind::Pvol,
            "CVOL" => ObjectKind::Cvol,
            "SCAN" => ObjectKind::Scan,
            "RAY" => ObjectKind::Ray,
            "AZIM" => ObjectKind::Azim,
            "IMAGE" => ObjectKind::Image,
            "COMP" => ObjectKind::Comp,
            "XSEC" => ObjectKind::Xsec,
            "VP" => ObjectKind::Vp,
            "PIC" => ObjectKind::Pic,
            _ => return None,
        })
    }

    /// Whether objects of this kind own polar (sweep) datasets rather than 2-D products
    pub fn is_polar(self) -> bool {
        matches!(self, ObjectKind::Pvol | ObjectKind::Scan)
    }
}

/// Dataset-level product tag (`what/product`)
///
/// `LbmArpa` is `NEW:LBM_ARPA`, a non-standard ARPA-SIMC extension kept for
/// round-trip compatibility with files written by the original C++ library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductKind {
    Scan,
    Ppi,
    Cappi,
    Pcappi,
    Etop,
    Max,
    Rr,
    Vil,
    Comp,
    Vp,
    Rhi,
    Xsec,
    Vsp,
    Hsp,
    Ray,
    Azim,
    Qual,
    LbmArpa,
}

impl ProductKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Scan => "SCAN",
            ProductKind::Ppi => "PPI",
            ProductKind::Cappi => "CAPPI",
            ProductKind::Pcappi => "PCAPPI",
            ProductKind::Etop => "ETOP",
            ProductKind::Max => "MAX",
            ProductKind::Rr => "RR",
            ProductKind::Vil => "VIL",
            ProductKind::Comp => "COMP",
            ProductKind::Vp => "VP",
            ProductKind::Rhi => "RHI",
            ProductKind::Xsec => "XSEC",
            ProductKind::Vsp => "VSP",
            ProductKind::Hsp => "HSP",
            ProductKind::Ray => "RAY",
            ProductKind::Azim => "AZIM",
            ProductKind::Qual => "QUAL",
            ProductKind::LbmArpa => "NEW:LBM_ARPA",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "SCAN" => ProductKind::Scan,
            "PPI" => ProductKind::Ppi,
            "CAPPI" => ProductKind::Cappi,
            "PCAPPI" => ProductKind::Pcappi,
            "ETOP" => ProductKind::Etop,
            "MAX" => ProductKind::Max,
            "RR" => ProductKind::Rr,
            "VIL" => ProductKind::Vil,
            "COMP" => ProductKind::Comp,
            "VP" => ProductKind::Vp,
            "RHI" => ProductKind::Rhi,
            "XSEC" => ProductKind::Xsec,
            "VSP" => ProductKind::Vsp,
            "HSP" => ProductKind::Hsp,
            "RAY" => ProductKind::Ray,
            "AZIM" => ProductKind::Azim,
            "QUAL" => ProductKind::Qual,
            "NEW:LBM_ARPA" => ProductKind::LbmArpa,
            _ => return None,
        })
    }

    /// Horizontal (cartesian, ground-projected) product family sharing the
    /// 2-D cartesian + how-cartesian attribute surface
    pub fn is_horizontal(self) -> bool {
        matches!(
            self,
            ProductKind::Ppi
                | ProductKind::Cappi
                | ProductKind::Pcappi
                | ProductKind::Etop
                | ProductKind::Max
                | ProductKind::Rr
                | ProductKind::Vil
                | ProductKind::LbmArpa
                | ProductKind::Comp
        )
    }

    /// Vertical (cross-section/panel) product family
    pub fn is_vertical(self) -> bool {
        matches!(
            self,
            ProductKind::Xsec | ProductKind::Rhi | ProductKind::Hsp | ProductKind::Vsp
        )
    }
}

/// Stored matrix element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElemType {
    Int8,
    UInt8,
    UInt16,
    Float32,
    /// No matrix present
    Opaque,
}

impl ElemType {
    pub fn size_of(self) -> usize {
        match self {
            ElemType::Int8 | ElemType::UInt8 => 1,
            ElemType::UInt16 => 2,
            ElemType::Float32 => 4,
            ElemType::Opaque => 0,
        }
    }

    /// Matrices of this element type carry the `CLASS=IMAGE` / `IMAGE_VERSION=1.2`
    /// image-convention attributes
    pub fn is_image_convention(self) -> bool {
        matches!(self, ElemType::UInt8)
    }
}

/// Interpolation/aggregation method used for azmethod, binmethod, camethod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Nearest,
    Interpol,
    Average,
    Random,
    Mde,
    Latest,
    Maximum,
    Domain,
    Vad,
    Vvp,
    Rga,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Nearest => "NEAREST",
            Method::Interpol => "INTERPOL",
            Method::Average => "AVERAGE",
            Method::Random => "RANDOM",
            Method::Mde => "MDE",
            Method::Latest => "LATEST",
            Method::Maximum => "MAXIMUM",
            Method::Domain => "DOMAIN",
            Method::Vad => "VAD",
            Method::Vvp => "VVP",
            Method::Rga => "RGA",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "NEAREST" => Method::Nearest,
            "INTERPOL" => Method::Interpol,
            "AVERAGE" => Method::Average,
            "RANDOM" => Method::Random,
            "MDE" => Method::Mde,
            "LATEST" => Method::Latest,
            "MAXIMUM" => Method::Maximum,
            "DOMAIN" => Method::Domain,
            "VAD" => Method::Vad,
            "VVP" => Method::Vvp,
            "RGA" => Method::Rga,
            _ => return None,
        })
    }
}

/// Transmit/antenna polarization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarization {
    Horizontal,
    Vertical,
}

impl Polarization {
    pub fn as_str(self) -> &'static str {
        match self {
            Polarization::Horizontal => "H",
            Polarization::Vertical => "V",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "H" => Some(Polarization::Horizontal),
            "V" => Some(Polarization::Vertical),
            _ => None,
        }
    }
}

/// Direction of antenna rotation, derived from `rpm` or ray acquisition order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise = 1,
    CounterClockwise = -1,
}

impl Direction {
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

/// Standard measured-quantity tags (`what/quantity`), per OdimH5 table 8 and the
/// vertical-profile lowercase variants. This set is descriptive, not closed: a
/// `Data` node accepts any quantity string, but these constants name the ones
/// the standard defines.
pub mod quantities {
    pub const TH: &str = "TH";
    pub const TV: &str = "TV";
    pub const DBZH: &str = "DBZH";
    pub const DBZV: &str = "DBZV";
    pub const ZDR: &str = "ZDR";
    pub const RHOHV: &str = "RHOHV";
    pub const LDR: &str = "LDR";
    pub const PHIDP: &str = "PHIDP";
    pub const KDP: &str = "KDP";
    pub const SQI: &str = "SQI";
    pub const SNR: &str = "SNR";
    pub const RATE: &str = "RATE";
    pub const ACRR: &str = "ACRR";
    pub const HGHT: &str = "HGHT";
    pub const VIL: &str = "VIL";
    pub const VRAD: &str = "VRAD";
    pub const WRAD: &str = "WRAD";
    pub const UWND: &str = "UWND";
    pub const VWND: &str = "VWND";
    pub const BRDR: &str = "BRDR";
    pub const QIND: &str = "QIND";
    pub const CLASS: &str = "CLASS";

    /// Vertical-profile quantities (lowercase per the standard)
    pub const FF: &str = "ff";
    pub const DD: &str = "dd";
    pub const FF_DEV: &str = "ff_dev";
    pub const DD_DEV: &str = "dd_dev";
    pub const N: &str = "n";
    pub const DBZ: &str = "dbz";
    pub const DBZ_DEV: &str = "dbz_dev";
    pub const Z: &str = "z";
    pub const Z_DEV: &str = "z_dev";
    pub const W: &str = "w";
    pub const W_DEV: &str = "w_dev";
    pub const DIV: &str = "div";
    pub const DIV_DEV: &str = "div_dev";
    pub const DEF: &str = "def";
    pub const DEF_DEV: &str = "def_dev";
    pub const AD: &str = "ad";
    pub const AD_DEV: &str = "ad_dev";
    pub const CHI2: &str = "chi2";
    pub const RHOHV_LOWER: &str = "rhohv";
    pub const RHOHV_DEV: &str = "rhohv_dev";

    /// All standard quantity names, for validation/introspection
    pub const ALL: &[&str] = &[
        TH, TV, DBZH, DBZV, ZDR, RHOHV, LDR, PHIDP, KDP, SQI, SNR, RATE, ACRR, HGHT, VIL, VRAD,
        WRAD, UWND, VWND, BRDR, QIND, CLASS, FF, DD, FF_DEV, DD_DEV, N, DBZ, DBZ_DEV, Z, Z_DEV, W,
        W_DEV, DIV, DIV_DEV, DEF, DEF_DEV, AD, AD_DEV, CHI2, RHOHV_LOWER, RHOHV_DEV,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_round_trips() {
        assert_eq!(Version::parse("ODIM_H5/V2_0"), Some(Version::V20));
        assert_eq!(Version::parse("ODIM_H5/V2_1"), Some(Version::V21));
        assert_eq!(Version::parse("bogus"), None);
        assert_eq!(Version::V20.conventions_str(), "ODIM_H5/V2_0");
    }

    #[test]
    fn object_kind_round_trips() {
        for kind in [
            ObjectKind::Pvol,
            ObjectKind::Cvol,
            ObjectKind::Scan,
            ObjectKind::Image,
            ObjectKind::Comp,
            ObjectKind::Xsec,
        ] {
            assert_eq!(ObjectKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn product_kind_lbm_arpa_round_trips() {
        assert_eq!(ProductKind::LbmArpa.as_str(), "NEW:LBM_ARPA");
        assert_eq!(
            ProductKind::parse("NEW:LBM_ARPA"),
            Some(ProductKind::LbmArpa)
        );
    }

    #[test]
    fn product_family_membership() {
        assert!(ProductKind::Ppi.is_horizontal());
        assert!(!ProductKind::Ppi.is_vertical());
        assert!(ProductKind::Rhi.is_vertical());
        assert!(!ProductKind::Rhi.is_horizontal());
    }
}
