/// Group, attribute, and value-table constants defined by the OdimH5
/// specification (groups "what"/"where"/"how", attribute names, and the
/// closed value sets the standard fixes).
///
/// The v2.0 and v2.1 trees are identical here except for the `Conventions`
/// string, which is carried by [`odimh5_types::Version`] rather than
/// duplicated into a second constant table.

pub const GROUP_WHAT: &str = "what";
pub const GROUP_WHERE: &str = "where";
pub const GROUP_HOW: &str = "how";
pub const GROUP_DATASET_PREFIX: &str = "dataset";
pub const GROUP_DATA_PREFIX: &str = "data";
pub const GROUP_QUALITY_PREFIX: &str = "quality";
pub const DATASET_DATA: &str = "data";

pub const ATTR_ROOT_CONVENTIONS: &str = "Conventions";

pub const ATTR_WHAT_OBJECT: &str = "object";
pub const ATTR_WHAT_VERSION: &str = "version";
pub const ATTR_WHAT_DATE: &str = "date";
pub const ATTR_WHAT_TIME: &str = "time";
pub const ATTR_WHAT_SOURCE: &str = "source";
pub const ATTR_WHAT_PRODUCT: &str = "product";
pub const ATTR_WHAT_PRODPAR: &str = "prodpar";
pub const ATTR_WHAT_QUANTITY: &str = "quantity";
pub const ATTR_WHAT_STARTDATE: &str = "startdate";
pub const ATTR_WHAT_STARTTIME: &str = "starttime";
pub const ATTR_WHAT_ENDDATE: &str = "enddate";
pub const ATTR_WHAT_ENDTIME: &str = "endtime";
pub const ATTR_WHAT_GAIN: &str = "gain";
pub const ATTR_WHAT_OFFSET: &str = "offset";
pub const ATTR_WHAT_NODATA: &str = "nodata";
pub const ATTR_WHAT_UNDETECT: &str = "undetect";

pub const ATTR_WHERE_LON: &str = "lon";
pub const ATTR_WHERE_LAT: &str = "lat";
pub const ATTR_WHERE_HEIGHT: &str = "height";
pub const ATTR_WHERE_ELANGLE: &str = "elangle";
pub const ATTR_WHERE_NBINS: &str = "nbins";
pub const ATTR_WHERE_RSTART: &str = "rstart";
pub const ATTR_WHERE_RSCALE: &str = "rscale";
pub const ATTR_WHERE_NRAYS: &str = "nrays";
pub const ATTR_WHERE_A1GATE: &str = "a1gate";
pub const ATTR_WHERE_STARTAZ: &str = "startaz";
pub const ATTR_WHERE_STOPAZ: &str = "stopaz";
pub const ATTR_WHERE_PROJDEF: &str = "projdef";
pub const ATTR_WHERE_XSIZE: &str = "xsize";
pub const ATTR_WHERE_YSIZE: &str = "ysize";
pub const ATTR_WHERE_XSCALE: &str = "xscale";
pub const ATTR_WHERE_YSCALE: &str = "yscale";
pub const ATTR_WHERE_LL_LON: &str = "LL_lon";
pub const ATTR_WHERE_LL_LAT: &str = "LL_lat";
pub const ATTR_WHERE_UL_LON: &str = "UL_lon";
pub const ATTR_WHERE_UL_LAT: &str = "UL_lat";
pub const ATTR_WHERE_UR_LON: &str = "UR_lon";
pub const ATTR_WHERE_UR_LAT: &str = "UR_lat";
pub const ATTR_WHERE_LR_LON: &str = "LR_lon";
pub const ATTR_WHERE_LR_LAT: &str = "LR_lat";
pub const ATTR_WHERE_MINHEIGHT: &str = "minheight";
pub const ATTR_WHERE_MAXHEIGHT: &str = "maxheight";
pub const ATTR_WHERE_AZ_ANGLE: &str = "az_angle";
pub const ATTR_WHERE_ANGLES: &str = "angles";
pub const ATTR_WHERE_RANGE: &str = "range";
pub const ATTR_WHERE_START_LON: &str = "start_lon";
pub const ATTR_WHERE_START_LAT: &str = "start_lat";
pub const ATTR_WHERE_STOP_LON: &str = "stop_lon";
pub const ATTR_WHERE_STOP_LAT: &str = "stop_lat";
pub const ATTR_WHERE_LEVELS: &str = "levels";
pub const ATTR_WHERE_INTERVAL: &str = "interval";

pub const ATTR_HOW_TASK: &str = "task";
pub const ATTR_HOW_STARTEPOCHS: &str = "startepochs";
pub const ATTR_HOW_ENDEPOCHS: &str = "endepochs";
pub const ATTR_HOW_SYSTEM: &str = "system";
pub const ATTR_HOW_SOFTWARE: &str = "software";
pub const ATTR_HOW_SW_VERSION: &str = "sw_version";
pub const ATTR_HOW_ZR_A: &str = "zr_a";
pub const ATTR_HOW_ZR_B: &str = "zr_b";
pub const ATTR_HOW_KR_A: &str = "kr_a";
pub const ATTR_HOW_KR_B: &str = "kr_b";
pub const ATTR_HOW_SIMULATED: &str = "simulated";
pub const ATTR_HOW_BEAMWIDTH: &str = "beamwidth";
pub const ATTR_HOW_WAVELENGTH: &str = "wavelength";
pub const ATTR_HOW_RPM: &str = "rpm";
pub const ATTR_HOW_PULSEWIDTH: &str = "pulsewidth";
pub const ATTR_HOW_RXBANDWIDTH: &str = "RXbandwidth";
pub const ATTR_HOW_LOWPRF: &str = "lowprf";
pub const ATTR_HOW_HIGHPRF: &str = "highprf";
pub const ATTR_HOW_TXLOSS: &str = "TXlossH";
pub const ATTR_HOW_RXLOSS: &str = "RXlossH";
pub const ATTR_HOW_RADOMELOSS: &str = "radomelossH";
pub const ATTR_HOW_ANTGAIN: &str = "antgainH";
pub const ATTR_HOW_BEAMWH: &str = "beamwH";
pub const ATTR_HOW_BEAMWV: &str = "beamwV";
pub const ATTR_HOW_GASATTN: &str = "gasattn";
pub const ATTR_HOW_RADCONSTH: &str = "radconstH";
pub const ATTR_HOW_RADCONSTV: &str = "radconstV";
pub const ATTR_HOW_NOMTXPOWER: &str = "nomTXpower";
pub const ATTR_HOW_TXPOWER: &str = "TXpower";
pub const ATTR_HOW_NI: &str = "NI";
pub const ATTR_HOW_VSAMPLES: &str = "Vsamples";
pub const ATTR_HOW_AZMETHOD: &str = "azmethod";
pub const ATTR_HOW_BINMETHOD: &str = "binmethod";
pub const ATTR_HOW_AZANGLES: &str = "azangles";
pub const ATTR_HOW_ELANGLES: &str = "elangles";
pub const ATTR_HOW_AZTIMES: &str = "aztimes";
pub const ATTR_HOW_STARTAZA: &str = "startazA";
pub const ATTR_HOW_STOPAZA: &str = "stopazA";
pub const ATTR_HOW_STARTAZT: &str = "startazT";
pub const ATTR_HOW_STOPAZT: &str = "stopazT";
pub const ATTR_HOW_POINTACCEL: &str = "pointaccEL";
pub const ATTR_HOW_POINTACCAZ: &str = "pointaccAZ";
pub const ATTR_HOW_MALFUNC: &str = "malfunc";
pub const ATTR_HOW_RADAR_MSG: &str = "radar_msg";
pub const ATTR_HOW_RADHORIZ: &str = "radhoriz";
pub const ATTR_HOW_NEZ: &str = "NEZ";
pub const ATTR_HOW_OUR: &str = "OUR";
pub const ATTR_HOW_DCLUTTER: &str = "Dclutter";
pub const ATTR_HOW_COMMENT: &str = "comment";
pub const ATTR_HOW_SQI: &str = "SQI";
pub const ATTR_HOW_CSR: &str = "CSR";
pub const ATTR_HOW_LOG: &str = "LOG";
pub const ATTR_HOW_VPRCORR: &str = "VPRCorr";
pub const ATTR_HOW_FREEZE: &str = "freeze";
pub const ATTR_HOW_MIN: &str = "min";
pub const ATTR_HOW_MAX: &str = "max";
pub const ATTR_HOW_STEP: &str = "step";
pub const ATTR_HOW_LEVELS: &str = "levels";
pub const ATTR_HOW_PEAKPWR: &str = "peakpwr";
pub const ATTR_HOW_AVGPWR: &str = "avgpwr";
pub const ATTR_HOW_DYNRANGE: &str = "dynrange";
pub const ATTR_HOW_RAC: &str = "RAC";
pub const ATTR_HOW_BBC: &str = "BBC";
pub const ATTR_HOW_PAC: &str = "PAC";
pub const ATTR_HOW_S2N: &str = "S2N";
pub const ATTR_HOW_POLARIZATION: &str = "polarization";
pub const ATTR_HOW_ANGLES: &str = "angles";
pub const ATTR_HOW_AROTATION: &str = "arotation";
pub const ATTR_HOW_CAMETHOD: &str = "camethod";
pub const ATTR_HOW_NODES: &str = "nodes";
pub const ATTR_HOW_ACCNUM: &str = "accnum";

pub const ATTR_CLASS: &str = "CLASS";
pub const CLASS_IMAGE: &str = "IMAGE";
pub const ATTR_IMAGE_VERSION: &str = "IMAGE_VERSION";
pub const IMAGE_VERSION_1_2: &str = "1.2";

pub const SEQUENCE_SEPARATOR: char = ',';
pub const PAIR_SEPARATOR: char = ':';

pub const TRUE_STR: &str = "True";
pub const FALSE_STR: &str = "False";

/// The three-letter keys a `SourceInfo` may carry, in the canonical emission
/// order used by `SourceInfo::to_string`
pub const SOURCE_KEYS: &[&str] = &["WMO", "RAD", "ORG", "PLC", "CTY", "CMT"];

/// Standard software names recognised by `how/software` (not closed: any
/// string is accepted, these are the names the standard lists)
pub const STANDARD_SOFTWARE: &[&str] = &[
    "CASTOR", "EDGE", "FROG", "IRIS", "NORDRAD", "RADARNET", "RAINBOW",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_keys_are_three_letters() {
        for key in SOURCE_KEYS {
            assert_eq!(key.len(), 3);
        }
    }
}
