/// Composite attribute value grammars
///
/// A handful of OdimH5 attributes pack more than one field into a single
/// string-typed attribute. Grounded on the `parse`/`toString` pairs of
/// `radarlib::odimh5v20::ModelVersion`, `SourceInfo`, `AZAngles`, `AZTimes`,
/// `VILHeights`, `Angles`, `Arotation` and `Nodes` in
/// `odimh5v20_support.hpp`; the text grammars below are carried over
/// unchanged since they are wire format, not implementation detail.

use crate::constants::SOURCE_KEYS;
use crate::error::{OdimError, Result};
use chrono::{NaiveDate, NaiveTime};

fn fmt_err(attribute: &str, detail: impl Into<String>) -> OdimError {
    OdimError::format(attribute, detail)
}

/// `what/version`: `H5rad M.m` (a whole-number major/minor pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelVersion {
    pub major: u32,
    pub minor: u32,
}

impl ModelVersion {
    pub fn parse(s: &str) -> Result<Self> {
        let rest = s
            .strip_prefix("H5rad ")
            .ok_or_else(|| fmt_err("what/version", format!("'{s}' missing 'H5rad ' prefix")))?;
        let (maj, min) = rest
            .split_once('.')
            .ok_or_else(|| fmt_err("what/version", format!("'{s}' missing '.' separator")))?;
        let major = maj
            .parse()
            .map_err(|_| fmt_err("what/version", format!("'{maj}' is not a number")))?;
        let minor = min
            .parse()
            .map_err(|_| fmt_err("what/version", format!("'{min}' is not a number")))?;
        Ok(ModelVersion { major, minor })
    }
}

impl std::fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "H5rad {}.{}", self.major, self.minor)
    }
}

/// `what/source`: a comma-separated `KEY:value` list over a fixed key set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInfo {
    pub wmo: Option<String>,
    pub rad: Option<String>,
    pub org: Option<String>,
    pub plc: Option<String>,
    pub cty: Option<String>,
    pub cmt: Option<String>,
}

impl SourceInfo {
    pub fn parse(s: &str) -> Result<Self> {
        let mut out = SourceInfo::default();
        if s.trim().is_empty() {
            return Ok(out);
        }
        for field in s.split(',') {
            let (key, value) = field.trim().split_once(':').ok_or_else(|| {
                fmt_err("what/source", format!("field '{field}' missing ':'"))
            })?;
            if !SOURCE_KEYS.contains(&key) {
                return Err(fmt_err(
                    "what/source",
                    format!("unknown source key '{key}'"),
                ));
            }
            let value = value.to_string();
            match key {
                "WMO" => out.wmo = Some(value),
                "RAD" => out.rad = Some(value),
                "ORG" => out.org = Some(value),
                "PLC" => out.plc = Some(value),
                "CTY" => out.cty = Some(value),
                "CMT" => out.cmt = Some(value),
                _ => unreachable!(),
            }
        }
        Ok(out)
    }
}

impl std::fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<String> = [
            ("WMO", &self.wmo),
            ("RAD", &self.rad),
            ("ORG", &self.org),
            ("PLC", &self.plc),
            ("CTY", &self.cty),
            ("CMT", &self.cmt),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| format!("{k}:{v}")))
        .collect();
        write!(f, "{}", fields.join(","))
    }
}

/// `where/startaz`+`where/stopaz` or `how/startazA`+`how/stopazA` when
/// stored as a single `start:stop` pair rather than two scalars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AzimuthAnglePair {
    pub start: f64,
    pub stop: f64,
}

impl AzimuthAnglePair {
    pub fn parse(attribute: &str, s: &str) -> Result<Self> {
        let (a, b) = s
            .split_once(':')
            .ok_or_else(|| fmt_err(attribute, format!("'{s}' missing ':' separator")))?;
        let start = a
            .parse()
            .map_err(|_| fmt_err(attribute, format!("'{a}' is not a number")))?;
        let stop = b
            .parse()
            .map_err(|_| fmt_err(attribute, format!("'{b}' is not a number")))?;
        Ok(AzimuthAnglePair { start, stop })
    }
}

impl std::fmt::Display for AzimuthAnglePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start, self.stop)
    }
}

/// `how/startazT`+`how/stopazT`: a `HHMMSS.sss:HHMMSS.sss` time pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AzimuthTimePair {
    pub start: NaiveTime,
    pub stop: NaiveTime,
}

const AZ_TIME_FMT: &str = "%H%M%S%.3f";

impl AzimuthTimePair {
    pub fn parse(attribute: &str, s: &str) -> Result<Self> {
        let (a, b) = s
            .split_once(':')
            .ok_or_else(|| fmt_err(attribute, format!("'{s}' missing ':' separator")))?;
        let start = NaiveTime::parse_from_str(a, AZ_TIME_FMT)
            .map_err(|_| fmt_err(attribute, format!("'{a}' is not HHMMSS.sss")))?;
        let stop = NaiveTime::parse_from_str(b, AZ_TIME_FMT)
            .map_err(|_| fmt_err(attribute, format!("'{b}' is not HHMMSS.sss")))?;
        Ok(AzimuthTimePair { start, stop })
    }
}

impl std::fmt::Display for AzimuthTimePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}",
            self.start.format(AZ_TIME_FMT),
            self.stop.format(AZ_TIME_FMT)
        )
    }
}

/// `where/levels` VP height bounds: `bottom,top`. Unlike every other pair
/// in this module it is comma-separated, not colon-separated -- a
/// deliberate OdimH5 inconsistency, not a transcription slip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VilHeights {
    pub bottom: f64,
    pub top: f64,
}

impl VilHeights {
    pub fn parse(s: &str) -> Result<Self> {
        let (a, b) = s
            .split_once(',')
            .ok_or_else(|| fmt_err("where/levels", format!("'{s}' missing ',' separator")))?;
        let bottom = a
            .parse()
            .map_err(|_| fmt_err("where/levels", format!("'{a}' is not a number")))?;
        let top = b
            .parse()
            .map_err(|_| fmt_err("where/levels", format!("'{b}' is not a number")))?;
        Ok(VilHeights { bottom, top })
    }
}

impl std::fmt::Display for VilHeights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.bottom, self.top)
    }
}

/// Parses a comma-separated sequence of `f64`s, as used by `how/elangles`,
/// `how/azangles`, `where/angles` and similar "one value per ray/scan"
/// attributes.
pub fn parse_angle_sequence(attribute: &str, s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|tok| {
            tok.trim()
                .parse()
                .map_err(|_| fmt_err(attribute, format!("'{tok}' is not a number")))
        })
        .collect()
}

/// Degrees precision used when a caller doesn't have a more specific value
/// in mind -- matches the two decimal digits real ODIM writers use for
/// elevation/azimuth sequences.
pub const DEFAULT_ANGLE_PRECISION: usize = 2;

/// Formats `values` as a comma-separated fixed-point sequence at `precision`
/// decimal digits, per the library-wide precision parameter on float
/// sequence writers.
pub fn format_angle_sequence(values: &[f64], precision: usize) -> String {
    values
        .iter()
        .map(|v| format!("{v:.precision$}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// `how/aztimes`: a comma-separated sequence of `HHMMSS.sss` timestamps,
/// one per ray.
pub fn parse_time_sequence(attribute: &str, s: &str) -> Result<Vec<NaiveTime>> {
    s.split(',')
        .map(|tok| {
            NaiveTime::parse_from_str(tok.trim(), AZ_TIME_FMT)
                .map_err(|_| fmt_err(attribute, format!("'{tok}' is not HHMMSS.sss")))
        })
        .collect()
}

pub fn format_time_sequence(values: &[NaiveTime]) -> String {
    values
        .iter()
        .map(|v| v.format(AZ_TIME_FMT).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// `how/nodes`: a comma-separated sequence of single-quoted node ids, e.g.
/// `'NL50','NL51'`.
pub fn parse_node_sequence(attribute: &str, s: &str) -> Result<Vec<String>> {
    s.split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.strip_prefix('\'')
                .and_then(|t| t.strip_suffix('\''))
                .map(|t| t.to_string())
                .ok_or_else(|| fmt_err(attribute, format!("'{tok}' is not a quoted node id")))
        })
        .collect()
}

pub fn format_node_sequence(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(",")
}

/// `what/date`+`what/time`: `%Y%m%d`/`%H%M%S`.
pub fn parse_date(attribute: &str, s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .map_err(|_| fmt_err(attribute, format!("'{s}' is not YYYYMMDD")))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}

pub fn parse_time(attribute: &str, s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H%M%S")
        .map_err(|_| fmt_err(attribute, format!("'{s}' is not HHMMSS")))
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_version_round_trips() {
        let v = ModelVersion::parse("H5rad 2.1").unwrap();
        assert_eq!(v, ModelVersion { major: 2, minor: 1 });
        assert_eq!(v.to_string(), "H5rad 2.1");
    }

    #[test]
    fn model_version_rejects_missing_prefix() {
        assert!(ModelVersion::parse("2.1").is_err());
    }

    #[test]
    fn source_info_round_trips_full_field_set() {
        let s = "WMO:01234,RAD:SE50,ORG:82,PLC:Angelholm,CTY:643,CMT:a comment";
        let parsed = SourceInfo::parse(s).unwrap();
        assert_eq!(parsed.wmo.as_deref(), Some("01234"));
        assert_eq!(parsed.cmt.as_deref(), Some("a comment"));
        assert_eq!(parsed.to_string(), s);
    }

    #[test]
    fn source_info_rejects_unknown_key() {
        assert!(SourceInfo::parse("XYZ:1").is_err());
    }

    #[test]
    fn azimuth_angle_pair_round_trips() {
        let p = AzimuthAnglePair::parse("where", "0:359.5").unwrap();
        assert_eq!(p.start, 0.0);
        assert_eq!(p.stop, 359.5);
        assert_eq!(p.to_string(), "0:359.5");
    }

    #[test]
    fn azimuth_time_pair_round_trips() {
        let p = AzimuthTimePair::parse("how", "235959.123:000000.456").unwrap();
        assert_eq!(p.to_string(), "235959.123:000000.456");
    }

    #[test]
    fn vil_heights_uses_comma_not_colon() {
        let h = VilHeights::parse("1500,4500").unwrap();
        assert_eq!(h.bottom, 1500.0);
        assert_eq!(h.top, 4500.0);
        assert_eq!(h.to_string(), "1500,4500");
        assert!(VilHeights::parse("1500:4500").is_err());
    }

    #[test]
    fn angle_sequence_round_trips() {
        let values = parse_angle_sequence("how/elangles", "0.5,1.5,2.5").unwrap();
        assert_eq!(values, vec![0.5, 1.5, 2.5]);
        assert_eq!(format_angle_sequence(&values, 1), "0.5,1.5,2.5");
    }

    #[test]
    fn node_sequence_round_trips() {
        let values = parse_node_sequence("how/nodes", "'NL50','NL51'").unwrap();
        assert_eq!(values, vec!["NL50".to_string(), "NL51".to_string()]);
        assert_eq!(format_node_sequence(&values), "'NL50','NL51'");
    }

    #[test]
    fn date_and_time_round_trip() {
        let d = parse_date("what/date", "20230615").unwrap();
        assert_eq!(format_date(d), "20230615");
        let t = parse_time("what/time", "134500").unwrap();
        assert_eq!(format_time(t), "134500");
    }
}
