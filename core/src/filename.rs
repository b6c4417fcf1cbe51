//! Metadata carried in TolTEC data file names.
//!
//! Two conventions are recognised:
//! - `toltec<nw>_<obsnum>_<subobsnum>_<scannum>_<YYYY_mm_dd_HH_MM_SS>[_<kind>].<ext>`
//! - `wyatt_<YYYY-mm-dd>_<obsnum>_<subobsnum>_<scannum>[_<kind>].<ext>`

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOLTEC_FILE: Regex = Regex::new(
        r"^(?P<interface>(?P<instru>toltec)(?P<nwid>\d+))_(?P<obsnum>\d+)_(?P<subobsnum>\d+)_(?P<scannum>\d+)_(?P<ut>\d{4}_\d{2}_\d{2}_\d{2}_\d{2}_\d{2})(?:_(?P<kind>[^/.]+))?\.(?P<ext>.+)$"
    )
    .expect("toltec file regex");
    static ref WYATT_FILE: Regex = Regex::new(
        r"^(?P<interface>(?P<instru>wyatt))_(?P<ut>\d{4}-\d{2}-\d{2})_(?P<obsnum>\d+)_(?P<subobsnum>\d+)_(?P<scannum>\d+)(?:_(?P<kind>[^/.]+))?\.(?P<ext>.+)$"
    )
    .expect("wyatt file regex");
}

const KIND_TIMESTREAM: &str = "timestream";
const KIND_ANCILLARY: &str = "ancillary";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFileInfo {
    pub interface: String,
    pub instru: String,
    pub obsnum: u64,
    pub subobsnum: u64,
    pub scannum: u64,
    pub ut: NaiveDateTime,
    /// `timestream`, the name tag (`tune`, `vnasweep`, ...), or `ancillary`
    /// for non-netCDF files.
    pub kind: String,
    pub master: Option<String>,
}

impl DataFileInfo {
    /// Parses the file name of `path`; `None` when it follows neither convention.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let mut info = parse_toltec(name).or_else(|| parse_wyatt(name))?;
        info.master = master_of(path, &info.interface);
        Some(info)
    }

    /// `<obsnum>_<subobsnum>_<scannum>`
    pub fn obs_label(&self) -> String {
        format!("{}_{}_{}", self.obsnum, self.subobsnum, self.scannum)
    }
}

fn parse_toltec(name: &str) -> Option<DataFileInfo> {
    let caps = TOLTEC_FILE.captures(name)?;
    let kind = if !caps["ext"].eq_ignore_ascii_case("nc") {
        KIND_ANCILLARY.to_string()
    } else {
        caps.name("kind")
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| KIND_TIMESTREAM.to_string())
    };
    Some(DataFileInfo {
        interface: caps["interface"].to_string(),
        instru: caps["instru"].to_string(),
        obsnum: caps["obsnum"].parse().ok()?,
        subobsnum: caps["subobsnum"].parse().ok()?,
        scannum: caps["scannum"].parse().ok()?,
        ut: NaiveDateTime::parse_from_str(&caps["ut"], "%Y_%m_%d_%H_%M_%S").ok()?,
        kind,
        master: None,
    })
}

fn parse_wyatt(name: &str) -> Option<DataFileInfo> {
    let caps = WYATT_FILE.captures(name)?;
    let ut = NaiveDate::parse_from_str(&caps["ut"], "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)?;
    Some(DataFileInfo {
        interface: caps["interface"].to_string(),
        instru: caps["instru"].to_string(),
        obsnum: caps["obsnum"].parse().ok()?,
        subobsnum: caps["subobsnum"].parse().ok()?,
        scannum: caps["scannum"].parse().ok()?,
        ut,
        kind: caps
            .name("kind")
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| KIND_TIMESTREAM.to_string()),
        master: None,
    })
}

// Files live in `<master>/<interface>/<file>` or `<master>/<file>`.
fn master_of(path: &Path, interface: &str) -> Option<String> {
    let parent = path.parent()?;
    let parent_name = parent.file_name()?.to_str()?;
    if parent_name == interface {
        let grand = parent.parent()?.file_name()?.to_str()?;
        return Some(grand.to_string());
    }
    Some(parent_name.to_string())
}
