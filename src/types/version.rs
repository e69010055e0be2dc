//! DXF format versions
//!
//! All version-gated behavior in the record codec compares against this
//! ordered enumeration; the version is never inferred from field presence.

use crate::error::{DxfError, Result};
use std::fmt;

/// DXF format revision, ordered oldest to newest.
///
/// The discriminant ordering is significant: gates such as
/// `version >= DxfVersion::AC1015` rely on `PartialOrd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxfVersion {
    /// AutoCAD R10
    AC1006,
    /// AutoCAD R11/R12
    AC1009,
    /// AutoCAD R13
    AC1012,
    /// AutoCAD R14
    AC1014,
    /// AutoCAD 2000/2000i/2002
    AC1015,
    /// AutoCAD 2004/2005/2006
    AC1018,
    /// AutoCAD 2007/2008/2009
    AC1021,
    /// AutoCAD 2010/2011/2012
    AC1024,
    /// AutoCAD 2013/2014/2015/2016/2017
    AC1027,
    /// AutoCAD 2018+
    AC1032,
}

impl DxfVersion {
    /// All known versions, oldest first.
    pub const ALL: [DxfVersion; 10] = [
        DxfVersion::AC1006,
        DxfVersion::AC1009,
        DxfVersion::AC1012,
        DxfVersion::AC1014,
        DxfVersion::AC1015,
        DxfVersion::AC1018,
        DxfVersion::AC1021,
        DxfVersion::AC1024,
        DxfVersion::AC1027,
        DxfVersion::AC1032,
    ];

    /// The version string as it appears in a `$ACADVER` header group.
    pub fn as_str(&self) -> &'static str {
        match self {
            DxfVersion::AC1006 => "AC1006",
            DxfVersion::AC1009 => "AC1009",
            DxfVersion::AC1012 => "AC1012",
            DxfVersion::AC1014 => "AC1014",
            DxfVersion::AC1015 => "AC1015",
            DxfVersion::AC1018 => "AC1018",
            DxfVersion::AC1021 => "AC1021",
            DxfVersion::AC1024 => "AC1024",
            DxfVersion::AC1027 => "AC1027",
            DxfVersion::AC1032 => "AC1032",
        }
    }

    /// Parse a version string, falling back to the newest known version for
    /// unrecognized (presumably newer) strings.
    pub fn from_version_string(s: &str) -> Self {
        Self::try_from_version_string(s).unwrap_or(DxfVersion::AC1032)
    }

    /// Parse a version string strictly.
    pub fn try_from_version_string(s: &str) -> Result<Self> {
        match s.trim() {
            "AC1006" => Ok(DxfVersion::AC1006),
            "AC1009" => Ok(DxfVersion::AC1009),
            "AC1012" => Ok(DxfVersion::AC1012),
            "AC1014" => Ok(DxfVersion::AC1014),
            "AC1015" => Ok(DxfVersion::AC1015),
            "AC1018" => Ok(DxfVersion::AC1018),
            "AC1021" => Ok(DxfVersion::AC1021),
            "AC1024" => Ok(DxfVersion::AC1024),
            "AC1027" => Ok(DxfVersion::AC1027),
            "AC1032" => Ok(DxfVersion::AC1032),
            other => Err(DxfError::UnsupportedVersion(other.to_string())),
        }
    }

    /// Whether this revision writes subclass markers (group 100).
    pub fn has_subclass_markers(&self) -> bool {
        *self >= DxfVersion::AC1012
    }
}

impl Default for DxfVersion {
    fn default() -> Self {
        DxfVersion::AC1032
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
