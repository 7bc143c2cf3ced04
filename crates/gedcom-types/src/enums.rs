//! GEDCOM enumeration types.
//!
//! This module provides enum representations for the coded values that
//! appear in a GEDCOM file: line tags, line patterns, sex codes and the
//! derived marital status of a family.

use std::fmt;

/// A line tag recognised by the loader.
///
/// # Examples
///
/// ```
/// use gedcom_types::Tag;
///
/// assert_eq!(Tag::parse("INDI"), Some(Tag::Indi));
/// assert_eq!(Tag::parse("indi"), None);
/// assert_eq!(Tag::Famc.as_str(), "FAMC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Tag {
    /// Individual record.
    Indi,
    /// Personal name.
    Name,
    /// Sex code.
    Sex,
    /// Birth event.
    Birt,
    /// Death event.
    Deat,
    /// Family in which the individual is a child.
    Famc,
    /// Family in which the individual is a spouse.
    Fams,
    /// Family record.
    Fam,
    /// Marriage event.
    Marr,
    /// Husband of a family.
    Husb,
    /// Wife of a family.
    Wife,
    /// Child of a family.
    Chil,
    /// Divorce event.
    Div,
    /// Date of the enclosing event.
    Date,
    /// File header.
    Head,
    /// File trailer.
    Trlr,
    /// Free-form note.
    Note,
}

impl Tag {
    /// All recognised tags.
    pub const ALL: [Tag; 17] = [
        Tag::Indi,
        Tag::Name,
        Tag::Sex,
        Tag::Birt,
        Tag::Deat,
        Tag::Famc,
        Tag::Fams,
        Tag::Fam,
        Tag::Marr,
        Tag::Husb,
        Tag::Wife,
        Tag::Chil,
        Tag::Div,
        Tag::Date,
        Tag::Head,
        Tag::Trlr,
        Tag::Note,
    ];

    /// Parses a tag. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == s)
    }

    /// Returns the tag as it appears in a file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Indi => "INDI",
            Self::Name => "NAME",
            Self::Sex => "SEX",
            Self::Birt => "BIRT",
            Self::Deat => "DEAT",
            Self::Famc => "FAMC",
            Self::Fams => "FAMS",
            Self::Fam => "FAM",
            Self::Marr => "MARR",
            Self::Husb => "HUSB",
            Self::Wife => "WIFE",
            Self::Chil => "CHIL",
            Self::Div => "DIV",
            Self::Date => "DATE",
            Self::Head => "HEAD",
            Self::Trlr => "TRLR",
            Self::Note => "NOTE",
        }
    }

    /// Returns true for the file-level markers that own no entity.
    pub fn is_file_marker(self) -> bool {
        matches!(self, Self::Head | Self::Trlr | Self::Note)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structural pattern a line matched during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinePattern {
    /// `<0|1|2> <tag> <argument>`
    Argument,
    /// `<0|1> <tag>`
    NoArgument,
    /// `0 <identifier> <INDI|FAM>`
    Zero1,
    /// `0 <HEAD|TRLR|NOTE> [text]`
    Zero2,
    /// Matched none of the above.
    None,
}

impl fmt::Display for LinePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Argument => "ARGUMENT",
            Self::NoArgument => "NO_ARGUMENT",
            Self::Zero1 => "ZERO_1",
            Self::Zero2 => "ZERO_2",
            Self::None => "NONE",
        })
    }
}

/// Sex of an individual as recorded by a `SEX` line.
///
/// Codes other than `M` and `F` are kept verbatim.
///
/// # Examples
///
/// ```
/// use gedcom_types::Sex;
///
/// assert_eq!(Sex::parse("F"), Sex::Female);
/// assert_eq!(Sex::parse("U"), Sex::Other("U".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    /// `M`
    Male,
    /// `F`
    Female,
    /// Any other code.
    Other(String),
}

impl Sex {
    /// Parses a sex code.
    pub fn parse(code: &str) -> Self {
        match code.trim() {
            "M" => Self::Male,
            "F" => Self::Female,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the code as written in a file.
    pub fn code(&self) -> &str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Marital status of a family, derived from its recorded events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaritalStatus {
    /// A marriage is recorded and no divorce.
    Married,
    /// A divorce is recorded.
    Divorced,
    /// Neither event is recorded.
    Unknown,
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Married => "Married",
            Self::Divorced => "Divorced",
            Self::Unknown => "Unknown",
        })
    }
}
