//! GEDCOM line classifier.
//!
//! Matches one line against the four structural patterns, in order:
//!
//! 1. `ARGUMENT`    - `<0|1|2> <NAME|SEX|FAMC|FAMS|MARR|HUSB|WIFE|CHIL|DATE> <argument>`
//! 2. `NO_ARGUMENT` - `<0|1> <BIRT|DEAT|MARR|DIV|HEAD|TRLR|NOTE>`
//! 3. `ZERO_1`      - `0 <identifier> <INDI|FAM>`
//! 4. `ZERO_2`      - `0 <HEAD|TRLR|NOTE> [text]`
//!
//! The first match wins. `MARR` belongs to both of the first two sets and is
//! an `ARGUMENT` line whenever text follows it. Fields are separated by a
//! single space.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use gedcom_types::{ClassifiedLine, FamilyId, IndividualId, RecordStart, Tag};

/// Tags that form `ARGUMENT` lines.
const ARGUMENT_TAGS: &[Tag] = &[
    Tag::Name,
    Tag::Sex,
    Tag::Famc,
    Tag::Fams,
    Tag::Marr,
    Tag::Husb,
    Tag::Wife,
    Tag::Chil,
    Tag::Date,
];

/// Tags that form `NO_ARGUMENT` lines.
const NO_ARGUMENT_TAGS: &[Tag] = &[
    Tag::Birt,
    Tag::Deat,
    Tag::Marr,
    Tag::Div,
    Tag::Head,
    Tag::Trlr,
    Tag::Note,
];

/// A classified line together with its 1-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    /// 1-based line number.
    pub number: usize,
    /// The classified line.
    pub line: ClassifiedLine,
}

/// Classifies one line of text.
///
/// Trailing whitespace (including a line terminator) is ignored.
///
/// # Examples
///
/// ```
/// use gedcom_loader::classify;
/// use gedcom_types::{LinePattern, Tag};
///
/// let line = classify("1 NAME John /Smith/\n");
/// assert_eq!(line.pattern(), LinePattern::Argument);
/// assert_eq!(line.tag(), Some(Tag::Name));
/// assert_eq!(line.argument(), Some("John /Smith/"));
/// ```
pub fn classify(raw: &str) -> ClassifiedLine {
    let line = raw.trim_end();

    match_argument(line)
        .or_else(|| match_no_argument(line))
        .or_else(|| match_record_start(line))
        .or_else(|| match_marker(line))
        .unwrap_or_else(|| ClassifiedLine::Unrecognized {
            raw: line.to_string(),
        })
}

/// Classifies every line of a document.
///
/// Blank lines are skipped but still counted, so line numbers match the
/// file. A leading UTF-8 byte-order mark is ignored.
pub fn classify_all(text: &str) -> Vec<NumberedLine> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
        .collect();

    #[cfg(feature = "parallel")]
    let classified = lines
        .par_iter()
        .map(|&(number, line)| NumberedLine {
            number,
            line: classify(line),
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let classified = lines
        .into_iter()
        .map(|(number, line)| NumberedLine {
            number,
            line: classify(line),
        })
        .collect();

    classified
}

/// Splits off a level of 0, 1 or 2.
fn split_level(line: &str) -> Option<(u8, &str)> {
    let (level, rest) = line.split_once(' ')?;
    let level = match level {
        "0" => 0,
        "1" => 1,
        "2" => 2,
        _ => return None,
    };
    Some((level, rest))
}

fn tag_in(candidate: &str, set: &[Tag]) -> Option<Tag> {
    Tag::parse(candidate).filter(|tag| set.contains(tag))
}

fn match_argument(line: &str) -> Option<ClassifiedLine> {
    let (level, rest) = split_level(line)?;
    let (tag, argument) = rest.split_once(' ')?;
    let tag = tag_in(tag, ARGUMENT_TAGS)?;
    if argument.is_empty() {
        return None;
    }
    Some(ClassifiedLine::Argument {
        level,
        tag,
        argument: argument.to_string(),
    })
}

fn match_no_argument(line: &str) -> Option<ClassifiedLine> {
    let (level, rest) = split_level(line)?;
    if level > 1 {
        return None;
    }
    let tag = tag_in(rest, NO_ARGUMENT_TAGS)?;
    Some(ClassifiedLine::NoArgument { level, tag })
}

fn match_record_start(line: &str) -> Option<ClassifiedLine> {
    let rest = line.strip_prefix("0 ")?;
    let (id, tag) = rest.rsplit_once(' ')?;
    if id.is_empty() {
        return None;
    }
    let start = match Tag::parse(tag)? {
        Tag::Indi => RecordStart::Individual(IndividualId::new(id)),
        Tag::Fam => RecordStart::Family(FamilyId::new(id)),
        _ => return None,
    };
    Some(ClassifiedLine::Record(start))
}

fn match_marker(line: &str) -> Option<ClassifiedLine> {
    let rest = line.strip_prefix("0 ")?;
    let (tag, text) = match rest.split_once(' ') {
        Some((tag, text)) => (tag, Some(text)),
        None => (rest, None),
    };
    let tag = Tag::parse(tag).filter(|tag| tag.is_file_marker())?;
    Some(ClassifiedLine::Marker {
        tag,
        text: text.filter(|t| !t.is_empty()).map(str::to_string),
    })
}
