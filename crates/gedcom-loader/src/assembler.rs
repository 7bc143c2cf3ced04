//! Record assembly.
//!
//! Folds the classified lines of a file into individual and family records.
//! A level-0 line opens or closes a record; deeper lines are routed into the
//! record that is open. `BIRT`, `DEAT`, `MARR` and `DIV` open an event that a
//! following, more deeply nested `DATE` line fills in; `DEAT`, `MARR` and `DIV`
//! are recorded even when no date follows.
//!
//! An unrecognized level-0 line may be a damaged record header, so the lines
//! under it are skipped rather than merged into the previous record.

use std::collections::HashSet;
use std::mem;

use gedcom_types::{
    ClassifiedLine, Family, FamilyId, GedcomDate, Individual, IndividualId, RecordStart, Sex, Tag,
};

use crate::classifier::NumberedLine;
use crate::diagnostic::{Diagnostic, RecordKind};

/// Records built from one file, before their links are resolved.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    /// Individuals in file order.
    pub individuals: Vec<Individual>,
    /// Families in file order.
    pub families: Vec<Family>,
    /// Problems found while assembling.
    pub diagnostics: Vec<Diagnostic>,
}

/// Assembles records from classified lines in a single forward pass.
///
/// # Examples
///
/// ```
/// use gedcom_loader::{assemble, classify_all};
///
/// let lines = classify_all("0 I1 INDI\n1 NAME Jane /Doe/\n1 SEX F\n");
/// let assembly = assemble(lines);
///
/// assert_eq!(assembly.individuals.len(), 1);
/// assert_eq!(assembly.individuals[0].name.as_deref(), Some("Jane /Doe/"));
/// assert!(assembly.diagnostics.is_empty());
/// ```
pub fn assemble<I>(lines: I) -> Assembly
where
    I: IntoIterator<Item = NumberedLine>,
{
    lines
        .into_iter()
        .fold(Assembler::default(), Assembler::step)
        .finish()
}

/// The record currently receiving lines.
#[derive(Debug, Default)]
enum Cursor {
    #[default]
    Idle,
    Individual(Individual),
    Family(Family),
    /// Inside a record discarded as a duplicate.
    Skipping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Birth,
    Death,
    Marriage,
    Divorce,
}

/// An event line waiting for its `DATE`.
#[derive(Debug, Clone, Copy)]
struct OpenEvent {
    event: Event,
    level: u8,
}

#[derive(Debug, Default)]
struct Assembler {
    cursor: Cursor,
    open_event: Option<OpenEvent>,
    seen_individuals: HashSet<IndividualId>,
    seen_families: HashSet<FamilyId>,
    out: Assembly,
}

impl Assembler {
    fn step(mut self, numbered: NumberedLine) -> Self {
        let NumberedLine { number, line } = numbered;

        match line {
            ClassifiedLine::Unrecognized { raw } => {
                if raw.starts_with("0 ") {
                    self.close();
                    self.cursor = Cursor::Skipping;
                }
                self.report(Diagnostic::UnrecognizedLine { line: number, raw });
            }
            ClassifiedLine::Record(start) => self.open(number, start),
            ClassifiedLine::Marker { .. } => self.close(),
            ClassifiedLine::NoArgument { level: 0, tag } if tag.is_file_marker() => self.close(),
            ClassifiedLine::Argument { level: 0, tag, .. }
            | ClassifiedLine::NoArgument { level: 0, tag } => {
                self.close();
                self.report(Diagnostic::OrphanedAttribute { line: number, tag });
            }
            ClassifiedLine::Argument {
                level,
                tag,
                argument,
            } => self.attribute(number, level, tag, Some(argument)),
            ClassifiedLine::NoArgument { level, tag } => self.attribute(number, level, tag, None),
        }

        self
    }

    fn finish(mut self) -> Assembly {
        self.close();
        self.out
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.out.diagnostics.push(diagnostic);
    }

    /// Emits the open record, if any.
    fn close(&mut self) {
        self.open_event = None;
        match mem::take(&mut self.cursor) {
            Cursor::Individual(individual) => self.out.individuals.push(individual),
            Cursor::Family(family) => self.out.families.push(family),
            Cursor::Idle | Cursor::Skipping => {}
        }
    }

    fn open(&mut self, number: usize, start: RecordStart) {
        self.close();
        self.cursor = match start {
            RecordStart::Individual(id) if self.seen_individuals.insert(id.clone()) => {
                Cursor::Individual(Individual::new(id))
            }
            RecordStart::Family(id) if self.seen_families.insert(id.clone()) => {
                Cursor::Family(Family::new(id))
            }
            duplicate => {
                let kind = match duplicate {
                    RecordStart::Individual(_) => RecordKind::Individual,
                    RecordStart::Family(_) => RecordKind::Family,
                };
                self.report(Diagnostic::DuplicateIdentifier {
                    line: number,
                    kind,
                    id: duplicate.id().to_string(),
                });
                Cursor::Skipping
            }
        };
    }

    fn attribute(&mut self, number: usize, level: u8, tag: Tag, argument: Option<String>) {
        // Any line other than DATE at or above the event's level ends it.
        if tag != Tag::Date && self.open_event.is_some_and(|open| level <= open.level) {
            self.open_event = None;
        }

        let routed = match &mut self.cursor {
            Cursor::Idle => Err(Diagnostic::OrphanedAttribute { line: number, tag }),
            Cursor::Skipping => Ok(()),
            Cursor::Individual(individual) => {
                route_individual(
                    individual,
                    &mut self.open_event,
                    number,
                    level,
                    tag,
                    argument,
                )
            }
            Cursor::Family(family) => {
                route_family(family, &mut self.open_event, number, level, tag, argument)
            }
        };

        if let Err(diagnostic) = routed {
            self.report(diagnostic);
        }
    }
}

fn route_individual(
    individual: &mut Individual,
    open_event: &mut Option<OpenEvent>,
    number: usize,
    level: u8,
    tag: Tag,
    argument: Option<String>,
) -> Result<(), Diagnostic> {
    match (tag, argument) {
        (Tag::Name, Some(name)) => {
            individual.name.get_or_insert(name);
        }
        (Tag::Sex, Some(code)) => {
            individual.sex.get_or_insert_with(|| Sex::parse(&code));
        }
        (Tag::Birt, _) => {
            *open_event = Some(OpenEvent {
                event: Event::Birth,
                level,
            });
        }
        (Tag::Deat, _) => {
            individual.died = true;
            *open_event = Some(OpenEvent {
                event: Event::Death,
                level,
            });
        }
        (Tag::Date, Some(date)) => {
            let field = match event_for(*open_event, level) {
                Some(Event::Birth) => &mut individual.birth,
                Some(Event::Death) => &mut individual.death,
                _ => return Err(Diagnostic::MissingAttributeContext { line: number, date }),
            };
            field.get_or_insert_with(|| GedcomDate::parse(&date));
        }
        (Tag::Famc, Some(id)) => push_unique(&mut individual.child_of, FamilyId::new(id)),
        (Tag::Fams, Some(id)) => push_unique(&mut individual.spouse_of, FamilyId::new(id)),
        (Tag::Head | Tag::Trlr | Tag::Note, _) => {}
        (tag, _) => {
            return Err(Diagnostic::MisplacedTag {
                line: number,
                tag,
                kind: RecordKind::Individual,
                id: individual.id.to_string(),
            })
        }
    }
    Ok(())
}

fn route_family(
    family: &mut Family,
    open_event: &mut Option<OpenEvent>,
    number: usize,
    level: u8,
    tag: Tag,
    argument: Option<String>,
) -> Result<(), Diagnostic> {
    match (tag, argument) {
        (Tag::Marr, _) => {
            family.married = true;
            *open_event = Some(OpenEvent {
                event: Event::Marriage,
                level,
            });
        }
        (Tag::Div, _) => {
            family.divorced = true;
            *open_event = Some(OpenEvent {
                event: Event::Divorce,
                level,
            });
        }
        (Tag::Date, Some(date)) => {
            let field = match event_for(*open_event, level) {
                Some(Event::Marriage) => &mut family.marriage,
                Some(Event::Divorce) => &mut family.divorce,
                _ => return Err(Diagnostic::MissingAttributeContext { line: number, date }),
            };
            field.get_or_insert_with(|| GedcomDate::parse(&date));
        }
        (Tag::Husb, Some(id)) => {
            family.husband.get_or_insert_with(|| IndividualId::new(id));
        }
        (Tag::Wife, Some(id)) => {
            family.wife.get_or_insert_with(|| IndividualId::new(id));
        }
        (Tag::Chil, Some(id)) => push_unique(&mut family.children, IndividualId::new(id)),
        (Tag::Head | Tag::Trlr | Tag::Note, _) => {}
        (tag, _) => {
            return Err(Diagnostic::MisplacedTag {
                line: number,
                tag,
                kind: RecordKind::Family,
                id: family.id.to_string(),
            })
        }
    }
    Ok(())
}

/// Returns the event a `DATE` at `level` belongs to.
fn event_for(open_event: Option<OpenEvent>, level: u8) -> Option<Event> {
    open_event
        .filter(|open| level > open.level)
        .map(|open| open.event)
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}
