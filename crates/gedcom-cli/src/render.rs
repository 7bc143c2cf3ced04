//! Output formats for the individual and family rows.

use std::io::{self, Write};

use gedcom_loader::{Diagnostic, FamilyRow, IndividualRow};
use serde::Serialize;

const COLUMN_SEPARATOR: &str = " | ";

/// Writes the "Individuals" and "Families" tables as aligned text.
pub fn write_tables<W: Write>(
    out: &mut W,
    individuals: &[IndividualRow],
    families: &[FamilyRow],
) -> io::Result<()> {
    let individual_cells: Vec<Vec<String>> =
        individuals.iter().map(|row| row.cells().to_vec()).collect();
    let family_cells: Vec<Vec<String>> = families.iter().map(|row| row.cells().to_vec()).collect();

    writeln!(out, "Individuals")?;
    write_table(out, &IndividualRow::HEADERS, &individual_cells)?;
    writeln!(out)?;
    writeln!(out, "Families")?;
    write_table(out, &FamilyRow::HEADERS, &family_cells)
}

fn write_table<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, headers, &widths)?;
    let rule =
        widths.iter().sum::<usize>() + COLUMN_SEPARATOR.len() * widths.len().saturating_sub(1);
    writeln!(out, "{}", "-".repeat(rule))?;
    for row in rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write, S: AsRef<str>>(
    out: &mut W,
    cells: &[S],
    widths: &[usize],
) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect();
    writeln!(out, "{}", padded.join(COLUMN_SEPARATOR).trim_end())
}

/// Writes both tables as one CSV stream, each section preceded by its
/// name and its header record.
pub fn write_csv<W: Write>(
    out: W,
    individuals: &[IndividualRow],
    families: &[FamilyRow],
) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);

    writer.write_record(["Individuals"])?;
    writer.write_record(IndividualRow::HEADERS)?;
    for row in individuals {
        writer.write_record(row.cells())?;
    }

    writer.write_record(["Families"])?;
    writer.write_record(FamilyRow::HEADERS)?;
    for row in families {
        writer.write_record(row.cells())?;
    }

    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct Report<'a> {
    individuals: &'a [IndividualRow],
    families: &'a [FamilyRow],
}

/// Writes `{"individuals": [...], "families": [...]}` as pretty JSON.
pub fn write_json<W: Write>(
    mut out: W,
    individuals: &[IndividualRow],
    families: &[FamilyRow],
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(
        &mut out,
        &Report {
            individuals,
            families,
        },
    )?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Writes every diagnostic on its own line, then the totals.
pub fn write_diagnostics<W: Write>(out: &mut W, diagnostics: &[Diagnostic]) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "warning: {diagnostic}")?;
    }
    let references = diagnostics
        .iter()
        .filter(|d| d.is_reference_problem())
        .count();
    writeln!(
        out,
        "{} problem(s) found ({} in lines, {} in references)",
        diagnostics.len(),
        diagnostics.len() - references,
        references
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gedcom_loader::gedcom_types::Tag;
    use gedcom_loader::LinkRole;

    fn make_individual_row(id: &str, name: &str) -> IndividualRow {
        IndividualRow {
            id: id.to_string(),
            name: name.to_string(),
            gender: "F".to_string(),
            birthday: "1 JAN 1965".to_string(),
            age: "55".to_string(),
            alive: true,
            death: "N/A".to_string(),
            child: "{F1}".to_string(),
            spouse: "N/A".to_string(),
        }
    }

    fn make_family_row(id: &str) -> FamilyRow {
        FamilyRow {
            id: id.to_string(),
            married: "14 FEB 1962".to_string(),
            divorced: "N/A".to_string(),
            husband_id: "I1".to_string(),
            husband_name: "John /Doe/".to_string(),
            wife_id: "I2".to_string(),
            wife_name: "Mary /Roe/".to_string(),
            child: "{I3, I4}".to_string(),
        }
    }

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>),
    {
        let mut buffer = Vec::new();
        write(&mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_tables_are_aligned() {
        let individuals = vec![
            make_individual_row("I1", "Jane /Doe/"),
            make_individual_row("I10", "Al"),
        ];
        let families = vec![make_family_row("F1")];

        let text = render(|buf| write_tables(buf, &individuals, &families).unwrap());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Individuals");
        assert!(lines[1].starts_with("ID  | Name       | Gender |"));
        assert!(lines[2].chars().all(|c| c == '-'));
        assert!(lines[3].starts_with("I1  | Jane /Doe/ | F      |"));
        assert!(lines[4].starts_with("I10 | Al         | F      |"));
        assert!(lines[3].ends_with("| True  | N/A   | {F1}  | N/A"));
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "Families");
        assert!(lines[9].contains("{I3, I4}"));
    }

    #[test]
    fn test_empty_tables_keep_headers() {
        let text = render(|buf| write_tables(buf, &[], &[]).unwrap());

        assert!(text.contains(
            "ID | Name | Gender | Birthday | Age | Alive | Death | Child | Spouse"
        ));
        assert!(text.contains(
            "ID | Married | Divorced | Husband ID | Husband Name | Wife ID | Wife Name | Child"
        ));
    }

    #[test]
    fn test_csv_sections() {
        let individuals = vec![make_individual_row("I1", "Jane /Doe/")];
        let families = vec![make_family_row("F1")];

        let text = render(|buf| write_csv(buf, &individuals, &families).unwrap());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Individuals",
                "ID,Name,Gender,Birthday,Age,Alive,Death,Child,Spouse",
                "I1,Jane /Doe/,F,1 JAN 1965,55,True,N/A,{F1},N/A",
                "Families",
                "ID,Married,Divorced,Husband ID,Husband Name,Wife ID,Wife Name,Child",
                "F1,14 FEB 1962,N/A,I1,John /Doe/,I2,Mary /Roe/,\"{I3, I4}\"",
            ]
        );
    }

    #[test]
    fn test_json_report() {
        let individuals = vec![make_individual_row("I1", "Jane /Doe/")];
        let families = vec![make_family_row("F1")];

        let text = render(|buf| write_json(buf, &individuals, &families).unwrap());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["individuals"][0]["id"], "I1");
        assert_eq!(value["individuals"][0]["alive"], true);
        assert_eq!(value["families"][0]["wife_name"], "Mary /Roe/");
    }

    #[test]
    fn test_diagnostics_report() {
        let diagnostics = vec![
            Diagnostic::UnrecognizedLine {
                line: 2,
                raw: "7 GARBAGE here".to_string(),
            },
            Diagnostic::OrphanedAttribute {
                line: 5,
                tag: Tag::Name,
            },
            Diagnostic::DanglingReference {
                owner: "I1".to_string(),
                role: LinkRole::Famc,
                target: "F9".to_string(),
            },
        ];

        let text = render(|buf| write_diagnostics(buf, &diagnostics).unwrap());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("warning: line 2"));
        assert!(lines[1].starts_with("warning: line 5"));
        assert_eq!(lines[2], "warning: I1 FAMC F9: no such family");
        assert_eq!(lines[3], "3 problem(s) found (2 in lines, 1 in references)");
    }
}
