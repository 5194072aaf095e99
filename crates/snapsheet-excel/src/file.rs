use std::path::PathBuf;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::{Workbook, Worksheet};
use snapsheet_core::error::Error;
use snapsheet_core::traits::RowAppender;
use snapsheet_types::RowRecord;

use crate::rows::next_free_row;

/// Appends by opening the workbook file directly: read every sheet,
/// rewrite the file with the new row added, save.
///
/// Cell *values* of all sheets are preserved; formatting of the
/// pre-existing file is not. The file must not be locked by another
/// process in an incompatible mode.
pub struct FileAppender {
    path: PathBuf,
    sheet: String,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>, sheet: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet: sheet.into(),
        }
    }

    fn load_sheets(&self) -> Result<Vec<(String, Range<Data>)>, Error> {
        let mut source: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| Error::Workbook(format!("cannot open {}: {e}", self.path.display())))?;

        let names = source.sheet_names().to_owned();
        if !names.iter().any(|name| name == &self.sheet) {
            return Err(Error::SheetNotFound(self.sheet.clone()));
        }

        let mut sheets = Vec::with_capacity(names.len());
        for name in names {
            let range = source
                .worksheet_range(&name)
                .map_err(|e| Error::Workbook(format!("cannot read sheet '{name}': {e}")))?;
            sheets.push((name, range));
        }
        Ok(sheets)
    }
}

impl RowAppender for FileAppender {
    fn append(&self, record: &RowRecord) -> Result<u32, Error> {
        if !self.path.is_file() {
            return Err(Error::WorkbookMissing(self.path.clone()));
        }

        let sheets = self.load_sheets()?;

        let mut workbook = Workbook::new();
        let mut appended_row = 0u32;

        for (name, range) in &sheets {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(name)
                .map_err(|e| Error::Workbook(e.to_string()))?;
            copy_values(worksheet, range)?;

            if name == &self.sheet {
                // end() is the absolute 0-based bottom-right used cell
                let last_used = range.end().map(|(row, _)| row + 1);
                let row = next_free_row(last_used);
                worksheet
                    .write_string(row - 1, 0, &record.timestamp)
                    .and_then(|ws| ws.write_string(row - 1, 1, &record.text))
                    .map_err(|e| Error::Workbook(e.to_string()))?;
                appended_row = row;
            }
        }

        workbook
            .save(&self.path)
            .map_err(|e| Error::Save(e.to_string()))?;

        tracing::debug!(
            row = appended_row,
            sheet = %self.sheet,
            "appended record to workbook file"
        );
        Ok(appended_row)
    }
}

fn copy_values(worksheet: &mut Worksheet, range: &Range<Data>) -> Result<(), Error> {
    let (start_row, start_col) = match range.start() {
        Some(start) => start,
        None => return Ok(()), // empty sheet
    };

    // used_cells() is relative to the range origin
    for (row, col, cell) in range.used_cells() {
        let row = start_row + row as u32;
        let col = (start_col + col as u32) as u16;
        let result = match cell {
            Data::Empty => continue,
            Data::String(s) => worksheet.write_string(row, col, s),
            Data::Float(f) => worksheet.write_number(row, col, *f),
            Data::Int(i) => worksheet.write_number(row, col, *i as f64),
            Data::Bool(b) => worksheet.write_boolean(row, col, *b),
            Data::DateTime(dt) => worksheet.write_number(row, col, dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => worksheet.write_string(row, col, s),
            Data::Error(e) => worksheet.write_string(row, col, e.to_string()),
        };
        result.map_err(|e| Error::Workbook(e.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Reader, Xlsx, open_workbook};
    use std::path::Path;

    fn write_sheet(path: &Path, sheets: &[(&str, &[&[&str]])]) {
        let mut workbook = Workbook::new();
        for (name, rows) in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(*name).unwrap();
            for (r, row) in rows.iter().enumerate() {
                for (c, value) in row.iter().enumerate() {
                    worksheet
                        .write_string(r as u32, c as u16, *value)
                        .unwrap();
                }
            }
        }
        workbook.save(path).unwrap();
    }

    fn cell(path: &Path, sheet: &str, row: u32, col: u32) -> Option<String> {
        let mut source: Xlsx<_> = open_workbook(path).unwrap();
        let range = source.worksheet_range(sheet).unwrap();
        range.get_value((row, col)).map(|v| v.to_string())
    }

    fn used_rows(path: &Path, sheet: &str) -> u32 {
        let mut source: Xlsx<_> = open_workbook(path).unwrap();
        let range = source.worksheet_range(sheet).unwrap();
        range.end().map(|(row, _)| row + 1).unwrap_or(0)
    }

    #[test]
    fn append_lands_after_the_last_used_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xlsx");
        write_sheet(
            &path,
            &[(
                "Daten",
                &[&["r1"][..], &["r2"], &["r3"], &["r4"], &["r5"]][..],
            )],
        );

        let appender = FileAppender::new(&path, "Daten");
        let record = RowRecord::new("2024-01-01 10:00:00", "123.45");
        let row = appender.append(&record).unwrap();

        assert_eq!(row, 6);
        assert_eq!(used_rows(&path, "Daten"), 6);
        assert_eq!(cell(&path, "Daten", 5, 0).unwrap(), "2024-01-01 10:00:00");
        assert_eq!(cell(&path, "Daten", 5, 1).unwrap(), "123.45");
    }

    #[test]
    fn empty_sheet_first_append_lands_in_row_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xlsx");
        write_sheet(&path, &[("Daten", &[][..])]);

        let appender = FileAppender::new(&path, "Daten");
        let row = appender
            .append(&RowRecord::new("2024-01-01 10:00:00", "first"))
            .unwrap();

        assert_eq!(row, 1);
        assert_eq!(cell(&path, "Daten", 0, 0).unwrap(), "2024-01-01 10:00:00");
        assert_eq!(cell(&path, "Daten", 0, 1).unwrap(), "first");
    }

    #[test]
    fn consecutive_appends_stack() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xlsx");
        write_sheet(&path, &[("Daten", &[][..])]);

        let appender = FileAppender::new(&path, "Daten");
        for i in 1..=3 {
            let row = appender
                .append(&RowRecord::new("2024-01-01 10:00:00", format!("v{i}")))
                .unwrap();
            assert_eq!(row, i);
        }
        assert_eq!(used_rows(&path, "Daten"), 3);
        assert_eq!(cell(&path, "Daten", 2, 1).unwrap(), "v3");
    }

    #[test]
    fn missing_sheet_fails_without_touching_others() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xlsx");
        write_sheet(&path, &[("Daten", &[&["a"][..], &["b"]][..])]);

        let appender = FileAppender::new(&path, "Notizen");
        let err = appender
            .append(&RowRecord::new("2024-01-01 10:00:00", "x"))
            .unwrap_err();

        assert!(matches!(err, Error::SheetNotFound(name) if name == "Notizen"));
        assert_eq!(used_rows(&path, "Daten"), 2);
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.xlsx");

        let appender = FileAppender::new(&path, "Daten");
        let err = appender
            .append(&RowRecord::new("2024-01-01 10:00:00", "x"))
            .unwrap_err();

        assert!(matches!(err, Error::WorkbookMissing(_)));
        assert!(!path.exists());
    }

    #[test]
    fn other_sheets_survive_an_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xlsx");
        write_sheet(
            &path,
            &[
                ("Daten", &[&["a"][..]][..]),
                ("Archiv", &[&["keep", "me"][..]][..]),
            ],
        );

        FileAppender::new(&path, "Daten")
            .append(&RowRecord::new("2024-01-01 10:00:00", "x"))
            .unwrap();

        assert_eq!(cell(&path, "Archiv", 0, 0).unwrap(), "keep");
        assert_eq!(cell(&path, "Archiv", 0, 1).unwrap(), "me");
        assert_eq!(used_rows(&path, "Archiv"), 1);
    }
}
