use std::path::{Path, PathBuf};

use snapsheet_core::error::Error;
use snapsheet_core::traits::RowAppender;
use snapsheet_types::RowRecord;
use windows::Win32::System::Com::{
    CLSIDFromProgID, DISPATCH_FLAGS, DISPATCH_METHOD, DISPATCH_PROPERTYGET, DISPATCH_PROPERTYPUT,
    DISPPARAMS, EXCEPINFO, GetActiveObject, IDispatch,
};
use windows::core::{BSTR, GUID, IUnknown, Interface, PCWSTR, VARIANT, w};

use crate::com::ComGuard;
use crate::rows::next_free_row;

const LOCALE_USER_DEFAULT: u32 = 0x0400;
const DISPID_PROPERTYPUT: i32 = -3;
/// Excel's xlUp direction constant.
const XL_UP: i32 = -4162;

/// Appends into the workbook of a *running* Excel instance via COM
/// late binding, then saves through Excel itself so the change lands in
/// both the open application state and the file.
pub struct LiveAppender {
    path: PathBuf,
    sheet: String,
}

impl LiveAppender {
    pub fn new(path: impl Into<PathBuf>, sheet: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet: sheet.into(),
        }
    }

    /// Open workbook whose FullName matches the configured path,
    /// case-insensitively. Zero matches and multiple matches are both
    /// errors.
    fn find_workbook(&self, app: &IDispatch) -> Result<IDispatch, Error> {
        let workbooks = get(app, "Workbooks")?;
        let workbooks = as_object(&workbooks, "Workbooks")?;
        let count: i32 = get_i32(&workbooks, "Count")?;

        let wanted = self.path.to_string_lossy();
        let mut matches = Vec::new();
        for index in 1..=count {
            let item = invoke(
                &workbooks,
                DISPATCH_PROPERTYGET,
                "Item",
                vec![VARIANT::from(index)],
            )?;
            let item = as_object(&item, "Workbooks.Item")?;
            let full_name = get_string(&item, "FullName")?;
            if full_name.eq_ignore_ascii_case(&wanted) {
                matches.push(item);
            }
        }

        match matches.len() {
            0 => Err(Error::WorkbookNotOpen(self.path.clone())),
            1 => Ok(matches.remove(0)),
            _ => Err(Error::AmbiguousWorkbook(self.path.clone())),
        }
    }

    fn find_sheet(&self, workbook: &IDispatch) -> Result<IDispatch, Error> {
        let sheets = get(workbook, "Worksheets")?;
        let sheets = as_object(&sheets, "Worksheets")?;
        // a throwing name lookup means the sheet is absent
        let sheet = invoke(
            &sheets,
            DISPATCH_PROPERTYGET,
            "Item",
            vec![VARIANT::from(self.sheet.as_str())],
        )
        .map_err(|_| Error::SheetNotFound(self.sheet.clone()))?;
        as_object(&sheet, "Worksheets.Item").map_err(|_| Error::SheetNotFound(self.sheet.clone()))
    }
}

impl RowAppender for LiveAppender {
    fn append(&self, record: &RowRecord) -> Result<u32, Error> {
        let _com = ComGuard::initialize()?;

        let app = running_excel().ok_or_else(|| Error::WorkbookNotOpen(self.path.clone()))?;
        let workbook = self.find_workbook(&app)?;
        let sheet = self.find_sheet(&workbook)?;

        let row = next_row_from_column_a(&sheet)?;
        set_cell(&sheet, row, 1, &record.timestamp)?;
        set_cell(&sheet, row, 2, &record.text)?;

        invoke(&workbook, DISPATCH_METHOD, "Save", vec![])
            .map_err(|e| Error::Save(e.to_string()))?;

        tracing::debug!(row, sheet = %self.sheet, "appended record via running application");
        Ok(row)
    }
}

/// Attach to a running Excel instance, if any.
fn running_excel() -> Option<IDispatch> {
    let clsid = unsafe { CLSIDFromProgID(w!("Excel.Application")) }.ok()?;
    let mut unknown: Option<IUnknown> = None;
    unsafe { GetActiveObject(&clsid, None, &mut unknown) }.ok()?;
    unknown?.cast::<IDispatch>().ok()
}

/// Scan up from the bottom of column A for the first used cell.
fn next_row_from_column_a(sheet: &IDispatch) -> Result<u32, Error> {
    let rows = get(sheet, "Rows")?;
    let rows = as_object(&rows, "Rows")?;
    let row_count: i32 = get_i32(&rows, "Count")?;

    let bottom = cells(sheet, row_count, 1)?;
    let hit = invoke(&bottom, DISPATCH_METHOD, "End", vec![VARIANT::from(XL_UP)])?;
    let hit = as_object(&hit, "End")?;
    let last_row: i32 = get_i32(&hit, "Row")?;

    // End(xlUp) reports row 1 both for a sheet whose data starts in A1
    // and for a completely empty sheet.
    let last_used = if last_row <= 1 {
        let first = cells(sheet, 1, 1)?;
        let value = get(&first, "Value")?;
        if value.is_empty() { None } else { Some(1) }
    } else {
        Some(last_row as u32)
    };

    Ok(next_free_row(last_used))
}

fn cells(sheet: &IDispatch, row: i32, col: i32) -> Result<IDispatch, Error> {
    let cell = invoke(
        sheet,
        DISPATCH_PROPERTYGET,
        "Cells",
        vec![VARIANT::from(row), VARIANT::from(col)],
    )?;
    as_object(&cell, "Cells")
}

fn set_cell(sheet: &IDispatch, row: u32, col: i32, value: &str) -> Result<(), Error> {
    let cell = cells(sheet, row as i32, col)?;
    invoke(
        &cell,
        DISPATCH_PROPERTYPUT,
        "Value",
        vec![VARIANT::from(value)],
    )?;
    Ok(())
}

fn get(obj: &IDispatch, name: &str) -> Result<VARIANT, Error> {
    invoke(obj, DISPATCH_PROPERTYGET, name, vec![])
}

fn get_i32(obj: &IDispatch, name: &str) -> Result<i32, Error> {
    let value = get(obj, name)?;
    i32::try_from(&value).map_err(|e| Error::Workbook(format!("'{name}' is not numeric: {e}")))
}

fn get_string(obj: &IDispatch, name: &str) -> Result<String, Error> {
    let value = get(obj, name)?;
    BSTR::try_from(&value)
        .map(|b| b.to_string())
        .map_err(|e| Error::Workbook(format!("'{name}' is not a string: {e}")))
}

fn as_object(value: &VARIANT, what: &str) -> Result<IDispatch, Error> {
    IDispatch::try_from(value).map_err(|e| Error::Workbook(format!("'{what}' is not an object: {e}")))
}

/// Late-bound IDispatch invoke with one level of name lookup.
fn invoke(
    obj: &IDispatch,
    flags: DISPATCH_FLAGS,
    name: &str,
    mut args: Vec<VARIANT>,
) -> Result<VARIANT, Error> {
    let wide: Vec<u16> = name.encode_utf16().chain(Some(0)).collect();
    let mut dispid = 0i32;
    unsafe {
        obj.GetIDsOfNames(
            &GUID::zeroed(),
            &PCWSTR(wide.as_ptr()),
            1,
            LOCALE_USER_DEFAULT,
            &mut dispid,
        )
    }
    .map_err(|e| Error::Workbook(format!("unknown member '{name}': {e}")))?;

    // IDispatch argument order is right to left
    args.reverse();
    let mut named_put = DISPID_PROPERTYPUT;
    let is_put = flags == DISPATCH_PROPERTYPUT;
    let params = DISPPARAMS {
        rgvarg: if args.is_empty() {
            std::ptr::null_mut()
        } else {
            args.as_mut_ptr()
        },
        cArgs: args.len() as u32,
        rgdispidNamedArgs: if is_put {
            &mut named_put
        } else {
            std::ptr::null_mut()
        },
        cNamedArgs: if is_put { 1 } else { 0 },
    };

    let mut result = VARIANT::new();
    let mut excep = EXCEPINFO::default();
    unsafe {
        obj.Invoke(
            dispid,
            &GUID::zeroed(),
            LOCALE_USER_DEFAULT,
            flags,
            &params,
            Some(&mut result),
            Some(&mut excep),
            None,
        )
    }
    .map_err(|e| {
        let detail = excep.bstrDescription.to_string();
        if detail.is_empty() {
            Error::Workbook(format!("'{name}' failed: {e}"))
        } else {
            Error::Workbook(format!("'{name}' failed: {detail}"))
        }
    })?;

    Ok(result)
}
