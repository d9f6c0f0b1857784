//! Multipart form assembly and the in-memory file handle.

use std::cell::RefCell;

use report_common::types::ReportType;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

// The selected file is kept here so the report can be resubmitted even
// after the browser clears the input element.
thread_local! {
    static SELECTED: RefCell<Option<File>> = const { RefCell::new(None) };
}

pub fn remember_file(file: File) {
    SELECTED.with(|cell| *cell.borrow_mut() = Some(file));
}

pub fn current_file() -> Option<File> {
    SELECTED.with(|cell| cell.borrow().clone())
}

/// Options accompanying an upload.
#[derive(Clone, Debug)]
pub struct UploadOptions {
    pub ignore_saturdays: bool,
    pub debug_mode: bool,
    pub force_resend: bool,
    pub report_type: ReportType,
    pub teams: Vec<String>,
}

/// Full payload for `POST /enviar`.
pub fn upload_form(file: &File, opts: &UploadOptions) -> Result<FormData, JsValue> {
    let teams_json =
        serde_json::to_string(&opts.teams).unwrap_or_else(|_| "[]".to_string());

    let form = FormData::new()?;
    form.append_with_blob("csvFile", file)?;
    form.append_with_str("ignorarSabados", bool_str(opts.ignore_saturdays))?;
    form.append_with_str("debugMode", bool_str(opts.debug_mode))?;
    form.append_with_str("equipesSelecionadas", &teams_json)?;
    form.append_with_str("tipoRelatorio", opts.report_type.as_str())?;
    form.append_with_str("forcarReenvio", bool_str(opts.force_resend))?;
    Ok(form)
}

/// Reduced payload for `POST /equipes`.
pub fn teams_form(
    file: &File,
    ignore_saturdays: bool,
    report_type: ReportType,
) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob("csvFile", file)?;
    form.append_with_str("ignorarSabados", bool_str(ignore_saturdays))?;
    form.append_with_str("tipoRelatorio", report_type.as_str())?;
    Ok(form)
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
