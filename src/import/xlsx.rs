use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;
use std::path::Path;

use crate::error::JournalError;
use crate::models::FormattedTrade;

/// Normalize an XLSX trade-history export into canonical trade records.
///
/// The first worksheet in document order is consumed; its first row supplies
/// the (Spanish, diacritics-sensitive) column headers and every following row
/// maps to exactly one record. A row whose cells are missing or unparseable
/// still yields a record with the affected fields at their defaults, so row
/// count in equals record count out.
pub fn normalize(bytes: &[u8]) -> Result<Vec<FormattedTrade>, JournalError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| JournalError::MalformedDocument(format!("Failed to open xlsx: {}", e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| JournalError::MalformedDocument("No sheets found in workbook".to_string()))?;

    let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
        JournalError::MalformedDocument(format!("Failed to read sheet '{}': {}", sheet_name, e))
    })?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(text_value).collect(),
        None => return Ok(Vec::new()),
    };

    let trades: Vec<FormattedTrade> = rows.map(|row| map_row(&headers, row)).collect();
    log::info!(
        "Normalized {} trade rows from sheet '{}'",
        trades.len(),
        sheet_name
    );
    Ok(trades)
}

/// Read and normalize a trade-history file from disk.
pub fn normalize_file(path: impl AsRef<Path>) -> Result<Vec<FormattedTrade>, JournalError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        JournalError::SourceUnavailable(format!("Failed to read {}: {}", path.display(), e))
    })?;
    normalize(&bytes)
}

/// Map one data row to a record using the fixed header table. Headers not in
/// the table are ignored; fields without a matching header keep their default.
fn map_row(headers: &[String], row: &[Data]) -> FormattedTrade {
    let mut trade = FormattedTrade::default();

    for (header, cell) in headers.iter().zip(row.iter()) {
        match header.as_str() {
            "Símbolo" => trade.symbol = text_value(cell),
            "Dirección de apertura" => trade.direction = text_value(cell),
            "Hora de apertura" => trade.open_time = text_value(cell),
            "Hora de cierre" => trade.close_time = text_value(cell),
            "Precio de entrada" => trade.entry_price = convert_value(cell),
            "Precio de cierre" => trade.close_price = convert_value(cell),
            "Cantidad de Cierre" => trade.quantity = convert_value(cell),
            "Volumen de Cierre" => trade.volume = convert_value(cell),
            "Comisión" => trade.commission = convert_value(cell),
            "$ neto" => trade.net = convert_value(cell),
            "Saldo $" => trade.balance = convert_value(cell),
            _ => {}
        }
    }

    trade
}

/// Extract f64 from a cell. Numbers pass through as-is; strings go through
/// locale-tolerant parsing; anything else degrades to 0.0. Never errors.
pub fn convert_value(cell: &Data) -> f64 {
    match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => parse_locale_number(s),
        _ => 0.0,
    }
}

/// Extract a verbatim string from a cell; non-text cells yield "".
fn text_value(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        _ => String::new(),
    }
}

/// Parse a Spanish-locale amount string ("1.234,56 USD") into an f64.
///
/// When a decimal comma is present, dots are thousands separators and are
/// dropped before the comma becomes the decimal point. Everything that is not
/// a digit, a decimal point, or a leading minus is then stripped, which
/// tolerates currency symbols and unit markers. Unparseable input is 0.0.
fn parse_locale_number(raw: &str) -> f64 {
    let normalized = if raw.contains(',') {
        raw.replace('.', "").replacen(',', ".", 1)
    } else {
        raw.to_string()
    };

    let mut numeric = String::with_capacity(normalized.len());
    for c in normalized.chars() {
        match c {
            '0'..='9' | '.' => numeric.push(c),
            '-' if numeric.is_empty() => numeric.push(c),
            _ => {}
        }
    }

    match numeric.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
