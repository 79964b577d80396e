//! XLSX export
//!
//! Serializes an estimate into a two-sheet SpreadsheetML workbook held in
//! memory: "Estimate" with one row per line item and "By Task" with the
//! per-task totals. Cells carry plain values only; text is written as inline
//! strings so no shared-string table is needed.

use std::fmt::Write as _;
use std::io::{Cursor, Write};

use chrono::Utc;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::Money;
use crate::reports::{Estimate, EstimateRow, TaskTotal};

/// Suggested download name
pub const EXPORT_FILE_NAME: &str = "estimate.xlsx";

/// MIME type of the produced blob
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Columns of the "Estimate" sheet, in order
pub const ESTIMATE_COLUMNS: [&str; 7] = [
    "Department",
    "Country",
    "General Task",
    "Service",
    "Quantity",
    "Unit Price (€)",
    "Total (€)",
];

/// Columns of the "By Task" sheet, in order
pub const BY_TASK_COLUMNS: [&str; 2] = ["General Task", "Total (€)"];

const ESTIMATE_SHEET: &str = "Estimate";
const BY_TASK_SHEET: &str = "By Task";

const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// A plain cell value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Amount(Money),
}

/// A record that can be laid out under named columns
///
/// Returning `None` for a column leaves that cell as an empty string.
pub trait ExportRow {
    fn cell(&self, column: &str) -> Option<CellValue>;
}

impl ExportRow for EstimateRow {
    fn cell(&self, column: &str) -> Option<CellValue> {
        let value = match column {
            "Department" => CellValue::Text(self.department.name().to_string()),
            "Country" => CellValue::Text(self.country.code().to_string()),
            "General Task" => CellValue::Text(self.task.name().to_string()),
            "Service" => CellValue::Text(self.service.clone()),
            "Quantity" => CellValue::Int(i64::from(self.quantity)),
            "Unit Price (€)" => CellValue::Amount(self.unit_price),
            "Total (€)" => CellValue::Amount(self.total),
            _ => return None,
        };
        Some(value)
    }
}

impl ExportRow for TaskTotal {
    fn cell(&self, column: &str) -> Option<CellValue> {
        match column {
            "General Task" => Some(CellValue::Text(self.task.name().to_string())),
            "Total (€)" => Some(CellValue::Amount(self.total)),
            _ => None,
        }
    }
}

/// Build the workbook for an estimate
pub fn export_estimate_xlsx(estimate: &Estimate) -> EstimatorResult<Vec<u8>> {
    build_workbook(&estimate.rows, &estimate.task_totals)
}

/// Build the two-sheet workbook as an in-memory blob
pub fn build_workbook(rows: &[EstimateRow], task_totals: &[TaskTotal]) -> EstimatorResult<Vec<u8>> {
    let sheets = [
        (ESTIMATE_SHEET, sheet_xml(&ESTIMATE_COLUMNS, rows)?),
        (BY_TASK_SHEET, sheet_xml(&BY_TASK_COLUMNS, task_totals)?),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let mut add_part = |name: &str, contents: &str| -> EstimatorResult<()> {
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file(name, options)?;
        zip.write_all(contents.as_bytes())
            .map_err(|e| EstimatorError::Export(format!("Failed to write {}: {}", name, e)))?;
        Ok(())
    };

    add_part("[Content_Types].xml", &content_types_xml(sheets.len()))?;
    add_part("_rels/.rels", &root_rels_xml())?;
    add_part("docProps/core.xml", &core_props_xml())?;
    add_part("xl/workbook.xml", &workbook_xml(&sheets)?)?;
    add_part("xl/_rels/workbook.xml.rels", &workbook_rels_xml(sheets.len()))?;
    add_part("xl/styles.xml", &styles_xml())?;
    for (i, (_, xml)) in sheets.iter().enumerate() {
        add_part(&format!("xl/worksheets/sheet{}.xml", i + 1), xml)?;
    }

    let bytes = zip.finish()?.into_inner();
    debug!(
        bytes = bytes.len(),
        rows = rows.len(),
        tasks = task_totals.len(),
        "workbook built"
    );
    Ok(bytes)
}

/// Render one worksheet: a header row followed by one row per record
fn sheet_xml<R: ExportRow>(columns: &[&str], records: &[R]) -> EstimatorResult<String> {
    let mut xml = String::new();
    write!(xml, r#"{}<worksheet xmlns="{}"><sheetData>"#, XML_DECL, NS_MAIN).map_err(xml_err)?;

    let header: Vec<CellValue> = columns
        .iter()
        .map(|c| CellValue::Text((*c).to_string()))
        .collect();
    write_row(&mut xml, 1, &header)?;

    for (i, record) in records.iter().enumerate() {
        let cells: Vec<CellValue> = columns
            .iter()
            .map(|c| record.cell(c).unwrap_or_else(|| CellValue::Text(String::new())))
            .collect();
        write_row(&mut xml, i + 2, &cells)?;
    }

    xml.push_str("</sheetData></worksheet>");
    Ok(xml)
}

fn write_row(xml: &mut String, row_num: usize, cells: &[CellValue]) -> EstimatorResult<()> {
    write!(xml, r#"<row r="{}">"#, row_num).map_err(xml_err)?;

    for (col, value) in cells.iter().enumerate() {
        let cell_ref = format!("{}{}", column_to_letters(col + 1), row_num);
        match value {
            CellValue::Text(s) => write!(
                xml,
                r#"<c r="{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                cell_ref,
                escape_xml(s)
            ),
            CellValue::Int(n) => write!(xml, r#"<c r="{}"><v>{}</v></c>"#, cell_ref, n),
            CellValue::Amount(m) => {
                write!(xml, r#"<c r="{}"><v>{}</v></c>"#, cell_ref, m.format_plain())
            }
        }
        .map_err(xml_err)?;
    }

    xml.push_str("</row>");
    Ok(())
}

fn workbook_xml(sheets: &[(&str, String)]) -> EstimatorResult<String> {
    let mut xml = String::new();
    write!(
        xml,
        r#"{}<workbook xmlns="{}" xmlns:r="{}"><sheets>"#,
        XML_DECL, NS_MAIN, NS_REL
    )
    .map_err(xml_err)?;
    for (i, (name, _)) in sheets.iter().enumerate() {
        write!(
            xml,
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            escape_xml(name),
            i + 1,
            i + 1
        )
        .map_err(xml_err)?;
    }
    xml.push_str("</sheets></workbook>");
    Ok(xml)
}

fn workbook_rels_xml(sheet_count: usize) -> String {
    let mut xml = format!(
        r#"{}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        XML_DECL
    );
    for i in 1..=sheet_count {
        xml.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="{}/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            i, NS_REL, i
        ));
    }
    xml.push_str(&format!(
        r#"<Relationship Id="rId{}" Type="{}/styles" Target="styles.xml"/>"#,
        sheet_count + 1,
        NS_REL
    ));
    xml.push_str("</Relationships>");
    xml
}

fn root_rels_xml() -> String {
    format!(
        concat!(
            r#"{}<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"<Relationship Id="rId1" Type="{}/officeDocument" Target="xl/workbook.xml"/>"#,
            r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#,
            "</Relationships>"
        ),
        XML_DECL, NS_REL
    )
}

fn content_types_xml(sheet_count: usize) -> String {
    let mut xml = format!(
        concat!(
            r#"{}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
            r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
            r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#
        ),
        XML_DECL
    );
    for i in 1..=sheet_count {
        xml.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            i
        ));
    }
    xml.push_str("</Types>");
    xml
}

fn core_props_xml() -> String {
    let created = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        concat!(
            r#"{}<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>Marketing Efforts Estimation</dc:title>",
            "<dc:creator>marketing-estimator</dc:creator>",
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
            "</cp:coreProperties>"
        ),
        XML_DECL, created, created
    )
}

fn styles_xml() -> String {
    format!(
        concat!(
            r#"{}<styleSheet xmlns="{}">"#,
            r#"<fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>"#,
            r#"<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>"#,
            r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#,
            r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
            r#"<cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>"#,
            r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#,
            "</styleSheet>"
        ),
        XML_DECL, NS_MAIN
    )
}

/// Convert a 1-based column number to letters (1 -> A, 27 -> AA)
fn column_to_letters(mut col: usize) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        letters.push(b'A' + rem as u8);
        col = (col - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn xml_err(e: std::fmt::Error) -> EstimatorError {
    EstimatorError::Export(format!("XML write error: {}", e))
}
