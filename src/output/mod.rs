pub mod report;

use serde::Serialize;

use crate::catalog::CatalogEntry;

// fixed empty-state line, shared by the text table and the html report.
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Xml,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".xml") {
        return Some(OutputFormat::Xml);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

#[derive(Clone, Debug, Serialize)]
pub struct OutputRecord {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub category_icon: String,
    pub owner: String,
    pub owner_sex: String,
}

pub fn build_records(entries: &[CatalogEntry]) -> Vec<OutputRecord> {
    entries
        .iter()
        .map(|e| OutputRecord {
            id: e.id,
            name: e.name.clone(),
            category: e.category_title.clone(),
            category_icon: e.category_icon.clone(),
            owner: e.owner_name.clone(),
            owner_sex: e.owner_sex.as_str().to_string(),
        })
        .collect()
}

pub fn render_text(records: &[OutputRecord]) -> Vec<u8> {
    if records.is_empty() {
        let mut out = String::from(NO_MATCHES_MESSAGE);
        out.push('\n');
        return out.into_bytes();
    }

    let mut rows: Vec<[String; 4]> = vec![[
        "ID".to_string(),
        "Product".to_string(),
        "Category".to_string(),
        "User".to_string(),
    ]];
    for r in records {
        rows.push([
            r.id.to_string(),
            r.name.clone(),
            format!("{} - {}", r.category_icon, r.category),
            r.owner.clone(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in rows.iter() {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in rows.iter() {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if i + 1 < row.len() {
                let pad = widths[i].saturating_sub(cell.chars().count()) + 2;
                line.push_str(&" ".repeat(pad));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.into_bytes()
}

pub fn render_json(records: &[OutputRecord]) -> Vec<u8> {
    serde_json::to_vec_pretty(records).unwrap_or_else(|_| b"[]\n".to_vec())
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn render_xml(records: &[OutputRecord]) -> Vec<u8> {
    let mut out = String::new();
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    out.push_str("<products>\n");
    for r in records {
        out.push_str("  <product>\n");
        out.push_str(&format!("    <id>{}</id>\n", r.id));
        out.push_str(&format!("    <name>{}</name>\n", escape_xml(&r.name)));
        out.push_str(&format!(
            "    <category icon=\"{}\">{}</category>\n",
            escape_xml(&r.category_icon),
            escape_xml(&r.category)
        ));
        out.push_str(&format!(
            "    <owner sex=\"{}\">{}</owner>\n",
            escape_xml(&r.owner_sex),
            escape_xml(&r.owner)
        ));
        out.push_str("  </product>\n");
    }
    out.push_str("</products>\n");
    out.into_bytes()
}

pub fn render_html(records: &[OutputRecord]) -> Vec<u8> {
    report::render_html(records)
}
