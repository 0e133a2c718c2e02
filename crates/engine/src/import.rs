//! Lead import
//!
//! Turns pasted CSV text or lead-shaped JSON into scored leads. The CSV
//! reader is deliberately small: the first line is the header, fields are
//! split on commas outside double quotes, quote characters are dropped and
//! every field is trimmed. Escaped quotes and multi-line fields are not
//! supported.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use lead_router_core::{Error, Lead, LeadDraft, Result};

use crate::scoring::score_lead;

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").unwrap());

/// Parsed CSV: a header row plus data rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Parse CSV text into a header and rows
pub fn parse_csv(text: &str) -> Result<CsvTable> {
    let lines: Vec<&str> = text
        .trim()
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    if lines.len() < 2 {
        return Err(Error::Import(
            "CSV must have a header row and at least one data row".to_string(),
        ));
    }

    let headers = parse_line(lines[0]);
    let rows = lines[1..].iter().map(|l| parse_line(l)).collect();
    Ok(CsvTable { headers, rows })
}

/// Which CSV column feeds each lead field
///
/// `None` (or an empty string from a client) leaves the field unmapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMappings {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub budget: Option<String>,
    pub source: Option<String>,
}

/// Guess mappings from header names
///
/// Each header is claimed by at most one field, checked in the order name,
/// email, company, location, industry, budget, source. A field keeps the
/// first header that matches it.
pub fn auto_detect_mappings(headers: &[String]) -> FieldMappings {
    let mut m = FieldMappings::default();

    for header in headers {
        let lower = header.trim().to_lowercase();
        let claim = Some(header.clone());

        if (lower.contains("name") || lower == "contact") && m.name.is_none() {
            m.name = claim;
        } else if lower.contains("email") && m.email.is_none() {
            m.email = claim;
        } else if (lower.contains("company") || lower == "business") && m.company.is_none() {
            m.company = claim;
        } else if (lower.contains("location") || lower.contains("address") || lower.contains("country"))
            && m.location.is_none()
        {
            m.location = claim;
        } else if (lower.contains("industry") || lower.contains("niche")) && m.industry.is_none() {
            m.industry = claim;
        } else if lower.contains("budget") && m.budget.is_none() {
            m.budget = claim;
        } else if (lower.contains("source") || lower == "url" || lower.contains("website"))
            && m.source.is_none()
        {
            m.source = claim;
        }
    }

    if m.company.is_none() && m.name.is_none() {
        if let Some(business) = headers.iter().find(|h| h.to_lowercase() == "business") {
            m.company = Some(business.clone());
        }
    }

    m
}

/// Parse a free-form budget cell such as `$25,000`
pub fn parse_budget(raw: &str) -> f64 {
    NON_NUMERIC
        .replace_all(raw, "")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Map table rows onto lead drafts
///
/// Unmapped or missing cells become empty strings, then location, industry
/// and source fall back to `Unknown`, `Other` and `Import`.
pub fn format_rows(table: &CsvTable, mappings: &FieldMappings) -> Vec<LeadDraft> {
    let index = |mapping: &Option<String>| -> Option<usize> {
        mapping
            .as_deref()
            .filter(|h| !h.is_empty())
            .and_then(|h| table.column(h))
    };
    let name = index(&mappings.name);
    let email = index(&mappings.email);
    let company = index(&mappings.company);
    let location = index(&mappings.location);
    let industry = index(&mappings.industry);
    let budget = index(&mappings.budget);
    let source = index(&mappings.source);

    table
        .rows
        .iter()
        .map(|row| {
            let cell = |idx: Option<usize>| -> String {
                idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
            };
            let or_default = |value: String, fallback: &str| {
                if value.is_empty() {
                    fallback.to_string()
                } else {
                    value
                }
            };

            let mut draft = LeadDraft {
                name: cell(name),
                email: cell(email),
                company: cell(company),
                ..Default::default()
            };
            draft.attributes.location = or_default(cell(location), "Unknown");
            draft.attributes.industry = or_default(cell(industry), "Other");
            draft.attributes.source = or_default(cell(source), "Import");
            draft.attributes.budget = parse_budget(&cell(budget));
            draft
        })
        .collect()
}

/// Materialize and score a single imported draft
pub fn normalize_draft(draft: LeadDraft) -> Lead {
    let mut lead = Lead::from_draft(draft);
    if !lead.attributes.budget.is_finite() || lead.attributes.budget < 0.0 {
        lead.attributes.budget = 0.0;
    }
    score_lead(&mut lead);
    lead
}

/// Materialize and score a batch of drafts
pub fn import_leads(drafts: Vec<LeadDraft>) -> Vec<Lead> {
    let leads: Vec<Lead> = drafts.into_iter().map(normalize_draft).collect();
    metrics::counter!("lead_router_leads_imported_total").increment(leads.len() as u64);
    tracing::info!(count = leads.len(), "Imported leads");
    leads
}

/// Parse CSV text and import every row
///
/// Mappings are auto-detected from the header when not supplied.
pub fn import_csv(text: &str, mappings: Option<FieldMappings>) -> Result<Vec<Lead>> {
    let table = parse_csv(text)?;
    let mappings = mappings.unwrap_or_else(|| auto_detect_mappings(&table.headers));
    tracing::debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        ?mappings,
        "Parsed CSV"
    );
    Ok(import_leads(format_rows(&table, &mappings)))
}
