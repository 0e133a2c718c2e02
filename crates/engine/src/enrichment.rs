//! Bulk field enrichment
//!
//! Applies externally looked-up values (one per lead id) to a single lead
//! field, then rescores the targeted leads. Placeholder answers such as
//! `Unknown` or `Error` never overwrite existing data.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use lead_router_core::Lead;

use crate::scoring::score_lead;

static LEADING_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?").unwrap());

const PLACEHOLDERS: [&str; 2] = ["Unknown", "Error"];

/// Lead field an enrichment run targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentField {
    Budget,
    Rating,
    Phone,
    Website,
    Instagram,
    Industry,
    Location,
    Source,
    Company,
    Email,
    Name,
}

impl EnrichmentField {
    /// Parse the camelCase lead field name; unsupported fields yield `None`
    pub fn parse(field: &str) -> Option<Self> {
        Some(match field {
            "budget" => Self::Budget,
            "rating" => Self::Rating,
            "phone" => Self::Phone,
            "website" => Self::Website,
            "instagram" => Self::Instagram,
            "industry" => Self::Industry,
            "location" => Self::Location,
            "source" => Self::Source,
            "company" => Self::Company,
            "email" => Self::Email,
            "name" => Self::Name,
            _ => return None,
        })
    }

    /// Write `value` into the lead, returning whether anything changed
    pub fn apply(&self, lead: &mut Lead, value: &str) -> bool {
        match self {
            Self::Budget => {
                let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
                match digits.parse::<f64>() {
                    Ok(budget) if !digits.is_empty() => {
                        lead.attributes.budget = budget;
                        true
                    }
                    _ => false,
                }
            }
            Self::Rating => match parse_leading_float(value) {
                Some(rating) => {
                    lead.attributes.rating = Some(rating.clamp(0.0, 5.0));
                    true
                }
                None => false,
            },
            _ if PLACEHOLDERS.contains(&value) => false,
            Self::Phone => set(&mut lead.phone, value),
            Self::Website => set(&mut lead.attributes.website, value),
            Self::Instagram => set(&mut lead.instagram, value),
            Self::Industry => replace(&mut lead.attributes.industry, value),
            Self::Location => replace(&mut lead.attributes.location, value),
            Self::Source => replace(&mut lead.attributes.source, value),
            Self::Company => replace(&mut lead.company, value),
            Self::Email => replace(&mut lead.email, value),
            Self::Name => replace(&mut lead.name, value),
        }
    }
}

fn set(slot: &mut Option<String>, value: &str) -> bool {
    *slot = Some(value.to_string());
    true
}

fn replace(slot: &mut String, value: &str) -> bool {
    *slot = value.to_string();
    true
}

/// Parse the numeric prefix of a string, e.g. `4.7 stars` → 4.7
fn parse_leading_float(value: &str) -> Option<f64> {
    LEADING_FLOAT
        .find(value)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Enrich the targeted leads and rescore them
///
/// Ids without a (non-empty) result are skipped but still rescored.
/// Returns the number of ids requested.
pub fn enrich_leads(
    leads: &mut [Lead],
    lead_ids: &[String],
    field: &str,
    results: &HashMap<String, String>,
) -> usize {
    let target = EnrichmentField::parse(field);
    if target.is_none() {
        tracing::warn!(field = %field, "Unsupported enrichment field, values ignored");
    }

    let mut updated = 0usize;
    for lead in leads.iter_mut().filter(|l| lead_ids.contains(&l.id)) {
        if let (Some(target), Some(value)) = (target, results.get(&lead.id)) {
            if !value.is_empty() && target.apply(lead, value) {
                updated += 1;
            }
        }
        score_lead(lead);
    }

    tracing::info!(
        field = %field,
        requested = lead_ids.len(),
        updated,
        "Enrichment applied"
    );
    lead_ids.len()
}
