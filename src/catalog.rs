//! Service catalog
//!
//! Static, read-only reference data: every predefined service with its unit
//! price and general task. The catalog is keyed by exact service name.

use crate::models::{GeneralTask, Money};

/// One predefined service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub service: &'static str,
    pub unit_price: Money,
    pub task: GeneralTask,
}

const fn entry(service: &'static str, euros: i64, task: GeneralTask) -> CatalogEntry {
    CatalogEntry {
        service,
        unit_price: Money::from_euros(euros),
        task,
    }
}

static ENTRIES: &[CatalogEntry] = &[
    entry("Poster Design", 150, GeneralTask::Collaterals),
    entry("Brochure Design", 400, GeneralTask::Collaterals),
    entry("Catalogue Design", 800, GeneralTask::Collaterals),
    entry("Leaflet Design", 100, GeneralTask::Collaterals),
    entry("Presentation Design", 300, GeneralTask::Collaterals),
    entry("Whitepaper Creation", 500, GeneralTask::Collaterals),
    entry("Infographic Design", 250, GeneralTask::Collaterals),
    entry("Office Wall Design", 1200, GeneralTask::OfficeDesign),
    entry("Website Banner Design", 250, GeneralTask::Digital),
    entry("Social Media Graphics", 200, GeneralTask::Digital),
    entry("Translation (<5 pages)", 100, GeneralTask::Translations),
    entry("Translation (5–10 pages)", 180, GeneralTask::Translations),
    entry("Translation (10–20 pages)", 350, GeneralTask::Translations),
    entry("Translation (20–50 pages)", 800, GeneralTask::Translations),
    entry("Translation (>50 pages)", 1500, GeneralTask::Translations),
    entry("Website Event Registration Webpage", 600, GeneralTask::Digital),
    entry("Event Registration Handling", 400, GeneralTask::Events),
    entry("Webpage Link for Campaign", 300, GeneralTask::Digital),
    entry("Video Production (<1 minute)", 800, GeneralTask::VideoProduction),
    entry("Video Production (>1 minute)", 1500, GeneralTask::VideoProduction),
    entry("Cost of One Lead Generated", 50, GeneralTask::LeadGeneration),
    entry("Specific PR Need", 1000, GeneralTask::CampaignsAndPr),
    entry("Market Research Report", 2000, GeneralTask::MarketResearch),
    entry("Brand Guidelines Creation", 1500, GeneralTask::Collaterals),
    entry("VR Experience (1-day)", 2000, GeneralTask::Vr),
    entry("Event Support (on-site branding)", 1200, GeneralTask::Events),
    entry("Event Support (digital assets)", 800, GeneralTask::Events),
    entry("Webinar Setup & Promotion", 1000, GeneralTask::Events),
    entry("Trade Show Booth Design", 2500, GeneralTask::Events),
];

/// Read-only access to the predefined services
pub struct Catalog;

impl Catalog {
    /// Look up a service by exact name
    pub fn lookup(service: &str) -> Option<&'static CatalogEntry> {
        ENTRIES.iter().find(|e| e.service == service)
    }

    /// All entries in catalog order
    pub fn entries() -> &'static [CatalogEntry] {
        ENTRIES
    }

    /// Entries belonging to one general task
    pub fn by_task(task: GeneralTask) -> impl Iterator<Item = &'static CatalogEntry> {
        ENTRIES.iter().filter(move |e| e.task == task)
    }
}

/// Resolve the general task of a line item
///
/// Explicit choice first, then the catalog task for the service name, then
/// the `Custom` sentinel. The result is never empty.
pub fn resolve_task(explicit: Option<GeneralTask>, service: &str) -> GeneralTask {
    explicit
        .or_else(|| Catalog::lookup(service).map(|e| e.task))
        .unwrap_or(GeneralTask::Custom)
}
