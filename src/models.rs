// src/models.rs
//! Records served by the Asset Data Store.
//!
//! All of them are read-only. Field rules are enforced by `validator` when a
//! document crosses the load boundary (see `services::loader::decode`).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use validator::{Validate, ValidationError};

use crate::utils::validation::validate_slug;

/// Ids in the fixtures are a mix of numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Stat {
    #[validate(length(min = 1))]
    pub value: String,
    #[validate(length(min = 1))]
    pub label: String,
}

// Programs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[validate(custom = "validate_slug")]
    pub id: String,
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1))]
    pub short_description: String,
    #[validate(length(min = 1))]
    pub full_description: String,
    pub icon: String,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    #[validate]
    pub stats: Vec<Stat>,
    #[validate(length(min = 1))]
    pub contact_person: String,
    #[validate(email)]
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "unique_program_ids"))]
pub struct ProgramsDocument {
    #[validate]
    pub programs: Vec<Program>,
}

impl ProgramsDocument {
    /// Route ids are matched by plain string equality.
    pub fn find(&self, id: &str) -> Option<&Program> {
        self.programs.iter().find(|program| program.id == id)
    }
}

/// Ids double as route segments, gallery keys and accordion keys, so a
/// repeated one within a list fails validation.
fn unique<K: Eq + Hash>(
    keys: impl IntoIterator<Item = K>,
    code: &'static str,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    if keys.into_iter().all(|key| seen.insert(key)) {
        Ok(())
    } else {
        Err(ValidationError::new(code))
    }
}

fn unique_program_ids(doc: &ProgramsDocument) -> Result<(), ValidationError> {
    unique(doc.programs.iter().map(|p| p.id.as_str()), "duplicate_program_id")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "unique_section_ids"))]
pub struct ProgramDetail {
    #[validate(custom = "validate_slug")]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[validate(length(min = 1))]
    pub description: String,
    pub hero_image: String,
    #[serde(default)]
    #[validate]
    pub stats: Vec<Stat>,
    #[serde(default)]
    #[validate]
    pub sections: Vec<DetailSection>,
}

fn unique_section_ids(detail: &ProgramDetail) -> Result<(), ValidationError> {
    unique(detail.sections.iter().map(|s| s.id.as_str()), "duplicate_section_id")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DetailSection {
    #[validate(custom = "validate_slug")]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub images: Vec<String>,
}

// Contact / footer

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[validate(length(min = 1))]
    pub organization: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[validate(length(min = 1))]
    pub phone: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate]
    pub addresses: Vec<Address>,
    #[serde(default)]
    #[validate]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub office_hours: Option<String>,
}

impl ContactInfo {
    /// WhatsApp falls back to the main phone line.
    pub fn whatsapp_number(&self) -> &str {
        self.whatsapp.as_deref().unwrap_or(&self.phone)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Address {
    #[validate(length(min = 1))]
    pub label: String,
    #[validate(length(min = 1))]
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SocialLink {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(url)]
    pub url: String,
}

// People

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Testimonial {
    pub id: RecordId,
    #[validate(length(min = 1))]
    pub name: String,
    pub role: String,
    #[validate(length(min = 1))]
    pub quote: String,
    #[serde(default)]
    pub story: Option<String>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TestimonialsDocument {
    #[validate]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TeamMember {
    pub id: RecordId,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub role: String,
    #[validate(length(min = 1))]
    pub department: String,
    #[serde(default)]
    pub bio: String,
    pub image: String,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TeamDocument {
    #[validate]
    pub members: Vec<TeamMember>,
}

impl TeamDocument {
    /// Departments in first-appearance order.
    pub fn departments(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.members
            .iter()
            .map(|m| m.department.as_str())
            .filter(|d| seen.insert(*d))
            .collect()
    }
}

// Donations

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BankInfo {
    #[validate(length(min = 1))]
    pub account_name: String,
    #[validate(length(min = 4))]
    pub account_number: String,
    #[validate(length(min = 1))]
    pub bank_name: String,
    pub branch: String,
    #[validate(length(equal = 11))]
    pub ifsc: String,
    #[serde(default)]
    pub upi_id: Option<String>,
    pub qr_image: String,
    #[serde(default)]
    pub note: Option<String>,
}

// Gallery, documents, press

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GalleryItem {
    pub id: RecordId,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub image: String,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GalleryDocument {
    #[validate]
    pub items: Vec<GalleryItem>,
}

impl GalleryDocument {
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DocumentRecord {
    #[validate(length(min = 1))]
    pub title: String,
    pub category: String,
    #[validate(range(min = 1990, max = 2100))]
    pub year: u16,
    #[validate(length(min = 1))]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DocumentsDocument {
    #[validate]
    pub documents: Vec<DocumentRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MediaArticle {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub outlet: String,
    pub date: String,
    #[serde(default)]
    pub url: Option<String>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MediaCoverageDocument {
    #[validate]
    pub articles: Vec<MediaArticle>,
}

// Program pages

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "unique_camp_keys"))]
pub struct CampsDocument {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[validate]
    pub camps: Vec<Camp>,
}

/// Camp ids are unique, and so are settlement ids within each camp.
fn unique_camp_keys(doc: &CampsDocument) -> Result<(), ValidationError> {
    unique(doc.camps.iter().map(|c| c.id.as_str()), "duplicate_camp_id")?;
    for camp in &doc.camps {
        unique(camp.settlements.iter().map(|s| s.id.as_str()), "duplicate_settlement_id")?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Camp {
    #[validate(custom = "validate_slug")]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub date: String,
    pub location: String,
    #[validate]
    pub settlements: Vec<Settlement>,
}

/// A sub-location visited during a camp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Settlement {
    #[validate(custom = "validate_slug")]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "unique_car_ids"))]
pub struct AmbulanceDocument {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[serde(default)]
    #[validate]
    pub stats: Vec<Stat>,
    #[validate]
    pub cars: Vec<AmbulanceCar>,
}

fn unique_car_ids(doc: &AmbulanceDocument) -> Result<(), ValidationError> {
    unique(doc.cars.iter().map(|c| c.id.as_str()), "duplicate_car_id")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AmbulanceCar {
    #[validate(custom = "validate_slug")]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub registration: String,
    #[serde(default)]
    pub donated_by: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "unique_story_ids"))]
pub struct CompassionHomeDocument {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[serde(default)]
    #[validate]
    pub stats: Vec<Stat>,
    #[validate]
    pub stories: Vec<PatientStory>,
}

fn unique_story_ids(doc: &CompassionHomeDocument) -> Result<(), ValidationError> {
    unique(doc.stories.iter().map(|s| s.id.as_str()), "duplicate_story_id")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PatientStory {
    #[validate(custom = "validate_slug")]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CommunityKitchenDocument {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[serde(default)]
    #[validate]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "unique_event_years"))]
pub struct CancerDayDocument {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[validate]
    pub events: Vec<CancerDayEvent>,
}

fn unique_event_years(doc: &CancerDayDocument) -> Result<(), ValidationError> {
    unique(doc.events.iter().map(|e| e.year), "duplicate_event_year")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CancerDayEvent {
    #[validate(range(min = 1990, max = 2100))]
    pub year: u16,
    #[validate(length(min = 1))]
    pub theme: String,
    pub summary: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "unique_group_ids"))]
pub struct MfiDocument {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[serde(default)]
    #[validate]
    pub stats: Vec<Stat>,
    #[validate]
    pub groups: Vec<MfiGroup>,
}

fn unique_group_ids(doc: &MfiDocument) -> Result<(), ValidationError> {
    unique(doc.groups.iter().map(|g| g.id.as_str()), "duplicate_group_id")
}

/// A self-help group receiving a microfinance loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MfiGroup {
    #[validate(custom = "validate_slug")]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub village: String,
    #[validate(range(min = 1))]
    pub members: u32,
    pub loan_amount: String,
    #[serde(default)]
    pub images: Vec<String>,
}
