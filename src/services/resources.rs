// src/services/resources.rs
//! Well-known paths in the Asset Data Store.

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::LoadError;
use crate::models::{
    AmbulanceDocument, BankInfo, CampsDocument, CancerDayDocument, CommunityKitchenDocument,
    CompassionHomeDocument, ContactInfo, DocumentsDocument, GalleryDocument,
    MediaCoverageDocument, MfiDocument, ProgramsDocument, TeamDocument, TestimonialsDocument,
};
use crate::services::loader::decode;

pub const PROGRAMS: &str = "/assets/data/programs.json";
pub const FOOTER: &str = "/assets/data/footer.json";
pub const TEAM_MEMBERS: &str = "/assets/data/teammembers.json";
pub const TESTIMONIALS: &str = "/assets/data/testimonials.json";
pub const CANCER_AWARENESS_CAMP: &str = "/assets/data/cancer-awareness-camp.json";
pub const AMBULANCE: &str = "/assets/data/ambulance.json";
pub const COMPASSION_HOME: &str = "/assets/data/compassionhome.json";
pub const COMMUNITY_KITCHEN: &str = "/assets/data/communitykitchen.json";
pub const CANCER_DAY: &str = "/assets/data/cancerday.json";
pub const MFI: &str = "/assets/data/MFI.json";
pub const BANK_INFO: &str = "/assets/data/bankinfo.json";
pub const GALLERY_ITEMS: &str = "/assets/data/galleryitems.json";
pub const DOCUMENTS: &str = "/assets/data/documents.json";
pub const MEDIA_COVERAGE: &str = "/assets/data/media-coverage.json";

#[derive(Clone, Copy)]
pub struct Resource {
    pub path: &'static str,
    pub label: &'static str,
    /// Parses and validates a body as this resource's document type.
    pub check: fn(&str, &[u8]) -> Result<(), LoadError>,
}

fn check<T: DeserializeOwned + Validate>(path: &str, bytes: &[u8]) -> Result<(), LoadError> {
    decode::<T>(path, bytes).map(|_| ())
}

const fn resource<T: DeserializeOwned + Validate>(
    path: &'static str,
    label: &'static str,
) -> Resource {
    Resource {
        path,
        label,
        check: check::<T>,
    }
}

/// Every fixed resource, in the order the admin dashboard lists them.
pub const ALL: &[Resource] = &[
    resource::<ProgramsDocument>(PROGRAMS, "Programs"),
    resource::<ContactInfo>(FOOTER, "Contact info"),
    resource::<TeamDocument>(TEAM_MEMBERS, "Team members"),
    resource::<TestimonialsDocument>(TESTIMONIALS, "Testimonials"),
    resource::<CampsDocument>(CANCER_AWARENESS_CAMP, "Cancer awareness camps"),
    resource::<AmbulanceDocument>(AMBULANCE, "Ambulance services"),
    resource::<CompassionHomeDocument>(COMPASSION_HOME, "Compassion home"),
    resource::<CommunityKitchenDocument>(COMMUNITY_KITCHEN, "Community kitchen"),
    resource::<CancerDayDocument>(CANCER_DAY, "World Cancer Day"),
    resource::<MfiDocument>(MFI, "Microfinance"),
    resource::<BankInfo>(BANK_INFO, "Bank info"),
    resource::<GalleryDocument>(GALLERY_ITEMS, "Gallery"),
    resource::<DocumentsDocument>(DOCUMENTS, "Documents"),
    resource::<MediaCoverageDocument>(MEDIA_COVERAGE, "Media coverage"),
];

/// Resources every page needs; prefetched at startup.
pub const SHARED: &[&str] = &[FOOTER, PROGRAMS];

/// Per-program detail document. Callers validate `id` as a slug first.
pub fn program_detail(id: &str) -> String {
    format!("/assets/data/programs/{}.json", id)
}
