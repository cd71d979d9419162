//! Field extraction from a scanned inquiry page.
//!
//! Each section is extracted by a pure function over a [`DocumentScanner`];
//! none of them share state.

use crate::model::{Aircraft, Airworthiness, LabeledRecord, RegisteredOwner};
use crate::scanner::DocumentScanner;
use crate::selectors::{
    AIRCRAFT_CELLS, AIRWORTHINESS_CELLS, NOT_ASSIGNED_MARKER, OWNER_CELLS, ROOT, STATUS,
};

/// Assignment state read from the page's status paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Assigned,
    NotAssigned,
    /// The result container was missing, so no status could be read.
    Unknown,
}

impl RegistrationStatus {
    #[must_use]
    pub fn is_assigned(self) -> bool {
        self == Self::Assigned
    }
}

/// Fill a record from every labeled cell under `scope`. Unknown labels are
/// skipped; a repeated label keeps the last value.
pub fn extract_section<R: LabeledRecord>(scanner: &impl DocumentScanner, scope: &str) -> R {
    let mut record = R::default();
    for cell in scanner.labeled_cells(scope) {
        match R::field_for(&cell.label) {
            Some(field) => *record.field_mut(field) = cell.text,
            None => tracing::trace!("Ignoring unknown label {:?}", cell.label),
        }
    }
    record
}

pub fn extract_aircraft(scanner: &impl DocumentScanner) -> Aircraft {
    let aircraft: Aircraft = extract_section(scanner, AIRCRAFT_CELLS);
    if !aircraft.serial_number.is_empty() {
        tracing::debug!("Serial number: {}", aircraft.serial_number);
    }
    aircraft
}

pub fn extract_registered_owner(scanner: &impl DocumentScanner) -> RegisteredOwner {
    extract_section(scanner, OWNER_CELLS)
}

pub fn extract_airworthiness(scanner: &impl DocumentScanner) -> Airworthiness {
    extract_section(scanner, AIRWORTHINESS_CELLS)
}

/// Read the assignment status. A present container with no status paragraph
/// counts as assigned.
pub fn registration_status(scanner: &impl DocumentScanner) -> RegistrationStatus {
    if scanner.text_of(ROOT).is_none() {
        return RegistrationStatus::Unknown;
    }

    match scanner.text_of(STATUS) {
        Some(text) if text.contains(NOT_ASSIGNED_MARKER) => RegistrationStatus::NotAssigned,
        _ => RegistrationStatus::Assigned,
    }
}
