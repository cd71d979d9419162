//! Registration records returned by a lookup.
//!
//! Every field is free-form text trimmed of surrounding whitespace. A field
//! stays empty when the page has no cell carrying its label.

use crate::selectors::{AIRCRAFT_LABELS, AIRWORTHINESS_LABELS, OWNER_LABELS};
use serde::{Deserialize, Serialize};

/// A record whose fields are filled from labeled table cells.
pub trait LabeledRecord: Default {
    /// Destination attribute a label maps to.
    type Field: Copy + 'static;

    /// Label dispatch table: page label text to destination attribute.
    const LABELS: &'static [(&'static str, Self::Field)];

    /// Mutable access to the attribute behind `field`.
    fn field_mut(&mut self, field: Self::Field) -> &mut String;

    /// Look up the destination attribute for an exact label.
    fn field_for(label: &str) -> Option<Self::Field> {
        Self::LABELS
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, field)| *field)
    }
}

/// Complete registration of one aircraft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub aircraft: Aircraft,
    pub registered_owner: RegisteredOwner,
    pub airworthiness: Airworthiness,
}

/// Aircraft description section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Full registration mark (`N` prefix included). Filled from the queried
    /// identifier, not from the page.
    pub registration: String,
    pub serial_number: String,
    pub status: String,
    pub manufacturer_name: String,
    pub certificate_issue_date: String,
    pub model: String,
    pub expiration_date: String,
    pub aircraft_type: String,
    pub engine_type: String,
    pub pending_number_change: String,
    pub dealer: String,
    pub date_change_authorized: String,
    pub mode_s_code_oct: String,
    pub mfr_year: String,
    pub mode_s_code_hex: String,
    pub type_registration: String,
    pub fractional_owner: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftField {
    SerialNumber,
    Status,
    ManufacturerName,
    CertificateIssueDate,
    Model,
    ExpirationDate,
    AircraftType,
    EngineType,
    PendingNumberChange,
    Dealer,
    DateChangeAuthorized,
    ModeSCodeOct,
    MfrYear,
    ModeSCodeHex,
    TypeRegistration,
    FractionalOwner,
}

impl LabeledRecord for Aircraft {
    type Field = AircraftField;

    const LABELS: &'static [(&'static str, AircraftField)] = AIRCRAFT_LABELS;

    fn field_mut(&mut self, field: AircraftField) -> &mut String {
        match field {
            AircraftField::SerialNumber => &mut self.serial_number,
            AircraftField::Status => &mut self.status,
            AircraftField::ManufacturerName => &mut self.manufacturer_name,
            AircraftField::CertificateIssueDate => &mut self.certificate_issue_date,
            AircraftField::Model => &mut self.model,
            AircraftField::ExpirationDate => &mut self.expiration_date,
            AircraftField::AircraftType => &mut self.aircraft_type,
            AircraftField::EngineType => &mut self.engine_type,
            AircraftField::PendingNumberChange => &mut self.pending_number_change,
            AircraftField::Dealer => &mut self.dealer,
            AircraftField::DateChangeAuthorized => &mut self.date_change_authorized,
            AircraftField::ModeSCodeOct => &mut self.mode_s_code_oct,
            AircraftField::MfrYear => &mut self.mfr_year,
            AircraftField::ModeSCodeHex => &mut self.mode_s_code_hex,
            AircraftField::TypeRegistration => &mut self.type_registration,
            AircraftField::FractionalOwner => &mut self.fractional_owner,
        }
    }
}

/// Registered owner section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredOwner {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub county: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerField {
    Name,
    Street,
    City,
    State,
    County,
    ZipCode,
    Country,
}

impl LabeledRecord for RegisteredOwner {
    type Field = OwnerField;

    const LABELS: &'static [(&'static str, OwnerField)] = OWNER_LABELS;

    fn field_mut(&mut self, field: OwnerField) -> &mut String {
        match field {
            OwnerField::Name => &mut self.name,
            OwnerField::Street => &mut self.street,
            OwnerField::City => &mut self.city,
            OwnerField::State => &mut self.state,
            OwnerField::County => &mut self.county,
            OwnerField::ZipCode => &mut self.zip_code,
            OwnerField::Country => &mut self.country,
        }
    }
}

/// Airworthiness section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airworthiness {
    pub type_certificate_data_sheet: String,
    pub type_certificate_holder: String,
    pub engine_manufacturer: String,
    pub classification: String,
    pub engine_model: String,
    pub category: String,
    /// Airworthiness date (`A/W Date` on the page).
    pub date: String,
    pub exception_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirworthinessField {
    TypeCertificateDataSheet,
    TypeCertificateHolder,
    EngineManufacturer,
    Classification,
    EngineModel,
    Category,
    Date,
    ExceptionCode,
}

impl LabeledRecord for Airworthiness {
    type Field = AirworthinessField;

    const LABELS: &'static [(&'static str, AirworthinessField)] = AIRWORTHINESS_LABELS;

    fn field_mut(&mut self, field: AirworthinessField) -> &mut String {
        match field {
            AirworthinessField::TypeCertificateDataSheet => &mut self.type_certificate_data_sheet,
            AirworthinessField::TypeCertificateHolder => &mut self.type_certificate_holder,
            AirworthinessField::EngineManufacturer => &mut self.engine_manufacturer,
            AirworthinessField::Classification => &mut self.classification,
            AirworthinessField::EngineModel => &mut self.engine_model,
            AirworthinessField::Category => &mut self.category,
            AirworthinessField::Date => &mut self.date,
            AirworthinessField::ExceptionCode => &mut self.exception_code,
        }
    }
}
