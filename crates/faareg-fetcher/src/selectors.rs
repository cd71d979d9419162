//! Selectors and label tables for the FAA N-number inquiry page.
//!
//! These mirror the registry's current markup. Section positions are
//! structural (`nth-child`), so a layout change on the registry side only
//! needs an edit here.

use crate::model::{AircraftField, AirworthinessField, OwnerField};

/// Query parameter carrying the tail number.
pub const QUERY_PARAM: &str = "nNumberTxt";

/// Root container of the result page.
pub const ROOT: &str = "#mainDiv";

/// Paragraph stating whether the number is assigned.
pub const STATUS: &str = "#mainDiv .noprint > p:nth-child(4)";

/// Text the status paragraph carries for unassigned numbers.
pub const NOT_ASSIGNED_MARKER: &str = "Not Assigned/Reserved";

/// Attribute holding a cell's label.
pub const LABEL_ATTR: &str = "data-label";

pub const AIRCRAFT_CELLS: &str = "#mainDiv div:nth-child(5) table tbody td[data-label]";
pub const OWNER_CELLS: &str = "#mainDiv div:nth-child(6) table tbody td[data-label]";
pub const AIRWORTHINESS_CELLS: &str = "#mainDiv div:nth-child(7) table tbody td[data-label]";

pub const AIRCRAFT_LABELS: &[(&str, AircraftField)] = &[
    ("Serial Number", AircraftField::SerialNumber),
    ("Status", AircraftField::Status),
    ("Manufacturer Name", AircraftField::ManufacturerName),
    ("Certificate Issue Date", AircraftField::CertificateIssueDate),
    ("Model", AircraftField::Model),
    ("Expiration Date", AircraftField::ExpirationDate),
    ("Aircraft Type", AircraftField::AircraftType),
    ("Engine Type", AircraftField::EngineType),
    ("Pending Number Change", AircraftField::PendingNumberChange),
    ("Dealer", AircraftField::Dealer),
    ("Date Change Authorized", AircraftField::DateChangeAuthorized),
    ("Mode S Code (Base 8 / oct)", AircraftField::ModeSCodeOct),
    ("Mfr Year", AircraftField::MfrYear),
    ("Mode S Code (Base 16 / Hex)", AircraftField::ModeSCodeHex),
    ("Type Registration", AircraftField::TypeRegistration),
    ("Fractional Owner", AircraftField::FractionalOwner),
];

pub const OWNER_LABELS: &[(&str, OwnerField)] = &[
    ("Name", OwnerField::Name),
    ("Street", OwnerField::Street),
    ("City", OwnerField::City),
    ("State", OwnerField::State),
    ("County", OwnerField::County),
    ("Zip Code", OwnerField::ZipCode),
    ("Country", OwnerField::Country),
];

pub const AIRWORTHINESS_LABELS: &[(&str, AirworthinessField)] = &[
    (
        "Type Certificate Data Sheet",
        AirworthinessField::TypeCertificateDataSheet,
    ),
    ("Type Certificate Holder", AirworthinessField::TypeCertificateHolder),
    ("Engine Manufacturer", AirworthinessField::EngineManufacturer),
    ("Classification", AirworthinessField::Classification),
    ("Engine Model", AirworthinessField::EngineModel),
    ("Category", AirworthinessField::Category),
    ("A/W Date", AirworthinessField::Date),
    ("Exception Code", AirworthinessField::ExceptionCode),
];
