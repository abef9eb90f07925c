use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Service categories offered in the contact form dropdown.
///
/// The string form is the label shown to visitors and sent to the relay.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum Subject {
    #[strum(serialize = "Testing Request")]
    #[serde(rename = "Testing Request")]
    TestingRequest,
    #[strum(serialize = "QA Consultation")]
    #[serde(rename = "QA Consultation")]
    QaConsultation,
    #[strum(serialize = "Automation Setup")]
    #[serde(rename = "Automation Setup")]
    AutomationSetup,
    #[strum(serialize = "QA Audit")]
    #[serde(rename = "QA Audit")]
    QaAudit,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryCode {
    pub dial: &'static str,
    pub label: &'static str,
}

pub const DEFAULT_COUNTRY_CODE: &str = "+1";

pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode {
        dial: "+1",
        label: "US/CA",
    },
    CountryCode {
        dial: "+44",
        label: "UK",
    },
    CountryCode {
        dial: "+234",
        label: "NG",
    },
    CountryCode {
        dial: "+233",
        label: "GH",
    },
    CountryCode {
        dial: "+254",
        label: "KE",
    },
    CountryCode {
        dial: "+27",
        label: "ZA",
    },
    CountryCode {
        dial: "+49",
        label: "DE",
    },
    CountryCode {
        dial: "+33",
        label: "FR",
    },
    CountryCode {
        dial: "+91",
        label: "IN",
    },
    CountryCode {
        dial: "+61",
        label: "AU",
    },
    CountryCode {
        dial: "+971",
        label: "AE",
    },
];
