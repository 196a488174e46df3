//! Response types for the registry protocol.
//!
//! Pure data transfer shapes. Entity records serialize PascalCase on the
//! wire; the bank-account shapes are snake case. Every field is optional or
//! defaulted; the registry omits what it does not know.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Basic entity record, keyed by tax key (CUIT).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityBasicData {
    /// Numeric registry key.
    #[serde(default)]
    pub natural_key: Option<i64>,

    /// Key type (e.g. CUIT, CUIL).
    #[serde(default)]
    pub key_type: Option<String>,

    /// Document type backing the key.
    #[serde(default)]
    pub document_type: Option<String>,

    /// Natural or legal person.
    #[serde(default)]
    pub person_type: Option<String>,

    /// Given name (natural persons).
    #[serde(default)]
    pub name: Option<String>,

    /// Last name (natural persons).
    #[serde(default)]
    pub last_name: Option<String>,

    /// Document number backing the key.
    #[serde(default)]
    pub document_number: Option<String>,

    /// Birth date (natural persons).
    #[serde(default)]
    pub birthdate: Option<DateTime<Utc>>,

    /// Death date, when recorded.
    #[serde(default)]
    pub deathdate: Option<DateTime<Utc>>,

    /// Key status (active, inactive, ...).
    #[serde(default)]
    pub key_status: Option<String>,

    /// Legal type (legal persons).
    #[serde(default)]
    pub legal_type: Option<String>,

    /// Registry inscription date.
    #[serde(default)]
    pub inscription_date: Option<DateTime<Utc>>,

    /// Previous key this one replaces, if any.
    #[serde(default)]
    pub associated_inactive_key: Option<String>,

    /// Main declared activity id.
    #[serde(default)]
    pub main_activity_id: Option<i32>,

    /// Period of the main activity declaration.
    #[serde(default)]
    pub main_activity_period: Option<i32>,

    /// Main activity description.
    #[serde(default)]
    pub main_activity_description: Option<String>,

    /// Fiscal close month (legal persons).
    #[serde(default)]
    pub close_month: Option<i32>,

    /// Social contract date (legal persons).
    #[serde(default)]
    pub social_contract_date: Option<DateTime<Utc>>,

    /// Registered business name.
    #[serde(default)]
    pub business_name: Option<String>,

    /// Gender (natural persons).
    #[serde(default)]
    pub gender: Option<String>,

    /// Residence type.
    #[serde(default)]
    pub residence_type: Option<String>,

    /// Authority that inscribed the entity.
    #[serde(default)]
    pub inscription_authority: Option<String>,

    /// Inscription number at that authority.
    #[serde(default)]
    pub inscription_number: Option<String>,

    /// National equity percentage, as reported.
    #[serde(default)]
    pub national_equity_percentage: Option<String>,

    /// Display name composed by the registry.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Registered taxes.
    #[serde(default)]
    pub taxes: Vec<Tax>,

    /// Tax condition entries.
    #[serde(default)]
    pub taxes_conditions: Vec<TaxCondition>,

    /// Registered email addresses.
    #[serde(default)]
    pub emails: Vec<Email>,

    /// Declared activities.
    #[serde(default)]
    pub activities: Vec<Activity>,

    /// Registered telephones.
    #[serde(default)]
    pub telephones: Vec<Telephone>,

    /// Registered addresses.
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// Full entity record: every [`EntityBasicData`] field plus exclusion and
/// special-record sub-lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityFullData {
    /// The basic record fields, inline on the wire.
    #[serde(flatten)]
    pub basic: EntityBasicData,

    /// Regime exclusions in force or expired.
    #[serde(default)]
    pub exclusions: Vec<Exclusion>,

    /// Special-record entries across rules.
    #[serde(default)]
    pub special_record_entries: Vec<SpecialRecordEntry>,
}

/// One entry of a regulatory special record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecialRecordEntry {
    /// Issuing body.
    #[serde(default)]
    pub issuer: Option<String>,

    /// Rule the record belongs to.
    #[serde(default)]
    pub rule: Option<String>,

    /// Human-readable rule name.
    #[serde(default)]
    pub rule_name: Option<String>,

    /// Record category.
    #[serde(default)]
    pub category: Option<String>,

    /// When the inclusion was published.
    #[serde(default)]
    pub inclusion_publication_date: Option<DateTime<Utc>>,

    /// Last update of the record.
    #[serde(default)]
    pub record_update_time: Option<DateTime<Utc>>,

    /// When a suspension was published, if any.
    #[serde(default)]
    pub suspension_publication_date: Option<DateTime<Utc>>,

    /// When the suspension was lifted, if it was.
    #[serde(default)]
    pub suspension_removal_date: Option<DateTime<Utc>>,

    /// Record status.
    #[serde(default)]
    pub status: Option<String>,

    /// Rule-specific payload, shape varies per rule.
    #[serde(default)]
    pub entity_data: HashMap<String, serde_json::Value>,

    /// When the entry was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A regime exclusion attached to an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Exclusion {
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub rule: Option<String>,
    #[serde(default)]
    pub rule_name: Option<String>,
    #[serde(default)]
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub certification_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fiscal_period: Option<String>,
}

/// A tax registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tax {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub days_in_period: Option<String>,
    #[serde(default)]
    pub tax_id: Option<i32>,
    #[serde(default)]
    pub period: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub inscription_date: Option<String>,
}

/// A tax condition entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaxCondition {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub period: Option<i32>,
}

/// A registered email address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Email {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A declared activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Activity {
    #[serde(default)]
    pub activity_id: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nomenclator: Option<i32>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub period: Option<i32>,
}

/// A registered telephone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Telephone {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub phone_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A registered address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub state_id: Option<i32>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub number: Option<i32>,
    #[serde(default)]
    pub floor: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub tower: Option<String>,
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Wire name kept as the registry spells it.
    #[serde(default, rename = "AditionalDataType")]
    pub aditional_data_type: Option<String>,
    #[serde(default)]
    pub local_department_office: Option<String>,
    #[serde(default)]
    pub address_status: Option<String>,
    #[serde(default)]
    pub address_type_aux: Option<String>,
}

/// Bank account detail, keyed by account address (CBU).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccountDetail {
    /// Account owners as reported by the holding bank.
    #[serde(default)]
    pub owners: Vec<AccountOwner>,

    /// Account type.
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,

    /// Whether the account is active.
    #[serde(default)]
    pub is_active: Option<bool>,

    /// Account currency.
    #[serde(default)]
    pub currency: Option<String>,

    /// Account label.
    #[serde(default)]
    pub label: Option<String>,

    /// Routing information for the account.
    #[serde(default)]
    pub account_routing: Option<AccountRouting>,

    /// Routing information for the holding bank.
    #[serde(default)]
    pub bank_routing: Option<BankRouting>,
}

/// One owner of a bank account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountOwner {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Account routing scheme and address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountRouting {
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Bank routing scheme and address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankRouting {
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Result of validating an account against an owner key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankAccountOwner {
    /// Whether the key is an owner of the account.
    #[serde(default)]
    pub valid: bool,

    /// Owner display name, when the bank reports one.
    #[serde(default)]
    pub owner_name: Option<String>,
}
