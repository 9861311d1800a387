use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Category the extraction pipeline assigned to a contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ContractType {
    Purchase,
    Lease,
    Loan,
    Employment,
    Service,
    /// Fallback for anything the pipeline could not classify.
    #[default]
    Other,
}

impl From<String> for ContractType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "purchase" => Self::Purchase,
            "lease" => Self::Lease,
            "loan" => Self::Loan,
            "employment" => Self::Employment,
            "service" => Self::Service,
            _ => Self::Other,
        }
    }
}

/// Location in the source document a field value was taken from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceRef {
    pub page: usize,
    pub paragraph: usize,
    pub text: String,
}

// The extraction blocks below are populated by the AI pipeline, which may
// leave any field unset. Missing keys decode to zero values and `null`
// lists decode to empty lists, matching the server's own decoding rules.

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractInfo {
    pub contract_type: ContractType,
    pub contract_number: String,
    pub signing_date: String,
    pub effective_date: String,
    pub expiry_date: String,
    pub signing_location: String,
    pub contract_status: String,
    pub confidence: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_references: Vec<SourceRef>,
}

/// One contracting party. Used for both party A and party B.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub party_type: String,
    pub legal_representative: String,
    pub id_number: String,
    pub address: String,
    pub contact: String,
    pub bank_name: String,
    pub bank_account: String,
    pub confidence: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_references: Vec<SourceRef>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialInfo {
    pub transaction_amount: String,
    pub currency: String,
    pub payment_method: String,
    pub payment_schedule: String,
    pub tax_info: String,
    pub confidence: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_references: Vec<SourceRef>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityInfo {
    pub effective_condition: String,
    pub termination_condition: String,
    pub contract_status: String,
    pub termination_date: String,
    pub confidence: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_references: Vec<SourceRef>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RightsObligations {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub party_a_obligations: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub party_b_obligations: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub party_a_rights: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub party_b_rights: Vec<String>,
    pub performance_period: String,
    pub performance_location: String,
    pub confidence: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_references: Vec<SourceRef>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BreachLiability {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub breach_scenarios: Vec<String>,
    pub liquidated_damages: String,
    pub compensation_limit: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub exemption_clauses: Vec<String>,
    pub force_majeure_clause: String,
    pub confidence: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_references: Vec<SourceRef>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisputeResolution {
    pub resolution_method: String,
    pub jurisdiction_court: String,
    pub arbitration_org: String,
    pub arbitration_location: String,
    pub governing_law: String,
    pub confidence: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_references: Vec<SourceRef>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidentialityIp {
    pub confidentiality_clause: String,
    pub confidentiality_period: String,
    pub ip_ownership: String,
    pub confidence: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_references: Vec<SourceRef>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherTerms {
    pub modification_clause: String,
    pub assignment_clause: String,
    pub termination_procedure: String,
    pub notice_clause: String,
    pub contract_copies: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attachments: Vec<String>,
    pub confidence: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_references: Vec<SourceRef>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureInfo {
    pub party_a_signatory: String,
    pub party_a_sign_date: String,
    pub party_a_seal: bool,
    pub party_b_signatory: String,
    pub party_b_sign_date: String,
    pub party_b_seal: bool,
    pub witness_name: String,
    pub witness_contact: String,
    pub confidence: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub source_references: Vec<SourceRef>,
}

/// Extra fields present only for the matching contract type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeSpecificFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_fields: Option<EmploymentFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_fields: Option<LeaseFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_fields: Option<LoanFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fields: Option<ServiceFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_fields: Option<PurchaseFields>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentFields {
    pub position: String,
    pub work_location: String,
    pub work_hours: String,
    pub probation_period: String,
    pub salary: String,
    pub social_insurance: String,
    pub non_compete_clause: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseFields {
    pub leased_property: String,
    pub lease_area: String,
    pub lease_purpose: String,
    pub rent_amount: String,
    pub rent_payment_cycle: String,
    pub deposit: String,
    pub maintenance_responsibility: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanFields {
    pub loan_amount: String,
    pub loan_purpose: String,
    pub loan_term: String,
    pub interest_rate: String,
    pub repayment_method: String,
    pub collateral: String,
    pub guarantor: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceFields {
    pub service_content: String,
    pub service_standard: String,
    pub service_period: String,
    pub service_fee: String,
    pub acceptance_criteria: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseFields {
    pub goods_name: String,
    pub goods_spec: String,
    pub goods_quantity: String,
    pub goods_price: String,
    pub delivery_location: String,
    pub delivery_date: String,
    pub quality_standard: String,
    pub warranty_period: String,
    pub confidence: f64,
}

/// Processing metadata the server attaches to every result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub source_file: String,
    pub page_count: usize,
    pub extraction_time: DateTime<Utc>,
    /// Wall-clock seconds spent on this file.
    pub processing_duration: f64,
    pub overall_confidence: f64,
    pub ocr_required: bool,
    pub contract_type_chinese: String,
}

/// Everything extracted from a single uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub id: String,
    pub file_name: String,
    pub contract_info: ContractInfo,
    pub party_a: PartyInfo,
    pub party_b: PartyInfo,
    pub financial: FinancialInfo,
    pub validity: ValidityInfo,
    pub rights_obligations: RightsObligations,
    pub breach_liability: BreachLiability,
    pub dispute_resolution: DisputeResolution,
    pub confidentiality_ip: ConfidentialityIp,
    pub other_terms: OtherTerms,
    pub signature: SignatureInfo,
    pub type_specific: TypeSpecificFields,
    pub metadata: Metadata,
}

/// Payload of the task results endpoint.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub success: bool,
    pub message: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub results: Vec<ExtractionResult>,
}
