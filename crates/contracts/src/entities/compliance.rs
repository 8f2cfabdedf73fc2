use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The four compliance areas a client can be handled for.
///
/// Carried flattened by both clients and permission records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceFlags {
    /// VAT reporting
    pub vat: bool,
    /// Annual report preparation
    pub annual_report: bool,
    /// Payroll handling
    pub payroll: bool,
    /// Know-your-customer checks
    pub kyc: bool,
}

impl ComplianceFlags {
    pub const fn none() -> Self {
        Self {
            vat: false,
            annual_report: false,
            payroll: false,
            kyc: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            vat: true,
            annual_report: true,
            payroll: true,
            kyc: true,
        }
    }

    /// Check if any flag is set
    pub fn any(&self) -> bool {
        self.vat || self.annual_report || self.payroll || self.kyc
    }

    /// Wire names of the set flags, in declaration order
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("vat", self.vat),
            ("annualReport", self.annual_report),
            ("payroll", self.payroll),
            ("kyc", self.kyc),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}
