//! Organization profile.
//!
//! The scalar fields used to prefill document headers. One profile per
//! session, edited field by field.

use serde::{Deserialize, Serialize};

/// Effective date used when the user has not picked one.
pub const DEFAULT_EFFECTIVE_DATE: &str = "To be determined";

/// Descriptive fields about the organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationProfile {
    /// Full legal name
    pub company_name: String,

    /// Short form, e.g. "AIL"
    pub company_abbreviation: String,

    /// Full postal address
    pub company_address: String,

    /// Name of the approving top manager
    pub top_management_name: String,

    /// Title of the approving top manager
    pub top_management_title: String,

    /// Name of the QMS representative
    pub qms_representative_name: String,

    /// Title of the QMS representative
    pub qms_representative_title: String,

    /// Default effective date printed on documents
    pub document_effective_date: String,
}

impl OrganizationProfile {
    pub fn set_company_name(&mut self, name: impl Into<String>) {
        self.company_name = name.into();
    }

    pub fn set_company_abbreviation(&mut self, abbreviation: impl Into<String>) {
        self.company_abbreviation = abbreviation.into();
    }

    pub fn set_company_address(&mut self, address: impl Into<String>) {
        self.company_address = address.into();
    }

    pub fn set_top_management_name(&mut self, name: impl Into<String>) {
        self.top_management_name = name.into();
    }

    pub fn set_top_management_title(&mut self, title: impl Into<String>) {
        self.top_management_title = title.into();
    }

    pub fn set_qms_representative_name(&mut self, name: impl Into<String>) {
        self.qms_representative_name = name.into();
    }

    pub fn set_qms_representative_title(&mut self, title: impl Into<String>) {
        self.qms_representative_title = title.into();
    }

    pub fn set_document_effective_date(&mut self, date: impl Into<String>) {
        self.document_effective_date = date.into();
    }

    /// Read a field by its identifier.
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::CompanyName => &self.company_name,
            ProfileField::CompanyAbbreviation => &self.company_abbreviation,
            ProfileField::CompanyAddress => &self.company_address,
            ProfileField::TopManagementName => &self.top_management_name,
            ProfileField::TopManagementTitle => &self.top_management_title,
            ProfileField::QmsRepresentativeName => &self.qms_representative_name,
            ProfileField::QmsRepresentativeTitle => &self.qms_representative_title,
            ProfileField::DocumentEffectiveDate => &self.document_effective_date,
        }
    }

    /// Write a field by its identifier.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::CompanyName => self.set_company_name(value),
            ProfileField::CompanyAbbreviation => self.set_company_abbreviation(value),
            ProfileField::CompanyAddress => self.set_company_address(value),
            ProfileField::TopManagementName => self.set_top_management_name(value),
            ProfileField::TopManagementTitle => self.set_top_management_title(value),
            ProfileField::QmsRepresentativeName => self.set_qms_representative_name(value),
            ProfileField::QmsRepresentativeTitle => self.set_qms_representative_title(value),
            ProfileField::DocumentEffectiveDate => self.set_document_effective_date(value),
        }
    }

    /// Copy every non-empty field of `other` over this profile.
    pub fn merge_from(&mut self, other: &Self) {
        for field in ProfileField::ALL {
            let value = other.get(field);
            if !value.is_empty() {
                self.set(field, value);
            }
        }
    }

    /// Required fields that are still blank.
    pub fn missing_required(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }
}

/// Identifies one editable profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    CompanyName,
    CompanyAbbreviation,
    CompanyAddress,
    TopManagementName,
    TopManagementTitle,
    QmsRepresentativeName,
    QmsRepresentativeTitle,
    DocumentEffectiveDate,
}

impl ProfileField {
    /// All fields in form order.
    pub const ALL: [Self; 8] = [
        Self::CompanyName,
        Self::CompanyAbbreviation,
        Self::CompanyAddress,
        Self::TopManagementName,
        Self::TopManagementTitle,
        Self::QmsRepresentativeName,
        Self::QmsRepresentativeTitle,
        Self::DocumentEffectiveDate,
    ];

    /// Form label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company Full Legal Name",
            Self::CompanyAbbreviation => "Company Abbreviation (Optional)",
            Self::CompanyAddress => "Company Full Address",
            Self::TopManagementName => "Top Management Full Name",
            Self::TopManagementTitle => "Top Management Title",
            Self::QmsRepresentativeName => "QMS Representative Full Name (Optional)",
            Self::QmsRepresentativeTitle => "QMS Representative Title (Optional)",
            Self::DocumentEffectiveDate => "Default Document Effective Date",
        }
    }

    /// Example value shown while the field is empty.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::CompanyName => "e.g., Acme Innovations Ltd.",
            Self::CompanyAbbreviation => "e.g., AIL",
            Self::CompanyAddress => "e.g., 123 Innovation Drive, Tech City, TX 75001, USA",
            Self::TopManagementName => "e.g., Dr. Jane Doe",
            Self::TopManagementTitle => "e.g., CEO / Managing Director",
            Self::QmsRepresentativeName => "e.g., John Smith",
            Self::QmsRepresentativeTitle => "e.g., Quality Manager",
            Self::DocumentEffectiveDate => "e.g., YYYY-MM-DD or 'To be determined'",
        }
    }

    /// Whether the profile form insists on a value.
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Self::CompanyName
                | Self::CompanyAddress
                | Self::TopManagementName
                | Self::TopManagementTitle
        )
    }

    /// Whether the field takes multi-line input.
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::CompanyAddress)
    }
}
