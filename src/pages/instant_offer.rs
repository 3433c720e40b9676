//! Instant offer page: a request form for a royalty catalog valuation.
//!
//! There is no backend behind the form. A valid submission is logged locally
//! and handed back to the caller.

use crate::content::{
    AnnualIncome, CatalogSize, IncomeConsistency, InstantOfferContent, OptionLabel, RoyaltyType,
    YearsActive,
};
use crate::pages::RenderContext;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::info;

// ==================== Form ====================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Raw form state, as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstantOfferForm {
    pub royalty_type: String,
    pub artist_name: String,
    pub catalog_size: String,
    pub annual_income: String,
    pub income_consistency: String,
    pub years_active: String,
    pub contact_info: ContactInfo,
    pub consent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfferField {
    RoyaltyType,
    ArtistName,
    CatalogSize,
    AnnualIncome,
    IncomeConsistency,
    YearsActive,
    FullName,
    Email,
    Phone,
    Consent,
}

impl OfferField {
    /// Field name as used in the form and the content bundle.
    pub fn name(self) -> &'static str {
        match self {
            OfferField::RoyaltyType => "royaltyType",
            OfferField::ArtistName => "artistName",
            OfferField::CatalogSize => "catalogSize",
            OfferField::AnnualIncome => "annualIncome",
            OfferField::IncomeConsistency => "incomeConsistency",
            OfferField::YearsActive => "yearsActive",
            OfferField::FullName => "fullName",
            OfferField::Email => "email",
            OfferField::Phone => "phone",
            OfferField::Consent => "consent",
        }
    }
}

impl fmt::Display for OfferField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(OfferField),

    #[error("{field} has no option {value:?}")]
    UnknownOption { field: OfferField, value: String },

    #[error("email address {0:?} is invalid")]
    InvalidEmail(String),

    #[error("consent must be given")]
    ConsentMissing,
}

impl FieldError {
    pub fn field(&self) -> OfferField {
        match self {
            FieldError::Required(field) => *field,
            FieldError::UnknownOption { field, .. } => *field,
            FieldError::InvalidEmail(_) => OfferField::Email,
            FieldError::ConsentMissing => OfferField::Consent,
        }
    }
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSubmission {
    pub royalty_type: RoyaltyType,
    pub artist_name: String,
    pub catalog_size: CatalogSize,
    pub annual_income: AnnualIncome,
    pub income_consistency: IncomeConsistency,
    pub years_active: YearsActive,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferReceipt {
    pub submission: OfferSubmission,
    pub received_at: DateTime<Utc>,
}

fn select<T>(
    field: OfferField,
    raw: &str,
    parse: fn(&str) -> Option<T>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(FieldError::Required(field));
        return None;
    }
    let parsed = parse(raw);
    if parsed.is_none() {
        errors.push(FieldError::UnknownOption {
            field,
            value: raw.to_string(),
        });
    }
    parsed
}

fn required(field: OfferField, raw: &str, errors: &mut Vec<FieldError>) -> String {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(FieldError::Required(field));
    }
    value.to_string()
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

impl InstantOfferForm {
    /// Check every field, reporting all problems in field order.
    pub fn validate(&self) -> Result<OfferSubmission, Vec<FieldError>> {
        let mut errors = Vec::new();

        let royalty_type = select(
            OfferField::RoyaltyType,
            &self.royalty_type,
            RoyaltyType::from_value,
            &mut errors,
        );
        let artist_name = required(OfferField::ArtistName, &self.artist_name, &mut errors);
        let catalog_size = select(
            OfferField::CatalogSize,
            &self.catalog_size,
            CatalogSize::from_value,
            &mut errors,
        );
        let annual_income = select(
            OfferField::AnnualIncome,
            &self.annual_income,
            AnnualIncome::from_value,
            &mut errors,
        );
        let income_consistency = select(
            OfferField::IncomeConsistency,
            &self.income_consistency,
            IncomeConsistency::from_value,
            &mut errors,
        );
        let years_active = select(
            OfferField::YearsActive,
            &self.years_active,
            YearsActive::from_value,
            &mut errors,
        );

        let contact = &self.contact_info;
        let name = required(OfferField::FullName, &contact.name, &mut errors);
        let email = required(OfferField::Email, &contact.email, &mut errors);
        if !email.is_empty() && !is_valid_email(&email) {
            errors.push(FieldError::InvalidEmail(email.clone()));
        }
        let phone = required(OfferField::Phone, &contact.phone, &mut errors);

        if !self.consent {
            errors.push(FieldError::ConsentMissing);
        }

        match (royalty_type, catalog_size, annual_income, income_consistency, years_active) {
            (
                Some(royalty_type),
                Some(catalog_size),
                Some(annual_income),
                Some(income_consistency),
                Some(years_active),
            ) if errors.is_empty() => Ok(OfferSubmission {
                royalty_type,
                artist_name,
                catalog_size,
                annual_income,
                income_consistency,
                years_active,
                contact_info: ContactInfo { name, email, phone },
            }),
            _ => Err(errors),
        }
    }

    /// Validate and record the request. Nothing leaves the process.
    pub fn submit(&self) -> Result<OfferReceipt, Vec<FieldError>> {
        let submission = self.validate()?;
        let received_at = Utc::now();

        info!(
            royalty_type = submission.royalty_type.value(),
            catalog_size = submission.catalog_size.value(),
            annual_income = submission.annual_income.value(),
            income_consistency = submission.income_consistency.value(),
            years_active = submission.years_active.value(),
            received_at = %received_at.to_rfc3339(),
            "Instant offer request received"
        );

        Ok(OfferReceipt {
            submission,
            received_at,
        })
    }
}

// ==================== View ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstantOfferView {
    pub title: String,
    pub subtitle: String,
    pub royalty_type: SelectView,
    pub artist_name: InputView,
    pub catalog_size: SelectView,
    pub annual_income: SelectView,
    pub income_consistency: SelectView,
    pub years_active: SelectView,
    pub contact_heading: String,
    pub full_name: InputView,
    pub email: InputView,
    pub phone: InputView,
    pub consent: String,
    pub submit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub name: &'static str,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectView {
    pub name: &'static str,
    pub label: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

fn input(ctx: &RenderContext<'_>, field: OfferField, label: &str) -> InputView {
    InputView {
        name: field.name(),
        label: ctx.text(label),
        placeholder: None,
    }
}

fn select_view(
    ctx: &RenderContext<'_>,
    field: OfferField,
    label: &str,
    options: &[OptionLabel],
) -> SelectView {
    SelectView {
        name: field.name(),
        label: ctx.text(label),
        options: options
            .iter()
            .map(|option| OptionView {
                value: option.value.clone(),
                label: ctx.text(&option.label),
            })
            .collect(),
    }
}

pub fn render(ctx: &RenderContext<'_>) -> InstantOfferView {
    let content: &InstantOfferContent = ctx.content();
    let form = &content.form;
    let options = &content.options;

    InstantOfferView {
        title: ctx.text(&content.hero.title),
        subtitle: ctx.text(&content.hero.subtitle),
        royalty_type: select_view(
            ctx,
            OfferField::RoyaltyType,
            &form.royalty_type,
            &options.royalty_type,
        ),
        artist_name: InputView {
            placeholder: Some(ctx.text(&form.artist_placeholder)),
            ..input(ctx, OfferField::ArtistName, &form.artist_name)
        },
        catalog_size: select_view(
            ctx,
            OfferField::CatalogSize,
            &form.catalog_size,
            &options.catalog_size,
        ),
        annual_income: select_view(
            ctx,
            OfferField::AnnualIncome,
            &form.annual_income,
            &options.annual_income,
        ),
        income_consistency: select_view(
            ctx,
            OfferField::IncomeConsistency,
            &form.income_consistency,
            &options.income_consistency,
        ),
        years_active: select_view(
            ctx,
            OfferField::YearsActive,
            &form.years_active,
            &options.years_active,
        ),
        contact_heading: ctx.text(&form.contact_heading),
        full_name: input(ctx, OfferField::FullName, &form.full_name),
        email: input(ctx, OfferField::Email, &form.email),
        phone: input(ctx, OfferField::Phone, &form.phone),
        consent: ctx.text(&form.consent),
        submit: ctx.text(&form.submit),
    }
}
