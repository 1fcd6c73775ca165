//! Garde validation utilities.

use crate::domain::DomainError;
use garde::{Report, Validate};

/// Validate a request or change set. Failures become a single
/// `ValidationError` listing each offending field once.
pub fn validate<T>(value: &T) -> Result<(), DomainError>
where
    T: Validate,
    T::Context: Default,
{
    value
        .validate()
        .map_err(|report| DomainError::ValidationError(describe_report(&report)))
}

/// Group messages by field path, keeping the order garde reported them in.
fn describe_report(report: &Report) -> String {
    let mut fields: Vec<(String, Vec<&str>)> = Vec::new();
    for (path, error) in report.iter() {
        let field = path.to_string();
        match fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(error.message()),
            None => fields.push((field, vec![error.message()])),
        }
    }

    fields
        .into_iter()
        .map(|(field, messages)| {
            let messages = messages.join(" and ");
            if field.is_empty() {
                messages
            } else {
                format!("{field}: {messages}")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
