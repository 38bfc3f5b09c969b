// src/shared/validation.rs

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{0}")]
    Invalid(String),
}

/// Collects every missing required field before failing, so the client
/// sees all of them in one response.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absent, empty and whitespace-only text all count as missing.
    pub fn text(mut self, name: &'static str, value: Option<&str>) -> Self {
        if value.map(is_blank).unwrap_or(true) {
            self.missing.push(name);
        }
        self
    }

    pub fn present<T>(mut self, name: &'static str, value: Option<&T>) -> Self {
        if value.is_none() {
            self.missing.push(name);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(self.missing))
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Merge rule for required text: blank input keeps the stored value.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_blank(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_every_missing_field_in_order() {
        let err = RequiredFields::new()
            .text("name", None)
            .text("turnaround", Some("   "))
            .present::<f64>("priceUSD", None)
            .text("ok", Some("x"))
            .finish()
            .unwrap_err();

        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["name", "turnaround", "priceUSD"])
        );
        assert_eq!(
            err.to_string(),
            "Missing required fields: name, turnaround, priceUSD"
        );
    }

    #[test]
    fn passes_when_everything_is_present() {
        assert!(RequiredFields::new()
            .text("name", Some("Starter"))
            .present("price", Some(&499.0))
            .finish()
            .is_ok());
    }

    #[test]
    fn non_blank_drops_whitespace_only_values() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("Title".into())), Some("Title".into()));
    }
}
