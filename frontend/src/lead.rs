use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Phone,
    Address,
}

impl LeadField {
    pub fn label(self) -> &'static str {
        match self {
            LeadField::Name => "Имя",
            LeadField::Phone => "Телефон",
            LeadField::Address => "Адрес подключения",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadError {
    #[error("required fields are empty: {0:?}")]
    MissingFields(Vec<LeadField>),
}

/// A connection request as typed into the lead form. Nothing is sent anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub comment: Option<String>,
    /// Tariff the visitor clicked "Подключить" on, if any.
    pub tariff: Option<String>,
}

impl Lead {
    pub fn missing_fields(&self) -> Vec<LeadField> {
        [
            (LeadField::Name, &self.name),
            (LeadField::Phone, &self.phone),
            (LeadField::Address, &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Accepts the lead when every required field is filled.
    pub fn submit(self) -> Result<Lead, LeadError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(LeadError::MissingFields(missing));
        }
        Ok(Lead {
            comment: self.comment.filter(|c| !c.trim().is_empty()),
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Lead {
        Lead {
            name: "Иван Иванов".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            address: "г. Москва, ул. Ленина, д. 1, кв. 1".to_string(),
            comment: None,
            tariff: None,
        }
    }

    #[test]
    fn test_complete_lead_is_accepted() {
        let lead = complete().submit().unwrap();
        assert_eq!(lead.name, "Иван Иванов");
    }

    #[test]
    fn test_missing_fields_are_reported_in_form_order() {
        let lead = Lead {
            name: "  ".to_string(),
            address: String::new(),
            ..complete()
        };
        assert_eq!(
            lead.submit(),
            Err(LeadError::MissingFields(vec![LeadField::Name, LeadField::Address]))
        );
    }

    #[test]
    fn test_blank_comment_is_dropped() {
        let lead = Lead {
            comment: Some("   ".to_string()),
            ..complete()
        };
        assert_eq!(lead.submit().unwrap().comment, None);

        let lead = Lead {
            comment: Some("после 18:00".to_string()),
            tariff: Some("2".to_string()),
            ..complete()
        };
        let accepted = lead.submit().unwrap();
        assert_eq!(accepted.comment.as_deref(), Some("после 18:00"));
        assert_eq!(accepted.tariff.as_deref(), Some("2"));
    }
}
