//! Contact form ("get started") request.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("restaurant name is required")]
    MissingRestaurantName,
    #[error("phone number is required")]
    MissingPhone,
}

impl ContactError {
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::MissingRestaurantName => "contact.errors.restaurantRequired",
            Self::MissingPhone => "contact.errors.phoneRequired",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub restaurant_name: String,
    pub phone: String,
}

impl ContactRequest {
    /// Check required fields. Nothing is sent anywhere; the caller shows a
    /// confirmation and resets the form.
    ///
    /// # Errors
    ///
    /// Returns the first empty required field.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.restaurant_name.trim().is_empty() {
            return Err(ContactError::MissingRestaurantName);
        }
        if self.phone.trim().is_empty() {
            return Err(ContactError::MissingPhone);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let mut request = ContactRequest::default();
        assert_eq!(request.validate(), Err(ContactError::MissingRestaurantName));
        request.restaurant_name = "Bistro".into();
        assert_eq!(request.validate(), Err(ContactError::MissingPhone));
        request.phone = "0100".into();
        assert!(request.validate().is_ok());
    }
}
