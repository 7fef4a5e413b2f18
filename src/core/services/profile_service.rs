use crate::business::{Business, BusinessProfile};
use crate::errors::{BookingError, BookingResult};

pub struct ProfileService;

impl ProfileService {
    /// Replaces the business profile wholesale. Forms always submit a
    /// complete profile; there is no field-level merge.
    pub fn replace(business: &mut Business, profile: BusinessProfile) -> BookingResult<()> {
        if profile.name.trim().is_empty() {
            return Err(BookingError::invalid("business name must not be empty"));
        }
        business.profile = profile;
        business.touch();
        Ok(())
    }
}
