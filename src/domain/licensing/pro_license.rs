//! Pro license grant written to a profile after a completed checkout.

use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

/// Length of a purchased license, in calendar years.
pub const LICENSE_TERM_YEARS: u32 = 1;

/// Fields set on the matching profile record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProLicense {
    pub is_pro: bool,
    pub license_expiry: Timestamp,
}

impl ProLicense {
    /// Grants a license running one calendar year from `processed_at`.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InternalError` if the expiry falls outside the
    /// representable date range.
    pub fn granted_at(processed_at: Timestamp) -> Result<Self, DomainError> {
        let license_expiry = processed_at.plus_years(LICENSE_TERM_YEARS).ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "license expiry out of range")
                .with_detail("processed_at", processed_at.to_string())
        })?;

        Ok(Self {
            is_pro: true,
            license_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Datelike, Utc};

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn grant_sets_pro_flag() {
        let license = ProLicense::granted_at(at("2025-05-01T09:00:00Z")).unwrap();
        assert!(license.is_pro);
    }

    #[test]
    fn grant_expires_one_calendar_year_later() {
        let processed_at = at("2025-05-01T09:00:00Z");

        let license = ProLicense::granted_at(processed_at).unwrap();

        assert_eq!(license.license_expiry, at("2026-05-01T09:00:00Z"));
        assert_eq!(
            license.license_expiry.as_datetime().year(),
            processed_at.as_datetime().year() + 1
        );
    }

    #[test]
    fn grant_on_leap_day_expires_march_1() {
        let license = ProLicense::granted_at(at("2028-02-29T23:59:59Z")).unwrap();

        assert_eq!(license.license_expiry, at("2029-03-01T23:59:59Z"));
    }

    #[test]
    fn grant_at_end_of_time_fails() {
        let result = ProLicense::granted_at(Timestamp::from_datetime(DateTime::<Utc>::MAX_UTC));

        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalError);
    }

    #[test]
    fn grant_serializes_as_profile_columns() {
        let license = ProLicense::granted_at(at("2025-05-01T09:00:00Z")).unwrap();

        let json = serde_json::to_value(license).unwrap();

        assert_eq!(json["is_pro"], true);
        assert!(json["license_expiry"]
            .as_str()
            .unwrap()
            .starts_with("2026-05-01T09:00:00"));
    }
}
