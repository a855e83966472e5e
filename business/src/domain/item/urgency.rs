use chrono::{DateTime, Duration, Utc};

/// Urgency levels for item expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyLevel {
    /// No expiration recorded.
    Unknown,
    /// Expires in more than five days.
    Fresh,
    /// Expires within five days.
    UseThisWeek,
    /// Expires within two days.
    UseSoon,
    /// Already expired.
    Expired,
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrgencyLevel::Unknown => write!(f, "unknown"),
            UrgencyLevel::Fresh => write!(f, "fresh"),
            UrgencyLevel::UseThisWeek => write!(f, "use_this_week"),
            UrgencyLevel::UseSoon => write!(f, "use_soon"),
            UrgencyLevel::Expired => write!(f, "expired"),
        }
    }
}

const USE_SOON_DAYS: i64 = 2;
const USE_THIS_WEEK_DAYS: i64 = 5;

/// Determines the urgency of an expiration relative to `now`.
///
/// Business rules:
/// - No date -> Unknown
/// - In the past -> Expired
/// - Within 2 days -> UseSoon
/// - Within 5 days -> UseThisWeek
/// - Later -> Fresh
pub fn get_urgency_level(expiration: Option<DateTime<Utc>>, now: DateTime<Utc>) -> UrgencyLevel {
    let Some(expiration) = expiration else {
        return UrgencyLevel::Unknown;
    };

    let remaining = expiration - now;
    if remaining < Duration::zero() {
        return UrgencyLevel::Expired;
    }

    if remaining <= Duration::days(USE_SOON_DAYS) {
        UrgencyLevel::UseSoon
    } else if remaining <= Duration::days(USE_THIS_WEEK_DAYS) {
        UrgencyLevel::UseThisWeek
    } else {
        UrgencyLevel::Fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_unknown_without_date() {
        assert_eq!(get_urgency_level(None, Utc::now()), UrgencyLevel::Unknown);
    }

    #[test]
    fn should_be_expired_when_date_passed() {
        let now = Utc::now();
        let date = Some(now - Duration::hours(1));
        assert_eq!(get_urgency_level(date, now), UrgencyLevel::Expired);
    }

    #[test]
    fn should_classify_by_remaining_days() {
        let now = Utc::now();
        assert_eq!(
            get_urgency_level(Some(now + Duration::days(1)), now),
            UrgencyLevel::UseSoon
        );
        assert_eq!(
            get_urgency_level(Some(now + Duration::days(4)), now),
            UrgencyLevel::UseThisWeek
        );
        assert_eq!(
            get_urgency_level(Some(now + Duration::days(10)), now),
            UrgencyLevel::Fresh
        );
    }

    #[test]
    fn should_not_round_partial_hours_down_at_thresholds() {
        let now = Utc::now();
        assert_eq!(
            get_urgency_level(Some(now + Duration::days(2)), now),
            UrgencyLevel::UseSoon
        );
        assert_eq!(
            get_urgency_level(Some(now + Duration::hours(48) + Duration::minutes(59)), now),
            UrgencyLevel::UseThisWeek
        );
        assert_eq!(
            get_urgency_level(Some(now + Duration::days(5)), now),
            UrgencyLevel::UseThisWeek
        );
        assert_eq!(
            get_urgency_level(Some(now + Duration::hours(120) + Duration::seconds(1)), now),
            UrgencyLevel::Fresh
        );
    }
}
