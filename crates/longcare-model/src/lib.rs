pub mod error;
pub mod facility;
pub mod facility_type;
pub mod query;
pub mod raw;

pub use error::{LongcareError, Result};
pub use facility::{Facility, Location, Service};
pub use facility_type::{FacilityType, GENERIC_TYPE_LABEL, label_for_code};
pub use query::FacilityQuery;
pub use raw::RawRecord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_use_generic_label() {
        assert_eq!(label_for_code("A1"), "老人養護中心");
        assert_eq!(label_for_code("ZZ"), GENERIC_TYPE_LABEL);
        assert_eq!(label_for_code(""), GENERIC_TYPE_LABEL);
    }

    #[test]
    fn blank_criteria_are_inactive() {
        let query = FacilityQuery::new().with_type("").with_region("台北市");
        assert_eq!(query.type_criterion(), None);
        assert_eq!(query.region_criterion(), Some("台北市"));
        assert!(!query.is_empty());
        assert!(FacilityQuery::default().is_empty());
    }
}
