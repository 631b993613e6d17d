//! Translation of user-facing filter flags into a [`FacilityQuery`].

use longcare_model::{FacilityQuery, FacilityType};

/// Resolves a `--type` value to a type code.
///
/// Accepts a code (`A1`) or a display label (`老人養護中心`). Blank values
/// yield `None`. Anything else, the generic label included, is passed
/// through unchanged; the generic label then selects codes outside the table.
pub fn resolve_type(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let code = FacilityType::from_label(trimmed).map_or(trimmed, |kind| kind.code());
    Some(code.to_string())
}

/// Builds a query from optional flag values.
pub fn build_query(kind: Option<&str>, region: Option<&str>, service: Option<&str>) -> FacilityQuery {
    FacilityQuery {
        kind: kind.and_then(resolve_type),
        region: region.map(str::to_string),
        service: service.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_to_codes() {
        assert_eq!(resolve_type("護理之家").as_deref(), Some("A3"));
        assert_eq!(resolve_type("A3").as_deref(), Some("A3"));
        assert_eq!(resolve_type("X9").as_deref(), Some("X9"));
    }

    #[test]
    fn generic_label_is_kept_as_a_criterion() {
        assert_eq!(resolve_type(" 長照機構 ").as_deref(), Some("長照機構"));
        assert_eq!(resolve_type("  "), None);
        let query = build_query(Some("長照機構"), None, None);
        assert_eq!(query.type_criterion(), Some("長照機構"));
    }
}
