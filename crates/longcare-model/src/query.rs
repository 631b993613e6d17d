/// Combined filter criteria.
///
/// Each criterion is skipped when it is `None` or an empty string, so the
/// default query matches every facility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityQuery {
    /// Exact type code.
    pub kind: Option<String>,
    /// Substring of the address.
    pub region: Option<String>,
    /// Exact service name.
    pub service: Option<String>,
}

impl FacilityQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn type_criterion(&self) -> Option<&str> {
        non_empty(self.kind.as_deref())
    }

    pub fn region_criterion(&self) -> Option<&str> {
        non_empty(self.region.as_deref())
    }

    pub fn service_criterion(&self) -> Option<&str> {
        non_empty(self.service.as_deref())
    }

    /// Returns true when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.type_criterion().is_none()
            && self.region_criterion().is_none()
            && self.service_criterion().is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
