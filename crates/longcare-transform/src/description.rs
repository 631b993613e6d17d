use longcare_model::label_for_code;

/// Builds the one-sentence summary shown on facility cards.
///
/// The service name is interpolated as-is, so a facility without a contracted
/// service gets an empty slot rather than a placeholder.
pub fn describe(name: &str, address: &str, type_code: &str, service_name: &str) -> String {
    format!(
        "{name}是一家位於{address}的{label}，提供{service_name}等服務。",
        label = label_for_code(type_code)
    )
}
