//! Path helpers shared by the router and the transition host.

/// Catalog / landing page.
pub const HOME_PATH: &str = "/";

/// Path of the detail view for a catalog id.
pub fn model_path(id: &str) -> String {
    format!("/modelo/{id}")
}

/// Link to a section of the landing page.
pub fn section_href(anchor: &str) -> String {
    format!("{HOME_PATH}#{anchor}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_path() {
        assert_eq!(model_path("pono"), "/modelo/pono");
    }

    #[test]
    fn test_section_href() {
        assert_eq!(section_href("modelos"), "/#modelos");
    }
}
