use url::form_urlencoded::byte_serialize;

pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1/";

/// Ensures the base URL ends in exactly one `/` so paths can be appended.
pub fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}

/// Builds a search URL for `term`. Parameter order is fixed: query, per_page, page.
pub fn form_url(base_url: &str, term: &str, per_page: u32, page: u32) -> String {
    let query: String = byte_serialize(term.as_bytes()).collect();
    format!(
        "{}search?query={}&per_page={}&page={}",
        base_url, query, per_page, page
    )
}

pub fn form_curated_url(base_url: &str, per_page: u32, page: u32) -> String {
    format!("{}curated?per_page={}&page={}", base_url, per_page, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_url_matches_template() {
        assert_eq!(
            form_url(DEFAULT_BASE_URL, "beach", 20, 1),
            "https://api.pexels.com/v1/search?query=beach&per_page=20&page=1"
        );
        assert_eq!(
            form_url(DEFAULT_BASE_URL, "wedding", 15, 3),
            "https://api.pexels.com/v1/search?query=wedding&per_page=15&page=3"
        );
    }

    #[test]
    fn test_form_url_encodes_term() {
        assert_eq!(
            form_url(DEFAULT_BASE_URL, "red car&x=1", 5, 1),
            "https://api.pexels.com/v1/search?query=red+car%26x%3D1&per_page=5&page=1"
        );
    }

    #[test]
    fn test_form_curated_url() {
        assert_eq!(
            form_curated_url(DEFAULT_BASE_URL, 20, 1),
            "https://api.pexels.com/v1/curated?per_page=20&page=1"
        );
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://localhost:8080/v1"), "http://localhost:8080/v1/");
        assert_eq!(normalize_base_url("http://localhost:8080/v1//"), "http://localhost:8080/v1/");
        assert_eq!(normalize_base_url(DEFAULT_BASE_URL), DEFAULT_BASE_URL);
    }
}
