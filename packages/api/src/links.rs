//! External links built from appointment data.

use reqwest::Url;

const MAPS_SEARCH: &str = "https://www.google.com/maps/search/";

/// Google Maps search for an address.
pub fn maps_search_url(location: &str) -> String {
    Url::parse_with_params(MAPS_SEARCH, &[("api", "1"), ("query", location)])
        .map(String::from)
        .unwrap_or_else(|_| MAPS_SEARCH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_is_encoded() {
        let url = maps_search_url("Rua A, 10 & 12");
        assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(url.contains("Rua+A%2C+10+%26+12"));
    }
}
