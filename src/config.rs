#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    ""  // Same origin in production
}

pub fn asset_url(path: &str) -> String {
    format!("{}/{}", get_asset_base(), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_with_single_slash() {
        let base = get_asset_base();
        assert_eq!(asset_url("videos/feature-1.mp4"), format!("{}/videos/feature-1.mp4", base));
        assert_eq!(asset_url("/videos/feature-1.mp4"), format!("{}/videos/feature-1.mp4", base));
    }
}
