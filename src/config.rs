/// Base prefix for static assets. Trunk serves from the site root by
/// default; deployments under a subpath set ASSET_BASE_URL at build time.
pub const BASE_URL: &str = match option_env!("ASSET_BASE_URL") {
    Some(base) => base,
    None => "/",
};

/// Resolve a relative asset path against the configured base prefix.
pub fn asset_url(path: &str) -> String {
    format!(
        "{}/{}",
        BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::asset_url;

    #[test]
    fn joins_without_duplicate_slashes() {
        assert_eq!(asset_url("intro.jpg"), "/intro.jpg");
        assert_eq!(asset_url("/intro.jpg"), "/intro.jpg");
        assert_eq!(asset_url("galeria/1.jpg"), "/galeria/1.jpg");
    }
}
