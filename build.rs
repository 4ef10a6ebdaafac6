fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-env-changed=CONTENT_BASE_URL");

    // baked into the binary by `ContentConfig::from_build_env`
    if let Ok(base_url) = std::env::var("CONTENT_BASE_URL") {
        let base_url = base_url.trim();
        if !base_url.is_empty()
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            return Err(format!("CONTENT_BASE_URL must be an http(s) URL, got {base_url:?}").into());
        }
    }
    Ok(())
}
