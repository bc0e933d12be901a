use web_sys::window;

pub fn get_api_base_url() -> String {
    // Use the deployed origin when the app is served next to its backend,
    // so the game works from whatever host it was opened on
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if !host.contains("127.0.0.1") && !host.contains("localhost") {
                let protocol = window
                    .location()
                    .protocol()
                    .unwrap_or_else(|_| "https:".to_string());
                return format!("{}//{}", protocol, host);
            }
        }
    }

    // Default to 127.0.0.1 for development
    "http://127.0.0.1:3000".to_string()
}
