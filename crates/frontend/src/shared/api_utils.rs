//! API utilities for frontend-backend communication

/// Port the backend binds by default (see the workspace config.toml).
const BACKEND_DEV_PORT: &str = "3000";
/// Port `trunk serve` uses for the standalone dev server.
const TRUNK_DEV_PORT: &str = "8080";

/// Get the base URL for API requests.
///
/// When the page is served by the backend itself (`static_dir`), the API
/// lives on the same origin, whatever port that is. Under `trunk serve`
/// the page runs on the dev-server port and requests target the backend's
/// default port instead.
///
/// Returns an empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = location.port().unwrap_or_default();
    base_for(&protocol, &hostname, &port)
}

fn base_for(protocol: &str, hostname: &str, port: &str) -> String {
    if port == TRUNK_DEV_PORT {
        format!("{}//{}:{}", protocol, hostname, BACKEND_DEV_PORT)
    } else if port.is_empty() {
        format!("{}//{}", protocol, hostname)
    } else {
        format!("{}//{}:{}", protocol, hostname, port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_origin_port_is_kept() {
        assert_eq!(
            base_for("http:", "10.0.0.5", "8443"),
            "http://10.0.0.5:8443"
        );
    }

    #[test]
    fn trunk_dev_server_targets_backend_port() {
        assert_eq!(
            base_for("http:", "127.0.0.1", "8080"),
            "http://127.0.0.1:3000"
        );
    }

    #[test]
    fn default_port_has_no_suffix() {
        assert_eq!(base_for("https:", "vacations.local", ""), "https://vacations.local");
    }
}
