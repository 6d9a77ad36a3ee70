//! Registry host normalization

/// Key under which Docker Hub credentials are stored
pub const DOCKER_HUB_AUTH_KEY: &str = "https://index.docker.io/v1/";

/// Map a registry host to the key its credentials are stored under.
///
/// Docker Hub is known by several names but its credentials always live
/// under the legacy index URL. Other hosts are returned unchanged.
pub fn resolve_registry_host(host: &str) -> &str {
    match host {
        "index.docker.io" | "docker.io" | "registry-1.docker.io" => DOCKER_HUB_AUTH_KEY,
        _ => host,
    }
}
