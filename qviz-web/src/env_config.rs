//! Environment configuration for the server binary.

/// Read `QVIZ_PORT` (default 8080).
pub fn server_port() -> u16 {
    std::env::var("QVIZ_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        std::env::remove_var("QVIZ_PORT");
        assert_eq!(server_port(), 8080);
    }
}
