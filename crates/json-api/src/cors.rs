//! Cross-origin access for the admin frontend.

use salvo::{
    cors::{AllowOrigin, Cors, CorsHandler},
    http::{HeaderValue, Method},
};
use thiserror::Error;

use crate::config::cors::CorsConfig;

#[derive(Debug, Error)]
pub(crate) enum CorsConfigError {
    #[error("FRONTEND_URL {0:?} is not a valid origin")]
    InvalidOrigin(String),
}

/// Build the CORS hoop allowing only the configured frontend origin.
///
/// Returns `None` when no frontend origin is configured, in which case
/// browsers receive no CORS headers and cross-origin calls fail.
pub(crate) fn cors_handler(config: &CorsConfig) -> Result<Option<CorsHandler>, CorsConfigError> {
    let Some(origin) = config.frontend_url.as_deref() else {
        return Ok(None);
    };

    let allowed = match HeaderValue::from_str(origin) {
        Ok(allowed) if !origin.is_empty() => allowed,
        _ => return Err(CorsConfigError::InvalidOrigin(origin.to_string())),
    };

    // Only a request whose Origin is in the list gets it echoed back.
    let cors = Cors::new()
        .allow_origin(AllowOrigin::list([allowed]))
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers("content-type")
        .into_handler();

    Ok(Some(cors))
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};
    use testresult::TestResult;

    use super::*;

    const FRONTEND: &str = "http://localhost:5173";

    #[handler]
    async fn ok() -> &'static str {
        "ok"
    }

    fn config(frontend_url: Option<&str>) -> CorsConfig {
        CorsConfig {
            frontend_url: frontend_url.map(ToString::to_string),
        }
    }

    #[test]
    fn no_frontend_url_disables_cors() -> TestResult {
        assert!(cors_handler(&config(None))?.is_none(), "no handler expected");

        Ok(())
    }

    #[test]
    fn malformed_frontend_url_is_rejected() {
        let result = cors_handler(&config(Some("http://bad\norigin")));

        assert!(
            matches!(result, Err(CorsConfigError::InvalidOrigin(_))),
            "expected an invalid origin error"
        );
    }

    #[tokio::test]
    async fn allowed_origin_receives_cors_header() -> TestResult {
        let cors = cors_handler(&config(Some(FRONTEND)))?.ok_or("cors handler missing")?;
        let service = Service::new(Router::with_path("api").get(ok)).hoop(cors);

        let res = TestClient::get("http://example.com/api")
            .add_header("origin", FRONTEND, true)
            .send(&service)
            .await;

        let allowed = res
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok());

        assert_eq!(allowed, Some(FRONTEND));

        Ok(())
    }

    #[tokio::test]
    async fn other_origin_receives_no_cors_header() -> TestResult {
        let cors = cors_handler(&config(Some(FRONTEND)))?.ok_or("cors handler missing")?;
        let service = Service::new(Router::with_path("api").get(ok)).hoop(cors);

        let res = TestClient::get("http://example.com/api")
            .add_header("origin", "http://evil.example", true)
            .send(&service)
            .await;

        assert!(
            res.headers().get("access-control-allow-origin").is_none(),
            "foreign origins must not be allowed"
        );

        Ok(())
    }
}
