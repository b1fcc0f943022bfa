//! HTTP status handling for feed responses.

use crate::error::FeedError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`FeedError::RateLimited`], reading
///   `Retry-After` (60 s when absent or unparseable). The demo API key hits
///   this quickly.
/// - **Non-success status** → [`FeedError::Api`] with status code and body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FeedError> {
    if resp.status() == 429 {
        return Err(FeedError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(FeedError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, retry_after: Option<&str>, body: &'static str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(value) = retry_after {
            builder = builder.header("Retry-After", value);
        }
        reqwest::Response::from(builder.body(body).unwrap())
    }

    #[tokio::test]
    async fn rate_limit_reads_retry_after() {
        let err = check_response(response(429, Some("3600"), ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FeedError::RateLimited {
                retry_after_secs: 3600
            }
        ));
    }

    #[tokio::test]
    async fn rate_limit_defaults_to_sixty_seconds() {
        let err = check_response(response(429, Some("soon"), ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FeedError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn server_error_keeps_body() {
        let err = check_response(response(503, None, "upstream down"))
            .await
            .unwrap_err();
        match err {
            FeedError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(response(200, None, "{}")).await.is_ok());
    }
}
