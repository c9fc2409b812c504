//! HTTP source for the stylesheet

use crate::core::error::{NfError, Result};

/// Anything that can produce the raw stylesheet bytes for a URL
pub trait StylesheetSource {
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP GET via reqwest.
///
/// Any response that arrives is used, whatever its status, unless
/// `fail_on_status` is set; then a non-2xx status is an error.
#[derive(Debug, Default)]
pub struct HttpSource {
    fail_on_status: bool,
}

impl HttpSource {
    pub fn new(fail_on_status: bool) -> Self {
        Self { fail_on_status }
    }
}

impl StylesheetSource for HttpSource {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("fetching {}", url);

        let fetch_err = |source: reqwest::Error| NfError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = reqwest::blocking::get(url).map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            if self.fail_on_status {
                return Err(NfError::HttpStatus {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            log::warn!("HTTP {} for {}; using the response body anyway", status, url);
        }

        let bytes = response.bytes().map_err(fetch_err)?;
        log::debug!("fetched {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}
