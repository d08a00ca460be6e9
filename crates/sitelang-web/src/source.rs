//! Dictionary source fetching `{base}/{code}.json` over HTTP.

use async_trait::async_trait;
use gloo_net::http::Request;
use sitelang_core::{
    FetchError, FetchResult, LocaleCode, LocaleDictionary, LocaleSource, SiteConfig,
};

/// Fetches dictionaries from the configured base path.
#[derive(Clone, Debug)]
pub(crate) struct HttpSource {
    config: SiteConfig,
}

impl HttpSource {
    pub(crate) fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait(?Send)]
impl LocaleSource for HttpSource {
    async fn fetch(&self, locale: LocaleCode) -> FetchResult<LocaleDictionary> {
        let url = self.config.dictionary_url(locale);
        tracing::debug!(%locale, %url, "fetching dictionary");
        let network = |err: gloo_net::Error| FetchError::Network {
            locale,
            detail: err.to_string(),
        };

        let response = Request::get(&url).send().await.map_err(network)?;
        if !response.ok() {
            return Err(FetchError::Status {
                locale,
                status: response.status(),
            });
        }
        let body = response.binary().await.map_err(network)?;
        LocaleDictionary::from_slice(locale, &body)
    }
}
