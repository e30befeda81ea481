use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Site-level helpers over a WebDriver session.
#[derive(Debug, Clone)]
pub struct SitePage<'a> {
    driver: &'a WebDriver,
    base_url: String,
}

impl<'a> SitePage<'a> {
    pub fn new(driver: &'a WebDriver, base_url: &str) -> Self {
        Self {
            driver,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn open(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        self.driver
            .goto(&url)
            .await
            .with_context(|| format!("navigating to {url}"))?;
        Ok(())
    }

    async fn script(&self, body: &str, args: Vec<Value>) -> Result<Value> {
        let ret = self.driver.execute(body, args).await?;
        Ok(ret.json().clone())
    }

    pub async fn path(&self) -> Result<String> {
        let value = self.script("return window.location.pathname", vec![]).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Attribute of `<html>`, such as `lang` or `dir`.
    pub async fn root_attr(&self, name: &str) -> Result<Option<String>> {
        let value = self
            .script(
                "return document.documentElement.getAttribute(arguments[0])",
                vec![name.into()],
            )
            .await?;
        Ok(value.as_str().map(str::to_string))
    }

    pub async fn storage_get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .script(
                "return window.localStorage.getItem(arguments[0])",
                vec![key.into()],
            )
            .await?;
        Ok(value.as_str().map(str::to_string))
    }

    pub async fn storage_set(&self, key: &str, value: &str) -> Result<()> {
        self.script(
            "window.localStorage.setItem(arguments[0], arguments[1])",
            vec![key.into(), value.into()],
        )
        .await?;
        Ok(())
    }

    pub async fn storage_clear(&self) -> Result<()> {
        self.script("window.localStorage.clear()", vec![]).await?;
        Ok(())
    }

    pub async fn count(&self, css: &str) -> Result<usize> {
        Ok(self.driver.find_all(By::Css(css)).await?.len())
    }

    pub async fn click(&self, css: &str) -> Result<()> {
        self.driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("finding {css}"))?
            .click()
            .await?;
        Ok(())
    }

    pub async fn type_into(&self, css: &str, text: &str) -> Result<()> {
        let input = self
            .driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("finding {css}"))?;
        input.clear().await?;
        input.send_keys(text).await?;
        Ok(())
    }

    /// Poll until the location path equals `expected`.
    pub async fn wait_for_path(&self, expected: &str, timeout: Duration) -> Result<()> {
        let started = Instant::now();
        loop {
            let current = self.path().await?;
            if current.trim_end_matches('/') == expected.trim_end_matches('/') {
                return Ok(());
            }
            if started.elapsed() >= timeout {
                bail!("expected path {expected}, still at {current} after {timeout:?}");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Poll until exactly `expected` elements match `css`.
    pub async fn wait_for_count(
        &self,
        css: &str,
        expected: usize,
        timeout: Duration,
    ) -> Result<()> {
        let started = Instant::now();
        loop {
            let found = self.count(css).await?;
            if found == expected {
                return Ok(());
            }
            if started.elapsed() >= timeout {
                bail!("expected {expected} of {css}, found {found} after {timeout:?}");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Poll until `<html lang>` equals `expected`; the shell sets it once ready.
    pub async fn wait_for_lang(&self, expected: &str, timeout: Duration) -> Result<()> {
        let started = Instant::now();
        loop {
            let lang = self.root_attr("lang").await?;
            if lang.as_deref() == Some(expected) {
                return Ok(());
            }
            if started.elapsed() >= timeout {
                bail!("expected lang={expected}, found {lang:?} after {timeout:?}");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
