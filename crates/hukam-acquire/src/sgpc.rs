use crate::normalize;
use crate::output;
use crate::types::{AcquiredHukamnama, RawHukamnama, SourceInfo};
use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use thiserror::Error;

/// The daily hukamnama page published by the SGPC.
pub const HUKAMNAMA_URL: &str = "https://hs.sgpc.net/";

/// Bound on the whole fetch, matching the page's occasional slowness.
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Failure acquiring the hukamnama page.
///
/// Callers surface any variant as a single opaque "Hukamnama unavailable"
/// failure; no partial transcript is ever built from a failed fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0} from hukamnama page")]
    Status(reqwest::StatusCode),

    #[error("page missing expected content: {0}")]
    MissingContent(&'static str),
}

/// Acquire the daily hukamnama and write acquisition files.
///
/// Fetches the page, caches the raw HTML, extracts the raw bilingual
/// fields, and writes structured JSON + plain text + source.md via the
/// shared output helper.
pub async fn acquire(url: &str, output_dir: &str) -> Result<()> {
    tracing::info!(url = %url, "Fetching hukamnama page");
    let html = fetch_page(url).await.context("Hukamnama unavailable")?;
    tracing::info!(bytes = html.len(), "Received HTML");

    output::cache_html(output_dir, "raw.html", &html)?;

    let raw = extract_fields(&html).context("Hukamnama unavailable")?;
    tracing::info!(
        title = %raw.title,
        gurmukhi_bytes = raw.gurmukhi_raw.len(),
        english_bytes = raw.english_raw.len(),
        "Extracted raw fields"
    );

    let acquired = AcquiredHukamnama {
        source: SourceInfo {
            url: url.to_string(),
            site: "hs.sgpc.net".to_string(),
            fetched_at: chrono::Utc::now().to_rfc3339(),
        },
        raw,
    };

    output::write_acquired(&acquired, output_dir)?;

    Ok(())
}

/// Fetch the rendered page text.
///
/// The HTTP client lives only for this call; nothing is retained
/// between fetches.
async fn fetch_page(url: &str) -> Result<String, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent("hukam/0.1 (hukamnama transcript tool)")
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(response.text().await?)
}

/// Extract the five raw fields from the rendered page.
///
/// Layout: `.fs-5.customDate` holds the date header; the first
/// `.hukamnama-card` (older pages use `.hukamnama-card2`) is the Gurmukhi
/// card, with `.hukamnama-title`, `.hukamnama-text`, and the ang in its
/// last `.customDate`. The English card is found by its title text.
pub fn extract_fields(html: &str) -> Result<RawHukamnama, FetchError> {
    let document = Html::parse_document(html);

    let date_sel = Selector::parse(".fs-5.customDate").expect("valid selector");
    let card_sel = Selector::parse(".hukamnama-card").expect("valid selector");
    let card2_sel = Selector::parse(".hukamnama-card2").expect("valid selector");
    let any_card_sel =
        Selector::parse(".hukamnama-card, .hukamnama-card2").expect("valid selector");
    let title_sel = Selector::parse(".hukamnama-title").expect("valid selector");
    let text_sel = Selector::parse(".hukamnama-text").expect("valid selector");
    let ang_sel = Selector::parse(".customDate").expect("valid selector");

    let date_text = document
        .select(&date_sel)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let gurmukhi_card = document
        .select(&card_sel)
        .next()
        .or_else(|| document.select(&card2_sel).next())
        .ok_or(FetchError::MissingContent("hukamnama card"))?;

    let title = gurmukhi_card
        .select(&title_sel)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let gurmukhi_raw = gurmukhi_card
        .select(&text_sel)
        .next()
        .map(element_text)
        .ok_or(FetchError::MissingContent("gurmukhi text"))?;

    let ang_text = gurmukhi_card
        .select(&ang_sel)
        .last()
        .map(element_text)
        .unwrap_or_default();

    // The English card is identified by its title, not its position
    let mut english_raw = String::new();
    for card in document.select(&any_card_sel) {
        let card_title = card
            .select(&title_sel)
            .next()
            .map(element_text)
            .unwrap_or_default();
        if card_title.to_lowercase().contains("english translation") {
            if let Some(text) = card.select(&text_sel).next() {
                english_raw = element_text(text);
            }
        }
    }
    if english_raw.is_empty() {
        tracing::warn!("No English translation card found; transcript will be untranslated");
    }

    Ok(RawHukamnama {
        title,
        date_text,
        ang_text,
        gurmukhi_raw,
        english_raw,
    })
}

/// Collect an element's text content, NFC-normalized and trimmed.
fn element_text(element: ElementRef) -> String {
    let text: String = element.text().collect();
    normalize::normalize_text(&text)
}
