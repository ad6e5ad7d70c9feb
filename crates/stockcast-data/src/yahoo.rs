//! Yahoo Finance chart API source.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::{header, Client, StatusCode, Url};
use serde::Deserialize;
use stockcast_core::error::DataError;
use stockcast_core::traits::DataSource;
use stockcast_core::types::{Bar, PriceSeries};
use tracing::{debug, warn};

/// Yahoo Finance client configuration.
#[derive(Debug, Clone)]
pub struct YahooConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: concat!("Mozilla/5.0 (compatible; stockcast/", env!("CARGO_PKG_VERSION"), ")")
                .to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    /// Exchange offset from UTC in seconds
    #[serde(default)]
    gmtoffset: i32,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

/// Yahoo Finance daily history client.
pub struct YahooSource {
    config: YahooConfig,
    client: Client,
}

impl YahooSource {
    /// Create a new Yahoo client.
    pub fn new(config: YahooConfig) -> Result<Self, DataError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| DataError::Api(e.to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| DataError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Chart endpoint for `symbol`, which is percent-encoded as one path segment.
    fn chart_url(&self, symbol: &str) -> Result<Url, DataError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| DataError::Api(format!("Invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| DataError::Api(format!("Invalid base URL: {}", self.config.base_url)))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart"])
            .push(symbol);
        Ok(url)
    }
}

#[async_trait]
impl DataSource for YahooSource {
    async fn daily_bars(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DataError> {
        if symbol.trim().is_empty() || start >= end {
            return Ok(PriceSeries::empty(symbol));
        }

        let params = [
            ("period1", unix_seconds(start).to_string()),
            ("period2", unix_seconds(end).to_string()),
            ("interval", "1d".to_string()),
            ("events", "history".to_string()),
        ];

        let resp = self
            .client
            .get(self.chart_url(symbol)?)
            .query(&params)
            .send()
            .await
            .map_err(|e| DataError::Connection(e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            debug!("Yahoo has no chart for {}", symbol);
            return Ok(PriceSeries::empty(symbol));
        }

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(DataError::Api(format!("{}: {}", status, text)));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| DataError::Connection(e.to_string()))?;

        Ok(parse_chart(symbol, &body)?.within(start, end))
    }

    fn name(&self) -> &str {
        "Yahoo Finance"
    }
}

fn unix_seconds(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}

/// Convert a chart payload into a series.
///
/// An error payload or a missing result means "no data" and yields an
/// empty series. Rows without a close are skipped.
fn parse_chart(symbol: &str, body: &str) -> Result<PriceSeries, DataError> {
    let response: ChartResponse =
        serde_json::from_str(body).map_err(|e| DataError::Parse(e.to_string()))?;

    if let Some(err) = response.chart.error {
        warn!(
            "Yahoo returned {} for {}: {}",
            err.code,
            symbol,
            err.description.unwrap_or_default()
        );
        return Ok(PriceSeries::empty(symbol));
    }

    let Some(result) = response.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(PriceSeries::empty(symbol));
    };

    let offset = FixedOffset::east_opt(result.meta.gmtoffset)
        .ok_or_else(|| DataError::Parse(format!("Bad gmtoffset {}", result.meta.gmtoffset)))?;
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let at = |values: &[Option<f64>], i: usize| values.get(i).copied().flatten();

    let mut bars = Vec::with_capacity(result.timestamp.len());
    for (i, ts) in result.timestamp.iter().enumerate() {
        let Some(close) = at(&quote.close, i) else {
            continue;
        };
        let date = DateTime::from_timestamp(*ts, 0)
            .ok_or_else(|| DataError::Parse(format!("Bad timestamp {}", ts)))?
            .with_timezone(&offset)
            .date_naive();

        bars.push(Bar::new(
            date,
            at(&quote.open, i).unwrap_or(close),
            at(&quote.high, i).unwrap_or(close),
            at(&quote.low, i).unwrap_or(close),
            close,
            at(&quote.volume, i).unwrap_or(0.0),
        ));
    }

    Ok(PriceSeries::from_bars(symbol, bars))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Two Jakarta sessions (UTC+7) opening at 09:00 local, i.e. 02:00 UTC,
    // plus one row Yahoo left empty.
    const JAKARTA_CHART: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"currency": "IDR", "symbol": "DCII.JK", "gmtoffset": 25200},
                "timestamp": [1714615200, 1714701600, 1714960800],
                "indicators": {
                    "quote": [{
                        "open":   [205000, null, 207000],
                        "high":   [210000, null, 212000],
                        "low":    [200000, null, 206000],
                        "close":  [208000, null, 211000],
                        "volume": [1200, null, 800]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_chart() {
        let series = parse_chart("DCII.JK", JAKARTA_CHART).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.dates(), vec![date(2024, 5, 2), date(2024, 5, 6)]);
        assert_eq!(series.closes(), vec![208000.0, 211000.0]);
        assert_eq!(series.bars()[0].volume, 1200.0);
    }

    #[test]
    fn test_local_date_from_offset() {
        // 2024-05-01 23:00 UTC is already 2024-05-02 in Jakarta
        let body = r#"{"chart": {"result": [{
            "meta": {"gmtoffset": 25200},
            "timestamp": [1714604400],
            "indicators": {"quote": [{"close": [100.0]}]}
        }], "error": null}}"#;

        let series = parse_chart("X", body).unwrap();
        assert_eq!(series.dates(), vec![date(2024, 5, 2)]);
        assert_eq!(series.bars()[0].open, 100.0);
    }

    #[test]
    fn test_error_payload_is_empty() {
        let body = r#"{"chart": {"result": null, "error": {
            "code": "Not Found",
            "description": "No data found, symbol may be delisted"
        }}}"#;

        let series = parse_chart("NOPE", body).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.symbol, "NOPE");
    }

    #[test]
    fn test_result_without_rows_is_empty() {
        let body = r#"{"chart": {"result": [{
            "meta": {"gmtoffset": 0},
            "indicators": {"quote": [{}]}
        }], "error": null}}"#;

        assert!(parse_chart("X", body).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_payload() {
        assert!(matches!(parse_chart("X", "<html>"), Err(DataError::Parse(_))));
    }

    #[test]
    fn test_chart_url_and_period() {
        let source = YahooSource::new(YahooConfig {
            base_url: "http://localhost:9/".to_string(),
            ..YahooConfig::default()
        })
        .unwrap();

        assert_eq!(
            source.chart_url("DCII.JK").unwrap().as_str(),
            "http://localhost:9/v8/finance/chart/DCII.JK"
        );
        assert_eq!(unix_seconds(date(2024, 4, 25)), 1714003200);
    }

    #[test]
    fn test_chart_url_escapes_symbol() {
        let source = YahooSource::new(YahooConfig {
            base_url: "http://localhost:9/mirror".to_string(),
            ..YahooConfig::default()
        })
        .unwrap();

        let url = source.chart_url("A/B?C#D").unwrap();
        assert_eq!(url.path(), "/mirror/v8/finance/chart/A%2FB%3FC%23D");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[tokio::test]
    async fn test_empty_range_skips_request() {
        // Port 9 is never contacted because the range is empty
        let source = YahooSource::new(YahooConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..YahooConfig::default()
        })
        .unwrap();

        let series = source
            .daily_bars("DCII.JK", date(2024, 5, 1), date(2024, 5, 1))
            .await
            .unwrap();
        assert!(series.is_empty());
    }
}
