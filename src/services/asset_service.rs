//! Image asset service - Resolves stock image URLs for page sections.
//!
//! Lookup order for a category and size:
//! 1. On-disk cache entry younger than the cache TTL
//! 2. Unsplash search API, when an access key is configured
//! 3. Keyword image on source.unsplash.com, probed with HEAD
//! 4. Lorem Picsum with a seed derived from the category
//!
//! With remote lookups disabled every image is a local SVG placeholder.
//! Lookups never fail; errors are logged and the next source is tried.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::{
    AssetsConfig, ASSET_CACHE_TTL_HOURS, FALLBACK_PROBE_TIMEOUT_SECONDS,
    MAX_PLACEHOLDER_DIMENSION, UNSPLASH_API_URL, UNSPLASH_TIMEOUT_SECONDS,
};
use crate::errors::{AppError, AppResult};

/// Search keywords per image category.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("business-team", &["business", "team", "office", "professional"]),
    ("technology-consulting", &["technology", "consulting", "computer", "business"]),
    ("business-strategy", &["strategy", "planning", "business", "meeting"]),
    ("digital-transformation", &["digital", "technology", "innovation", "business"]),
    ("professional-team", &["team", "business", "professional", "office"]),
    ("modern-office", &["office", "workspace", "modern", "business"]),
    ("team-meeting", &["meeting", "business", "team", "conference"]),
    ("workspace", &["workspace", "office", "desk", "computer"]),
    ("professional-woman", &["business", "woman", "professional", "portrait"]),
    ("professional-man", &["business", "man", "professional", "portrait"]),
    ("business-woman", &["business", "woman", "suit", "professional"]),
    ("business-consulting", &["consulting", "business", "meeting", "professional"]),
    ("technology-stack", &["technology", "computer", "software", "coding"]),
    ("cloud-computing", &["cloud", "technology", "server", "computing"]),
    ("data-analytics", &["data", "analytics", "chart", "business"]),
    ("cybersecurity", &["security", "technology", "protection", "cyber"]),
    ("mobile-development", &["mobile", "app", "development", "technology"]),
    (
        "ai-machine-learning",
        &["artificial intelligence", "machine learning", "technology", "future"],
    ),
    ("business-meeting", &["meeting", "business", "conference", "professional"]),
    ("modern-office-space", &["office", "modern", "workspace", "interior"]),
    ("business-insights", &["business", "insights", "data", "analytics"]),
    ("technology-trends", &["technology", "trends", "innovation", "future"]),
    ("business-growth", &["growth", "business", "success", "chart"]),
    ("digital-innovation", &["digital", "innovation", "technology", "future"]),
];

/// Default caption drawn on generated placeholders
pub const PLACEHOLDER_TEXT: &str = "Professional Image";

/// Image lookup trait for dependency injection.
#[async_trait]
pub trait AssetService: Send + Sync {
    /// URL of an image for `category` at the given size.
    async fn get_image(&self, category: &str, width: u32, height: u32) -> String;

    /// One URL per category, resolved concurrently and in order.
    async fn get_gallery(&self, categories: &[&str], width: u32, height: u32) -> Vec<String> {
        let lookups = categories
            .iter()
            .map(|category| self.get_image(category, width, height));
        futures::future::join_all(lookups).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    url: String,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct UnsplashSearch {
    #[serde(default)]
    results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    urls: UnsplashUrls,
}

#[derive(Debug, Deserialize)]
struct UnsplashUrls {
    raw: String,
}

/// Asset service backed by Unsplash, Lorem Picsum and a JSON file cache.
pub struct AssetManager {
    client: reqwest::Client,
    unsplash_access_key: Option<String>,
    unsplash_api_url: String,
    cache_dir: PathBuf,
    cache_ttl: chrono::Duration,
    remote_lookups: bool,
}

impl AssetManager {
    pub fn from_settings(config: &AssetsConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            unsplash_access_key: config.unsplash_access_key().map(str::to_string),
            unsplash_api_url: UNSPLASH_API_URL.to_string(),
            cache_dir: config.cache_dir.clone(),
            cache_ttl: chrono::Duration::hours(ASSET_CACHE_TTL_HOURS),
            remote_lookups: config.remote_lookups,
        })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    async fn resolve(&self, category: &str, width: u32, height: u32) -> String {
        if let Some(url) = self.fetch_from_unsplash(category, width, height).await {
            return url;
        }
        if let Some(url) = self.probe_keyword_image(category, width, height).await {
            return url;
        }
        picsum_url(category, width, height)
    }

    async fn fetch_from_unsplash(&self, category: &str, width: u32, height: u32) -> Option<String> {
        let key = self.unsplash_access_key.as_deref()?;
        let query = keywords(category).join(" ");

        let result = async {
            let response = self
                .client
                .get(format!("{}/search/photos", self.unsplash_api_url))
                .header(reqwest::header::AUTHORIZATION, format!("Client-ID {}", key))
                .query(&[
                    ("query", query.as_str()),
                    ("orientation", "landscape"),
                    ("per_page", "1"),
                    ("order_by", "relevant"),
                ])
                .timeout(Duration::from_secs(UNSPLASH_TIMEOUT_SECONDS))
                .send()
                .await?
                .error_for_status()?;
            response.json::<UnsplashSearch>().await
        }
        .await;

        match result {
            Ok(search) => search.results.into_iter().next().map(|photo| {
                format!(
                    "{}&w={}&h={}&fit=crop&crop=center",
                    photo.urls.raw, width, height
                )
            }),
            Err(e) => {
                tracing::error!(category, error = %e, "Unsplash search failed");
                None
            }
        }
    }

    async fn probe_keyword_image(&self, category: &str, width: u32, height: u32) -> Option<String> {
        let keyword = keywords(category).first()?.replace(' ', "-");
        let url = format!("https://source.unsplash.com/{}x{}/?{}", width, height, keyword);

        match self
            .client
            .head(&url)
            .timeout(Duration::from_secs(FALLBACK_PROBE_TIMEOUT_SECONDS))
            .send()
            .await
        {
            Ok(response) if response.status() == reqwest::StatusCode::OK => Some(url),
            Ok(response) => {
                tracing::debug!(category, status = %response.status(), "Keyword image unavailable");
                None
            }
            Err(e) => {
                tracing::debug!(category, error = %e, "Keyword image probe failed");
                None
            }
        }
    }

    fn cache_file(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    async fn read_cache(&self, key: &str) -> Option<String> {
        let path = self.cache_file(key);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Error reading asset cache");
                return None;
            }
        };

        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) if Utc::now() - entry.timestamp < self.cache_ttl => Some(entry.url),
            Ok(_) => None,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Corrupt asset cache entry");
                None
            }
        }
    }

    async fn write_cache(&self, key: &str, url: &str) {
        let entry = CacheEntry {
            url: url.to_string(),
            timestamp: Utc::now(),
        };

        let result = async {
            tokio::fs::create_dir_all(&self.cache_dir).await?;
            let body = serde_json::to_vec(&entry)?;
            tokio::fs::write(self.cache_file(key), body).await
        }
        .await;

        if let Err(e) = result {
            tracing::error!(dir = %self.cache_dir.display(), error = %e, "Error writing asset cache");
        }
    }
}

#[async_trait]
impl AssetService for AssetManager {
    async fn get_image(&self, category: &str, width: u32, height: u32) -> String {
        if !self.remote_lookups {
            return placeholder_url(width, height);
        }

        let key = cache_key(category, width, height);
        if let Some(url) = self.read_cache(&key).await {
            return url;
        }

        let url = self.resolve(category, width, height).await;
        self.write_cache(&key, &url).await;
        url
    }
}

fn keywords(category: &str) -> Vec<&str> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, words)| words.to_vec())
        .unwrap_or_else(|| vec![category])
}

fn digest(input: &str) -> [u8; 32] {
    Sha256::digest(input.as_bytes()).into()
}

/// Cache file stem for one category and size.
fn cache_key(category: &str, width: u32, height: u32) -> String {
    digest(&format!("{}_{}_{}", category, width, height))
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn picsum_url(category: &str, width: u32, height: u32) -> String {
    let hash = digest(category);
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash[..8]);
    let seed = u64::from_be_bytes(prefix) % 1000;
    format!("https://picsum.photos/{}/{}?random={}", width, height, seed)
}

/// URL of the locally generated placeholder for a size.
pub fn placeholder_url(width: u32, height: u32) -> String {
    format!("/placeholders/{}x{}.svg", width, height)
}

/// Parse a `{w}x{h}.svg` path segment; each edge must be 1..=MAX_PLACEHOLDER_DIMENSION.
pub fn parse_placeholder_size(segment: &str) -> Option<(u32, u32)> {
    let (width, height) = segment.strip_suffix(".svg")?.split_once('x')?;
    let width: u32 = width.parse().ok()?;
    let height: u32 = height.parse().ok()?;

    let valid = 1..=MAX_PLACEHOLDER_DIMENSION;
    (valid.contains(&width) && valid.contains(&height)).then_some((width, height))
}

/// Render a neutral SVG placeholder with a centred caption.
pub fn placeholder_svg(width: u32, height: u32, text: &str) -> String {
    format!(
        concat!(
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
            r##"<rect width="100%" height="100%" fill="#f8f9fa"/>"##,
            r##"<rect x="2" y="2" width="{iw}" height="{ih}" fill="none" stroke="#dee2e6" stroke-width="2"/>"##,
            r##"<text x="50%" y="50%" font-family="Arial, sans-serif" font-size="16" fill="#6c757d" text-anchor="middle" dy=".3em">{text}</text>"##,
            "</svg>"
        ),
        w = width,
        h = height,
        iw = width.saturating_sub(4),
        ih = height.saturating_sub(4),
        text = escape_xml(text),
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
