//! Solar frame fetching, caching and texture upload

use super::App;
use crate::analysis::ImageStats;
use crate::constants::{CONNECT_TIMEOUT_SECS, FETCH_TIMEOUT_SECS};
use crate::soho;
use crate::types::*;
use chrono::NaiveDate;
use eframe::egui;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("cache error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no frame available for {0}")]
    NoFrame(NaiveDate),
    #[error("fetch cancelled")]
    Cancelled,
}

/// Lock the shared frame state, recovering from a poisoned lock.
pub(crate) fn lock(state: &Mutex<FrameState>) -> MutexGuard<'_, FrameState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// HTTP client for archive requests, with connect and total timeouts
pub(crate) fn frame_client() -> Result<reqwest::Client, FrameError> {
    Ok(reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()?)
}

/// Stream a frame from the archive. Cancellation is honoured while connecting and while reading.
async fn download_frame(
    client: &reqwest::Client,
    url: &str,
    token: &CancellationToken,
) -> Result<Vec<u8>, FrameError> {
    let response = tokio::select! {
        _ = token.cancelled() => return Err(FrameError::Cancelled),
        response = client.get(url).send() => response?,
    };
    if !response.status().is_success() {
        return Err(FrameError::Status(response.status()));
    }

    let mut bytes = Vec::with_capacity(response.content_length().unwrap_or(0) as usize);
    let mut stream = response.bytes_stream();
    loop {
        tokio::select! {
            _ = token.cancelled() => return Err(FrameError::Cancelled),
            chunk = stream.next() => {
                match chunk {
                    Some(Ok(data)) => bytes.extend_from_slice(&data),
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
        }
    }
    Ok(bytes)
}

/// Write a cache entry through a `.part` file so readers never see a partial frame.
async fn store_cached(path: &Path, bytes: &[u8]) -> Result<(), FrameError> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }
    let part = path.with_extension("part");
    tokio::fs::write(&part, bytes).await?;
    tokio::fs::rename(&part, path).await?;
    Ok(())
}

/// Load one candidate frame from the disk cache, or download it.
///
/// Only bytes that decode are cached. A cache entry that no longer decodes is
/// removed and fetched again.
async fn load_frame(
    client: &reqwest::Client,
    url: &str,
    date: NaiveDate,
    cache_dir: &Path,
    token: &CancellationToken,
) -> Result<SolarFrame, FrameError> {
    let path = cache_dir.join(soho::file_name(url));
    if let Ok(bytes) = tokio::fs::read(&path).await {
        match decode_frame(&bytes, date, url) {
            Ok(frame) => {
                debug!(path = %path.display(), "Frame cache hit");
                return Ok(frame);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Evicting unreadable cached frame");
                if let Err(e) = tokio::fs::remove_file(&path).await {
                    warn!(path = %path.display(), error = %e, "Failed to remove cached frame");
                }
            }
        }
    }

    let bytes = download_frame(client, url, token).await?;
    let frame = decode_frame(&bytes, date, url)?;
    if let Err(e) = store_cached(&path, &bytes).await {
        warn!(path = %path.display(), error = %e, "Failed to cache frame");
    }
    Ok(frame)
}

/// Decode raw image bytes into an uploadable frame with its statistics.
pub(crate) fn decode_frame(bytes: &[u8], date: NaiveDate, url: &str) -> Result<SolarFrame, FrameError> {
    let img = image::load_from_memory(bytes)?;
    let stats = ImageStats::compute(&img);
    let rgba = img.to_rgba8();
    Ok(SolarFrame {
        date,
        url: url.to_string(),
        size: [rgba.width() as usize, rgba.height() as usize],
        byte_len: bytes.len() as u64,
        rgba: rgba.into_raw(),
        stats,
    })
}

/// Try each candidate URL in order and return the first frame that loads.
async fn fetch_first_frame(
    date: NaiveDate,
    urls: &[String],
    cache_dir: &Path,
    state: &Mutex<FrameState>,
    generation: u64,
    token: &CancellationToken,
    ctx: &egui::Context,
) -> Result<SolarFrame, FrameError> {
    let client = frame_client()?;

    for (i, url) in urls.iter().enumerate() {
        if token.is_cancelled() {
            return Err(FrameError::Cancelled);
        }
        {
            let mut s = lock(state);
            if s.generation != generation {
                return Err(FrameError::Cancelled);
            }
            s.status = FetchStatus::Loading { attempt: i + 1, of: urls.len() };
        }
        ctx.request_repaint();

        match load_frame(&client, url, date, cache_dir, token).await {
            Ok(frame) => return Ok(frame),
            Err(FrameError::Cancelled) => return Err(FrameError::Cancelled),
            Err(e) => debug!(url = %url, error = %e, "Frame candidate unavailable"),
        }
    }

    Err(FrameError::NoFrame(date))
}

/// Supersede any running fetch and publish the loading state. Returns the new generation.
fn begin_request(state: &Mutex<FrameState>, candidates: usize) -> u64 {
    let mut s = lock(state);
    s.generation += 1;
    s.status = FetchStatus::Loading { attempt: 1, of: candidates };
    s.frame = None;
    s.generation
}

impl App {
    /// Start loading the solar frame for the selected date, cancelling any fetch in flight.
    pub fn request_frame(&mut self, ctx: &egui::Context) {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());

        let date = self.control.date().value();
        let urls = soho::day_urls(
            &self.control.date().parts(),
            &self.settings.instrument,
            self.settings.cadence(),
        );

        let generation = begin_request(&self.frame_state, urls.len());

        info!(date = %date, instrument = %self.settings.instrument, candidates = urls.len(), "Requesting solar frame");

        let state: Arc<Mutex<FrameState>> = self.frame_state.clone();
        let cache_dir: PathBuf = self.cache_dir.join("frames");
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let result =
                fetch_first_frame(date, &urls, &cache_dir, &state, generation, &token, &ctx).await;

            let mut s = lock(&state);
            if s.generation != generation || token.is_cancelled() {
                return;
            }
            match result {
                Ok(frame) => {
                    info!(date = %date, url = %frame.url, "Solar frame ready");
                    s.frame = Some(frame);
                    s.status = FetchStatus::Ready;
                }
                Err(e) => {
                    warn!(date = %date, error = %e, "Failed to load solar frame");
                    s.status = FetchStatus::Failed(e.to_string());
                }
            }
            drop(s);
            ctx.request_repaint();
        });
    }

    /// Upload the latest ready frame as a texture, or drop the stale one.
    pub fn sync_frame_texture(&mut self, ctx: &egui::Context) {
        let shared = self.frame_state.clone();
        let s = lock(&shared);
        match &s.frame {
            Some(frame) if self.frame_texture_url.as_deref() != Some(frame.url.as_str()) => {
                self.frame_texture = Some(ctx.load_texture(
                    soho::file_name(&frame.url),
                    egui::ColorImage::from_rgba_unmultiplied(frame.size, &frame.rgba),
                    egui::TextureOptions::LINEAR,
                ));
                self.frame_texture_url = Some(frame.url.clone());
            }
            Some(_) => {}
            None => {
                self.frame_texture = None;
                self.frame_texture_url = None;
            }
        }
    }

    /// Status of the current fetch, for rendering
    pub fn frame_status(&self) -> FetchStatus {
        lock(&self.frame_state).status.clone()
    }
}
