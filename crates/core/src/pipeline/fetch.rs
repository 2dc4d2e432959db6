use std::{
    fs::{remove_file, rename, write},
    path::{Path, PathBuf},
};

use log::debug;
use reqwest::blocking::get;

use crate::{
    config::FontSpec,
    error::{Error, Result},
};

/// Narrow interface over the network: retrieve `url` into `dest`.
pub trait Fetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Blocking HTTP fetcher.
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        debug!("GET {url}");
        let response = get(url).map_err(|e| Error::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network {
                url: url.to_string(),
                message: format!("HTTP {status}"),
            });
        }

        // Buffer the whole body before creating the cache file, so an
        // interrupted transfer never leaves a truncated file that a later
        // run would trust as a cache hit.
        let bytes = response.bytes().map_err(|e| Error::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        install_cache_file(dest, &bytes)?;

        debug!("{} bytes written to {}", bytes.len(), dest.display());
        Ok(())
    }
}

/// Write `bytes` to a sibling temp path and rename it into place.
///
/// The cache path only ever holds a complete file: a write that fails
/// partway (e.g. disk full) dies on the temp path, never at `dest`.
fn install_cache_file(dest: &Path, bytes: &[u8]) -> Result<()> {
    let part = dest.with_extension("part");
    if let Err(e) = write(&part, bytes) {
        let _ = remove_file(&part);
        return Err(e.into());
    }
    if let Err(e) = rename(&part, dest) {
        let _ = remove_file(&part);
        return Err(e.into());
    }
    Ok(())
}

/// Ensure a cached TTF exists for `spec`, fetching it if absent.
///
/// An existing file at the deterministic cache path is trusted as-is, with
/// no freshness or integrity check. Returns the path and whether a network
/// fetch was performed.
pub fn ensure_cached(
    spec: &FontSpec,
    resources_dir: &Path,
    fetcher: &dyn Fetcher,
) -> Result<(PathBuf, bool)> {
    let ttf = resources_dir.join(spec.cache_file_name());
    if ttf.exists() {
        debug!("Using cached {}", ttf.display());
        return Ok((ttf, false));
    }

    println!("Downloading {} {}", spec.typeface, spec.weight);
    println!("  {}", spec.url);
    fetcher.fetch(spec.url, &ttf)?;

    Ok((ttf, true))
}
