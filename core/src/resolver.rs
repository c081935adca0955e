//! Config-resource resolver.
//!
//! Locates the icon and translation tables across an ordered list of
//! candidate base paths. A candidate only counts if BOTH tables load
//! from it; the first fully successful candidate wins. If none
//! satisfies both, each table is fetched independently from a fixed
//! fallback path so a partial load can still improve coverage. One
//! strategy, reused by the initial load and any reload path.

use crate::error::{ApiError, ResourceError};
use crate::mappings::{ConfigMapping, parse_table};

/// Candidate base paths, probed in order: page-relative, parent,
/// site-root web folder, relative web folder, plugin-specific path.
pub const CANDIDATE_BASE_PATHS: [&str; 5] = ["./", "../", "/web/", "web/", "/playerinfo/web/"];

/// Fixed path used for the independent per-table fallback.
pub const FALLBACK_BASE_PATH: &str = "../";

pub const ICON_TABLE: &str = "itemIcons.cnf";
pub const TRANSLATION_TABLE: &str = "itemTranslations.cnf";

/// Seam between the resolver and the environment's fetch facility.
/// The frontend backs this with browser fetch; tests with a map.
#[allow(async_fn_in_trait)]
pub trait TextFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, ApiError>;
}

/// Probe candidates and merge whatever loads into `mapping`.
///
/// Returns `Err(ResourceError::Missing)` only when no candidate and
/// neither fallback fetch produced a table; callers degrade silently
/// in that case (default icon, identity names).
pub async fn load_config_tables<F: TextFetcher>(
    fetcher: &F,
    mapping: &mut ConfigMapping,
) -> Result<(), ResourceError> {
    for base in CANDIDATE_BASE_PATHS {
        let icon_text = match fetcher.fetch_text(&format!("{base}{ICON_TABLE}")).await {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(base, %err, "candidate has no icon table");
                continue;
            }
        };
        let translation_text = match fetcher
            .fetch_text(&format!("{base}{TRANSLATION_TABLE}"))
            .await
        {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(base, %err, "candidate has no translation table");
                continue;
            }
        };

        mapping.merge_icons(parse_table(&icon_text));
        mapping.merge_translations(parse_table(&translation_text));
        tracing::info!(
            base,
            icons = mapping.icon_count(),
            translations = mapping.translation_count(),
            "config tables loaded"
        );
        return Ok(());
    }

    // No candidate had both tables; load each independently from the
    // fixed fallback path.
    let mut any_loaded = false;
    match fetcher
        .fetch_text(&format!("{FALLBACK_BASE_PATH}{ICON_TABLE}"))
        .await
    {
        Ok(text) => {
            mapping.merge_icons(parse_table(&text));
            any_loaded = true;
        }
        Err(err) => tracing::warn!(%err, "fallback icon table unavailable"),
    }
    match fetcher
        .fetch_text(&format!("{FALLBACK_BASE_PATH}{TRANSLATION_TABLE}"))
        .await
    {
        Ok(text) => {
            mapping.merge_translations(parse_table(&text));
            any_loaded = true;
        }
        Err(err) => tracing::warn!(%err, "fallback translation table unavailable"),
    }

    if any_loaded {
        Ok(())
    } else {
        Err(ResourceError::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;
    use std::cell::RefCell;

    /// Map-backed fetcher that records every URL it is asked for.
    struct MapFetcher {
        files: HashMap<String, String>,
        requests: RefCell<Vec<String>>,
    }

    impl MapFetcher {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextFetcher for MapFetcher {
        async fn fetch_text(&self, url: &str) -> Result<String, ApiError> {
            self.requests.borrow_mut().push(url.to_string());
            self.files
                .get(url)
                .cloned()
                .ok_or(ApiError::Network { status: Some(404) })
        }
    }

    #[tokio::test]
    async fn first_complete_candidate_wins_and_probing_stops() {
        // Only the third candidate (/web/) has both tables; the first
        // has the icon table alone, which must not leak into the
        // mapping.
        let fetcher = MapFetcher::new(&[
            ("./itemIcons.cnf", "STONE=stray.png\n"),
            ("/web/itemIcons.cnf", "DIAMOND_SWORD=diamond_sword.png\n"),
            ("/web/itemTranslations.cnf", "DIAMOND_SWORD=Diamond Sword\n"),
            ("/playerinfo/web/itemIcons.cnf", "STONE=late.png\n"),
            ("/playerinfo/web/itemTranslations.cnf", "STONE=Late\n"),
        ]);
        let mut mapping = ConfigMapping::new();
        load_config_tables(&fetcher, &mut mapping).await.unwrap();

        assert_eq!(mapping.icon_count(), 1);
        assert_eq!(mapping.translation_count(), 1);
        assert_eq!(mapping.icon_file("DIAMOND_SWORD", 0), "diamond_sword.png");
        // Incomplete candidate contributed nothing.
        assert_eq!(mapping.icon_file("STONE", 0), crate::mappings::DEFAULT_ICON);
        // Probing stopped at the winning candidate.
        let requests = fetcher.requests.borrow();
        assert!(!requests.iter().any(|u| u.starts_with("/playerinfo/")));
    }

    #[tokio::test]
    async fn fallback_loads_each_table_independently() {
        // No candidate has both tables, but the fallback path can
        // still produce the translation table on its own.
        let fetcher = MapFetcher::new(&[(
            "../itemTranslations.cnf",
            "GOLD_INGOT=Gold Ingot\n",
        )]);
        let mut mapping = ConfigMapping::new();
        load_config_tables(&fetcher, &mut mapping).await.unwrap();

        assert_eq!(mapping.icon_count(), 0);
        assert_eq!(mapping.translate("GOLD_INGOT", 0), "Gold Ingot");
    }

    #[tokio::test]
    async fn nothing_anywhere_reports_missing() {
        let fetcher = MapFetcher::new(&[]);
        let mut mapping = ConfigMapping::new();
        let result = load_config_tables(&fetcher, &mut mapping).await;
        assert_eq!(result, Err(ResourceError::Missing));
        assert_eq!(mapping.icon_count(), 0);
    }

    #[tokio::test]
    async fn reload_merges_over_existing_entries() {
        let fetcher = MapFetcher::new(&[
            ("./itemIcons.cnf", "A=a2.png\n"),
            ("./itemTranslations.cnf", "A=Second\n"),
        ]);
        let mut mapping = ConfigMapping::new();
        mapping.merge_icons(parse_table("A=a1.png\nB=b.png\n"));
        load_config_tables(&fetcher, &mut mapping).await.unwrap();

        // Last write wins per key, earlier coverage kept.
        assert_eq!(mapping.icon_file("A", 0), "a2.png");
        assert_eq!(mapping.icon_file("B", 0), "b.png");
    }
}
