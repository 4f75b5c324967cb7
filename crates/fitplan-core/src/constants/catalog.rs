// ABOUTME: Accepted option tags for the multi-select cuisine field
// ABOUTME: Tags are stored normalized (lowercase, underscores) and matched after normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Tag meaning "no preference" in select and multi-select fields
pub const NONE_TAG: &str = "none";

/// Cuisine tags accepted for variety preferences
pub const CUISINES: &[&str] = &[
    "chinese",
    "caribbean",
    "american",
    "nordic",
    "south_american",
    "world",
    "mediterranean",
    "japanese",
    "british",
    "south_east_asian",
    "mexican",
    "french",
    "eastern_europe",
    "central_europe",
    "indian",
    "middle_eastern",
    "italian",
    "kosher",
    "asian",
    NONE_TAG,
];

/// Normalize an option tag: trim, lowercase, spaces and hyphens become underscores
#[must_use]
pub fn normalize_tag(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Whether a normalized tag is a known cuisine
#[must_use]
pub fn is_known_cuisine(tag: &str) -> bool {
    CUISINES.contains(&tag)
}
