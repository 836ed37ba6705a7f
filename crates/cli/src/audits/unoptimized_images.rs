// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unoptimized images audit.
//!
//! Joins the gatherer's re-encoding candidates against the rendered
//! image elements by URL, computes byte-per-pixel ratios, and
//! recommends `unoptimized-lossy-images` / `unoptimized-lossless-images`
//! policy headers with per-image thresholds.

use serde_json::json;

use crate::artifacts::Artifacts;
use crate::audit::{Audit, AuditMeta, AuditResult, Details, ScoreDisplayMode, TableHeading};
use crate::error::{Error, Result};

/// Fixed byte allowance subtracted before the lossy budget comparison.
const LOSSY_ALLOWANCE_BYTES: f64 = 1024.0;

/// Fixed byte allowance subtracted before the lossless budget comparison.
const LOSSLESS_ALLOWANCE_BYTES: f64 = 10240.0;

/// Round a ratio up to two decimal places (ceiling at the hundredths
/// digit, toward positive infinity). NaN and infinities propagate.
pub fn round_up(decimal: f64) -> f64 {
    (decimal * 100.0).ceil() / 100.0
}

/// The unoptimized-images audit scores the fraction of rendered images
/// flagged as re-encoding candidates.
pub struct UnoptimizedImagesAudit;

impl Audit for UnoptimizedImagesAudit {
    fn meta(&self) -> AuditMeta {
        AuditMeta {
            id: "unoptimized-images",
            title: "Use feature policy to check for unoptimized images during development.",
            failure_title: "Use feature policy to check for unoptimized images during development.",
            description: "Turn on feature policy for unoptimized-images to ensure your site is \
                using the best performing images. See [Image policies for fast load times and more](https://web.dev/image-policies/?hl=en).",
            score_display_mode: ScoreDisplayMode::Numeric,
            required_artifacts: &["OptimizedImages", "ImageElements"],
        }
    }

    fn run(&self, artifacts: &Artifacts) -> Result<AuditResult> {
        let images = artifacts.optimized_images()?;
        let elements = artifacts.image_elements()?;

        let mut rows = Vec::with_capacity(images.len());
        for image in images {
            let element = elements
                .iter()
                .find(|e| e.src == image.url)
                .ok_or_else(|| Error::UnmatchedImage {
                    url: image.url.clone(),
                })?;

            // Zero-area elements yield an infinite ratio, surfaced
            // verbatim in the header strings.
            let area = f64::from(element.natural_height) * f64::from(element.natural_width);
            let lossy = round_up((image.jpeg_size as f64 - LOSSY_ALLOWANCE_BYTES) / area);
            let lossless = round_up((image.jpeg_size as f64 - LOSSLESS_ALLOWANCE_BYTES) / area);

            rows.push(json!({
                "url": image.url,
                "lossyPolicyHeader": format!("unoptimized-lossy-images *({lossy});"),
                "losslessPolicyHeader": format!("unoptimized-lossless-images *({lossless});"),
            }));
        }

        // Fraction of rendered elements that were flagged, inverted so
        // fewer flags score higher. The denominator is the total element
        // count, not the matched count, and the result is not clamped.
        let score = if elements.is_empty() {
            1.0
        } else {
            1.0 - (images.len() as f64 / elements.len() as f64)
        };

        Ok(AuditResult {
            score: Some(score),
            display_value: format!(
                "Found {} unoptimized images that can be caught during development if you use \
                 the recommended feature policy headers",
                images.len()
            ),
            details: Details::Table {
                headings: headings(),
                items: rows,
            },
        })
    }
}

fn headings() -> Vec<TableHeading> {
    vec![
        TableHeading {
            key: "url",
            text: "image URL",
            item_type: "url",
        },
        TableHeading {
            key: "lossyPolicyHeader",
            text: "Recommended Feature Policy header for lossy compression",
            item_type: "text",
        },
        TableHeading {
            key: "losslessPolicyHeader",
            text: "Recommended Feature Policy header for lossless compression",
            item_type: "text",
        },
    ]
}

#[cfg(test)]
#[path = "unoptimized_images_tests.rs"]
mod tests;
