// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use cultivos::CropRecord;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const CODE_FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// Extracts crop records from raw model output. Never fails: output that is
/// not a JSON array yields an empty list and invalid records are skipped.
pub fn parse_crops(raw: &str) -> Vec<CropRecord> {
    let text = strip_code_fence(raw);

    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, raw_len = raw.len(), "AI output is not valid JSON");
            return Vec::new();
        }
    };

    let Some(items) = value.as_array() else {
        tracing::warn!("AI output is not a JSON array");
        return Vec::new();
    };

    let crops: Vec<_> = items.iter().filter_map(CropRecord::from_json).collect();

    if crops.len() != items.len() {
        tracing::debug!(
            num_items = items.len(),
            num_valid = crops.len(),
            "Skipped invalid crop records"
        );
    }

    crops
}

/// Models tend to wrap JSON in a Markdown block like ```json ... ```
fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();

    let Some(rest) = text.strip_prefix(CODE_FENCE) else {
        return text;
    };
    let rest = match rest.get(..JSON_TAG.len()) {
        Some(tag) if tag.eq_ignore_ascii_case(JSON_TAG) => &rest[JSON_TAG.len()..],
        _ => rest,
    };
    let rest = rest.strip_suffix(CODE_FENCE).unwrap_or(rest);

    rest.trim()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
