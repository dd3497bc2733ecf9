//! Single-pass extraction of clip summaries from a parsed document.

use std::collections::BTreeSet;
use std::path::Path;

use gltf::animation::{Animation, Property};
use gltf::{Accessor, Document};

use crate::loader::load_document;
use crate::summary::{AnimationSummary, FileResult};

/// Walk every clip in the document and summarize it. Pure over the parsed
/// graph; no I/O.
pub fn scan_document(doc: &Document) -> Vec<AnimationSummary> {
    doc.animations().map(|clip| summarize_clip(&clip)).collect()
}

/// Scan one file, folding any loader failure into the result record.
///
/// This never returns an error: a missing file or a rejected parse becomes a
/// [`FileResult`] with `error` set and an empty clip list.
pub fn scan_file(path: &Path) -> FileResult {
    tracing::info!(file = %path.display(), "scanning");
    match load_document(path) {
        Ok(doc) => FileResult::success(path, scan_document(&doc)),
        Err(err) => {
            tracing::warn!(
                file = %path.display(),
                category = err.category(),
                "scan failed: {err}"
            );
            FileResult::failure(path, err.to_string())
        }
    }
}

/// Scan files sequentially in the given order. Failures are isolated per
/// file; the batch always runs to completion.
pub fn scan_batch<P: AsRef<Path>>(paths: &[P]) -> Vec<FileResult> {
    paths.iter().map(|p| scan_file(p.as_ref())).collect()
}

fn summarize_clip(clip: &Animation) -> AnimationSummary {
    let index = clip.index();
    let name = clip
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| AnimationSummary::default_name(index));

    let mut target_nodes: BTreeSet<usize> = BTreeSet::new();
    let mut animation_types: BTreeSet<&'static str> = BTreeSet::new();
    let mut max_time = 0.0_f64;

    for channel in clip.channels() {
        let target = channel.target();
        target_nodes.insert(target.node().index());
        animation_types.insert(property_name(target.property()));

        match input_max_seconds(&channel.sampler().input()) {
            Some(t) => max_time = max_time.max(t),
            None => {
                // Accessor declares no usable max; the channel still counts
                // toward targets/types, only the duration fold skips it.
                tracing::debug!(clip = %name, "input accessor has no max bound");
            }
        }
    }

    AnimationSummary {
        index,
        name,
        channel_count: clip.channels().count(),
        sampler_count: clip.samplers().count(),
        // Zero means no keyframe reached past t=0; treated as unknown.
        duration: (max_time > 0.0).then_some(max_time),
        target_nodes: target_nodes.into_iter().collect(),
        animation_types: animation_types.iter().map(|s| s.to_string()).collect(),
    }
}

/// First element of the accessor's declared `max`, read as seconds.
fn input_max_seconds(accessor: &Accessor) -> Option<f64> {
    accessor.max()?.as_array()?.first()?.as_f64()
}

fn property_name(property: Property) -> &'static str {
    match property {
        Property::Translation => "translation",
        Property::Rotation => "rotation",
        Property::Scale => "scale",
        _ => "weights",
    }
}
