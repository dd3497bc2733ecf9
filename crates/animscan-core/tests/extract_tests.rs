use std::io::Write as _;
use std::path::PathBuf;

use animscan_core::{scan_batch, scan_document, scan_file};

/// Parse an in-memory glTF JSON document (no buffer payloads needed for the
/// structural walk).
fn doc_from_json(json: &str) -> gltf::Document {
    gltf::Gltf::from_slice(json.as_bytes())
        .expect("parse glTF fixture")
        .document
}

fn write_fixture(dir: &tempfile::TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture file");
    file.write_all(json.as_bytes()).expect("write fixture file");
    path
}

const EMPTY_SCENE: &str = r#"{
  "asset": {"version": "2.0"},
  "nodes": [{}]
}"#;

const WALK_CYCLE: &str = r#"{
  "asset": {"version": "2.0"},
  "nodes": [{}, {}],
  "buffers": [{"byteLength": 64}],
  "bufferViews": [{"buffer": 0, "byteLength": 64}],
  "accessors": [
    {"bufferView": 0, "componentType": 5126, "count": 2, "type": "SCALAR", "min": [0.0], "max": [1.25]},
    {"bufferView": 0, "componentType": 5126, "count": 2, "type": "VEC3"},
    {"bufferView": 0, "componentType": 5126, "count": 3, "type": "SCALAR", "min": [0.0], "max": [2.5]},
    {"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC4"}
  ],
  "animations": [{
    "name": "Walk_Cycle",
    "channels": [
      {"sampler": 0, "target": {"node": 0, "path": "translation"}},
      {"sampler": 1, "target": {"node": 0, "path": "rotation"}},
      {"sampler": 1, "target": {"node": 1, "path": "rotation"}}
    ],
    "samplers": [
      {"input": 0, "output": 1},
      {"input": 2, "output": 3}
    ]
  }]
}"#;

const UNNAMED_NO_MAX: &str = r#"{
  "asset": {"version": "2.0"},
  "nodes": [{}],
  "buffers": [{"byteLength": 64}],
  "bufferViews": [{"buffer": 0, "byteLength": 64}],
  "accessors": [
    {"bufferView": 0, "componentType": 5126, "count": 2, "type": "SCALAR"},
    {"bufferView": 0, "componentType": 5126, "count": 2, "type": "VEC3"}
  ],
  "animations": [{
    "channels": [
      {"sampler": 0, "target": {"node": 0, "path": "scale"}}
    ],
    "samplers": [
      {"input": 0, "output": 1}
    ]
  }]
}"#;

const ZERO_MAX: &str = r#"{
  "asset": {"version": "2.0"},
  "nodes": [{}],
  "buffers": [{"byteLength": 64}],
  "bufferViews": [{"buffer": 0, "byteLength": 64}],
  "accessors": [
    {"bufferView": 0, "componentType": 5126, "count": 1, "type": "SCALAR", "min": [0.0], "max": [0.0]},
    {"bufferView": 0, "componentType": 5126, "count": 1, "type": "VEC3"}
  ],
  "animations": [{
    "name": "Pose",
    "channels": [
      {"sampler": 0, "target": {"node": 0, "path": "translation"}}
    ],
    "samplers": [
      {"input": 0, "output": 1}
    ]
  }]
}"#;

#[test]
fn document_without_clips_yields_empty_summary() {
    let doc = doc_from_json(EMPTY_SCENE);
    assert!(scan_document(&doc).is_empty());
}

#[test]
fn duration_is_the_maximum_across_channels() {
    let doc = doc_from_json(WALK_CYCLE);
    let clips = scan_document(&doc);
    assert_eq!(clips.len(), 1);

    let clip = &clips[0];
    assert_eq!(clip.index, 0);
    assert_eq!(clip.name, "Walk_Cycle");
    assert_eq!(clip.channel_count, 3);
    assert_eq!(clip.sampler_count, 2);
    // Maximum over contributing channels (1.25 and 2.5), not sum or first.
    assert_eq!(clip.duration, Some(2.5));
}

#[test]
fn target_nodes_and_types_are_deduplicated() {
    let doc = doc_from_json(WALK_CYCLE);
    let clip = &scan_document(&doc)[0];
    // Node 0 is hit by two channels, "rotation" by two channels.
    assert_eq!(clip.target_nodes, vec![0, 1]);
    assert_eq!(clip.animation_types, vec!["rotation", "translation"]);
}

#[test]
fn unnamed_clip_gets_indexed_default_name() {
    let doc = doc_from_json(UNNAMED_NO_MAX);
    let clip = &scan_document(&doc)[0];
    assert_eq!(clip.name, "Animation_0");
    assert_eq!(clip.animation_types, vec!["scale"]);
}

#[test]
fn missing_accessor_max_leaves_duration_unknown() {
    let doc = doc_from_json(UNNAMED_NO_MAX);
    let clip = &scan_document(&doc)[0];
    assert_eq!(clip.duration, None);
}

#[test]
fn zero_time_maximum_normalizes_to_unknown() {
    let doc = doc_from_json(ZERO_MAX);
    let clip = &scan_document(&doc)[0];
    // Zero and "unknown" are distinct states; zero collapses to absent.
    assert_eq!(clip.duration, None);
}

#[test]
fn scan_file_succeeds_on_zero_clip_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "static.gltf", EMPTY_SCENE);

    let result = scan_file(&path);
    assert!(result.error.is_none());
    assert_eq!(result.total_animations, 0);
    assert!(result.animations.is_empty());
    assert_eq!(result.file_name, "static.gltf");
}

#[test]
fn missing_file_is_recorded_and_does_not_halt_the_batch() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = write_fixture(&dir, "walk.gltf", WALK_CYCLE);
    let missing = dir.path().join("gone.glb");

    let results = scan_batch(&[missing.clone(), good]);
    assert_eq!(results.len(), 2);

    assert_eq!(
        results[0].error.as_deref(),
        Some(format!("File not found: {}", missing.display()).as_str())
    );
    assert_eq!(results[0].total_animations, 0);

    assert!(results[1].error.is_none());
    assert_eq!(results[1].total_animations, 1);
}

#[test]
fn malformed_container_is_a_per_file_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_fixture(&dir, "broken.glb", "this is not a container");

    let result = scan_file(&path);
    assert!(result.error.is_some());
    assert_eq!(result.total_animations, 0);
    assert!(result.animations.is_empty());
}
