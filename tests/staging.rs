//! Integration tests for build tree staging.

mod common;

use serde_json::{Value, json};
use std::fs;
use switchhosts_make::bundler::{
    CanonicalVersion, ErrorKind, StagedAsset, StagingLayout, settings::Directories, stage,
};

fn version() -> CanonicalVersion {
    CanonicalVersion::new(vec![1, 2, 3, 45]).unwrap()
}

#[test]
fn stages_assets_and_merged_manifest() {
    let (_tmp, root) = common::fixture_project();
    let layout = StagingLayout::new(&root, &Directories::default());

    stage(&layout, "SwitchHosts", &version()).unwrap();

    assert_eq!(
        fs::read(root.join("build/assets/app.png")).unwrap(),
        fs::read(root.join("assets/app.png")).unwrap()
    );
    assert!(root.join("dist").is_dir());

    let merged: Value =
        serde_json::from_str(&fs::read_to_string(root.join("build/package.json")).unwrap())
            .unwrap();
    assert_eq!(
        merged,
        json!({
            "name": "SwitchHosts",
            "version": "1.2.3",
            "main": "main.js",
            "author": "oldj <oldj.wu@gmail.com>",
            "dependencies": {
                "electron-window-state": "^5.0.3",
                "lodash": "^4.17.21"
            }
        })
    );
}

#[test]
fn clears_stale_output() {
    let (_tmp, root) = common::fixture_project();
    fs::create_dir_all(root.join("dist/mac")).unwrap();
    fs::write(root.join("dist/SwitchHosts_mac_x64_0.9.0(1).dmg"), b"old").unwrap();
    fs::write(root.join("dist/mac/leftover"), b"old").unwrap();

    let layout = StagingLayout::new(&root, &Directories::default());
    stage(&layout, "SwitchHosts", &version()).unwrap();

    assert_eq!(fs::read_dir(root.join("dist")).unwrap().count(), 0);
}

#[test]
fn second_run_leaves_the_same_tree() {
    let (_tmp, root) = common::fixture_project();
    let layout = StagingLayout::new(&root, &Directories::default());

    stage(&layout, "SwitchHosts", &version()).unwrap();
    let first_build = common::snapshot(&root.join("build"));
    let first_dist = common::snapshot(&root.join("dist"));

    stage(&layout, "SwitchHosts", &version()).unwrap();

    assert_eq!(common::snapshot(&root.join("build")), first_build);
    assert_eq!(common::snapshot(&root.join("dist")), first_dist);
}

#[test]
fn overwrites_existing_staged_manifest() {
    let (_tmp, root) = common::fixture_project();
    fs::create_dir_all(root.join("build")).unwrap();
    fs::write(root.join("build/package.json"), "not json at all").unwrap();

    let layout = StagingLayout::new(&root, &Directories::default());
    stage(&layout, "SwitchHosts", &version()).unwrap();

    let merged: Value =
        serde_json::from_str(&fs::read_to_string(root.join("build/package.json")).unwrap())
            .unwrap();
    assert_eq!(merged["version"], "1.2.3");
}

#[test]
fn missing_asset_aborts_with_io_error() {
    let (_tmp, root) = common::fixture_project();
    fs::remove_file(root.join("assets/app.png")).unwrap();

    let layout = StagingLayout::new(&root, &Directories::default());
    let err = stage(&layout, "SwitchHosts", &version()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!root.join("build/package.json").exists());
}

#[test]
fn directory_assets_are_copied_recursively() {
    let (_tmp, root) = common::fixture_project();
    fs::create_dir_all(root.join("assets/tray/dark")).unwrap();
    fs::write(root.join("assets/tray/dark/icon.png"), b"tray").unwrap();

    let layout = StagingLayout::new(&root, &Directories::default())
        .with_assets([StagedAsset::new("assets/tray", "build/assets/tray")]);
    stage(&layout, "SwitchHosts", &version()).unwrap();

    assert_eq!(
        fs::read(root.join("build/assets/tray/dark/icon.png")).unwrap(),
        b"tray"
    );
}

#[test]
fn malformed_template_manifest_is_config_error() {
    let (_tmp, root) = common::fixture_project();
    fs::write(root.join("app/package.json"), "{ \"name\": \"app\",").unwrap();

    let layout = StagingLayout::new(&root, &Directories::default());
    let err = stage(&layout, "SwitchHosts", &version()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Config);
}
