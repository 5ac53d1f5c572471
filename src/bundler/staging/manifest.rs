//! Application manifest loading and merging.
//!
//! The base manifest (project root) is authoritative for `dependencies`;
//! the template manifest (app directory) is authoritative for everything
//! else except `name` and `version`, which come from the product identity.

use crate::bundler::{
    Error, Result,
    error::ErrorExt,
    settings::CanonicalVersion,
    utils::fs,
};
use serde_json::{Map, Value};
use std::path::Path;

/// A JSON object manifest, keys in file order.
pub type Manifest = Map<String, Value>;

/// Reads a manifest, which must be a JSON object.
///
/// # Errors
///
/// IOError if the file cannot be read, ConfigError if it is not a JSON
/// object.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let raw = std::fs::read_to_string(path).fs_context("reading manifest", path)?;

    let value: Value = serde_json::from_str(&raw).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        reason: format!("malformed JSON: {e}"),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::Config {
            path: path.to_path_buf(),
            reason: format!("expected a JSON object, found {}", json_type(&other)),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Merges the template manifest with the base manifest's dependencies.
///
/// Keys keep the template's order; `name`, `version` and `dependencies`
/// are replaced in place when the template has them and appended
/// otherwise. If the base manifest has no dependencies, the merged
/// manifest has none either.
pub fn merge_manifests(
    base: &Manifest,
    mut template: Manifest,
    product_name: &str,
    version: &CanonicalVersion,
) -> Manifest {
    template.insert("name".into(), Value::String(product_name.into()));
    template.insert("version".into(), Value::String(version.version_string()));

    match base.get("dependencies") {
        Some(deps) => {
            template.insert("dependencies".into(), deps.clone());
        }
        None => {
            template.shift_remove("dependencies");
        }
    }

    template
}

/// Writes a manifest as two-space indented JSON, replacing any existing file.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write_file(path, json.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Manifest {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test manifests are objects"),
        }
    }

    fn version() -> CanonicalVersion {
        CanonicalVersion::new(vec![4, 2, 0, 6100]).unwrap()
    }

    #[test]
    fn overrides_identity_and_dependencies() {
        let base = object(json!({
            "name": "switchhosts-dev",
            "version": "0.0.0",
            "dependencies": { "lodash": "^4.17.21" },
            "devDependencies": { "electron": "^30.0.0" }
        }));
        let template = object(json!({
            "name": "app",
            "version": "9.9.9",
            "main": "main.js",
            "dependencies": { "left-pad": "1.0.0" }
        }));

        let merged = merge_manifests(&base, template, "SwitchHosts", &version());

        assert_eq!(
            Value::Object(merged),
            json!({
                "name": "SwitchHosts",
                "version": "4.2.0",
                "main": "main.js",
                "dependencies": { "lodash": "^4.17.21" }
            })
        );
    }

    #[test]
    fn keeps_template_key_order() {
        let base = object(json!({ "dependencies": {} }));
        let template = object(json!({
            "main": "main.js",
            "name": "app",
            "author": "oldj",
            "version": "1.0.0"
        }));

        let merged = merge_manifests(&base, template, "SwitchHosts", &version());
        let keys: Vec<_> = merged.keys().map(String::as_str).collect();

        assert_eq!(keys, ["main", "name", "author", "version", "dependencies"]);
    }

    #[test]
    fn drops_template_dependencies_when_base_has_none() {
        let base = object(json!({ "name": "root" }));
        let template = object(json!({ "dependencies": { "left-pad": "1.0.0" } }));

        let merged = merge_manifests(&base, template, "SwitchHosts", &version());

        assert!(!merged.contains_key("dependencies"));
    }

    #[test]
    fn rejects_non_object_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("package.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let err = load_manifest(&path).unwrap_err();

        assert_eq!(err.kind(), crate::bundler::ErrorKind::Config);
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn rejects_malformed_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("package.json");
        std::fs::write(&path, "{ \"name\": ").unwrap();

        assert_eq!(
            load_manifest(&path).unwrap_err().kind(),
            crate::bundler::ErrorKind::Config
        );
    }
}
