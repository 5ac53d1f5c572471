//! Build descriptor assembly.

use super::{
    ArtifactNaming, BuildDescriptor, CommonConfig, DesktopEntry, DmgContent, DmgSettings,
    DmgWindow, ExtendInfo, LinuxSettings, MacOsSettings, NsisSettings, PortableSettings,
    WindowsSettings,
};

const MAC_ICON: &str = "assets/app.icns";
const WIN_ICON: &str = "assets/app.ico";
const INSTALLER_ICON: &str = "assets/installer-icon.ico";
const LINUX_ICON: &str = "assets/app.png";
const DMG_BACKGROUND: &str = "assets/dmg-bg.png";
const ENTITLEMENTS: &str = "scripts/entitlements.mac.plist";
const PROVISIONING_PROFILE: &str = "scripts/app.provisionprofile";

/// Assembles the build descriptor for every platform.
///
/// Pure: the same inputs always produce an equal descriptor. A missing
/// `identity` is not an error here; the backend decides what unsigned
/// macOS builds mean.
///
/// # Examples
///
/// ```no_run
/// use switchhosts_make::bundler::{assemble, CommonConfig};
///
/// # fn example(common: CommonConfig) {
/// let languages = vec!["en".to_string(), "de".to_string()];
/// let descriptor = assemble(&common, None, &languages);
/// assert!(descriptor.mac.is_some());
/// # }
/// ```
pub fn assemble(
    common: &CommonConfig,
    identity: Option<&str>,
    languages: &[String],
) -> BuildDescriptor {
    let package = &common.package;
    let overrides = &common.overrides;
    let naming = ArtifactNaming::standard();

    let mac = MacOsSettings {
        distribution_type: "distribution".into(),
        category: overrides.mac_category.clone(),
        icon: MAC_ICON.into(),
        gatekeeper_assess: false,
        electron_languages: languages.to_vec(),
        identity: identity.map(str::to_string),
        hardened_runtime: true,
        entitlements: ENTITLEMENTS.into(),
        entitlements_inherit: ENTITLEMENTS.into(),
        provisioning_profile: PROVISIONING_PROFILE.into(),
        extend_info: ExtendInfo {
            uses_non_exempt_encryption: false,
            bundle_localizations: languages.to_vec(),
            development_region: "en".into(),
        },
        artifact_name: naming.mac.clone(),
    };

    let dmg = DmgSettings {
        background: DMG_BACKGROUND.into(),
        icon_size: 160,
        window: DmgWindow {
            width: 600,
            height: 420,
        },
        contents: vec![
            DmgContent::app(150, 200),
            DmgContent::link(450, 200, "/Applications"),
        ],
        sign: false,
        artifact_name: naming.mac.clone(),
    };

    let linux = LinuxSettings {
        icon: LINUX_ICON.into(),
        artifact_name: naming.linux.clone(),
        category: overrides.linux_category.clone(),
        synopsis: overrides.synopsis.clone(),
        desktop: DesktopEntry {
            name: package.product_name.clone(),
            entry_type: "Application".into(),
            generic_name: overrides.synopsis.clone(),
        },
    };

    BuildDescriptor {
        app_id: package.app_id.clone(),
        product_name: package.product_name.clone(),
        copyright: common.copyright(),
        build_version: package.version.build_number().to_string(),
        version: package.version.version_string(),
        directories: common.directories.clone(),
        electron_download: common.electron_download.clone(),
        mac: Some(mac),
        dmg: Some(dmg),
        win: Some(WindowsSettings {
            icon: WIN_ICON.into(),
        }),
        nsis: Some(NsisSettings {
            installer_icon: INSTALLER_ICON.into(),
            one_click: false,
            allow_to_change_installation_directory: true,
            artifact_name: naming.windows_installer.clone(),
        }),
        portable: Some(PortableSettings {
            artifact_name: naming.windows_portable,
        }),
        linux: Some(linux),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{
        ErrorKind,
        settings::{
            CanonicalVersion, Directories, ElectronDownload, PackageSettings, PlatformOverrides,
        },
        targets::{ReleaseProfile, resolve},
    };

    fn common() -> CommonConfig {
        CommonConfig {
            package: PackageSettings {
                product_name: "SwitchHosts".into(),
                app_id: "SwitchHosts".into(),
                version: CanonicalVersion::new(vec![1, 2, 3, 45]).unwrap(),
            },
            copyright_year: 2026,
            directories: Directories::default(),
            electron_download: Some(ElectronDownload {
                cache: "/home/builder/.electron".into(),
                mirror: "https://npm.taobao.org/mirrors/electron/".into(),
            }),
            overrides: PlatformOverrides::default(),
        }
    }

    fn languages() -> Vec<String> {
        ["en", "fr", "zh_CN", "de"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn assembly_is_deterministic() {
        let a = assemble(&common(), Some("Dev ID"), &languages());
        let b = assemble(&common(), Some("Dev ID"), &languages());
        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }

    #[test]
    fn common_fields_come_from_inputs() {
        let descriptor = assemble(&common(), None, &languages());
        assert_eq!(descriptor.copyright, "Copyright © 2026");
        assert_eq!(descriptor.build_version, "45");
        assert_eq!(descriptor.version, "1.2.3");
        assert_eq!(descriptor.directories.app, "build");
        assert_eq!(descriptor.directories.output, "dist");
    }

    #[test]
    fn missing_identity_still_assembles() {
        let descriptor = assemble(&common(), None, &languages());
        let mac = descriptor.mac.as_ref().unwrap();
        assert!(mac.identity.is_none());

        let json: serde_json::Value = serde_json::from_str(&descriptor.to_json().unwrap()).unwrap();
        assert!(json["mac"].get("identity").is_none());
        assert_eq!(json["mac"]["hardenedRuntime"], true);
    }

    #[test]
    fn identity_is_passed_through() {
        let descriptor = assemble(&common(), Some("Developer ID Application: oldj"), &languages());
        assert_eq!(
            descriptor.mac.unwrap().identity.as_deref(),
            Some("Developer ID Application: oldj")
        );
    }

    #[test]
    fn naming_templates_are_shared() {
        let descriptor = assemble(&common(), None, &languages());
        assert_eq!(
            descriptor.mac.as_ref().unwrap().artifact_name,
            descriptor.dmg.as_ref().unwrap().artifact_name
        );
        assert_eq!(
            descriptor.nsis.unwrap().artifact_name.as_str(),
            "${productName}_installer_${arch}_${version}(${buildVersion}).${ext}"
        );
        assert_eq!(
            descriptor.portable.unwrap().artifact_name.as_str(),
            "${productName}_portable_${arch}_${version}(${buildVersion}).${ext}"
        );
    }

    #[test]
    fn serializes_backend_field_names() {
        let descriptor = assemble(&common(), None, &languages());
        let json: serde_json::Value = serde_json::from_str(&descriptor.to_json().unwrap()).unwrap();

        assert_eq!(json["appId"], "SwitchHosts");
        assert_eq!(json["buildVersion"], "45");
        assert!(json.get("version").is_none());
        assert_eq!(json["directories"]["buildResources"], "build");
        assert_eq!(json["mac"]["type"], "distribution");
        assert_eq!(json["mac"]["extendInfo"]["CFBundleLocalizations"][2], "zh_CN");
        assert_eq!(json["mac"]["extendInfo"]["ITSAppUsesNonExemptEncryption"], false);
        assert_eq!(json["dmg"]["window"]["height"], 420);
        assert_eq!(json["dmg"]["contents"][1]["type"], "link");
        assert!(json["dmg"]["contents"][0].get("type").is_none());
        assert_eq!(json["nsis"]["allowToChangeInstallationDirectory"], true);
        assert_eq!(json["linux"]["desktop"]["GenericName"], json["linux"]["synopsis"]);
        assert_eq!(json["linux"]["desktop"]["Type"], "Application");
    }

    #[test]
    fn assembled_descriptor_covers_every_profile() {
        let descriptor = assemble(&common(), None, &languages());
        for profile in [
            ReleaseProfile::Mac,
            ReleaseProfile::MacDev,
            ReleaseProfile::Win,
            ReleaseProfile::Linux,
            ReleaseProfile::All,
        ] {
            descriptor.ensure_covers(&resolve(profile)).unwrap();
        }
    }

    #[test]
    fn windows_release_does_not_need_mac_or_linux_sections() {
        let mut descriptor = assemble(&common(), None, &languages());
        descriptor.mac = None;
        descriptor.dmg = None;
        descriptor.linux = None;
        descriptor.ensure_covers(&resolve(ReleaseProfile::Win)).unwrap();
    }

    #[test]
    fn missing_section_is_a_resolution_error() {
        let mut descriptor = assemble(&common(), None, &languages());
        descriptor.portable = None;
        let err = descriptor
            .ensure_covers(&resolve(ReleaseProfile::Win))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resolution);
        assert!(err.to_string().contains("`portable`"));
    }

    #[test]
    fn plans_artifact_names() {
        let descriptor = assemble(&common(), None, &languages());
        let names: Vec<_> = descriptor
            .planned_artifacts(&resolve(ReleaseProfile::MacDev))
            .unwrap()
            .into_iter()
            .map(|a| a.file_name.unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "SwitchHosts_mac_x64_1.2.3(45).dmg",
                "SwitchHosts_mac_arm64_1.2.3(45).dmg",
            ]
        );

        let win: Vec<_> = descriptor
            .planned_artifacts(&resolve(ReleaseProfile::Win))
            .unwrap()
            .into_iter()
            .map(|a| a.file_name.unwrap())
            .collect();
        assert_eq!(
            win,
            vec![
                "SwitchHosts_installer_ia32_1.2.3(45).exe",
                "SwitchHosts_installer_x64_1.2.3(45).exe",
                "SwitchHosts_portable_ia32_1.2.3(45).exe",
            ]
        );
    }

    #[test]
    fn backend_default_target_has_template_but_no_name() {
        let descriptor = assemble(&common(), None, &languages());
        let planned = descriptor
            .planned_artifacts(&resolve(ReleaseProfile::Mac))
            .unwrap();
        assert_eq!(planned.len(), 1);
        assert!(planned[0].file_name.is_none());
        assert_eq!(planned[0].template, descriptor.mac.unwrap().artifact_name);
    }
}
