//! Builders for each block of the Android build script.

use std::path::Path;

use gradlegen_core::collapse_path;
use gradlegen_manifest::{
    AndroidConfig, BuildType, Dependency, Manifest, NdkConfig, SourceGroup, SourcesConfig,
};
use gradlegen_script::{
    Assignment, Block, Comment, Equality, FunctionCall, ListValue, Quote, SimpleValue,
};

use crate::{default_architecture, default_supported_abis, flags_call};

/// The first line ends in a run of trailing spaces.
const ABI_FILTER_NOTE: &str = concat!(
    "for detailed abiFilter descriptions, refer to \"Supported ABIs\" @ ",
    "                                                         ",
    "\nhttps://developer.android.com/ndk/guides/abis.html#sa"
);
const ALL_FLAVOR_NOTE: &str = "To include all cpu architectures, leaves abiFilters empty";

/// `repositories { jcenter() ... }`
pub(crate) fn repositories_block(repositories: &[String]) -> Block {
    let mut block = Block::new("repositories");
    for repository in repositories {
        block.append_child(FunctionCall::new(repository.as_str()));
    }
    block
}

/// `buildscript { repositories {..} dependencies {..} }`
pub(crate) fn buildscript_block(repositories: &[String], dependencies: &[Dependency]) -> Block {
    let mut deps = Block::new("dependencies");
    for dependency in dependencies {
        deps.append_child(Assignment::with_equality(
            dependency.configuration.as_str(),
            SimpleValue::quoted(dependency.notation.as_str()),
            Equality::DoNotUse,
        ));
    }

    Block::new("buildscript")
        .child(repositories_block(repositories))
        .child(deps)
}

/// `allprojects { repositories {..} }`
pub(crate) fn allprojects_block(repositories: &[String]) -> Block {
    Block::new("allprojects").child(repositories_block(repositories))
}

/// `<model> { android {..} android.sources {..} }`
pub(crate) fn model_block(manifest: &Manifest, base_dir: &Path) -> Block {
    Block::new(manifest.project.model.as_str())
        .child(android_block(manifest, base_dir))
        .child(android_sources_block(
            &manifest.sources,
            manifest.android.ndk.as_ref(),
            base_dir,
        ))
}

fn android_block(manifest: &Manifest, base_dir: &Path) -> Block {
    let android = &manifest.android;
    let mut block = Block::new("android")
        .child(Assignment::new(
            "compileSdkVersion",
            SimpleValue::raw(android.compile_sdk_version.as_str()),
        ))
        .child(Assignment::new(
            "buildToolsVersion",
            SimpleValue::quoted(android.build_tools_version.as_str()),
        ))
        .child(default_config_block(android));

    if let Some(ndk) = &android.ndk {
        block.append_child(ndk_block(ndk, &manifest.project.name, base_dir));
    }

    block
        .child(build_types_block(
            manifest.build_types.iter().map(|(n, t)| (n.as_str(), t)),
            android.minify_enabled,
        ))
        .child(product_flavors_block(android))
}

fn default_config_block(android: &AndroidConfig) -> Block {
    Block::new("defaultConfig")
        .child(Assignment::new(
            "applicationId",
            SimpleValue::quoted(android.application_id.as_str()),
        ))
        .child(Assignment::new(
            "minSdkVersion.apiLevel",
            SimpleValue::raw(android.min_sdk_api_level.as_str()),
        ))
        .child(Assignment::new(
            "targetSdkVersion.apiLevel",
            SimpleValue::raw(android.target_sdk_api_level.as_str()),
        ))
}

fn ndk_block(ndk: &NdkConfig, project_name: &str, base_dir: &Path) -> Block {
    let includes = ndk
        .include_dirs
        .iter()
        .map(|dir| format!("-I{}", collapse_path(dir, base_dir).display()));

    Block::new("ndk")
        .child(Assignment::new(
            "platformVersion",
            SimpleValue::raw(ndk.platform_version.as_str()),
        ))
        .child(Assignment::new(
            "moduleName",
            SimpleValue::quoted(ndk.module_name_for(project_name)),
        ))
        .child(Assignment::new(
            "toolchain",
            SimpleValue::quoted(ndk.toolchain.as_str()),
        ))
        .child(flags_call(&ndk.flags, includes))
}

/// One block per build type; `minifyEnabled` only when minification is on globally.
pub(crate) fn build_types_block<'a>(
    build_types: impl IntoIterator<Item = (&'a str, &'a BuildType)>,
    minify_enabled: bool,
) -> Block {
    let mut block = Block::new("buildTypes");
    for (name, build_type) in build_types {
        let mut config = Block::new(name);
        if !build_type.flags.is_empty() {
            config.append_child(flags_call(&build_type.flags, Vec::<String>::new()));
        }
        if minify_enabled {
            if build_type.config_type.is_none() && build_type.minify_enabled.is_none() {
                tracing::debug!(
                    build_type = name,
                    detected = %build_type.resolve_config_type(name),
                    "config type not set, detected from name"
                );
            }
            config.append_child(Assignment::new(
                "minifyEnabled",
                build_type.resolve_minify(name),
            ));
        }
        block.append_child(config);
    }
    block
}

/// `productFlavors { create("<arch>") {..} ... create('all') }`
pub(crate) fn product_flavors_block(android: &AndroidConfig) -> Block {
    let mut block = Block::new("productFlavors").child(Comment::new(ABI_FILTER_NOTE));

    let supported = android
        .supported_abis
        .clone()
        .unwrap_or_else(default_supported_abis);
    for abi in &supported {
        let arch = android
            .abi_architectures
            .get(abi)
            .map(String::as_str)
            .or_else(|| default_architecture(abi))
            .filter(|arch| !arch.is_empty());
        let Some(arch) = arch else {
            tracing::warn!(abi = %abi, "no architecture known for ABI, skipping flavor");
            continue;
        };
        block.append_child(Block::new(format!("create(\"{arch}\")")).child(
            FunctionCall::with_argument("ndk.abiFilters.add", SimpleValue::quoted(abi.as_str())),
        ));
    }

    block
        .child(Comment::new(ALL_FLAVOR_NOTE))
        .child(FunctionCall::with_argument("create", SimpleValue::quoted("all")))
}

/// `android.sources { main { <group> { source { srcDirs = [..] } } } }`
///
/// Without explicit `jni` dirs, a native project lists its include dirs there.
pub(crate) fn android_sources_block(
    sources: &SourcesConfig,
    ndk: Option<&NdkConfig>,
    base_dir: &Path,
) -> Block {
    let mut main = Block::new("main");
    for group in SourceGroup::ALL {
        let mut listed = sources.dirs(group);
        if group == SourceGroup::Jni && listed.is_empty() {
            if let Some(ndk) = ndk {
                listed = &ndk.include_dirs;
            }
        }
        let dirs: Vec<String> = listed
            .iter()
            .map(|dir| collapse_path(dir, base_dir).display().to_string())
            .collect();
        if dirs.is_empty() {
            continue;
        }
        main.append_child(Block::new(group.as_str()).child(Block::new("source").child(
            Assignment::new("srcDirs", ListValue::from_simples(dirs, Quote::Simple)),
        )));
    }
    Block::new("android.sources").child(main)
}
