use std::fs;

use tempfile::tempdir;

use assetgen_core::discovery::DirDiscovery;
use assetgen_core::error::AssetError;
use assetgen_core::shaders::{load_shaders, write_shaders};

#[test]
fn embeds_matching_shaders_in_name_order() {
    let tmp = tempdir().expect("tempdir");
    let dir = tmp.path().join("shaders");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("tonemap.wgsl"), "fn tonemap() {}").expect("write");
    fs::write(dir.join("blur.h.wgsl"), "fn blur() {}").expect("write");
    fs::write(dir.join("notes.txt"), "not a shader").expect("write");

    let shaders = load_shaders(&DirDiscovery::new(&dir, ["wgsl"])).expect("load");
    let symbols: Vec<&str> = shaders.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["blur_h", "tonemap"]);

    let cpp = tmp.path().join("shaders.cpp");
    let hpp = tmp.path().join("shaders.h");
    write_shaders(&shaders, &cpp, &hpp).expect("write");

    let header = fs::read_to_string(&hpp).expect("header");
    assert!(header.starts_with("#pragma once\n"));
    assert!(header.contains("extern const char blur_h[];"));
    assert!(header.contains("extern const char tonemap[];"));

    let source = fs::read_to_string(&cpp).expect("source");
    assert!(source.starts_with(&format!("#include \"{}\"\n", hpp.display())));
    assert!(source.contains("const char tonemap[] = R\"__shader__(fn tonemap() {})__shader__\";"));
    assert!(!source.contains("not a shader"));
}

#[test]
fn empty_directory_yields_empty_but_valid_files() {
    let tmp = tempdir().expect("tempdir");
    let cpp = tmp.path().join("s.cpp");
    let hpp = tmp.path().join("s.h");

    let shaders = load_shaders(&DirDiscovery::new(tmp.path(), ["wgsl"])).expect("load");
    assert!(shaders.is_empty());
    write_shaders(&shaders, &cpp, &hpp).expect("write");

    assert_eq!(fs::read_to_string(&hpp).expect("header"), "#pragma once\n");
    assert_eq!(
        fs::read_to_string(&cpp).expect("source"),
        format!("#include \"{}\"\n", hpp.display())
    );
}

#[test]
fn colliding_symbols_are_rejected() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join("a.b.wgsl"), "").expect("write");
    fs::write(tmp.path().join("a_b.wgsl"), "").expect("write");

    let err = load_shaders(&DirDiscovery::new(tmp.path(), ["wgsl"])).unwrap_err();
    match err {
        AssetError::DuplicateSymbol { symbol, .. } => assert_eq!(symbol, "a_b"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_directory_is_an_error() {
    let err = load_shaders(&DirDiscovery::new("/nonexistent/assetgen-shaders", ["wgsl"]))
        .unwrap_err();
    assert!(matches!(err, AssetError::MissingDir(_)));
}
