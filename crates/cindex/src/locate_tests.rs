use crate::locate::{candidate_paths, install_hint};

#[test]
fn candidate_list_is_fixed_and_nonempty() {
    let paths = candidate_paths();
    assert!(!paths.is_empty());
    // Same list every call: it is a fixed table, not a filesystem scan.
    assert_eq!(paths, candidate_paths());
}

#[cfg(target_os = "linux")]
#[test]
fn linux_candidates_prefer_newer_majors() {
    let paths = candidate_paths();
    let pos21 = paths
        .iter()
        .position(|p| p.to_str().unwrap().contains("llvm-21"))
        .unwrap();
    let pos10 = paths
        .iter()
        .position(|p| p.to_str().unwrap().contains("llvm-10"))
        .unwrap();
    assert!(pos21 < pos10);
}

#[test]
fn install_hint_names_the_override_variable() {
    assert!(install_hint().contains("CINDEX_LIBCLANG_PATH"));
}
