//! Platform locator: find a libclang shared library on well-known paths.
//!
//! Checked in order: the `CINDEX_LIBCLANG_PATH` environment variable,
//! then a fixed per-OS candidate list (versioned LLVM package paths on
//! Linux, Homebrew and Xcode toolchains on macOS, Program Files on
//! Windows). The first existing path wins; no filesystem search beyond
//! the list.

use std::path::PathBuf;

use crate::{Error, Result};

/// Environment variable naming an explicit library path, tried first.
pub const ENV_LIBCLANG_PATH: &str = "CINDEX_LIBCLANG_PATH";

// Newest first; distro packages keep older majors around for a long time.
#[cfg(target_os = "linux")]
const LLVM_MAJORS: std::ops::RangeInclusive<u32> = 10..=21;

#[cfg(target_os = "linux")]
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for major in LLVM_MAJORS.rev() {
        paths.push(PathBuf::from(format!(
            "/usr/lib/llvm-{major}/lib/libclang.so.1"
        )));
        paths.push(PathBuf::from(format!(
            "/usr/lib/llvm-{major}/lib/libclang.so"
        )));
        paths.push(PathBuf::from(format!(
            "/usr/lib/x86_64-linux-gnu/libclang-{major}.so.1"
        )));
    }
    paths.push(PathBuf::from("/usr/lib/libclang.so"));
    paths.push(PathBuf::from("/usr/lib64/libclang.so"));
    paths.push(PathBuf::from("/usr/local/lib/libclang.so"));
    paths
}

#[cfg(target_os = "macos")]
pub fn candidate_paths() -> Vec<PathBuf> {
    [
        "/opt/homebrew/opt/llvm/lib/libclang.dylib",
        "/usr/local/opt/llvm/lib/libclang.dylib",
        "/Library/Developer/CommandLineTools/usr/lib/libclang.dylib",
        "/Applications/Xcode.app/Contents/Developer/Toolchains/XcodeDefault.xctoolchain/usr/lib/libclang.dylib",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(target_os = "windows")]
pub fn candidate_paths() -> Vec<PathBuf> {
    [
        r"C:\Program Files\LLVM\bin\libclang.dll",
        r"C:\Program Files (x86)\LLVM\bin\libclang.dll",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn candidate_paths() -> Vec<PathBuf> {
    Vec::new()
}

/// Install command hint for the current OS family, embedded in the
/// not-found error.
pub fn install_hint() -> &'static str {
    if cfg!(target_os = "linux") {
        "install it with `apt install libclang-dev` (or your distro's equivalent), \
         or set CINDEX_LIBCLANG_PATH"
    } else if cfg!(target_os = "macos") {
        "install it with `brew install llvm`, or set CINDEX_LIBCLANG_PATH"
    } else if cfg!(target_os = "windows") {
        "install LLVM from https://releases.llvm.org, or set CINDEX_LIBCLANG_PATH"
    } else {
        "set CINDEX_LIBCLANG_PATH to the library file"
    }
}

/// Locate a library file, or fail with the per-OS install hint.
pub fn find_library() -> Result<PathBuf> {
    if let Ok(explicit) = std::env::var(ENV_LIBCLANG_PATH) {
        let path = PathBuf::from(explicit);
        if path.exists() {
            log::debug!("using libclang from {ENV_LIBCLANG_PATH}: {}", path.display());
            return Ok(path);
        }
        log::warn!(
            "{ENV_LIBCLANG_PATH} points at `{}` which does not exist; falling back to well-known paths",
            path.display()
        );
    }

    let candidates = candidate_paths();
    for candidate in &candidates {
        if candidate.exists() {
            log::debug!("found libclang at {}", candidate.display());
            return Ok(candidate.clone());
        }
    }
    Err(Error::LibraryNotFound {
        searched: candidates.len(),
        hint: install_hint(),
    })
}
