use std::path::PathBuf;

use crate::{ArenaError, Error};

#[test]
fn error_messages_name_the_offender() {
    let err = Error::LoadFailed {
        path: PathBuf::from("/tmp/libclang.so"),
        reason: "bad ELF".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "failed to load libclang from `/tmp/libclang.so`: bad ELF"
    );

    let err = Error::MissingSymbol {
        name: "clang_visitChildren",
        path: PathBuf::from("/lib/libclang.so"),
    };
    assert!(err.to_string().contains("clang_visitChildren"));

    let err = Error::ParseFailed {
        path: "point.c".to_string(),
    };
    assert!(err.to_string().contains("point.c"));

    let err = Error::ReparseFailed { code: 3 };
    assert!(err.to_string().contains('3'));
}

#[test]
fn arena_errors_convert() {
    let err: Error = ArenaError::InteriorNul { position: 2 }.into();
    assert!(err.to_string().contains("position 2"));
}

#[test]
fn not_loaded_error_points_at_load() {
    assert!(Error::NotLoaded.to_string().contains("cindex::load()"));
}
