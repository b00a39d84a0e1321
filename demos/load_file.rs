//! Returning a Closed Set of Outcomes
//!
//! `load_from_file` yields either the content or an error code; the caller
//! handles both with one closure each.

use tola_variant::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Errc {
    PermissionDenied = 13,
    NotFound = 2,
}

#[derive(Debug, Variant)]
#[variant(no_default)]
enum Loaded {
    Content(String),
    Failure(Errc),
}

fn load_from_file(filename: &str) -> Loaded {
    match filename {
        "secret" => Loaded::from(Errc::PermissionDenied),
        "" => Loaded::from(Errc::NotFound),
        _ => Loaded::from(format!("content of {}", filename)),
    }
}

fn report(loaded: &Loaded) -> String {
    loaded.visit_with(
        |content| format!("Success: {}", content),
        |errc| format!("ERROR #{}", *errc as i32),
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Result Processing ===\n");

    for name in ["data.txt", "secret", ""] {
        let loaded = load_from_file(name);
        println!("  {:>10} -> {}", format!("{:?}", name), report(&loaded));
    }

    assert_eq!(report(&load_from_file("secret")), "ERROR #13");
    assert_eq!(report(&load_from_file("a")), "Success: content of a");

    // Extraction under a false assumption is a recoverable error.
    let failed = load_from_file("secret");
    match failed.get::<String>() {
        Ok(content) => println!("  unexpected content: {}", content),
        Err(err) => println!("  {}", err),
    }
    assert_eq!(failed.get::<Errc>(), Ok(&Errc::PermissionDenied));

    println!("\n=== SUCCESS ===");
}
