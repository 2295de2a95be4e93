use chrono::{SecondsFormat, Utc};

fn main() {
    // shown in the footer as "Last built"
    let built = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILD_TIME={built}");

    // site.json and the project markdown are embedded at compile time
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
