/// Custom uniffi-bindgen binary for generating language bindings.
///
/// Generates Kotlin/Swift/Python bindings from the compiled dynshort-uniffi
/// cdylib.
///
/// Usage:
///   cargo run -p dynshort-uniffi --features cli --bin dynshort-uniffi-bindgen -- \
///     generate --library -l kotlin -o bindings/kotlin \
///     target/release/libdynshort_uniffi.so
fn main() {
    uniffi::uniffi_bindgen_main();
}
