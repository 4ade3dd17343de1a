fn main() {
    // UniFFI scaffolding is generated via proc-macros in src/lib.rs and the
    // model/bindings modules - no UDL file needed
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
