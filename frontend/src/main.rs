//! Entry point for the WASM application

pub fn main() {
    askpdf_frontend::run();
}
