//! Word-Counter CLI (for testing purposes only)
//! The main interface is through WASM bindings.

fn main() {
    println!("Word-Counter");
    println!("============");
    println!();
    println!("This is a library crate. To use it:");
    println!();
    println!("  1. Build WASM: wasm-pack build --target web");
    println!("  2. Load the module in a page with #id_content and #word-count");
    println!("     elements and call boot()");
    println!();
    println!("For testing the core library:");
    println!("  cargo test");
}
