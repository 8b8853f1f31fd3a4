// This binary crate is intentionally minimal.
// All loss-function logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example regression
fn main() {
    println!("lossfn: a from-scratch loss function library in Rust.");
    println!("Run `cargo run --example regression` to see the house-price demo.");
}
