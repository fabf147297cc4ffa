use std::process::Command;

#[test]
fn prints_reference_cost() {
    let output = Command::new(env!("CARGO_BIN_EXE_bitmask-assignment"))
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Minimum Assignment Cost: 9\n"
    );
}
