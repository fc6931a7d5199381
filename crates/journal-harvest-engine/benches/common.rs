// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_journal(entries: usize) -> String {
    let base = "- Standup notes\n\tcollapsed:: true\n\t- #project/apollo\n\t- discussed the rollout\n\t\t- owner: me\n- Lunch\n- Read about lifetimes\n    - #get/rust\n    - ![diagram](../assets/lifetimes.png)\n";
    let mut content = String::from("title:: 2025_03_14\n");
    content.push_str(&base.repeat(entries));
    content
}

#[allow(dead_code)]
pub fn generate_deep_journal(entries: usize, depth: usize) -> String {
    let mut content = String::new();

    for entry in 0..entries {
        content.push_str(&format!("- Entry {entry}\n"));
        for level in 1..=depth {
            let indent = "\t".repeat(level);
            content.push_str(&format!("{indent}- level {level}\n"));
            if level % 3 == 0 {
                content.push_str(&format!("{indent}- #ref/deep\n"));
            }
        }
    }

    content
}
