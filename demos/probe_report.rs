//! Walk-through of the array helpers and probes against a few hosts.
//!
//! Run with: cargo run --example probe_report

use helperkit::{
    env::ambient, join_custom, pick_one, remove_all, remove_where, EnvSnapshot, ProbeReport,
    SequenceExt, Signal, SignalValue,
};

fn hosts() -> Vec<(&'static str, EnvSnapshot)> {
    vec![
        ("native process", EnvSnapshot::default()),
        (
            "desktop chrome",
            EnvSnapshot::new()
                .with_window()
                .with_navigator_user_agent(
                    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
                )
                .with_flag(Signal::Chrome)
                .with_flag(Signal::ChromeRuntime)
                .with_flag(Signal::Css)
                .with_document_hidden(false),
        ),
        (
            "firefox, background tab",
            EnvSnapshot::new()
                .with_window()
                .with_signal(Signal::InstallTrigger, SignalValue::object())
                .with_document_hidden(true),
        ),
        (
            "weex on android",
            EnvSnapshot::new().with_weex_platform("Android"),
        ),
    ]
}

fn main() {
    println!("=== Array helpers ===\n");

    let mut items = vec![2, 3, 5, 6];
    let removed = remove_where(&mut items, |item, _| *item == 3);
    println!("remove_where(== 3): removed {:?}, left {:?}", removed, items);

    let picked = pick_one(&mut items, Some(0));
    println!("pick_one(0):        picked {:?}, left {:?}", picked, items);

    let values = vec![1, 2, 2, 3];
    println!("remove_all(2):      {:?} (input still {:?})", remove_all(&values, &2), values);

    let mut deck: Vec<u32> = (1..=8).collect();
    deck.shuffle_in_place();
    println!("shuffle:            {:?}", deck);

    let names = ["ada", "grace", "linus"];
    println!("join_custom:        {}", join_custom(&names, Some(", "), Some(" and ")));

    println!("\n=== Environment probes ===\n");
    println!("| Host | Browser | Blink | Focused | Weex |");
    println!("|------|---------|-------|---------|------|");
    for (name, env) in hosts() {
        let report = ProbeReport::collect(&env);
        println!(
            "| {} | {} | {} | {} | {} |",
            name,
            report.browser().unwrap_or("-"),
            report.is_blink,
            report.is_browser_tab_focused,
            report.weex_platform.as_deref().unwrap_or("-"),
        );
    }

    println!("\nThis process: in_browser = {}", ambient::in_browser());
}
