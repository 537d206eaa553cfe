//! Delay Round Trip
//!
//! Attaches a netem delay to an interface, prints the qdiscs `tc` reports, changes the delay,
//! prints them again and finally removes the rule.
//!
//! # Usage
//!
//! Requires `tc` on `PATH` and `CAP_NET_ADMIN`:
//!
//! ```bash
//! sudo -E cargo run -p msg-netem --example delay -- lo 100
//! ```
//!
//! The first argument is the interface (default `lo`), the second the delay in milliseconds
//! (default `100`). The changed delay is twice the initial one.

use std::time::Duration;

use msg_netem::Netem;

fn print_rules(netem: &Netem) -> msg_netem::Result<()> {
    for line in netem.show()?.iter().filter(|line| !line.is_empty()) {
        println!("  {line}");
    }

    Ok(())
}

fn main() -> msg_netem::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let iface = args.next().unwrap_or_else(|| "lo".to_string());
    let millis = args.next().and_then(|ms| ms.parse().ok()).unwrap_or(100);
    let delay = Duration::from_millis(millis);

    let netem = Netem::from_interface(&iface)?;
    println!("Using {} on {iface}", netem.path().display());

    netem.add_delay(delay)?;
    println!("After adding {delay:?}:");
    print_rules(&netem)?;

    netem.change_delay(delay * 2)?;
    println!("After changing to {:?}:", delay * 2);
    print_rules(&netem)?;

    netem.delete_delay(delay * 2)?;
    println!("After deleting:");
    print_rules(&netem)?;

    Ok(())
}
