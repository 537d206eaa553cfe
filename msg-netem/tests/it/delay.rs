use std::{
    sync::{Mutex, MutexGuard},
    time::Duration,
};

use msg_netem::{Error, Netem};

const IFACE_ENV: &str = "MSG_NETEM_TEST_IFACE";

/// All tests share the root qdisc of the same interface.
static LOCK: Mutex<()> = Mutex::new(());

fn setup() -> (MutexGuard<'static, ()>, Netem) {
    let _ = tracing_subscriber::fmt::try_init();
    let guard = LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let iface = std::env::var(IFACE_ENV).unwrap_or_else(|_| "lo".to_string());
    let netem = Netem::from_interface(iface).unwrap();

    // Leftovers from a failed run.
    let _ = netem.delete_delay(Duration::ZERO);

    (guard, netem)
}

fn shown(netem: &Netem) -> String {
    netem.show().unwrap().join("")
}

#[test]
#[ignore = "requires tc and CAP_NET_ADMIN"]
fn add_delay_is_shown() {
    let (_guard, netem) = setup();

    let cases = [
        (Duration::from_millis(100), "delay 100.0ms"),
        (Duration::from_micros(2000), "delay 2.0ms"),
        (Duration::from_secs(2), "delay 2.0s"),
        (Duration::from_millis(5000), "delay 5.0s"),
        (Duration::from_secs(1), "delay 1.0s"),
    ];

    for (delay, expected) in cases {
        netem.add_delay(delay).unwrap();

        let output = shown(&netem);
        assert!(
            output.contains(expected),
            "expected {expected:?} for {delay:?}, tc output: {output}"
        );

        netem.delete_delay(delay).unwrap();
    }
}

#[test]
#[ignore = "requires tc and CAP_NET_ADMIN"]
fn duplicate_add_is_rejected() {
    let (_guard, netem) = setup();

    netem.add_delay(Duration::from_secs(1)).unwrap();
    let err = netem.add_delay(Duration::from_secs(1)).unwrap_err();

    assert!(matches!(err, Error::Tool(_)));
    assert!(
        err.to_string().contains("Exclusivity flag on, cannot modify"),
        "unexpected diagnostic: {err}"
    );

    netem.delete_delay(Duration::from_secs(1)).unwrap();
}

#[test]
#[ignore = "requires tc and CAP_NET_ADMIN"]
fn change_delay_replaces_value() {
    let (_guard, netem) = setup();

    let ms = Duration::from_millis;
    let cases = [
        (ms(100), ms(200), "delay 200.0ms", Some("delay 100.0ms")),
        (ms(2000), Duration::from_secs(2), "delay 2.0s", None),
        (Duration::from_secs(2), ms(500), "delay 500.0ms", Some("delay 2.0s")),
        (ms(5000), ms(1000), "delay 1.0s", Some("delay 5.0s")),
    ];

    for (delay, modified, expected, previous) in cases {
        netem.add_delay(delay).unwrap();
        netem.change_delay(modified).unwrap();

        let output = shown(&netem);
        assert!(output.contains(expected), "expected {expected:?}, tc output: {output}");
        if let Some(previous) = previous {
            assert!(!output.contains(previous), "{previous:?} still present, tc output: {output}");
        }

        netem.delete_delay(delay).unwrap();
    }
}

#[test]
#[ignore = "requires tc and CAP_NET_ADMIN"]
fn delete_delay_removes_rule() {
    let (_guard, netem) = setup();

    netem.add_delay(Duration::from_millis(100)).unwrap();
    assert!(shown(&netem).contains("netem"));

    netem.delete_delay(Duration::from_millis(100)).unwrap();

    let output = shown(&netem);
    assert!(!output.contains("netem"), "netem still attached, tc output: {output}");
}

#[test]
#[ignore = "requires tc and CAP_NET_ADMIN"]
fn change_without_rule_is_rejected() {
    let (_guard, netem) = setup();

    let err = netem.change_delay(Duration::from_millis(100)).unwrap_err();
    assert!(err.stderr().is_some_and(|stderr| !stderr.is_empty()));
}
