//! Fun default name generation for stacks

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "swift", "eager", "bright", "steady", "dapper", "fluent", "golden", "humble", "jovial",
    "keen", "lively", "mellow", "nimble", "plucky", "quick", "rustic", "snappy", "trusty",
    "vivid", "witty",
];

const NOUNS: &[&str] = &[
    "basin", "channel", "depot", "dock", "funnel", "harbor", "inlet", "intake", "journal",
    "keeper", "ledger", "lockbox", "outpost", "quarry", "relay", "silo", "sluice", "vault",
    "wharf", "yard",
];

/// Generate a fun default name like "nimble-silo-2847"
pub(crate) fn generate() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    let number: u16 = rng.gen_range(1000..10000);
    format!("{}-{}-{}", adjective, noun, number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_name_format() {
        let name = generate();
        let parts: Vec<&str> = name.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(ADJECTIVES.contains(&parts[0]));
        assert!(NOUNS.contains(&parts[1]));
        let number: u16 = parts[2].parse().unwrap();
        assert!((1000..10000).contains(&number));
    }
}
