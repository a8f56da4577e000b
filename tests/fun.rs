use devbelt::fun::{coin_flip, pick, roll};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn pick_returns_one_of_the_options() {
    let options: Vec<String> = ["tea", "coffee", "water"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let choice = pick(&options, &mut rng).unwrap();
        assert!(options.iter().any(|o| o == choice));
    }
}

#[test]
fn pick_from_empty_list_is_an_error() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(pick(&[], &mut rng).is_err());
}

#[test]
fn single_option_always_wins() {
    let options = vec!["only".to_string()];
    let mut rng = StdRng::seed_from_u64(9);
    assert_eq!(pick(&options, &mut rng).unwrap(), "only");
}

#[test]
fn coin_is_heads_or_tails() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let side = coin_flip(&mut rng);
        assert!(side == "heads" || side == "tails");
    }
}

#[test]
fn roll_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let value = roll(6, &mut rng).unwrap();
        assert!((1..=6).contains(&value));
    }
}

#[test]
fn degenerate_dice_are_rejected() {
    let mut rng = StdRng::seed_from_u64(5);
    assert!(roll(0, &mut rng).is_err());
    assert!(roll(1, &mut rng).is_err());
}
