use duel_core::Character;

#[test]
fn new_character_starts_at_full_health_and_level_one() {
    let character = Character::new("Test", 10, 5, 100, true);

    assert_eq!(character.name, "Test");
    assert_eq!(character.max_hp, 100);
    assert_eq!(character.current_hp, 100);
    assert_eq!(character.attack, 10);
    assert_eq!(character.defense, 5);
    assert_eq!(character.experience, 0);
    assert_eq!(character.level, 1);
    assert!(!character.is_defending);
    assert_eq!(character.special_cooldown, 0);
    assert!(!character.confused);
    assert!(!character.skip_next_turn);
}

#[test]
fn take_damage_subtracts_and_reports_the_full_amount() {
    let mut character = Character::new("Test", 10, 5, 100, true);

    let actual = character.take_damage(30);

    assert_eq!(actual, 30);
    assert_eq!(character.current_hp, 70);
}

#[test]
fn defending_halves_damage_and_clears_the_stance() {
    let mut character = Character::new("Test", 10, 5, 100, true);
    character.is_defending = true;

    let actual = character.take_damage(25);

    // Integer floor division.
    assert_eq!(actual, 12);
    assert_eq!(character.current_hp, 88);
    assert!(!character.is_defending);
}

#[test]
fn defending_clears_even_when_the_hit_is_zero() {
    let mut character = Character::new("Test", 10, 5, 100, true);
    character.is_defending = true;

    let actual = character.take_damage(0);

    assert_eq!(actual, 0);
    assert_eq!(character.current_hp, 100);
    assert!(!character.is_defending);
}

#[test]
fn hp_may_go_negative_and_alive_is_strictly_positive() {
    let mut character = Character::new("Test", 10, 5, 100, true);

    character.take_damage(130);

    assert_eq!(character.current_hp, -30);
    assert!(!character.is_alive());

    character.current_hp = 0;
    assert!(!character.is_alive());

    character.current_hp = 1;
    assert!(character.is_alive());
}

#[test]
fn heal_clamps_to_max_hp() {
    let mut character = Character::new("Test", 10, 5, 100, true);
    character.current_hp = 90;

    character.heal(30);
    assert_eq!(character.current_hp, 100);

    character.current_hp = 40;
    character.heal(30);
    assert_eq!(character.current_hp, 70);
}

#[test]
fn one_hundred_experience_triggers_a_single_level_up() {
    let mut character = Character::new("Test", 10, 5, 100, true);
    character.current_hp = 60;

    character.gain_experience(100);

    assert_eq!(character.level, 2);
    assert_eq!(character.experience, 0);
    assert_eq!(character.max_hp, 110);
    // Leveling refills HP to the new maximum.
    assert_eq!(character.current_hp, 110);
    assert_eq!(character.attack, 12);
    assert_eq!(character.defense, 6);
}

#[test]
fn a_large_gain_levels_up_once_per_hundred_points() {
    let mut character = Character::new("Test", 10, 5, 100, true);

    character.gain_experience(250);

    assert_eq!(character.level, 3);
    assert_eq!(character.experience, 50);
    assert_eq!(character.max_hp, 120);
    assert_eq!(character.current_hp, 120);
    assert_eq!(character.attack, 14);
    assert_eq!(character.defense, 7);
}

#[test]
fn experience_stays_below_the_threshold_between_gains() {
    let mut character = Character::new("Test", 10, 5, 100, true);

    character.gain_experience(99);
    assert_eq!(character.level, 1);
    assert_eq!(character.experience, 99);

    character.gain_experience(1);
    assert_eq!(character.level, 2);
    assert_eq!(character.experience, 0);
}

#[test]
fn snapshot_exposes_the_presentation_view() {
    let mut character = Character::new("Test", 10, 5, 100, true);
    character.current_hp = 42;

    let snapshot = character.snapshot();

    assert_eq!(snapshot.name, "Test");
    assert_eq!(snapshot.current_hp, 42);
    assert_eq!(snapshot.max_hp, 100);
    assert_eq!(snapshot.level, 1);
}
