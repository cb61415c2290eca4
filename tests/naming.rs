// tests/naming.rs
use chrono::NaiveTime;
use post_coin_watcher::analyze::naming::{generate_name, generate_name_at, symbol_for};

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn doge_to_the_moon_becomes_dogecoin() {
    assert_eq!(generate_name("DOGE TO THE MOON"), "DogeCoin");
}

#[test]
fn first_surviving_token_wins() {
    assert_eq!(generate_name("I am at the Starbase today"), "StarbaseCoin");
    assert_eq!(generate_name("it is what it is"), "WhatCoin");
}

#[test]
fn symbol_only_text_falls_back_to_clock() {
    assert_eq!(generate_name_at("🚀🚀🚀", at(9, 5)), "ElonCoin0905");
    assert_eq!(generate_name_at("", at(23, 59)), "ElonCoin2359");
}

#[test]
fn non_latin_text_falls_back() {
    assert_eq!(generate_name_at("Луна 月 كريبتو", at(0, 0)), "ElonCoin0000");
}

#[test]
fn only_stop_words_and_short_tokens_fall_back() {
    assert_eq!(generate_name_at("to the on at ok no", at(12, 30)), "ElonCoin1230");
}

#[test]
fn name_is_never_empty() {
    for t in ["", " ", "🚀", "a b c", "the", "123 456", "日本語", "Mars"] {
        let n = generate_name(t);
        assert!(!n.is_empty(), "empty name for {t:?}");
        assert!(n.ends_with("Coin") || n.starts_with("ElonCoin"), "{n}");
    }
}

#[test]
fn symbol_is_first_six_uppercased() {
    assert_eq!(symbol_for("DogeCoin"), "DOGECO");
    assert_eq!(symbol_for("ElonCoin0905"), "ELONCO");
    assert_eq!(symbol_for("Ab"), "AB");
}
