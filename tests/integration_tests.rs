//! Integration tests for classic-ciphers
//!
//! Exercises the public API the way the command-line driver does:
//! - Playfair golden vectors and round trips
//! - Alternate Playfair variants loaded from a config file
//! - Caesar and Vigenère textbook examples

use classic_ciphers::{
    build_key_table, caesar, normalize, playfair, playfair_with_config, prepare_digrams,
    prepare_digrams_with_config, strip_fillers, transform, vigenere, Alphabet, CipherConfig,
    CipherError, Direction, FillerPolicy, KeyTable, PlayfairConfig,
};

/// Test the PLAYFAIR reference table
#[test]
fn test_playfair_reference_table() {
    let table = build_key_table("PLAYFAIR").unwrap();
    assert_eq!(
        table.to_string(),
        "P L A Y F\nI R B C D\nE G H K M\nN O Q S T\nU V W X Z"
    );
}

/// Test that every key produces a complete 25-letter square
#[test]
fn test_table_completeness_for_many_keys() {
    let alphabet: Vec<char> = Alphabet::standard().letters().collect();
    let keys = [
        "a",
        "PLAYFAIR EXAMPLE",
        "jjjjj",
        "Zyxwvutsrqponmlkjihgfedcba",
        "Ñandú",
        "the quick brown fox jumps over the lazy dog",
    ];

    for key in keys {
        let table = build_key_table(key).unwrap();
        let mut letters = table.letters().to_vec();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters, alphabet, "key {:?}", key);
    }
}

/// Test the filler placement for BALLOON
#[test]
fn test_balloon_digrams() {
    assert_eq!(prepare_digrams("BALLOON").to_string(), "BA LX LO ON");
}

/// Test MONARCHY / INSTRUMENTS with the default X padding
#[test]
fn test_monarchy_instruments_default_padding() {
    let digrams = prepare_digrams("INSTRUMENTS");
    assert_eq!(digrams.to_string(), "IN ST RU ME NT SX");

    let cipher = playfair("INSTRUMENTS", "MONARCHY", Direction::Encrypt).unwrap();
    assert_eq!(cipher, "GA TL MZ CL RQ XA");
}

/// Test the textbook MONARCHY / INSTRUMENTS vector, which pads with Z
#[test]
fn test_monarchy_instruments_textbook_vector() {
    let config =
        PlayfairConfig::new(Alphabet::standard(), FillerPolicy::new('X', 'Q', 'Z')).unwrap();

    let digrams = prepare_digrams_with_config("INSTRUMENTS", &config);
    assert_eq!(digrams.to_string(), "IN ST RU ME NT SZ");

    let table = KeyTable::new("MONARCHY", &config).unwrap();
    let cipher = transform(&table, &digrams, Direction::Encrypt).unwrap();
    assert_eq!(cipher.to_compact_string(), "GATLMZCLRQTX");

    let plain = transform(&table, &cipher, Direction::Decrypt).unwrap();
    assert_eq!(strip_fillers(&plain, &config), "INSTRUMENTS");
}

/// Test that decrypting an encryption gives back the prepared digrams
#[test]
fn test_playfair_round_trip() {
    let keys = ["MONARCHY", "PLAYFAIR EXAMPLE", "key", "Öl und Wasser"];
    let texts = [
        "Meet me at the usual place at ten rather than eight o'clock",
        "Balloons and jellybeans",
        "xxx",
        "z",
        "",
    ];

    for key in keys {
        let table = build_key_table(key).unwrap();
        for text in texts {
            let digrams = prepare_digrams(text);
            assert!(digrams.iter().all(|d| !d.is_doubled()));

            let cipher = transform(&table, &digrams, Direction::Encrypt).unwrap();
            let plain = transform(&table, &cipher, Direction::Decrypt).unwrap();
            assert_eq!(plain, digrams, "key {:?} text {:?}", key, text);
        }
    }
}

/// Test the string-level helper in both directions
#[test]
fn test_playfair_string_round_trip() {
    let key = "playfair example";
    let cipher = playfair("Hide the gold in the tree stump", key, Direction::Encrypt).unwrap();
    assert_eq!(cipher, "BM OD ZB XD NA BE KU DM UI XM MO UV IF");

    let plain = playfair(&cipher, key, Direction::Decrypt).unwrap();
    assert_eq!(plain, "HI DE TH EG OL DI NT HE TR EX ES TU MP");
}

/// Test that a key without letters is rejected
#[test]
fn test_invalid_key() {
    assert_eq!(
        playfair("hello", "12345", Direction::Encrypt),
        Err(CipherError::InvalidKey)
    );
    assert_eq!(
        vigenere("hello", "", Direction::Encrypt),
        Err(CipherError::InvalidKey)
    );
    assert_eq!(
        playfair("abc", "🦄", Direction::Encrypt),
        Err(CipherError::InvalidKey)
    );
}

/// Test that symbols and emoji are dropped rather than spelled out
#[test]
fn test_symbols_never_become_letters() {
    assert_eq!(prepare_digrams("hi 🦄").to_string(), "HI");
    assert_eq!(caesar("hi 🦄", 1, Direction::Encrypt), "ij #");
    assert_eq!(
        playfair("hi ♥ there", "key", Direction::Encrypt).unwrap(),
        playfair("hithere", "key", Direction::Encrypt).unwrap()
    );
}

/// Test that normalization is idempotent
#[test]
fn test_normalization_idempotent() {
    let alphabet = Alphabet::standard();
    let once = normalize("Já é tarde, Joaquim!", &alphabet);
    assert_eq!(once, "IAETARDEIOAQUIM");
    assert_eq!(normalize(&once, &alphabet), once);
}

/// Test a Playfair variant configured through the TOML file
#[test]
fn test_variant_from_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[playfair]\nmerge_from = \"Q\"\nmerge_into = \"K\"\nalternate = \"Y\"\npadding = \"Z\"\n",
    )
    .unwrap();

    let config = CipherConfig::load_from(&path).unwrap().playfair_config().unwrap();
    assert_eq!(config.alphabet().merge_from(), 'Q');

    let table = KeyTable::new("JUMBO", &config).unwrap();
    assert_eq!(table.rows().next().unwrap(), ['J', 'U', 'M', 'B', 'O']);

    let cipher = playfair_with_config("quick jab", "JUMBO", Direction::Encrypt, &config).unwrap();
    let plain = playfair_with_config(&cipher, "JUMBO", Direction::Decrypt, &config).unwrap();
    assert_eq!(plain, "KU IC KI AB");
}

/// Test Caesar with the classic shift of three
#[test]
fn test_caesar_classic_shift() {
    let cipher = caesar("veni vidi vici", 3, Direction::Encrypt);
    assert_eq!(cipher, "yhql ylgl ylfl");
    assert_eq!(caesar(&cipher, 3, Direction::Decrypt), "veni vidi vici");
}

/// Test Vigenère with the textbook LEMON example
#[test]
fn test_vigenere_textbook() {
    let cipher = vigenere("attack at dawn", "LEMON", Direction::Encrypt).unwrap();
    assert_eq!(cipher, "LXFOPV EF RNHR");
    assert_eq!(
        vigenere(&cipher, "LEMON", Direction::Decrypt).unwrap(),
        "ATTACK AT DAWN"
    );
}
