//! Codec integration tests.

use pokercards::codec::{decode, encode, name_of, nocard, value_of};
use pokercards::{CardValue, DECK_SIZE, InvalidCard, NOCARD, Rank, Suit};

#[test]
fn names_resolve_to_suit_major_codes() {
    assert_eq!(value_of("2h"), Ok(0));
    assert_eq!(value_of("Ah"), Ok(12));
    assert_eq!(value_of("Ad"), Ok(25));
    assert_eq!(value_of("Kc"), Ok(37));
    assert_eq!(value_of("3s"), Ok(40));
    assert_eq!(value_of("Ts"), Ok(47));
    assert_eq!(value_of("As"), Ok(51));
}

#[test]
fn valid_codes_and_nocard_resolve_to_themselves() {
    for code in 0..DECK_SIZE as u8 {
        assert_eq!(value_of(code), Ok(code));
    }
    assert_eq!(value_of(NOCARD), Ok(NOCARD));
    assert_eq!(value_of(255_i64), Ok(NOCARD));
    assert_eq!(nocard(), 255);
}

#[test]
fn out_of_range_codes_are_rejected() {
    assert_eq!(value_of(52), Err(InvalidCard::Code(52)));
    assert_eq!(value_of(-1), Err(InvalidCard::Code(-1)));
    assert_eq!(value_of(254_u8), Err(InvalidCard::Code(254)));
    assert_eq!(value_of(256_i64), Err(InvalidCard::Code(256)));
}

#[test]
fn malformed_names_are_rejected() {
    for name in ["Aa", "", "A", "Ahh", "ah", "AH", "1h", "10h", " Ah", "Xs"] {
        assert_eq!(value_of(name), Err(InvalidCard::Name(name.to_owned())));
    }
}

#[test]
fn owned_names_resolve() {
    let name = String::from("Qd");
    assert_eq!(value_of(&name), Ok(23));
    assert_eq!(CardValue::from(&name), CardValue::Name("Qd"));
}

#[test]
fn error_messages_name_the_input() {
    assert_eq!(InvalidCard::Code(52).to_string(), "invalid card code 52");
    assert_eq!(
        InvalidCard::Name("Aa".to_owned()).to_string(),
        "invalid card name \"Aa\""
    );
}

#[test]
fn encode_and_decode_agree_with_names() {
    assert_eq!(encode(Rank::Ace, Suit::Hearts), 12);
    assert_eq!(encode(Rank::Three, Suit::Spades), 40);
    assert_eq!(decode(37), Some((Rank::King, Suit::Clubs)));
    assert_eq!(decode(NOCARD), None);
    assert_eq!(decode(52), None);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let code = encode(rank, suit);
            let name = format!("{rank}{suit}");
            assert_eq!(name_of(code).as_deref(), Some(name.as_str()));
            assert_eq!(value_of(name.as_str()), Ok(code));
        }
    }
}

#[test]
fn name_of_rejects_unknown_codes() {
    assert_eq!(name_of(NOCARD), None);
    assert_eq!(name_of(100), None);
}

#[test]
fn symbols_parse_back() {
    assert_eq!(Suit::from_symbol('d'), Some(Suit::Diamonds));
    assert_eq!(Suit::from_symbol('x'), None);
    assert_eq!(Rank::from_symbol('T'), Some(Rank::Ten));
    assert_eq!(Rank::from_symbol('t'), None);
    assert_eq!(Rank::Ten.to_string(), "T");
    assert_eq!(Suit::Clubs.index(), 2);
    assert_eq!(Rank::Ace.index(), 12);
}
