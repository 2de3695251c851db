//! Property tests for the encoder, decoder and validator.

use base64_stream::{decode, encode, is_valid, Alphabet};
use proptest::prelude::*;

fn custom_alphabet() -> impl Strategy<Value = Alphabet> {
    let specials: Vec<char> = "!#$%&()*+,-./:;<>?@[]^_{|}~".chars().collect();
    proptest::sample::subsequence(specials, 3)
        .prop_shuffle()
        .prop_map(|c| Alphabet::new(c[0], c[1], c[2]).unwrap())
}

proptest! {
    #[test]
    fn round_trip_standard(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded: String = encode(&data, Alphabet::STANDARD).collect();
        let decoded: Vec<u8> = decode(encoded.chars(), Alphabet::STANDARD)
            .collect::<Result<_, _>>()
            .unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn round_trip_custom(
        data in proptest::collection::vec(any::<u8>(), 0..256),
        alphabet in custom_alphabet(),
    ) {
        let encoded: String = encode(&data, alphabet).collect();
        prop_assert!(is_valid(encoded.chars(), alphabet));
        let decoded: Vec<u8> = decode(encoded.chars(), alphabet)
            .collect::<Result<_, _>>()
            .unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn length_formula(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoder = encode(&data, Alphabet::STANDARD);
        let expected = data.len().div_ceil(3) * 4;
        prop_assert_eq!(encoder.size_hint(), (expected, Some(expected)));
        prop_assert_eq!(encoder.count(), expected);
    }

    #[test]
    fn encoder_output_is_valid(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert!(is_valid(encode(&data, Alphabet::STANDARD), Alphabet::STANDARD));
    }

    #[test]
    fn non_alphabet_mutation_is_invalid(
        data in proptest::collection::vec(any::<u8>(), 1..128),
        at in any::<prop::sample::Index>(),
        symbol in any::<char>().prop_filter("outside the alphabet", |c| {
            !c.is_ascii_alphanumeric() && !"+/=".contains(*c)
        }),
    ) {
        let mut encoded: Vec<char> = encode(&data, Alphabet::STANDARD).collect();
        let at = at.index(encoded.len());
        encoded[at] = symbol;
        prop_assert!(!is_valid(encoded, Alphabet::STANDARD));
    }

    #[test]
    fn padding_then_data_is_invalid(
        data in proptest::collection::vec(any::<u8>(), 0..64),
        tail in "[A-Za-z0-9+/]{3}",
    ) {
        let mut encoded: String = encode(&data, Alphabet::STANDARD).collect();
        encoded.push('=');
        encoded.push_str(&tail);
        prop_assert!(!is_valid(encoded.chars(), Alphabet::STANDARD));
    }
}
