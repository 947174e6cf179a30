use skein::crypto::skein::{derive_iv, IV};
use skein::crypto::threefish::Threefish512;
use skein::crypto::{digest, Skein512};

fn descending(len: usize) -> Vec<u8> {
    (0..len).map(|i| 0xFF - i as u8).collect()
}

fn check(msg: &[u8], expected_hex: &str) {
    let expected = hex::decode(expected_hex).unwrap();
    assert_eq!(digest(msg).to_vec(), expected);
    let streamed = Skein512::new().chain_update(msg).finalize();
    assert_eq!(streamed.to_vec(), expected);
}

#[test]
// Skein 1.3 reference vectors, Skein-512-512
fn one_byte() {
    check(
        &descending(1),
        "71b7bce6fe6452227b9ced6014249e5bf9a9754c3ad618ccc4e0aae16b316cc8ca698d864307ed3e80b6ef1570812ac5272dc409b5a012df2a579102f340617a",
    );
}

#[test]
fn one_block() {
    check(
        &descending(64),
        "45863ba3be0c4dfc27e75d358496f4ac9a736a505d9313b42b2f5eada79fc17f63861e947afb1d056aa199575ad3f8c9a3cc1780b5e5fa4cae050e989876625b",
    );
}

#[test]
fn two_blocks() {
    check(
        &descending(128),
        "91cca510c263c4ddd010530a33073309628631f308747e1bcbaa90e451cab92e5188087af4188773a332303e6667a7a210856f742139000071f48e8ba2a5adb7",
    );
}

#[test]
fn empty() {
    check(
        b"",
        "bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af41fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a",
    );
}

#[test]
fn iv_from_config_block() {
    assert_eq!(derive_iv(512), IV);
}

#[test]
// Threefish-512 reference vector with counting key, tweak and plaintext
fn threefish_counting_vector() {
    let key: Vec<u8> = (0x10..0x50).collect();
    let tweak: Vec<u8> = (0x00..0x10).collect();
    let mut data = descending(64);
    let expected = hex::decode("e304439626d45a2cb401cad8d636249a6338330eb06d45dd8b36b90e97254779272a0a8d99463504784420ea18c9a725af11dffea10162348927673d5c1caf3d").unwrap();

    let tf = Threefish512::new(&key).unwrap();
    tf.encrypt(&tweak, &mut data).unwrap();
    assert_eq!(data, expected);
    tf.decrypt(&tweak, &mut data).unwrap();
    assert_eq!(data, descending(64));
}
