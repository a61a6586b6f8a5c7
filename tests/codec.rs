use lsb_carrier::{
    Carrier, StegoError,
    bitstream::{decode, encode},
    constants::TERMINATOR,
    embed, extract,
};
use proptest::prelude::*;

/// 仅用于测试的内存载体：每个字节就是一个样本
#[derive(Debug, Clone)]
struct VecCarrier(Vec<u8>);

impl Carrier for VecCarrier {
    type Output = Vec<u8>;

    fn sample_count(&self) -> usize {
        self.0.len()
    }

    fn read_sample(&self, index: usize) -> u8 {
        self.0[index]
    }

    fn write_sample(&mut self, index: usize, bit: u8) {
        self.0[index] = (self.0[index] & !1) | (bit & 1);
    }

    fn finalize(self) -> Result<Vec<u8>, StegoError> {
        Ok(self.0)
    }
}

#[test]
fn test_encode_is_msb_first_with_terminator() -> anyhow::Result<()> {
    let bits = encode("A")?;

    // 'A' = 0x41 = 01000001
    assert_eq!(&bits[..8], &[0, 1, 0, 0, 0, 0, 0, 1]);
    assert_eq!(&bits[8..], &TERMINATOR);
    assert_eq!(encode("")?, TERMINATOR.to_vec());

    Ok(())
}

#[test]
fn test_encode_length() -> anyhow::Result<()> {
    assert_eq!(encode("Hi!!!")?.len(), 56);
    // Latin-1 字符同样占用 8 位
    assert_eq!(encode("café")?.len(), 4 * 8 + 16);
    Ok(())
}

#[test]
fn test_encode_rejects_wide_characters() {
    let result = encode("ok 测试");
    assert!(matches!(
        result,
        Err(StegoError::UnsupportedCharacter {
            character: '测',
            position: 3
        })
    ));
}

#[test]
fn test_decode_groups_of_eight() {
    let bits = [0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 0, 1];
    assert_eq!(decode(&bits), "Hi");
    assert_eq!(decode(&[]), "");
}

#[test]
fn test_decode_trailing_partial_group_uses_its_value() {
    assert_eq!(decode(&[0, 0, 0, 0, 0, 0, 1]), "\u{1}");
    assert_eq!(decode(&[0, 1, 0, 0, 0, 0, 0, 1, 1, 1]), "A\u{3}");
}

#[test]
fn test_hi_round_trip_in_exact_capacity() -> anyhow::Result<()> {
    let mut carrier = VecCarrier(vec![0x80; 56]);

    let written = embed(&mut carrier, "Hi!!!")?;

    assert_eq!(written, 56);
    assert_eq!(extract(&carrier).as_deref(), Some("Hi!!!"));
    Ok(())
}

#[test]
fn test_payload_too_large_leaves_carrier_unchanged() {
    let original: Vec<u8> = (0..40).map(|i| (i * 37) as u8).collect();
    let mut carrier = VecCarrier(original.clone());

    let result = embed(&mut carrier, "Hi!!!");

    assert!(matches!(
        result,
        Err(StegoError::PayloadTooLarge {
            required: 56,
            capacity: 40
        })
    ));
    assert_eq!(carrier.0, original);
}

#[test]
fn test_unsupported_character_leaves_carrier_unchanged() {
    let original = vec![0xAB; 200];
    let mut carrier = VecCarrier(original.clone());

    assert!(embed(&mut carrier, "héllo ✓").is_err());
    assert_eq!(carrier.0, original);
}

#[test]
fn test_fresh_carrier_is_not_found() {
    let carrier = VecCarrier(vec![0; 1000]);
    assert_eq!(extract(&carrier), None);

    // 全 1 的最低位同样没有结束标记末尾的 0
    let carrier = VecCarrier(vec![0xFF; 1000]);
    assert_eq!(extract(&carrier), None);
}

#[test]
fn test_empty_payload_round_trip() -> anyhow::Result<()> {
    let mut carrier = VecCarrier(vec![0; 64]);
    assert_eq!(embed(&mut carrier, "")?, 16);
    assert_eq!(extract(&carrier).as_deref(), Some(""));
    Ok(())
}

#[test]
fn test_terminator_inside_payload_cuts_message_short() -> anyhow::Result<()> {
    // 0xFF 0xFE 本身就是结束标记，提取在此处停止
    let mut carrier = VecCarrier(vec![0; 200]);
    embed(&mut carrier, "\u{FF}\u{FE}tail")?;
    assert_eq!(extract(&carrier).as_deref(), Some(""));

    // 非字节对齐的匹配：末尾不足 8 位的一组按数值解码
    let mut carrier = VecCarrier(vec![0; 200]);
    embed(&mut carrier, "\u{3}\u{FF}\u{FC}")?;
    assert_eq!(extract(&carrier).as_deref(), Some("\u{1}"));

    Ok(())
}

#[test]
fn test_finalize_returns_embedded_samples() -> anyhow::Result<()> {
    let mut carrier = VecCarrier(vec![0xFE; 32]);
    embed(&mut carrier, "")?;

    let samples = carrier.finalize()?;
    assert_eq!(&samples[..15], &[0xFF; 15]);
    assert_eq!(samples[15], 0xFE);
    assert_eq!(&samples[16..], &[0xFE; 16]);
    Ok(())
}

proptest! {
    #[test]
    fn prop_round_trip_touches_only_lsbs(
        payload in "[ -~]{0,40}",
        cover in proptest::collection::vec(any::<u8>(), 400..800),
    ) {
        let mut carrier = VecCarrier(cover.clone());
        let written = embed(&mut carrier, &payload).unwrap();

        prop_assert_eq!(written, payload.len() * 8 + 16);
        prop_assert_eq!(extract(&carrier), Some(payload.clone()));

        for (index, (before, after)) in cover.iter().zip(&carrier.0).enumerate() {
            prop_assert_eq!(before & !1, after & !1);
            if index >= written {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn prop_too_small_carrier_is_never_modified(
        payload in "[a-z]{1,20}",
        cover in proptest::collection::vec(any::<u8>(), 0..24),
    ) {
        let mut carrier = VecCarrier(cover.clone());
        let result = embed(&mut carrier, &payload);

        let is_too_large = matches!(result, Err(StegoError::PayloadTooLarge { .. }));
        prop_assert!(is_too_large);
        prop_assert_eq!(carrier.0, cover);
    }
}
